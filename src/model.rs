//! The app model: shared language preference, router, navigation bar
//! state and each screen's local state.

use serde::{Deserialize, Serialize};

use crate::language::LanguagePreference;
use crate::navigation::{NavVisibility, ScreenId, ScreenRouter};
use crate::screens::map::MapState;
use crate::screens::my_reports::MyReportsState;
use crate::screens::profile::ProfileState;
use crate::screens::report_form::ReportFormState;
use crate::screens::updates::UpdatesState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    #[must_use]
    pub const fn default_duration_ms(self) -> u64 {
        match self {
            Self::Info => 3000,
            Self::Success => 2000,
            Self::Warning => 4000,
            Self::Error => 5000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastMessage {
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u64,
}

impl ToastMessage {
    #[must_use]
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            duration_ms: kind.default_duration_ms(),
        }
    }
}

/// The language picker overlay, reachable from the profile screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LanguageMenuState {
    pub open: bool,
    pub search: String,
}

#[derive(Debug, Default)]
pub struct Model {
    pub language: LanguagePreference,
    pub router: ScreenRouter,
    pub nav: NavVisibility,
    pub language_menu: LanguageMenuState,
    pub updates: UpdatesState,
    pub map: MapState,
    pub my_reports: MyReportsState,
    pub report_form: ReportFormState,
    pub profile: ProfileState,
    pub active_toast: Option<ToastMessage>,
}

impl Model {
    /// Drop a screen's local state, as if the shell unmounted it.
    /// Navigating back shows the screen freshly mounted.
    pub fn reset_screen(&mut self, screen: ScreenId) {
        match screen {
            ScreenId::Updates => self.updates = UpdatesState::default(),
            ScreenId::Map => self.map = MapState::default(),
            ScreenId::Reports => self.my_reports = MyReportsState::default(),
            ScreenId::Report => self.report_form = ReportFormState::default(),
            ScreenId::Profile => {
                // Notification settings persist; only the picker overlay
                // is part of the mounted screen.
                self.language_menu = LanguageMenuState::default();
            }
        }
    }
}
