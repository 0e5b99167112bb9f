//! Events the shell feeds into the core. Everything the user can do in
//! the five screens plus app lifecycle and timer completions.

use serde::{Deserialize, Serialize};

use crate::capabilities::TimerOutput;
use crate::navigation::ScreenId;
use crate::screens::map::{DateFilter, StatusFilter};
use crate::screens::my_reports::ReportsTab;
use crate::screens::profile::NotificationKind;
use crate::screens::HazardType;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    // Lifecycle
    AppStarted,
    AppForegrounded,
    AppBackgrounded,

    // Navigation
    ScreenSelected(ScreenId),
    ScreenRequested { name: String },
    NavToggled,
    NavTimerResolved(TimerOutput),

    // Language
    LanguageMenuOpened,
    LanguageMenuClosed,
    LanguageSearchChanged(String),
    LanguageSelected { code: String },

    // Updates feed
    UpdatesSearchChanged(String),

    // Map
    MapHazardFilterChanged(Option<HazardType>),
    MapDateFilterChanged(DateFilter),
    MapStatusFilterChanged(StatusFilter),
    MapHeatmapToggled,
    MapMarkerSelected(Option<usize>),

    // My reports
    ReportsTabSelected(ReportsTab),

    // Report form
    ReportHazardTypeSelected(HazardType),
    ReportDescriptionChanged(String),
    ReportLocationChanged(String),
    ReportMediaAttached(String),
    ReportOfflineToggled,
    ReportSubmitted,

    // Profile
    NotificationToggled(NotificationKind),

    // Toasts
    ToastDismissed,
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AppStarted => "app_started",
            Self::AppForegrounded => "app_foregrounded",
            Self::AppBackgrounded => "app_backgrounded",
            Self::ScreenSelected(_) => "screen_selected",
            Self::ScreenRequested { .. } => "screen_requested",
            Self::NavToggled => "nav_toggled",
            Self::NavTimerResolved(_) => "nav_timer_resolved",
            Self::LanguageMenuOpened => "language_menu_opened",
            Self::LanguageMenuClosed => "language_menu_closed",
            Self::LanguageSearchChanged(_) => "language_search_changed",
            Self::LanguageSelected { .. } => "language_selected",
            Self::UpdatesSearchChanged(_) => "updates_search_changed",
            Self::MapHazardFilterChanged(_) => "map_hazard_filter_changed",
            Self::MapDateFilterChanged(_) => "map_date_filter_changed",
            Self::MapStatusFilterChanged(_) => "map_status_filter_changed",
            Self::MapHeatmapToggled => "map_heatmap_toggled",
            Self::MapMarkerSelected(_) => "map_marker_selected",
            Self::ReportsTabSelected(_) => "reports_tab_selected",
            Self::ReportHazardTypeSelected(_) => "report_hazard_type_selected",
            Self::ReportDescriptionChanged(_) => "report_description_changed",
            Self::ReportLocationChanged(_) => "report_location_changed",
            Self::ReportMediaAttached(_) => "report_media_attached",
            Self::ReportOfflineToggled => "report_offline_toggled",
            Self::ReportSubmitted => "report_submitted",
            Self::NotificationToggled(_) => "notification_toggled",
            Self::ToastDismissed => "toast_dismissed",
        }
    }

    /// Whether this event came from a user interaction. Interactions
    /// expand the navigation bar and restart its idle countdown.
    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        !matches!(
            self,
            Self::AppStarted
                | Self::AppForegrounded
                | Self::AppBackgrounded
                | Self::NavTimerResolved(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavVisibility;

    #[test]
    fn lifecycle_and_timer_events_are_not_interactions() {
        let mut nav = NavVisibility::default();
        let token = nav.arm();
        for event in [
            Event::AppStarted,
            Event::AppForegrounded,
            Event::AppBackgrounded,
            Event::NavTimerResolved(TimerOutput::Elapsed { token }),
        ] {
            assert!(!event.is_user_initiated(), "{}", event.name());
        }
    }

    #[test]
    fn screen_taps_are_interactions() {
        assert!(Event::ScreenSelected(ScreenId::Map).is_user_initiated());
        assert!(Event::ToastDismissed.is_user_initiated());
        assert!(Event::LanguageSelected { code: "hi".into() }.is_user_initiated());
    }

    #[test]
    fn events_serialize_for_the_shell_bridge() {
        let event = Event::LanguageSelected { code: "hi".into() };
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
