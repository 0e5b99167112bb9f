//! The headless app core. Shells feed [`Event`]s in, resolve timer and
//! telemetry effects, and re-render on [`crux_core::render::Render`].

use uuid::Uuid;

use crate::capabilities::{Capabilities, TimerOutput};
use crate::event::Event;
use crate::i18n::UiStrings;
use crate::model::{LanguageMenuState, Model, ToastKind, ToastMessage};
use crate::screens::report_form::SubmitOutcome;
use crate::view::{self, ViewModel};
use crate::NAV_AUTO_COLLAPSE_MS;

#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        // Any interaction expands the bar and restarts the idle
        // countdown. The manual toggle below manages visibility itself.
        if event.is_user_initiated() && !matches!(event, Event::NavToggled) {
            Self::restart_idle_countdown(model, caps);
        }

        let event_name = event.name();
        match event {
            Event::AppStarted | Event::AppForegrounded => {
                Self::restart_idle_countdown(model, caps);
                caps.telemetry.event(event_name, None);
            }
            Event::AppBackgrounded => {
                if let Some(token) = model.nav.disarm() {
                    caps.timer.cancel(token);
                }
                return;
            }

            Event::ScreenSelected(screen) => {
                if let Some(previous) = model.router.navigate(screen) {
                    model.reset_screen(previous);
                    caps.telemetry.event("screen_selected", Some(screen.name().into()));
                }
            }
            Event::ScreenRequested { ref name } => match model.router.navigate_named(name) {
                Ok(Some(previous)) => {
                    model.reset_screen(previous);
                    caps.telemetry.event("screen_selected", Some(name.clone()));
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(screen = %name, "ignoring navigation to unknown screen");
                    caps.telemetry.warn(err.to_string());
                }
            },
            Event::NavToggled => {
                if let Some(displaced) = model.nav.outstanding() {
                    caps.timer.cancel(displaced);
                }
                let token = model.nav.toggle();
                caps.timer.start(token, NAV_AUTO_COLLAPSE_MS, Event::NavTimerResolved);
            }
            Event::NavTimerResolved(TimerOutput::Elapsed { token }) => {
                if !model.nav.timer_elapsed(token) {
                    return;
                }
                caps.telemetry.count("nav_auto_collapsed", 1);
            }
            Event::NavTimerResolved(TimerOutput::Cancelled { .. }) => return,

            Event::LanguageMenuOpened => model.language_menu.open = true,
            Event::LanguageMenuClosed => model.language_menu = LanguageMenuState::default(),
            Event::LanguageSearchChanged(query) => model.language_menu.search = query,
            Event::LanguageSelected { ref code } => match model.language.select(code) {
                Ok(language) => {
                    model.language_menu = LanguageMenuState::default();
                    caps.telemetry.event("language_selected", Some(language.code.into()));
                }
                Err(err) => {
                    // Selection errors are recovered silently; the
                    // current language stays in effect.
                    tracing::warn!(%code, "ignoring unknown language selection");
                    caps.telemetry.warn(err.to_string());
                }
            },

            Event::UpdatesSearchChanged(query) => model.updates.search = query,

            Event::MapHazardFilterChanged(hazard) => model.map.hazard_filter = hazard,
            Event::MapDateFilterChanged(filter) => model.map.date_filter = filter,
            Event::MapStatusFilterChanged(filter) => model.map.status_filter = filter,
            Event::MapHeatmapToggled => model.map.show_heatmap = !model.map.show_heatmap,
            Event::MapMarkerSelected(index) => model.map.selected_marker = index,

            Event::ReportsTabSelected(tab) => model.my_reports.tab = tab,

            Event::ReportHazardTypeSelected(hazard) => {
                model.report_form.hazard_type = Some(hazard);
            }
            Event::ReportDescriptionChanged(text) => model.report_form.description = text,
            Event::ReportLocationChanged(text) => model.report_form.location = text,
            Event::ReportMediaAttached(file) => model.report_form.media.push(file),
            Event::ReportOfflineToggled => {
                model.report_form.save_offline = !model.report_form.save_offline;
            }
            Event::ReportSubmitted => {
                let strings =
                    &UiStrings::for_language(model.language.render_language()).report_form;
                match model.report_form.submit() {
                    Ok(outcome) => {
                        let report_id = Uuid::new_v4();
                        let (message, metric) = match outcome {
                            SubmitOutcome::Submitted => {
                                (strings.submitted_toast, "report_submitted")
                            }
                            SubmitOutcome::SavedOffline => {
                                (strings.saved_toast, "report_saved_offline")
                            }
                        };
                        model.active_toast =
                            Some(ToastMessage::new(message, ToastKind::Success));
                        caps.telemetry.event(metric, Some(report_id.to_string()));
                    }
                    Err(err) => {
                        model.active_toast =
                            Some(ToastMessage::new(strings.incomplete_toast, ToastKind::Warning));
                        tracing::debug!(%err, "report form rejected");
                    }
                }
            }

            Event::NotificationToggled(kind) => model.profile.toggle(kind),

            Event::ToastDismissed => model.active_toast = None,
        }

        caps.render.render();
    }

    fn view(&self, model: &Model) -> ViewModel {
        view::build(model)
    }
}

impl App {
    /// Cancel the in-flight idle timer, if any, then arm a fresh one.
    /// The shell holds at most one pending timer per core instance.
    fn restart_idle_countdown(model: &mut Model, caps: &Capabilities) {
        if let Some(displaced) = model.nav.outstanding() {
            caps.timer.cancel(displaced);
        }
        let token = model.nav.interact();
        caps.timer.start(token, NAV_AUTO_COLLAPSE_MS, Event::NavTimerResolved);
    }
}
