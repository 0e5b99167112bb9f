//! Profile and settings: user card, report stats, language preference
//! entry point and notification toggles.

use serde::{Deserialize, Serialize};

use crate::i18n::{LocalizedText, RenderLanguage, UiStrings};

struct UserCard {
    name: LocalizedText,
    location: LocalizedText,
    member_since: LocalizedText,
    total_reports: u32,
    verified_reports: u32,
}

static USER: UserCard = UserCard {
    name: LocalizedText::new("Priya Sharma", "अमित शर्मा"),
    location: LocalizedText::new("Chennai, Tamil Nadu", "चेन्नई, तमिलनाडु"),
    member_since: LocalizedText::new("Jan 2024", "जनवरी 2024"),
    total_reports: 12,
    verified_reports: 8,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    EmergencyAlerts,
    ReportUpdates,
    GeneralUpdates,
    SocialHighlights,
}

/// Local state of the profile screen. Defaults mirror a fresh account:
/// everything on except general updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfileState {
    pub emergency_alerts: bool,
    pub report_updates: bool,
    pub general_updates: bool,
    pub social_highlights: bool,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            emergency_alerts: true,
            report_updates: true,
            general_updates: false,
            social_highlights: true,
        }
    }
}

impl ProfileState {
    pub fn toggle(&mut self, kind: NotificationKind) {
        let flag = match kind {
            NotificationKind::EmergencyAlerts => &mut self.emergency_alerts,
            NotificationKind::ReportUpdates => &mut self.report_updates,
            NotificationKind::GeneralUpdates => &mut self.general_updates,
            NotificationKind::SocialHighlights => &mut self.social_highlights,
        };
        *flag = !*flag;
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationToggleView {
    pub kind: NotificationKind,
    pub label: String,
    pub hint: String,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileView {
    pub title: String,
    pub name: String,
    pub location: String,
    pub member_since: String,
    pub edit_label: String,
    pub total_reports: u32,
    pub total_reports_label: String,
    pub verified_reports: u32,
    pub verified_reports_label: String,
    pub language_heading: String,
    pub current_language_label: String,
    pub current_language: String,
    pub notifications_heading: String,
    pub notifications: Vec<NotificationToggleView>,
    pub privacy_label: String,
    pub privacy_hint: String,
    pub help_label: String,
    pub help_hint: String,
    pub logout_label: String,
}

#[must_use]
pub fn view(state: &ProfileState, lang: RenderLanguage, current_language: &str) -> ProfileView {
    let table = UiStrings::for_language(lang);
    let strings = &table.profile;

    let notifications = vec![
        NotificationToggleView {
            kind: NotificationKind::EmergencyAlerts,
            label: strings.notif_alerts.into(),
            hint: strings.notif_alerts_hint.into(),
            enabled: state.emergency_alerts,
        },
        NotificationToggleView {
            kind: NotificationKind::ReportUpdates,
            label: strings.notif_reports.into(),
            hint: strings.notif_reports_hint.into(),
            enabled: state.report_updates,
        },
        NotificationToggleView {
            kind: NotificationKind::GeneralUpdates,
            label: strings.notif_updates.into(),
            hint: strings.notif_updates_hint.into(),
            enabled: state.general_updates,
        },
        NotificationToggleView {
            kind: NotificationKind::SocialHighlights,
            label: strings.notif_social.into(),
            hint: strings.notif_social_hint.into(),
            enabled: state.social_highlights,
        },
    ];

    ProfileView {
        title: strings.title.into(),
        name: USER.name.pick(lang).into(),
        location: USER.location.pick(lang).into(),
        member_since: format!("{} {}", strings.member_since, USER.member_since.pick(lang)),
        edit_label: strings.edit.into(),
        total_reports: USER.total_reports,
        total_reports_label: strings.total_reports.into(),
        verified_reports: USER.verified_reports,
        verified_reports_label: strings.verified_reports.into(),
        language_heading: strings.language_heading.into(),
        current_language_label: table.common.current_language.into(),
        current_language: current_language.into(),
        notifications_heading: strings.notifications_heading.into(),
        notifications,
        privacy_label: strings.privacy.into(),
        privacy_hint: strings.privacy_hint.into(),
        help_label: strings.help.into(),
        help_hint: strings.help_hint.into(),
        logout_label: strings.logout.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fresh_account() {
        let state = ProfileState::default();
        assert!(state.emergency_alerts);
        assert!(state.report_updates);
        assert!(!state.general_updates);
        assert!(state.social_highlights);
    }

    #[test]
    fn toggle_flips_only_the_named_switch() {
        let mut state = ProfileState::default();
        state.toggle(NotificationKind::GeneralUpdates);
        assert!(state.general_updates);
        assert!(state.emergency_alerts);

        state.toggle(NotificationKind::GeneralUpdates);
        assert!(!state.general_updates);
    }

    #[test]
    fn view_reflects_toggle_state_and_stats() {
        let mut state = ProfileState::default();
        state.toggle(NotificationKind::EmergencyAlerts);

        let view = view(&state, RenderLanguage::English, "English");
        assert_eq!(view.total_reports, 12);
        assert_eq!(view.verified_reports, 8);
        assert!(!view.notifications[0].enabled);
        assert!(view.notifications[1].enabled);
        assert_eq!(view.current_language, "English");
    }

    #[test]
    fn hindi_profile_swaps_user_card() {
        let view = view(&ProfileState::default(), RenderLanguage::Hindi, "हिन्दी");
        assert_eq!(view.name, "अमित शर्मा");
        assert_eq!(view.member_since, "सदस्यता जनवरी 2024");
    }
}
