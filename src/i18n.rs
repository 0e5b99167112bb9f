//! Translation tables for the shell and the five screens.
//!
//! Screen rendering is parameterized over a single [`UiStrings`] table
//! rather than duplicating every screen per language. Only English and
//! Hindi carry a full table: [`RenderLanguage::from_code`] maps `"hi"` to
//! the Hindi table and every other catalog code to English. The language
//! catalog intentionally lists more languages than have tables; those
//! selections render the English variant until their tables are written.

use serde::{Deserialize, Serialize};

/// Language a screen is actually rendered in. Binary on purpose: the
/// screen-level translation tables only exist for English and Hindi.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderLanguage {
    English,
    Hindi,
}

impl RenderLanguage {
    /// Resolve a catalog language code to a renderable language.
    /// Everything that is not `"hi"` falls back to English.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        if code == "hi" {
            Self::Hindi
        } else {
            Self::English
        }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
        }
    }
}

/// A string with both renderings, for mock content that is itself
/// localized (alert messages, report titles, relative times).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalizedText {
    pub en: &'static str,
    pub hi: &'static str,
}

impl LocalizedText {
    #[must_use]
    pub const fn new(en: &'static str, hi: &'static str) -> Self {
        Self { en, hi }
    }

    #[must_use]
    pub const fn pick(&self, lang: RenderLanguage) -> &'static str {
        match lang {
            RenderLanguage::English => self.en,
            RenderLanguage::Hindi => self.hi,
        }
    }
}

pub struct NavStrings {
    pub updates: &'static str,
    pub map: &'static str,
    pub reports: &'static str,
    pub report: &'static str,
    pub profile: &'static str,
}

pub struct UpdatesStrings {
    pub title: &'static str,
    pub search_placeholder: &'static str,
    pub urgent_alerts: &'static str,
    pub citizen_reports: &'static str,
    pub social_highlights: &'static str,
    pub load_more: &'static str,
}

pub struct MapStrings {
    pub title: &'static str,
    pub filter_heading: &'static str,
    pub event_type: &'static str,
    pub date_range: &'static str,
    pub status: &'static str,
    pub all_types: &'static str,
    pub all_dates: &'static str,
    pub today: &'static str,
    pub this_week: &'static str,
    pub this_month: &'static str,
    pub all_statuses: &'static str,
    pub verified_only: &'static str,
    pub unverified_only: &'static str,
    pub show_heatmap: &'static str,
    pub legend: &'static str,
    pub recent_in_area: &'static str,
    pub view_details: &'static str,
}

pub struct MyReportsStrings {
    pub title: &'static str,
    pub tab_all: &'static str,
    pub tab_submitted: &'static str,
    pub tab_verified: &'static str,
    pub tab_resolved: &'static str,
    pub empty_heading: &'static str,
    pub empty_all: &'static str,
    pub empty_filtered: &'static str,
}

pub struct ReportFormStrings {
    pub title: &'static str,
    pub upload_media: &'static str,
    pub upload_hint: &'static str,
    pub choose_files: &'static str,
    pub description: &'static str,
    pub description_placeholder: &'static str,
    pub location: &'static str,
    pub location_auto: &'static str,
    pub location_placeholder: &'static str,
    pub pin_on_map: &'static str,
    pub event_type: &'static str,
    pub event_type_placeholder: &'static str,
    pub offline_label: &'static str,
    pub offline_hint: &'static str,
    pub submit: &'static str,
    pub save_offline: &'static str,
    pub submitted_toast: &'static str,
    pub saved_toast: &'static str,
    pub incomplete_toast: &'static str,
}

pub struct ProfileStrings {
    pub title: &'static str,
    pub member_since: &'static str,
    pub edit: &'static str,
    pub total_reports: &'static str,
    pub verified_reports: &'static str,
    pub language_heading: &'static str,
    pub notifications_heading: &'static str,
    pub notif_alerts: &'static str,
    pub notif_alerts_hint: &'static str,
    pub notif_reports: &'static str,
    pub notif_reports_hint: &'static str,
    pub notif_updates: &'static str,
    pub notif_updates_hint: &'static str,
    pub notif_social: &'static str,
    pub notif_social_hint: &'static str,
    pub privacy: &'static str,
    pub privacy_hint: &'static str,
    pub help: &'static str,
    pub help_hint: &'static str,
    pub logout: &'static str,
}

pub struct CommonStrings {
    pub status_submitted: &'static str,
    pub status_verified: &'static str,
    pub status_resolved: &'static str,
    pub select_language: &'static str,
    pub search_languages: &'static str,
    pub current_language: &'static str,
}

/// Full string table for one render language.
pub struct UiStrings {
    pub nav: NavStrings,
    pub updates: UpdatesStrings,
    pub map: MapStrings,
    pub reports: MyReportsStrings,
    pub report_form: ReportFormStrings,
    pub profile: ProfileStrings,
    pub common: CommonStrings,
}

impl UiStrings {
    #[must_use]
    pub fn for_language(lang: RenderLanguage) -> &'static Self {
        match lang {
            RenderLanguage::English => &EN,
            RenderLanguage::Hindi => &HI,
        }
    }
}

pub static EN: UiStrings = UiStrings {
    nav: NavStrings {
        updates: "Updates",
        map: "Map",
        reports: "My Reports",
        report: "Report Hazard",
        profile: "Profile",
    },
    updates: UpdatesStrings {
        title: "Ocean Hazard Updates",
        search_placeholder: "Search updates or ask AI...",
        urgent_alerts: "Urgent Alerts",
        citizen_reports: "Recent Citizen Reports",
        social_highlights: "Social Media Highlights",
        load_more: "Load More Updates",
    },
    map: MapStrings {
        title: "Hazard Map",
        filter_heading: "Filter Reports",
        event_type: "Event Type",
        date_range: "Date Range",
        status: "Status",
        all_types: "All Types",
        all_dates: "All Time",
        today: "Today",
        this_week: "This Week",
        this_month: "This Month",
        all_statuses: "All Status",
        verified_only: "Verified Only",
        unverified_only: "Unverified Only",
        show_heatmap: "Show Heatmap",
        legend: "Legend",
        recent_in_area: "Recent Reports in Area",
        view_details: "View Details",
    },
    reports: MyReportsStrings {
        title: "My Reports",
        tab_all: "All",
        tab_submitted: "Submitted",
        tab_verified: "Verified",
        tab_resolved: "Resolved",
        empty_heading: "No Reports Found",
        empty_all: "You haven't submitted any reports yet.",
        empty_filtered: "No matching reports found.",
    },
    report_form: ReportFormStrings {
        title: "Report Hazard",
        upload_media: "Upload Media",
        upload_hint: "Add photos or videos of the hazard",
        choose_files: "Choose Files",
        description: "Description",
        description_placeholder: "Describe the hazard in detail...",
        location: "Location",
        location_auto: "Auto-detected: Marina Beach, Chennai",
        location_placeholder: "Or enter location manually...",
        pin_on_map: "Pin on Map",
        event_type: "Event Type",
        event_type_placeholder: "Select hazard type",
        offline_label: "Save & Sync Later",
        offline_hint:
            "Enable this to save your report offline and sync when connection is available",
        submit: "Submit Report",
        save_offline: "Save Report",
        submitted_toast: "Report submitted",
        saved_toast: "Report saved",
        incomplete_toast: "Select a hazard type and describe or photograph the hazard",
    },
    profile: ProfileStrings {
        title: "Profile & Settings",
        member_since: "Member since",
        edit: "Edit",
        total_reports: "Total Reports",
        verified_reports: "Verified Reports",
        language_heading: "Language Preference",
        notifications_heading: "Notifications",
        notif_alerts: "Emergency Alerts",
        notif_alerts_hint: "Critical hazard warnings",
        notif_reports: "Report Updates",
        notif_reports_hint: "Status changes on your reports",
        notif_updates: "General Updates",
        notif_updates_hint: "App news and features",
        notif_social: "Social Media Highlights",
        notif_social_hint: "Trending hazard posts",
        privacy: "Privacy & Security",
        privacy_hint: "Manage your privacy settings",
        help: "Help & Support",
        help_hint: "Get help or contact support",
        logout: "Logout",
    },
    common: CommonStrings {
        status_submitted: "Submitted",
        status_verified: "Verified",
        status_resolved: "Resolved",
        select_language: "Select Language",
        search_languages: "Search languages...",
        current_language: "Current Language",
    },
};

pub static HI: UiStrings = UiStrings {
    nav: NavStrings {
        updates: "अपडेट",
        map: "नक्शा",
        reports: "मेरी रिपोर्टें",
        report: "रिपोर्ट करें",
        profile: "प्रोफ़ाइल",
    },
    updates: UpdatesStrings {
        title: "समुद्री खतरे की जानकारी",
        search_placeholder: "अपडेट खोजें या AI से पूछें…",
        urgent_alerts: "तात्कालिक चेतावनी",
        citizen_reports: "हाल के नागरिक रिपोर्ट",
        social_highlights: "सोशल मीडिया मुख्य समाचार",
        load_more: "और अपडेट देखें",
    },
    map: MapStrings {
        title: "खतरों का नक्शा",
        filter_heading: "रिपोर्ट फ़िल्टर करें",
        event_type: "घटना का प्रकार",
        date_range: "दिनांक सीमा",
        status: "स्थिति",
        all_types: "सभी प्रकार",
        all_dates: "सभी दिनांक",
        today: "आज",
        this_week: "इस सप्ताह",
        this_month: "इस महीने",
        all_statuses: "सभी स्थिति",
        verified_only: "सत्यापित",
        unverified_only: "असत्यापित",
        show_heatmap: "हीटमैप दिखाएं",
        legend: "संकेत",
        recent_in_area: "क्षेत्र की हाल की रिपोर्टें",
        view_details: "विवरण देखें",
    },
    reports: MyReportsStrings {
        title: "मेरी रिपोर्टें",
        tab_all: "सभी",
        tab_submitted: "जमा की गई",
        tab_verified: "सत्यापित",
        tab_resolved: "हल की गई",
        empty_heading: "कोई रिपोर्ट नहीं मिली",
        empty_all: "आपने अभी तक कोई रिपोर्ट जमा नहीं की है।",
        empty_filtered: "कोई मेल खाती रिपोर्ट नहीं मिली।",
    },
    report_form: ReportFormStrings {
        title: "खतरे की रिपोर्ट करें",
        upload_media: "मीडिया अपलोड करें",
        upload_hint: "खतरे की तस्वीरें या वीडियो जोड़ें",
        choose_files: "फ़ाइलें चुनें",
        description: "विवरण",
        description_placeholder: "खतरे का विस्तार से वर्णन करें…",
        location: "स्थान",
        location_auto: "स्वतः पता लगाया गया: मरीना बीच, चेन्नई",
        location_placeholder: "या स्थान स्वयं दर्ज करें…",
        pin_on_map: "नक्शे पर पिन करें",
        event_type: "घटना का प्रकार",
        event_type_placeholder: "खतरे का प्रकार चुनें",
        offline_label: "बाद में सहेजें और सिंक करें",
        offline_hint: "रिपोर्ट ऑफ़लाइन सहेजने और कनेक्शन मिलने पर सिंक करने के लिए चालू करें",
        submit: "रिपोर्ट जमा करें",
        save_offline: "रिपोर्ट सहेजें",
        submitted_toast: "रिपोर्ट जमा की गई",
        saved_toast: "सहेजा गया!",
        incomplete_toast: "खतरे का प्रकार चुनें और उसका विवरण या फ़ोटो जोड़ें",
    },
    profile: ProfileStrings {
        title: "प्रोफ़ाइल और सेटिंग्स",
        member_since: "सदस्यता",
        edit: "संपादित करें",
        total_reports: "कुल रिपोर्टें",
        verified_reports: "सत्यापित रिपोर्टें",
        language_heading: "भाषा प्राथमिकता",
        notifications_heading: "सूचनाएं",
        notif_alerts: "आपातकालीन चेतावनी",
        notif_alerts_hint: "गंभीर खतरों की चेतावनियां",
        notif_reports: "रिपोर्ट अपडेट",
        notif_reports_hint: "आपकी रिपोर्टों की स्थिति में बदलाव",
        notif_updates: "सामान्य अपडेट",
        notif_updates_hint: "ऐप समाचार और सुविधाएं",
        notif_social: "सोशल मीडिया मुख्य समाचार",
        notif_social_hint: "चर्चित खतरा पोस्ट",
        privacy: "गोपनीयता सेटिंग्स",
        privacy_hint: "अपनी गोपनीयता सेटिंग्स प्रबंधित करें",
        help: "सहायता और समर्थन",
        help_hint: "सहायता प्राप्त करें या समर्थन से संपर्क करें",
        logout: "लॉग आउट",
    },
    common: CommonStrings {
        status_submitted: "जमा किया गया",
        status_verified: "सत्यापित",
        status_resolved: "हल किया गया",
        select_language: "भाषा चुनें",
        search_languages: "भाषाएं खोजें…",
        current_language: "वर्तमान भाषा",
    },
};
