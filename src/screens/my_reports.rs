//! The user's own report history, filterable by status tab.

use serde::{Deserialize, Serialize};

use crate::i18n::{LocalizedText, RenderLanguage, UiStrings};

use super::ReportStatus;

struct OwnReport {
    title: LocalizedText,
    description: LocalizedText,
    location: LocalizedText,
    submitted_at: &'static str,
    status: ReportStatus,
    image_url: Option<&'static str>,
}

static OWN_REPORTS: &[OwnReport] = &[
    OwnReport {
        title: LocalizedText::new("Oil spill near Marina Beach", "मरीना बीच के पास तेल रिसाव"),
        description: LocalizedText::new(
            "Large oil patches visible along the shoreline, strong smell.",
            "तटरेखा पर तेल के बड़े धब्बे दिखाई दे रहे हैं, तेज गंध।",
        ),
        location: LocalizedText::new("Marina Beach, Chennai", "मरीना बीच, चेन्नई"),
        submitted_at: "2024-01-15 2:30 PM",
        status: ReportStatus::Verified,
        image_url: Some("https://images.unsplash.com/photo-1583212292454-1fe6229603b7?w=400"),
    },
    OwnReport {
        title: LocalizedText::new("Dead fish washing ashore", "किनारे पर मृत मछलियां"),
        description: LocalizedText::new(
            "Dozens of dead fish along a 200m stretch of beach.",
            "समुद्र तट के 200 मीटर हिस्से में दर्जनों मृत मछलियां।",
        ),
        location: LocalizedText::new("Elliot Beach, Chennai", "इलियट बीच, चेन्नई"),
        submitted_at: "2024-01-12 9:15 AM",
        status: ReportStatus::Submitted,
        image_url: Some("https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=400"),
    },
    OwnReport {
        title: LocalizedText::new("Unusual wave patterns", "असामान्य लहर पैटर्न"),
        description: LocalizedText::new(
            "Waves breaking much further out than usual, strong undertow.",
            "लहरें सामान्य से बहुत दूर टूट रही हैं, तेज अंतर्धारा।",
        ),
        location: LocalizedText::new("Mahabalipuram", "महाबलीपुरम"),
        submitted_at: "2024-01-08 5:45 PM",
        status: ReportStatus::Resolved,
        image_url: Some("https://images.unsplash.com/photo-1505142468610-359e7d316be0?w=400"),
    },
    OwnReport {
        title: LocalizedText::new("Coastal erosion worsening", "तटीय कटाव बढ़ रहा है"),
        description: LocalizedText::new(
            "The dune line has retreated visibly since last month.",
            "पिछले महीने से टीले की रेखा स्पष्ट रूप से पीछे हट गई है।",
        ),
        location: LocalizedText::new("Kovalam, Chennai", "कोवलम, चेन्नई"),
        submitted_at: "2024-01-03 11:00 AM",
        status: ReportStatus::Submitted,
        image_url: None,
    },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportsTab {
    #[default]
    All,
    Submitted,
    Verified,
    Resolved,
}

impl ReportsTab {
    pub const ALL: [Self; 4] = [Self::All, Self::Submitted, Self::Verified, Self::Resolved];

    fn admits(self, status: ReportStatus) -> bool {
        match self {
            Self::All => true,
            Self::Submitted => status == ReportStatus::Submitted,
            Self::Verified => status == ReportStatus::Verified,
            Self::Resolved => status == ReportStatus::Resolved,
        }
    }

    fn label(self, lang: RenderLanguage) -> &'static str {
        let strings = &UiStrings::for_language(lang).reports;
        match self {
            Self::All => strings.tab_all,
            Self::Submitted => strings.tab_submitted,
            Self::Verified => strings.tab_verified,
            Self::Resolved => strings.tab_resolved,
        }
    }
}

/// Local state of the my-reports screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MyReportsState {
    pub tab: ReportsTab,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabView {
    pub tab: ReportsTab,
    pub label: String,
    pub count: usize,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnReportView {
    pub title: String,
    pub description: String,
    pub location: String,
    pub submitted_at: String,
    pub status: ReportStatus,
    pub status_label: String,
    pub image_url: Option<String>,
    pub editable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyReportsView {
    pub title: String,
    pub tabs: Vec<TabView>,
    pub reports: Vec<OwnReportView>,
    pub empty_heading: String,
    pub empty_message: Option<String>,
}

#[must_use]
pub fn view(state: &MyReportsState, lang: RenderLanguage) -> MyReportsView {
    let strings = &UiStrings::for_language(lang).reports;

    let tabs = ReportsTab::ALL
        .iter()
        .map(|tab| TabView {
            tab: *tab,
            label: tab.label(lang).into(),
            count: OWN_REPORTS.iter().filter(|r| tab.admits(r.status)).count(),
            active: *tab == state.tab,
        })
        .collect();

    let reports: Vec<_> = OWN_REPORTS
        .iter()
        .filter(|r| state.tab.admits(r.status))
        .map(|r| OwnReportView {
            title: r.title.pick(lang).into(),
            description: r.description.pick(lang).into(),
            location: r.location.pick(lang).into(),
            submitted_at: r.submitted_at.into(),
            status: r.status,
            status_label: r.status.label(lang).into(),
            image_url: r.image_url.map(Into::into),
            // Only not-yet-reviewed reports can still be edited.
            editable: r.status == ReportStatus::Submitted,
        })
        .collect();

    let empty_message = reports.is_empty().then(|| {
        if state.tab == ReportsTab::All {
            strings.empty_all.into()
        } else {
            strings.empty_filtered.into()
        }
    });

    MyReportsView {
        title: strings.title.into(),
        tabs,
        reports,
        empty_heading: strings.empty_heading.into(),
        empty_message,
    }
}
