//! Ocean hazard updates feed: urgent alerts, recent citizen reports and
//! social media highlights, searchable from a single field.

use serde::{Deserialize, Serialize};

use crate::i18n::{LocalizedText, RenderLanguage, UiStrings};

use super::{ReportStatus, Severity};

struct Alert {
    title: LocalizedText,
    message: LocalizedText,
    severity: Severity,
    time: LocalizedText,
}

struct CitizenReport {
    title: LocalizedText,
    location: LocalizedText,
    distance_km: f64,
    status: ReportStatus,
    time: LocalizedText,
    image_url: &'static str,
}

struct SocialPost {
    platform: &'static str,
    handle: &'static str,
    content: LocalizedText,
    likes: u32,
    shares: u32,
    time: LocalizedText,
}

static ALERTS: &[Alert] = &[
    Alert {
        title: LocalizedText::new("Cyclone Alert", "चक्रवात चेतावनी"),
        message: LocalizedText::new(
            "⚠️ Cyclone Alert issued – Landfall expected in 12 hrs",
            "⚠️ चक्रवात चेतावनी जारी – 12 घंटे में तट से टकराने की संभावना",
        ),
        severity: Severity::Critical,
        time: LocalizedText::new("30 mins ago", "30 मिनट पहले"),
    },
    Alert {
        title: LocalizedText::new("Storm Warning", "तूफान चेतावनी"),
        message: LocalizedText::new(
            "High tide warning for coastal areas. Avoid beach activities.",
            "तटीय क्षेत्रों के लिए उच्च ज्वार की चेतावनी। समुद्र तट से दूर रहें।",
        ),
        severity: Severity::High,
        time: LocalizedText::new("2 hours ago", "2 घंटे पहले"),
    },
];

static CITIZEN_REPORTS: &[CitizenReport] = &[
    CitizenReport {
        title: LocalizedText::new("Oil spill spotted", "तेल रिसाव देखा गया"),
        location: LocalizedText::new("Marina Beach", "मरीना बीच"),
        distance_km: 2.3,
        status: ReportStatus::Verified,
        time: LocalizedText::new("1 hour ago", "1 घंटा पहले"),
        image_url: "https://images.unsplash.com/photo-1583212292454-1fe6229603b7?w=400",
    },
    CitizenReport {
        title: LocalizedText::new("Dead fish washing ashore", "किनारे पर मृत मछलियां"),
        location: LocalizedText::new("Elliot Beach", "इलियट बीच"),
        distance_km: 5.1,
        status: ReportStatus::Submitted,
        time: LocalizedText::new("3 hours ago", "3 घंटे पहले"),
        image_url: "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=400",
    },
    CitizenReport {
        title: LocalizedText::new("Massive waves observed", "विशाल लहरें देखी गईं"),
        location: LocalizedText::new("Mahabalipuram Lighthouse", "महाबलीपुरम लाइटहाउस"),
        distance_km: 12.7,
        status: ReportStatus::Submitted,
        time: LocalizedText::new("5 hours ago", "5 घंटे पहले"),
        image_url: "https://images.unsplash.com/photo-1505142468610-359e7d316be0?w=400",
    },
];

static SOCIAL_POSTS: &[SocialPost] = &[
    SocialPost {
        platform: "Twitter",
        handle: "@ChennaiWeather",
        content: LocalizedText::new(
            "Unusual wave patterns observed along the coast. Fishermen advised caution.",
            "तट पर असामान्य लहरें देखी गईं। मछुआरों को सावधानी बरतने की सलाह।",
        ),
        likes: 234,
        shares: 67,
        time: LocalizedText::new("4 hours ago", "4 घंटे पहले"),
    },
    SocialPost {
        platform: "Facebook",
        handle: "Coastal Watch India",
        content: LocalizedText::new(
            "Community cleanup drive scheduled after oil spill reports.",
            "तेल रिसाव की रिपोर्ट के बाद सामुदायिक सफाई अभियान।",
        ),
        likes: 156,
        shares: 89,
        time: LocalizedText::new("6 hours ago", "6 घंटे पहले"),
    },
];

/// Local state of the updates feed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdatesState {
    pub search: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlertView {
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub time: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CitizenReportView {
    pub title: String,
    pub location: String,
    pub distance_km: f64,
    pub status: ReportStatus,
    pub status_label: String,
    pub time: String,
    pub image_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialPostView {
    pub platform: String,
    pub handle: String,
    pub content: String,
    pub likes: u32,
    pub shares: u32,
    pub time: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdatesView {
    pub title: String,
    pub search_placeholder: String,
    pub search: String,
    pub alerts_heading: String,
    pub alerts: Vec<AlertView>,
    pub reports_heading: String,
    pub reports: Vec<CitizenReportView>,
    pub social_heading: String,
    pub social: Vec<SocialPostView>,
    pub load_more_label: String,
}

#[must_use]
pub fn view(state: &UpdatesState, lang: RenderLanguage) -> UpdatesView {
    let strings = &UiStrings::for_language(lang).updates;
    let query = state.search.trim().to_lowercase();
    let matches = |texts: &[&str]| {
        query.is_empty() || texts.iter().any(|t| t.to_lowercase().contains(&query))
    };

    UpdatesView {
        title: strings.title.into(),
        search_placeholder: strings.search_placeholder.into(),
        search: state.search.clone(),
        alerts_heading: strings.urgent_alerts.into(),
        alerts: ALERTS
            .iter()
            .filter(|a| matches(&[a.title.pick(lang), a.message.pick(lang)]))
            .map(|a| AlertView {
                title: a.title.pick(lang).into(),
                message: a.message.pick(lang).into(),
                severity: a.severity,
                time: a.time.pick(lang).into(),
            })
            .collect(),
        reports_heading: strings.citizen_reports.into(),
        reports: CITIZEN_REPORTS
            .iter()
            .filter(|r| matches(&[r.title.pick(lang), r.location.pick(lang)]))
            .map(|r| CitizenReportView {
                title: r.title.pick(lang).into(),
                location: r.location.pick(lang).into(),
                distance_km: r.distance_km,
                status: r.status,
                status_label: r.status.label(lang).into(),
                time: r.time.pick(lang).into(),
                image_url: r.image_url.into(),
            })
            .collect(),
        social_heading: strings.social_highlights.into(),
        social: SOCIAL_POSTS
            .iter()
            .filter(|p| matches(&[p.content.pick(lang), p.handle, p.platform]))
            .map(|p| SocialPostView {
                platform: p.platform.into(),
                handle: p.handle.into(),
                content: p.content.pick(lang).into(),
                likes: p.likes,
                shares: p.shares,
                time: p.time.pick(lang).into(),
            })
            .collect(),
        load_more_label: strings.load_more.into(),
    }
}
