//! Hazard map: markers with event type, date and status filters, an
//! optional heatmap overlay and a marker detail popup.

use serde::{Deserialize, Serialize};

use crate::i18n::{LocalizedText, RenderLanguage, UiStrings};

use super::{HazardType, ReportStatus, Severity};

struct Marker {
    hazard: HazardType,
    title: LocalizedText,
    location: LocalizedText,
    lat: f64,
    lng: f64,
    status: ReportStatus,
    severity: Severity,
    hours_ago: u32,
    time: LocalizedText,
}

static MARKERS: &[Marker] = &[
    Marker {
        hazard: HazardType::OilSpill,
        title: LocalizedText::new("Oil Spill", "तेल रिसाव"),
        location: LocalizedText::new("Marina Beach", "मरीना बीच"),
        lat: 13.0475,
        lng: 80.2824,
        status: ReportStatus::Verified,
        severity: Severity::High,
        hours_ago: 2,
        time: LocalizedText::new("2 hours ago", "2 घंटे पहले"),
    },
    Marker {
        hazard: HazardType::DeadFish,
        title: LocalizedText::new("Dead Fish", "मृत मछलियां"),
        location: LocalizedText::new("Elliot Beach", "इलियट बीच"),
        lat: 13.0067,
        lng: 80.2600,
        status: ReportStatus::Submitted,
        severity: Severity::Medium,
        hours_ago: 4,
        time: LocalizedText::new("4 hours ago", "4 घंटे पहले"),
    },
    Marker {
        hazard: HazardType::Storm,
        title: LocalizedText::new("Storm", "तूफान"),
        location: LocalizedText::new("Mahabalipuram", "महाबलीपुरम"),
        lat: 12.6208,
        lng: 80.1982,
        status: ReportStatus::Verified,
        severity: Severity::Critical,
        hours_ago: 6,
        time: LocalizedText::new("6 hours ago", "6 घंटे पहले"),
    },
    Marker {
        hazard: HazardType::Flood,
        title: LocalizedText::new("Flood", "बाढ़"),
        location: LocalizedText::new("Pulicat Lake", "पुलिकट झील"),
        lat: 13.4119,
        lng: 80.3214,
        status: ReportStatus::Submitted,
        severity: Severity::Medium,
        hours_ago: 8,
        time: LocalizedText::new("8 hours ago", "8 घंटे पहले"),
    },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFilter {
    #[default]
    AllTime,
    Today,
    ThisWeek,
    ThisMonth,
}

impl DateFilter {
    fn max_hours(self) -> Option<u32> {
        match self {
            Self::AllTime => None,
            Self::Today => Some(24),
            Self::ThisWeek => Some(24 * 7),
            Self::ThisMonth => Some(24 * 30),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    VerifiedOnly,
    UnverifiedOnly,
}

impl StatusFilter {
    fn admits(self, status: ReportStatus) -> bool {
        match self {
            Self::All => true,
            Self::VerifiedOnly => status == ReportStatus::Verified,
            Self::UnverifiedOnly => status != ReportStatus::Verified,
        }
    }
}

/// Local state of the hazard map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapState {
    pub hazard_filter: Option<HazardType>,
    pub date_filter: DateFilter,
    pub status_filter: StatusFilter,
    pub show_heatmap: bool,
    /// Stable marker index (`MarkerView::index`), not a position in
    /// the filtered list.
    pub selected_marker: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerView {
    /// Stable key into the full marker list, independent of active
    /// filters. Shells send it back when a marker is tapped.
    pub index: usize,
    pub hazard: HazardType,
    pub title: String,
    pub location: String,
    pub lat: f64,
    pub lng: f64,
    pub status: ReportStatus,
    pub status_label: String,
    pub severity: Severity,
    pub time: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub title: String,
    pub filter_heading: String,
    pub hazard_filter_label: String,
    pub hazard_filter: Option<HazardType>,
    pub all_types_label: String,
    pub hazard_options: Vec<(HazardType, String)>,
    pub date_filter_label: String,
    pub date_filter: DateFilter,
    pub date_options: Vec<(DateFilter, String)>,
    pub status_filter_label: String,
    pub status_filter: StatusFilter,
    pub status_options: Vec<(StatusFilter, String)>,
    pub show_heatmap: bool,
    pub heatmap_label: String,
    pub legend_label: String,
    pub markers: Vec<MarkerView>,
    pub recent_heading: String,
    pub view_details_label: String,
}

#[must_use]
pub fn view(state: &MapState, lang: RenderLanguage) -> MapView {
    let strings = &UiStrings::for_language(lang).map;
    let markers = MARKERS
        .iter()
        .enumerate()
        .filter(|(_, m)| state.hazard_filter.map_or(true, |h| m.hazard == h))
        .filter(|(_, m)| state.date_filter.max_hours().map_or(true, |h| m.hours_ago <= h))
        .filter(|(_, m)| state.status_filter.admits(m.status))
        .map(|(idx, m)| MarkerView {
            index: idx,
            hazard: m.hazard,
            title: m.title.pick(lang).into(),
            location: m.location.pick(lang).into(),
            lat: m.lat,
            lng: m.lng,
            status: m.status,
            status_label: m.status.label(lang).into(),
            severity: m.severity,
            time: m.time.pick(lang).into(),
            selected: state.selected_marker == Some(idx),
        })
        .collect();

    MapView {
        title: strings.title.into(),
        filter_heading: strings.filter_heading.into(),
        hazard_filter_label: strings.event_type.into(),
        hazard_filter: state.hazard_filter,
        all_types_label: strings.all_types.into(),
        hazard_options: HazardType::ALL
            .iter()
            .map(|h| (*h, h.label().pick(lang).into()))
            .collect(),
        date_filter_label: strings.date_range.into(),
        date_filter: state.date_filter,
        date_options: vec![
            (DateFilter::AllTime, strings.all_dates.into()),
            (DateFilter::Today, strings.today.into()),
            (DateFilter::ThisWeek, strings.this_week.into()),
            (DateFilter::ThisMonth, strings.this_month.into()),
        ],
        status_filter_label: strings.status.into(),
        status_filter: state.status_filter,
        status_options: vec![
            (StatusFilter::All, strings.all_statuses.into()),
            (StatusFilter::VerifiedOnly, strings.verified_only.into()),
            (StatusFilter::UnverifiedOnly, strings.unverified_only.into()),
        ],
        show_heatmap: state.show_heatmap,
        heatmap_label: strings.show_heatmap.into(),
        legend_label: strings.legend.into(),
        markers,
        recent_heading: strings.recent_in_area.into(),
        view_details_label: strings.view_details.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfiltered_map_shows_all_markers() {
        let view = view(&MapState::default(), RenderLanguage::English);
        assert_eq!(view.markers.len(), 4);
        assert_eq!(view.hazard_options.len(), 11);
        assert!(!view.show_heatmap);
    }

    #[test]
    fn hazard_filter_narrows_markers() {
        let state = MapState { hazard_filter: Some(HazardType::OilSpill), ..Default::default() };
        let view = view(&state, RenderLanguage::English);
        assert_eq!(view.markers.len(), 1);
        assert_eq!(view.markers[0].location, "Marina Beach");
    }

    #[test]
    fn status_filter_splits_verified_from_unverified() {
        let verified = MapState {
            status_filter: StatusFilter::VerifiedOnly,
            ..Default::default()
        };
        assert_eq!(view(&verified, RenderLanguage::English).markers.len(), 2);

        let unverified = MapState {
            status_filter: StatusFilter::UnverifiedOnly,
            ..Default::default()
        };
        assert_eq!(view(&unverified, RenderLanguage::English).markers.len(), 2);
    }

    #[test]
    fn date_filter_drops_old_markers() {
        let state = MapState { date_filter: DateFilter::Today, ..Default::default() };
        let view = view(&state, RenderLanguage::English);
        // All mock markers are within 24 hours.
        assert_eq!(view.markers.len(), 4);
    }

    #[test]
    fn selection_marks_exactly_one_marker() {
        let state = MapState { selected_marker: Some(2), ..Default::default() };
        let view = view(&state, RenderLanguage::English);
        let selected: Vec<_> = view.markers.iter().filter(|m| m.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].index, 2);
        assert_eq!(selected[0].location, "Mahabalipuram");
    }

    #[test]
    fn selection_survives_an_active_filter() {
        // Pulicat Lake is index 3 in the full list but second in the
        // unverified-only view; selection must follow the stable index.
        let state = MapState {
            status_filter: StatusFilter::UnverifiedOnly,
            selected_marker: Some(3),
            ..Default::default()
        };
        let view = view(&state, RenderLanguage::English);
        assert_eq!(view.markers.len(), 2);

        let selected: Vec<_> = view.markers.iter().filter(|m| m.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].index, 3);
        assert_eq!(selected[0].location, "Pulicat Lake");
    }

    #[test]
    fn hindi_map_localizes_markers() {
        let view = view(&MapState::default(), RenderLanguage::Hindi);
        assert_eq!(view.title, "खतरों का नक्शा");
        assert_eq!(view.markers[3].location, "पुलिकट झील");
    }
}
