//! Per-screen state and view builders.
//!
//! Each screen keeps its local state in the model and builds a
//! serializable view from it plus the selected language. Screen state is
//! reset when the user navigates away, so returning to a screen always
//! shows it freshly mounted.

pub mod map;
pub mod my_reports;
pub mod profile;
pub mod report_form;
pub mod updates;

use serde::{Deserialize, Serialize};

use crate::i18n::{LocalizedText, RenderLanguage};

/// Hazard categories a citizen can report. Shared by the report form's
/// type picker and the map's event type filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardType {
    Flood,
    OilSpill,
    DeadFish,
    Storm,
    Cyclone,
    TsunamiWarning,
    ChemicalPollution,
    UnusualWaveActivity,
    MarineLifeDistress,
    CoastalErosion,
    Other,
}

impl HazardType {
    pub const ALL: [Self; 11] = [
        Self::Flood,
        Self::OilSpill,
        Self::DeadFish,
        Self::Storm,
        Self::Cyclone,
        Self::TsunamiWarning,
        Self::ChemicalPollution,
        Self::UnusualWaveActivity,
        Self::MarineLifeDistress,
        Self::CoastalErosion,
        Self::Other,
    ];

    #[must_use]
    pub const fn label(self) -> LocalizedText {
        match self {
            Self::Flood => LocalizedText::new("Flood", "बाढ़"),
            Self::OilSpill => LocalizedText::new("Oil Spill", "तेल रिसाव"),
            Self::DeadFish => LocalizedText::new("Dead Fish", "मृत मछलियां"),
            Self::Storm => LocalizedText::new("Storm", "तूफान"),
            Self::Cyclone => LocalizedText::new("Cyclone", "चक्रवात"),
            Self::TsunamiWarning => LocalizedText::new("Tsunami Warning", "सुनामी चेतावनी"),
            Self::ChemicalPollution => {
                LocalizedText::new("Chemical Pollution", "रासायनिक प्रदूषण")
            }
            Self::UnusualWaveActivity => {
                LocalizedText::new("Unusual Wave Activity", "असामान्य लहर गतिविधि")
            }
            Self::MarineLifeDistress => {
                LocalizedText::new("Marine Life Distress", "समुद्री जीवन संकट")
            }
            Self::CoastalErosion => LocalizedText::new("Coastal Erosion", "तटीय कटाव"),
            Self::Other => LocalizedText::new("Other", "अन्य"),
        }
    }
}

/// Lifecycle of a citizen report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Submitted,
    Verified,
    Resolved,
}

impl ReportStatus {
    #[must_use]
    pub fn label(self, lang: RenderLanguage) -> &'static str {
        let strings = &crate::i18n::UiStrings::for_language(lang).common;
        match self {
            Self::Submitted => strings.status_submitted,
            Self::Verified => strings.status_verified,
            Self::Resolved => strings.status_resolved,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}
