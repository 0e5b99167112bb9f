//! Hazard report form: media, description, location, hazard type and an
//! offline toggle that saves locally instead of submitting.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::{RenderLanguage, UiStrings};

use super::HazardType;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportFormError {
    #[error("report needs a hazard type plus a description or media")]
    Incomplete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    Submitted,
    SavedOffline,
}

/// Local state of the report form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportFormState {
    pub hazard_type: Option<HazardType>,
    pub description: String,
    pub location: String,
    pub media: Vec<String>,
    pub save_offline: bool,
}

impl ReportFormState {
    /// A report is submittable once a hazard type is picked and there is
    /// either a description or at least one media attachment.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.hazard_type.is_some()
            && (!self.description.trim().is_empty() || !self.media.is_empty())
    }

    /// Validate and clear the form. The outcome only distinguishes online
    /// submission from an offline save; the form resets either way.
    pub fn submit(&mut self) -> Result<SubmitOutcome, ReportFormError> {
        if !self.is_complete() {
            return Err(ReportFormError::Incomplete);
        }
        let outcome = if self.save_offline {
            SubmitOutcome::SavedOffline
        } else {
            SubmitOutcome::Submitted
        };
        *self = Self::default();
        Ok(outcome)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFormView {
    pub title: String,
    pub upload_label: String,
    pub upload_hint: String,
    pub choose_files_label: String,
    pub media: Vec<String>,
    pub description_label: String,
    pub description_placeholder: String,
    pub description: String,
    pub location_label: String,
    pub location_auto: String,
    pub location_placeholder: String,
    pub location: String,
    pub pin_on_map_label: String,
    pub type_label: String,
    pub type_placeholder: String,
    pub hazard_type: Option<HazardType>,
    pub hazard_options: Vec<(HazardType, String)>,
    pub offline_label: String,
    pub offline_hint: String,
    pub save_offline: bool,
    pub submit_label: String,
    pub can_submit: bool,
}

#[must_use]
pub fn view(state: &ReportFormState, lang: RenderLanguage) -> ReportFormView {
    let strings = &UiStrings::for_language(lang).report_form;
    let submit_label = if state.save_offline { strings.save_offline } else { strings.submit };

    ReportFormView {
        title: strings.title.into(),
        upload_label: strings.upload_media.into(),
        upload_hint: strings.upload_hint.into(),
        choose_files_label: strings.choose_files.into(),
        media: state.media.clone(),
        description_label: strings.description.into(),
        description_placeholder: strings.description_placeholder.into(),
        description: state.description.clone(),
        location_label: strings.location.into(),
        location_auto: strings.location_auto.into(),
        location_placeholder: strings.location_placeholder.into(),
        location: state.location.clone(),
        pin_on_map_label: strings.pin_on_map.into(),
        type_label: strings.event_type.into(),
        type_placeholder: strings.event_type_placeholder.into(),
        hazard_type: state.hazard_type,
        hazard_options: HazardType::ALL
            .iter()
            .map(|h| (*h, h.label().pick(lang).into()))
            .collect(),
        offline_label: strings.offline_label.into(),
        offline_hint: strings.offline_hint.into(),
        save_offline: state.save_offline,
        submit_label: submit_label.into(),
        can_submit: state.is_complete(),
    }
}
