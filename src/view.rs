//! The serializable view model handed to shells. One [`ViewModel`] per
//! render, with the active screen's content in a tagged enum so a shell
//! can mount exactly one screen at a time.

use serde::{Deserialize, Serialize};

use crate::i18n::UiStrings;
use crate::language;
use crate::model::{Model, ToastKind, ToastMessage};
use crate::navigation::ScreenId;
use crate::screens::map::MapView;
use crate::screens::my_reports::MyReportsView;
use crate::screens::profile::ProfileView;
use crate::screens::report_form::ReportFormView;
use crate::screens::updates::UpdatesView;
use crate::screens::{map, my_reports, profile, report_form, updates};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItemView {
    pub screen: ScreenId,
    pub label: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavView {
    pub collapsed: bool,
    pub items: Vec<NavItemView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOptionView {
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageMenuView {
    pub title: String,
    pub search_placeholder: String,
    pub search: String,
    pub options: Vec<LanguageOptionView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastView {
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u64,
}

impl From<&ToastMessage> for ToastView {
    fn from(t: &ToastMessage) -> Self {
        Self {
            message: t.message.clone(),
            kind: t.kind,
            duration_ms: t.duration_ms,
        }
    }
}

/// Content of the mounted screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScreenView {
    Updates(UpdatesView),
    Map(MapView),
    Reports(MyReportsView),
    Report(ReportFormView),
    Profile(ProfileView),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    pub screen: ScreenId,
    pub language_code: String,
    pub nav: NavView,
    pub content: ScreenView,
    pub language_menu: Option<LanguageMenuView>,
    pub toast: Option<ToastView>,
}

#[must_use]
pub fn build(model: &Model) -> ViewModel {
    let lang = model.language.render_language();
    let strings = UiStrings::for_language(lang);
    let active = model.router.active();

    let nav_labels = [
        (ScreenId::Updates, strings.nav.updates),
        (ScreenId::Map, strings.nav.map),
        (ScreenId::Reports, strings.nav.reports),
        (ScreenId::Report, strings.nav.report),
        (ScreenId::Profile, strings.nav.profile),
    ];
    let nav = NavView {
        collapsed: model.nav.is_collapsed(),
        items: nav_labels
            .iter()
            .map(|(screen, label)| NavItemView {
                screen: *screen,
                label: (*label).into(),
                active: *screen == active,
            })
            .collect(),
    };

    let content = match active {
        ScreenId::Updates => ScreenView::Updates(updates::view(&model.updates, lang)),
        ScreenId::Map => ScreenView::Map(map::view(&model.map, lang)),
        ScreenId::Reports => ScreenView::Reports(my_reports::view(&model.my_reports, lang)),
        ScreenId::Report => ScreenView::Report(report_form::view(&model.report_form, lang)),
        ScreenId::Profile => ScreenView::Profile(profile::view(
            &model.profile,
            lang,
            model.language.current().native_name,
        )),
    };

    let language_menu = model.language_menu.open.then(|| LanguageMenuView {
        title: strings.common.select_language.into(),
        search_placeholder: strings.common.search_languages.into(),
        search: model.language_menu.search.clone(),
        options: language::search(&model.language_menu.search)
            .into_iter()
            .map(|l| LanguageOptionView {
                code: l.code.into(),
                name: l.name.into(),
                native_name: l.native_name.into(),
                selected: l.code == model.language.current().code,
            })
            .collect(),
    });

    ViewModel {
        screen: active,
        language_code: model.language.current().code.into(),
        nav,
        content,
        language_menu,
        toast: model.active_toast.as_ref().map(Into::into),
    }
}
