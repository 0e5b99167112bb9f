//! Language catalog and the shared language preference.
//!
//! The preference is owned by the model and consulted by every screen at
//! view time, so a single selection re-renders the whole shell. Listeners
//! registered with [`LanguagePreference::subscribe`] are invoked
//! synchronously from [`LanguagePreference::select`], in registration
//! order, once per successful selection.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::RenderLanguage;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LanguageError {
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),
}

/// One entry in the language catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
}

/// Languages offered in the picker. English first so it is the default.
/// Only English and Hindi have full screen translations; the rest render
/// English until their tables land.
pub static CATALOG: &[Language] = &[
    Language { code: "en", name: "English", native_name: "English" },
    Language { code: "hi", name: "Hindi", native_name: "हिन्दी" },
    Language { code: "bn", name: "Bengali", native_name: "বাংলা" },
    Language { code: "ta", name: "Tamil", native_name: "தமிழ்" },
    Language { code: "te", name: "Telugu", native_name: "తెలుగు" },
    Language { code: "mr", name: "Marathi", native_name: "मराठी" },
];

#[must_use]
pub fn lookup(code: &str) -> Option<&'static Language> {
    CATALOG.iter().find(|l| l.code == code)
}

/// Case-insensitive catalog search over English and native names.
#[must_use]
pub fn search(query: &str) -> Vec<&'static Language> {
    let query = query.trim().to_lowercase();
    CATALOG
        .iter()
        .filter(|l| {
            query.is_empty()
                || l.name.to_lowercase().contains(&query)
                || l.native_name.to_lowercase().contains(&query)
        })
        .collect()
}

/// Handle returned by [`LanguagePreference::subscribe`], used to drop the
/// listener again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&Language) + Send + Sync>;

/// The app-wide selected language plus its change listeners.
pub struct LanguagePreference {
    current: &'static Language,
    next_subscription: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Default for LanguagePreference {
    fn default() -> Self {
        Self {
            current: &CATALOG[0],
            next_subscription: 0,
            listeners: Vec::new(),
        }
    }
}

impl fmt::Debug for LanguagePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguagePreference")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl LanguagePreference {
    /// The full catalog, in menu order.
    #[must_use]
    pub fn languages(&self) -> &'static [Language] {
        CATALOG
    }

    #[must_use]
    pub fn current(&self) -> &'static Language {
        self.current
    }

    #[must_use]
    pub fn render_language(&self) -> RenderLanguage {
        RenderLanguage::from_code(self.current.code)
    }

    /// Select a language by catalog code. Unknown codes leave the current
    /// selection untouched and no listener fires.
    pub fn select(&mut self, code: &str) -> Result<&'static Language, LanguageError> {
        let language =
            lookup(code).ok_or_else(|| LanguageError::UnknownLanguage(code.to_string()))?;
        self.current = language;
        for (_, listener) in &self.listeners {
            listener(language);
        }
        Ok(language)
    }

    /// Register a change listener. Fires on every successful
    /// [`select`](Self::select), including reselection of the current
    /// language.
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(existing, _)| *existing != id);
    }
}
