#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]

//! Headless core of the Sagar coastal hazard reporting app.
//!
//! The core owns all state: the selected language, which of the five
//! screens is mounted, the auto-collapsing bottom navigation and each
//! screen's local state. Shells (mobile, web) send [`Event`]s in,
//! resolve the requested effects and render the [`ViewModel`] they get
//! back.

pub mod app;
pub mod capabilities;
pub mod event;
pub mod i18n;
pub mod language;
pub mod model;
pub mod navigation;
pub mod screens;
pub mod view;

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use event::Event;
pub use model::{Model, ToastKind, ToastMessage};
pub use navigation::{IdleTimerToken, NavVisibility, ScreenId, ScreenRouter};
pub use view::{ScreenView, ViewModel};

/// Idle time before the bottom navigation auto-collapses: 10 minutes.
pub const NAV_AUTO_COLLAPSE_MS: u64 = 600_000;
