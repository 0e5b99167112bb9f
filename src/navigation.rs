//! Screen routing and bottom navigation visibility.
//!
//! The navigation bar auto-collapses after [`crate::NAV_AUTO_COLLAPSE_MS`]
//! without user interaction. Arming hands out an [`IdleTimerToken`]; every
//! re-arm (or disarm) advances the epoch so an already-in-flight timer
//! completion for an older token is simply ignored. That makes timer
//! cancellation advisory: the shell may or may not honor a cancel, but a
//! stale elapse can never collapse the bar.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScreenError {
    #[error("unknown screen: {0}")]
    UnknownScreen(String),
}

/// The five screens the shell can mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenId {
    #[default]
    Updates,
    Map,
    Reports,
    Report,
    Profile,
}

impl ScreenId {
    pub const ALL: [Self; 5] = [Self::Updates, Self::Map, Self::Reports, Self::Report, Self::Profile];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Updates => "updates",
            Self::Map => "map",
            Self::Reports => "reports",
            Self::Report => "report",
            Self::Profile => "profile",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScreenId {
    type Err = ScreenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "updates" => Ok(Self::Updates),
            "map" => Ok(Self::Map),
            "reports" => Ok(Self::Reports),
            "report" => Ok(Self::Report),
            "profile" => Ok(Self::Profile),
            other => Err(ScreenError::UnknownScreen(other.to_string())),
        }
    }
}

/// Which screen is mounted. Exactly one is active at a time; the last
/// navigation always wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenRouter {
    active: ScreenId,
}

impl ScreenRouter {
    #[must_use]
    pub const fn active(&self) -> ScreenId {
        self.active
    }

    /// Switch to `screen`. Returns the screen that was active before, or
    /// `None` when this was a no-op reselection.
    pub fn navigate(&mut self, screen: ScreenId) -> Option<ScreenId> {
        if self.active == screen {
            return None;
        }
        let previous = self.active;
        self.active = screen;
        Some(previous)
    }

    /// Navigate by screen name, for shells that route on strings (deep
    /// links, web history). Unknown names leave the router untouched.
    pub fn navigate_named(&mut self, name: &str) -> Result<Option<ScreenId>, ScreenError> {
        Ok(self.navigate(name.parse()?))
    }
}

/// Identifies one arming of the idle timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdleTimerToken(u64);

/// Bottom navigation bar state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavVisibility {
    collapsed: bool,
    epoch: u64,
    armed: bool,
}

impl NavVisibility {
    #[must_use]
    pub const fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Token of the in-flight shell timer, if one is armed. Re-arming
    /// must cancel this timer so the shell never holds more than one.
    #[must_use]
    pub fn outstanding(&self) -> Option<IdleTimerToken> {
        self.armed.then(|| IdleTimerToken(self.epoch))
    }

    /// Start (or restart) the idle countdown. The returned token must
    /// accompany the eventual elapse for it to count.
    pub fn arm(&mut self) -> IdleTimerToken {
        self.epoch += 1;
        self.armed = true;
        IdleTimerToken(self.epoch)
    }

    /// Invalidate any outstanding token without arming a new one. Used
    /// when the shell backgrounds or tears the bar down.
    pub fn disarm(&mut self) -> Option<IdleTimerToken> {
        self.epoch += 1;
        if self.armed {
            self.armed = false;
            Some(IdleTimerToken(self.epoch - 1))
        } else {
            None
        }
    }

    /// A user interaction anywhere in the app: expand the bar if it is
    /// collapsed and restart the countdown.
    pub fn interact(&mut self) -> IdleTimerToken {
        self.collapsed = false;
        self.arm()
    }

    /// Manual visibility toggle from the bar's own control. Counts as an
    /// interaction, so the countdown restarts too.
    pub fn toggle(&mut self) -> IdleTimerToken {
        self.collapsed = !self.collapsed;
        self.arm()
    }

    /// The idle timer for `token` elapsed. Collapses the bar only when
    /// the token is still current; returns whether anything changed.
    pub fn timer_elapsed(&mut self, token: IdleTimerToken) -> bool {
        if !self.armed || token.0 != self.epoch {
            return false;
        }
        self.armed = false;
        if self.collapsed {
            return false;
        }
        self.collapsed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod router {
        use super::*;

        #[test]
        fn starts_on_updates() {
            assert_eq!(ScreenRouter::default().active(), ScreenId::Updates);
        }

        #[test]
        fn navigate_reports_previous_screen() {
            let mut router = ScreenRouter::default();
            assert_eq!(router.navigate(ScreenId::Map), Some(ScreenId::Updates));
            assert_eq!(router.active(), ScreenId::Map);
        }

        #[test]
        fn reselecting_active_screen_is_a_no_op() {
            let mut router = ScreenRouter::default();
            assert_eq!(router.navigate(ScreenId::Updates), None);
            assert_eq!(router.active(), ScreenId::Updates);
        }

        #[test]
        fn named_navigation_rejects_unknown_screens() {
            let mut router = ScreenRouter::default();
            router.navigate(ScreenId::Profile);

            let err = router.navigate_named("settings").unwrap_err();
            assert_eq!(err, ScreenError::UnknownScreen("settings".into()));
            assert_eq!(router.active(), ScreenId::Profile);

            assert_eq!(
                router.navigate_named("map").unwrap(),
                Some(ScreenId::Profile)
            );
        }

        #[test]
        fn screen_names_round_trip() {
            for screen in ScreenId::ALL {
                assert_eq!(screen.name().parse::<ScreenId>().unwrap(), screen);
            }
        }
    }

    mod visibility {
        use super::*;

        #[test]
        fn current_token_collapses_expanded_bar() {
            let mut nav = NavVisibility::default();
            let token = nav.arm();
            assert!(nav.timer_elapsed(token));
            assert!(nav.is_collapsed());
        }

        #[test]
        fn stale_token_is_inert() {
            let mut nav = NavVisibility::default();
            let old = nav.arm();
            let _new = nav.interact();
            assert!(!nav.timer_elapsed(old));
            assert!(!nav.is_collapsed());
        }

        #[test]
        fn interaction_expands_collapsed_bar() {
            let mut nav = NavVisibility::default();
            let token = nav.arm();
            nav.timer_elapsed(token);
            assert!(nav.is_collapsed());

            nav.interact();
            assert!(!nav.is_collapsed());
        }

        #[test]
        fn toggle_flips_visibility_and_rearms() {
            let mut nav = NavVisibility::default();
            let old = nav.arm();
            nav.toggle();
            assert!(nav.is_collapsed());
            nav.toggle();
            assert!(!nav.is_collapsed());
            // Tokens from before the toggles no longer collapse.
            assert!(!nav.timer_elapsed(old));
        }

        #[test]
        fn outstanding_tracks_the_armed_token() {
            let mut nav = NavVisibility::default();
            assert!(nav.outstanding().is_none());

            let token = nav.arm();
            assert_eq!(nav.outstanding(), Some(token));

            // A fresh arm displaces the previous token.
            let rearmed = nav.interact();
            assert_eq!(nav.outstanding(), Some(rearmed));

            nav.timer_elapsed(rearmed);
            assert!(nav.outstanding().is_none());
        }

        #[test]
        fn disarm_invalidates_outstanding_token() {
            let mut nav = NavVisibility::default();
            let token = nav.arm();
            assert!(nav.disarm().is_some());
            assert!(!nav.timer_elapsed(token));
            assert!(!nav.is_collapsed());

            // Nothing armed, nothing to cancel.
            assert!(nav.disarm().is_none());
        }

        #[test]
        fn elapse_while_manually_collapsed_changes_nothing() {
            let mut nav = NavVisibility::default();
            nav.toggle();
            let token = nav.arm();
            assert!(!nav.timer_elapsed(token));
            assert!(nav.is_collapsed());
        }

        #[test]
        fn token_fires_at_most_once() {
            let mut nav = NavVisibility::default();
            let token = nav.arm();
            assert!(nav.timer_elapsed(token));
            nav.interact();
            assert!(!nav.timer_elapsed(token));
            assert!(!nav.is_collapsed());
        }
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn last_navigation_wins(indices in prop::collection::vec(0usize..5, 1..20)) {
                let mut router = ScreenRouter::default();
                for &i in &indices {
                    router.navigate(ScreenId::ALL[i]);
                }
                let last = indices.last().copied().unwrap();
                prop_assert_eq!(router.active(), ScreenId::ALL[last]);
            }

            #[test]
            fn only_the_latest_token_collapses(rearms in 1usize..20, fired in 0usize..20) {
                let mut nav = NavVisibility::default();
                let tokens: Vec<_> = (0..rearms).map(|_| nav.interact()).collect();
                let fired = fired % rearms;

                let collapsed = nav.timer_elapsed(tokens[fired]);
                prop_assert_eq!(collapsed, fired == rearms - 1);
                prop_assert_eq!(nav.is_collapsed(), fired == rearms - 1);
            }

            #[test]
            fn interactions_always_leave_the_bar_expanded(
                steps in prop::collection::vec(any::<bool>(), 1..30),
            ) {
                // Interleave timer elapses with interactions; whenever the
                // last step is an interaction the bar must be visible.
                let mut nav = NavVisibility::default();
                let mut token = nav.arm();
                let mut last_was_interaction = false;
                for elapse in steps {
                    if elapse {
                        nav.timer_elapsed(token);
                        last_was_interaction = false;
                    } else {
                        token = nav.interact();
                        last_was_interaction = true;
                    }
                }
                if last_was_interaction {
                    prop_assert!(!nav.is_collapsed());
                }
            }
        }
    }
}
