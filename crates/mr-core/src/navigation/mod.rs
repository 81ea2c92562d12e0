//! In-app screen navigation.
//!
//! `home` is the only hub: every other screen is a leaf reached from `home`
//! whose back action returns straight to `home`. There is no history stack.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Home,
    Requests,
    Ai,
    Payments,
    Cameras,
    Profile,
    Apartment,
    News,
    Voting,
    Chat,
    Services,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown screen: {0}")]
pub struct UnknownScreen(pub String);

impl Screen {
    pub const ALL: [Screen; 11] = [
        Screen::Home,
        Screen::Requests,
        Screen::Ai,
        Screen::Payments,
        Screen::Cameras,
        Screen::Profile,
        Screen::Apartment,
        Screen::News,
        Screen::Voting,
        Screen::Chat,
        Screen::Services,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Requests => "requests",
            Screen::Ai => "ai",
            Screen::Payments => "payments",
            Screen::Cameras => "cameras",
            Screen::Profile => "profile",
            Screen::Apartment => "apartment",
            Screen::News => "news",
            Screen::Voting => "voting",
            Screen::Chat => "chat",
            Screen::Services => "services",
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Screen::Home)
    }

    /// Screens rendered with the resident profile (read-only).
    pub fn needs_profile(&self) -> bool {
        matches!(self, Screen::Home | Screen::Profile | Screen::Apartment)
    }

    /// Screens that carry the logout action.
    pub fn offers_logout(&self) -> bool {
        matches!(self, Screen::Profile)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.as_str() == s)
            .ok_or_else(|| UnknownScreen(s.to_string()))
    }
}

/// Single-active-screen selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    current: Screen,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Unconditionally switches the active screen, returning the previous one.
    pub fn navigate_to(&mut self, screen: Screen) -> Screen {
        std::mem::replace(&mut self.current, screen)
    }

    /// Back action of the active screen. Always lands on `home`.
    pub fn back(&mut self) -> Screen {
        self.navigate_to(Screen::Home)
    }
}
