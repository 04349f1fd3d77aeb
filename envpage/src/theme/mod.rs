//! Theme system for visual styling
//!
//! Each environment has a fixed visual theme. Themes control:
//! - The page title
//! - Background and accent colors of the page

use serde::Serialize;

use crate::env::{normalize, EnvName};

/// A visual theme for an environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    /// Page title
    pub title: &'static str,
    /// Page background color
    pub bg: &'static str,
    /// Badge background color
    pub accent: &'static str,
}

impl Theme {
    /// Dev theme (green)
    pub const fn dev() -> Self {
        Self {
            title: "Dev Environment",
            bg: "#e6ffed",
            accent: "#1f8a36",
        }
    }

    /// QA theme (amber)
    pub const fn qa() -> Self {
        Self {
            title: "QA Environment",
            bg: "#fff9db",
            accent: "#a37b00",
        }
    }

    /// Production theme (red)
    pub const fn prod() -> Self {
        Self {
            title: "Production Environment",
            bg: "#ffe6e6",
            accent: "#b00020",
        }
    }

    /// Get the theme for a canonical environment
    pub const fn for_env(env: EnvName) -> Self {
        match env {
            EnvName::Dev => Self::dev(),
            EnvName::Qa => Self::qa(),
            EnvName::Prod => Self::prod(),
        }
    }
}

/// Resolve the theme for an arbitrary environment string, falling back to dev
pub fn theme_for(env: &str) -> Theme {
    Theme::for_env(normalize(Some(env)))
}
