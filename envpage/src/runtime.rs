//! Runtime environment captured at startup
//!
//! The process environment is read exactly once, by the entry point. Everything
//! downstream works from the captured [`RuntimeEnv`] value.

use tracing::{info, warn};

use crate::env::{is_recognized, normalize, EnvName};

/// Variable selecting the deployment environment
pub const APP_ENV_VAR: &str = "APP_ENV";
/// Variable carrying the CI commit identifier
pub const GITHUB_SHA_VAR: &str = "GITHUB_SHA";
/// Variable whose presence is reported but whose value is never shown
pub const FAKE_API_KEY_VAR: &str = "FAKE_API_KEY";

/// Build tag shown when no commit identifier is available
pub const LOCAL_BUILD_TAG: &str = "local-run";
/// Number of commit characters shown in the build tag
pub const BUILD_TAG_LEN: usize = 7;

/// Snapshot of the environment variables the page depends on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeEnv {
    pub app_env: Option<String>,
    pub github_sha: Option<String>,
    pub fake_api_key_present: bool,
}

impl RuntimeEnv {
    /// Capture from the process environment
    pub fn from_process() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Capture from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            app_env: lookup(APP_ENV_VAR),
            github_sha: lookup(GITHUB_SHA_VAR),
            // Empty counts as unset
            fake_api_key_present: lookup(FAKE_API_KEY_VAR).is_some_and(|v| !v.is_empty()),
        }
    }

    /// Active environment
    pub fn env(&self) -> EnvName {
        normalize(self.app_env.as_deref())
    }

    /// Short build identifier for display
    pub fn build_tag(&self) -> String {
        match &self.github_sha {
            Some(sha) => sha.chars().take(BUILD_TAG_LEN).collect(),
            None => LOCAL_BUILD_TAG.to_string(),
        }
    }

    /// Whether the demo secret is configured
    pub fn has_secret(&self) -> bool {
        self.fake_api_key_present
    }

    /// Log the environment selection
    pub fn log_selection(&self) {
        let env = self.env();
        match self.app_env.as_deref() {
            Some(raw) if !raw.trim().is_empty() && !is_recognized(raw) => {
                warn!(
                    "{} value {:?} is not a known environment, using {}",
                    APP_ENV_VAR, raw, env
                );
            }
            _ => {}
        }
        info!(
            environment = %env,
            build = %self.build_tag(),
            secret_present = self.has_secret(),
            "Runtime environment resolved"
        );
    }
}
