//! Deployment environment names
//!
//! Every raw value collapses to one of three canonical names. Anything
//! unrecognized, including an absent value, becomes `dev`.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Canonical deployment stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvName {
    #[default]
    Dev,
    Qa,
    Prod,
}

impl EnvName {
    /// All environments, in pipeline order
    pub const ALL: [EnvName; 3] = [EnvName::Dev, EnvName::Qa, EnvName::Prod];

    /// Lowercase canonical name
    pub fn as_str(self) -> &'static str {
        match self {
            EnvName::Dev => "dev",
            EnvName::Qa => "qa",
            EnvName::Prod => "prod",
        }
    }
}

impl fmt::Display for EnvName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnvName {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(normalize(Some(s)))
    }
}

/// Normalize a raw environment value to a canonical name
pub fn normalize(raw: Option<&str>) -> EnvName {
    raw.and_then(canonical).unwrap_or_default()
}

/// True when `raw` names a known environment without falling back
pub fn is_recognized(raw: &str) -> bool {
    canonical(raw).is_some()
}

/// Exact canonical match after trimming and lowercasing
fn canonical(raw: &str) -> Option<EnvName> {
    let value = trim_separators(raw).to_lowercase();
    EnvName::ALL.into_iter().find(|env| env.as_str() == value)
}

/// Trim Unicode whitespace plus the ASCII information separators (0x1c-0x1f)
fn trim_separators(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}
