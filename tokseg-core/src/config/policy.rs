//! Newline handling policy

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How newline marker tokens affect sentence boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NewlinePolicy {
    /// Newlines are discarded without ending a sentence
    #[default]
    Never,
    /// Every newline ends a sentence
    Always,
    /// Two consecutive newlines end a sentence
    TwoConsecutive,
}

impl NewlinePolicy {
    /// All policies, in documentation order
    pub const ALL: [NewlinePolicy; 3] = [
        NewlinePolicy::Never,
        NewlinePolicy::Always,
        NewlinePolicy::TwoConsecutive,
    ];

    /// Look up a policy by name, rejecting an absent name
    ///
    /// Accepts `always`, `never`, and any name containing `two`
    /// (`two`, `two_consecutive`, `onlyTwoConsecutive`), ignoring ASCII case.
    pub fn from_name(name: Option<&str>) -> Result<Self> {
        match name {
            Some(name) => name.parse(),
            None => Err(Error::InvalidNewlinePolicy("<none>".to_string())),
        }
    }

    /// Canonical name, accepted back by [`NewlinePolicy::from_name`]
    pub fn as_str(&self) -> &'static str {
        match self {
            NewlinePolicy::Never => "never",
            NewlinePolicy::Always => "always",
            NewlinePolicy::TwoConsecutive => "two_consecutive",
        }
    }
}

impl FromStr for NewlinePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "always" => Ok(NewlinePolicy::Always),
            "never" => Ok(NewlinePolicy::Never),
            other if other.contains("two") => Ok(NewlinePolicy::TwoConsecutive),
            _ => Err(Error::InvalidNewlinePolicy(s.to_string())),
        }
    }
}

impl TryFrom<String> for NewlinePolicy {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<NewlinePolicy> for String {
    fn from(policy: NewlinePolicy) -> Self {
        policy.as_str().to_string()
    }
}

impl fmt::Display for NewlinePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
