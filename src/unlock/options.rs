// src/unlock/options.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error raised when an unlock option identifier can't be understood
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnlockOptionError {
    UnknownOption(String),
}

impl fmt::Display for UnlockOptionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UnlockOptionError::UnknownOption(id) => write!(f, "Unknown unlock option: {}", id),
        }
    }
}

impl std::error::Error for UnlockOptionError {}

impl From<String> for UnlockOptionError {
    fn from(s: String) -> Self {
        UnlockOptionError::UnknownOption(s)
    }
}

impl From<&str> for UnlockOptionError {
    fn from(s: &str) -> Self {
        UnlockOptionError::UnknownOption(s.to_string())
    }
}

/// Scope of intent signals a user can unlock
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnlockOptionId {
    Current,
    SuperStrong,
    VeryStrong,
    Strong,
    All,
}

impl UnlockOptionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnlockOptionId::Current => "current",
            UnlockOptionId::SuperStrong => "super_strong",
            UnlockOptionId::VeryStrong => "very_strong",
            UnlockOptionId::Strong => "strong",
            UnlockOptionId::All => "all",
        }
    }
}

impl fmt::Display for UnlockOptionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnlockOptionId {
    type Err = UnlockOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "current" => Ok(UnlockOptionId::Current),
            "super_strong" => Ok(UnlockOptionId::SuperStrong),
            "very_strong" => Ok(UnlockOptionId::VeryStrong),
            "strong" => Ok(UnlockOptionId::Strong),
            "all" => Ok(UnlockOptionId::All),
            other => Err(other.into()),
        }
    }
}

/// Display entry for one checkbox row in the unlock dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockOption {
    pub id: UnlockOptionId,
    pub label: &'static str,
    pub description: &'static str,
}

const UNLOCK_OPTIONS: [UnlockOption; 5] = [
    UnlockOption {
        id: UnlockOptionId::Current,
        label: "Unlock Current Signal",
        description: "This company's intent signal",
    },
    UnlockOption {
        id: UnlockOptionId::SuperStrong,
        label: "Super Strong Signals Only",
        description: "Companies with super strong intent signals",
    },
    UnlockOption {
        id: UnlockOptionId::VeryStrong,
        label: "Very Strong Signals Only",
        description: "Companies with very strong intent signals",
    },
    UnlockOption {
        id: UnlockOptionId::Strong,
        label: "Strong Signals Only",
        description: "Companies with strong intent signals",
    },
    UnlockOption {
        id: UnlockOptionId::All,
        label: "Unlock All Signals",
        description: "All intent signals in this list",
    },
];

/// Get the fixed catalog of unlock options, in display order
pub fn unlock_options() -> &'static [UnlockOption] {
    &UNLOCK_OPTIONS
}
