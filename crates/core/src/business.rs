//! Closed business enumerations for user records and their display options.
//!
//! The wire codes (`"1"` / `"2"`) are part of the external contract. Labels
//! are presentation-only and never drive directory logic.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Role codes
// ---------------------------------------------------------------------------

/// Well-known role codes carried in `userRoles`.
pub mod role_codes {
    pub const ADMIN: &str = "R_ADMIN";
    pub const USER: &str = "R_USER";
}

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// User gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "1")]
    Male,
    #[serde(rename = "2")]
    Female,
}

impl Gender {
    pub const fn code(self) -> &'static str {
        match self {
            Gender::Male => "1",
            Gender::Female => "2",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Account enable status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnableStatus {
    #[serde(rename = "1")]
    Enable,
    #[serde(rename = "2")]
    Disable,
}

impl EnableStatus {
    pub const fn code(self) -> &'static str {
        match self {
            EnableStatus::Enable => "1",
            EnableStatus::Disable => "2",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EnableStatus::Enable => "Enable",
            EnableStatus::Disable => "Disable",
        }
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    /// Parse a wire code (`"1"` / `"2"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GENDER_OPTIONS
            .iter()
            .map(|opt| opt.value)
            .find(|g| g.code() == s)
            .ok_or_else(|| CoreError::Validation(format!("unknown gender code '{s}'")))
    }
}

impl FromStr for EnableStatus {
    type Err = CoreError;

    /// Parse a wire code (`"1"` / `"2"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ENABLE_STATUS_OPTIONS
            .iter()
            .map(|opt| opt.value)
            .find(|st| st.code() == s)
            .ok_or_else(|| CoreError::Validation(format!("unknown status code '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// Select options
// ---------------------------------------------------------------------------

/// A `{ label, value }` pair for populating selection widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption<T: 'static> {
    pub label: &'static str,
    pub value: T,
}

pub const GENDER_OPTIONS: &[SelectOption<Gender>] = &[
    SelectOption {
        label: Gender::Male.label(),
        value: Gender::Male,
    },
    SelectOption {
        label: Gender::Female.label(),
        value: Gender::Female,
    },
];

pub const ENABLE_STATUS_OPTIONS: &[SelectOption<EnableStatus>] = &[
    SelectOption {
        label: EnableStatus::Enable.label(),
        value: EnableStatus::Enable,
    },
    SelectOption {
        label: EnableStatus::Disable.label(),
        value: EnableStatus::Disable,
    },
];
