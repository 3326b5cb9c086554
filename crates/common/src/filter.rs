//! Filter identifiers for the image overlay.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseFilterError;

/// The closed set of filters a session can have active.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    #[default]
    None,
    Sepia,
    Blur,
    Grayscale,
    Invert,
}

impl FilterKind {
    /// Stable lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sepia => "sepia",
            Self::Blur => "blur",
            Self::Grayscale => "grayscale",
            Self::Invert => "invert",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Sepia => "Sepia",
            Self::Blur => "Blur",
            Self::Grayscale => "Grayscale",
            Self::Invert => "Invert",
        }
    }

    /// All filters in picker display order.
    pub fn all() -> &'static [FilterKind] {
        &[
            Self::None,
            Self::Sepia,
            Self::Blur,
            Self::Invert,
            Self::Grayscale,
        ]
    }

    pub fn is_none(self) -> bool {
        self == Self::None
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseFilterError {
                name: s.to_string(),
            })
    }
}
