use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic rank of a title element.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    H1,
    H2,
    #[default]
    H3,
    H4,
    H5,
    H6,
}

impl Heading {
    pub fn level(self) -> u8 {
        match self {
            Heading::H1 => 1,
            Heading::H2 => 2,
            Heading::H3 => 3,
            Heading::H4 => 4,
            Heading::H5 => 5,
            Heading::H6 => 6,
        }
    }

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Heading::H1),
            2 => Some(Heading::H2),
            3 => Some(Heading::H3),
            4 => Some(Heading::H4),
            5 => Some(Heading::H5),
            6 => Some(Heading::H6),
            _ => None,
        }
    }
}

impl Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "h{}", self.level())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("{0:?} is not a heading level, expected h1 through h6")]
pub struct HeadingParseError(pub String);

impl FromStr for Heading {
    type Err = HeadingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('h')
            .or_else(|| trimmed.strip_prefix('H'))
            .unwrap_or(trimmed);

        digits
            .parse::<u8>()
            .ok()
            .and_then(Heading::from_level)
            .ok_or_else(|| HeadingParseError(s.to_string()))
    }
}
