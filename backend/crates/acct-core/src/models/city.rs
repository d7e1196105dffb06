use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// City choices offered on the profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Cairo,
    Alexandria,
    Giza,
    London,
    Paris,
    Berlin,
    Madrid,
    Rome,
    Dubai,
    NewYork,
    Tokyo,
}

impl City {
    /// Every choice, in the order the select widget lists them
    pub const ALL: [City; 11] = [
        City::Cairo,
        City::Alexandria,
        City::Giza,
        City::London,
        City::Paris,
        City::Berlin,
        City::Madrid,
        City::Rome,
        City::Dubai,
        City::NewYork,
        City::Tokyo,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cairo => "cairo",
            Self::Alexandria => "alexandria",
            Self::Giza => "giza",
            Self::London => "london",
            Self::Paris => "paris",
            Self::Berlin => "berlin",
            Self::Madrid => "madrid",
            Self::Rome => "rome",
            Self::Dubai => "dubai",
            Self::NewYork => "new_york",
            Self::Tokyo => "tokyo",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cairo => "Cairo",
            Self::Alexandria => "Alexandria",
            Self::Giza => "Giza",
            Self::London => "London",
            Self::Paris => "Paris",
            Self::Berlin => "Berlin",
            Self::Madrid => "Madrid",
            Self::Rome => "Rome",
            Self::Dubai => "Dubai",
            Self::NewYork => "New York",
            Self::Tokyo => "Tokyo",
        }
    }
}

impl FromStr for City {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        City::ALL
            .iter()
            .copied()
            .find(|city| city.as_str() == s)
            .ok_or_else(|| CoreError::InvalidCity {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
