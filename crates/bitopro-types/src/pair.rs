//! Trading pair identifiers (bito_twd format)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trading pair identifier
///
/// Always stored lower-case, which is the form the API expects in paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pair(String);

impl Pair {
    /// BITO/TWD trading pair
    pub const BITO_TWD: &'static str = "bito_twd";
    /// BTC/TWD trading pair
    pub const BTC_TWD: &'static str = "btc_twd";
    /// ETH/TWD trading pair
    pub const ETH_TWD: &'static str = "eth_twd";
    /// USDT/TWD trading pair
    pub const USDT_TWD: &'static str = "usdt_twd";

    /// Create a pair, lower-casing the input without validating it
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().trim().to_ascii_lowercase())
    }

    /// Get the pair as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the base currency (e.g., "bito" from "bito_twd")
    pub fn base(&self) -> Option<&str> {
        self.0.split_once('_').map(|(base, _)| base)
    }

    /// Get the quote currency (e.g., "twd" from "bito_twd")
    pub fn quote(&self) -> Option<&str> {
        self.0.split_once('_').map(|(_, quote)| quote)
    }
}

impl FromStr for Pair {
    type Err = PairParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pair = Self::new(s);

        if pair.0.is_empty() {
            return Err(PairParseError::Empty);
        }

        if !pair
            .0
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(PairParseError::InvalidCharacter(s.to_string()));
        }

        Ok(pair)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Pair {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Pair {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Pair {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Error parsing a pair
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PairParseError {
    #[error("Pair must not be empty")]
    Empty,

    #[error("Pair may only contain letters, digits and '_': {0}")]
    InvalidCharacter(String),
}
