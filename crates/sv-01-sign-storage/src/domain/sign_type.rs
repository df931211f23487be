//! The closed set of sign behaviours.

use super::errors::UnknownSignType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a registered sign does when used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignType {
    Deposit,
    Withdraw,
}

impl SignType {
    /// Every variant, in declaration order.
    pub const ALL: [SignType; 2] = [SignType::Deposit, SignType::Withdraw];

    /// Canonical lowercase name.
    ///
    /// Used as the configuration key under `options.signs.signTexts.types`
    /// and as the text players write on line 1 at creation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SignType::Deposit => "deposit",
            SignType::Withdraw => "withdraw",
        }
    }

    /// Case-insensitive lookup by name. Surrounding whitespace is ignored.
    #[must_use]
    pub fn from_name(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::ALL
            .into_iter()
            .find(|sign_type| sign_type.name().eq_ignore_ascii_case(text))
    }
}

impl fmt::Display for SignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignType {
    type Err = UnknownSignType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownSignType(s.to_string()))
    }
}
