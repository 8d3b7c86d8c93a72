use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// An opaque content identifier, e.g. `ipfs://…`.
///
/// The board never interprets or fetches the referenced content; the string
/// travels to and from the ledger untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cid(String);

impl Cid {
    pub fn new(cid: impl Into<String>) -> Self {
        Self(cid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the identifier is empty or all whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Cid {
    fn from(cid: String) -> Self {
        Self(cid)
    }
}

impl From<&str> for Cid {
    fn from(cid: &str) -> Self {
        Self(cid.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blankness() {
        assert!(Cid::new("").is_blank());
        assert!(Cid::new("  \t").is_blank());
        assert!(!Cid::new("ipfs://abc").is_blank());
    }
}
