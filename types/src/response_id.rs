use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// A 1-based response identifier, contiguous within its parent post.
///
/// Ids only distinguish responses of the same post; the pair
/// (post id, response id) is what the ledger addresses.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ResponseId(u64);

impl ResponseId {
    pub const FIRST: ResponseId = ResponseId(1);

    /// The id of the response stored at 0-based list index `index`.
    pub fn from_index(index: usize) -> Self {
        Self(index as u64 + 1)
    }

    /// The 0-based list index this id maps to.
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Ids `1..=count`, in ascending order.
    pub fn first_n(count: u64) -> impl Iterator<Item = ResponseId> {
        Self::span(1, count)
    }

    /// Ids `first..=last`, both 1-based, in ascending order.
    pub fn span(first: u64, last: u64) -> impl Iterator<Item = ResponseId> {
        (first..=last).map(Self)
    }
}

impl fmt::Display for ResponseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
