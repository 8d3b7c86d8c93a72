use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// A 1-based, ledger-assigned post identifier.
///
/// The ledger numbers posts contiguously in creation order, so a local list
/// ordered by id maps index `i` to id `i + 1`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    pub const FIRST: PostId = PostId(1);

    /// The id of the post stored at 0-based list index `index`.
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
    pub fn first_n(count: u64) -> impl Iterator<Item = PostId> {
        Self::span(1, count)
    }

    /// Ids `first..=last`, both 1-based, in ascending order.
    pub fn span(first: u64, last: u64) -> impl Iterator<Item = PostId> {
        (first..=last).map(Self)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        assert_eq!(PostId::from_index(0), PostId::FIRST);
        assert_eq!(PostId::from_index(41).index(), 41);
    }

    #[test]
    fn first_n_is_ascending_and_one_based() {
        let ids: Vec<u64> = PostId::first_n(3).map(PostId::get).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(PostId::first_n(0).count(), 0);
    }
}
