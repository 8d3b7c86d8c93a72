use serde::Deserialize;
use serde::Serialize;

use crate::cid::Cid;

/// A question post as stored on the ledger.
///
/// The id is not part of the record; it is implied by the post's position
/// in the ledger (and therefore in a hydrated local list).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Content identifier of the question body.
    pub cid: Cid,
    /// Number of responses the ledger has accepted for this post.
    /// Monotonically non-decreasing; only the ledger increments it.
    pub response_count: u64,
}
