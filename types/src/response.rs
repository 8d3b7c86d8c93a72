use serde::Deserialize;
use serde::Serialize;

use crate::cid::Cid;

/// A single response to a post.
///
/// Like posts, responses carry no explicit id; position within the parent
/// post's response sequence identifies them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Content identifier of the response body.
    pub cid: Cid,
}
