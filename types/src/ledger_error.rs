use serde::Deserialize;
use serde::Serialize;

use crate::post_id::PostId;
use crate::response_id::ResponseId;

/// Errors the ledger reports for a rejected read or write.
///
/// Serializable so it crosses the RPC boundary intact instead of collapsing
/// into a transport error string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum LedgerError {
    #[error("post {0} does not exist")]
    UnknownPost(PostId),
    #[error("post {0} has no response {1}")]
    UnknownResponse(PostId, ResponseId),
    #[error("submission rejected: {0}")]
    Rejected(String),
}

pub type RpcResult<T> = Result<T, LedgerError>;
