//! Plain data types shared between the ledger client and the UI.

pub mod cid;
pub mod ledger_error;
pub mod post;
pub mod post_id;
pub mod response;
pub mod response_id;
