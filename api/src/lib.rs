//! Typed client for the post-board ledger gateway.
//!
//! The free functions in this crate each open a connection, issue one call
//! and surface the result; [`LedgerRemote`] packages them behind the
//! [`Ledger`] trait, which is the seam the UI's sync controller is generic
//! over (tests substitute a scripted in-memory ledger).

#[cfg(not(target_arch = "wasm32"))]
pub mod ledger_rpc;

use postboard_types::cid::Cid;
use postboard_types::post::Post;
use postboard_types::post_id::PostId;
use postboard_types::response::Response;
use postboard_types::response_id::ResponseId;

pub type ApiError = anyhow::Error;
pub type ApiResult<T> = Result<T, ApiError>;

/// The read/write surface of the append-only post ledger.
///
/// All ids are 1-based and contiguous; writes resolve only once the ledger
/// has durably accepted the entry, and their confirmation carries the
/// assigned id.
#[allow(async_fn_in_trait)]
pub trait Ledger {
    async fn current_entry(&self) -> ApiResult<u64>;
    async fn get_post(&self, id: PostId) -> ApiResult<Post>;
    async fn create_post(&self, cid: Cid) -> ApiResult<PostId>;
    async fn respond_to_post(&self, post_id: PostId, cid: Cid) -> ApiResult<ResponseId>;
    async fn get_response(&self, post_id: PostId, response_id: ResponseId)
        -> ApiResult<Response>;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn current_entry() -> ApiResult<u64> {
    let client = ledger_rpc::rpc_client().await?;
    Ok(client.current_entry(tarpc::context::current()).await??)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn get_post(id: PostId) -> ApiResult<Post> {
    let client = ledger_rpc::rpc_client().await?;
    Ok(client.get_post(tarpc::context::current(), id).await??)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn create_post(cid: Cid) -> ApiResult<PostId> {
    let client = ledger_rpc::rpc_client().await?;
    let id = client.create_post(tarpc::context::current(), cid).await??;
    dioxus_logger::tracing::info!("ledger assigned post id {}", id);
    Ok(id)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn respond_to_post(post_id: PostId, cid: Cid) -> ApiResult<ResponseId> {
    let client = ledger_rpc::rpc_client().await?;
    let id = client
        .respond_to_post(tarpc::context::current(), post_id, cid)
        .await??;
    dioxus_logger::tracing::info!("ledger assigned response id {} on post {}", id, post_id);
    Ok(id)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn get_response(post_id: PostId, response_id: ResponseId) -> ApiResult<Response> {
    let client = ledger_rpc::rpc_client().await?;
    Ok(client
        .get_response(tarpc::context::current(), post_id, response_id)
        .await??)
}

/// [`Ledger`] implementation backed by the gateway RPC client.
///
/// Each call rides on `tarpc::context::current()`, whose default deadline
/// bounds how long a hung gateway can stall an operation.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct LedgerRemote;

#[cfg(not(target_arch = "wasm32"))]
impl Ledger for LedgerRemote {
    async fn current_entry(&self) -> ApiResult<u64> {
        current_entry().await
    }

    async fn get_post(&self, id: PostId) -> ApiResult<Post> {
        get_post(id).await
    }

    async fn create_post(&self, cid: Cid) -> ApiResult<PostId> {
        create_post(cid).await
    }

    async fn respond_to_post(&self, post_id: PostId, cid: Cid) -> ApiResult<ResponseId> {
        respond_to_post(post_id, cid).await
    }

    async fn get_response(
        &self,
        post_id: PostId,
        response_id: ResponseId,
    ) -> ApiResult<Response> {
        get_response(post_id, response_id).await
    }
}
