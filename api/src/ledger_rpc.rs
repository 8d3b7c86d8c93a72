use std::net::Ipv4Addr;
use std::net::SocketAddr;

use postboard_types::cid::Cid;
use postboard_types::ledger_error::RpcResult;
use postboard_types::post::Post;
use postboard_types::post_id::PostId;
use postboard_types::response::Response;
use postboard_types::response_id::ResponseId;
use tarpc::client;
use tarpc::tokio_serde::formats::Json;

use crate::ApiError;

/// RPC surface of the ledger gateway, the process that owns the actual
/// chain connection and translates these calls into contract reads/writes.
#[tarpc::service]
pub trait LedgerRpc {
    /// Number of posts the ledger has accepted so far.
    async fn current_entry() -> RpcResult<u64>;

    /// Fetch a post by its 1-based id.
    async fn get_post(id: PostId) -> RpcResult<Post>;

    /// Append a new post. The confirmation carries the id the ledger
    /// assigned, so callers never have to infer it from local state.
    async fn create_post(cid: Cid) -> RpcResult<PostId>;

    /// Append a response to a post; returns the assigned response id.
    async fn respond_to_post(post_id: PostId, cid: Cid) -> RpcResult<ResponseId>;

    /// Fetch one response of a post by its 1-based id.
    async fn get_response(post_id: PostId, response_id: ResponseId) -> RpcResult<Response>;
}

pub fn ledger_rpc_port() -> u16 {
    const DEFAULT_PORT: u16 = 9931;
    std::env::var("POSTBOARD_LEDGER_RPC_PORT")
        .unwrap_or("".to_string())
        .parse()
        .unwrap_or(DEFAULT_PORT)
}

/// Connect a fresh client to the gateway.
///
/// No caching: a connection on localhost is cheap to establish, and a fresh
/// client per call means nothing has to be invalidated when one errors out.
pub async fn rpc_client() -> Result<LedgerRpcClient, ApiError> {
    let server_socket = SocketAddr::new(
        std::net::IpAddr::V4(Ipv4Addr::LOCALHOST),
        ledger_rpc_port(),
    );
    let transport = tarpc::serde_transport::tcp::connect(server_socket, Json::default).await?;

    Ok(LedgerRpcClient::new(client::Config::default(), transport).spawn())
}
