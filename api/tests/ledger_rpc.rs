//! Round-trips the ledger RPC service over an in-process channel transport.

use std::sync::Arc;
use std::sync::Mutex;

use api::ledger_rpc::LedgerRpc;
use api::ledger_rpc::LedgerRpcClient;
use futures::StreamExt;
use postboard_types::cid::Cid;
use postboard_types::ledger_error::LedgerError;
use postboard_types::ledger_error::RpcResult;
use postboard_types::post::Post;
use postboard_types::post_id::PostId;
use postboard_types::response::Response;
use postboard_types::response_id::ResponseId;
use tarpc::context;
use tarpc::server::Channel;

/// Minimal in-memory ledger: an append-only list of posts, each with an
/// append-only list of response cids.
#[derive(Clone, Default)]
struct MemLedger {
    posts: Arc<Mutex<Vec<(Cid, Vec<Cid>)>>>,
}

impl LedgerRpc for MemLedger {
    async fn current_entry(self, _: context::Context) -> RpcResult<u64> {
        Ok(self.posts.lock().unwrap().len() as u64)
    }

    async fn get_post(self, _: context::Context, id: PostId) -> RpcResult<Post> {
        let posts = self.posts.lock().unwrap();
        let (cid, responses) = posts.get(id.index()).ok_or(LedgerError::UnknownPost(id))?;
        Ok(Post {
            cid: cid.clone(),
            response_count: responses.len() as u64,
        })
    }

    async fn create_post(self, _: context::Context, cid: Cid) -> RpcResult<PostId> {
        if cid.is_blank() {
            return Err(LedgerError::Rejected("empty cid".into()));
        }
        let mut posts = self.posts.lock().unwrap();
        posts.push((cid, Vec::new()));
        Ok(PostId::from_index(posts.len() - 1))
    }

    async fn respond_to_post(
        self,
        _: context::Context,
        post_id: PostId,
        cid: Cid,
    ) -> RpcResult<ResponseId> {
        let mut posts = self.posts.lock().unwrap();
        let (_, responses) = posts
            .get_mut(post_id.index())
            .ok_or(LedgerError::UnknownPost(post_id))?;
        responses.push(cid);
        Ok(ResponseId::from_index(responses.len() - 1))
    }

    async fn get_response(
        self,
        _: context::Context,
        post_id: PostId,
        response_id: ResponseId,
    ) -> RpcResult<Response> {
        let posts = self.posts.lock().unwrap();
        let (_, responses) = posts
            .get(post_id.index())
            .ok_or(LedgerError::UnknownPost(post_id))?;
        let cid = responses
            .get(response_id.index())
            .ok_or(LedgerError::UnknownResponse(post_id, response_id))?;
        Ok(Response { cid: cid.clone() })
    }
}

fn spawn_server() -> LedgerRpcClient {
    let (client_transport, server_transport) = tarpc::transport::channel::unbounded();
    tokio::spawn(
        tarpc::server::BaseChannel::with_defaults(server_transport)
            .execute(MemLedger::default().serve())
            .for_each(|response| async move {
                tokio::spawn(response);
            }),
    );
    LedgerRpcClient::new(tarpc::client::Config::default(), client_transport).spawn()
}

#[tokio::test]
async fn writes_assign_sequential_ids_and_reads_see_them() {
    let client = spawn_server();

    assert_eq!(client.current_entry(context::current()).await.unwrap(), Ok(0));

    let first = client
        .create_post(context::current(), Cid::new("ipfs://q1"))
        .await
        .unwrap()
        .unwrap();
    let second = client
        .create_post(context::current(), Cid::new("ipfs://q2"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first, PostId::FIRST);
    assert_eq!(second, PostId::from_index(1));

    let rid = client
        .respond_to_post(context::current(), first, Cid::new("ipfs://a1"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(rid, ResponseId::FIRST);

    let post = client
        .get_post(context::current(), first)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(post.cid, Cid::new("ipfs://q1"));
    assert_eq!(post.response_count, 1);

    let response = client
        .get_response(context::current(), first, rid)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(response.cid, Cid::new("ipfs://a1"));
}

#[tokio::test]
async fn ledger_errors_survive_the_wire() {
    let client = spawn_server();

    let missing = PostId::from_index(6);
    let err = client
        .get_post(context::current(), missing)
        .await
        .unwrap()
        .unwrap_err();
    assert_eq!(err, LedgerError::UnknownPost(missing));

    let err = client
        .create_post(context::current(), Cid::new("   "))
        .await
        .unwrap()
        .unwrap_err();
    assert!(matches!(err, LedgerError::Rejected(_)));
}
