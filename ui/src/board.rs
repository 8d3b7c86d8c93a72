//! State synchronization for the post board.
//!
//! [`Board`] owns the local mirror of the ledger: the ordered post list, the
//! response list of the currently selected post, and the two draft buffers.
//! All mutation goes through its operations; the screen layer only renders
//! what it exposes.

use api::Ledger;
use postboard_types::cid::Cid;
use postboard_types::post::Post;
use postboard_types::post_id::PostId;
use postboard_types::response::Response;
use postboard_types::response_id::ResponseId;

/// Failures surfaced to the view layer.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// The draft being submitted is empty or all whitespace. The ledger is
    /// not required to reject empty content, so this is enforced here.
    #[error("content must not be empty")]
    EmptyDraft,
    /// A response was submitted while the selection points past the post
    /// list (which happens while the board is still empty).
    #[error("no post is selected")]
    NoSelection,
    #[error(transparent)]
    Api(#[from] api::ApiError),
}

/// Local mirror of the ledger plus the drafts being edited.
///
/// Invariants:
/// - `posts[i]` holds the post with id `i + 1`; the list never exceeds the
///   ledger's post count.
/// - `responses[i]` holds response id `i + 1` of the post `responses_for`
///   names, for at most one post at a time. `responses_for` may lag behind
///   `selected` while a load is in flight or after one failed.
/// - a failed operation never leaves a partially appended list or a
///   cleared draft.
#[derive(Clone, Debug)]
pub struct Board<L> {
    ledger: L,
    posts: Vec<Post>,
    responses: Vec<Response>,
    responses_for: Option<PostId>,
    selected: usize,
    load_generation: u64,
    post_draft: String,
    response_draft: String,
}

impl<L: Ledger> Board<L> {
    pub fn new(ledger: L) -> Self {
        Self {
            ledger,
            posts: Vec::new(),
            responses: Vec::new(),
            responses_for: None,
            selected: 0,
            load_generation: 0,
            post_draft: String::new(),
            response_draft: String::new(),
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.posts.get(self.selected)
    }

    /// True when the response list belongs to the currently selected post.
    ///
    /// False means the list is left over from an earlier selection (its load
    /// has not landed yet, or failed) and should not be rendered as the
    /// selected post's responses.
    pub fn responses_are_current(&self) -> bool {
        match self.posts.get(self.selected) {
            Some(_) => self.responses_for == Some(PostId::from_index(self.selected)),
            None => true,
        }
    }

    pub fn load_generation(&self) -> u64 {
        self.load_generation
    }

    pub fn post_draft(&self) -> &str {
        &self.post_draft
    }

    pub fn response_draft(&self) -> &str {
        &self.response_draft
    }

    pub fn set_post_draft(&mut self, draft: impl Into<String>) {
        self.post_draft = draft.into();
    }

    pub fn set_response_draft(&mut self, draft: impl Into<String>) {
        self.response_draft = draft.into();
    }

    /// Replace the post list with a full read-through of the ledger.
    ///
    /// Posts are fetched one id at a time, in ascending order. A failed
    /// fetch aborts the pass and returns the error; the posts fetched
    /// before the failure stay in the list so the screen can still render
    /// the prefix.
    pub async fn hydrate(&mut self) -> Result<(), BoardError> {
        let count = self.ledger.current_entry().await?;
        self.posts.clear();
        for id in PostId::first_n(count) {
            let post = self.ledger.get_post(id).await?;
            self.posts.push(post);
        }
        Ok(())
    }

    /// Submit the post draft and append the confirmed post locally.
    ///
    /// The confirmation carries the id the ledger assigned. Fetching by
    /// that id rather than by local position keeps the list correct when
    /// another writer got in first: anything this client has not seen yet
    /// is backfilled along with its own post.
    pub async fn create_post(&mut self) -> Result<(), BoardError> {
        let cid = Cid::new(self.post_draft.trim());
        if cid.is_blank() {
            return Err(BoardError::EmptyDraft);
        }

        let created = self.ledger.create_post(cid).await?;
        let mut fetched = Vec::new();
        for id in PostId::span(self.posts.len() as u64 + 1, created.get()) {
            fetched.push(self.ledger.get_post(id).await?);
        }

        self.posts.append(&mut fetched);
        self.post_draft.clear();
        Ok(())
    }

    /// Mark `index` as the selected post and invalidate any in-flight
    /// response load.
    ///
    /// Returns the new load generation. A caller that applies the result
    /// of [`Board::load_responses`] asynchronously should keep the token
    /// and discard the result once the board has moved on to a newer
    /// selection.
    pub fn begin_select(&mut self, index: usize) -> u64 {
        self.selected = index;
        self.load_generation += 1;
        self.load_generation
    }

    /// Replace the response list with a full read-through of the selected
    /// post's responses.
    ///
    /// With nothing selected, or a post without responses, the list
    /// becomes empty without touching the ledger. A failed fetch leaves
    /// the previous list in place and returns the error.
    pub async fn load_responses(&mut self) -> Result<(), BoardError> {
        let Some(post) = self.posts.get(self.selected) else {
            self.responses.clear();
            self.responses_for = None;
            return Ok(());
        };

        let post_id = PostId::from_index(self.selected);
        let count = post.response_count;
        let mut fresh = Vec::new();
        for id in ResponseId::first_n(count) {
            fresh.push(self.ledger.get_response(post_id, id).await?);
        }

        self.responses = fresh;
        self.responses_for = Some(post_id);
        Ok(())
    }

    /// [`Board::begin_select`] and [`Board::load_responses`] in one step,
    /// for callers that are not racing selections.
    pub async fn select_post(&mut self, index: usize) -> Result<(), BoardError> {
        self.begin_select(index);
        self.load_responses().await
    }

    /// Submit the response draft against the selected post and append the
    /// confirmed response locally.
    ///
    /// Targets post id `selected + 1`. Backfills the response list up to
    /// the id the confirmation returned, mirroring [`Board::create_post`],
    /// and bumps the selected post's local response count.
    pub async fn respond_to_post(&mut self) -> Result<(), BoardError> {
        if self.posts.get(self.selected).is_none() {
            return Err(BoardError::NoSelection);
        }
        let cid = Cid::new(self.response_draft.trim());
        if cid.is_blank() {
            return Err(BoardError::EmptyDraft);
        }

        let post_id = PostId::from_index(self.selected);
        let created = self.ledger.respond_to_post(post_id, cid).await?;

        // The response list may still belong to an earlier selection whose
        // replacement load has not landed; appending to it would mix two
        // posts. Rebuild from id 1 in that case.
        let known = if self.responses_for == Some(post_id) {
            self.responses.len() as u64
        } else {
            0
        };
        let mut fetched = Vec::new();
        for id in ResponseId::span(known + 1, created.get()) {
            fetched.push(self.ledger.get_response(post_id, id).await?);
        }

        if self.responses_for == Some(post_id) {
            self.responses.append(&mut fetched);
        } else {
            self.responses = fetched;
            self.responses_for = Some(post_id);
        }
        if let Some(post) = self.posts.get_mut(self.selected) {
            post.response_count = post.response_count.max(self.responses.len() as u64);
        }
        self.response_draft.clear();
        Ok(())
    }

    // The screen runs each operation on a clone of the live board, because a
    // borrow cannot be held across the await. Folding the whole clone back
    // would revert everything else that happened meanwhile (a draft typed
    // during a submission, a post created during a slow load), so each
    // operation has an adopt method that moves only the fields it owns into
    // the live board.

    /// Fold a completed [`Board::hydrate`] back into the live board.
    ///
    /// Hydration owns the post list; drafts, selection and responses stay
    /// as the live board has them.
    pub fn adopt_hydration(&mut self, snapshot: Board<L>) {
        self.posts = snapshot.posts;
    }

    /// Fold a completed [`Board::create_post`] back into the live board.
    ///
    /// The submission owns its draft and the tail of the post list; posts
    /// the live board already knows keep their local state.
    pub fn adopt_post_submission(&mut self, snapshot: Board<L>) {
        let known = self.posts.len();
        self.posts.extend(snapshot.posts.into_iter().skip(known));
        self.post_draft = snapshot.post_draft;
    }

    /// Fold a completed [`Board::load_responses`] back into the live board.
    ///
    /// Callers racing selections should first compare the live
    /// [`Board::load_generation`] against the token their
    /// [`Board::begin_select`] returned and drop stale results.
    pub fn adopt_response_load(&mut self, snapshot: Board<L>) {
        self.responses = snapshot.responses;
        self.responses_for = snapshot.responses_for;
    }

    /// Fold a completed [`Board::respond_to_post`] back into the live board.
    ///
    /// Owns the response list, its draft, and the target post's response
    /// count; the count is recomputed against the live post list, which may
    /// have grown while the submission was in flight.
    pub fn adopt_response_submission(&mut self, snapshot: Board<L>) {
        self.responses = snapshot.responses;
        self.responses_for = snapshot.responses_for;
        self.response_draft = snapshot.response_draft;
        if let Some(id) = self.responses_for {
            if let Some(post) = self.posts.get_mut(id.index()) {
                post.response_count = post.response_count.max(self.responses.len() as u64);
            }
        }
    }
}
