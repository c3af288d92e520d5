//! Shared application state and HTTP middleware layers.

use std::sync::Arc;

use polls_core::{PollService, VoteService};
use polls_db::repositories::{PollOptionRepository, PollRepository, VoteRepository};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Poll creation, retrieval and deletion.
    pub poll_service: PollService,
    /// Vote casting.
    pub vote_service: VoteService,
}

impl AppState {
    /// Wire repositories and services around one connection pool.
    #[must_use]
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        let poll_repo = PollRepository::new(Arc::clone(&db));
        let option_repo = PollOptionRepository::new(Arc::clone(&db));
        let vote_repo = VoteRepository::new(db);

        Self {
            poll_service: PollService::new(poll_repo),
            vote_service: VoteService::new(option_repo, vote_repo),
        }
    }
}

/// Permissive CORS; the API is unauthenticated.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
