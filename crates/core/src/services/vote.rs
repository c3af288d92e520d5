//! Vote service.

use chrono::Utc;
use polls_common::{AppError, AppResult};
use polls_db::{
    entities::vote,
    repositories::{PollOptionRepository, VoteRepository},
};
use sea_orm::Set;
use serde::Deserialize;

/// Input for casting a vote.
#[derive(Debug, Default, Deserialize)]
pub struct CastVoteInput {
    /// Option being voted for. Absent or `null` is rejected like an unknown option.
    #[serde(default)]
    pub option_id: Option<i32>,
}

/// Vote service for business logic.
#[derive(Clone)]
pub struct VoteService {
    option_repo: PollOptionRepository,
    vote_repo: VoteRepository,
}

impl VoteService {
    /// Create a new vote service.
    #[must_use]
    pub const fn new(option_repo: PollOptionRepository, vote_repo: VoteRepository) -> Self {
        Self {
            option_repo,
            vote_repo,
        }
    }

    /// Record a vote for an option of the given poll.
    ///
    /// The option must exist and sit under one of the poll's questions.
    /// Repeat votes are accepted.
    pub async fn cast_vote(&self, poll_id: i32, input: CastVoteInput) -> AppResult<vote::Model> {
        let invalid = || AppError::BadRequest("Invalid option or poll".to_string());

        let option_id = input.option_id.ok_or_else(invalid)?;
        let option = self
            .option_repo
            .find_in_poll(option_id, poll_id)
            .await?
            .ok_or_else(invalid)?;

        let vote = self
            .vote_repo
            .create(vote::ActiveModel {
                option_id: Set(option.id),
                created_at: Set(Utc::now().into()),
                ..Default::default()
            })
            .await?;

        tracing::info!(poll_id, option_id, vote_id = vote.id, "Vote cast");
        Ok(vote)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use polls_db::entities::poll_option;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn service(db: MockDatabase) -> VoteService {
        let db = Arc::new(db.into_connection());
        VoteService::new(
            PollOptionRepository::new(Arc::clone(&db)),
            VoteRepository::new(db),
        )
    }

    fn blue_option() -> poll_option::Model {
        poll_option::Model {
            id: 3,
            text: "Blue".to_string(),
            question_id: 1,
        }
    }

    #[tokio::test]
    async fn test_cast_vote() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[blue_option()]])
            .append_query_results([[vote::Model {
                id: 10,
                option_id: 3,
                created_at: Utc::now().into(),
            }]]);

        let vote = service(db)
            .cast_vote(1, CastVoteInput { option_id: Some(3) })
            .await
            .unwrap();

        assert_eq!(vote.id, 10);
        assert_eq!(vote.option_id, 3);
    }

    #[tokio::test]
    async fn test_cast_vote_option_of_other_poll() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<poll_option::Model>::new()]);

        let result = service(db)
            .cast_vote(2, CastVoteInput { option_id: Some(3) })
            .await;

        match result {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Invalid option or poll"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_cast_vote_without_option() {
        let db = MockDatabase::new(DatabaseBackend::Postgres);

        let result = service(db).cast_vote(1, CastVoteInput::default()).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
