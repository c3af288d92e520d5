//! Vote repository.

use std::sync::Arc;

use crate::entities::{Vote, vote};
use polls_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
};

/// Vote repository for database operations.
#[derive(Clone)]
pub struct VoteRepository {
    db: Arc<DatabaseConnection>,
}

impl VoteRepository {
    /// Create a new vote repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Create a new vote.
    pub async fn create(&self, model: vote::ActiveModel) -> AppResult<vote::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count votes cast for an option.
    pub async fn count_by_option(&self, option_id: i32) -> AppResult<u64> {
        Vote::find()
            .filter(vote::Column::OptionId.eq(option_id))
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, Set};

    #[tokio::test]
    async fn test_create() {
        let stored = vote::Model {
            id: 1,
            option_id: 3,
            created_at: Utc::now().into(),
        };

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[stored.clone()]])
                .into_connection(),
        );

        let repo = VoteRepository::new(db);
        let vote = repo
            .create(vote::ActiveModel {
                option_id: Set(3),
                created_at: Set(Utc::now().into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(vote.id, 1);
        assert_eq!(vote.option_id, 3);
    }
}
