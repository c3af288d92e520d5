//! Poll option repository.

use std::sync::Arc;

use crate::entities::{PollOption, Question, poll_option, question};
use polls_common::{AppError, AppResult};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

/// Repository for options.
#[derive(Clone)]
pub struct PollOptionRepository {
    db: Arc<DatabaseConnection>,
}

impl PollOptionRepository {
    /// Create a new option repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find an option by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<poll_option::Model>> {
        PollOption::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find an option only if its question belongs to the given poll.
    pub async fn find_in_poll(
        &self,
        option_id: i32,
        poll_id: i32,
    ) -> AppResult<Option<poll_option::Model>> {
        PollOption::find_by_id(option_id)
            .inner_join(Question)
            .filter(question::Column::PollId.eq(poll_id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
