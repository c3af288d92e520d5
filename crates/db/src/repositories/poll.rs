//! Poll repository.

use std::sync::Arc;

use crate::entities::{Poll, PollOption, Question, poll, poll_option, question};
use polls_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, LoaderTrait, ModelTrait, QueryOrder, Set,
    TransactionTrait,
};

/// A question to insert together with its option texts.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    /// Question text.
    pub text: String,
    /// Option texts, in display order.
    pub options: Vec<String>,
}

/// A question with its options, both in insertion order.
#[derive(Debug, Clone)]
pub struct QuestionWithOptions {
    /// The question row.
    pub question: question::Model,
    /// The question's options.
    pub options: Vec<poll_option::Model>,
}

/// A poll with its full question/option tree.
#[derive(Debug, Clone)]
pub struct PollWithQuestions {
    /// The poll row.
    pub poll: poll::Model,
    /// The poll's questions.
    pub questions: Vec<QuestionWithOptions>,
}

/// Poll repository for database operations.
#[derive(Clone)]
pub struct PollRepository {
    db: Arc<DatabaseConnection>,
}

impl PollRepository {
    /// Create a new poll repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a poll by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<poll::Model>> {
        Poll::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// List every poll in ascending ID order.
    pub async fn find_all(&self) -> AppResult<Vec<poll::Model>> {
        Poll::find()
            .order_by_asc(poll::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Insert a poll with its questions and options in a single transaction.
    ///
    /// Nothing is persisted unless every row is inserted.
    pub async fn create_with_questions(
        &self,
        title: String,
        questions: Vec<NewQuestion>,
    ) -> AppResult<poll::Model> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let poll = poll::ActiveModel {
            title: Set(title),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        for new_question in questions {
            let question = question::ActiveModel {
                text: Set(new_question.text),
                poll_id: Set(poll.id),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

            for text in new_question.options {
                poll_option::ActiveModel {
                    text: Set(text),
                    question_id: Set(question.id),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            }
        }

        txn.commit()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(poll)
    }

    /// Load a poll with its questions and their options.
    ///
    /// Runs three queries regardless of tree size: the poll, its questions,
    /// and all options of those questions batched by question ID.
    pub async fn find_with_questions(&self, id: i32) -> AppResult<Option<PollWithQuestions>> {
        let Some(poll) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let questions = poll
            .find_related(Question)
            .order_by_asc(question::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let options = questions
            .load_many(
                PollOption::find().order_by_asc(poll_option::Column::Id),
                self.db.as_ref(),
            )
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let questions = questions
            .into_iter()
            .zip(options)
            .map(|(question, options)| QuestionWithOptions { question, options })
            .collect();

        Ok(Some(PollWithQuestions { poll, questions }))
    }

    /// Delete a poll. Questions, options and votes go with it via cascading
    /// foreign keys.
    ///
    /// Returns `false` when no poll had that ID.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = Poll::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn create_test_poll(id: i32, title: &str) -> poll::Model {
        poll::Model {
            id,
            title: title.to_string(),
        }
    }

    fn create_test_question(id: i32, poll_id: i32, text: &str) -> question::Model {
        question::Model {
            id,
            text: text.to_string(),
            poll_id,
        }
    }

    fn create_test_option(id: i32, question_id: i32, text: &str) -> poll_option::Model {
        poll_option::Model {
            id,
            text: text.to_string(),
            question_id,
        }
    }

    #[tokio::test]
    async fn test_find_all() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[
                    create_test_poll(1, "Favorite Color"),
                    create_test_poll(2, "Lunch"),
                ]])
                .into_connection(),
        );

        let repo = PollRepository::new(db);
        let result = repo.find_all().await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].title, "Favorite Color");
        assert_eq!(result[1].id, 2);
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<poll::Model>::new()])
                .into_connection(),
        );

        let repo = PollRepository::new(db);
        assert!(repo.find_by_id(99999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_with_questions() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[create_test_poll(7, "X")]])
                .append_query_results([[create_test_question(70, 7, "Q1")]])
                .append_query_results([[create_test_option(700, 70, "A")]])
                .append_query_results([[create_test_option(701, 70, "B")]])
                .into_connection(),
        );

        let repo = PollRepository::new(db);
        let poll = repo
            .create_with_questions(
                "X".to_string(),
                vec![NewQuestion {
                    text: "Q1".to_string(),
                    options: vec!["A".to_string(), "B".to_string()],
                }],
            )
            .await
            .unwrap();

        assert_eq!(poll.id, 7);
        assert_eq!(poll.title, "X");
    }

    #[tokio::test]
    async fn test_create_fails_when_insert_fails() {
        // Only the poll insert has a result; the question insert errors out.
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[create_test_poll(7, "X")]])
                .append_query_errors([sea_orm::DbErr::Custom("insert failed".to_string())])
                .into_connection(),
        );

        let repo = PollRepository::new(db);
        let result = repo
            .create_with_questions(
                "X".to_string(),
                vec![NewQuestion {
                    text: "Q1".to_string(),
                    options: vec![],
                }],
            )
            .await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_find_with_questions() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[create_test_poll(1, "X")]])
                .append_query_results([[
                    create_test_question(10, 1, "Q1"),
                    create_test_question(11, 1, "Q2"),
                ]])
                .append_query_results([[
                    create_test_option(100, 10, "A"),
                    create_test_option(101, 10, "B"),
                    create_test_option(110, 11, "C"),
                ]])
                .into_connection(),
        );

        let repo = PollRepository::new(db);
        let detail = repo.find_with_questions(1).await.unwrap().unwrap();

        assert_eq!(detail.poll.title, "X");
        assert_eq!(detail.questions.len(), 2);
        assert_eq!(detail.questions[0].question.text, "Q1");
        let first: Vec<&str> = detail.questions[0]
            .options
            .iter()
            .map(|o| o.text.as_str())
            .collect();
        assert_eq!(first, vec!["A", "B"]);
        assert_eq!(detail.questions[1].options.len(), 1);
        assert_eq!(detail.questions[1].options[0].id, 110);
    }

    #[tokio::test]
    async fn test_find_with_questions_missing_poll() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<poll::Model>::new()])
                .into_connection(),
        );

        let repo = PollRepository::new(db);
        assert!(repo.find_with_questions(5).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_affected_rows() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([
                    MockExecResult {
                        last_insert_id: 0,
                        rows_affected: 1,
                    },
                    MockExecResult {
                        last_insert_id: 0,
                        rows_affected: 0,
                    },
                ])
                .into_connection(),
        );

        let repo = PollRepository::new(db);
        assert!(repo.delete(1).await.unwrap());
        assert!(!repo.delete(99999).await.unwrap());
    }
}
