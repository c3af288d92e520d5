//! Poll service.

use polls_common::{AppError, AppResult};
use polls_db::{
    entities::poll,
    repositories::{NewQuestion, PollRepository, PollWithQuestions},
};
use serde::Deserialize;
use validator::Validate;

/// Input for creating a poll.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePollInput {
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    #[validate(nested)]
    pub questions: Vec<CreateQuestionInput>,
}

/// A question inside [`CreatePollInput`].
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionInput {
    #[validate(length(min = 1))]
    pub text: String,
    #[serde(default)]
    pub options: Vec<String>,
}

/// Poll service for business logic.
#[derive(Clone)]
pub struct PollService {
    poll_repo: PollRepository,
}

impl PollService {
    /// Create a new poll service.
    #[must_use]
    pub const fn new(poll_repo: PollRepository) -> Self {
        Self { poll_repo }
    }

    /// Create a poll with its questions and options.
    pub async fn create_poll(&self, input: CreatePollInput) -> AppResult<poll::Model> {
        input.validate()?;

        for question in &input.questions {
            if question.options.iter().any(|text| text.trim().is_empty()) {
                return Err(AppError::Validation(
                    "Poll options cannot be empty".to_string(),
                ));
            }
        }

        let question_count = input.questions.len();
        let questions = input
            .questions
            .into_iter()
            .map(|q| NewQuestion {
                text: q.text,
                options: q.options,
            })
            .collect();

        let poll = self
            .poll_repo
            .create_with_questions(input.title, questions)
            .await?;

        tracing::info!(poll_id = poll.id, questions = question_count, "Poll created");
        Ok(poll)
    }

    /// List all polls.
    pub async fn list_polls(&self) -> AppResult<Vec<poll::Model>> {
        self.poll_repo.find_all().await
    }

    /// Get a poll with its questions and options.
    pub async fn get_poll(&self, poll_id: i32) -> AppResult<PollWithQuestions> {
        self.poll_repo
            .find_with_questions(poll_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))
    }

    /// Delete a poll and everything under it.
    pub async fn delete_poll(&self, poll_id: i32) -> AppResult<()> {
        if !self.poll_repo.delete(poll_id).await? {
            return Err(AppError::NotFound("Poll not found".to_string()));
        }

        tracing::info!(poll_id, "Poll deleted");
        Ok(())
    }
}
