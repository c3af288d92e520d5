//! Poll endpoints.
//!
//! Routes keep their trailing slash: `/polls/` and `/polls/{poll_id}/`.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use polls_common::AppResult;
use polls_core::{CastVoteInput, CreatePollInput};
use polls_db::{
    entities::{poll, poll_option},
    repositories::{PollWithQuestions, QuestionWithOptions},
};
use serde::Serialize;

use crate::{extractors::JsonBody, middleware::AppState, response::Message};

/// Poll list entry.
#[derive(Debug, Serialize)]
pub struct PollSummaryResponse {
    pub id: i32,
    pub title: String,
}

impl From<poll::Model> for PollSummaryResponse {
    fn from(poll: poll::Model) -> Self {
        Self {
            id: poll.id,
            title: poll.title,
        }
    }
}

/// Poll with its questions and options.
#[derive(Debug, Serialize)]
pub struct PollDetailResponse {
    pub id: i32,
    pub title: String,
    pub questions: Vec<QuestionResponse>,
}

/// Question response.
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub id: i32,
    pub text: String,
    pub options: Vec<OptionResponse>,
}

/// Option response.
#[derive(Debug, Serialize)]
pub struct OptionResponse {
    pub id: i32,
    pub text: String,
}

impl From<PollWithQuestions> for PollDetailResponse {
    fn from(detail: PollWithQuestions) -> Self {
        Self {
            id: detail.poll.id,
            title: detail.poll.title,
            questions: detail.questions.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<QuestionWithOptions> for QuestionResponse {
    fn from(entry: QuestionWithOptions) -> Self {
        Self {
            id: entry.question.id,
            text: entry.question.text,
            options: entry.options.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<poll_option::Model> for OptionResponse {
    fn from(option: poll_option::Model) -> Self {
        Self {
            id: option.id,
            text: option.text,
        }
    }
}

/// Create a poll.
async fn create_poll(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreatePollInput>,
) -> AppResult<Message> {
    let poll = state.poll_service.create_poll(input).await?;

    Ok(Message::created(format!(
        "Poll '{}' created with id {}",
        poll.title, poll.id
    )))
}

/// List all polls.
async fn list_polls(State(state): State<AppState>) -> AppResult<Json<Vec<PollSummaryResponse>>> {
    let polls = state.poll_service.list_polls().await?;
    Ok(Json(polls.into_iter().map(Into::into).collect()))
}

/// Get a poll with its questions and options.
async fn get_poll(
    State(state): State<AppState>,
    Path(poll_id): Path<i32>,
) -> AppResult<Json<PollDetailResponse>> {
    let detail = state.poll_service.get_poll(poll_id).await?;
    Ok(Json(detail.into()))
}

/// Delete a poll.
async fn delete_poll(
    State(state): State<AppState>,
    Path(poll_id): Path<i32>,
) -> AppResult<Message> {
    state.poll_service.delete_poll(poll_id).await?;
    Ok(Message::ok(format!("Poll with id {poll_id} deleted")))
}

/// Vote on one of a poll's options.
async fn cast_vote(
    State(state): State<AppState>,
    Path(poll_id): Path<i32>,
    JsonBody(input): JsonBody<CastVoteInput>,
) -> AppResult<Message> {
    state.vote_service.cast_vote(poll_id, input).await?;
    Ok(Message::ok("Vote cast successfully"))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/polls/", get(list_polls).post(create_poll))
        .route(
            "/polls/{poll_id}/",
            get(get_poll).post(cast_vote).delete(delete_poll),
        )
}
