//! Business logic services.

pub mod poll;
pub mod vote;

pub use poll::{CreatePollInput, CreateQuestionInput, PollService};
pub use vote::{CastVoteInput, VoteService};
