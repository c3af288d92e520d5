//! Repositories wrapping the entity queries used by the services.

mod poll;
mod poll_option;
mod vote;

pub use poll::{NewQuestion, PollRepository, PollWithQuestions, QuestionWithOptions};
pub use poll_option::PollOptionRepository;
pub use vote::VoteRepository;
