//! Database entities.
//!
//! The tables form a strict ownership chain, each child holding a cascading
//! foreign key to its parent: `polls` -> `questions` -> `options` -> `votes`.

pub mod poll;
pub mod poll_option;
pub mod question;
pub mod vote;

pub use poll::Entity as Poll;
pub use poll_option::Entity as PollOption;
pub use question::Entity as Question;
pub use vote::Entity as Vote;
