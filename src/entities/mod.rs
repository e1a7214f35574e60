//! SeaORM entities backing the Civica schema.

pub mod prelude;

pub mod alignment_score;
pub mod issue;
pub mod representative;
pub mod representative_vote;
pub mod user;
pub mod user_vote;
