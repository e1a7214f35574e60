pub mod alignment;
pub mod issue;
pub mod representative;
pub mod user;
pub mod vote;
