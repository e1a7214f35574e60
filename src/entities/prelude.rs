#![allow(unused_imports)]

pub use super::alignment_score::Entity as AlignmentScore;
pub use super::issue::Entity as Issue;
pub use super::representative::Entity as Representative;
pub use super::representative_vote::Entity as RepresentativeVote;
pub use super::user::Entity as User;
pub use super::user_vote::Entity as UserVote;
