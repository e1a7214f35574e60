use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotSubmission {
    pub issue_id: i64,
    pub stance: bool,
    pub passion_weight: i16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteUpdate {
    pub stance: bool,
    pub passion_weight: i16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteView {
    pub issue_id: i64,
    pub stance: bool,
    pub passion_weight: i16,
    pub last_updated: i64,
}

/// Plain acknowledgement body shared by the vote write endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteAck {
    pub message: String,
}
