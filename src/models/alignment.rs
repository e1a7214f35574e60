use serde::{Deserialize, Serialize};

/// One matched issue in an alignment breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentDetail {
    pub issue_id: i64,
    pub user_stance: bool,
    pub user_passion: i16,
    pub representative_stance: bool,
    pub representative_passion: i16,
    pub base_alignment: f64,
    pub weight_multiplier: f64,
}

/// Body returned by the live alignment endpoint. A representative with no
/// issues in common with the user yields the bare message form rather than
/// a zero score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AlignmentResponse {
    Scored {
        representative_name: String,
        alignment_score: String,
        details: Vec<AlignmentDetail>,
    },
    NoData {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshSummary {
    pub message: String,
    pub representatives_scored: u64,
    pub representatives_skipped: u64,
    pub representatives_failed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scored_response_serializes_flat() {
        let response = AlignmentResponse::Scored {
            representative_name: "Jane Smith".to_string(),
            alignment_score: "87%".to_string(),
            details: vec![AlignmentDetail {
                issue_id: 101,
                user_stance: true,
                user_passion: 4,
                representative_stance: true,
                representative_passion: 2,
                base_alignment: 0.8,
                weight_multiplier: 1.4,
            }],
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["representative_name"], "Jane Smith");
        assert_eq!(value["alignment_score"], "87%");
        assert_eq!(value["details"][0]["issue_id"], 101);
        assert!(value.get("message").is_none());
    }

    #[test]
    fn no_data_response_carries_only_message() {
        let response = AlignmentResponse::NoData {
            message: "No alignment data available for this representative.".to_string(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value["message"],
            "No alignment data available for this representative."
        );
        assert!(value.get("alignment_score").is_none());
        assert!(value.get("details").is_none());
    }
}
