use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepresentativeRegistration {
    pub name: String,
    pub position: String,
    pub party: Option<String>,
    /// Two-letter state code; normalized to uppercase on write
    pub state: String,
    pub county: Option<String>,
    pub city: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub office_name: Option<String>,
    pub cong_district: Option<String>,
    pub state_senate_district: Option<String>,
    pub state_assembly_district: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepresentativeView {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub party: Option<String>,
    pub state: String,
    pub county: Option<String>,
    pub city: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub office_name: Option<String>,
    pub cong_district: Option<String>,
    pub state_senate_district: Option<String>,
    pub state_assembly_district: Option<String>,
}
