//! Elected representative entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "representatives")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "String(StringLen::N(128))")]
    pub name: String,
    /// Office held, e.g. "U.S. Senator" or "Assembly Member"
    #[sea_orm(column_type = "String(StringLen::N(64))")]
    pub position: String,
    #[sea_orm(column_type = "String(StringLen::N(64))", nullable)]
    pub party: Option<String>,
    /// Two-letter state code, uppercase
    #[sea_orm(column_type = "String(StringLen::N(2))")]
    pub state: String,
    #[sea_orm(column_type = "String(StringLen::N(64))", nullable)]
    pub county: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(64))", nullable)]
    pub city: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(128))", nullable)]
    pub email: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(256))", nullable)]
    pub website: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(128))", nullable)]
    pub office_name: Option<String>,
    /// Congressional district, zero-padded ("02")
    #[sea_orm(column_type = "String(StringLen::N(8))", nullable)]
    pub cong_district: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(8))", nullable)]
    pub state_senate_district: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(8))", nullable)]
    pub state_assembly_district: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
