//! Ballot issue entity. Rows come from the seeded catalog migration; the
//! API never invents issue ids at request time.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "issues")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    /// The yes/no question put to voters
    #[sea_orm(column_type = "String(StringLen::N(512))")]
    pub prompt: String,
    /// Geographic scope ("National", "New York"); None means unscoped
    #[sea_orm(column_type = "String(StringLen::N(64))", nullable)]
    pub scope: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
