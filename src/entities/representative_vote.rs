//! Recorded representative position entity, one row per (representative, issue).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "representative_votes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub rep_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub issue_id: i64,
    /// true = support, false = oppose
    pub stance: bool,
    /// Intensity of the stance, 1 (mild) through 5 (strongest)
    pub passion_weight: i16,
    pub recorded_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
