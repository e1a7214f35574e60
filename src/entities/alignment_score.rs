//! Cached alignment score entity.
//!
//! Rows are written by the bulk refresh endpoint and carry the unrounded
//! 0-100 score. A cached row is not invalidated when either side votes
//! again; readers that need current numbers recompute from the vote tables.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "alignment_scores")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub rep_id: i64,
    /// Weighted alignment on the 0-100 scale, stored unrounded
    pub score: f64,
    pub computed_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
