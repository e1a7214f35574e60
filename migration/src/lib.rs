pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_core_tables;
mod m20260810_000002_add_alignment_scores;
mod m20260810_000003_seed_issue_catalog;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_core_tables::Migration),
            Box::new(m20260810_000002_add_alignment_scores::Migration),
            Box::new(m20260810_000003_seed_issue_catalog::Migration),
        ]
    }
}
