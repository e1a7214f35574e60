use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Cached aggregate per (user, representative). Rows are written by
        // the bulk refresh and go stale as soon as either side votes again;
        // the live endpoint recomputes from the vote tables instead.
        manager
            .create_table(
                Table::create()
                    .table(AlignmentScores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AlignmentScores::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AlignmentScores::RepId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AlignmentScores::Score).double().not_null())
                    .col(
                        ColumnDef::new(AlignmentScores::ComputedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_alignment_scores")
                            .col(AlignmentScores::UserId)
                            .col(AlignmentScores::RepId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alignment_scores_user")
                            .from(AlignmentScores::Table, AlignmentScores::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alignment_scores_rep")
                            .from(AlignmentScores::Table, AlignmentScores::RepId)
                            .to(Representatives::Table, Representatives::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_alignment_scores_rep")
                    .table(AlignmentScores::Table)
                    .col(AlignmentScores::RepId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AlignmentScores::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AlignmentScores {
    Table,
    UserId,
    RepId,
    Score,
    ComputedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Representatives {
    Table,
    Id,
}
