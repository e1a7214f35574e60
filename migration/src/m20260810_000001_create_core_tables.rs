use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::State).string_len(2).not_null())
                    .col(ColumnDef::new(Users::County).string_len(64))
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Issue ids are assigned from the curated catalog, never by the
        // database, so the column is a plain big integer primary key.
        manager
            .create_table(
                Table::create()
                    .table(Issues::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Issues::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Issues::Prompt).string_len(512).not_null())
                    .col(ColumnDef::new(Issues::Scope).string_len(64))
                    .col(
                        ColumnDef::new(Issues::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Representatives::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Representatives::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Representatives::Name)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Representatives::Position)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Representatives::Party).string_len(64))
                    .col(
                        ColumnDef::new(Representatives::State)
                            .string_len(2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Representatives::County).string_len(64))
                    .col(ColumnDef::new(Representatives::City).string_len(64))
                    .col(ColumnDef::new(Representatives::Email).string_len(128))
                    .col(ColumnDef::new(Representatives::Website).string_len(256))
                    .col(ColumnDef::new(Representatives::OfficeName).string_len(128))
                    .col(ColumnDef::new(Representatives::CongDistrict).string_len(8))
                    .col(
                        ColumnDef::new(Representatives::StateSenateDistrict)
                            .string_len(8),
                    )
                    .col(
                        ColumnDef::new(Representatives::StateAssemblyDistrict)
                            .string_len(8),
                    )
                    .col(
                        ColumnDef::new(Representatives::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Representatives::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_representatives_state")
                    .table(Representatives::Table)
                    .col(Representatives::State)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserVotes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserVotes::UserId).big_integer().not_null())
                    .col(ColumnDef::new(UserVotes::IssueId).big_integer().not_null())
                    .col(ColumnDef::new(UserVotes::Stance).boolean().not_null())
                    .col(
                        ColumnDef::new(UserVotes::PassionWeight)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserVotes::LastUpdated)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_user_votes")
                            .col(UserVotes::UserId)
                            .col(UserVotes::IssueId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_votes_user")
                            .from(UserVotes::Table, UserVotes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_votes_issue")
                            .from(UserVotes::Table, UserVotes::IssueId)
                            .to(Issues::Table, Issues::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_votes_issue")
                    .table(UserVotes::Table)
                    .col(UserVotes::IssueId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RepresentativeVotes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RepresentativeVotes::RepId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RepresentativeVotes::IssueId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RepresentativeVotes::Stance)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RepresentativeVotes::PassionWeight)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RepresentativeVotes::RecordedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_representative_votes")
                            .col(RepresentativeVotes::RepId)
                            .col(RepresentativeVotes::IssueId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_representative_votes_rep")
                            .from(RepresentativeVotes::Table, RepresentativeVotes::RepId)
                            .to(Representatives::Table, Representatives::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_representative_votes_issue")
                            .from(RepresentativeVotes::Table, RepresentativeVotes::IssueId)
                            .to(Issues::Table, Issues::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_representative_votes_issue")
                    .table(RepresentativeVotes::Table)
                    .col(RepresentativeVotes::IssueId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RepresentativeVotes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserVotes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Representatives::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Issues::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    State,
    County,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Issues {
    Table,
    Id,
    Prompt,
    Scope,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Representatives {
    Table,
    Id,
    Name,
    Position,
    Party,
    State,
    County,
    City,
    Email,
    Website,
    OfficeName,
    CongDistrict,
    StateSenateDistrict,
    StateAssemblyDistrict,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum UserVotes {
    Table,
    UserId,
    IssueId,
    Stance,
    PassionWeight,
    LastUpdated,
}

#[derive(DeriveIden)]
enum RepresentativeVotes {
    Table,
    RepId,
    IssueId,
    Stance,
    PassionWeight,
    RecordedAt,
}
