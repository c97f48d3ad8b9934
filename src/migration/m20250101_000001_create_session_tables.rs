use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SessionProperties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SessionProperties::SessionId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SessionProperties::Key).text().not_null())
                    .col(
                        ColumnDef::new(SessionProperties::ValueType)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SessionProperties::Value).text().not_null())
                    .col(
                        ColumnDef::new(SessionProperties::ExpiresAtUtc)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(SessionProperties::SessionId)
                            .col(SessionProperties::Key),
                    )
                    .to_owned(),
            )
            .await?;

        // The sweeper scans by expiry on every run.
        manager
            .create_index(
                Index::create()
                    .name("idx_session_properties_expires_at_utc")
                    .table(SessionProperties::Table)
                    .col(SessionProperties::ExpiresAtUtc)
                    .to_owned(),
            )
            .await?;

        // No unique constraint on the pair: uniqueness is enforced by the
        // writer's existence-checked insert.
        manager
            .create_table(
                Table::create()
                    .table(UserAssociations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserAssociations::SessionId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserAssociations::UserId).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_associations_user_id")
                    .table(UserAssociations::Table)
                    .col(UserAssociations::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_associations_session_id")
                    .table(UserAssociations::Table)
                    .col(UserAssociations::SessionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserAssociations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SessionProperties::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SessionProperties {
    Table,
    SessionId,
    Key,
    ValueType,
    Value,
    ExpiresAtUtc,
}

#[derive(DeriveIden)]
enum UserAssociations {
    Table,
    SessionId,
    UserId,
}
