use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Append-only: rows are inserted by the audit recorder and never updated
        manager
            .create_table(
                Table::create()
                    .table(AuditEntries::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AuditEntries::Id).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(AuditEntries::Timestamp).string().not_null())
                    .col(ColumnDef::new(AuditEntries::Actor).string().not_null())
                    .col(ColumnDef::new(AuditEntries::Description).string().not_null())
                    .col(ColumnDef::new(AuditEntries::EntityType).string().not_null())
                    .col(ColumnDef::new(AuditEntries::Company).string().not_null())
                    .col(ColumnDef::new(AuditEntries::RequestId).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_audit_entries_company")
                    .table(AuditEntries::Table)
                    .col(AuditEntries::Company)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_audit_entries_entity_type")
                    .table(AuditEntries::Table)
                    .col(AuditEntries::EntityType)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_audit_entries_timestamp")
                    .table(AuditEntries::Table)
                    .col(AuditEntries::Timestamp)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuditEntries::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AuditEntries {
    Table,
    Id,
    Timestamp,
    Actor,
    Description,
    EntityType,
    Company,
    RequestId,
}
