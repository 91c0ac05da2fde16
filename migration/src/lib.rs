pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_master_file_tables;
mod m20250301_000002_create_audit_entries;

/// Master-file and audit tables live in one database so that an entity write
/// and its audit entry can share a transaction.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_master_file_tables::Migration),
            Box::new(m20250301_000002_create_audit_entries::Migration),
        ]
    }
}
