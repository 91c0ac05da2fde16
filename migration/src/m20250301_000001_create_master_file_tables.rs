use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create trade_suppliers table (reference data for pickup points)
        manager
            .create_table(
                Table::create()
                    .table(TradeSuppliers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TradeSuppliers::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(TradeSuppliers::Name).string().not_null())
                    .col(ColumnDef::new(TradeSuppliers::IsActive).boolean().not_null().default(true))
                    .col(ColumnDef::new(TradeSuppliers::Company).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create employees table
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Employees::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Employees::EmployeeNumber).string().not_null())
                    .col(ColumnDef::new(Employees::FirstName).string().not_null())
                    .col(ColumnDef::new(Employees::LastName).string().not_null())
                    .col(ColumnDef::new(Employees::Email).string())
                    .col(ColumnDef::new(Employees::Phone).string())
                    .col(ColumnDef::new(Employees::JobTitle).string())
                    .col(ColumnDef::new(Employees::Department).string())
                    .col(ColumnDef::new(Employees::HireDate).date())
                    .col(ColumnDef::new(Employees::MonthlySalary).double())
                    .col(ColumnDef::new(Employees::IsActive).boolean().not_null().default(true))
                    .col(ColumnDef::new(Employees::Company).string().not_null())
                    .col(ColumnDef::new(Employees::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Employees::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employees_company")
                    .table(Employees::Table)
                    .col(Employees::Company)
                    .to_owned(),
            )
            .await?;

        // Create pickup_points table
        manager
            .create_table(
                Table::create()
                    .table(PickupPoints::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PickupPoints::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(PickupPoints::Code).string().not_null())
                    .col(ColumnDef::new(PickupPoints::Name).string().not_null())
                    .col(ColumnDef::new(PickupPoints::Address).string())
                    .col(ColumnDef::new(PickupPoints::City).string())
                    .col(ColumnDef::new(PickupPoints::ContactPerson).string())
                    .col(ColumnDef::new(PickupPoints::Phone).string())
                    .col(ColumnDef::new(PickupPoints::TradeSupplierId).integer())
                    .col(ColumnDef::new(PickupPoints::IsActive).boolean().not_null().default(true))
                    .col(ColumnDef::new(PickupPoints::Company).string().not_null())
                    .col(ColumnDef::new(PickupPoints::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(PickupPoints::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pickup_points_trade_supplier_id")
                            .from(PickupPoints::Table, PickupPoints::TradeSupplierId)
                            .to(TradeSuppliers::Table, TradeSuppliers::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pickup_points_company")
                    .table(PickupPoints::Table)
                    .col(PickupPoints::Company)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PickupPoints::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TradeSuppliers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TradeSuppliers {
    Table,
    Id,
    Name,
    IsActive,
    Company,
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
    EmployeeNumber,
    FirstName,
    LastName,
    Email,
    Phone,
    JobTitle,
    Department,
    HireDate,
    MonthlySalary,
    IsActive,
    Company,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PickupPoints {
    Table,
    Id,
    Code,
    Name,
    Address,
    City,
    ContactPerson,
    Phone,
    TradeSupplierId,
    IsActive,
    Company,
    CreatedAt,
    UpdatedAt,
}
