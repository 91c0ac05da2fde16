// Database entities - SeaORM models
pub mod audit_entry;
pub mod employee;
pub mod pickup_point;
pub mod trade_supplier;
