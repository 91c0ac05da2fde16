// Wire types for the HTTP API
pub mod audit_trail;
pub mod common;
pub mod employee;
pub mod grid;
pub mod pickup_point;
