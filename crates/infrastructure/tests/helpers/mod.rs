#![allow(dead_code)]

pub mod ftl_database;

pub use ftl_database::FtlDatabase;

/// 2024-01-01T00:00:00Z
pub const JAN_1_2024: i64 = 1_704_067_200;
pub const HOUR: i64 = 3600;
pub const DAY: i64 = 86_400;
