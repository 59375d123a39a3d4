pub mod database;
pub mod repositories;
pub mod time_zone;
