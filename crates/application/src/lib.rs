pub mod ports;
pub mod services;
pub mod stats;
pub mod use_cases;
