#![allow(dead_code)]

pub mod builders;
pub mod mock_repositories;

pub use builders::*;
pub use mock_repositories::MockQueryLogReader;
