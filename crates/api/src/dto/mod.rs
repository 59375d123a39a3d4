pub mod query;

pub use query::StatsQuery;
