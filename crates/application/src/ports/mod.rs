mod query_log_reader;

pub use query_log_reader::QueryLogReader;
