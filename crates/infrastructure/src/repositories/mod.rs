pub mod ftl_query_log_reader;

pub use ftl_query_log_reader::FtlQueryLogReader;
