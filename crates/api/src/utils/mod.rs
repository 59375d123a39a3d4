pub mod window;

pub use window::{parse_limit, resolve_window};
