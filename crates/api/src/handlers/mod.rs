pub mod health;
pub mod metrics;
pub mod timeline;
pub mod top;

pub use health::health_check;
pub use metrics::get_metrics;
pub use timeline::get_timeline;
pub use top::get_top;
