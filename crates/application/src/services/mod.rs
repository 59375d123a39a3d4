mod window_loader;

pub use window_loader::{DomainExclusion, LoadedWindow, WindowLoader};
