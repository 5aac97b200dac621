pub mod config;
pub mod logging;

pub mod dom;
pub mod error;
pub mod fetch;
pub mod fs_ops;
pub mod loader;
pub mod naming;
pub mod observer;
pub mod origin;
pub mod rewrite;

pub use error::LoadError;
pub use loader::{download, download_with_observer};
