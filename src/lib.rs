pub mod api;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod license;
pub mod shutdown;
pub mod store;
