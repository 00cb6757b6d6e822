pub mod commands;
pub mod dashboard_service;
pub mod session;

pub use commands::*;
pub use dashboard_service::*;
pub use session::*;
