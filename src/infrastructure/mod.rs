pub mod http;
pub mod services;
