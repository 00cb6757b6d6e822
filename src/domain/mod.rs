pub mod errors;
pub mod finance;
pub mod logging;
pub mod workshop;
