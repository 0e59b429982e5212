pub mod errors;
pub mod models;
pub mod ports;
pub mod sanitize;
pub mod service;
pub mod validation;
