pub mod ports;
pub mod service;
