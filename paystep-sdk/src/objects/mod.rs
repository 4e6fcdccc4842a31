pub mod payment;
pub mod service_config;
