mod posts_service_config;

pub use posts_service_config::*;
