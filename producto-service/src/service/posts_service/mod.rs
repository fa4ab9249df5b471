mod dto;
mod posts_service;
mod posts_service_impl;

pub use dto::PostsServiceConfig;
pub use posts_service::*;
pub use posts_service_impl::*;
