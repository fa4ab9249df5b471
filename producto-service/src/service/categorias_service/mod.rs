mod categorias_service;
mod categorias_service_impl;

pub use categorias_service::*;
pub use categorias_service_impl::*;
