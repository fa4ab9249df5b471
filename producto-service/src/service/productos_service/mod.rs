mod productos_service;
mod productos_service_impl;

pub use productos_service::*;
pub use productos_service_impl::*;
