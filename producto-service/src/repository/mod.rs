mod categorias_repository;
mod categorias_repository_impl;
mod dto;
mod entity;
mod error;
mod productos_repository;
mod productos_repository_impl;

pub use categorias_repository::*;
pub use categorias_repository_impl::*;
pub use dto::*;
pub use error::*;
pub use productos_repository::*;
pub use productos_repository_impl::*;
