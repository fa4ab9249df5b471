pub mod categorias_service;
pub mod posts_service;
pub mod productos_service;
