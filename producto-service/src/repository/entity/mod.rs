mod categoria_entity;
mod producto_entity;

pub use categoria_entity::*;
pub use producto_entity::*;
