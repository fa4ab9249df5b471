use crate::repository;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Categoria {
    pub id: String,
    pub nombre: String,
    pub descripcion: String,
}

impl From<repository::Categoria> for Categoria {
    fn from(categoria: repository::Categoria) -> Self {
        Self {
            id: categoria.id.to_hex(),
            nombre: categoria.nombre,
            descripcion: categoria.descripcion,
        }
    }
}
