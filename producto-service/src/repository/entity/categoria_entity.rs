use crate::repository::{Categoria, CategoriaData};
use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct CategoriaInsertEntity {
    pub nombre: String,
    pub descripcion: String,
}

#[derive(Deserialize)]
pub struct CategoriaFindEntity {
    pub _id: ObjectId,
    pub nombre: String,
    pub descripcion: String,
}

impl From<CategoriaData> for CategoriaInsertEntity {
    fn from(categoria: CategoriaData) -> Self {
        Self {
            nombre: categoria.nombre,
            descripcion: categoria.descripcion,
        }
    }
}

impl From<CategoriaFindEntity> for Categoria {
    fn from(entity: CategoriaFindEntity) -> Self {
        Self {
            id: entity._id,
            nombre: entity.nombre,
            descripcion: entity.descripcion,
        }
    }
}
