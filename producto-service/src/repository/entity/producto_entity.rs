use crate::repository::{Producto, ProductoData};
use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct ProductoInsertEntity {
    pub nombre: String,
    pub cantidad: i32,
    pub precio: f64,
    pub esta_disponible: bool,
    pub categoria_id: Option<ObjectId>,
}

#[derive(Deserialize)]
pub struct ProductoFindEntity {
    pub _id: ObjectId,
    pub nombre: String,
    pub cantidad: i32,
    pub precio: f64,
    pub esta_disponible: bool,
    #[serde(default)]
    pub categoria_id: Option<ObjectId>,
}

impl From<ProductoData> for ProductoInsertEntity {
    fn from(producto: ProductoData) -> Self {
        Self {
            nombre: producto.nombre,
            cantidad: producto.cantidad,
            precio: producto.precio,
            esta_disponible: producto.esta_disponible,
            categoria_id: producto.categoria_id,
        }
    }
}

impl From<ProductoFindEntity> for Producto {
    fn from(entity: ProductoFindEntity) -> Self {
        Self {
            id: entity._id,
            nombre: entity.nombre,
            cantidad: entity.cantidad,
            precio: entity.precio,
            esta_disponible: entity.esta_disponible,
            categoria_id: entity.categoria_id,
        }
    }
}
