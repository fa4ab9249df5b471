use bson::oid::ObjectId;

#[derive(Debug, Clone, PartialEq)]
pub struct Producto {
    pub id: ObjectId,
    pub nombre: String,
    pub cantidad: i32,
    pub precio: f64,
    pub esta_disponible: bool,
    pub categoria_id: Option<ObjectId>,
}

///
/// Validated producto fields written on insert and update
///
#[derive(Debug, Clone, PartialEq)]
pub struct ProductoData {
    pub nombre: String,
    pub cantidad: i32,
    pub precio: f64,
    pub esta_disponible: bool,
    pub categoria_id: Option<ObjectId>,
}
