use bson::oid::ObjectId;

#[derive(Debug, Clone, PartialEq)]
pub struct Categoria {
    pub id: ObjectId,
    pub nombre: String,
    pub descripcion: String,
}

///
/// Validated categoria fields written on insert and update
///
#[derive(Debug, Clone, PartialEq)]
pub struct CategoriaData {
    pub nombre: String,
    pub descripcion: String,
}
