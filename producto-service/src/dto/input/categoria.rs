use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Categoria {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
}
