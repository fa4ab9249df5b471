use serde::Deserialize;

///
/// Body of create and update producto requests.
///
/// Required fields are optional here, so missing ones
/// are reported together with other validation errors.
///
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Producto {
    pub nombre: Option<String>,
    pub cantidad: Option<i32>,
    pub precio: Option<f64>,
    pub esta_disponible: Option<bool>,
    pub categoria_id: Option<String>,
}
