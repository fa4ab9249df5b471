use crate::repository;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Producto {
    pub id: String,
    pub nombre: String,
    pub cantidad: i32,
    pub precio: f64,
    pub esta_disponible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria_id: Option<String>,
}

impl From<repository::Producto> for Producto {
    fn from(producto: repository::Producto) -> Self {
        Self {
            id: producto.id.to_hex(),
            nombre: producto.nombre,
            cantidad: producto.cantidad,
            precio: producto.precio,
            esta_disponible: producto.esta_disponible,
            categoria_id: producto.categoria_id.map(|id| id.to_hex()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bson::oid::ObjectId;
    use serde_json::json;

    #[test]
    fn producto_json_serialize_camel_case() {
        let id = ObjectId::new();
        let producto = Producto::from(repository::Producto {
            id,
            nombre: "Teclado".to_string(),
            cantidad: 3,
            precio: 49.5,
            esta_disponible: false,
            categoria_id: None,
        });

        let value = serde_json::to_value(&producto).unwrap();

        assert_eq!(
            value,
            json!({
                "id": id.to_hex(),
                "nombre": "Teclado",
                "cantidad": 3,
                "precio": 49.5,
                "estaDisponible": false,
            })
        );
    }
}
