use super::ProductosService;
use crate::{
    dto::{input, output},
    error::{Error, ValidationErrors},
    repository::{self, CategoriasRepository, ProductoData, ProductosRepository},
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;

const NOMBRE_MIN_LEN: usize = 3;
const CANTIDAD_MIN: i32 = 0;
const CANTIDAD_MAX: i32 = 15;
const PRECIO_MIN: f64 = 0.0;

pub struct ProductosServiceImpl {
    productos_repository: Arc<dyn ProductosRepository>,
    categorias_repository: Arc<dyn CategoriasRepository>,
}

impl ProductosServiceImpl {
    pub fn new(
        productos_repository: Arc<dyn ProductosRepository>,
        categorias_repository: Arc<dyn CategoriasRepository>,
    ) -> Self {
        Self {
            productos_repository,
            categorias_repository,
        }
    }

    async fn validate(&self, producto: input::Producto) -> Result<ProductoData, Error> {
        let mut errors = ValidationErrors::new();

        let nombre = producto.nombre.unwrap_or_default();
        if nombre.trim().is_empty() {
            errors.add("nombre", "El nombre no puede estar vacio");
        } else if nombre.chars().count() < NOMBRE_MIN_LEN {
            errors.add("nombre", "El nombre debe tener más de 2 caracteres");
        }

        match producto.cantidad {
            None => errors.add("cantidad", "La cantidad no puede ser nula"),
            Some(cantidad) if cantidad < CANTIDAD_MIN => {
                errors.add("cantidad", "La cantidad no puede ser menor a 0")
            }
            Some(cantidad) if cantidad > CANTIDAD_MAX => {
                errors.add("cantidad", "La cantidad no puede ser mayor a 15")
            }
            Some(_) => {}
        }

        match producto.precio {
            None => errors.add("precio", "El precio no puede ser nulo"),
            Some(precio) if precio.is_nan() || precio < PRECIO_MIN => {
                errors.add("precio", "El precio no puede ser menor a 0")
            }
            Some(_) => {}
        }

        if producto.esta_disponible.is_none() {
            errors.add("estaDisponible", "Esta disponible no puede ser nulo");
        }

        let categoria_id = match producto.categoria_id {
            None => None,
            Some(categoria_id) => match ObjectId::parse_str(&categoria_id) {
                Ok(categoria_id) => match self.categorias_repository.exists(categoria_id).await? {
                    true => Some(categoria_id),
                    false => {
                        errors.add("categoriaId", "La categoria no existe");
                        None
                    }
                },
                Err(_) => {
                    errors.add("categoriaId", "La categoria no existe");
                    None
                }
            },
        };

        match (producto.cantidad, producto.precio, producto.esta_disponible) {
            (Some(cantidad), Some(precio), Some(esta_disponible)) if errors.is_empty() => {
                Ok(ProductoData {
                    nombre,
                    cantidad,
                    precio,
                    esta_disponible,
                    categoria_id,
                })
            }
            _ => Err(Error::Validation(errors)),
        }
    }

    fn parse_id(id: &str) -> Result<ObjectId, Error> {
        ObjectId::parse_str(id).map_err(|_| Error::ProductoNotExist)
    }

    fn map_not_exist(err: repository::Error) -> Error {
        match err {
            repository::Error::NoDocumentUpdated => Error::ProductoNotExist,
            err => Error::Database(err),
        }
    }
}

#[async_trait]
impl ProductosService for ProductosServiceImpl {
    async fn find_all(&self) -> Result<Vec<output::Producto>, Error> {
        tracing::info!("finding productos");

        let productos = self.productos_repository.find_all().await?;
        tracing::info!(count = productos.len(), "found productos");

        let productos = productos.into_iter().map(output::Producto::from).collect();

        Ok(productos)
    }

    async fn create(&self, producto: input::Producto) -> Result<output::Producto, Error> {
        tracing::info!("creating producto");
        tracing::trace!(?producto);

        let producto = self.validate(producto).await?;
        let producto = self.productos_repository.insert(producto).await?;

        tracing::info!(id = %producto.id, "created producto");

        Ok(producto.into())
    }

    async fn update(
        &self,
        id: &str,
        producto: input::Producto,
    ) -> Result<output::Producto, Error> {
        tracing::info!(id, "updating producto");
        tracing::trace!(?producto);

        let id = Self::parse_id(id)?;
        let producto = self.validate(producto).await?;
        let producto = self
            .productos_repository
            .update(id, producto)
            .await
            .map_err(Self::map_not_exist)?;

        tracing::info!("updated producto");

        Ok(producto.into())
    }

    async fn delete(&self, id: &str) -> Result<(), Error> {
        tracing::info!(id, "deleting producto");

        let id = Self::parse_id(id)?;
        self.productos_repository
            .delete(id)
            .await
            .map_err(Self::map_not_exist)?;

        tracing::info!("deleted producto");

        Ok(())
    }
}
