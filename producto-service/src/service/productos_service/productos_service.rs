use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductosService: Send + Sync {
    ///
    /// Find all productos
    ///
    async fn find_all(&self) -> Result<Vec<output::Producto>, Error>;

    ///
    /// Save new producto
    ///
    /// ### Returns
    /// Created producto
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - any field is missing or out of range
    ///     - categoria_id does not reference existing categoria
    ///
    async fn create(&self, producto: input::Producto) -> Result<output::Producto, Error>;

    ///
    /// Replace all fields of the producto
    ///
    /// ### Returns
    /// Updated producto
    ///
    /// ### Errors
    /// - [Error::Validation] same as in [ProductosService::create]
    /// - [Error::ProductoNotExist] when
    ///     - id is not valid ObjectId
    ///     - producto with id does not exist
    ///
    async fn update(&self, id: &str, producto: input::Producto)
        -> Result<output::Producto, Error>;

    ///
    /// ### Errors
    /// - [Error::ProductoNotExist] when
    ///     - id is not valid ObjectId
    ///     - producto with id does not exist
    ///
    async fn delete(&self, id: &str) -> Result<(), Error>;
}
