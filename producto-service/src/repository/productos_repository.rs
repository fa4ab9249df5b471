use super::{dto::Producto, error::Error, ProductoData};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductosRepository: Send + Sync {
    ///
    /// Inserts new producto
    ///
    async fn insert(&self, producto: ProductoData) -> Result<Producto, Error>;

    ///
    /// Finds all productos sorted by insertion order
    ///
    async fn find_all(&self) -> Result<Vec<Producto>, Error>;

    ///
    /// Replaces all fields of the producto
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when producto does not exist
    ///
    async fn update(&self, id: ObjectId, producto: ProductoData) -> Result<Producto, Error>;

    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when producto does not exist
    ///
    async fn delete(&self, id: ObjectId) -> Result<(), Error>;
}
