use super::{dto::Categoria, error::Error, CategoriaData};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoriasRepository: Send + Sync {
    ///
    /// Inserts new categoria
    ///
    async fn insert(&self, categoria: CategoriaData) -> Result<Categoria, Error>;

    ///
    /// Replaces nombre and descripcion of the categoria
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when categoria does not exist
    ///
    async fn update(&self, id: ObjectId, categoria: CategoriaData) -> Result<Categoria, Error>;

    async fn exists(&self, id: ObjectId) -> Result<bool, Error>;
}
