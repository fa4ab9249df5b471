use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoriasService: Send + Sync {
    ///
    /// Save new categoria
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - nombre is blank or shorter than 3 characters
    ///     - descripcion is blank or shorter than 10 characters
    ///
    async fn create(&self, categoria: input::Categoria) -> Result<output::Categoria, Error>;

    ///
    /// Replace nombre and descripcion of the categoria
    ///
    /// ### Errors
    /// - [Error::Validation] same as in [CategoriasService::create]
    /// - [Error::CategoriaNotExist] when
    ///     - id is not valid ObjectId
    ///     - categoria with id does not exist
    ///
    async fn update(
        &self,
        id: &str,
        categoria: input::Categoria,
    ) -> Result<output::Categoria, Error>;
}
