use super::CategoriasService;
use crate::{
    dto::{input, output},
    error::{Error, ValidationErrors},
    repository::{self, CategoriaData, CategoriasRepository},
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;

const NOMBRE_MIN_LEN: usize = 3;
const DESCRIPCION_MIN_LEN: usize = 10;

pub struct CategoriasServiceImpl {
    repository: Arc<dyn CategoriasRepository>,
}

impl CategoriasServiceImpl {
    pub fn new(repository: Arc<dyn CategoriasRepository>) -> Self {
        Self { repository }
    }

    fn validate(categoria: input::Categoria) -> Result<CategoriaData, Error> {
        let mut errors = ValidationErrors::new();

        let nombre = categoria.nombre.unwrap_or_default();
        if nombre.trim().is_empty() {
            errors.add(
                "nombre",
                "El nombre de la categoria no puede ser nulo o estar vacio",
            );
        } else if nombre.chars().count() < NOMBRE_MIN_LEN {
            errors.add("nombre", "El nombre debe tener más de 2 caracteres");
        }

        let descripcion = categoria.descripcion.unwrap_or_default();
        if descripcion.trim().is_empty() {
            errors.add(
                "descripcion",
                "La descripcion de la categoria no puede ser nulo o estar vacio",
            );
        } else if descripcion.chars().count() < DESCRIPCION_MIN_LEN {
            errors.add("descripcion", "La descripcion debe tener más de 10 caracteres");
        }

        errors.into_result()?;

        Ok(CategoriaData {
            nombre,
            descripcion,
        })
    }
}

#[async_trait]
impl CategoriasService for CategoriasServiceImpl {
    async fn create(&self, categoria: input::Categoria) -> Result<output::Categoria, Error> {
        tracing::info!("creating categoria");
        tracing::trace!(?categoria);

        let categoria = Self::validate(categoria)?;
        let categoria = self.repository.insert(categoria).await?;

        tracing::info!(id = %categoria.id, "created categoria");

        Ok(categoria.into())
    }

    async fn update(
        &self,
        id: &str,
        categoria: input::Categoria,
    ) -> Result<output::Categoria, Error> {
        tracing::info!(id, "updating categoria");
        tracing::trace!(?categoria);

        let id = ObjectId::parse_str(id).map_err(|_| Error::CategoriaNotExist)?;
        let categoria = Self::validate(categoria)?;
        let categoria = self
            .repository
            .update(id, categoria)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::CategoriaNotExist,
                err => Error::Database(err),
            })?;

        tracing::info!("updated categoria");

        Ok(categoria.into())
    }
}
