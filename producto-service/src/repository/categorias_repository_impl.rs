use super::{
    entity::{CategoriaFindEntity, CategoriaInsertEntity},
    CategoriasRepository, Categoria, CategoriaData, Error,
};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::{error::ErrorKind, options::ReturnDocument, Database};
use std::sync::Arc;

const CATEGORIAS: &str = "categorias";

pub struct CategoriasRepositoryImpl {
    database: Database,
}

impl CategoriasRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection_names = database.list_collection_names().await?;
        if !collection_names.iter().any(|name| name == CATEGORIAS) {
            database.create_collection(CATEGORIAS).await?;
            tracing::debug!("created collection {CATEGORIAS}");
        }

        Ok(Self { database })
    }
}

#[async_trait]
impl CategoriasRepository for CategoriasRepositoryImpl {
    async fn insert(&self, categoria: CategoriaData) -> Result<Categoria, Error> {
        let insert_entity = CategoriaInsertEntity::from(categoria);

        let insert_result = self
            .database
            .collection::<CategoriaInsertEntity>(CATEGORIAS)
            .insert_one(&insert_entity)
            .await?;

        let Bson::ObjectId(id) = insert_result.inserted_id else {
            tracing::error!("invalid type of inserted '_id'");
            return Err(Error::Mongo(
                ErrorKind::Custom(Arc::new("invalid type of inserted '_id'")).into(),
            ));
        };

        Ok(Categoria {
            id,
            nombre: insert_entity.nombre,
            descripcion: insert_entity.descripcion,
        })
    }

    async fn update(&self, id: ObjectId, categoria: CategoriaData) -> Result<Categoria, Error> {
        let updated = self
            .database
            .collection::<CategoriaFindEntity>(CATEGORIAS)
            .find_one_and_update(
                doc! {
                    "_id": id,
                },
                doc! {
                    "$set": {
                        "nombre": categoria.nombre,
                        "descripcion": categoria.descripcion,
                    }
                },
            )
            .return_document(ReturnDocument::After)
            .await?;

        updated.map(Categoria::from).ok_or(Error::NoDocumentUpdated)
    }

    async fn exists(&self, id: ObjectId) -> Result<bool, Error> {
        let count = self
            .database
            .collection::<Document>(CATEGORIAS)
            .count_documents(doc! { "_id": id })
            .limit(1)
            .await?;

        Ok(count > 0)
    }
}
