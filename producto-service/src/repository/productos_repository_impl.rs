use super::{
    entity::{ProductoFindEntity, ProductoInsertEntity},
    Error, Producto, ProductoData, ProductosRepository,
};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, Document};
use futures_util::TryStreamExt;
use mongodb::{
    error::ErrorKind,
    options::{IndexOptions, ReturnDocument},
    Collection, Database, IndexModel,
};
use std::sync::Arc;

const PRODUCTOS: &str = "productos";
const INDEX_NAME_CATEGORIA_ID: &str = "index_categoria_id";

pub struct ProductosRepositoryImpl {
    database: Database,
}

impl ProductosRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection_names = database.list_collection_names().await?;
        if !collection_names.iter().any(|name| name == PRODUCTOS) {
            database.create_collection(PRODUCTOS).await?;
            tracing::debug!("created collection {PRODUCTOS}");
        }

        let collection = database.collection(PRODUCTOS);
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_CATEGORIA_ID.to_string()) {
            Self::create_categoria_id_index(&collection).await?;
            tracing::debug!("created index {PRODUCTOS}.{INDEX_NAME_CATEGORIA_ID}");
        }

        Ok(Self { database })
    }

    async fn create_categoria_id_index(
        collection: &Collection<Document>,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! {
                "categoria_id": 1,
            })
            .options(
                IndexOptions::builder()
                    .name(INDEX_NAME_CATEGORIA_ID.to_string())
                    .build(),
            )
            .build();

        collection.create_index(index).await?;

        Ok(())
    }
}

#[async_trait]
impl ProductosRepository for ProductosRepositoryImpl {
    async fn insert(&self, producto: ProductoData) -> Result<Producto, Error> {
        let insert_entity = ProductoInsertEntity::from(producto);

        let insert_result = self
            .database
            .collection::<ProductoInsertEntity>(PRODUCTOS)
            .insert_one(&insert_entity)
            .await?;

        let Bson::ObjectId(id) = insert_result.inserted_id else {
            tracing::error!("invalid type of inserted '_id'");
            return Err(Error::Mongo(
                ErrorKind::Custom(Arc::new("invalid type of inserted '_id'")).into(),
            ));
        };

        Ok(Producto {
            id,
            nombre: insert_entity.nombre,
            cantidad: insert_entity.cantidad,
            precio: insert_entity.precio,
            esta_disponible: insert_entity.esta_disponible,
            categoria_id: insert_entity.categoria_id,
        })
    }

    async fn find_all(&self) -> Result<Vec<Producto>, Error> {
        let productos = self
            .database
            .collection::<ProductoFindEntity>(PRODUCTOS)
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await?
            .map_ok(Producto::from)
            .try_collect()
            .await?;

        Ok(productos)
    }

    async fn update(&self, id: ObjectId, producto: ProductoData) -> Result<Producto, Error> {
        let updated = self
            .database
            .collection::<ProductoFindEntity>(PRODUCTOS)
            .find_one_and_update(
                doc! {
                    "_id": id,
                },
                doc! {
                    "$set": {
                        "nombre": producto.nombre,
                        "cantidad": producto.cantidad,
                        "precio": producto.precio,
                        "esta_disponible": producto.esta_disponible,
                        "categoria_id": producto.categoria_id,
                    }
                },
            )
            .return_document(ReturnDocument::After)
            .await?;

        updated.map(Producto::from).ok_or(Error::NoDocumentUpdated)
    }

    async fn delete(&self, id: ObjectId) -> Result<(), Error> {
        let delete_result = self
            .database
            .collection::<Document>(PRODUCTOS)
            .delete_one(doc! { "_id": id })
            .await?;

        match delete_result.deleted_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }
}

///
/// Tests require env variables to be set and database to be running
///
#[cfg(test)]
mod test {
    use super::*;
    use crate::application::ApplicationEnv;
    use anyhow::Context;
    use mongodb::{options::ClientOptions, Client};

    async fn create_test_database() -> anyhow::Result<Database> {
        let env = ApplicationEnv::parse().context("failed to parse env variables")?;
        let db_name = format!("test_{}_{}", env.db_name, ObjectId::new().to_hex());

        let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
        let db_client = Client::with_options(db_client_options)?;
        let db = db_client.database(&db_name);

        Ok(db)
    }

    async fn destroy_test_database(database: Database) {
        let _ = database.drop().await;
        database.client().clone().shutdown().await;
    }

    fn producto_data(nombre: &str) -> ProductoData {
        ProductoData {
            nombre: nombre.to_string(),
            cantidad: 5,
            precio: 12.5,
            esta_disponible: true,
            categoria_id: None,
        }
    }

    #[tokio::test]
    #[ignore = "requires running database"]
    async fn new_is_idempotent() -> anyhow::Result<()> {
        let database = create_test_database().await?;

        ProductosRepositoryImpl::new(database.clone()).await?;
        ProductosRepositoryImpl::new(database.clone()).await?;

        destroy_test_database(database).await;

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires running database"]
    async fn insert_correct_fields() -> anyhow::Result<()> {
        let database = create_test_database().await?;
        let repository = ProductosRepositoryImpl::new(database.clone()).await?;
        let collection = database.collection::<Document>(PRODUCTOS);

        let categoria_id = ObjectId::new();
        let mut data = producto_data("Teclado");
        data.categoria_id = Some(categoria_id);

        let producto = repository.insert(data).await?;

        let document = collection
            .find_one(doc! { "_id": producto.id })
            .await?
            .unwrap();

        assert_eq!(document.get_str("nombre")?, "Teclado");
        assert_eq!(document.get_i32("cantidad")?, 5);
        assert_eq!(document.get_f64("precio")?, 12.5);
        assert!(document.get_bool("esta_disponible")?);
        assert_eq!(document.get_object_id("categoria_id")?, categoria_id);
        assert_eq!(producto.categoria_id, Some(categoria_id));

        destroy_test_database(database).await;

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires running database"]
    async fn find_all_in_insertion_order() -> anyhow::Result<()> {
        let database = create_test_database().await?;
        let repository = ProductosRepositoryImpl::new(database.clone()).await?;

        let first = repository.insert(producto_data("Teclado")).await?;
        let second = repository.insert(producto_data("Monitor")).await?;

        let productos = repository.find_all().await?;

        assert_eq!(productos, vec![first, second]);

        destroy_test_database(database).await;

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires running database"]
    async fn update_replaces_fields() -> anyhow::Result<()> {
        let database = create_test_database().await?;
        let repository = ProductosRepositoryImpl::new(database.clone()).await?;

        let producto = repository.insert(producto_data("Teclado")).await?;
        let data = ProductoData {
            nombre: "Monitor".to_string(),
            cantidad: 1,
            precio: 0.0,
            esta_disponible: false,
            categoria_id: None,
        };

        let updated = repository.update(producto.id, data).await?;

        assert_eq!(updated.id, producto.id);
        assert_eq!(updated.nombre, "Monitor");
        assert_eq!(updated.cantidad, 1);
        assert!(!updated.esta_disponible);

        destroy_test_database(database).await;

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires running database"]
    async fn update_not_existing() -> anyhow::Result<()> {
        let database = create_test_database().await?;
        let repository = ProductosRepositoryImpl::new(database.clone()).await?;

        let result = repository
            .update(ObjectId::new(), producto_data("Teclado"))
            .await;

        assert!(matches!(result, Err(Error::NoDocumentUpdated)));

        destroy_test_database(database).await;

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires running database"]
    async fn delete_existing() -> anyhow::Result<()> {
        let database = create_test_database().await?;
        let repository = ProductosRepositoryImpl::new(database.clone()).await?;

        let producto = repository.insert(producto_data("Teclado")).await?;

        repository.delete(producto.id).await?;
        let productos = repository.find_all().await?;

        assert!(productos.is_empty());

        destroy_test_database(database).await;

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires running database"]
    async fn delete_not_existing() -> anyhow::Result<()> {
        let database = create_test_database().await?;
        let repository = ProductosRepositoryImpl::new(database.clone()).await?;

        let result = repository.delete(ObjectId::new()).await;

        assert!(matches!(result, Err(Error::NoDocumentUpdated)));

        destroy_test_database(database).await;

        Ok(())
    }
}
