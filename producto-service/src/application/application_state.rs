use super::ApplicationEnv;
use crate::{
    repository::{CategoriasRepositoryImpl, ProductosRepositoryImpl},
    service::{
        categorias_service::{CategoriasService, CategoriasServiceImpl},
        posts_service::{PostsService, PostsServiceConfig, PostsServiceImpl},
        productos_service::{ProductosService, ProductosServiceImpl},
    },
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub productos_service: Arc<dyn ProductosService>,
    pub categorias_service: Arc<dyn CategoriasService>,
    pub posts_service: Arc<dyn PostsService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let categorias_repository = CategoriasRepositoryImpl::new(db.clone()).await?;
    let categorias_repository = Arc::new(categorias_repository);
    let productos_repository = ProductosRepositoryImpl::new(db).await?;
    let productos_repository = Arc::new(productos_repository);

    tracing::info!("creating services");
    let categorias_service = CategoriasServiceImpl::new(categorias_repository.clone());
    let categorias_service = Arc::new(categorias_service);

    let productos_service = ProductosServiceImpl::new(productos_repository, categorias_repository);
    let productos_service = Arc::new(productos_service);

    let config = PostsServiceConfig {
        base_url: env.posts_base_url.clone(),
    };
    let posts_service = PostsServiceImpl::new(config, reqwest::Client::new());
    let posts_service = Arc::new(posts_service);

    Ok((
        ApplicationState {
            productos_service,
            categorias_service,
            posts_service,
        },
        ApplicationStateToClose { db_client },
    ))
}
