use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    dto::{input, output},
    error::Error,
    service::{
        categorias_service::CategoriasService, posts_service::PostsService,
        productos_service::ProductosService,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use std::sync::Arc;

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route("/productos", get(get_productos).post(post_producto))
        .route("/productos/:id", put(put_producto).delete(delete_producto))
        .route("/categorias", post(post_categoria))
        .route("/categorias/:id", put(put_categoria))
        .route("/posts", get(get_posts))
        .route("/posts/:id", get(get_post))
        .route("/actuator/health", get(get_health))
        .route_layer(application_middleware.auth.clone())
}

async fn get_productos(
    State(service): State<Arc<dyn ProductosService>>,
) -> Result<Json<Vec<output::Producto>>, Error> {
    let productos = service.find_all().await?;

    Ok(Json(productos))
}

async fn post_producto(
    State(service): State<Arc<dyn ProductosService>>,
    Json(producto): Json<input::Producto>,
) -> Result<(StatusCode, Json<output::Producto>), Error> {
    let producto = service.create(producto).await?;

    Ok((StatusCode::CREATED, Json(producto)))
}

async fn put_producto(
    State(service): State<Arc<dyn ProductosService>>,
    Path(id): Path<String>,
    Json(producto): Json<input::Producto>,
) -> Result<Json<output::Producto>, Error> {
    let producto = service.update(&id, producto).await?;

    Ok(Json(producto))
}

async fn delete_producto(
    State(service): State<Arc<dyn ProductosService>>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn post_categoria(
    State(service): State<Arc<dyn CategoriasService>>,
    Json(categoria): Json<input::Categoria>,
) -> Result<(StatusCode, Json<output::Categoria>), Error> {
    let categoria = service.create(categoria).await?;

    Ok((StatusCode::CREATED, Json(categoria)))
}

async fn put_categoria(
    State(service): State<Arc<dyn CategoriasService>>,
    Path(id): Path<String>,
    Json(categoria): Json<input::Categoria>,
) -> Result<Json<output::Categoria>, Error> {
    let categoria = service.update(&id, categoria).await?;

    Ok(Json(categoria))
}

async fn get_posts(
    State(service): State<Arc<dyn PostsService>>,
) -> Result<Json<Vec<output::Post>>, Error> {
    let posts = service.get_posts().await?;

    Ok(Json(posts))
}

async fn get_post(
    State(service): State<Arc<dyn PostsService>>,
    Path(id): Path<i32>,
) -> Result<Json<output::Post>, Error> {
    let post = service.get_post(id).await?;

    Ok(Json(post))
}

async fn get_health() -> Json<output::Health> {
    Json(output::Health { status: "UP" })
}
