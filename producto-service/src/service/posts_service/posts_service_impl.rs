use super::{PostsService, PostsServiceConfig};
use crate::{dto::output, error::Error};
use axum::async_trait;
use reqwest::{Client, StatusCode};

pub struct PostsServiceImpl {
    config: PostsServiceConfig,
    client: Client,
}

impl PostsServiceImpl {
    pub fn new(config: PostsServiceConfig, client: Client) -> Self {
        Self { config, client }
    }

    fn post_url(&self, id: i32) -> String {
        let base_url = self.config.base_url.as_str().trim_end_matches('/');
        format!("{base_url}/{id}")
    }
}

#[async_trait]
impl PostsService for PostsServiceImpl {
    async fn get_posts(&self) -> Result<Vec<output::Post>, Error> {
        tracing::info!("fetching posts");

        let posts = self
            .client
            .get(self.config.base_url.clone())
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<output::Post>>()
            .await?;

        tracing::info!(count = posts.len(), "fetched posts");

        Ok(posts)
    }

    async fn get_post(&self, id: i32) -> Result<output::Post, Error> {
        tracing::info!(id, "fetching post");

        let response = self.client.get(self.post_url(id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::PostNotExist);
        }

        let post = response
            .error_for_status()?
            .json::<output::Post>()
            .await?;

        tracing::info!("fetched post");
        tracing::trace!(?post);

        Ok(post)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::{extract::Path, http, routing::get, Json, Router};
    use reqwest::Url;
    use serde_json::json;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;

    async fn spawn_upstream() -> SocketAddr {
        let router = Router::new()
            .route(
                "/posts",
                get(|| async {
                    Json(json!([
                        { "userId": 1, "id": 1, "title": "first", "body": "first body" },
                        { "userId": 1, "id": 2, "title": "second", "body": "second body" },
                    ]))
                }),
            )
            .route(
                "/posts/:id",
                get(|Path(id): Path<i32>| async move {
                    match id {
                        1 => Ok(Json(json!({
                            "userId": 1, "id": 1, "title": "first", "body": "first body"
                        }))),
                        500 => Err(http::StatusCode::INTERNAL_SERVER_ERROR),
                        _ => Err(http::StatusCode::NOT_FOUND),
                    }
                }),
            )
            .route(
                "/broken",
                get(|| async { http::StatusCode::SERVICE_UNAVAILABLE }),
            );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        address
    }

    fn service(address: SocketAddr, path: &str) -> PostsServiceImpl {
        let base_url = Url::parse(&format!("http://{address}{path}")).unwrap();

        PostsServiceImpl::new(PostsServiceConfig { base_url }, Client::new())
    }

    #[tokio::test]
    async fn get_posts_ok() {
        let address = spawn_upstream().await;

        let posts = service(address, "/posts").get_posts().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].title.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn get_posts_upstream_failure() {
        let address = spawn_upstream().await;

        let result = service(address, "/broken").get_posts().await;

        assert!(matches!(result, Err(Error::Upstream(_))));
    }

    #[tokio::test]
    async fn get_post_ok() {
        let address = spawn_upstream().await;

        let post = service(address, "/posts").get_post(1).await.unwrap();

        assert_eq!(post.id, Some(1));
        assert_eq!(post.user_id, Some(1));
    }

    #[tokio::test]
    async fn get_post_base_url_with_trailing_slash() {
        let address = spawn_upstream().await;

        let post = service(address, "/posts/").get_post(1).await.unwrap();

        assert_eq!(post.id, Some(1));
    }

    #[tokio::test]
    async fn get_post_not_exist() {
        let address = spawn_upstream().await;

        let result = service(address, "/posts").get_post(7).await;

        assert!(matches!(result, Err(Error::PostNotExist)));
    }

    #[tokio::test]
    async fn get_post_upstream_failure() {
        let address = spawn_upstream().await;

        let result = service(address, "/posts").get_post(500).await;

        assert!(matches!(result, Err(Error::Upstream(_))));
    }
}
