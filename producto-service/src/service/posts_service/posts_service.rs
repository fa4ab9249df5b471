use crate::{dto::output, error::Error};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostsService: Send + Sync {
    ///
    /// Fetch all posts from upstream API
    ///
    /// ### Errors
    /// - [Error::Upstream] when request fails or upstream answers with error status
    ///
    async fn get_posts(&self) -> Result<Vec<output::Post>, Error>;

    ///
    /// Fetch single post from upstream API
    ///
    /// ### Errors
    /// - [Error::PostNotExist] when upstream answers with 404
    /// - [Error::Upstream] on any other failure
    ///
    async fn get_post(&self, id: i32) -> Result<output::Post, Error>;
}
