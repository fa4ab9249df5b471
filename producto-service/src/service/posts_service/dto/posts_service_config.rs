use reqwest::Url;

pub struct PostsServiceConfig {
    /// Collection URL, single posts are at `{base_url}/{id}`
    pub base_url: Url,
}
