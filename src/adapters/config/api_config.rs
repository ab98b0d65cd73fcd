use reqwest::Url;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Every user is POSTed to this exact URL.
    pub endpoint: Url,
}
