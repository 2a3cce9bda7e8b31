use std::env;

use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "http://localhost:8000/api";
const DEFAULT_IMAGE_URL: &str = "http://localhost:8000";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid {name} url: {raw}")]
    InvalidUrl { name: &'static str, raw: String },
}

/// Where the backend lives: the `/api` base path and the image-serving host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    image_base_url: String,
}

impl ApiConfig {
    /// Builds a config from explicit URLs.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when either value is not an absolute URL.
    pub fn new(
        base_url: impl Into<String>,
        image_base_url: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let base_url = normalize("api", base_url.into())?;
        let image_base_url = normalize("image", image_base_url.into())?;
        Ok(Self {
            base_url,
            image_base_url,
        })
    }

    /// Reads `MUSEUM_API_URL` / `MUSEUM_IMAGE_URL`, falling back to the
    /// local development backend.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when an environment value is not a URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("MUSEUM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let image_base_url =
            env::var("MUSEUM_IMAGE_URL").unwrap_or_else(|_| DEFAULT_IMAGE_URL.into());
        Self::new(base_url, image_base_url)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn image_base_url(&self) -> &str {
        &self.image_base_url
    }

    /// Full URL for an API endpoint path such as `/next-artwork`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Full URL for an artwork's stored relative image path.
    ///
    /// Uploaded artworks come back with the `/images/` prefix already baked
    /// into the stored path, so it is stripped before joining.
    #[must_use]
    pub fn image_url(&self, image_path: &str) -> String {
        let path = image_path.trim_start_matches('/');
        let path = path.strip_prefix("images/").unwrap_or(path);
        format!("{}/images/{}", self.image_base_url, path)
    }
}

fn normalize(name: &'static str, raw: String) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/').to_string();
    let parsed = Url::parse(&trimmed).map_err(|_| ConfigError::InvalidUrl {
        name,
        raw: raw.clone(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl { name, raw });
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ApiConfig::new("http://localhost:8000/api/", "http://localhost:8000").unwrap();
        assert_eq!(
            config.endpoint("/next-artwork"),
            "http://localhost:8000/api/next-artwork"
        );
    }

    #[test]
    fn image_url_uses_image_host() {
        let config = ApiConfig::new("http://api.example/api", "http://img.example").unwrap();
        assert_eq!(
            config.image_url("starry_night.jpg"),
            "http://img.example/images/starry_night.jpg"
        );
    }

    #[test]
    fn image_url_strips_a_baked_in_prefix() {
        let config = ApiConfig::new("http://api.example/api", "http://img.example").unwrap();
        assert_eq!(
            config.image_url("/images/upload_7.jpg"),
            "http://img.example/images/upload_7.jpg"
        );
    }

    #[test]
    fn rejects_relative_url() {
        let err = ApiConfig::new("localhost:8000/api", "http://localhost:8000");
        assert!(err.is_err());
    }
}
