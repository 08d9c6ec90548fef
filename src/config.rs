//! Gallery configuration: remote API location and breed cap.
//!
//! There is no runtime configuration source; the application builds the
//! default config at startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "https://dog.ceo/api";

/// Hard cap on the number of breeds shown in the gallery.
pub const MAX_BREEDS: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryConfig {
    pub api_base_url: String,
    pub breed_limit: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL, MAX_BREEDS)
    }
}

impl GalleryConfig {
    /// Trailing slashes on `api_base_url` are dropped and `breed_limit` is
    /// clamped to `1..=MAX_BREEDS`.
    pub fn new(api_base_url: &str, breed_limit: usize) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_owned(),
            breed_limit: breed_limit.clamp(1, MAX_BREEDS),
        }
    }

    /// Endpoint enumerating every breed name.
    pub fn catalog_url(&self) -> String {
        format!("{}/breeds/list/all", self.api_base_url)
    }

    /// Endpoint returning one random image for `breed`.
    pub fn random_image_url(&self, breed: &str) -> String {
        format!("{}/breed/{breed}/images/random", self.api_base_url)
    }
}
