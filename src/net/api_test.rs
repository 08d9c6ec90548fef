use super::*;

#[test]
fn client_keeps_given_config() {
    let config = GalleryConfig::new("http://localhost:9000", 5);
    let client = DogApiClient::new(config.clone());
    assert_eq!(client.config(), &config);
}

#[test]
fn default_client_uses_default_config() {
    assert_eq!(DogApiClient::default().config(), &GalleryConfig::default());
}

#[cfg(not(feature = "csr"))]
#[test]
fn catalog_is_unavailable_without_browser_transport() {
    let client = DogApiClient::default();
    assert_eq!(futures::executor::block_on(client.fetch_catalog()), Err(FetchError::Unavailable));
}

#[cfg(not(feature = "csr"))]
#[test]
fn random_image_is_unavailable_without_browser_transport() {
    let client = DogApiClient::default();
    assert_eq!(futures::executor::block_on(client.fetch_random_image("akita")), Err(FetchError::Unavailable));
}
