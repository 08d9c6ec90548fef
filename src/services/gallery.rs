//! Gallery fetch workflows: the initial bulk load and single-image refresh.
//!
//! ERROR HANDLING
//! ==============
//! A catalog failure fails the whole load. A failed image request only marks
//! its own record (placeholder image plus an error message); the rest of the
//! batch is unaffected.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use futures::future::join_all;

use crate::config::MAX_BREEDS;
use crate::net::api::BreedApi;
use crate::net::types::FetchError;
use crate::state::breeds::BreedRecord;

/// Shown on a card whose image could not be fetched during the initial load.
pub const IMAGE_LOAD_FAILED_MESSAGE: &str = "Failed to load image";

/// Inline SVG shown when a breed has no image yet.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;charset=utf-8,%3Csvg xmlns='http://www.w3.org/2000/svg' width='300' height='200' viewBox='0 0 300 200'%3E%3Crect width='300' height='200' fill='%23ddd'/%3E%3Ctext x='150' y='105' font-family='sans-serif' font-size='16' text-anchor='middle' fill='%23777'%3ENo image%3C/text%3E%3C/svg%3E";

/// Pick the first `limit` distinct, non-empty breed names in service order.
///
/// Names are trimmed and lowercased; `limit` never exceeds `MAX_BREEDS`.
pub fn select_breed_names(names: impl IntoIterator<Item = String>, limit: usize) -> Vec<String> {
    let limit = limit.min(MAX_BREEDS);
    let mut selected: Vec<String> = Vec::with_capacity(limit);
    for name in names {
        if selected.len() == limit {
            break;
        }
        let name = name.trim().to_lowercase();
        if name.is_empty() || selected.contains(&name) {
            continue;
        }
        selected.push(name);
    }
    selected
}

/// Fetch the catalog, then one image per selected breed, all concurrently.
///
/// Resolves once every image request has settled. Records are numbered from 1
/// in catalog order.
///
/// # Errors
///
/// Returns the catalog request's error; image failures never fail the load.
pub async fn load_initial_breeds<A: BreedApi>(api: &A, limit: usize) -> Result<Vec<BreedRecord>, FetchError> {
    let names = select_breed_names(api.fetch_catalog().await?, limit);
    let images = join_all(names.iter().map(|name| api.fetch_random_image(name))).await;

    let records: Vec<BreedRecord> = (1..)
        .zip(names.into_iter().zip(images))
        .map(|(id, (name, image))| match image {
            Ok(url) => BreedRecord::new(id, name, url),
            Err(err) => {
                log::warn!("initial image fetch for {name} failed: {err}");
                BreedRecord::new(id, name, PLACEHOLDER_IMAGE).with_error(IMAGE_LOAD_FAILED_MESSAGE)
            }
        })
        .collect();

    log::info!("loaded {} breeds", records.len());
    Ok(records)
}

/// Fetch a replacement image URL for `name`.
///
/// # Errors
///
/// Returns the underlying `FetchError`; the caller turns it into card state.
pub async fn refresh_image<A: BreedApi>(api: &A, name: &str) -> Result<String, FetchError> {
    api.fetch_random_image(name).await.inspect_err(|err| {
        log::warn!("new image fetch for {name} failed: {err}");
    })
}
