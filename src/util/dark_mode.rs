//! Dark mode presentation.
//!
//! Adds or removes the `dark-mode` class on `<body>`. The flag itself lives
//! in `UiState` (memory only; a reload starts in light mode). Requires a
//! browser environment.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "csr")]
const DARK_MODE_CLASS: &str = "dark-mode";

/// Apply or remove the `dark-mode` class on `<body>`.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let class_list = body.class_list();
        let result = if enabled {
            class_list.add_1(DARK_MODE_CLASS)
        } else {
            class_list.remove_1(DARK_MODE_CLASS)
        };
        if let Err(err) = result {
            log::warn!("failed to update body class: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}
