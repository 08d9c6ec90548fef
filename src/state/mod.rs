//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Breed data (`breeds`, `gallery`) and presentation flags (`ui`) live in
//! separate signals so toggling the theme never re-projects the card list.

pub mod breeds;
pub mod gallery;
pub mod ui;
