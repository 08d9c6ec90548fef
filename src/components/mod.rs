//! Reusable UI components.

pub mod breed_card;
pub mod toolbar;
