#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Presentation-only state; never touches breed data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}
