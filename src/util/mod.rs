//! Browser helpers kept out of component and state logic.

pub mod dark_mode;
