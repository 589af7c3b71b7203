//! Reusable UI widgets.

mod status_bar;

pub use status_bar::{KeyHint, StatusBar};
