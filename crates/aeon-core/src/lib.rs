//! aeon-core: Headless domain model for the aeon timeline browser
//!
//! This crate provides the non-UI core of aeon, including:
//! - The immutable epoch catalog and its built-in dataset
//! - The viewer state machine and the track zoom/pan model
//! - Unit conversions, measurement presets, and local physics formulas
//! - Numeric display formatting and persisted preferences

pub mod catalog;
pub mod convert;
pub mod data;
pub mod format;
pub mod physics;
pub mod prefs;
pub mod track;
pub mod viewer;

// Re-export commonly used types
pub use catalog::{Catalog, EpochRecord, Era};
pub use convert::{
    to_kelvin, to_kilograms, ConvertError, MassUnit, Preset, TemperatureUnit, HUBBLE_PRESETS,
    MASS_PRESETS,
};
pub use format::{format_number, round_to};
pub use physics::{
    carnot_efficiency, hubble_velocity, schwarzschild_radius, universe_age_years, PhysicsError,
};
pub use prefs::{Prefs, PrefsError};
pub use track::TrackView;
pub use viewer::{Direction, Viewer};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_version() {
        let version = core_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }

    #[test]
    fn test_builtin_catalog_resolves_every_ordered_id() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());
        for id in catalog.ordered_ids() {
            assert!(catalog.lookup(id).is_some(), "{id} does not resolve");
        }
    }
}
