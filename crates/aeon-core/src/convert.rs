//! Unit conversions and measurement presets.
//!
//! Conversion factors and preset tables match the values published on the
//! calculator surfaces: masses in kilograms, temperatures in kelvin,
//! distances in megaparsecs. Preset declaration order is display order.

use std::str::FromStr;

/// Kilograms per solar mass.
pub const SOLAR_MASS_KG: f64 = 1.989e30;
/// Kilograms per Earth mass.
pub const EARTH_MASS_KG: f64 = 5.972e24;
/// Meters per megaparsec.
pub const METERS_PER_MEGAPARSEC: f64 = 3.086e22;
/// Light-years per megaparsec.
pub const LIGHT_YEARS_PER_MEGAPARSEC: f64 = 3.26e6;
/// Seconds per Julian year.
pub const SECONDS_PER_YEAR: f64 = 60.0 * 60.0 * 24.0 * 365.25;

/// Temperature scales accepted by [`to_kelvin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
}

impl FromStr for TemperatureUnit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "k" | "kelvin" => Ok(Self::Kelvin),
            "c" | "celsius" => Ok(Self::Celsius),
            "f" | "fahrenheit" => Ok(Self::Fahrenheit),
            other => Err(ConvertError::UnknownTemperatureUnit(other.into())),
        }
    }
}

/// Convert a temperature to kelvin.
pub fn to_kelvin(value: f64, from: TemperatureUnit) -> f64 {
    match from {
        TemperatureUnit::Kelvin => value,
        TemperatureUnit::Celsius => value + 273.15,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + 273.15,
    }
}

/// Mass units accepted by [`to_kilograms`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassUnit {
    Kilograms,
    SolarMasses,
    EarthMasses,
}

impl FromStr for MassUnit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kg" | "kilograms" => Ok(Self::Kilograms),
            "solar" | "sun" => Ok(Self::SolarMasses),
            "earth" => Ok(Self::EarthMasses),
            other => Err(ConvertError::UnknownMassUnit(other.into())),
        }
    }
}

/// Convert a mass to kilograms.
pub fn to_kilograms(value: f64, from: MassUnit) -> f64 {
    match from {
        MassUnit::Kilograms => value,
        MassUnit::SolarMasses => value * SOLAR_MASS_KG,
        MassUnit::EarthMasses => value * EARTH_MASS_KG,
    }
}

/// A named reference value offered as a one-step preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    /// Display label.
    pub label: &'static str,
    /// Preset value, in the owning table's unit.
    pub value: f64,
}

/// Mass presets in kilograms, in display order.
pub const MASS_PRESETS: &[Preset] = &[
    Preset {
        label: "Earth",
        value: EARTH_MASS_KG,
    },
    Preset {
        label: "Sun",
        value: SOLAR_MASS_KG,
    },
    Preset {
        label: "Milky Way SMBH",
        value: 8.2e36,
    },
    Preset {
        label: "Stellar Black Hole (10 M\u{2609})", // M☉
        value: 1.989e31,
    },
];

/// Hubble-constant presets in km/s/Mpc, in display order.
pub const HUBBLE_PRESETS: &[Preset] = &[
    Preset {
        label: "Planck 2018",
        value: 67.4,
    },
    Preset {
        label: "HST Key Project",
        value: 72.0,
    },
    Preset {
        label: "WMAP",
        value: 70.0,
    },
    Preset {
        label: "Riess et al. 2019",
        value: 74.0,
    },
];

/// Errors from parsing unit names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Temperature unit string not recognized.
    #[error("unknown temperature unit: {0} (expected kelvin, celsius, or fahrenheit)")]
    UnknownTemperatureUnit(String),

    /// Mass unit string not recognized.
    #[error("unknown mass unit: {0} (expected kg, solar, or earth)")]
    UnknownMassUnit(String),
}
