//! aeon CLI: command-line interface for the cosmic timeline browser

use aeon_core::{
    carnot_efficiency, format_number, hubble_velocity, schwarzschild_radius, to_kelvin,
    to_kilograms, universe_age_years, Catalog, MassUnit, Preset, TemperatureUnit, HUBBLE_PRESETS,
    MASS_PRESETS,
};
use clap::{Parser, Subcommand};
use std::path::Path;

/// Terminal browser for cosmic history, with local unit and physics helpers
#[derive(Parser)]
#[command(name = "aeon")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the timeline browser (default when no command specified)
    Tui,

    /// List all epochs in timeline order
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one epoch in full
    Show {
        /// Epoch id, as printed by `aeon list`
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a value to SI units
    Convert {
        #[command(subcommand)]
        conversion: ConvertCommands,
    },

    /// Evaluate a physics formula
    Calc {
        #[command(subcommand)]
        formula: CalcCommands,
    },
}

#[derive(Subcommand)]
enum ConvertCommands {
    /// Temperature to kelvin
    Temp {
        /// Input value
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Input scale: kelvin, celsius, or fahrenheit
        unit: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mass to kilograms
    Mass {
        /// Input value
        value: f64,

        /// Input unit: kg, solar, or earth
        unit: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the reference preset tables
    Presets {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum CalcCommands {
    /// Carnot efficiency for two reservoir temperatures
    Carnot {
        /// Hot reservoir temperature in kelvin
        hot: f64,

        /// Cold reservoir temperature in kelvin
        cold: f64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Schwarzschild radius for a mass
    Schwarzschild {
        /// Mass value
        mass: f64,

        /// Mass unit: kg, solar, or earth
        #[arg(long, default_value = "kg")]
        unit: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Recession velocity under Hubble's law
    Velocity {
        /// Hubble constant in km/s/Mpc
        h0: f64,

        /// Distance in megaparsecs
        distance: f64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Expansion-age estimate from a Hubble constant
    Age {
        /// Hubble constant in km/s/Mpc (default: Planck 2018)
        #[arg(default_value_t = 67.4)]
        h0: f64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

const AEON_DIR: &str = ".aeon";

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Tui) => {
            // Default: open the browser
            cmd_tui();
        }
        Some(Commands::List { json }) => cmd_list(json),
        Some(Commands::Show { id, json }) => cmd_show(&id, json),
        Some(Commands::Convert { conversion }) => match conversion {
            ConvertCommands::Temp { value, unit, json } => cmd_convert_temp(value, &unit, json),
            ConvertCommands::Mass { value, unit, json } => cmd_convert_mass(value, &unit, json),
            ConvertCommands::Presets { json } => cmd_presets(json),
        },
        Some(Commands::Calc { formula }) => match formula {
            CalcCommands::Carnot { hot, cold, json } => cmd_carnot(hot, cold, json),
            CalcCommands::Schwarzschild { mass, unit, json } => {
                cmd_schwarzschild(mass, &unit, json);
            }
            CalcCommands::Velocity { h0, distance, json } => cmd_velocity(h0, distance, json),
            CalcCommands::Age { h0, json } => cmd_age(h0, json),
        },
    }
}

fn cmd_tui() {
    let prefs_path = Path::new(AEON_DIR).join("prefs.json");

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = rt.block_on(aeon_tui::run_tui(Catalog::builtin(), prefs_path)) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_list(json: bool) {
    let catalog = Catalog::builtin();

    if json {
        print_json(&serde_json::json!(catalog.records()));
        return;
    }

    println!("Cosmic timeline ({} epochs)\n", catalog.len());

    for (i, record) in catalog.records().iter().enumerate() {
        println!(
            "  {:>2}. {:<24}  {:<17}  {:<10}  {}",
            i + 1,
            record.title,
            record.id,
            record.era.label(),
            record.time
        );
    }

    println!("\nUse `aeon show <id>` for the full record");
}

fn cmd_show(id: &str, json: bool) {
    let catalog = Catalog::builtin();

    let Some(record) = catalog.lookup(id) else {
        eprintln!("Unknown epoch id: {id}");
        eprintln!("Known ids: {}", catalog.ordered_ids().join(", "));
        std::process::exit(1);
    };

    if json {
        print_json(&serde_json::json!(record));
        return;
    }

    if let Some(index) = catalog.index_of(id) {
        println!("{} ({} of {})", record.title, index + 1, catalog.len());
    } else {
        println!("{}", record.title);
    }
    println!(
        "{} | {} | {} era",
        record.time,
        record.temperature,
        record.era.label()
    );
    println!();

    let label_width = record
        .stats
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);
    for (label, value) in &record.stats {
        println!("  {label:>label_width$}  {value}");
    }

    println!();
    println!("{}", record.description.trim_end());
}

fn cmd_convert_temp(value: f64, unit: &str, json: bool) {
    let from = match unit.parse::<TemperatureUnit>() {
        Ok(u) => u,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let kelvin = to_kelvin(value, from);

    if json {
        print_json(&serde_json::json!({
            "value": value,
            "unit": unit,
            "kelvin": kelvin,
        }));
        return;
    }

    println!("{} K", format_number(kelvin, 2));
}

fn cmd_convert_mass(value: f64, unit: &str, json: bool) {
    let from = match unit.parse::<MassUnit>() {
        Ok(u) => u,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let kilograms = to_kilograms(value, from);

    if json {
        print_json(&serde_json::json!({
            "value": value,
            "unit": unit,
            "kilograms": kilograms,
        }));
        return;
    }

    println!("{} kg", format_number(kilograms, 3));
}

fn cmd_presets(json: bool) {
    if json {
        print_json(&serde_json::json!({
            "mass_kg": preset_json(MASS_PRESETS),
            "hubble_km_s_mpc": preset_json(HUBBLE_PRESETS),
        }));
        return;
    }

    println!("Mass presets (kg)\n");
    for preset in MASS_PRESETS {
        println!("  {:<28} {}", preset.label, format_number(preset.value, 3));
    }

    println!("\nHubble constant presets (km/s/Mpc)\n");
    for preset in HUBBLE_PRESETS {
        println!("  {:<28} {}", preset.label, format_number(preset.value, 1));
    }
}

fn cmd_carnot(hot: f64, cold: f64, json: bool) {
    let efficiency = match carnot_efficiency(hot, cold) {
        Ok(eff) => eff,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if json {
        print_json(&serde_json::json!({
            "hot_k": hot,
            "cold_k": cold,
            "efficiency": efficiency,
            "percent": efficiency * 100.0,
        }));
        return;
    }

    println!(
        "Carnot efficiency: {} ({}%)",
        format_number(efficiency, 4),
        format_number(efficiency * 100.0, 2)
    );
}

fn cmd_schwarzschild(mass: f64, unit: &str, json: bool) {
    let mass_unit = match unit.parse::<MassUnit>() {
        Ok(u) => u,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let mass_kg = to_kilograms(mass, mass_unit);

    let radius = match schwarzschild_radius(mass_kg) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if json {
        print_json(&serde_json::json!({
            "mass_kg": mass_kg,
            "radius_m": radius,
            "radius_km": radius / 1000.0,
        }));
        return;
    }

    println!("Mass: {} kg", format_number(mass_kg, 3));
    println!(
        "Schwarzschild radius: {} m ({} km)",
        format_number(radius, 3),
        format_number(radius / 1000.0, 3)
    );
}

fn cmd_velocity(h0: f64, distance: f64, json: bool) {
    let velocity = hubble_velocity(h0, distance);
    let fraction_of_c = velocity * 1e3 / aeon_core::physics::SPEED_OF_LIGHT;

    if json {
        print_json(&serde_json::json!({
            "h0_km_s_mpc": h0,
            "distance_mpc": distance,
            "velocity_km_s": velocity,
            "fraction_of_c": fraction_of_c,
        }));
        return;
    }

    println!(
        "Recession velocity: {} km/s ({} c)",
        format_number(velocity, 2),
        format_number(fraction_of_c, 4)
    );
}

fn cmd_age(h0: f64, json: bool) {
    let years = match universe_age_years(h0) {
        Ok(y) => y,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let billion_years = years / 1e9;

    if json {
        print_json(&serde_json::json!({
            "h0_km_s_mpc": h0,
            "age_years": years,
            "age_billion_years": billion_years,
        }));
        return;
    }

    println!("Hubble time for H0 = {} km/s/Mpc", format_number(h0, 1));
    println!("Age estimate: {} billion years", format_number(billion_years, 2));
}

fn preset_json(presets: &[Preset]) -> serde_json::Value {
    serde_json::json!(presets
        .iter()
        .map(|p| serde_json::json!({ "label": p.label, "value": p.value }))
        .collect::<Vec<_>>())
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_declaration() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_tui() {
        let cli = Cli::try_parse_from(["aeon"]).unwrap();
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["aeon", "tui"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Tui)));
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["aeon", "show", "recombination", "--json"]).unwrap();
        let Some(Commands::Show { id, json }) = cli.command else {
            panic!("expected show command");
        };
        assert_eq!(id, "recombination");
        assert!(json);
    }

    #[test]
    fn test_parse_convert_temp_negative_value() {
        let cli = Cli::try_parse_from(["aeon", "convert", "temp", "-40", "fahrenheit"]).unwrap();
        let Some(Commands::Convert {
            conversion: ConvertCommands::Temp { value, unit, json },
        }) = cli.command
        else {
            panic!("expected convert temp");
        };
        assert!((value + 40.0).abs() < f64::EPSILON);
        assert_eq!(unit, "fahrenheit");
        assert!(!json);
    }

    #[test]
    fn test_parse_calc_age_default_h0() {
        let cli = Cli::try_parse_from(["aeon", "calc", "age"]).unwrap();
        let Some(Commands::Calc {
            formula: CalcCommands::Age { h0, json },
        }) = cli.command
        else {
            panic!("expected calc age");
        };
        assert!((h0 - 67.4).abs() < f64::EPSILON);
        assert!(!json);
    }

    #[test]
    fn test_parse_schwarzschild_unit_flag() {
        let cli =
            Cli::try_parse_from(["aeon", "calc", "schwarzschild", "10", "--unit", "solar"])
                .unwrap();
        let Some(Commands::Calc {
            formula: CalcCommands::Schwarzschild { mass, unit, .. },
        }) = cli.command
        else {
            panic!("expected calc schwarzschild");
        };
        assert!((mass - 10.0).abs() < f64::EPSILON);
        assert_eq!(unit, "solar");
    }
}
