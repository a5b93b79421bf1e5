//! Configuration structures for the parking lot simulator
//!
//! This module contains the simulation configuration structure, the command
//! line arguments that can override it, and the validation logic that guards
//! the generator against impossible layouts.

use super::ReportFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "parking-lot-simulator",
    version = "0.1.0",
    about = "Parking Lot Simulator - spot allocation, ticketing and billing",
    long_about = "Generates a parking lot with floors, spots and gates, parks a batch of vehicles through entry gates, then bills and releases every vehicle through exit gates, printing the lot status between phases.

EXAMPLES:
    # Run with default settings
    parking-lot-simulator

    # Use a configuration file
    parking-lot-simulator --config lot.json

    # Override specific settings
    parking-lot-simulator --floor-count 5 --vehicle-count 40 --seed 7

    # Generate configuration template
    parking-lot-simulator --print-config > my-lot.json

    # Validate configuration without running
    parking-lot-simulator --config my-lot.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Number of floors in the lot
    #[arg(long, help = "Number of floors in the lot")]
    pub floor_count: Option<usize>,

    /// Number of spots generated on every floor
    #[arg(long, help = "Number of spots per floor")]
    pub spots_per_floor: Option<usize>,

    /// Number of gates (entry and exit combined)
    #[arg(
        long,
        help = "Number of gates",
        long_help = "Total number of gates. At least one entry and one exit gate are always generated, so this must be 2 or more. Default: 5"
    )]
    pub gate_count: Option<usize>,

    /// Number of vehicles arriving during the run
    #[arg(long, help = "Number of vehicles to park")]
    pub vehicle_count: Option<usize>,

    /// Probability that a generated gate is an entry gate (0.0-1.0)
    #[arg(long, help = "Entry gate probability (0.0-1.0)")]
    pub entry_gate_probability: Option<f64>,

    /// Share of spots reserved for two-wheelers (0.0-1.0)
    #[arg(long, help = "Two-wheeler spot share (0.0-1.0)")]
    pub two_wheeler_spot_percentage: Option<f64>,

    /// Share of spots reserved for light motor vehicles (0.0-1.0)
    #[arg(long, help = "LMV spot share (0.0-1.0)")]
    pub light_motor_vehicle_spot_percentage: Option<f64>,

    /// Share of spots generated as inactive (0.0-1.0)
    #[arg(long, help = "Inactive spot share (0.0-1.0)")]
    pub inactive_spot_percentage: Option<f64>,

    /// Share of spots generated as already occupied (0.0-1.0)
    #[arg(long, help = "Pre-occupied spot share (0.0-1.0)")]
    pub occupied_spot_percentage: Option<f64>,

    /// Shortest simulated stay, in minutes
    #[arg(long, help = "Minimum simulated stay in minutes")]
    pub min_stay_minutes: Option<i64>,

    /// Longest simulated stay, in minutes
    #[arg(long, help = "Maximum simulated stay in minutes")]
    pub max_stay_minutes: Option<i64>,

    /// UPI id used by the payment stub
    #[arg(long, help = "UPI id charged on exit")]
    pub upi_id: Option<String>,

    /// Status report format
    #[arg(
        long,
        help = "Status report format (text or json)",
        long_help = "Format of the lot status report printed between phases. Supported formats: text, json. Default: text"
    )]
    pub report_format: Option<String>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running simulation
    #[arg(long, help = "Validate configuration without running simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of floors in the lot
    pub floor_count: Option<usize>,
    /// Number of spots per floor
    pub spots_per_floor: Option<usize>,
    /// Number of gates
    pub gate_count: Option<usize>,
    /// Number of vehicles to park
    pub vehicle_count: Option<usize>,
    /// Probability that a generated gate is an entry gate
    pub entry_gate_probability: Option<f64>,
    /// Share of two-wheeler spots
    pub two_wheeler_spot_percentage: Option<f64>,
    /// Share of LMV spots
    pub light_motor_vehicle_spot_percentage: Option<f64>,
    /// Share of inactive spots
    pub inactive_spot_percentage: Option<f64>,
    /// Share of pre-occupied spots
    pub occupied_spot_percentage: Option<f64>,
    /// Minimum simulated stay in minutes
    pub min_stay_minutes: Option<i64>,
    /// Maximum simulated stay in minutes
    pub max_stay_minutes: Option<i64>,
    /// UPI id used by the payment stub
    pub upi_id: Option<String>,
    /// Status report format
    pub report_format: Option<String>,
    /// Random seed for reproducible results
    pub seed: Option<u64>,
}

/// Configuration for the parking lot simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of floors in the lot
    pub floor_count: usize,

    /// Number of spots generated on every floor
    pub spots_per_floor: usize,

    /// Number of gates (entry and exit combined)
    pub gate_count: usize,

    /// Number of vehicles arriving during the run
    pub vehicle_count: usize,

    /// Probability that a generated gate is an entry gate (0.0-1.0)
    pub entry_gate_probability: f64,

    /// Share of spots for two-wheelers (0.0-1.0)
    pub two_wheeler_spot_percentage: f64,

    /// Share of spots for light motor vehicles (0.0-1.0); the rest are HMV spots
    pub light_motor_vehicle_spot_percentage: f64,

    /// Share of spots generated as inactive (0.0-1.0)
    pub inactive_spot_percentage: f64,

    /// Share of spots generated as occupied (0.0-1.0)
    pub occupied_spot_percentage: f64,

    /// Shortest simulated stay, in minutes
    pub min_stay_minutes: i64,

    /// Longest simulated stay, in minutes
    pub max_stay_minutes: i64,

    /// UPI id used by the payment stub
    pub upi_id: String,

    /// Status report format
    pub report_format: String,

    /// Random seed for reproducible results
    pub seed: Option<u64>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for simulation configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Floor count is invalid
    #[error("Floor count must be greater than 0, got {0}")]
    InvalidFloorCount(usize),

    /// Spots per floor is invalid
    #[error("Spots per floor must be greater than 0, got {0}")]
    InvalidSpotsPerFloor(usize),

    /// Gate count is invalid
    #[error("Gate count must be at least 2 (one entry, one exit), got {0}")]
    InvalidGateCount(usize),

    /// Vehicle count is invalid
    #[error("Vehicle count must be greater than 0, got {0}")]
    InvalidVehicleCount(usize),

    /// Percentage value is out of range
    #[error("Invalid percentage for {field}: {value} (must be between 0.0 and 1.0)")]
    InvalidPercentage {
        /// Name of the field with invalid percentage
        field: String,
        /// The invalid percentage value
        value: f64,
    },

    /// Two-wheeler and LMV spot shares leave a negative HMV share
    #[error("Vehicle spot shares must not exceed 1.0, got {sum}")]
    InvalidSpotMix {
        /// Sum of the two-wheeler and LMV shares
        sum: f64,
    },

    /// Inactive and occupied shares exceed the whole lot
    #[error("Inactive and occupied spot shares must not exceed 1.0, got {sum}")]
    InvalidStatusMix {
        /// Sum of the inactive and occupied shares
        sum: f64,
    },

    /// Stay range is invalid
    #[error("Invalid stay range: min ({0}) must be >= 0 and <= max ({1})")]
    InvalidStayRange(i64, i64),

    /// UPI id is empty
    #[error("UPI id must not be empty")]
    EmptyUpiId,

    /// Report format is unknown
    #[error("Unknown report format: {0} (supported: text, json)")]
    InvalidReportFormat(String),
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            floor_count: 3,
            spots_per_floor: 50,
            gate_count: 5,
            vehicle_count: 10,
            entry_gate_probability: 0.5,
            two_wheeler_spot_percentage: 0.3,
            light_motor_vehicle_spot_percentage: 0.5,
            inactive_spot_percentage: 0.1,
            occupied_spot_percentage: 0.2,
            min_stay_minutes: 15,
            max_stay_minutes: 240,
            upi_id: "upi@ybl".to_string(),
            report_format: "text".to_string(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            floor_count: config_file.floor_count.unwrap_or(defaults.floor_count),
            spots_per_floor: config_file.spots_per_floor.unwrap_or(defaults.spots_per_floor),
            gate_count: config_file.gate_count.unwrap_or(defaults.gate_count),
            vehicle_count: config_file.vehicle_count.unwrap_or(defaults.vehicle_count),
            entry_gate_probability: config_file
                .entry_gate_probability
                .unwrap_or(defaults.entry_gate_probability),
            two_wheeler_spot_percentage: config_file
                .two_wheeler_spot_percentage
                .unwrap_or(defaults.two_wheeler_spot_percentage),
            light_motor_vehicle_spot_percentage: config_file
                .light_motor_vehicle_spot_percentage
                .unwrap_or(defaults.light_motor_vehicle_spot_percentage),
            inactive_spot_percentage: config_file
                .inactive_spot_percentage
                .unwrap_or(defaults.inactive_spot_percentage),
            occupied_spot_percentage: config_file
                .occupied_spot_percentage
                .unwrap_or(defaults.occupied_spot_percentage),
            min_stay_minutes: config_file.min_stay_minutes.unwrap_or(defaults.min_stay_minutes),
            max_stay_minutes: config_file.max_stay_minutes.unwrap_or(defaults.max_stay_minutes),
            upi_id: config_file.upi_id.unwrap_or(defaults.upi_id),
            report_format: config_file.report_format.unwrap_or(defaults.report_format),
            seed: config_file.seed.or(defaults.seed),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.floor_count {
            config.floor_count = value;
        }
        if let Some(value) = args.spots_per_floor {
            config.spots_per_floor = value;
        }
        if let Some(value) = args.gate_count {
            config.gate_count = value;
        }
        if let Some(value) = args.vehicle_count {
            config.vehicle_count = value;
        }
        if let Some(value) = args.entry_gate_probability {
            config.entry_gate_probability = value;
        }
        if let Some(value) = args.two_wheeler_spot_percentage {
            config.two_wheeler_spot_percentage = value;
        }
        if let Some(value) = args.light_motor_vehicle_spot_percentage {
            config.light_motor_vehicle_spot_percentage = value;
        }
        if let Some(value) = args.inactive_spot_percentage {
            config.inactive_spot_percentage = value;
        }
        if let Some(value) = args.occupied_spot_percentage {
            config.occupied_spot_percentage = value;
        }
        if let Some(value) = args.min_stay_minutes {
            config.min_stay_minutes = value;
        }
        if let Some(value) = args.max_stay_minutes {
            config.max_stay_minutes = value;
        }
        if let Some(value) = args.upi_id {
            config.upi_id = value;
        }
        if let Some(value) = args.report_format {
            config.report_format = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.floor_count == 0 {
            return Err(ConfigValidationError::InvalidFloorCount(self.floor_count));
        }

        if self.spots_per_floor == 0 {
            return Err(ConfigValidationError::InvalidSpotsPerFloor(self.spots_per_floor));
        }

        if self.gate_count < 2 {
            return Err(ConfigValidationError::InvalidGateCount(self.gate_count));
        }

        if self.vehicle_count == 0 {
            return Err(ConfigValidationError::InvalidVehicleCount(self.vehicle_count));
        }

        self.validate_percentage("entry_gate_probability", self.entry_gate_probability)?;
        self.validate_percentage("two_wheeler_spot_percentage", self.two_wheeler_spot_percentage)?;
        self.validate_percentage(
            "light_motor_vehicle_spot_percentage",
            self.light_motor_vehicle_spot_percentage,
        )?;
        self.validate_percentage("inactive_spot_percentage", self.inactive_spot_percentage)?;
        self.validate_percentage("occupied_spot_percentage", self.occupied_spot_percentage)?;

        let spot_mix = self.two_wheeler_spot_percentage + self.light_motor_vehicle_spot_percentage;
        if spot_mix > 1.0 + f64::EPSILON {
            return Err(ConfigValidationError::InvalidSpotMix { sum: spot_mix });
        }

        let status_mix = self.inactive_spot_percentage + self.occupied_spot_percentage;
        if status_mix > 1.0 + f64::EPSILON {
            return Err(ConfigValidationError::InvalidStatusMix { sum: status_mix });
        }

        if self.min_stay_minutes < 0 || self.min_stay_minutes > self.max_stay_minutes {
            return Err(ConfigValidationError::InvalidStayRange(
                self.min_stay_minutes,
                self.max_stay_minutes,
            ));
        }

        if self.upi_id.trim().is_empty() {
            return Err(ConfigValidationError::EmptyUpiId);
        }

        self.get_report_format()
            .map_err(|_| ConfigValidationError::InvalidReportFormat(self.report_format.clone()))?;

        Ok(())
    }

    /// Helper method to validate percentage values
    fn validate_percentage(&self, field: &str, value: f64) -> Result<(), ConfigValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigValidationError::InvalidPercentage {
                field: field.to_string(),
                value,
            });
        }
        Ok(())
    }

    /// Share of spots reserved for heavy motor vehicles
    pub fn heavy_motor_vehicle_spot_percentage(&self) -> f64 {
        (1.0 - self.two_wheeler_spot_percentage - self.light_motor_vehicle_spot_percentage).max(0.0)
    }

    /// Total number of spots the generator will create
    pub fn total_spots(&self) -> usize {
        self.floor_count * self.spots_per_floor
    }

    /// Get the stay range in minutes as a tuple
    pub fn stay_minutes(&self) -> (i64, i64) {
        (self.min_stay_minutes, self.max_stay_minutes)
    }

    /// Get the report format as an enum value
    pub fn get_report_format(&self) -> Result<ReportFormat, String> {
        self.report_format.parse()
    }
}
