use crate::app::runner::{RunSettings, Task};
use crate::config::{OutputFormat, TomlConfig};
use crate::domain::model::RequestedDirection;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "roman-convert")]
#[command(about = "Convert between Arabic numbers (1-3999) and Roman numerals")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format, overrides the configuration file
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert one or more inputs, detecting the direction unless told otherwise
    Convert {
        #[arg(required = true, allow_negative_numbers = true)]
        inputs: Vec<String>,

        #[arg(short, long, value_enum)]
        direction: Option<DirectionArg>,
    },
    /// Arabic to Roman quick conversion
    A2r {
        #[arg(allow_negative_numbers = true)]
        arabic: String,
    },
    /// Roman to Arabic quick conversion (case-insensitive)
    R2a { roman: String },
    /// Read JSON conversion requests from stdin, one per line
    Batch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    #[value(name = "auto")]
    Auto,
    #[value(name = "toRoman", alias = "to-roman")]
    ToRoman,
    #[value(name = "toNumeric", alias = "to-numeric")]
    ToNumeric,
}

impl From<DirectionArg> for RequestedDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Auto => RequestedDirection::Auto,
            DirectionArg::ToRoman => RequestedDirection::ToRoman,
            DirectionArg::ToNumeric => RequestedDirection::ToNumeric,
        }
    }
}

impl CliConfig {
    /// Command-line flags win over the configuration file.
    pub fn output_format(&self, file: &TomlConfig) -> OutputFormat {
        self.format.unwrap_or_else(|| file.output_format())
    }

    pub fn pretty(&self, file: &TomlConfig) -> bool {
        self.pretty || file.pretty()
    }

    pub fn direction(&self, file: &TomlConfig) -> RequestedDirection {
        match &self.command {
            Command::Convert {
                direction: Some(direction),
                ..
            } => (*direction).into(),
            _ => file.default_direction(),
        }
    }

    pub fn run_settings(&self, file: &TomlConfig) -> RunSettings {
        RunSettings {
            direction: self.direction(file),
            format: self.output_format(file),
            pretty: self.pretty(file),
            ..RunSettings::from_config(file)
        }
    }

    pub fn task(&self) -> Task {
        match &self.command {
            Command::Convert { inputs, .. } => Task::Convert(inputs.clone()),
            Command::A2r { arabic } => Task::ArabicToRoman(arabic.clone()),
            Command::R2a { roman } => Task::RomanToArabic(roman.clone()),
            Command::Batch => Task::Batch,
        }
    }
}
