use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "mueller")]
#[command(about = "Apply Mueller matrices to Stokes vectors and classify the result", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every command that prints results
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format (defaults to the config file setting, then terminal)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Plain output: no colors, ASCII tables
    #[arg(long)]
    pub plain: bool,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transform a Stokes vector through a Mueller matrix
    Calculate {
        /// Matrix row 1 (4 numbers, comma-separated)
        #[arg(long, allow_hyphen_values = true)]
        row1: Option<String>,

        /// Matrix row 2 (4 numbers, comma-separated)
        #[arg(long, allow_hyphen_values = true)]
        row2: Option<String>,

        /// Matrix row 3 (4 numbers, comma-separated)
        #[arg(long, allow_hyphen_values = true)]
        row3: Option<String>,

        /// Matrix row 4 (4 numbers, comma-separated)
        #[arg(long, allow_hyphen_values = true)]
        row4: Option<String>,

        /// Input Stokes vector (I, Q, U, V), comma-separated
        #[arg(long, allow_hyphen_values = true)]
        vector: Option<String>,

        /// Start from a named preset (see `mueller presets`)
        #[arg(short, long)]
        preset: Option<String>,

        /// Configuration file (defaults to the nearest .mueller.toml)
        #[arg(short, long, env = "MUELLER_CONFIG")]
        config: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Degree of polarization and classification of one Stokes vector
    Analyze {
        /// Stokes vector (I, Q, U, V), comma-separated
        #[arg(long, allow_hyphen_values = true)]
        vector: String,

        /// Configuration file (defaults to the nearest .mueller.toml)
        #[arg(short, long, env = "MUELLER_CONFIG")]
        config: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the built-in presets
    Presets,

    /// Write a default .mueller.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_calculate_with_negative_row() {
        let cli = Cli::try_parse_from([
            "mueller",
            "calculate",
            "--row2",
            "-0.5, 0.5, 0, 0",
            "--preset",
            "vertical-polarizer",
            "-f",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Calculate {
                row2,
                preset,
                output,
                ..
            } => {
                assert_eq!(row2.as_deref(), Some("-0.5, 0.5, 0, 0"));
                assert_eq!(preset.as_deref(), Some("vertical-polarizer"));
                assert_eq!(output.format, Some(OutputFormat::Json));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_analyze_with_config() {
        let cli = Cli::try_parse_from([
            "mueller",
            "analyze",
            "--vector",
            "1, -1, 0, 0",
            "--config",
            "optics.toml",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze { vector, config, .. } => {
                assert_eq!(vector, "1, -1, 0, 0");
                assert_eq!(config, Some(PathBuf::from("optics.toml")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_analyze_requires_vector() {
        assert!(Cli::try_parse_from(["mueller", "analyze"]).is_err());
    }
}
