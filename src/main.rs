use anyhow::Result;
use clap::Parser;
use mueller::cli::{Cli, Commands, OutputArgs};
use mueller::commands::{self, AnalyzeConfig, CalculateConfig};
use mueller::formatting::FormattingConfig;
use mueller::observability::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(verbosity_of(&cli.command));

    match cli.command {
        Commands::Calculate {
            row1,
            row2,
            row3,
            row4,
            vector,
            preset,
            config,
            output,
        } => commands::handle_calculate(build_calculate_config(
            [row1, row2, row3, row4],
            vector,
            preset,
            config,
            output,
        )),
        Commands::Analyze {
            vector,
            config,
            output,
        } => commands::handle_analyze(AnalyzeConfig {
            vector,
            config_path: config,
            format: output.format,
            output: output.output,
            plain: output.plain,
        }),
        Commands::Presets => commands::list_presets(FormattingConfig::from_env()),
        Commands::Init { force } => commands::init_config(force),
    }
}

// Pure function to pick the log verbosity for a command
fn verbosity_of(command: &Commands) -> u8 {
    match command {
        Commands::Calculate { output, .. } | Commands::Analyze { output, .. } => output.verbosity,
        Commands::Presets | Commands::Init { .. } => 0,
    }
}

// Pure function to build calculate configuration
fn build_calculate_config(
    rows: [Option<String>; 4],
    vector: Option<String>,
    preset: Option<String>,
    config_path: Option<std::path::PathBuf>,
    output: OutputArgs,
) -> CalculateConfig {
    CalculateConfig {
        rows,
        vector,
        preset,
        config_path,
        format: output.format,
        output: output.output,
        plain: output.plain,
    }
}
