use anyhow::Result;
use codegauge::cli::{parse_args, Commands};
use codegauge::commands::{handle_analyze, handle_batch, init_config, AnalyzeConfig, BatchConfig};
use codegauge::observability::{init_logging, install_panic_hook};

fn main() -> Result<()> {
    let cli = parse_args();

    init_logging(cli.command.verbosity());
    install_panic_hook();

    match cli.command {
        Commands::Analyze {
            file,
            format,
            output,
            config,
            plain,
            verbosity,
        } => {
            if plain {
                colored::control::set_override(false);
            }
            handle_analyze(AnalyzeConfig {
                file,
                format: format.into(),
                output,
                config,
                plain,
                verbosity,
            })
        }
        Commands::Batch {
            paths,
            format,
            output,
            config,
            extensions,
            jobs,
            plain,
            verbosity,
        } => {
            if plain {
                colored::control::set_override(false);
            }
            handle_batch(BatchConfig {
                paths,
                format: format.into(),
                output,
                config,
                extensions,
                jobs,
                plain,
                verbosity,
            })
        }
        Commands::Init { force } => init_config(force),
    }
}
