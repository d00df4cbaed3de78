use clap::Parser;
use propace_autofill::cli::commands::{cmd_fields, cmd_fill};
use propace_autofill::cli::config::{Cli, Commands, load_config};
use propace_autofill::trace::logger::TraceLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve trace sink: CLI > config > disabled
    let tracer = match cli.trace.as_deref().or(config.trace.path.as_deref()) {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    match cli.command {
        Commands::Fill {
            snapshot,
            data,
            format,
            output,
        } => {
            // CLI > config > defaults
            let format = format.as_deref().unwrap_or(&config.fill.format);
            let output = output.as_deref().or(config.fill.output.as_deref());

            let filled = cmd_fill(&snapshot, &data, format, output, cli.verbose, &tracer)?;
            if !filled {
                std::process::exit(1);
            }
        }
        Commands::Fields { snapshot, format } => {
            let format = format.as_deref().unwrap_or(&config.fill.format);
            cmd_fields(&snapshot, format, None, cli.verbose)?;
        }
    }

    Ok(())
}
