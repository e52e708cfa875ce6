use anyhow::Result;
use clap::Parser;

use vcheck::cli::{
    execute_check, execute_emit, execute_levels, execute_mask, resolve_config, resolve_mask, Cli,
    Commands, EmitRequest,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref(), cli.preset.as_deref())?;

    match cli.command {
        Commands::Mask { expression } => execute_mask(&expression)?,
        Commands::Levels { mask } => {
            let mask = resolve_mask(&config, mask.as_deref())?;
            execute_levels(mask)?;
        }
        Commands::Emit {
            message,
            level,
            mask,
            caller,
            plain,
            sink,
        } => {
            let mask = resolve_mask(&config, mask.as_deref())?;
            let request = EmitRequest {
                level: level.parse()?,
                caller,
                plain,
                message,
            };
            execute_emit(config, mask, sink, &request)?;
        }
        Commands::Check { code, mask } => {
            let mask = resolve_mask(&config, mask.as_deref())?;
            if execute_check(config, mask, code).is_failure() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
