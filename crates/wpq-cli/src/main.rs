use std::io::stdout;

use clap::Parser;
use cli::{Args, Commands};
use error::WpqResult;
use logging::setup_logging;
use output::emit;
use tracing::info;
use utils::disable_color;
use wpq_config::config::{config_path, generate_default_config, set_config_path, Config};
use wpq_utils::path::resolve_path;

mod cli;
mod commands;
mod error;
mod logging;
mod output;
mod utils;

fn handle_cli() -> WpqResult<()> {
    let args = Args::parse();

    setup_logging(&args);

    if args.no_color {
        disable_color();
    }

    if let Some(ref c) = args.config {
        set_config_path(resolve_path(c)?);
    }

    match args.command {
        Commands::DefConfig => {
            generate_default_config()?;
        }
        Commands::Env => {
            let config = Config::new()?;
            info!("WPQ_CONFIG={}", config_path().display());
            info!("WPQ_DB={}", config.get_db_path()?.display());
            info!("table_prefix={}", config.table_prefix());
            info!("post_fields={}", config.post_fields().join(","));
        }
        command => {
            let config = Config::new()?;
            let composer = commands::open_composer(&config)?;

            let output = match command {
                Commands::Posts {
                    id,
                    fields,
                    limit,
                    offset,
                    latest,
                    order,
                } => commands::posts(&composer, id, fields, limit, offset, latest, order)?,
                Commands::Meta {
                    key,
                    post_id,
                } => commands::meta(&composer, &key, post_id)?,
                Commands::Terms {
                    post_id,
                    kind,
                } => commands::terms(&composer, post_id, kind)?,
                Commands::Comments {
                    post_id,
                } => commands::comments(&composer, post_id)?,
                Commands::Categories {
                    order,
                } => commands::categories(&composer, order)?,
                Commands::DefConfig | Commands::Env => unreachable!(),
            };

            emit(&mut stdout().lock(), &output, args.json, &config.display())?;
        }
    }

    Ok(())
}

fn main() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))
    .ok();

    if let Err(err) = handle_cli() {
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(1);
    }
}
