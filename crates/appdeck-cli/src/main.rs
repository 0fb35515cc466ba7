mod cli;
mod commands;
mod config;
mod manifest_file;
mod output;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use output::print_error;

fn main() {
    if let Err(e) = run() {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Add(args) => {
            let manifest = config::resolve_manifest(&cli.manifest)?;
            commands::add::add(&manifest, args)?;
        }
        Commands::List(args) => {
            let manifest = config::resolve_manifest(&cli.manifest)?;
            commands::list::list(&manifest, args)?;
        }
        Commands::Board => {
            let manifest = config::resolve_manifest(&cli.manifest)?;
            commands::board::board(&manifest)?;
        }
        Commands::SetStatus(args) => {
            let manifest = config::resolve_manifest(&cli.manifest)?;
            commands::edit::set_status(&manifest, &args.slug, args.status.into())?;
        }
        Commands::Edit(args) => {
            let manifest = config::resolve_manifest(&cli.manifest)?;
            commands::edit::edit(&manifest, args)?;
        }
        Commands::Remove(args) => {
            let manifest = config::resolve_manifest(&cli.manifest)?;
            commands::edit::remove(&manifest, &args.slug)?;
        }
        Commands::Export => {
            let manifest = config::resolve_manifest(&cli.manifest)?;
            commands::export::export(&manifest)?;
        }
        Commands::Config(args) => match &args.command {
            cli::ConfigCommands::Show => {
                let cfg = config::load()?;
                println!(
                    "{}: {}",
                    "Manifest".cyan(),
                    cfg.manifest.as_deref().unwrap_or("(not set)")
                );
            }
            cli::ConfigCommands::Set(set_args) => {
                let mut cfg = config::load()?;
                match set_args.key.as_str() {
                    "manifest" => cfg.manifest = Some(set_args.value.clone()),
                    other => {
                        anyhow::bail!("Unknown config key: {other}. Valid keys: manifest")
                    }
                }
                config::save(&cfg)?;
                output::print_success(&format!("Set {} = {}", set_args.key, set_args.value));
            }
        },
    }

    Ok(())
}
