//! Command dispatch and execution

use std::io;
use std::path::PathBuf;

use clap::{Command, CommandFactory};
use clap_complete::{generate, Generator};
use tracing::{debug, instrument};

use crate::application::GreeterService;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, project_config_path, Settings};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Greet { names, template }) => _greet(cli, names, template.as_deref()),
        Some(Commands::File { path, template }) => _file(cli, path, template.as_deref()),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(cli),
            ConfigCommands::Init { global } => _config_init(cli, *global),
            ConfigCommands::Path => _config_path(cli),
        },
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            print_completions(*shell, &mut cmd);
            Ok(())
        }
        Some(Commands::Info) => _info(),
        None => Ok(()),
    }
}

/// Resolve the greeter: explicit template wins, otherwise layered settings.
fn resolve_service(cli: &Cli, template: Option<&str>) -> CliResult<GreeterService> {
    if let Some(template) = template {
        return Ok(GreeterService::with_template(template)?);
    }
    let settings = Settings::load(Some(&project_dir(cli)?))?;
    Ok(GreeterService::from_settings(&settings)?)
}

fn project_dir(cli: &Cli) -> CliResult<PathBuf> {
    match &cli.project_dir {
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir()
            .map_err(|e| CliError::Input(format!("cannot determine current directory: {e}"))),
    }
}

#[instrument(skip(cli))]
fn _greet(cli: &Cli, names: &[String], template: Option<&str>) -> CliResult<()> {
    debug!("names: {:?}", names);
    let service = resolve_service(cli, template)?;
    for greeting in service.greet_all(names) {
        output::info(&greeting);
    }
    Ok(())
}

#[instrument(skip(cli))]
fn _file(cli: &Cli, path: &PathBuf, template: Option<&str>) -> CliResult<()> {
    debug!("path: {:?}", path);
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::Input(format!("{}: {}", path.display(), e)))?;
    let service = resolve_service(cli, template)?;
    for greeting in service.greet_lines(&content) {
        output::info(&greeting);
    }
    Ok(())
}

#[instrument(skip(cli))]
fn _config_show(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(Some(&project_dir(cli)?))?;
    output::header("Effective configuration");
    output::info(&settings.to_toml()?);
    Ok(())
}

#[instrument(skip(cli))]
fn _config_init(cli: &Cli, global: bool) -> CliResult<()> {
    let path = if global {
        global_config_path().ok_or_else(|| {
            CliError::InvalidArgs("cannot determine global config directory".to_string())
        })?
    } else {
        project_config_path(&project_dir(cli)?)
    };
    Settings::init_config_file(&path)?;
    output::action("Created", &path.display());
    Ok(())
}

#[instrument(skip(cli))]
fn _config_path(cli: &Cli) -> CliResult<()> {
    output::header("Config paths");
    if let Some(global) = global_config_path() {
        let marker = if global.exists() { "exists" } else { "missing" };
        output::detail(&format!("global:  {} ({})", global.display(), marker));
    }
    let local = project_config_path(&project_dir(cli)?);
    let marker = if local.exists() { "exists" } else { "missing" };
    output::detail(&format!("project: {} ({})", local.display(), marker));
    Ok(())
}

fn _info() -> CliResult<()> {
    let cmd = Cli::command();
    if let Some(author) = cmd.get_author() {
        output::action("AUTHOR", &author);
    }
    if let Some(version) = cmd.get_version() {
        output::action("VERSION", &version);
    }
    Ok(())
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
