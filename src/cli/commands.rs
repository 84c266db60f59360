//! Command dispatch: load settings, run the service, print sections.

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::{DemoService, GraphRequest};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::CliResult;
use crate::config::{global_config_path, Settings};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        None | Some(Commands::Demo) => _demo(&load_service(cli)?),
        Some(Commands::Array { values }) => {
            let service = load_service(cli)?;
            let values = or_sample(values, &service.settings().linear.values);
            output::section(None, &service.array(values)?);
            Ok(())
        }
        Some(Commands::List { values }) => {
            let service = load_service(cli)?;
            let values = or_sample(values, &service.settings().linear.values);
            output::section(None, &service.linked_list(values));
            Ok(())
        }
        Some(Commands::Stack { values, pop }) => {
            let service = load_service(cli)?;
            let values = or_sample(values, &service.settings().linear.values);
            output::section(None, &service.stack(values, *pop)?);
            Ok(())
        }
        Some(Commands::Queue { values, dequeue }) => {
            let service = load_service(cli)?;
            let values = or_sample(values, &service.settings().linear.values);
            output::section(None, &service.queue(values, *dequeue)?);
            Ok(())
        }
        Some(Commands::Bst { values, tree }) => {
            let service = load_service(cli)?;
            let values = or_sample(values, &service.settings().bst.values);
            output::section(None, &service.bst(values, *tree));
            Ok(())
        }
        Some(Commands::Graph {
            vertices,
            edges,
            bfs,
            dfs,
        }) => _graph(&load_service(cli)?, *vertices, edges, *bfs, *dfs),
        Some(Commands::Config { command }) => _config(cli, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

/// Layered settings are only read by commands that use them.
fn load_service(cli: &Cli) -> CliResult<DemoService> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    Ok(DemoService::new(settings))
}

/// Explicit values win; no values means the configured sample.
fn or_sample<'a>(values: &'a [i32], sample: &'a [i32]) -> &'a [i32] {
    if values.is_empty() {
        sample
    } else {
        values
    }
}

#[instrument(skip(service))]
fn _demo(service: &DemoService) -> CliResult<()> {
    let sections = service.run_all()?;
    output::banner("=== DATA STRUCTURES IN RUST ===");
    for (i, section) in sections.iter().enumerate() {
        output::info("");
        output::section(Some(i + 1), section);
    }
    output::info("");
    output::banner("=== END OF DEMONSTRATION ===");
    Ok(())
}

#[instrument(skip(service))]
fn _graph(
    service: &DemoService,
    vertices: Option<usize>,
    edges: &[(i32, i32)],
    bfs: Option<i32>,
    dfs: Option<i32>,
) -> CliResult<()> {
    let mut request = GraphRequest::from_settings(service.settings());
    if let Some(n) = vertices {
        request.vertices = n;
    }
    if !edges.is_empty() {
        request.edges = edges.to_vec();
    }
    request.bfs_from = bfs;
    request.dfs_from = dfs;
    output::section(None, &service.graph(&request)?);
    Ok(())
}

#[instrument(skip(cli))]
fn _config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(cli.config.as_deref())?;
            output::info(&settings.to_toml()?)
        }
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::info("no config directory available on this platform"),
        },
    }
    Ok(())
}
