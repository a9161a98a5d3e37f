//! Command dispatch: file handling at the edges, domain passes in the middle.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{self, Settings};
use crate::domain::{
    to_display_tree, CoordinatePlacer, DimensionResolver, EmitMode, FloorplanError, Node,
    TreeBuilder,
};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    if !settings.color {
        colored::control::set_override(false);
    }

    match &cli.command {
        Some(Commands::Skeleton { input, output }) => {
            emit_postorder(input, output.as_deref(), EmitMode::Skeleton)
        }
        Some(Commands::Resolve { input, output }) => {
            emit_postorder(input, output.as_deref(), EmitMode::Resolved)
        }
        Some(Commands::Place { input, output }) => emit_placement(input, output.as_deref()),
        Some(Commands::Run {
            input,
            skeleton,
            resolved,
            placement,
        }) => run_batch(&settings, input, skeleton, resolved, placement),
        Some(Commands::Tree { input }) => show_tree(input),
        Some(Commands::Config { command }) => config_command(command, &settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// Parse the floorplan description from a file.
#[instrument]
fn load_tree(input: &Path) -> CliResult<Node> {
    let file = File::open(input).map_err(|e| CliError::Input {
        path: input.to_path_buf(),
        source: e,
    })?;
    let mut builder = TreeBuilder::new();
    let tree = builder.build(BufReader::new(file))?;
    debug!("parsed tree with {} modules", tree.leaf_count());
    Ok(tree)
}

/// Open the record sink: the given file, or stdout.
fn open_sink(output: Option<&Path>) -> CliResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| CliError::Output {
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

#[instrument]
fn emit_postorder(input: &Path, output: Option<&Path>, mode: EmitMode) -> CliResult<()> {
    let mut tree = load_tree(input)?;
    let mut sink = open_sink(output)?;
    DimensionResolver::new(mode, &mut sink).resolve(&mut tree)?;
    sink.flush().map_err(FloorplanError::Io)?;
    Ok(())
}

#[instrument]
fn emit_placement(input: &Path, output: Option<&Path>) -> CliResult<()> {
    let mut tree = load_tree(input)?;
    // Placement needs every extent resolved; run the dimension pass without
    // emitting records.
    DimensionResolver::new(EmitMode::Resolved, &mut io::sink()).resolve(&mut tree)?;
    let mut sink = open_sink(output)?;
    CoordinatePlacer::new(&mut sink).place(&mut tree)?;
    sink.flush().map_err(FloorplanError::Io)?;
    Ok(())
}

/// One-shot batch: skeleton, resolved, and placement streams from a single
/// parse. Relative output paths resolve against the configured output
/// directory.
#[instrument(skip(settings))]
pub fn run_batch(
    settings: &Settings,
    input: &Path,
    skeleton: &Path,
    resolved: &Path,
    placement: &Path,
) -> CliResult<()> {
    let mut tree = load_tree(input)?;

    let skeleton = settings.resolve_output(skeleton);
    let resolved = settings.resolve_output(resolved);
    let placement = settings.resolve_output(placement);

    let mut sink = open_sink(Some(&skeleton))?;
    DimensionResolver::new(EmitMode::Skeleton, &mut sink).resolve(&mut tree)?;
    sink.flush().map_err(FloorplanError::Io)?;
    output::action("wrote", &skeleton.display());

    let mut sink = open_sink(Some(&resolved))?;
    DimensionResolver::new(EmitMode::Resolved, &mut sink).resolve(&mut tree)?;
    sink.flush().map_err(FloorplanError::Io)?;
    output::action("wrote", &resolved.display());

    let mut sink = open_sink(Some(&placement))?;
    CoordinatePlacer::new(&mut sink).place(&mut tree)?;
    sink.flush().map_err(FloorplanError::Io)?;
    output::action("wrote", &placement.display());

    Ok(())
}

#[instrument]
fn show_tree(input: &Path) -> CliResult<()> {
    let mut tree = load_tree(input)?;
    DimensionResolver::new(EmitMode::Resolved, &mut io::sink()).resolve(&mut tree)?;
    output::info(&to_display_tree(&tree));
    Ok(())
}

fn config_command(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            match config::global_config_path() {
                Some(path) => output::info(&path.display()),
                None => output::warning("no config directory available"),
            }
            Ok(())
        }
    }
}
