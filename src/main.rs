//! woodcraft - command-line front end for WoodCraft projects.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use woodcraft::{
    init_logging_with_level, render_cut_list, Config, DisplayUnit, LumberCategory, ProjectState,
    TemplateLibrary, BUILD_DATE, VERSION,
};

/// Design furniture from standard lumber and print cut lists.
#[derive(Parser, Debug)]
#[command(name = "woodcraft")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Display unit for lengths (inches, feet, cm)
    #[arg(short, long, global = true)]
    unit: Option<DisplayUnit>,

    /// Editor configuration file (TOML or JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List lumber profiles by category
    Catalog,

    /// List furniture templates
    Templates,

    /// Build a template and print its cut list
    Template {
        /// Template id, e.g. `workbench`
        id: String,

        /// Project name
        #[arg(short, long)]
        name: Option<String>,

        /// Write the project to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the cut list of a saved project
    CutList {
        /// Project file
        file: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => match Config::default_path() {
            Ok(path) if path.exists() => Ok(Config::load_or_default(&path)),
            Ok(_) => Ok(Config::default()),
            Err(e) => {
                warn!("No config directory: {}", e);
                Ok(Config::default())
            }
        },
    }
}

fn print_catalog(project: &ProjectState, unit: DisplayUnit) {
    let catalog = project.catalog();
    for category in LumberCategory::ALL {
        println!("{}", category);
        for profile in catalog.by_category(category) {
            println!(
                "  {:<8} {:<16} {} x {} {}, {} {} long",
                profile.id,
                profile.name,
                woodcraft::format_length(profile.actual_width, unit),
                woodcraft::format_length(profile.actual_height, unit),
                unit.label(),
                woodcraft::format_length(profile.default_length, unit),
                unit.label(),
            );
        }
    }
}

fn print_templates(library: &TemplateLibrary) {
    for template in library.list_all() {
        println!(
            "{:<14} {:<14} {} ({} pieces)",
            template.id,
            template.name,
            template.description,
            template.pieces.len()
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    init_logging_with_level(level)?;
    info!("WoodCraft {} (built {})", VERSION, BUILD_DATE);

    let config = load_config(args.config.as_deref())?;
    let mut project = ProjectState::with_config(&config);
    if let Some(unit) = args.unit {
        project.set_unit(unit);
    }
    let unit = project.unit();

    match args.command {
        Command::Catalog => print_catalog(&project, unit),
        Command::Templates => print_templates(&TemplateLibrary::builtin()),
        Command::Template { id, name, output } => {
            let library = TemplateLibrary::builtin();
            let template = library
                .get_template(&id)
                .with_context(|| format!("Unknown template '{}'", id))?;

            let applied = project.apply_template(template);
            if !applied.skipped.is_empty() {
                warn!("Skipped {} pieces with unknown profiles", applied.skipped.len());
            }
            project.set_project_name(name.as_deref().unwrap_or(&template.name));

            print!("{}", render_cut_list(&project.cut_list(), unit));

            if let Some(output) = output {
                project.save_to_file(&output)?;
                info!("Saved {}", output.display());
            }
        }
        Command::CutList { file, json } => {
            project.load_from_file(&file)?;
            info!(
                "Loaded '{}' with {} pieces",
                project.project_name(),
                project.piece_count()
            );

            let rows = project.cut_list();
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print!("{}", render_cut_list(&rows, unit));
            }
        }
    }

    Ok(())
}
