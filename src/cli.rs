//! Command-line interface implementation for Mould.
//! Provides argument parsing with clap and dispatches each command.

use crate::error::Result;
use crate::inputs::{check_required_inputs, parse_inputs};
use crate::resolver::{gather_available_templates, search_for_template};
use crate::sources::{configured_sources, parse_source_list};
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use log::info;
use std::path::PathBuf;

/// Command-line arguments structure for Mould.
#[derive(Parser, Debug)]
#[command(
    name = "mould",
    version,
    about = "Mould: generate projects from your collection of templates",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON file listing template source directories.
    /// Defaults to $MOULD_HOME/template-sources.json, or ~/mould/template-sources.json
    #[arg(long, value_name = "FILE", global = true)]
    pub sources_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load, apply substitutions and output a template
    Use {
        /// Name of the template to use
        #[arg(value_name = "TEMPLATE_NAME")]
        template_name: String,

        /// Where the generated project is created; must not exist yet
        #[arg(value_name = "OUTPUT_PATH")]
        output_path: PathBuf,

        /// Comma-separated template source directories.
        /// Overrides the template sources file
        #[arg(long = "template-sources", visible_alias = "ts", value_name = "SOURCES")]
        template_sources: Option<String>,

        /// Template input as key=value; may be repeated (-i a=1 -i b=2 or -i a=1 b=2)
        #[arg(short, long = "input", value_name = "KEY=VALUE", num_args = 1..)]
        inputs: Vec<String>,
    },

    /// List the templates available for use
    List,

    /// List the directories searched for templates
    Sources,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 after printing help if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::MissingSubcommand
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                let _ = Args::command().print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}

/// Runs the parsed command.
///
/// # Flow for `use`
/// 1. Resolves the template sources (flag, else sources file)
/// 2. Finds the template by name
/// 3. Parses `--input` values and checks every required input is present
/// 4. Exports the template to the output path
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Use { template_name, output_path, template_sources, inputs } => {
            let sources = match template_sources {
                Some(list) => parse_source_list(&list)?,
                None => configured_sources(args.sources_file.as_deref()),
            };

            let template = search_for_template(&sources, &template_name)?;
            let config = template.config()?;

            let input_values = parse_inputs(&inputs)?;
            check_required_inputs(&config, &input_values)?;

            let summary = template.export(&config, &output_path, &input_values)?;
            info!(
                "Created {} directories and {} files",
                summary.directories, summary.files
            );
            println!(
                "Template '{}' generated successfully in {}.",
                template.name,
                output_path.display()
            );
        }
        Command::List => {
            let sources = configured_sources(args.sources_file.as_deref());
            for template in gather_available_templates(&sources)? {
                println!("{template}");
            }
        }
        Command::Sources => {
            for source in configured_sources(args.sources_file.as_deref()) {
                println!("{}", source.path().display());
            }
        }
    }
    Ok(())
}
