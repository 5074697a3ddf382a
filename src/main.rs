use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use module_sugar::{
    FilterRegistry,
    cli::{self, CliError, Emit, ExpandOptions},
};
use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "sugar")]
#[command(about = "Sugar - expands shorthand syntax in component-module definition trees")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a build unit (ESTree JSON)
    Expand {
        /// Build unit file (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Options JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = EmitArg::Json)]
        emit: EmitArg,
    },

    /// List registered filters
    Filters,

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'sugar docs' to list categories)
        category: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum EmitArg {
    Json,
    Js,
}

impl From<EmitArg> for Emit {
    fn from(arg: EmitArg) -> Self {
        match arg {
            EmitArg::Json => Emit::Json,
            EmitArg::Js => Emit::Js,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Expand {
            input,
            config,
            pretty,
            emit,
        } => run_expand(input, config, pretty, emit.into()),
        Commands::Filters => {
            print!("{}", cli::filters_overview(&FilterRegistry::standard()));
            Ok(())
        }
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => match cli::get_doc_category(&category) {
            Ok(content) => {
                print!("{}", content);
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_expand(
    input: Option<PathBuf>,
    config: Option<PathBuf>,
    pretty: bool,
    emit: Emit,
) -> Result<(), CliError> {
    let input = match input {
        Some(path) => Some(fs::read_to_string(path)?),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = ExpandOptions {
        input,
        config,
        pretty,
        emit,
    };

    println!("{}", cli::execute_expand(&options)?);
    Ok(())
}
