//! CLI parsing and command dispatch.

use std::{ffi::OsString, io, path::PathBuf};

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::{
    banner,
    commands::{self, Project},
    error::{Error, Result},
    scaffold::Kind,
};

/// Parsed command line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "derisk-cli",
    version,
    about = "CLI tool for managing OpenDerisk Skills"
)]
struct Cli {
    /// Control colored output.
    #[arg(long, value_enum, default_value = "auto", global = true)]
    color: ColorMode,
    /// Enable verbose output.
    #[arg(long, global = true)]
    verbose: bool,
    /// Project root (defaults to the nearest directory with templates).
    #[arg(long, env = "DERISK_SKILLS_ROOT", global = true)]
    root: Option<PathBuf>,
    /// Command to execute (prints the banner and help when omitted).
    #[command(subcommand)]
    command: Option<Command>,
}

/// Supported color output modes.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorMode {
    /// Only colorize when stdout is a TTY.
    Auto,
    /// Always colorize output.
    Always,
    /// Never colorize output.
    Never,
}

// Commands are ordered alphabetically - maintain this order.
/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Initialize the CLI tool and display the banner.
    Init,
    /// List all skills.
    #[command(alias = "ls")]
    List {
        /// Print the registry as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Create a new skill or agent from a template.
    New {
        /// What to create.
        #[command(subcommand)]
        target: NewTarget,
    },
    /// Register skills to the OpenDeRisk platform.
    Register,
}

/// Targets of the `new` command.
#[derive(Debug, Subcommand)]
enum NewTarget {
    /// Create a new agent.
    Agent {
        /// Name of the agent directory.
        name: String,
        /// Overwrite an existing agent without prompting.
        #[arg(long, short = 'f')]
        force: bool,
    },
    /// Create a new skill.
    Skill {
        /// Name of the skill directory.
        name: String,
        /// Overwrite an existing skill without prompting.
        #[arg(long, short = 'f')]
        force: bool,
    },
}

/// Run the requested command.
pub async fn run() -> Result<()> {
    let args: Vec<OsString> = std::env::args_os().collect();
    let help_color = color_from_args(&args);
    let mut command = help_command(help_color);
    let matches = command.clone().get_matches_from(args);
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|error| error.exit());
    init_tracing(cli.verbose);
    let color = cli.color.into_choice();

    let Some(subcommand) = cli.command else {
        return command
            .print_help()
            .map_err(|error| Error::Output { source: error });
    };

    // Match arms are ordered alphabetically - maintain this order.
    match subcommand {
        Command::Init => commands::init::run(color).await,
        Command::List { json } => {
            let project = Project::load(cli.root.as_deref())?;
            commands::list::run(color, &project, json).await
        }
        Command::New { target } => {
            let project = Project::load(cli.root.as_deref())?;
            let (kind, name, force) = target.into_parts();
            commands::new::run(color, cli.verbose, &project, kind, name, force).await
        }
        Command::Register => {
            let project = Project::load(cli.root.as_deref())?;
            commands::register::run(color, &project).await
        }
    }
}

/// Build the clap command with the banner shown before help.
fn help_command(color: commands::ColorChoice) -> clap::Command {
    let clap_color = match color {
        commands::ColorChoice::Auto => clap::ColorChoice::Auto,
        commands::ColorChoice::Always => clap::ColorChoice::Always,
        commands::ColorChoice::Never => clap::ColorChoice::Never,
    };
    Cli::command()
        .color(clap_color)
        .before_help(banner::render(color.enabled()))
}

/// Find the `--color` mode ahead of parsing, so help output can honor it.
///
/// The last valid occurrence wins; anything after `--` is ignored.
fn color_from_args(args: &[OsString]) -> commands::ColorChoice {
    let mut mode = ColorMode::Auto;
    let mut args = args.iter().skip(1).filter_map(|arg| arg.to_str());
    while let Some(arg) = args.next() {
        if arg == "--" {
            break;
        }
        let value = match arg.strip_prefix("--color") {
            Some("") => args.next(),
            Some(rest) => rest.strip_prefix('='),
            None => None,
        };
        if let Some(parsed) = value.and_then(|value| <ColorMode as ValueEnum>::from_str(value, true).ok()) {
            mode = parsed;
        }
    }
    mode.into_choice()
}

/// Install the stderr log subscriber; `RUST_LOG` overrides the default level.
fn init_tracing(verbose: bool) {
    let level = if verbose {
        "warn,derisk_skills=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

impl ColorMode {
    /// Convert a CLI color mode into a color choice.
    fn into_choice(self) -> commands::ColorChoice {
        match self {
            Self::Auto => commands::ColorChoice::Auto,
            Self::Always => commands::ColorChoice::Always,
            Self::Never => commands::ColorChoice::Never,
        }
    }
}

impl NewTarget {
    /// Split into kind, name and force flag.
    fn into_parts(self) -> (Kind, String, bool) {
        match self {
            Self::Agent { name, force } => (Kind::Agent, name, force),
            Self::Skill { name, force } => (Kind::Skill, name, force),
        }
    }
}
