use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadtrip_cli::commands::distance::handle_distance_command;
use roadtrip_cli::commands::interactive::run_session;
use roadtrip_cli::commands::load_roadtrip;
use roadtrip_cli::commands::resolve::handle_resolve_command;
use roadtrip_cli::commands::route::{handle_route_command, RouteCommandArgs};
use roadtrip_cli::options::DataOptions;
use roadtrip_cli::output::OutputFormat;
use roadtrip_cli::terminal::ColorPalette;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plan overland routes between countries")]
struct Cli {
    #[command(flatten)]
    data: DataOptions,

    /// Output format for route, distance and resolve.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Defaults to `interactive` when omitted.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the cheapest land route between two countries.
    Route {
        /// Starting country name.
        #[arg(long = "from")]
        from: String,
        /// Destination country name.
        #[arg(long = "to")]
        to: String,
    },
    /// Show the capital-to-capital distance between two countries.
    Distance {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
    },
    /// Show how a name resolves to its canonical country name.
    Resolve {
        /// Name in any known spelling.
        name: String,
    },
    /// Prompt for pairs of countries until EXIT.
    Interactive,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let roadtrip = load_roadtrip(&cli.data)?;
    let palette = ColorPalette::detect();
    let mut stdout = io::stdout().lock();

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Route { from, to } => {
            let args = RouteCommandArgs {
                from,
                to,
                directional: cli.data.directional,
            };
            handle_route_command(&roadtrip, &args, cli.format, &palette, &mut stdout)
        }
        Command::Distance { from, to } => {
            handle_distance_command(&roadtrip, &from, &to, cli.format, &palette, &mut stdout)
        }
        Command::Resolve { name } => {
            handle_resolve_command(&roadtrip, &name, cli.format, &palette, &mut stdout)
        }
        Command::Interactive => run_session(&roadtrip, io::stdin().lock(), stdout)
            .context("interactive session failed"),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
