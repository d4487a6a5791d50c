use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use passbook::cli::{
    handle_audit, handle_balance, handle_config, handle_deposit, handle_export, handle_history,
    handle_init, handle_withdraw, run_menu, ExportFormat, HistoryKind, MenuOutcome, Session,
};
use passbook::config::{PassbookPaths, Settings};

#[derive(Parser)]
#[command(
    name = "passbook",
    version,
    about = "Single-account bank ledger for the terminal",
    long_about = "Passbook keeps one account balance together with every deposit and \
                  withdrawal that produced it. Run it without a command for the \
                  interactive menu, or use the commands below for one-shot operations."
)]
struct Cli {
    /// Ledger data file (overrides the configured location)
    #[arg(long, global = true, env = "PASSBOOK_DATA_FILE")]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    Menu,

    /// Create the settings file and an empty ledger
    Init {
        /// Balance to start the ledger with
        #[arg(long, allow_hyphen_values = true)]
        opening_balance: Option<String>,
    },

    /// Deposit money and save
    Deposit {
        /// Amount to deposit (e.g., "100" or "100.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Withdraw money and save
    Withdraw {
        /// Amount to withdraw
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the current balance and totals
    Balance,

    /// Show recorded transactions
    History {
        /// Which records to show
        #[arg(value_enum, default_value = "all")]
        kind: HistoryKind,
    },

    /// Show the audit log
    Audit {
        /// Only show the most recent entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Export the ledger to a file
    Export {
        /// Output file path
        output: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show configuration and file locations
    Config,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the menu
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "passbook=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let paths = PassbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let session = Session::new(paths, settings, cli.data_file);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let outcome = run_menu(
                || session.open(),
                io::stdin().lock(),
                io::stdout().lock(),
                session.currency_symbol(),
            )?;
            if outcome == MenuOutcome::EndOfInput {
                info!("Input closed before exit; session not saved");
            }
        }
        Commands::Init { opening_balance } => {
            handle_init(&session, opening_balance.as_deref())?;
        }
        Commands::Deposit { amount } => handle_deposit(&session, &amount)?,
        Commands::Withdraw { amount } => handle_withdraw(&session, &amount)?,
        Commands::Balance => handle_balance(&session)?,
        Commands::History { kind } => handle_history(&session, kind)?,
        Commands::Audit { limit } => handle_audit(&session, limit)?,
        Commands::Export {
            output,
            format,
            pretty,
        } => {
            let service = session.open()?;
            handle_export(service.ledger(), output, format, pretty)?;
        }
        Commands::Config => handle_config(&session)?,
    }

    Ok(())
}
