use crate::server;
use clap::{Args, Parser, Subcommand};
use course_registration::config::AppConfig;
use course_registration::error::AppError;
use course_registration::registration::MySqlRegistrationStore;
use course_registration::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Course Registration",
    about = "Accept course registrations and send confirmation e-mails",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Create the registrations table in the configured MySQL database
    InitDb,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::InitDb => init_db().await,
    }
}

async fn init_db() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let database = config.require_database()?;
    let store = MySqlRegistrationStore::connect(database).await?;
    store.ensure_schema().await?;

    info!(host = %database.host, database = %database.database, "registrations table ready");
    Ok(())
}
