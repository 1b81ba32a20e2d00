//! Job Board Client Entry Point
//!
//! Command-line front end over the validation and auth crates.
//! Uses `anyhow` for startup errors; auth failures are reported through
//! the presenter and mapped to a non-zero exit code.

mod commands;
mod field_args;

use std::path::PathBuf;
use std::process::ExitCode;

use auth::models::user_role;
use clap::{Args, Parser, Subcommand};
use kernel::error::{app_error::ResultExt, kind::ErrorKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jobboard", version, about = "Job board client: form validation and sessions")]
struct Cli {
    /// Session storage file
    #[arg(long, global = true, env = "JOBBOARD_STORAGE", default_value = ".jobboard-session.json")]
    storage: PathBuf,

    /// API base URL (defaults to `API_URL` or the local development API)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Fail on unknown rule names instead of skipping them
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate one value against whitespace-separated rule names
    Validate(ValidateArgs),
    /// Validate a whole form given as `name[:type]=value|rules` fields
    Form(FormArgs),
    /// Check a value against its input type (email, password, tel, ...)
    Check(CheckArgs),
    /// Score a password's strength (0-5)
    Strength { password: String },
    /// Sign in and persist the session
    Login(LoginArgs),
    /// Create an account and persist the session
    Register(RegisterArgs),
    /// Clear the persisted session
    Logout,
    /// Print the restored session
    Status,
    /// Exit non-zero unless the session user has the role
    RequireRole { role: String },
}

#[derive(Args)]
struct ValidateArgs {
    value: String,
    /// Rule names, e.g. "required email"
    #[arg(long, default_value = "")]
    rules: String,
    /// Value of the sibling `password` field, for `confirmPassword`
    #[arg(long)]
    password: Option<String>,
}

#[derive(Args)]
struct FormArgs {
    /// Fields, e.g. `email:email=a@b.co|required email`
    #[arg(required = true)]
    fields: Vec<String>,
}

#[derive(Args)]
struct CheckArgs {
    /// Input type; unknown types are treated as text
    #[arg(long = "type", default_value = "text")]
    kind: String,
    value: String,
}

#[derive(Args)]
struct LoginArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
}

#[derive(Args)]
struct RegisterArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
    #[arg(long, default_value = user_role::SEEKER)]
    role: String,
    /// Additional profile fields as `key=value`
    #[arg(long = "field")]
    fields: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "jobboard=info,auth=info,validation=info,platform=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let validation_config = if cli.strict {
        validation::ValidationConfig::strict()
    } else {
        validation::ValidationConfig::from_env()
            .map_app_err(ErrorKind::ValidationFailure, "Invalid VALIDATION_MODE")
            .map_err(|e| e.with_action("Set VALIDATION_MODE to strict or lenient"))?
    };

    let storage = cli.storage;
    let api_url = cli.api_url;
    let session = || commands::Session::open(&storage, api_url.clone());

    let ok = match cli.command {
        Command::Validate(args) => {
            commands::validate(&validation_config, &args.value, &args.rules, args.password)
        }
        Command::Form(args) => commands::form(&validation_config, &args.fields)?,
        Command::Check(args) => commands::check(&args.kind, &args.value),
        Command::Strength { password } => commands::strength(&password),
        Command::Login(args) => session().login(args.email, args.password).await,
        Command::Register(args) => {
            let extra = field_args::parse_pairs(&args.fields)?;
            session()
                .register(
                    args.first_name,
                    args.last_name,
                    args.email,
                    args.password,
                    args.role,
                    extra,
                )
                .await
        }
        Command::Logout => session().logout(),
        Command::Status => session().status()?,
        Command::RequireRole { role } => session().require_role(&role),
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
