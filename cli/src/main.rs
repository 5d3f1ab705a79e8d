mod http;
mod storage;


use std::path::PathBuf;

use clap::{Parser, Subcommand};
use inventory_session::form::{validate_login, validate_register};
use inventory_session::{Access, ApiError, AuthApi, FormError, Route, SessionStore, SessionView, check};
use serde_json::json;

use crate::http::HttpAuthApi;
use crate::storage::FileStorage;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not signed in; run `inventory-cli login` first")]
    NotSignedIn,
    #[error("{0}")]
    Form(#[from] FormError),
    #[error("auth request failed: {0}")]
    Api(#[from] ApiError),
    #[error("access to {path} denied; redirected to {redirect}")]
    AccessDenied { path: String, redirect: &'static str },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "inventory-cli", about = "Inventory admin session CLI")]
struct Cli {
    #[arg(long, env = "INVENTORY_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, env = "INVENTORY_STATE_FILE", default_value = ".inventory-session.json")]
    state_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and persist the session.
    Login {
        #[arg(long, env = "INVENTORY_EMAIL")]
        email: String,
        #[arg(long, env = "INVENTORY_PASSWORD", hide_env_values = true)]
        pass: String,
    },
    /// Create an account. Does not sign in.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        pass: String,
    },
    /// Clear the persisted session.
    Logout,
    /// Print the signed-in user.
    Whoami,
    /// Print the `Authorization` header value for the session.
    Bearer,
    /// Evaluate the route guard for a path.
    Check { path: String },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let api = HttpAuthApi::new(&cli.base_url);
    let mut store = SessionStore::restore(FileStorage::open(&cli.state_file));
    tracing::debug!(state_file = %store.storage().path().display(), "session restored");

    run(cli.command, &api, &mut store).await
}

async fn run<A>(command: Command, api: &A, store: &mut SessionStore<FileStorage>) -> Result<(), CliError>
where
    A: AuthApi + ?Sized,
{
    match command {
        Command::Login { email, pass } => {
            let request = validate_login(&email, &pass)?;
            let user = store.login(api, &request.email, &request.pass).await?;
            print_json(&json!({ "user": user, "isAdmin": user.is_admin() }))
        }
        Command::Register { name, email, pass } => {
            let request = validate_register(&name, &email, &pass)?;
            let response = api.register(&request).await?;
            print_json(&json!({ "message": response.message, "userId": response.user_id }))
        }
        Command::Logout => {
            store.logout(&|route: Route| {
                tracing::info!(next = route.path(), "session cleared; sign in again to continue");
            });
            Ok(())
        }
        Command::Whoami => {
            let user = store.current_user().ok_or(CliError::NotSignedIn)?;
            print_json(&json!({ "user": user, "isAdmin": user.is_admin() }))
        }
        Command::Bearer => {
            let bearer = store.bearer().ok_or(CliError::NotSignedIn)?;
            println!("{bearer}");
            Ok(())
        }
        Command::Check { path } => check_path(&path, &*store),
    }
}

fn check_path<V>(path: &str, session: &V) -> Result<(), CliError>
where
    V: SessionView + ?Sized,
{
    let route = Route::resolve(path);
    match check(route, session) {
        Access::Proceed => {
            println!("allow {}", route.path());
            Ok(())
        }
        Access::Redirect(target) => Err(CliError::AccessDenied {
            path: path.to_owned(),
            redirect: target.path(),
        }),
    }
}

fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
