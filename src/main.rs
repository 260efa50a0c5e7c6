use std::process::ExitCode;
use std::sync::Arc;

use reclamation_portal::{
    AppConfig, Decision, Env, FileSessionStore, HttpAuthClient, Navigator, RouteTable,
    SessionState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// The navigation-host entry point: initializes configuration and logging,
/// assembles the engine (durable session store, HTTP auth collaborator,
/// static route table), then dispatches one host command:
///
///   goto <path>              evaluate a navigation and act on the Decision
///   login <id> <secret>      authenticate and print the post-login route
///   logout [current-path]    clear the session, re-evaluate the position
///   whoami                   print the stored session record, if any
#[tokio::main]
async fn main() -> ExitCode {
    // 1. Configuration & Environment Loading (Fail-Fast)
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // 2. Logging Filter Setup
    // Prioritizes RUST_LOG, falling back to a sensible local default.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "reclamation_portal=debug".into());

    // 3. Initialize Logging based on Environment
    match config.env {
        Env::Local => {
            // LOCAL: pretty print for human readability.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            // PROD: JSON output for centralized log aggregators.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Portal client starting in {:?} mode", config.env);

    // 4. Engine Assembly
    let session: SessionState = Arc::new(FileSessionStore::open(&config.session_path));
    let auth = Arc::new(HttpAuthClient::new(&config.auth_base_url));
    let routes = Arc::new(RouteTable::portal_defaults());
    let navigator = Navigator::new(session, auth, routes);

    // 5. Host Command Dispatch
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("goto") => {
            let Some(path) = args.get(1) else {
                eprintln!("usage: goto <path>");
                return ExitCode::FAILURE;
            };
            act_on(navigator.evaluate(path), path)
        }
        Some("login") => {
            let (Some(identifier), Some(secret)) = (args.get(1), args.get(2)) else {
                eprintln!("usage: login <identifier> <secret>");
                return ExitCode::FAILURE;
            };
            match navigator.login(identifier, secret).await {
                Ok(home) => {
                    println!("logged in, landing at {home}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    // The user-visible login failure message; the session
                    // was left untouched.
                    eprintln!("{e}");
                    ExitCode::FAILURE
                }
            }
        }
        Some("logout") => {
            let current = args.get(1).map(String::as_str).unwrap_or("/");
            act_on(navigator.logout(current), current)
        }
        Some("whoami") => {
            match navigator.session.get().and_then(|r| r.authenticate()) {
                Some(session) => {
                    let name = session.display_name.as_deref().unwrap_or("(no name)");
                    println!("{name} [{}]", session.role);
                }
                None => println!("anonymous"),
            }
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("usage: reclamation-portal <goto|login|logout|whoami> ...");
            ExitCode::FAILURE
        }
    }
}

/// act_on
///
/// The host's side of the contract: render on Allow, navigate away on a
/// redirect. In this CLI host "rendering" is printing the outcome.
fn act_on(decision: Decision, path: &str) -> ExitCode {
    match decision.redirect_target() {
        None => {
            println!("render {path}");
            ExitCode::SUCCESS
        }
        Some(target) => {
            println!("redirect {target}");
            ExitCode::SUCCESS
        }
    }
}
