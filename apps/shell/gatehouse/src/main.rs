use gatehouse::commands;
use gatehouse::error::ShellError;
use gatehouse::logger::initialize as logger_initialize;
use gatehouse::router;
use gatehouse::state::{ShellNavigator, ShellState};

use request_core::config::{CoreConfig, default_config_dir, default_data_dir};
use request_core::navigation::Navigator;
use request_core::pipeline::Pipeline;
use request_core::session::{FileTokenStore, TokenStore};
use request_core::transport::{HttpTransport, Transport};

use std::fs::create_dir_all;
use std::io::Write as IoWrite;
use std::sync::Arc;

use log::info;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), ShellError> {
    let config_dir = default_config_dir()
        .ok_or_else(|| ShellError::startup("no config directory on this platform"))?;
    let data_dir = default_data_dir()
        .ok_or_else(|| ShellError::startup("no data directory on this platform"))?;

    // Ensure the data directory exists before the logger opens its file
    create_dir_all(&data_dir)
        .map_err(|e| ShellError::startup(format!("failed to create data directory: {e}")))?;

    logger_initialize(&data_dir)?;

    info!("Gatehouse shell starting");

    let config =
        CoreConfig::load(&config_dir).map_err(|e| ShellError::startup(e.to_string()))?;
    info!("Gateway: {}", config.gateway.base_url);

    let store: Arc<dyn TokenStore> = match &config.session.token_file {
        Some(path) => Arc::new(FileTokenStore::with_path(path.clone())),
        None => Arc::new(FileTokenStore::new(&data_dir)),
    };

    let transport = HttpTransport::with_timeout(
        &config.gateway.base_url,
        &config.gateway.operations_path,
        config.timeout(),
    )
    .map_err(|e| ShellError::startup(e.to_string()))?;

    let navigator = Arc::new(ShellNavigator::new(router::HOME));

    let pipeline = Pipeline::builder()
        .store(Arc::clone(&store))
        .transport(Arc::new(transport) as Arc<dyn Transport>)
        .navigator(Arc::clone(&navigator) as Arc<dyn Navigator>)
        .login_location(config.session.login_location.clone())
        .build()
        .map_err(|e| ShellError::startup(e.to_string()))?;

    let state = ShellState::new(pipeline, store, navigator);

    run_loop(&state).await;

    info!("Gatehouse shell exiting");
    Ok(())
}

fn print_help() {
    println!("commands:");
    println!("  login <email> <password>   establish a session");
    println!("  logout                     clear the session");
    println!("  open <path>                navigate (guarded routes redirect)");
    println!("  call <operation> [json]    submit an operation");
    println!("  session                    show session state");
    println!("  quit");
}

async fn run_loop(state: &ShellState) {
    print_help();

    let stdin = std::io::stdin();
    loop {
        print!("{} > ", state.navigator().current());
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        if stdin.read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }

        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("login") => {
                let (Some(email), Some(password)) = (parts.next(), parts.next()) else {
                    println!("usage: login <email> <password>");
                    continue;
                };
                match commands::session::login(state, email, password).await {
                    Ok(()) => println!("logged in, now at {}", state.navigator().current()),
                    Err(e) => println!("{e}"),
                }
            }
            Some("logout") => {
                commands::session::logout(state);
                println!("logged out, now at {}", state.navigator().current());
            }
            Some("open") => {
                let Some(path) = parts.next() else {
                    println!("usage: open <path>");
                    continue;
                };
                match router::resolve(state, path) {
                    router::Resolution::Rendered(title) => println!("[{title}]"),
                    router::Resolution::RedirectedToLogin => {
                        println!("redirected to {}", state.navigator().current());
                    }
                    router::Resolution::NotFound => println!("no such page: {path}"),
                }
            }
            Some("call") => {
                let Some(name) = parts.next() else {
                    println!("usage: call <operation> [json]");
                    continue;
                };
                let rest = parts.collect::<Vec<_>>().join(" ");
                let payload = if rest.is_empty() {
                    json!({})
                } else {
                    match serde_json::from_str(&rest) {
                        Ok(value) => value,
                        Err(e) => {
                            println!("invalid json payload: {e}");
                            continue;
                        }
                    }
                };
                match commands::operations::call(state, name, payload).await {
                    Ok(payload) => println!("{payload:#}"),
                    Err(e) => println!("{e}"),
                }
            }
            Some("session") => {
                println!(
                    "{}",
                    if state.logged_in() { "logged in" } else { "logged out" }
                );
            }
            Some("quit") | Some("exit") => break,
            Some(other) => println!("unknown command: {other}"),
            None => {}
        }
    }
}
