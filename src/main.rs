//! RF-Sessions CLI
//!
//! Thin terminal frontend over the library: point the client at an
//! analyzer server, then rename sessions interactively. All workflow
//! logic lives in the library; this file only wires prompt, config and
//! view files together and prints outcome messages.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use async_trait::async_trait;

use rf_sessions::config::{configure_sync, get_sync_config};
use rf_sessions::domain::{DomainError, EditDraft};
use rf_sessions::store::{load_view, save_view};
use rf_sessions::{AppStore, EditController, EditPrompt, HttpRemoteStore, PromptOutcome};

const CONFIG_FILE: &str = "sync_config.json";
const VIEW_FILE: &str = "sessions.json";

const USAGE: &str = "\
Usage:
  rf-sessions configure <url> <token>   Point the client at an analyzer server
  rf-sessions rename <session-id>       Rename a session interactively

Files live in the current directory, or $RF_SESSIONS_DIR if set.";

/// Data directory, overridable for multiple profiles
fn data_dir() -> PathBuf {
    env::var_os("RF_SESSIONS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Line-oriented edit prompt: empty input keeps the default, EOF (Ctrl-D)
/// cancels the whole interaction
struct TerminalPrompt;

#[async_trait]
impl EditPrompt for TerminalPrompt {
    async fn collect(&mut self, defaults: EditDraft) -> PromptOutcome {
        let name = match read_field("Enter new session name", &defaults.name) {
            Some(name) => name,
            None => return PromptOutcome::Cancelled,
        };
        let description =
            match read_field("Enter new description (optional)", &defaults.description) {
                Some(description) => description,
                None => return PromptOutcome::Cancelled,
            };
        PromptOutcome::Submitted(EditDraft {
            session_id: defaults.session_id,
            name,
            description,
        })
    }
}

fn read_field(label: &str, default: &str) -> Option<String> {
    print!("{} [{}]: ", label, default);
    io::stdout().flush().ok()?;

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => {
            let line = line.trim_end_matches(['\r', '\n']);
            if line.is_empty() {
                Some(default.to_string())
            } else {
                Some(line.to_string())
            }
        }
    }
}

fn cmd_configure(url: &str, token: &str) -> ExitCode {
    let path = data_dir().join(CONFIG_FILE);
    match configure_sync(&path, url.to_string(), token.to_string()) {
        Ok(()) => {
            println!("Sync configured for {}", url);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn cmd_rename(id: &str) -> ExitCode {
    let id: u32 = match id.parse() {
        Ok(id) => id,
        Err(_) => {
            eprintln!("Invalid session id: {}", id);
            return ExitCode::FAILURE;
        }
    };

    let dir = data_dir();
    let Some(config) = get_sync_config(&dir.join(CONFIG_FILE)) else {
        eprintln!("Not configured. Run: rf-sessions configure <url> <token>");
        return ExitCode::FAILURE;
    };

    let view_path = dir.join(VIEW_FILE);
    let state = match load_view(&view_path) {
        Ok(state) => state,
        Err(DomainError::NotFound(_)) => {
            eprintln!("No session view at {}; nothing to rename", view_path.display());
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let store = AppStore::new(state);
    let remote = HttpRemoteStore::new(config.url.clone(), Arc::new(config));
    let controller = EditController::new(remote);
    let mut prompt = TerminalPrompt;

    let outcome = controller.edit_session(&store, id, &mut prompt).await;
    if let Some(message) = outcome.message() {
        println!("{}", message);
    }

    if outcome.is_updated() {
        let state = store.lock().await;
        if let Err(e) = save_view(&view_path, &state) {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    match outcome {
        rf_sessions::EditOutcome::Cancelled => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("configure") if args.len() == 3 => cmd_configure(&args[1], &args[2]),
        Some("rename") if args.len() == 2 => cmd_rename(&args[1]).await,
        _ => {
            eprintln!("{}", USAGE);
            ExitCode::FAILURE
        }
    }
}
