//! Tabshelf RPC server: JSON-RPC over stdin/stdout for the browser extension host.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"tabs.save", "params":{"date":"2024-03-01"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Logs go to stderr and `<data dir>/logs`; stdout carries only responses.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use log::{debug, error, info, warn};
use serde_json::{json, Value};

use tabshelf::app::App;
use tabshelf::logger;
use tabshelf::platform;
use tabshelf::rpc_handler::handle_method;

fn write_line(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn main() {
    let level = logger::parse_level(&std::env::var("TABSHELF_LOG").unwrap_or_default());
    let log_dir = platform::log_dir();
    if let Err(e) = logger::setup_logger(level, Some(&log_dir)) {
        eprintln!("file logging unavailable ({}), using stderr only", e);
        let _ = logger::setup_logger(level, None);
    }

    let db_path = platform::database_path();
    let app = match App::new(&db_path.to_string_lossy()) {
        Ok(app) => Mutex::new(app),
        Err(e) => {
            error!("failed to open bookmark store at {}: {}", db_path.display(), e);
            std::process::exit(1);
        }
    };
    info!("tabshelf-rpc {} ready, store at {}", env!("CARGO_PKG_VERSION"), db_path.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let ready = json!({"event":"ready","version":env!("CARGO_PKG_VERSION")});
    if write_line(&mut out, &ready).is_err() {
        return;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!("stdin closed: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                let err = json!({"id":null,"error":format!("parse error: {}",e)});
                if write_line(&mut out, &err).is_err() {
                    break;
                }
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));
        debug!("-> {} {}", method, params);

        let response = match handle_method(&app, method, &params) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => json!({"id": id, "error": err}),
        };
        if write_line(&mut out, &response).is_err() {
            break;
        }
    }

    info!("tabshelf-rpc shutting down");
}
