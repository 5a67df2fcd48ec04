use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::rc::Rc;

use client::domain::snapshot::GameSnapshot;
use client::infra::{ConsolePrompts, ConsoleSurface, JsonLineTransport};
use client::{Dispatcher, StandardRules};
use tracing::error;

mod telemetry;

/// Replays a stream of server snapshots (one JSON object per line, from a
/// file argument or stdin), prompting on the console for each decision
/// and printing the resulting network actions as JSON lines on stdout.
fn main() -> io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment.
    let local_user = match std::env::var("CLIENT_USER") {
        Ok(user) => user,
        Err(_) => {
            eprintln!("CLIENT_USER must be set to the local player's name");
            std::process::exit(1);
        }
    };

    let input: Box<dyn BufRead> = match std::env::args().nth(1) {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut dispatcher = Dispatcher::new(
        ConsolePrompts::new(),
        StandardRules::default(),
        Rc::new(JsonLineTransport),
        local_user.clone(),
    );

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let snapshot: GameSnapshot = match serde_json::from_str(&line) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                error!(%err, "skipping malformed snapshot line");
                continue;
            }
        };
        let mut surface = ConsoleSurface::from_snapshot(&snapshot, &local_user);
        if let Err(err) = dispatcher.handle_snapshot(Some(&snapshot), &mut surface) {
            error!(%err, "dispatch failed for snapshot");
        }
    }

    Ok(())
}
