//! CanvasInk replay tool.
//!
//! Feeds a JSON-lines script through one engine and prints the final snapshot.
//!
//! ```text
//! # comment
//! { "type": "startStroke", "id": "s1", "x": 0, "y": 0, "size": 2, "color": "#000" }
//! { "type": "pointerMove", "pointerId": 1, "x": 4, "y": 4 }
//! ```
//! Objects whose `type` starts with `pointer` go to the pointer-event path,
//! everything else is executed as a command.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use canvasink_core::{Command, Engine, EngineConfig, PointerEvent};
use clap::Parser;
use serde_json::Value;

/// Replay canvas commands and print the resulting state
#[derive(Parser, Debug)]
#[command(name = "canvasink-replay")]
#[command(version, about, long_about = None)]
struct Args {
    /// Canvas width (negative values clamp to 0)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    width: i32,

    /// Canvas height (negative values clamp to 0)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    height: i32,

    /// Document id reported in the snapshot
    #[arg(long)]
    document_id: Option<String>,

    /// Document name reported in the snapshot
    #[arg(long)]
    document_name: Option<String>,

    /// Pretty-print the snapshot
    #[arg(long)]
    pretty: bool,

    /// Script to replay (stdin if omitted)
    #[arg(value_name = "FILE")]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = EngineConfig::default();
    if let Some(id) = args.document_id {
        config.document_id = id;
    }
    if let Some(name) = args.document_name {
        config.document_name = name;
    }
    let mut engine = Engine::from_config(config);
    engine.resize(args.width, args.height);

    let reader: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let applied = replay(&mut engine, reader)?;
    log::info!("replayed {applied} entries");

    let snapshot = engine.tick();
    let json = if args.pretty {
        snapshot.to_json_pretty()
    } else {
        snapshot.to_json()
    }
    .context("encoding snapshot")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

/// Apply every entry of `reader` to `engine`, returning how many were applied.
fn replay(engine: &mut Engine, reader: impl BufRead) -> Result<usize> {
    let mut applied = 0;
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("reading line {line_no}"))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let value: Value =
            serde_json::from_str(trimmed).with_context(|| format!("line {line_no}: invalid JSON"))?;
        let is_pointer = value
            .get("type")
            .and_then(Value::as_str)
            .is_some_and(|kind| kind.starts_with("pointer"));

        if is_pointer {
            let event: PointerEvent = serde_json::from_value(value)
                .with_context(|| format!("line {line_no}: malformed pointer event"))?;
            engine.pointer_event(event);
        } else {
            let command: Command = serde_json::from_value(value)
                .with_context(|| format!("line {line_no}: malformed command"))?;
            log::debug!("line {line_no}: {}", command.kind());
            engine.execute(command);
        }
        applied += 1;
    }
    Ok(applied)
}
