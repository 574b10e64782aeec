//! Line-oriented console front end.
//!
//! Reads one command per stdin line and renders every published snapshot to
//! stdout, as text or as JSON.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use unscramble_shared::{PuzzleCommand, PuzzleSnapshot};

use crate::infrastructure::settings::OutputFormat;
use crate::use_cases::PuzzleHandle;

pub const HELP: &str = "\
Commands:
  tap <letter>            move a tile to the first empty slot
  place <letter> <slot>   drop a tile onto slot 1..n
  submit                  check a full board
  shuffle                 re-scramble (or retry when no words were found)
  hint                    show the next definition
  topic [name]            switch topic (no name for any word)
  help                    show this text
  quit                    leave";

/// Drive `handle` from stdin until EOF or `quit`.
pub async fn run_console(handle: PuzzleHandle, format: OutputFormat) -> anyhow::Result<()> {
    let mut snapshots = handle.subscribe();
    let renderer = tokio::spawn(async move {
        loop {
            let snapshot = snapshots.borrow_and_update().clone();
            match render(&snapshot, format) {
                Ok(output) => println!("{}", output),
                Err(e) => tracing::error!(error = %e, "Failed to render snapshot"),
            }
            if snapshots.changed().await.is_err() {
                break;
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" => break,
            "help" | "?" => {
                println!("{}", HELP);
                continue;
            }
            _ => {}
        }

        match line.parse::<PuzzleCommand>() {
            Ok(command) => handle.send(command).await?,
            Err(e) => eprintln!("{} (type 'help' for commands)", e),
        }
    }

    renderer.abort();
    Ok(())
}

/// Render a snapshot in the configured format.
pub fn render(snapshot: &PuzzleSnapshot, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(snapshot)),
        OutputFormat::Json => {
            serde_json::to_string(snapshot).context("serializing snapshot")
        }
    }
}

pub fn render_text(snapshot: &PuzzleSnapshot) -> String {
    let topic = snapshot.topic.as_deref().unwrap_or("any");
    let mut out = format!(
        "[{}] word {}/{} | solved {}",
        topic, snapshot.words_served, snapshot.max_words_per_topic, snapshot.success_count
    );

    if !snapshot.slots.is_empty() {
        let tiles: Vec<String> = snapshot.tiles.iter().map(char::to_string).collect();
        let slots: Vec<String> = snapshot
            .slots
            .iter()
            .map(|slot| slot.map_or_else(|| "_".to_string(), |c| c.to_string()))
            .collect();
        out.push_str(&format!("\nTiles: {}", tiles.join(" ")));
        out.push_str(&format!("\nSlots: {}", slots.join(" ")));
    }

    out.push_str(&format!("\n{}", snapshot.hint));
    if snapshot.hint_available {
        out.push_str(" (more: hint)");
    }
    if !snapshot.message.is_empty() {
        out.push_str(&format!("\n{}", snapshot.message));
    }
    out
}
