//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use log::{debug, info};

use super::script::{parse_script, ScriptCommand, ScriptLine};
use super::{OutputFormat, SessionArgs};
use crate::history::PaintAction;
use crate::layers::LayerRegistry;
use crate::session::PaintSession;

/// List the builtin layers.
pub fn list_layers() -> anyhow::Result<()> {
    let registry = LayerRegistry::builtin();

    println!("Available layers:");
    println!("{:-<48}", "");
    for (position, layer) in registry.iter().enumerate() {
        let background = layer
            .background
            .map(|c| c.to_hex())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>3}  {:<10} {:<10} index {:<3} {}",
            position, layer.id, layer.name, layer.index, background
        );
    }

    Ok(())
}

/// Run every script line against `session`.
///
/// Failures are reported with the line they came from.
pub fn execute(session: &mut PaintSession, lines: &[ScriptLine]) -> anyhow::Result<()> {
    for ScriptLine { line, command } in lines {
        apply(session, command).with_context(|| format!("line {}: {:?}", line, command))?;
    }
    Ok(())
}

fn apply(session: &mut PaintSession, command: &ScriptCommand) -> anyhow::Result<()> {
    match command {
        ScriptCommand::Paint { layer, x, y } => {
            let position = session.registry().position_of(layer)?;
            if session.paint(position, *x, *y)?.is_none() {
                debug!("paint {} at ({}, {}) left the canvas unchanged", layer, x, y);
            }
        }
        ScriptCommand::Special => {
            session.special()?;
        }
        ScriptCommand::Undo => {
            if session.undo()?.is_none() {
                debug!("nothing to undo");
            }
        }
        ScriptCommand::Redo => {
            if session.redo()?.is_none() {
                debug!("nothing to redo");
            }
        }
        ScriptCommand::BrushUp => {
            session.increase_brush_size()?;
        }
        ScriptCommand::BrushDown => {
            session.decrease_brush_size()?;
        }
        ScriptCommand::Style => {
            session.change_draw_mode()?;
        }
        ScriptCommand::Tick(seconds) => {
            session.update(*seconds);
        }
    }
    Ok(())
}

fn load_session(script: &Path, args: &SessionArgs) -> anyhow::Result<PaintSession> {
    let source = fs::read_to_string(script)
        .with_context(|| format!("Failed to read script: {}", script.display()))?;
    let lines = parse_script(&source)
        .with_context(|| format!("Failed to parse script: {}", script.display()))?;

    let config = args.to_config().context("Invalid session settings")?;
    let mut session = PaintSession::new(config, LayerRegistry::builtin().shared())?;

    info!("Running {} command(s) from {}", lines.len(), script.display());
    execute(&mut session, &lines)
        .with_context(|| format!("Script failed: {}", script.display()))?;

    Ok(session)
}

/// Run a script and print the final canvas.
pub fn run(
    script: &Path,
    args: &SessionArgs,
    format: OutputFormat,
    replay: bool,
) -> anyhow::Result<()> {
    let mut session = load_session(script, args)?;

    let frame = session.frame();
    let digest = frame.digest();

    let replay_matches = if replay {
        session.start_replay()?;
        let played = session.finish_replay();
        let replayed = session.frame().digest();
        info!("Replayed {} step(s)", played);
        Some(replayed == digest)
    } else {
        None
    };

    match format {
        OutputFormat::Text => {
            println!("{}", frame.to_text());
            println!("{:-<60}", "");
            println!(
                "Style: {} | Size: {}x{} | Digest: {}",
                session.draw_style(),
                frame.width,
                frame.height,
                digest
            );
            if let Some(matches) = replay_matches {
                println!(
                    "Replay: {}",
                    if matches { "digest matches" } else { "digest MISMATCH" }
                );
            }
        }
        OutputFormat::Json => {
            let report = serde_json::json!({
                "style": session.draw_style(),
                "digest": digest,
                "frame": frame,
                "replay_matches": replay_matches,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if replay_matches == Some(false) {
        bail!("replayed canvas differs from the painted canvas");
    }

    Ok(())
}

fn print_action(marker: &str, action: &PaintAction) {
    println!(
        "{}{}: {} ({})",
        marker,
        action.id(),
        action.description(),
        action.created_at().format("%Y-%m-%d %H:%M:%S%.3f")
    );
}

/// Run a script and show its undo/redo history.
pub fn show_history(script: &Path, args: &SessionArgs) -> anyhow::Result<()> {
    let session = load_session(script, args)?;
    let tracker = session.undo_tracker();

    if !tracker.can_undo() && !tracker.can_redo() {
        println!("No actions in history.");
        return Ok(());
    }

    println!("Action History (most recent first):");
    println!("{:-<60}", "");

    for (i, action) in tracker.undo_history().enumerate() {
        let marker = if i == 0 { ">>> " } else { "    " };
        print_action(marker, action);
    }

    if tracker.can_redo() {
        println!("Redoable:");
        for action in tracker.redo_history() {
            print_action("    ", action);
        }
    }

    println!("{:-<60}", "");
    println!(
        "Undo stack: {} | Redo stack: {} | Replay log: {}",
        tracker.undo_count(),
        tracker.redo_count(),
        session.replay_log().len()
    );

    Ok(())
}
