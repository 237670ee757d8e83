//! Paint Session
//!
//! The controller an interactive front end drives: it owns the grid, both
//! history trackers and the replay playback, and turns user intents (paint,
//! special, undo, redo, brush, mode change, replay) into recorded actions.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::config::SessionConfig;
use crate::error::{PaintError, Result};
use crate::grid::{DrawStyle, Frame, Grid};
use crate::history::{PaintAction, PaintStep, ReplayClock, ReplayTracker, UndoTracker};
use crate::layers::LayerRegistry;
use crate::store::LayerStore;

/// An in-progress replay: its own log copy, grid and clock.
#[derive(Debug)]
struct Playback {
    tracker: ReplayTracker,
    grid: Grid,
    clock: ReplayClock,
}

/// A painting session over one grid.
#[derive(Debug)]
pub struct PaintSession {
    config: SessionConfig,
    registry: Arc<LayerRegistry>,
    draw_style: DrawStyle,
    grid: Grid,
    undo: UndoTracker,
    recording: ReplayTracker,
    playback: Option<Playback>,
    timestamp: f64,
}

impl PaintSession {
    /// Create a session from a validated config
    pub fn new(config: SessionConfig, registry: Arc<LayerRegistry>) -> Result<Self> {
        config.validate()?;

        let grid = Self::fresh_grid(&config, config.draw_style)?;
        info!(
            "New {}x{} session, {} style, {} layers",
            config.grid_width,
            config.grid_height,
            config.draw_style,
            registry.len()
        );

        Ok(Self {
            draw_style: config.draw_style,
            grid,
            undo: UndoTracker::with_capacity(config.undo_capacity),
            recording: ReplayTracker::with_capacity(config.replay_capacity),
            playback: None,
            timestamp: 0.0,
            registry,
            config,
        })
    }

    fn fresh_grid(config: &SessionConfig, style: DrawStyle) -> Result<Grid> {
        let mut grid = Grid::new(style, config.grid_width, config.grid_height)?;
        grid.set_brush_size(config.brush_size);
        Ok(grid)
    }

    fn ensure_editable(&self) -> Result<()> {
        if self.playback.is_some() {
            return Err(PaintError::ReplayInProgress);
        }
        Ok(())
    }

    fn record(&mut self, action: PaintAction) {
        self.undo.add_action(action.clone());
        self.recording.add_action(action, false);
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<LayerRegistry> {
        &self.registry
    }

    pub fn draw_style(&self) -> DrawStyle {
        self.draw_style
    }

    /// The grid currently on screen (the playback grid while replaying)
    pub fn grid(&self) -> &Grid {
        match &self.playback {
            Some(playback) => &playback.grid,
            None => &self.grid,
        }
    }

    pub fn undo_tracker(&self) -> &UndoTracker {
        &self.undo
    }

    pub fn replay_log(&self) -> &ReplayTracker {
        &self.recording
    }

    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    pub fn is_replaying(&self) -> bool {
        self.playback.is_some()
    }

    /// Render the visible grid at the current timestamp
    pub fn frame(&self) -> Frame {
        self.grid().render(self.config.background, self.timestamp)
    }

    // ========================================================================
    // Editing
    // ========================================================================

    /// Paint the layer at registry position `layer` around `(px, py)`.
    ///
    /// Every cell within the brush gets an `add`; only cells that changed
    /// become steps. Returns the recorded action, or `None` if no cell
    /// changed.
    pub fn paint(&mut self, layer: usize, px: usize, py: usize) -> Result<Option<PaintAction>> {
        self.ensure_editable()?;

        let layer = self
            .registry
            .get(layer)
            .cloned()
            .ok_or_else(|| PaintError::UnknownLayer {
                key: layer.to_string(),
            })?;
        if !self.grid.contains(px, py) {
            return Err(PaintError::OutOfBounds {
                x: px,
                y: py,
                width: self.grid.width(),
                height: self.grid.height(),
            });
        }

        let mut steps = Vec::new();
        for (x, y) in self.grid.brush_cells(px, py) {
            if let Some(cell) = self.grid.cell_mut(x, y) {
                if cell.add(&layer) {
                    steps.push(PaintStep::new((x, y), layer.clone()));
                }
            }
        }

        if steps.is_empty() {
            debug!("paint of '{}' at ({}, {}) changed nothing", layer.name, px, py);
            return Ok(None);
        }

        let action = PaintAction::draw(steps)?;
        debug!("{}", action.description());
        self.record(action.clone());
        Ok(Some(action))
    }

    /// Run the special transform on the whole grid and record it
    pub fn special(&mut self) -> Result<PaintAction> {
        self.ensure_editable()?;

        let action = PaintAction::special_with(self.grid.special());
        self.record(action.clone());
        Ok(action)
    }

    /// Undo the most recent action; a performed undo is logged for replay
    pub fn undo(&mut self) -> Result<Option<PaintAction>> {
        self.ensure_editable()?;

        let undone = self.undo.undo(&mut self.grid);
        if let Some(action) = &undone {
            self.recording.add_action(action.clone(), true);
        }
        Ok(undone)
    }

    /// Redo the most recently undone action; a performed redo is logged for
    /// replay
    pub fn redo(&mut self) -> Result<Option<PaintAction>> {
        self.ensure_editable()?;

        let redone = self.undo.redo(&mut self.grid);
        if let Some(action) = &redone {
            self.recording.add_action(action.clone(), false);
        }
        Ok(redone)
    }

    pub fn increase_brush_size(&mut self) -> Result<usize> {
        self.ensure_editable()?;
        Ok(self.grid.increase_brush_size())
    }

    pub fn decrease_brush_size(&mut self) -> Result<usize> {
        self.ensure_editable()?;
        Ok(self.grid.decrease_brush_size())
    }

    /// Cycle SET -> ADD -> SEQUENCE -> SET.
    ///
    /// The grid is replaced and both histories cleared: recorded actions
    /// would not reproduce the same picture under another style.
    pub fn change_draw_mode(&mut self) -> Result<DrawStyle> {
        self.ensure_editable()?;

        let style = self.draw_style.next();
        let brush = self.grid.brush_size();
        self.grid = Self::fresh_grid(&self.config, style)?;
        self.grid.set_brush_size(brush);
        self.draw_style = style;
        self.undo.clear();
        self.recording = ReplayTracker::with_capacity(self.config.replay_capacity);

        info!("Draw style changed to {}", style);
        Ok(style)
    }

    // ========================================================================
    // Replay
    // ========================================================================

    /// Start replaying everything recorded so far on a fresh grid.
    ///
    /// Editing is refused until the replay finishes. The session keeps its
    /// own recording, so later edits extend the same log. When the replay
    /// ends its grid becomes the live canvas, so edits the log dropped at
    /// capacity are lost from the picture.
    pub fn start_replay(&mut self) -> Result<()> {
        self.ensure_editable()?;

        let mut tracker = self.recording.clone();
        tracker.start_replay();
        let grid = Self::fresh_grid(&self.config, self.draw_style)?;

        info!("Replaying {} recorded edits", tracker.len());
        self.playback = Some(Playback {
            tracker,
            grid,
            clock: ReplayClock::new(self.config.replay_interval),
        });
        Ok(())
    }

    /// Advance time by `delta`, playing any replay steps that became due.
    ///
    /// Returns the number of steps played.
    pub fn update(&mut self, delta: f64) -> usize {
        if delta.is_finite() && delta > 0.0 {
            self.timestamp += delta;
        }

        let Some(playback) = self.playback.as_mut() else {
            return 0;
        };

        let mut played = 0;
        for _ in 0..playback.clock.advance(delta) {
            if playback.tracker.play_next_action(&mut playback.grid) {
                self.end_replay();
                break;
            }
            played += 1;
        }
        played
    }

    /// Play every remaining replay step now. Returns the number played.
    pub fn finish_replay(&mut self) -> usize {
        let Some(playback) = self.playback.as_mut() else {
            return 0;
        };

        let mut played = 0;
        while !playback.tracker.play_next_action(&mut playback.grid) {
            played += 1;
        }
        self.end_replay();
        played
    }

    fn end_replay(&mut self) {
        if let Some(playback) = self.playback.take() {
            if playback.tracker.dropped() > 0 {
                warn!(
                    "replay log dropped {} edit(s) at capacity; the replayed canvas replaces the live one and omits them",
                    playback.tracker.dropped()
                );
            }
            let mut grid = playback.grid;
            grid.set_brush_size(self.grid.brush_size());
            self.grid = grid;
            info!("Replay finished");
        }
    }
}
