//! Undo/Redo System
//!
//! Bounded two-stack history of paint actions. An action is always on at
//! most one of the two stacks.

use log::{debug, warn};

use super::PaintAction;
use crate::grid::Grid;

/// Default maximum number of actions kept in history.
pub const DEFAULT_UNDO_CAPACITY: usize = 10_000;

/// Manages undo/redo over a grid.
///
/// The tracker maintains:
/// - An undo stack of applied actions (most recent at the back)
/// - A redo stack of undone actions (most recently undone at the back)
///
/// Past the capacity new actions are dropped rather than evicting old ones,
/// so `undo_count + redo_count` never exceeds the capacity.
#[derive(Debug, Clone)]
pub struct UndoTracker {
    undo_stack: Vec<PaintAction>,
    redo_stack: Vec<PaintAction>,
    capacity: usize,
}

impl Default for UndoTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoTracker {
    /// Create a tracker with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_UNDO_CAPACITY)
    }

    /// Create a tracker holding at most `capacity` actions
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            capacity,
        }
    }

    /// Record an action that has already been applied to the grid.
    ///
    /// The redo stack is always cleared, since history has diverged. If the
    /// undo stack is full the action is dropped and `false` is returned.
    pub fn add_action(&mut self, action: PaintAction) -> bool {
        if !self.redo_stack.is_empty() {
            debug!("discarding {} redoable action(s)", self.redo_stack.len());
            self.redo_stack.clear();
        }

        if self.undo_stack.len() >= self.capacity {
            warn!(
                "undo history full ({} actions), dropping '{}'",
                self.capacity,
                action.description()
            );
            return false;
        }

        self.undo_stack.push(action);
        true
    }

    /// Undo the most recent action, reversing it on `grid`.
    ///
    /// Returns the undone action, or `None` if there is nothing to undo.
    pub fn undo(&mut self, grid: &mut Grid) -> Option<PaintAction> {
        let action = self.undo_stack.pop()?;
        action.undo_apply(grid);
        self.redo_stack.push(action.clone());
        Some(action)
    }

    /// Redo the most recently undone action, re-applying it on `grid`.
    ///
    /// Returns the redone action, or `None` if there is nothing to redo.
    pub fn redo(&mut self, grid: &mut Grid) -> Option<PaintAction> {
        let action = self.redo_stack.pop()?;
        action.redo_apply(grid);
        self.undo_stack.push(action.clone());
        Some(action)
    }

    /// Check if there are actions that can be undone.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if there are actions that can be redone.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the action `undo` would reverse next.
    pub fn peek_undo(&self) -> Option<&PaintAction> {
        self.undo_stack.last()
    }

    /// Get the action `redo` would re-apply next.
    pub fn peek_redo(&self) -> Option<&PaintAction> {
        self.redo_stack.last()
    }

    /// Undoable actions, most recent first
    pub fn undo_history(&self) -> impl Iterator<Item = &PaintAction> {
        self.undo_stack.iter().rev()
    }

    /// Redoable actions, most recently undone first
    pub fn redo_history(&self) -> impl Iterator<Item = &PaintAction> {
        self.redo_stack.iter().rev()
    }

    /// Clear all undo/redo history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::DrawStyle;
    use crate::history::PaintStep;
    use crate::layers::Color;
    use crate::store::test_layers::red_step;
    use crate::store::LayerStore;

    fn draw_at(x: usize, y: usize, amount: u8) -> PaintAction {
        PaintAction::draw(vec![PaintStep::new((x, y), red_step(amount as usize, "r", amount))])
            .unwrap()
    }

    fn red_at(grid: &Grid, x: usize, y: usize) -> u8 {
        grid.cell(x, y).unwrap().get_color(Color::BLACK, 0.0, x, y).r
    }

    #[test]
    fn test_new_tracker() {
        let tracker = UndoTracker::new();
        assert_eq!(tracker.capacity(), DEFAULT_UNDO_CAPACITY);
        assert!(!tracker.can_undo());
        assert!(!tracker.can_redo());
    }

    #[test]
    fn test_empty_undo_redo_are_noops() {
        let mut tracker = UndoTracker::new();
        let mut grid = Grid::new(DrawStyle::Set, 1, 1).unwrap();
        assert!(tracker.undo(&mut grid).is_none());
        assert!(tracker.redo(&mut grid).is_none());
    }

    #[test]
    fn test_undo_then_redo_round_trip() {
        let mut tracker = UndoTracker::new();
        let mut grid = Grid::new(DrawStyle::Set, 2, 1).unwrap();

        let action = draw_at(1, 0, 30);
        action.redo_apply(&mut grid);
        tracker.add_action(action.clone());

        let undone = tracker.undo(&mut grid).unwrap();
        assert_eq!(undone, action);
        assert_eq!(red_at(&grid, 1, 0), 0);
        assert_eq!(tracker.undo_count(), 0);
        assert_eq!(tracker.redo_count(), 1);

        let redone = tracker.redo(&mut grid).unwrap();
        assert_eq!(redone, action);
        assert_eq!(red_at(&grid, 1, 0), 30);
        assert_eq!(tracker.undo_count(), 1);
        assert_eq!(tracker.redo_count(), 0);
    }

    #[test]
    fn test_lifo_order() {
        let mut tracker = UndoTracker::new();
        let mut grid = Grid::new(DrawStyle::Set, 3, 1).unwrap();
        let actions: Vec<PaintAction> = (0..3).map(|x| draw_at(x, 0, 10)).collect();
        for action in &actions {
            action.redo_apply(&mut grid);
            tracker.add_action(action.clone());
        }

        assert_eq!(tracker.undo(&mut grid).unwrap(), actions[2]);
        assert_eq!(tracker.undo(&mut grid).unwrap(), actions[1]);
        assert_eq!(tracker.redo(&mut grid).unwrap(), actions[1]);
        assert_eq!(tracker.undo(&mut grid).unwrap(), actions[1]);
        assert_eq!(red_at(&grid, 0, 0), 10);
        assert_eq!(red_at(&grid, 1, 0), 0);
    }

    #[test]
    fn test_add_clears_redo_stack() {
        let mut tracker = UndoTracker::new();
        let mut grid = Grid::new(DrawStyle::Set, 2, 1).unwrap();

        tracker.add_action(draw_at(0, 0, 1));
        tracker.undo(&mut grid);
        assert!(tracker.can_redo());

        tracker.add_action(draw_at(1, 0, 2));
        assert!(!tracker.can_redo());
        assert_eq!(tracker.redo_count(), 0);
    }

    #[test]
    fn test_capacity_drops_new_actions() {
        let mut tracker = UndoTracker::with_capacity(3);
        let actions: Vec<PaintAction> = (0..5).map(|x| draw_at(x, 0, 1)).collect();

        let recorded: Vec<bool> = actions.iter().map(|a| tracker.add_action(a.clone())).collect();
        assert_eq!(recorded, vec![true, true, true, false, false]);
        assert_eq!(tracker.undo_count(), 3);
        assert_eq!(tracker.peek_undo(), Some(&actions[2]));
    }

    #[test]
    fn test_stacks_never_share_actions() {
        let mut tracker = UndoTracker::with_capacity(4);
        let mut grid = Grid::new(DrawStyle::Additive, 4, 1).unwrap();
        for x in 0..4 {
            tracker.add_action(draw_at(x, 0, 1));
        }
        tracker.undo(&mut grid);
        tracker.undo(&mut grid);

        let undo_ids: Vec<_> = tracker.undo_history().map(|a| a.id()).collect();
        assert!(tracker.redo_history().all(|a| !undo_ids.contains(&a.id())));
        assert_eq!(tracker.undo_count() + tracker.redo_count(), 4);

        // Full history: a new action is dropped but still invalidates redo
        tracker.redo(&mut grid);
        tracker.redo(&mut grid);
        assert!(!tracker.add_action(draw_at(0, 0, 1)));
        assert_eq!(tracker.undo_count(), 4);
        assert!(!tracker.can_redo());
    }

    #[test]
    fn test_special_round_trip_on_set() {
        let mut tracker = UndoTracker::new();
        let mut grid = Grid::new(DrawStyle::Set, 1, 1).unwrap();
        let action = PaintAction::special_with(grid.special());
        tracker.add_action(action);

        tracker.undo(&mut grid);
        assert_eq!(red_at(&grid, 0, 0), 0);
        tracker.redo(&mut grid);
        assert_eq!(red_at(&grid, 0, 0), 255);
    }

    #[test]
    fn test_clear() {
        let mut tracker = UndoTracker::new();
        let mut grid = Grid::new(DrawStyle::Set, 1, 1).unwrap();
        tracker.add_action(draw_at(0, 0, 1));
        tracker.add_action(draw_at(0, 0, 2));
        tracker.undo(&mut grid);

        tracker.clear();
        assert_eq!(tracker.undo_count(), 0);
        assert_eq!(tracker.redo_count(), 0);
    }
}
