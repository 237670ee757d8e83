//! Paint actions: the unit of undo, redo and replay.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::warn;
use uuid::Uuid;

use crate::error::{PaintError, Result};
use crate::grid::Grid;
use crate::layers::LayerRef;
use crate::store::{CellStore, LayerStore};

/// One cell mutation: `layer` applied at `position`.
#[derive(Debug, Clone)]
pub struct PaintStep {
    pub position: (usize, usize),
    pub layer: LayerRef,
}

impl PaintStep {
    pub fn new(position: (usize, usize), layer: LayerRef) -> Self {
        Self { position, layer }
    }
}

impl PartialEq for PaintStep {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.layer.same_layer(&other.layer)
    }
}

/// How to reverse a whole-grid special.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecialUndo {
    /// Special is its own inverse for this style: run it again
    Reapply,
    /// Put back the layers the special discarded
    Restore(Arc<[PaintStep]>),
}

/// An immutable record of one atomic edit.
///
/// Either a draw (a non-empty batch of steps) or a special (no steps).
/// Clones share the step list.
#[derive(Debug, Clone)]
pub struct PaintAction {
    id: Uuid,
    created_at: DateTime<Utc>,
    steps: Arc<[PaintStep]>,
    special: Option<SpecialUndo>,
}

impl PaintAction {
    /// Create a draw action
    ///
    /// # Errors
    /// Returns `EmptyDrawAction` if `steps` is empty.
    pub fn draw(steps: Vec<PaintStep>) -> Result<Self> {
        if steps.is_empty() {
            return Err(PaintError::EmptyDrawAction);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            steps: steps.into(),
            special: None,
        })
    }

    /// Create a special action undone by running special again
    pub fn special() -> Self {
        Self::special_with(SpecialUndo::Reapply)
    }

    /// Create a special action from the outcome of `Grid::special`
    pub fn special_with(undo: SpecialUndo) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            steps: Arc::from(Vec::new()),
            special: Some(undo),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn steps(&self) -> &[PaintStep] {
        &self.steps
    }

    pub fn is_special(&self) -> bool {
        self.special.is_some()
    }

    /// How a special action is reversed; `None` for draws
    pub fn special_undo(&self) -> Option<&SpecialUndo> {
        self.special.as_ref()
    }

    /// Human-readable summary for history listings
    pub fn description(&self) -> String {
        if self.is_special() {
            return "Special".to_string();
        }

        let first = &self.steps[0].layer;
        if self.steps.iter().all(|s| s.layer.same_layer(first)) {
            format!("Paint {} with {} cell(s)", first.name, self.steps.len())
        } else {
            format!("Paint {} cell(s)", self.steps.len())
        }
    }

    /// Reverse this action on `grid`
    ///
    /// Draws erase each step's layer in recorded order. Specials either run
    /// the sweep again or restore what it discarded.
    pub fn undo_apply(&self, grid: &mut Grid) {
        match &self.special {
            None => Self::apply_steps(grid, &self.steps, |cell, step| {
                cell.erase(&step.layer);
            }),
            Some(SpecialUndo::Reapply) => {
                grid.special();
            }
            Some(SpecialUndo::Restore(removed)) => Self::apply_steps(grid, removed, |cell, step| {
                cell.add(&step.layer);
            }),
        }
    }

    /// Apply this action to `grid` again
    pub fn redo_apply(&self, grid: &mut Grid) {
        match &self.special {
            None => Self::apply_steps(grid, &self.steps, |cell, step| {
                cell.add(&step.layer);
            }),
            Some(_) => {
                grid.special();
            }
        }
    }

    fn apply_steps<F>(grid: &mut Grid, steps: &[PaintStep], mut f: F)
    where
        F: FnMut(&mut CellStore, &PaintStep),
    {
        for step in steps {
            let (x, y) = step.position;
            match grid.cell_mut(x, y) {
                Some(cell) => f(cell, step),
                None => warn!(
                    "skipping step at ({}, {}) outside {}x{} grid",
                    x,
                    y,
                    grid.width(),
                    grid.height()
                ),
            }
        }
    }
}

impl PartialEq for PaintAction {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::DrawStyle;
    use crate::layers::Color;
    use crate::store::test_layers::{digit, red_step};

    fn color_at(grid: &Grid, x: usize, y: usize) -> Color {
        grid.cell(x, y).unwrap().get_color(Color::BLACK, 0.0, x, y)
    }

    #[test]
    fn test_draw_requires_steps() {
        assert!(matches!(
            PaintAction::draw(Vec::new()),
            Err(PaintError::EmptyDrawAction)
        ));
    }

    #[test]
    fn test_kinds() {
        let draw = PaintAction::draw(vec![PaintStep::new((0, 0), red_step(0, "a", 1))]).unwrap();
        assert!(!draw.is_special());
        assert_eq!(draw.steps().len(), 1);
        assert!(draw.special_undo().is_none());

        let special = PaintAction::special();
        assert!(special.is_special());
        assert!(special.steps().is_empty());
        assert_eq!(special.special_undo(), Some(&SpecialUndo::Reapply));
    }

    #[test]
    fn test_description() {
        let a = red_step(0, "lighten", 1);
        let b = red_step(1, "darken", 1);
        let single = PaintAction::draw(vec![
            PaintStep::new((0, 0), a.clone()),
            PaintStep::new((1, 0), a.clone()),
        ])
        .unwrap();
        assert_eq!(single.description(), "Paint lighten with 2 cell(s)");

        let mixed = PaintAction::draw(vec![
            PaintStep::new((0, 0), a),
            PaintStep::new((1, 0), b),
        ])
        .unwrap();
        assert_eq!(mixed.description(), "Paint 2 cell(s)");
        assert_eq!(PaintAction::special().description(), "Special");
    }

    #[test]
    fn test_draw_redo_then_undo() {
        let mut grid = Grid::new(DrawStyle::Set, 2, 2).unwrap();
        let layer = red_step(0, "a", 50);
        let action = PaintAction::draw(vec![
            PaintStep::new((0, 0), layer.clone()),
            PaintStep::new((1, 1), layer),
        ])
        .unwrap();

        action.redo_apply(&mut grid);
        assert_eq!(color_at(&grid, 0, 0), Color::rgb(50, 0, 0));
        assert_eq!(color_at(&grid, 1, 1), Color::rgb(50, 0, 0));
        assert_eq!(color_at(&grid, 1, 0), Color::BLACK);

        action.undo_apply(&mut grid);
        assert_eq!(color_at(&grid, 0, 0), Color::BLACK);
        assert_eq!(color_at(&grid, 1, 1), Color::BLACK);

        // Already reverted cells are a safe no-op
        action.undo_apply(&mut grid);
        assert!(grid.cell(0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_out_of_bounds_step_skipped() {
        let mut grid = Grid::new(DrawStyle::Set, 1, 1).unwrap();
        let layer = red_step(0, "a", 5);
        let action = PaintAction::draw(vec![
            PaintStep::new((3, 3), layer.clone()),
            PaintStep::new((0, 0), layer),
        ])
        .unwrap();

        action.redo_apply(&mut grid);
        assert_eq!(color_at(&grid, 0, 0), Color::rgb(5, 0, 0));
    }

    #[test]
    fn test_plain_special_reapplies() {
        let mut grid = Grid::new(DrawStyle::Set, 1, 1).unwrap();
        let action = PaintAction::special();

        action.redo_apply(&mut grid);
        assert_eq!(color_at(&grid, 0, 0), Color::WHITE);
        action.undo_apply(&mut grid);
        assert_eq!(color_at(&grid, 0, 0), Color::BLACK);
    }

    #[test]
    fn test_sequence_special_restores_exactly() {
        let mut grid = Grid::new(DrawStyle::Sequence, 1, 1).unwrap();
        {
            let cell = grid.cell_mut(0, 0).unwrap();
            cell.add(&digit(1, "a"));
            cell.add(&digit(2, "b"));
            cell.add(&digit(3, "c"));
        }
        let before = color_at(&grid, 0, 0);

        let action = PaintAction::special_with(grid.special());
        assert_eq!(grid.cell(0, 0).unwrap().len(), 2);

        action.undo_apply(&mut grid);
        assert_eq!(grid.cell(0, 0).unwrap().len(), 3);
        assert_eq!(color_at(&grid, 0, 0), before);

        // Redo removes the same median again
        action.redo_apply(&mut grid);
        let names: Vec<String> = grid
            .cell(0, 0)
            .unwrap()
            .layers()
            .iter()
            .map(|l| l.name.clone())
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }
}
