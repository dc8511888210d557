use std::{borrow::Cow, collections::HashMap};

use log::warn;

use super::figure::{Color, Figure, FigureId, FigureStyle, Point};
use crate::traits::command::Command;

/// Figures on the board plus the ones taken off it.
///
/// Removed figures are parked rather than dropped so that undoing the removal
/// brings back the figure as it was last seen, not as it was first added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    pub(super) visible: Vec<Figure>,
    pub(super) parked: HashMap<FigureId, Figure>,
}

impl BoardState {
    /// Figures on the board, bottom to top.
    #[must_use]
    pub fn figures(&self) -> &[Figure] {
        &self.visible
    }

    #[must_use]
    pub fn figure(&self, id: FigureId) -> Option<&Figure> {
        self.visible.iter().find(|figure| figure.id == id)
    }

    pub(super) fn figure_mut(&mut self, id: FigureId) -> Option<&mut Figure> {
        self.visible.iter_mut().find(|figure| figure.id == id)
    }

    fn position(&self, id: FigureId) -> Option<usize> {
        self.visible.iter().position(|figure| figure.id == id)
    }

    fn park(&mut self, id: FigureId) {
        match self.position(id) {
            Some(index) => {
                let figure = self.visible.remove(index);
                self.parked.insert(id, figure);
            }
            None => warn!("Figure {id} is not on the board"),
        }
    }

    fn unpark(&mut self, fallback: &Figure, index: usize) {
        let figure = self
            .parked
            .remove(&fallback.id)
            .unwrap_or_else(|| fallback.clone());
        let index = index.min(self.visible.len());
        self.visible.insert(index, figure);
    }

    /// Drops parked figures for which `keep` returns `false` and returns how
    /// many went.
    pub(super) fn retain_parked(&mut self, mut keep: impl FnMut(FigureId) -> bool) -> usize {
        let before = self.parked.len();
        self.parked.retain(|&id, _| keep(id));
        before - self.parked.len()
    }

    fn set_center(&mut self, id: FigureId, center: Point) {
        match self.figure_mut(id) {
            Some(figure) => figure.center = center,
            None => warn!("Cannot move figure {id}: not on the board"),
        }
    }
}

/// Mutations recorded in a board's history.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardCommand {
    /// Puts `figure` on top of the board.
    AddFigure { figure: Figure },
    /// Takes a figure off the board; undo puts it back at `index`.
    RemoveFigure { figure: Figure, index: usize },
    MoveFigure { id: FigureId, from: Point, to: Point },
}

impl BoardCommand {
    pub(super) fn remove(state: &BoardState, id: FigureId) -> Option<Self> {
        let index = state.position(id)?;
        Some(Self::RemoveFigure {
            figure: state.visible[index].clone(),
            index,
        })
    }

    #[must_use]
    pub fn figure_id(&self) -> FigureId {
        match self {
            Self::AddFigure { figure } | Self::RemoveFigure { figure, .. } => figure.id,
            Self::MoveFigure { id, .. } => *id,
        }
    }
}

impl Command for BoardCommand {
    type Context = BoardState;

    fn execute(&self, ctx: &mut BoardState) {
        match self {
            Self::AddFigure { figure } => {
                let top = ctx.visible.len();
                ctx.unpark(figure, top);
            }
            Self::RemoveFigure { figure, .. } => ctx.park(figure.id),
            Self::MoveFigure { id, to, .. } => ctx.set_center(*id, *to),
        }
    }

    fn undo(&self, ctx: &mut BoardState) {
        match self {
            Self::AddFigure { figure } => ctx.park(figure.id),
            Self::RemoveFigure { figure, index } => ctx.unpark(figure, *index),
            Self::MoveFigure { id, from, .. } => ctx.set_center(*id, *from),
        }
    }

    fn description(&self) -> Cow<'_, str> {
        match self {
            Self::AddFigure { .. } => Cow::Borrowed("Add Figure"),
            Self::RemoveFigure { .. } => Cow::Borrowed("Remove Figure"),
            Self::MoveFigure { to, .. } => Cow::Owned(format!("Move to {to}")),
        }
    }
}

/// Mutations recorded in a figure's own history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleCommand {
    SetColor { from: Color, to: Color },
    SetCornerRadius { from: f32, to: f32 },
}

impl Command for StyleCommand {
    type Context = FigureStyle;

    fn execute(&self, ctx: &mut FigureStyle) {
        match *self {
            Self::SetColor { to, .. } => ctx.color = to,
            Self::SetCornerRadius { to, .. } => ctx.corner_radius = to,
        }
    }

    fn undo(&self, ctx: &mut FigureStyle) {
        match *self {
            Self::SetColor { from, .. } => ctx.color = from,
            Self::SetCornerRadius { from, .. } => ctx.corner_radius = from,
        }
    }

    fn description(&self) -> Cow<'_, str> {
        match self {
            Self::SetColor { .. } => Cow::Borrowed("Change Color"),
            Self::SetCornerRadius { .. } => Cow::Borrowed("Change Radius"),
        }
    }
}
