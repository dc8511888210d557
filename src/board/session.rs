use super::figure::{FigureId, FigureStyle, Point};

/// A figure being dragged. Intermediate positions are applied live and only
/// the net move is recorded when the drag ends.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub(super) figure: FigureId,
    pub(super) origin: Point,
    pub(super) current: Point,
}

impl DragSession {
    #[must_use]
    pub fn figure(&self) -> FigureId {
        self.figure
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[must_use]
    pub fn current(&self) -> Point {
        self.current
    }
}

/// An open settings panel for one figure.
///
/// Holds the style as it was when the panel opened (or last saved, undone or
/// redone). Previews change the figure directly; saving records the
/// difference against this snapshot, cancelling restores it.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsSession {
    pub(super) figure: FigureId,
    pub(super) begin: FigureStyle,
    pub(super) dirty: bool,
}

impl SettingsSession {
    #[must_use]
    pub fn figure(&self) -> FigureId {
        self.figure
    }

    #[must_use]
    pub fn begin_style(&self) -> FigureStyle {
        self.begin
    }

    /// Whether there are previewed changes that have not been saved.
    /// Undo and redo are locked while this is true.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(super) fn rebase(&mut self, style: FigureStyle) {
        self.begin = style;
        self.dirty = false;
    }
}
