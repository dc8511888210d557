//! A board of square figures wired to undo/redo.
//!
//! The board keeps one history for adding, removing and moving figures, and
//! every figure keeps its own history for color and corner radius changes.
//! The two scopes never see each other's entries.
//!
//! A removed figure stays parked, together with its own history, only while
//! some entry on the board history can still bring it back.

mod buttons;
mod commands;
mod figure;
mod session;

use std::collections::{HashMap, HashSet};

use log::{debug, trace};

pub use buttons::UndoButtons;
pub use commands::{BoardCommand, BoardState, StyleCommand};
pub use figure::{Color, Figure, FigureId, FigureStyle, Point};
pub use session::{DragSession, SettingsSession};

use crate::{
    command_history::CommandHistory,
    config::HistoryConfig,
    error::{BoardError, BoardResult, HistoryResult},
    group::Entry,
    shared_state::SharedState,
};

#[derive(Debug)]
pub struct Board {
    state: BoardState,
    history: CommandHistory<BoardCommand>,
    style_histories: HashMap<FigureId, CommandHistory<StyleCommand>>,
    style_config: HistoryConfig,
    buttons: SharedState<UndoButtons>,
    next_id: u64,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HistoryConfig::default())
    }

    /// Uses `config` for the board history and for every figure history.
    #[must_use]
    pub fn with_config(config: HistoryConfig) -> Self {
        let history = CommandHistory::with_config(config.clone());
        Self {
            state: BoardState::default(),
            buttons: SharedState::new(UndoButtons::for_history(&history)),
            history,
            style_histories: HashMap::new(),
            style_config: config,
            next_id: 1,
        }
    }

    /// Figures on the board, bottom to top.
    #[must_use]
    pub fn figures(&self) -> &[Figure] {
        self.state.figures()
    }

    #[must_use]
    pub fn figure(&self, id: FigureId) -> Option<&Figure> {
        self.state.figure(id)
    }

    #[must_use]
    pub fn history(&self) -> &CommandHistory<BoardCommand> {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut CommandHistory<BoardCommand> {
        &mut self.history
    }

    #[must_use]
    pub fn style_history(&self, id: FigureId) -> Option<&CommandHistory<StyleCommand>> {
        self.style_histories.get(&id)
    }

    pub fn style_history_mut(&mut self, id: FigureId) -> Option<&mut CommandHistory<StyleCommand>> {
        self.style_histories.get_mut(&id)
    }

    /// Handle onto the board's undo/redo button state, refreshed after every
    /// board operation.
    #[must_use]
    pub fn buttons(&self) -> SharedState<UndoButtons> {
        self.buttons.clone()
    }

    /// Adds a figure with the default style centered on `center`.
    pub fn add_figure(&mut self, center: Point) -> FigureId {
        let id = FigureId::new(self.next_id);
        self.next_id += 1;

        self.style_histories
            .insert(id, CommandHistory::with_config(self.style_config.clone()));
        self.history.perform(
            BoardCommand::AddFigure {
                figure: Figure::new(id, center),
            },
            &mut self.state,
        );
        self.board_changed();

        debug!("Added figure {id} at {center}");
        id
    }

    /// # Errors
    ///
    /// [`BoardError::UnknownFigure`] if `id` is not on the board.
    pub fn remove_figure(&mut self, id: FigureId) -> BoardResult<()> {
        let command = BoardCommand::remove(&self.state, id).ok_or(BoardError::UnknownFigure(id))?;
        self.history.perform(command, &mut self.state);
        self.board_changed();

        debug!("Removed figure {id}");
        Ok(())
    }

    /// # Errors
    ///
    /// [`BoardError::UnknownFigure`] if `id` is not on the board.
    pub fn move_figure(&mut self, id: FigureId, to: Point) -> BoardResult<()> {
        let from = self.center_of(id)?;
        self.history
            .perform(BoardCommand::MoveFigure { id, from, to }, &mut self.state);
        self.board_changed();
        Ok(())
    }

    /// Undoes the last board change.
    ///
    /// # Errors
    ///
    /// Propagates [`HistoryError`](crate::error::HistoryError) if a group was
    /// left open on the board history.
    pub fn undo(&mut self) -> BoardResult<Option<String>> {
        let label = self.history.undo(&mut self.state)?;
        self.board_changed();
        Ok(label)
    }

    /// Redoes the last undone board change.
    ///
    /// # Errors
    ///
    /// Same as [`undo`](Self::undo).
    pub fn redo(&mut self) -> BoardResult<Option<String>> {
        let label = self.history.redo(&mut self.state)?;
        self.board_changed();
        Ok(label)
    }

    /// # Errors
    ///
    /// [`BoardError::UnknownFigure`] if `id` is not on the board.
    pub fn begin_drag(&self, id: FigureId) -> BoardResult<DragSession> {
        let origin = self.center_of(id)?;
        trace!("Grabbed figure {id} at {origin}");
        Ok(DragSession {
            figure: id,
            origin,
            current: origin,
        })
    }

    /// Moves the dragged figure without recording anything.
    ///
    /// # Errors
    ///
    /// [`BoardError::UnknownFigure`] if the figure left the board mid-drag.
    pub fn drag_to(&mut self, session: &mut DragSession, to: Point) -> BoardResult<()> {
        self.place(session.figure, to)?;
        session.current = to;
        Ok(())
    }

    /// Records the whole drag as one move. Returns `false` if the figure ended
    /// where it started, in which case nothing is recorded.
    ///
    /// # Errors
    ///
    /// [`BoardError::UnknownFigure`] if the figure left the board mid-drag.
    pub fn end_drag(&mut self, session: DragSession) -> BoardResult<bool> {
        let DragSession {
            figure,
            origin,
            current,
        } = session;

        self.place(figure, origin)?;
        if origin == current {
            trace!("Dropped figure {figure} where it started");
            return Ok(false);
        }

        self.history.perform(
            BoardCommand::MoveFigure {
                id: figure,
                from: origin,
                to: current,
            },
            &mut self.state,
        );
        self.board_changed();
        Ok(true)
    }

    /// Puts the dragged figure back where the drag started.
    ///
    /// # Errors
    ///
    /// [`BoardError::UnknownFigure`] if the figure left the board mid-drag.
    pub fn cancel_drag(&mut self, session: DragSession) -> BoardResult<()> {
        self.place(session.figure, session.origin)
    }

    /// Opens the settings panel for `id`, snapshotting its current style.
    ///
    /// # Errors
    ///
    /// [`BoardError::UnknownFigure`] if `id` is not on the board.
    pub fn open_settings(&self, id: FigureId) -> BoardResult<SettingsSession> {
        let figure = self.state.figure(id).ok_or(BoardError::UnknownFigure(id))?;
        Ok(SettingsSession {
            figure: id,
            begin: figure.style,
            dirty: false,
        })
    }

    /// # Errors
    ///
    /// [`BoardError::UnknownFigure`] if the figure is no longer on the board.
    pub fn preview_color(&mut self, session: &mut SettingsSession, color: Color) -> BoardResult<()> {
        self.style_of(session.figure)?.color = color;
        session.dirty = true;
        Ok(())
    }

    /// # Errors
    ///
    /// [`BoardError::UnknownFigure`] if the figure is no longer on the board.
    pub fn preview_corner_radius(
        &mut self,
        session: &mut SettingsSession,
        radius: f32,
    ) -> BoardResult<()> {
        self.style_of(session.figure)?.corner_radius = radius;
        session.dirty = true;
        Ok(())
    }

    /// Records the previewed changes as one entry in the figure's history and
    /// returns its label, or `None` if the style ended up unchanged.
    ///
    /// # Errors
    ///
    /// [`BoardError::UnknownFigure`] if the figure is no longer on the board,
    /// or a [`HistoryError`](crate::error::HistoryError) if a group was left
    /// open on the figure's history.
    pub fn save_settings(&mut self, session: &mut SettingsSession) -> BoardResult<Option<String>> {
        let id = session.figure;
        let (style, history) = self.style_parts(id)?;
        let begin = session.begin;
        let after = *style;

        let Some(label) = begin.change_label(&after) else {
            session.rebase(after);
            return Ok(None);
        };

        history.begin_group(label)?;
        *style = begin;
        if begin.color_differs(&after) {
            history.perform(
                StyleCommand::SetColor {
                    from: begin.color,
                    to: after.color,
                },
                &mut *style,
            );
        }
        if begin.radius_differs(&after) {
            history.perform(
                StyleCommand::SetCornerRadius {
                    from: begin.corner_radius,
                    to: after.corner_radius,
                },
                &mut *style,
            );
        }
        history.end_group()?;

        debug!("Saved \"{label}\" on figure {id}");
        session.rebase(after);
        Ok(Some(label.to_string()))
    }

    /// Discards previewed changes.
    ///
    /// # Errors
    ///
    /// [`BoardError::UnknownFigure`] if the figure is no longer on the board.
    pub fn cancel_settings(&mut self, session: SettingsSession) -> BoardResult<()> {
        *self.style_of(session.figure)? = session.begin;
        Ok(())
    }

    /// Undoes the last saved style change of the session's figure.
    ///
    /// # Errors
    ///
    /// [`BoardError::UnsavedChanges`] while previews are pending, otherwise
    /// the same as [`save_settings`](Self::save_settings).
    pub fn undo_style(&mut self, session: &mut SettingsSession) -> BoardResult<Option<String>> {
        self.step_style(session, |history, style| history.undo(style))
    }

    /// Redoes the last undone style change of the session's figure.
    ///
    /// # Errors
    ///
    /// Same as [`undo_style`](Self::undo_style).
    pub fn redo_style(&mut self, session: &mut SettingsSession) -> BoardResult<Option<String>> {
        self.step_style(session, |history, style| history.redo(style))
    }

    fn step_style<F>(&mut self, session: &mut SettingsSession, step: F) -> BoardResult<Option<String>>
    where
        F: FnOnce(
            &mut CommandHistory<StyleCommand>,
            &mut FigureStyle,
        ) -> HistoryResult<Option<String>>,
    {
        if session.dirty {
            return Err(BoardError::UnsavedChanges(session.figure));
        }

        let (style, history) = self.style_parts(session.figure)?;
        let label = step(history, &mut *style)?;
        session.rebase(*style);
        Ok(label)
    }

    fn board_changed(&mut self) {
        self.prune_unreachable();
        self.buttons.set(UndoButtons::for_history(&self.history));
    }

    /// Drops parked figures, and their histories, that no board entry refers to.
    /// Skipped while a group is open, since its members are not on a stack yet.
    fn prune_unreachable(&mut self) {
        if self.history.is_group_open() {
            return;
        }

        let mut reachable: HashSet<FigureId> =
            self.figures().iter().map(|figure| figure.id).collect();
        let entries = self
            .history
            .undo_history()
            .into_iter()
            .chain(self.history.redo_history())
            .flatten();
        for entry in entries {
            match entry {
                Entry::Single(command) => {
                    reachable.insert(command.figure_id());
                }
                Entry::Group(group) => {
                    reachable.extend(group.commands().iter().map(BoardCommand::figure_id));
                }
            }
        }

        let parked = self.state.retain_parked(|id| reachable.contains(&id));
        self.style_histories.retain(|id, _| reachable.contains(id));
        if parked > 0 {
            trace!("Dropped {parked} figures that can no longer come back");
        }
    }

    fn center_of(&self, id: FigureId) -> BoardResult<Point> {
        self.state
            .figure(id)
            .map(|figure| figure.center)
            .ok_or(BoardError::UnknownFigure(id))
    }

    fn place(&mut self, id: FigureId, center: Point) -> BoardResult<()> {
        let figure = self
            .state
            .figure_mut(id)
            .ok_or(BoardError::UnknownFigure(id))?;
        figure.center = center;
        Ok(())
    }

    fn style_of(&mut self, id: FigureId) -> BoardResult<&mut FigureStyle> {
        self.state
            .figure_mut(id)
            .map(|figure| &mut figure.style)
            .ok_or(BoardError::UnknownFigure(id))
    }

    fn style_parts(
        &mut self,
        id: FigureId,
    ) -> BoardResult<(&mut FigureStyle, &mut CommandHistory<StyleCommand>)> {
        let figure = self
            .state
            .figure_mut(id)
            .ok_or(BoardError::UnknownFigure(id))?;
        let history = self
            .style_histories
            .get_mut(&id)
            .ok_or(BoardError::UnknownFigure(id))?;
        Ok((&mut figure.style, history))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, num::NonZeroUsize, rc::Rc};

    use super::*;
    use crate::{
        error::HistoryError,
        observer::{StackChange, StackChanged},
    };

    fn board_with_figure() -> (Board, FigureId) {
        let mut board = Board::new();
        let id = board.add_figure(Point::new(50.0, 50.0));
        (board, id)
    }

    fn centers(board: &Board) -> Vec<Point> {
        board.figures().iter().map(|figure| figure.center).collect()
    }

    #[test]
    fn test_add_figure() {
        let (mut board, id) = board_with_figure();

        assert_eq!(board.figures().len(), 1);
        assert_eq!(board.figure(id).unwrap().style, FigureStyle::default());
        assert_eq!(board.history().undo_menu_title(), "Undo Add Figure");
        assert!(board.style_history(id).is_some());

        assert_eq!(board.undo(), Ok(Some("Add Figure".to_string())));
        assert!(board.figures().is_empty());
        assert!(board.figure(id).is_none());

        assert_eq!(board.redo(), Ok(Some("Add Figure".to_string())));
        assert_eq!(board.figure(id).unwrap().center, Point::new(50.0, 50.0));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut board = Board::new();
        let a = board.add_figure(Point::default());
        let b = board.add_figure(Point::default());
        assert_ne!(a, b);
    }

    #[test]
    fn test_move_figure() {
        let (mut board, id) = board_with_figure();

        board.move_figure(id, Point::new(120.0, 80.0)).unwrap();
        assert_eq!(board.history().undo_action_label(), "Move to (120,80)");
        assert_eq!(centers(&board), [Point::new(120.0, 80.0)]);

        board.undo().unwrap();
        assert_eq!(centers(&board), [Point::new(50.0, 50.0)]);
        assert_eq!(board.history().redo_menu_title(), "Redo Move to (120,80)");

        board.redo().unwrap();
        assert_eq!(centers(&board), [Point::new(120.0, 80.0)]);
    }

    #[test]
    fn test_remove_figure_restores_order() {
        let mut board = Board::new();
        let ids: Vec<_> = (0..3_i32)
            .map(|i| board.add_figure(Point::new(f64::from(i), 0.0)))
            .collect();

        board.remove_figure(ids[1]).unwrap();
        assert_eq!(board.figures().len(), 2);
        assert!(board.figure(ids[1]).is_none());

        assert_eq!(board.undo(), Ok(Some("Remove Figure".to_string())));
        let order: Vec<_> = board.figures().iter().map(|figure| figure.id).collect();
        assert_eq!(order, ids);
    }

    #[test]
    fn test_unknown_figure() {
        let (mut board, id) = board_with_figure();
        let ghost = FigureId::new(99);

        assert_eq!(board.remove_figure(ghost), Err(BoardError::UnknownFigure(ghost)));
        assert_eq!(
            board.move_figure(ghost, Point::default()),
            Err(BoardError::UnknownFigure(ghost))
        );
        assert_eq!(board.begin_drag(ghost), Err(BoardError::UnknownFigure(ghost)));
        assert_eq!(board.open_settings(ghost), Err(BoardError::UnknownFigure(ghost)));
        assert_eq!(board.history().undo_depth(), 1);

        board.remove_figure(id).unwrap();
        assert_eq!(board.open_settings(id), Err(BoardError::UnknownFigure(id)));
    }

    #[test]
    fn test_full_reversibility() {
        let mut board = Board::new();
        let a = board.add_figure(Point::new(10.0, 10.0));
        let b = board.add_figure(Point::new(20.0, 20.0));
        board.move_figure(a, Point::new(30.0, 30.0)).unwrap();
        board.remove_figure(b).unwrap();
        board.move_figure(a, Point::new(40.0, 40.0)).unwrap();

        while board.undo().unwrap().is_some() {}
        assert!(board.figures().is_empty());

        while board.redo().unwrap().is_some() {}
        assert_eq!(centers(&board), [Point::new(40.0, 40.0)]);
        assert!(board.figure(b).is_none());
    }

    #[test]
    fn test_drag_records_one_move() {
        let (mut board, id) = board_with_figure();

        let mut drag = board.begin_drag(id).unwrap();
        for step in 1..=5_i32 {
            let offset = f64::from(step) * 10.0;
            board
                .drag_to(&mut drag, Point::new(50.0 + offset, 50.0))
                .unwrap();
            assert_eq!(board.figure(id).unwrap().center, drag.current());
        }
        assert_eq!(board.history().undo_depth(), 1);

        assert_eq!(board.end_drag(drag), Ok(true));
        assert_eq!(board.history().undo_depth(), 2);
        assert_eq!(board.history().undo_action_label(), "Move to (100,50)");
        assert_eq!(centers(&board), [Point::new(100.0, 50.0)]);

        board.undo().unwrap();
        assert_eq!(centers(&board), [Point::new(50.0, 50.0)]);
    }

    #[test]
    fn test_drag_back_to_origin_records_nothing() {
        let (mut board, id) = board_with_figure();

        let mut drag = board.begin_drag(id).unwrap();
        board.drag_to(&mut drag, Point::new(70.0, 70.0)).unwrap();
        board.drag_to(&mut drag, Point::new(50.0, 50.0)).unwrap();

        assert_eq!(board.end_drag(drag), Ok(false));
        assert_eq!(board.history().undo_depth(), 1);
    }

    #[test]
    fn test_cancel_drag() {
        let (mut board, id) = board_with_figure();

        let mut drag = board.begin_drag(id).unwrap();
        assert_eq!(drag.origin(), Point::new(50.0, 50.0));
        board.drag_to(&mut drag, Point::new(90.0, 10.0)).unwrap();
        board.cancel_drag(drag).unwrap();

        assert_eq!(centers(&board), [Point::new(50.0, 50.0)]);
        assert_eq!(board.history().undo_depth(), 1);
    }

    #[test]
    fn test_save_color_and_radius() {
        let (mut board, id) = board_with_figure();
        let mut settings = board.open_settings(id).unwrap();

        board.preview_color(&mut settings, Color::Red).unwrap();
        board.preview_corner_radius(&mut settings, 10.0).unwrap();
        board.preview_corner_radius(&mut settings, 12.0).unwrap();
        assert!(settings.is_dirty());

        assert_eq!(
            board.save_settings(&mut settings),
            Ok(Some("Change Color and Radius".to_string()))
        );
        assert!(!settings.is_dirty());

        let changed = FigureStyle {
            color: Color::Red,
            corner_radius: 12.0,
        };
        assert_eq!(board.figure(id).unwrap().style, changed);

        let history = board.style_history(id).unwrap();
        assert_eq!(history.undo_depth(), 1);
        assert_eq!(history.undo_menu_title(), "Undo Change Color and Radius");

        assert_eq!(
            board.undo_style(&mut settings),
            Ok(Some("Change Color and Radius".to_string()))
        );
        assert_eq!(board.figure(id).unwrap().style, FigureStyle::default());
        assert_eq!(settings.begin_style(), FigureStyle::default());

        board.redo_style(&mut settings).unwrap();
        assert_eq!(board.figure(id).unwrap().style, changed);
    }

    #[test]
    fn test_save_single_change_labels() {
        let (mut board, id) = board_with_figure();
        let mut settings = board.open_settings(id).unwrap();

        board.preview_color(&mut settings, Color::Blue).unwrap();
        assert_eq!(
            board.save_settings(&mut settings),
            Ok(Some("Change Color".to_string()))
        );

        board.preview_corner_radius(&mut settings, 4.0).unwrap();
        assert_eq!(
            board.save_settings(&mut settings),
            Ok(Some("Change Radius".to_string()))
        );

        assert_eq!(board.style_history(id).unwrap().undo_depth(), 2);
    }

    #[test]
    fn test_save_without_changes() {
        let (mut board, id) = board_with_figure();
        let mut settings = board.open_settings(id).unwrap();

        board.preview_color(&mut settings, Color::Purple).unwrap();
        board.preview_color(&mut settings, Color::Gray).unwrap();

        assert_eq!(board.save_settings(&mut settings), Ok(None));
        assert!(!settings.is_dirty());
        assert!(!board.style_history(id).unwrap().can_undo());
    }

    #[test]
    fn test_cancel_settings() {
        let (mut board, id) = board_with_figure();
        let mut settings = board.open_settings(id).unwrap();

        board.preview_color(&mut settings, Color::Red).unwrap();
        board.preview_corner_radius(&mut settings, 20.0).unwrap();
        board.cancel_settings(settings).unwrap();

        assert_eq!(board.figure(id).unwrap().style, FigureStyle::default());
        assert!(!board.style_history(id).unwrap().can_undo());
    }

    #[test]
    fn test_style_undo_locked_while_dirty() {
        let (mut board, id) = board_with_figure();
        let mut settings = board.open_settings(id).unwrap();

        board.preview_color(&mut settings, Color::Red).unwrap();
        board.save_settings(&mut settings).unwrap();
        board.preview_color(&mut settings, Color::Blue).unwrap();

        assert_eq!(
            board.undo_style(&mut settings),
            Err(BoardError::UnsavedChanges(id))
        );
        assert_eq!(board.figure(id).unwrap().style.color, Color::Blue);
    }

    #[test]
    fn test_cancel_after_undo_keeps_undo() {
        let (mut board, id) = board_with_figure();
        let mut settings = board.open_settings(id).unwrap();

        board.preview_color(&mut settings, Color::Red).unwrap();
        board.save_settings(&mut settings).unwrap();
        board.undo_style(&mut settings).unwrap();
        board.cancel_settings(settings).unwrap();

        assert_eq!(board.figure(id).unwrap().style.color, Color::Gray);
    }

    #[test]
    fn test_scopes_are_independent() {
        let (mut board, id) = board_with_figure();
        let mut settings = board.open_settings(id).unwrap();
        board.preview_color(&mut settings, Color::Purple).unwrap();
        board.save_settings(&mut settings).unwrap();
        board.move_figure(id, Point::new(0.0, 0.0)).unwrap();

        board.undo().unwrap();
        assert_eq!(board.figure(id).unwrap().style.color, Color::Purple);
        assert_eq!(board.history().undo_depth(), 1);
        assert_eq!(board.style_history(id).unwrap().undo_depth(), 1);

        board.undo_style(&mut settings).unwrap();
        assert_eq!(centers(&board), [Point::new(50.0, 50.0)]);
        assert_eq!(board.figure(id).unwrap().style.color, Color::Gray);
    }

    #[test]
    fn test_removed_figure_keeps_style_and_history() {
        let (mut board, id) = board_with_figure();
        let mut settings = board.open_settings(id).unwrap();
        board.preview_color(&mut settings, Color::Red).unwrap();
        board.save_settings(&mut settings).unwrap();

        board.remove_figure(id).unwrap();
        assert_eq!(
            board.undo_style(&mut settings),
            Err(BoardError::UnknownFigure(id))
        );

        board.undo().unwrap();
        assert_eq!(board.figure(id).unwrap().style.color, Color::Red);
        assert_eq!(board.style_history(id).unwrap().undo_depth(), 1);

        board.redo().unwrap();
        board.undo().unwrap();
        assert_eq!(board.figure(id).unwrap().style.color, Color::Red);
    }

    #[test]
    fn test_unreachable_figures_are_dropped() {
        let mut board = Board::new();
        for _ in 0..100 {
            board.add_figure(Point::default());
            board.undo().unwrap();
        }
        assert_eq!(board.state.parked.len(), 1);
        assert_eq!(board.style_histories.len(), 1);

        let id = board.add_figure(Point::default());
        assert!(board.state.parked.is_empty());
        assert_eq!(board.style_histories.len(), 1);
        assert!(board.style_history(id).is_some());
    }

    #[test]
    fn test_removed_figure_dropped_past_history_limit() {
        let limit = NonZeroUsize::new(2).unwrap();
        let mut board = Board::with_config(HistoryConfig::default().with_history_limit(limit));
        let a = board.add_figure(Point::default());
        board.remove_figure(a).unwrap();

        board.add_figure(Point::new(1.0, 1.0));
        assert!(board.style_history(a).is_some());
        assert!(board.state.parked.contains_key(&a));

        board.add_figure(Point::new(2.0, 2.0));
        assert!(board.style_history(a).is_none());
        assert!(board.state.parked.is_empty());
        assert_eq!(board.style_histories.len(), 2);
    }

    #[test]
    fn test_buttons_follow_board_history() {
        let mut board = Board::new();
        let buttons = board.buttons();
        assert!(!buttons.get().undo_enabled);

        let id = board.add_figure(Point::default());
        board.move_figure(id, Point::new(120.0, 80.0)).unwrap();
        assert_eq!(buttons.get().undo_title, "Undo Move to (120,80)");

        board.undo().unwrap();
        let shown = buttons.get();
        assert!(shown.undo_enabled && shown.redo_enabled);
        assert_eq!(shown.undo_title, "Undo Add Figure");
        assert_eq!(shown.redo_title, "Redo Move to (120,80)");
    }

    #[test]
    fn test_open_group_on_style_history() {
        let (mut board, id) = board_with_figure();
        board
            .style_history_mut(id)
            .unwrap()
            .begin_group("Manual")
            .unwrap();

        let mut settings = board.open_settings(id).unwrap();
        board.preview_color(&mut settings, Color::Red).unwrap();

        assert_eq!(
            board.save_settings(&mut settings),
            Err(BoardError::History(HistoryError::GroupAlreadyOpen {
                open: "Manual".to_string()
            }))
        );
    }

    #[test]
    fn test_board_notifications() {
        let mut board = Board::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        board
            .history_mut()
            .subscribe(move |event: &StackChanged| sink.borrow_mut().push(event.change));

        let id = board.add_figure(Point::default());
        let drag = board.begin_drag(id).unwrap();
        board.end_drag(drag).unwrap();
        board.undo().unwrap();

        assert_eq!(*seen.borrow(), [StackChange::Performed, StackChange::Undone]);
    }
}
