use crate::chess::{Color, Fen, Move, Piece, Promotion, Rules, Square};
use crate::net::{Channel, Handler};
use crate::view::{Tree, Viewer};
use derive_more::{Display, Error};
use tracing::{instrument, warn};

/// The payload of a drag gesture in flight.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Drag {
    pub whence: Square,
    pub piece: Piece,
}

/// The reason why a drag gesture was refused.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum DragError {
    #[display(fmt = "there is no piece on {}", _0)]
    Vacant(#[error(not(source))] Square),

    #[display(fmt = "the piece on {} may not be dragged", _0)]
    Undraggable(#[error(not(source))] Square),
}

/// An interactive chessboard.
///
/// Gestures are turned into [`Move`]s, validated by [`Rules`] and,
/// if legal, submitted through a [`Channel`].
#[derive(Debug)]
pub struct BoardView<R, C> {
    rules: R,
    channel: C,
    viewer: Viewer,
    drag: Option<Drag>,
    tree: Tree,
}

impl<R: Rules, C: Channel> BoardView<R, C> {
    /// Constructs a [`BoardView`] for a spectator and renders it.
    pub fn new(rules: R, channel: C) -> Self {
        let viewer = Viewer::default();
        let tree = Tree::new(&rules.placement(), viewer);

        BoardView {
            rules,
            channel,
            viewer,
            drag: None,
            tree,
        }
    }

    /// The current [`Viewer`].
    #[inline]
    pub fn viewer(&self) -> Viewer {
        self.viewer
    }

    /// The drag gesture in flight, if any.
    #[inline]
    pub fn drag(&self) -> Option<Drag> {
        self.drag
    }

    /// The current render [`Tree`].
    #[inline]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The underlying [`Rules`].
    #[inline]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Rebuilds the render [`Tree`] from scratch.
    #[instrument(level = "trace", skip(self))]
    pub fn render(&mut self) {
        self.tree = Tree::new(&self.rules.placement(), self.viewer);
    }

    /// Picks up the piece on a [`Square`].
    #[instrument(level = "debug", skip(self), err)]
    pub fn on_drag_start(&mut self, whence: Square) -> Result<Piece, DragError> {
        let piece = match self.tree.cell(whence).figure {
            None => return Err(DragError::Vacant(whence)),
            Some(f) if !f.draggable => return Err(DragError::Undraggable(whence)),
            Some(f) => f.piece,
        };

        // A gesture never outlives the next one.
        self.on_drag_end();

        if let Some(f) = self.tree.cell_mut(whence).figure.as_mut() {
            f.dragging = true;
        }

        self.drag = Some(Drag { whence, piece });
        Ok(piece)
    }

    /// Ends the drag gesture in flight, whether or not it was dropped.
    #[instrument(level = "debug", skip(self))]
    pub fn on_drag_end(&mut self) {
        if let Some(Drag { whence, .. }) = self.drag.take() {
            if let Some(f) = self.tree.cell_mut(whence).figure.as_mut() {
                f.dragging = false;
            }
        }
    }

    /// Drops the piece in flight on a [`Square`].
    ///
    /// Returns the [`Move`] submitted if it was accepted.
    #[instrument(level = "debug", skip(self), ret)]
    pub fn on_drop(&mut self, whither: Square) -> Option<Move> {
        let Drag { whence, .. } = self.drag?;
        let m = Move(whence, whither, Promotion::Queen);

        match self.rules.play(m) {
            Ok(()) => {
                self.render();
                self.channel.submit(m);
                Some(m)
            }

            Err(e) => {
                warn!(%m, "{}", e);
                None
            }
        }
    }
}

impl<R: Rules, C: Channel> Handler for BoardView<R, C> {
    #[instrument(level = "debug", skip(self))]
    fn on_role_assigned(&mut self, side: Color) {
        self.viewer = Viewer::Player(side);
        self.render();
    }

    #[instrument(level = "debug", skip(self))]
    fn on_spectator_assigned(&mut self) {
        self.viewer = Viewer::Spectator;
        self.render();
    }

    #[instrument(level = "debug", skip(self))]
    fn on_snapshot(&mut self, fen: Fen) {
        match self.rules.load(fen) {
            Ok(()) => self.render(),
            Err(e) => warn!("ignored board state, {}", e),
        }
    }

    #[instrument(level = "debug", skip(self))]
    fn on_remote_move(&mut self, m: Move) {
        match self.rules.play(m) {
            Ok(()) => self.render(),
            Err(e) => warn!(%m, "ignored remote move, {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{IllegalMove, IllegalPosition, MockRules, Placement, Position, Role};
    use crate::net::MockChannel;
    use mockall::predicate::eq;
    use test_strategy::proptest;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn rules(p: Placement) -> MockRules {
        let mut rules = MockRules::new();
        rules.expect_placement().return_const(p);
        rules
    }

    fn start() -> Placement {
        Position::default().placement()
    }

    #[proptest]
    fn board_view_starts_as_a_spectator(p: Placement) {
        let view = BoardView::new(rules(p), MockChannel::new());
        assert_eq!(view.viewer(), Viewer::Spectator);
        assert_eq!(view.drag(), None);
        assert_eq!(view.tree(), &Tree::new(&p, Viewer::Spectator));
    }

    #[proptest]
    fn render_is_deterministic(p: Placement, side: Color) {
        let mut view = BoardView::new(rules(p), MockChannel::new());
        view.on_role_assigned(side);
        let tree = view.tree().clone();
        view.render();
        assert_eq!(view.tree(), &tree);
    }

    #[proptest]
    fn role_assignment_changes_the_viewer(p: Placement, side: Color) {
        let mut view = BoardView::new(rules(p), MockChannel::new());

        view.on_role_assigned(side);
        assert_eq!(view.viewer(), Viewer::Player(side));
        assert_eq!(view.tree(), &Tree::new(&p, Viewer::Player(side)));

        view.on_spectator_assigned();
        assert_eq!(view.viewer(), Viewer::Spectator);
        assert_eq!(view.tree(), &Tree::new(&p, Viewer::Spectator));
    }

    #[proptest]
    fn dragging_from_a_vacant_square_fails(side: Color) {
        let mut view = BoardView::new(rules(start()), MockChannel::new());
        view.on_role_assigned(side);
        assert_eq!(view.on_drag_start(sq("e4")), Err(DragError::Vacant(sq("e4"))));
        assert_eq!(view.drag(), None);
    }

    #[test]
    fn spectators_cannot_drag() {
        let mut view = BoardView::new(rules(start()), MockChannel::new());
        assert_eq!(view.on_drag_start(sq("e2")), Err(DragError::Undraggable(sq("e2"))));
        assert_eq!(view.drag(), None);
    }

    #[test]
    fn players_cannot_drag_opponent_pieces() {
        let mut view = BoardView::new(rules(start()), MockChannel::new());
        view.on_role_assigned(Color::White);
        assert_eq!(view.on_drag_start(sq("e7")), Err(DragError::Undraggable(sq("e7"))));
        assert_eq!(view.drag(), None);
    }

    #[test]
    fn drag_start_records_the_payload_and_highlights_the_figure() {
        let mut view = BoardView::new(rules(start()), MockChannel::new());
        view.on_role_assigned(Color::Black);

        let piece = Piece(Color::Black, Role::Knight);
        assert_eq!(view.on_drag_start(sq("g8")), Ok(piece));
        assert_eq!(view.drag(), Some(Drag { whence: sq("g8"), piece }));
        assert_eq!(view.tree().cell(sq("g8")).figure.map(|f| f.dragging), Some(true));
    }

    #[test]
    fn restarting_a_drag_releases_the_previous_figure() {
        let mut view = BoardView::new(rules(start()), MockChannel::new());
        view.on_role_assigned(Color::White);
        view.on_drag_start(sq("e2")).unwrap();
        view.on_drag_start(sq("d2")).unwrap();

        assert_eq!(view.tree().cell(sq("e2")).figure.map(|f| f.dragging), Some(false));
        assert_eq!(view.tree().cell(sq("d2")).figure.map(|f| f.dragging), Some(true));
        assert_eq!(view.drag().map(|d| d.whence), Some(sq("d2")));

        view.on_drag_end();
        assert_eq!(view.drag(), None);
        assert_eq!(view.tree(), &Tree::new(&start(), Viewer::Player(Color::White)));
    }

    #[test]
    fn refused_drag_keeps_the_gesture_in_flight() {
        let mut view = BoardView::new(rules(start()), MockChannel::new());
        view.on_role_assigned(Color::White);
        view.on_drag_start(sq("e2")).unwrap();

        assert_eq!(view.on_drag_start(sq("e4")), Err(DragError::Vacant(sq("e4"))));
        assert_eq!(view.drag().map(|d| d.whence), Some(sq("e2")));
        assert_eq!(view.tree().cell(sq("e2")).figure.map(|f| f.dragging), Some(true));
    }

    #[test]
    fn drag_end_clears_the_payload_and_highlight() {
        let mut view = BoardView::new(rules(start()), MockChannel::new());
        view.on_role_assigned(Color::White);
        view.on_drag_start(sq("e2")).unwrap();

        view.on_drag_end();
        assert_eq!(view.drag(), None);
        assert_eq!(view.tree(), &Tree::new(&start(), Viewer::Player(Color::White)));
    }

    #[proptest]
    fn dropping_without_dragging_does_nothing(p: Placement, s: Square) {
        let mut rules = rules(p);
        rules.expect_play().never();

        let mut chan = MockChannel::new();
        chan.expect_submit().never();

        let mut view = BoardView::new(rules, chan);
        assert_eq!(view.on_drop(s), None);
    }

    #[test]
    fn accepted_drop_submits_a_queen_promoting_move() {
        let m = Move(sq("e2"), sq("e4"), Promotion::Queen);

        let mut rules = rules(start());
        rules.expect_play().once().with(eq(m)).returning(|_| Ok(()));

        let mut chan = MockChannel::new();
        chan.expect_submit().once().with(eq(m)).return_const(());

        let mut view = BoardView::new(rules, chan);
        view.on_role_assigned(Color::White);
        view.on_drag_start(sq("e2")).unwrap();

        assert_eq!(view.on_drop(sq("e4")), Some(m));
        assert!(view.drag().is_some());
    }

    #[test]
    fn rejected_drop_submits_nothing_and_keeps_the_tree() {
        let m = Move(sq("e2"), sq("e5"), Promotion::Queen);

        let mut rules = rules(start());
        rules.expect_play().once().with(eq(m)).returning(|m| Err(IllegalMove(m)));

        let mut chan = MockChannel::new();
        chan.expect_submit().never();

        let mut view = BoardView::new(rules, chan);
        view.on_role_assigned(Color::White);
        view.on_drag_start(sq("e2")).unwrap();
        let tree = view.tree().clone();

        assert_eq!(view.on_drop(sq("e5")), None);
        assert_eq!(view.tree(), &tree);
    }

    #[test]
    fn accepted_snapshot_renders_the_new_placement() {
        let fen: Fen = "4k3/8/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let before = start();
        let after: Placement = Position::try_from(fen.clone()).unwrap().placement();

        let mut rules = MockRules::new();
        let mut seq = mockall::Sequence::new();
        rules.expect_placement().once().in_sequence(&mut seq).return_const(before);
        rules.expect_load().once().in_sequence(&mut seq).with(eq(fen.clone())).returning(|_| Ok(()));
        rules.expect_placement().once().in_sequence(&mut seq).return_const(after);

        let mut view = BoardView::new(rules, MockChannel::new());
        view.on_snapshot(fen);
        assert_eq!(view.tree(), &Tree::new(&after, Viewer::Spectator));
    }

    #[proptest]
    fn rejected_snapshot_keeps_the_tree(p: Placement) {
        let fen: Fen = "4k3/8/8/8/8/8/8/8 w - - 0 1".parse().unwrap();

        let mut rules = rules(p);
        rules.expect_load().once().returning(|_| Err(IllegalPosition::MissingKing));

        let mut view = BoardView::new(rules, MockChannel::new());
        let tree = view.tree().clone();
        view.on_snapshot(fen);
        assert_eq!(view.tree(), &tree);
    }

    #[proptest]
    fn remote_moves_are_never_submitted(p: Placement, m: Move, legal: bool) {
        let mut rules = rules(p);
        rules
            .expect_play()
            .once()
            .with(eq(m))
            .returning(move |m| if legal { Ok(()) } else { Err(IllegalMove(m)) });

        let mut chan = MockChannel::new();
        chan.expect_submit().never();

        let mut view = BoardView::new(rules, chan);
        view.on_remote_move(m);
        assert_eq!(view.tree(), &Tree::new(&p, Viewer::Spectator));
    }
}
