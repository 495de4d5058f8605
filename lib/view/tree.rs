use crate::chess::{Piece, Placement, Square};
use crate::view::{glyph, Glyphs, Options, Viewer};
use derive_more::Display;
use std::fmt::{self, Write};

/// The color of a [`Cell`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Shade {
    #[display(fmt = "light")]
    Light,
    #[display(fmt = "dark")]
    Dark,
}

impl Shade {
    /// The shade of the cell at `(row, col)`, alternating from a light top-left corner.
    #[inline]
    pub fn at(row: u8, col: u8) -> Self {
        if (row + col) % 2 == 0 {
            Shade::Light
        } else {
            Shade::Dark
        }
    }
}

/// A piece drawn on top of a [`Cell`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Figure {
    pub piece: Piece,
    pub glyph: &'static str,
    pub draggable: bool,
    pub dragging: bool,
}

/// A square drawn on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Cell {
    pub square: Square,
    pub shade: Shade,
    pub figure: Option<Figure>,
}

/// The visual tree of the board.
///
/// Cells are kept in grid order, see [`Square::coords`];
/// when [`Tree::flipped`] the whole board is shown rotated by 180 degrees.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Tree {
    cells: Vec<Cell>,
    flipped: bool,
}

impl Tree {
    /// Lays out a [`Placement`] as seen by a [`Viewer`].
    pub fn new(placement: &Placement, viewer: Viewer) -> Self {
        let cells = Square::iter()
            .map(|square| {
                let (row, col) = square.coords();
                let figure = placement[square].map(|piece| Figure {
                    piece,
                    glyph: glyph(piece),
                    draggable: viewer.can_drag(piece),
                    dragging: false,
                });

                Cell {
                    square,
                    shade: Shade::at(row, col),
                    figure,
                }
            })
            .collect();

        Tree {
            cells,
            flipped: viewer.is_flipped(),
        }
    }

    /// Whether the board is shown rotated.
    #[inline]
    pub fn flipped(&self) -> bool {
        self.flipped
    }

    /// The [`Cell`] for a [`Square`].
    #[inline]
    pub fn cell(&self, s: Square) -> &Cell {
        let (row, col) = s.coords();
        &self.cells[row as usize * 8 + col as usize]
    }

    /// The mutable [`Cell`] for a [`Square`].
    #[inline]
    pub fn cell_mut(&mut self, s: Square) -> &mut Cell {
        let (row, col) = s.coords();
        &mut self.cells[row as usize * 8 + col as usize]
    }

    /// An iterator over all [`Cell`]s in grid order.
    #[inline]
    pub fn cells(&self) -> impl ExactSizeIterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The rows of [`Cell`]s in the order they appear on screen, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Cell>> {
        let flipped = self.flipped;
        let rows: Vec<Vec<&Cell>> = self
            .cells
            .chunks(8)
            .map(|row| match flipped {
                false => row.iter().collect(),
                true => row.iter().rev().collect(),
            })
            .collect();

        let rows: Vec<_> = match flipped {
            false => rows,
            true => rows.into_iter().rev().collect(),
        };

        rows.into_iter()
    }

    /// Draws this tree as text, according to [`Options`].
    #[inline]
    pub fn draw(&self, options: Options) -> Canvas<'_> {
        Canvas {
            tree: self,
            options,
        }
    }
}

/// A text rendering of a [`Tree`].
#[derive(Debug, Copy, Clone)]
pub struct Canvas<'a> {
    tree: &'a Tree,
    options: Options,
}

impl<'a> Canvas<'a> {
    fn files(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.options.coordinates {
            write!(f, "  ")?;
            for cell in self.tree.rows().next().into_iter().flatten() {
                write!(f, " {} ", cell.square.file())?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

impl<'a> fmt::Display for Canvas<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tree.rows() {
            if self.options.coordinates {
                if let Some(cell) = row.first() {
                    write!(f, "{} ", cell.square.rank())?;
                }
            }

            for cell in row {
                let (l, r) = match cell.figure {
                    Some(Figure { dragging: true, .. }) => ('[', ']'),
                    _ => (' ', ' '),
                };

                f.write_char(l)?;

                match (cell.figure, self.options.glyphs) {
                    (Some(fig), Glyphs::Figurine) => f.write_str(fig.glyph)?,
                    (Some(fig), Glyphs::Letter) => f.write_char(fig.piece.letter())?,
                    (None, _) if cell.shade == Shade::Dark => f.write_char('·')?,
                    (None, _) => f.write_char(' ')?,
                }

                f.write_char(r)?;
            }

            writeln!(f)?;
        }

        self.files(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{Color, Position, Role};
    use test_strategy::proptest;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[proptest]
    fn tree_has_one_cell_per_square(p: Placement, v: Viewer) {
        let tree = Tree::new(&p, v);
        assert_eq!(tree.cells().len(), 64);
        for s in Square::iter() {
            assert_eq!(tree.cell(s).square, s);
        }
    }

    #[proptest]
    fn rendering_is_deterministic(p: Placement, v: Viewer) {
        assert_eq!(Tree::new(&p, v), Tree::new(&p, v));
    }

    #[proptest]
    fn cells_alternate_shades(p: Placement, v: Viewer, s: Square) {
        let (row, col) = s.coords();
        let expected = if (row + col) % 2 == 0 {
            Shade::Light
        } else {
            Shade::Dark
        };

        assert_eq!(Tree::new(&p, v).cell(s).shade, expected);
    }

    #[proptest]
    fn occupied_cells_carry_a_figure(p: Placement, v: Viewer, s: Square) {
        let tree = Tree::new(&p, v);
        assert_eq!(tree.cell(s).figure.map(|f| f.piece), p[s]);
        assert_eq!(tree.cell(s).figure.map(|f| f.glyph), p[s].map(glyph));
    }

    #[proptest]
    fn figure_is_draggable_iff_it_belongs_to_the_viewer(p: Placement, v: Viewer) {
        let tree = Tree::new(&p, v);
        for cell in tree.cells() {
            if let Some(fig) = cell.figure {
                assert_eq!(fig.draggable, v == Viewer::Player(fig.piece.color()));
                assert!(!fig.dragging);
            }
        }
    }

    #[proptest]
    fn tree_is_flipped_iff_viewer_plays_black(p: Placement, v: Viewer) {
        assert_eq!(Tree::new(&p, v).flipped(), v == Viewer::Player(Color::Black));
    }

    #[proptest]
    fn light_squares_are_on_the_same_diagonals_as_a8_and_h1(p: Placement, v: Viewer) {
        let tree = Tree::new(&p, v);
        assert_eq!(tree.cell(sq("a8")).shade, Shade::Light);
        assert_eq!(tree.cell(sq("h1")).shade, Shade::Light);
        assert_eq!(tree.cell(sq("a1")).shade, Shade::Dark);
    }

    #[test]
    fn unflipped_board_shows_the_eighth_rank_on_top() {
        let tree = Tree::new(&Position::default().placement(), Viewer::Player(Color::White));
        let rows: Vec<_> = tree.rows().collect();
        assert_eq!(rows[0][0].square, sq("a8"));
        assert_eq!(rows[7][7].square, sq("h1"));
    }

    #[test]
    fn flipped_board_shows_the_first_rank_on_top() {
        let tree = Tree::new(&Position::default().placement(), Viewer::Player(Color::Black));
        let rows: Vec<_> = tree.rows().collect();
        assert_eq!(rows[0][0].square, sq("h1"));
        assert_eq!(rows[7][7].square, sq("a8"));
    }

    #[test]
    fn canvas_draws_figurines_with_coordinates() {
        let tree = Tree::new(&Position::default().placement(), Viewer::Spectator);
        let text = tree.draw(Options::default()).to_string();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8  ♜  ♞  ♝  ♛  ♚  ♝  ♞  ♜ ");
        assert_eq!(lines[7], "1  ♖  ♘  ♗  ♕  ♔  ♗  ♘  ♖ ");
        assert_eq!(lines[8], "   a  b  c  d  e  f  g  h ");
    }

    #[test]
    fn canvas_draws_letters_without_coordinates() {
        let tree = Tree::new(&Position::default().placement(), Viewer::Spectator);
        let options = Options {
            glyphs: Glyphs::Letter,
            coordinates: false,
        };

        let text = tree.draw(options).to_string();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], " r  n  b  q  k  b  n  r ");
        assert_eq!(lines[2], "    ·     ·     ·     · ");
        assert_eq!(lines[6], " P  P  P  P  P  P  P  P ");
    }

    #[test]
    fn canvas_brackets_the_dragged_figure() {
        let mut tree = Tree::new(&Position::default().placement(), Viewer::Player(Color::White));
        if let Some(fig) = tree.cell_mut(sq("e2")).figure.as_mut() {
            fig.dragging = true;
        }

        let options = Options {
            glyphs: Glyphs::Letter,
            coordinates: false,
        };

        let text = tree.draw(options).to_string();
        assert_eq!(text.lines().nth(6), Some(" P  P  P  P [P] P  P  P "));
        assert_eq!(
            tree.cell(sq("e2")).figure.map(|f| f.piece),
            Some(Piece(Color::White, Role::Pawn))
        );
    }
}
