//! Board rendering for the GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Mark, Pos, SIDE};

use super::theme::*;

/// Board view handles rendering and click mapping for the board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 200.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell index, if any.
    ///
    /// The index is only a candidate; the game state validates it.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Mark,
        winning_line: Option<[usize; 3]>,
        accept_input: bool,
    ) -> Option<usize> {
        let available = ui.available_size();
        let board_size = available.x.min(available.y).max(0.0);
        self.cell_size = board_size / SIDE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(0), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        if !accept_input {
            return None;
        }

        let pointer = response.hover_pos()?;
        let pos = self.screen_to_board(pointer)?;
        let index = pos.to_index();
        let is_valid = !board.occupied(index);
        let hover = if is_valid { hover_valid() } else { hover_invalid() };
        painter.rect_filled(self.cell_rect(pos).shrink(4.0), CornerRadius::same(4), hover);
        if is_valid {
            self.draw_mark(&painter, pos, current_turn);
        }

        response.clicked().then_some(index)
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let min = self.board_rect.min;
        let len = self.cell_size * SIDE as f32;

        for i in 1..SIDE {
            let offset = i as f32 * self.cell_size;
            // Vertical line
            painter.line_segment(
                [min + Vec2::new(offset, 0.0), min + Vec2::new(offset, len)],
                stroke,
            );
            // Horizontal line
            painter.line_segment(
                [min + Vec2::new(0.0, offset), min + Vec2::new(len, offset)],
                stroke,
            );
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        let grid = board.as_grid();
        for row in 0..SIDE {
            for col in 0..SIDE {
                let pos = Pos::new(row as u8, col as u8);
                let mark = grid.at(pos);
                if !mark.is_empty() {
                    self.draw_mark(painter, pos, mark);
                }
            }
        }
    }

    /// Player one draws circles, player two crosses
    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Mark) {
        let center = self.board_to_screen(pos);
        match mark {
            Mark::One => {
                painter.circle_stroke(
                    center,
                    self.cell_size * CIRCLE_RADIUS_RATIO,
                    Stroke::new(CIRCLE_WIDTH, PLAYER_ONE),
                );
            }
            Mark::Two => {
                let half = self.cell_size / 2.0 - self.cell_size * CROSS_SPACE_RATIO;
                let stroke = Stroke::new(CROSS_WIDTH, PLAYER_TWO);
                painter.line_segment(
                    [center + Vec2::new(-half, half), center + Vec2::new(half, -half)],
                    stroke,
                );
                painter.line_segment(
                    [center + Vec2::new(-half, -half), center + Vec2::new(half, half)],
                    stroke,
                );
            }
            Mark::Empty => {}
        }
    }

    /// Stroke through the first and last cell of the line, past the marks
    fn draw_winning_line(&self, painter: &Painter, line: [usize; 3]) {
        let start = self.board_to_screen(Pos::from_index(line[0]));
        let end = self.board_to_screen(Pos::from_index(line[2]));
        let overshoot = (end - start).normalized() * self.cell_size * 0.4;
        painter.line_segment(
            [start - overshoot, end + overshoot],
            Stroke::new(WIN_LINE_WIDTH, WIN_LINE),
        );
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert board position to screen coordinates (cell center)
    fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }

    /// Convert screen coordinates to the cell under them
    fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if self.cell_size <= 0.0 {
            return None;
        }
        let rel = screen_pos - self.board_rect.min;
        let row = (rel.y / self.cell_size).floor() as i32;
        let col = (rel.x / self.cell_size).floor() as i32;
        Pos::is_valid(row, col).then(|| Pos::new(row as u8, col as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            cell_size: 200.0,
            board_rect: Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::splat(600.0)),
        }
    }

    #[test]
    fn test_click_maps_to_row_major_index() {
        let view = view();
        let pos = view.screen_to_board(Pos2::new(450.0, 250.0)).unwrap();
        assert_eq!(pos, Pos::new(1, 2));
        assert_eq!(pos.to_index(), 5);
    }

    #[test]
    fn test_click_outside_board() {
        let view = view();
        assert_eq!(view.screen_to_board(Pos2::new(610.0, 10.0)), None);
        assert_eq!(view.screen_to_board(Pos2::new(10.0, -1.0)), None);
    }

    #[test]
    fn test_cell_centers() {
        let view = view();
        assert_eq!(view.board_to_screen(Pos::new(0, 0)), Pos2::new(100.0, 100.0));
        assert_eq!(view.board_to_screen(Pos::new(2, 1)), Pos2::new(300.0, 500.0));
    }
}
