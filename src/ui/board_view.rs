//! Board rendering and click handling

use crate::{Board, Mark, Outcome, Pos};
use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// What the board view needs to draw one frame
pub struct BoardFrame<'a> {
    pub board: &'a Board,
    pub current_turn: Mark,
    pub last_move: Option<Pos>,
    pub winning_line: Option<&'a [Pos]>,
    pub outcome: Outcome,
    /// Text for the game over banner
    pub banner: Option<String>,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Top-left corner of the grid
    origin: Pos2,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            origin: Pos2::ZERO,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// The cell is returned as raw signed coordinates; the game decides
    /// whether the click is a legal move.
    pub fn show(&mut self, ui: &mut egui::Ui, frame: &BoardFrame<'_>) -> Option<(isize, isize)> {
        let board = frame.board;
        let available = ui.available_size();
        let (response, painter) = ui.allocate_painter(available, Sense::click());
        let area = response.rect;

        let grid = area.shrink(BOARD_MARGIN);
        self.cell_size = (grid.width() / board.width() as f32).min(grid.height() / board.height() as f32);
        let grid_size = Vec2::new(
            self.cell_size * board.width() as f32,
            self.cell_size * board.height() as f32,
        );
        self.origin = grid.center() - grid_size / 2.0;

        painter.rect_filled(area, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter, board);
        self.draw_marks(&painter, board);

        if let Some(pos) = frame.last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = frame.winning_line {
            self.draw_winning_line(&painter, line);
        }

        if frame.outcome.is_over() {
            if let Some(text) = &frame.banner {
                Self::draw_banner(&painter, area, text);
            }
            return None;
        }

        let pointer = response.hover_pos()?;
        let (row, col) = self.screen_to_cell(pointer);
        if let Some(pos) = board.pos(row, col) {
            if board.is_empty(pos) {
                self.draw_hover_preview(&painter, pos, frame.current_turn);
            }
        }

        response.clicked().then_some((row, col))
    }

    /// Draw the lines between cells
    fn draw_grid(&self, painter: &Painter, board: &Board) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let width = self.cell_size * board.width() as f32;
        let height = self.cell_size * board.height() as f32;

        for i in 1..board.width() {
            let x = self.origin.x + i as f32 * self.cell_size;
            painter.line_segment(
                [Pos2::new(x, self.origin.y), Pos2::new(x, self.origin.y + height)],
                stroke,
            );
        }

        for i in 1..board.height() {
            let y = self.origin.y + i as f32 * self.cell_size;
            painter.line_segment(
                [Pos2::new(self.origin.x, y), Pos2::new(self.origin.x + width, y)],
                stroke,
            );
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (pos, mark) in board.cells() {
            self.draw_mark(painter, pos, mark, mark_color(mark));
        }
    }

    /// X for PlayerA, a ring for PlayerB
    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Mark, color: Color32) {
        let cell = self.cell_rect(pos);
        let inner = cell.shrink(self.cell_size * MARK_PADDING_RATIO);
        let stroke = Stroke::new(MARK_STROKE_WIDTH, color);

        match mark {
            Mark::PlayerA => {
                painter.line_segment([inner.left_top(), inner.right_bottom()], stroke);
                painter.line_segment([inner.right_top(), inner.left_bottom()], stroke);
            }
            Mark::PlayerB => {
                painter.circle_stroke(inner.center(), inner.width() / 2.0, stroke);
            }
            Mark::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let cell = self.cell_rect(pos);
        let corner = cell.left_top() + Vec2::splat(LAST_MOVE_MARKER_RADIUS * 2.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.cell_rect(pair[0]).center();
            let end = self.cell_rect(pair[1]).center();
            painter.line_segment([start, end], stroke);
        }

        for &pos in line {
            painter.rect_stroke(
                self.cell_rect(pos).shrink(2.0),
                CornerRadius::same(2),
                stroke,
                egui::StrokeKind::Inside,
            );
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Mark) {
        self.draw_mark(painter, pos, turn, hover_preview(mark_color(turn)));
    }

    fn draw_banner(painter: &Painter, area: Rect, text: &str) {
        let banner = Rect::from_center_size(area.center(), Vec2::new(area.width(), BANNER_HEIGHT));
        painter.rect_filled(banner, CornerRadius::ZERO, BANNER_BG);
        painter.text(
            banner.center(),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(40.0),
            BANNER_TEXT,
        );
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.origin + Vec2::new(pos.col as f32, pos.row as f32) * self.cell_size;
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to (row, col); may lie outside the board
    pub fn screen_to_cell(&self, screen_pos: Pos2) -> (isize, isize) {
        let relative = (screen_pos - self.origin) / self.cell_size;
        (relative.y.floor() as isize, relative.x.floor() as isize)
    }
}

fn mark_color(mark: Mark) -> Color32 {
    match mark {
        Mark::PlayerA => PLAYER_A_MARK,
        Mark::PlayerB => PLAYER_B_MARK,
        Mark::Empty => Color32::TRANSPARENT,
    }
}
