//! Theme constants for the game window

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::DARK_GRAY;
pub const GRID_LINE: Color32 = Color32::WHITE;

// Marks
pub const PLAYER_A_MARK: Color32 = Color32::from_rgb(1, 1, 255);
pub const PLAYER_B_MARK: Color32 = Color32::RED;

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 200, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_preview(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 90)
}

// Game over banner
pub const BANNER_BG: Color32 = Color32::from_rgb(255, 0, 255);
pub const BANNER_TEXT: Color32 = Color32::YELLOW;

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_ACTIVE: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 10.0;
/// Gap between a mark and its cell border, as a fraction of the cell size
pub const MARK_PADDING_RATIO: f32 = 0.2;
pub const MARK_STROKE_WIDTH: f32 = 3.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
pub const BANNER_HEIGHT: f32 = 70.0;
