//! Theme constants for the GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(0, 0, 0);
pub const GRID_LINE: Color32 = Color32::from_rgb(128, 128, 128);
pub const WIN_LINE: Color32 = Color32::from_rgb(255, 255, 255);

// Marks
pub const PLAYER_ONE: Color32 = Color32::from_rgb(214, 45, 32);
pub const PLAYER_TWO: Color32 = Color32::from_rgb(0, 87, 231);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 100)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(255, 255, 255);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(150, 150, 155);
pub const MENU_CURSOR: Color32 = Color32::from_rgb(214, 45, 32);

// Sizes, relative to the cell size where noted
pub const GRID_LINE_WIDTH: f32 = 15.0;
pub const WIN_LINE_WIDTH: f32 = 15.0;
pub const CIRCLE_RADIUS_RATIO: f32 = 1.0 / 3.0;
pub const CIRCLE_WIDTH: f32 = 15.0;
pub const CROSS_SPACE_RATIO: f32 = 0.25;
pub const CROSS_WIDTH: f32 = 25.0;
pub const STATUS_BAR_HEIGHT: f32 = 50.0;
