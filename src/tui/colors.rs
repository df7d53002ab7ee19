//! Color constants for the terminal user interface.

use ratatui::style::Color;

/// Background for the delete confirmation popup.
pub const DARK_RED: Color = Color::Rgb(114, 0, 0);
/// Background for the validation alert popup.
pub const DARK_AMBER: Color = Color::Rgb(110, 70, 0);
/// Completed-task marker.
pub const MOSS_GREEN: Color = Color::Rgb(80, 140, 80);
