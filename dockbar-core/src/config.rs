use std::path::PathBuf;

use crate::models::Size;

/// Settings the core and the display server read from the host program.
pub trait Config {
    /// Height of the panel strip in pixels.
    fn panel_height(&self) -> i32;

    /// Cap on the space a single entry will accept from the layout.
    fn entry_desired_size(&self) -> Size;

    /// Cosmetic dead space between strips, carved out of each strip's
    /// rendered width. It never affects the layout cursor.
    fn entry_gutter(&self) -> i32;

    /// Font file used for strip labels.
    fn font_path(&self) -> Option<PathBuf>;

    fn font_size(&self) -> f32;

    fn background_color(&self) -> u32;

    fn text_color(&self) -> u32;

    fn highlight_color(&self) -> u32;
}

#[cfg(test)]
#[allow(clippy::module_name_repetitions)]
#[derive(Default)]
pub struct TestConfig;

#[cfg(test)]
impl Config for TestConfig {
    fn panel_height(&self) -> i32 {
        30
    }
    fn entry_desired_size(&self) -> Size {
        Size::new(256, 256)
    }
    fn entry_gutter(&self) -> i32 {
        4
    }
    fn font_path(&self) -> Option<PathBuf> {
        None
    }
    fn font_size(&self) -> f32 {
        13.0
    }
    fn background_color(&self) -> u32 {
        0
    }
    fn text_color(&self) -> u32 {
        0x00ff_ffff
    }
    fn highlight_color(&self) -> u32 {
        0x00ff_ffff
    }
}
