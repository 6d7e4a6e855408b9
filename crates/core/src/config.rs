//! Encoder constants.

use alloc::{format, string::String, vec::Vec};

use crate::commands::{wait_command_with_resolution, wait_ticks};

/// Side length of the square LED matrix.
pub const DEFAULT_SIDE_LEN: u32 = 16;
/// First channel value above which a pixel is considered lit.
pub const DEFAULT_SET_LED_THRESHOLD: u8 = 50;
/// Duration of a single wait tick in milliseconds.
pub const DEFAULT_WAIT_RESOLUTION_MS: u64 = 15;
/// The number of animation frames converted by a single run.
pub const DEFAULT_IMAGES_COUNT: usize = 19;

/// A global encoder configuration.
///
/// The default value reproduces the constants the matrix firmware was built
/// around; there is no way to change them from the outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// The number of LEDs in each row and column.
    pub side_len: u32,
    /// Pixels whose first channel is strictly greater than this value are lit.
    pub set_led_threshold: u8,
    /// Wait tick length in milliseconds.
    pub wait_resolution_ms: u64,
    /// Ordered image file names, resolved relative to the working directory.
    pub image_names: Vec<String>,
}

impl Configuration {
    /// Returns `true` if a pixel with the given first channel value should be lit.
    pub fn is_lit(&self, first_channel: u8) -> bool {
        first_channel > self.set_led_threshold
    }

    /// Converts milliseconds into wait ticks using the configured resolution.
    pub fn wait_ticks(&self, wait_time_ms: u64) -> u16 {
        wait_ticks(wait_time_ms, self.wait_resolution_ms)
    }

    /// Encodes a wait command using the configured resolution.
    pub fn wait_command(&self, wait_time_ms: u64) -> String {
        wait_command_with_resolution(wait_time_ms, self.wait_resolution_ms)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            side_len: DEFAULT_SIDE_LEN,
            set_led_threshold: DEFAULT_SET_LED_THRESHOLD,
            wait_resolution_ms: DEFAULT_WAIT_RESOLUTION_MS,
            image_names: (1..=DEFAULT_IMAGES_COUNT)
                .map(|n| format!("{n:04}.png"))
                .collect(),
        }
    }
}
