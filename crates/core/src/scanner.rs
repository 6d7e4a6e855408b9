//! Conversion of a decoded image into a set commands sequence.

use alloc::string::String;

use crate::{
    commands::{set_led_effect_command, SET_LED_COMMAND_LEN},
    config::Configuration,
    errors::{Error, Result},
};

/// Read-only pixel access used by the scanner.
pub trait PixelGrid {
    /// Returns the image width and height.
    fn dimensions(&self) -> (u32, u32);
    /// Returns the first color channel of the pixel at the given position,
    /// which serves as the brightness of the pixel.
    fn first_channel(&self, x: u32, y: u32) -> u8;
}

impl<T: ?Sized + PixelGrid> PixelGrid for &T {
    fn dimensions(&self) -> (u32, u32) {
        T::dimensions(self)
    }

    fn first_channel(&self, x: u32, y: u32) -> u8 {
        T::first_channel(self, x, y)
    }
}

#[cfg(feature = "image")]
impl PixelGrid for image::DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        image::GenericImageView::dimensions(self)
    }

    fn first_channel(&self, x: u32, y: u32) -> u8 {
        image::GenericImageView::get_pixel(self, x, y).0[0]
    }
}

#[cfg(feature = "image")]
impl<P, C> PixelGrid for image::ImageBuffer<P, C>
where
    P: image::Pixel<Subpixel = u8>,
    C: core::ops::Deref<Target = [u8]>,
{
    fn dimensions(&self) -> (u32, u32) {
        image::ImageBuffer::dimensions(self)
    }

    fn first_channel(&self, x: u32, y: u32) -> u8 {
        image::Pixel::channels(self.get_pixel(x, y))[0]
    }
}

/// Builds the command string for a single image.
///
/// Scans the top-left `side_len` x `side_len` square row by row, each row
/// from left to right, and emits a set command for every lit pixel. The order
/// matters because the firmware replays the commands as given. An image
/// without lit pixels yields an empty string.
pub fn scan_image(config: &Configuration, image: impl PixelGrid) -> Result<String> {
    let (width, height) = image.dimensions();
    if width < config.side_len || height < config.side_len {
        return Err(Error::ImageTooSmall {
            width,
            height,
            side_len: config.side_len,
        });
    }

    let mut commands = String::with_capacity(SET_LED_COMMAND_LEN * 8);
    let mut lit = 0_usize;
    for y in 0..config.side_len {
        for x in 0..config.side_len {
            if config.is_lit(image.first_channel(x, y)) {
                commands.push_str(&set_led_effect_command(x, y));
                lit += 1;
            }
        }
    }

    log::trace!("Scanned {width}x{height} image, {lit} pixels lit");
    Ok(commands)
}
