use displaydoc::Display;

/// A specialized result type for the LED matrix encoder.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while scanning images or decoding command strings.
#[derive(Clone, Copy, PartialEq, Eq, Display, Debug)]
pub enum Error {
    /// The image is {width}x{height} pixels, which is smaller than the {side_len}x{side_len} LED grid.
    ImageTooSmall {
        width: u32,
        height: u32,
        side_len: u32,
    },
    /// Unknown command tag '{tag}' at offset {offset}.
    UnknownCommand { tag: char, offset: usize },
    /// Invalid hex digit '{digit}' at offset {offset}.
    InvalidHexDigit { digit: char, offset: usize },
    /// The command started at offset {offset} ends before its operand is complete.
    UnexpectedEnd { offset: usize },
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
