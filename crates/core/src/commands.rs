//! Matrix command encoding and decoding.
//!
//! A command string is a concatenation of single-letter tags with
//! fixed-width hex operands and no separators:
//!
//! | Tag | Operand      | Meaning                                   |
//! |-----|--------------|-------------------------------------------|
//! | `e` | 2 hex digits | select the effect written by `s` and `a`  |
//! | `s` | 2 hex digits | set the LED at index `y << 4 \| x`        |
//! | `a` | none         | set all LEDs                              |
//! | `p` | 2 hex digits | shift the whole frame                     |
//! | `w` | 4 hex digits | wait for the given number of ticks        |
//! | `x` | none         | end of the animation sequence             |

use core::{fmt::Display, time::Duration};

use alloc::{format, string::String, vec::Vec};

use crate::{
    config::DEFAULT_WAIT_RESOLUTION_MS,
    errors::{Error, Result},
    hex::{hex_digit_value, to_hex},
};

/// The largest representable wait, the firmware treats it as "stop".
pub const MAX_WAIT_TICKS: u16 = 0xffff;
/// Width of the encoded wait command.
pub const WAIT_COMMAND_LEN: usize = 5;
/// Width of the encoded set command for in-range coordinates.
pub const SET_LED_COMMAND_LEN: usize = 3;

/// Converts milliseconds into wait ticks, saturating at [`MAX_WAIT_TICKS`].
///
/// A zero resolution saturates as well.
pub fn wait_ticks(wait_time_ms: u64, resolution_ms: u64) -> u16 {
    wait_time_ms
        .checked_div(resolution_ms)
        .and_then(|ticks| u16::try_from(ticks).ok())
        .unwrap_or(MAX_WAIT_TICKS)
}

/// Encodes a wait command for the given number of milliseconds.
///
/// The time is divided by 15 ms, so the accuracy of the wait is 15 ms. Waits
/// that do not fit into four hex digits are clamped to `"wffff"`. The result
/// is always exactly five characters long.
pub fn wait_command(wait_time_ms: u64) -> String {
    wait_command_with_resolution(wait_time_ms, DEFAULT_WAIT_RESOLUTION_MS)
}

/// Encodes a wait command for the given duration.
pub fn wait_command_for(duration: Duration) -> String {
    let wait_time_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
    wait_command(wait_time_ms)
}

pub(crate) fn wait_command_with_resolution(wait_time_ms: u64, resolution_ms: u64) -> String {
    let hex_time = to_hex(wait_ticks(wait_time_ms, resolution_ms).into());
    format!("w{hex_time:0>4}")
}

/// Encodes a command that lights the LED at the given position.
///
/// The row goes first, then the column, each as natural-width hex. For
/// coordinates below 16 the command is exactly three characters long; larger
/// coordinates produce a wider command which the firmware cannot decode.
pub fn set_led_effect_command(x: u32, y: u32) -> String {
    format!("s{}{}", to_hex(y), to_hex(x))
}

/// A single matrix command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Selects the effect value written by the following set commands.
    Effect(u8),
    /// Lights the LED at the given position.
    SetLed { x: u32, y: u32 },
    /// Lights all LEDs.
    All,
    /// Shifts the frame: the low nibble is the amount, the high nibble holds
    /// left, up, right and down direction flags.
    Shift(u8),
    /// Waits for the given number of ticks, [`MAX_WAIT_TICKS`] stops the animation.
    Wait(u16),
    /// Marks the end of the animation sequence.
    End,
}

impl Command {
    /// Creates a wait command for the given number of milliseconds.
    pub fn wait(wait_time_ms: u64) -> Self {
        Self::Wait(wait_ticks(wait_time_ms, DEFAULT_WAIT_RESOLUTION_MS))
    }

    fn tag(&self) -> char {
        match self {
            Command::Effect(_) => 'e',
            Command::SetLed { .. } => 's',
            Command::All => 'a',
            Command::Shift(_) => 'p',
            Command::Wait(_) => 'w',
            Command::End => 'x',
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Command::SetLed { x, y } => f.write_str(&set_led_effect_command(*x, *y)),
            Command::Effect(value) | Command::Shift(value) => {
                write!(f, "{}{value:02x}", self.tag())
            }
            Command::Wait(ticks) => write!(f, "{}{ticks:04x}", self.tag()),
            Command::All | Command::End => write!(f, "{}", self.tag()),
        }
    }
}

/// Decodes a command string into separate commands.
///
/// Both hex letter cases are accepted. Unlike the firmware, which silently
/// reads malformed digits as zero, malformed input is reported with the byte
/// offset of the problem.
pub fn parse_commands(script: &str) -> Result<Vec<Command>> {
    let bytes = script.as_bytes();
    let mut commands = Vec::new();

    let mut offset = 0;
    while offset < bytes.len() {
        let start = offset;
        let tag = bytes[offset];
        offset += 1;

        let command = match tag {
            b'e' => Command::Effect(read_operand(bytes, start, &mut offset, 2)? as u8),
            b's' => {
                let index = read_operand(bytes, start, &mut offset, 2)? as u32;
                Command::SetLed {
                    x: index & 0x0f,
                    y: index >> 4,
                }
            }
            b'a' => Command::All,
            b'p' => Command::Shift(read_operand(bytes, start, &mut offset, 2)? as u8),
            b'w' => Command::Wait(read_operand(bytes, start, &mut offset, 4)?),
            b'x' => Command::End,
            _ => {
                return Err(Error::UnknownCommand {
                    tag: char::from(tag),
                    offset: start,
                })
            }
        };
        commands.push(command);
    }

    Ok(commands)
}

fn read_operand(bytes: &[u8], start: usize, offset: &mut usize, digits: usize) -> Result<u16> {
    let end = *offset + digits;
    let operand = bytes
        .get(*offset..end)
        .ok_or(Error::UnexpectedEnd { offset: start })?;

    let mut value = 0_u16;
    for (i, &byte) in operand.iter().enumerate() {
        let digit = hex_digit_value(byte).ok_or(Error::InvalidHexDigit {
            digit: char::from(byte),
            offset: *offset + i,
        })?;
        value = (value << 4) | u16::from(digit);
    }

    *offset = end;
    Ok(value)
}
