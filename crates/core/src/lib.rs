//! Encoding of 16x16 pixel images into LED matrix command strings.
//!
//! The matrix firmware replays a flat ASCII script made of one letter tags
//! followed by fixed-width lowercase hex operands. This crate builds such
//! scripts from decoded images and offers typed access to the individual
//! commands.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate alloc;

pub use crate::{
    commands::{
        parse_commands, set_led_effect_command, wait_command, wait_command_for, Command,
    },
    config::Configuration,
    errors::{Error, Result},
    hex::to_hex,
    scanner::{scan_image, PixelGrid},
};

pub mod commands;
pub mod config;
pub mod errors;
pub mod hex;
pub mod scanner;
