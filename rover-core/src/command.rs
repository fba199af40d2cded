//! Link Command Module
//!
//! The serial link carries one command per byte, with no framing and no
//! checksum. Bytes outside the table below are valid traffic and are ignored by
//! the brain.

/// Placeholder value, also used to clear the last received byte
pub const RESERVED: u8 = 0x00;
/// Remote side reports the link as established
pub const CONNECTED: u8 = 0x01;
/// Drive forward
pub const MOVE_FORWARD: u8 = 0x02;
/// Drive backward
pub const MOVE_BACK: u8 = 0x03;
/// Turn left in place
pub const MOVE_LEFT: u8 = 0x04;
/// Turn right in place
pub const MOVE_RIGHT: u8 = 0x05;
/// Stop both tracks
pub const MOVE_STOP: u8 = 0x06;

/// Decoded link command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    Connected,
    MoveForward,
    MoveBack,
    MoveLeft,
    MoveRight,
    MoveStop,
    Reserved,
}

impl Command {
    /// Decodes a raw link byte, `None` for bytes that carry no command
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            CONNECTED => Some(Self::Connected),
            MOVE_FORWARD => Some(Self::MoveForward),
            MOVE_BACK => Some(Self::MoveBack),
            MOVE_LEFT => Some(Self::MoveLeft),
            MOVE_RIGHT => Some(Self::MoveRight),
            MOVE_STOP => Some(Self::MoveStop),
            RESERVED => Some(Self::Reserved),
            _ => None,
        }
    }
}
