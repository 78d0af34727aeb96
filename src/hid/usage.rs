//! Keyboard/Keypad usage page (0x07) codes.
//!
//! Only the usages the default keymap and tests need are named here.
//! Modifiers occupy 0xE0..=0xE7 and travel as bits in the report's
//! modifier byte instead of as array entries.

use core::ops::RangeInclusive;

/// "No key" / empty report slot. Also marks an unassigned input.
pub const NO_KEY: u8 = 0x00;
/// Too many keys pressed (HID error code, never assigned to an input).
pub const ERROR_ROLL_OVER: u8 = 0x01;
pub const POST_FAIL: u8 = 0x02;
pub const ERROR_UNDEFINED: u8 = 0x03;

pub const KEY_A: u8 = 0x04;
pub const KEY_B: u8 = 0x05;
pub const KEY_C: u8 = 0x06;
pub const KEY_D: u8 = 0x07;
pub const KEY_E: u8 = 0x08;
pub const KEY_F: u8 = 0x09;
pub const KEY_G: u8 = 0x0A;
pub const KEY_H: u8 = 0x0B;
pub const KEY_ENTER: u8 = 0x28;
pub const KEY_ESCAPE: u8 = 0x29;
pub const KEY_BACKSPACE: u8 = 0x2A;
pub const KEY_TAB: u8 = 0x2B;
pub const KEY_SPACE: u8 = 0x2C;

pub const KEY_LEFT_CTRL: u8 = 0xE0;
pub const KEY_LEFT_SHIFT: u8 = 0xE1;
pub const KEY_LEFT_ALT: u8 = 0xE2;
pub const KEY_LEFT_GUI: u8 = 0xE3;
pub const KEY_RIGHT_CTRL: u8 = 0xE4;
pub const KEY_RIGHT_SHIFT: u8 = 0xE5;
pub const KEY_RIGHT_ALT: u8 = 0xE6;
pub const KEY_RIGHT_GUI: u8 = 0xE7;

/// Modifier usages, in modifier-byte bit order.
pub const MODIFIER_RANGE: RangeInclusive<u8> = KEY_LEFT_CTRL..=KEY_RIGHT_GUI;

/// Returns `true` if `keycode` is one of the eight modifier usages.
pub const fn is_modifier(keycode: u8) -> bool {
    keycode >= KEY_LEFT_CTRL && keycode <= KEY_RIGHT_GUI
}

/// Bit of the modifier byte that `keycode` sets, if it is a modifier.
///
/// Left Ctrl is bit 0 through Right GUI at bit 7.
pub const fn modifier_bit(keycode: u8) -> Option<u8> {
    if is_modifier(keycode) {
        Some(1 << (keycode - KEY_LEFT_CTRL))
    } else {
        None
    }
}

/// Returns `true` for codes that must never be bound to an input: the
/// HID error codes and everything above Right GUI.
pub const fn is_reserved(keycode: u8) -> bool {
    (keycode >= ERROR_ROLL_OVER && keycode <= ERROR_UNDEFINED) || keycode > KEY_RIGHT_GUI
}
