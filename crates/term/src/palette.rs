//! Piece colours, indexed by board cell value.

use crate::fb::Rgb;
use crate::types::Cell;

/// Entry 0 is the empty cell and has no colour.
pub const PALETTE_HEX: [Option<&str>; 8] = [
    None,
    Some("#FF0D72"),
    Some("#0DC2FF"),
    Some("#0DFF72"),
    Some("#F538FF"),
    Some("#FF8E0D"),
    Some("#FFE138"),
    Some("#3877FF"),
];

pub const PALETTE: [Option<Rgb>; 8] = [
    None,
    Some(Rgb::new(0xFF, 0x0D, 0x72)),
    Some(Rgb::new(0x0D, 0xC2, 0xFF)),
    Some(Rgb::new(0x0D, 0xFF, 0x72)),
    Some(Rgb::new(0xF5, 0x38, 0xFF)),
    Some(Rgb::new(0xFF, 0x8E, 0x0D)),
    Some(Rgb::new(0xFF, 0xE1, 0x38)),
    Some(Rgb::new(0x38, 0x77, 0xFF)),
];

/// Colour for a board cell, `None` for empty or unknown values.
pub fn color_for(cell: Cell) -> Option<Rgb> {
    PALETTE.get(cell as usize).copied().flatten()
}
