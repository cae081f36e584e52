//! Embedded 31x31 module bitmaps for the pairing and low-battery screens.

use inkplane::draw::{QR_MODULES, QR_ROW_BYTES};

/// Pairing QR code.
pub static QR_PAIRING: [[u8; QR_ROW_BYTES]; QR_MODULES] = [
    [0x00, 0x00, 0x00, 0x00],
    [0x7F, 0x1E, 0x99, 0xFC],
    [0x41, 0x3B, 0xC5, 0x04],
    [0x5D, 0x5D, 0x6D, 0x74],
    [0x5D, 0x11, 0x9D, 0x74],
    [0x5D, 0x63, 0xD1, 0x74],
    [0x41, 0x43, 0x59, 0x04],
    [0x7F, 0x55, 0x55, 0xFC],
    [0x00, 0x06, 0xB0, 0x00],
    [0x25, 0x43, 0x96, 0xD0],
    [0x74, 0x55, 0x2C, 0x74],
    [0x7B, 0xB1, 0x22, 0xC4],
    [0x5E, 0xB4, 0xE2, 0xE4],
    [0x53, 0xBA, 0x6E, 0x98],
    [0x72, 0x54, 0xE1, 0xF4],
    [0x0B, 0xC8, 0xD5, 0x1C],
    [0x32, 0xEA, 0xCD, 0x20],
    [0x7B, 0x13, 0xCC, 0x4C],
    [0x4A, 0xC0, 0x1A, 0x9C],
    [0x1B, 0x55, 0xB5, 0x7C],
    [0x1A, 0x8E, 0xF5, 0x54],
    [0x77, 0xBD, 0x27, 0xE0],
    [0x00, 0x6B, 0xDC, 0x74],
    [0x7F, 0x0A, 0xED, 0x54],
    [0x41, 0x1B, 0x3C, 0x64],
    [0x5D, 0x55, 0x9F, 0xE4],
    [0x5D, 0x3E, 0x48, 0x38],
    [0x5D, 0x2B, 0x4E, 0x0C],
    [0x41, 0x60, 0x20, 0x2C],
    [0x7F, 0x0D, 0xB0, 0xC8],
    [0x00, 0x00, 0x00, 0x00],
];

/// Empty-battery mark.
pub static LOW_BATTERY: [[u8; QR_ROW_BYTES]; QR_MODULES] = [
    [0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00],
    [0x00, 0x07, 0xC0, 0x00],
    [0x00, 0x04, 0x40, 0x00],
    [0x00, 0xFF, 0xFE, 0x00],
    [0x00, 0x80, 0x02, 0x00],
    [0x01, 0x80, 0x03, 0x00],
    [0x01, 0x00, 0x01, 0x00],
    [0x01, 0x00, 0x01, 0x00],
    [0x01, 0x03, 0x81, 0x00],
    [0x01, 0x03, 0x81, 0x00],
    [0x01, 0x03, 0x81, 0x00],
    [0x01, 0x03, 0x81, 0x00],
    [0x01, 0x03, 0x81, 0x00],
    [0x01, 0x03, 0x81, 0x00],
    [0x01, 0x03, 0x81, 0x00],
    [0x01, 0x03, 0x81, 0x00],
    [0x01, 0x03, 0x81, 0x00],
    [0x01, 0x00, 0x01, 0x00],
    [0x01, 0x00, 0x01, 0x00],
    [0x01, 0x03, 0x81, 0x00],
    [0x01, 0x03, 0x81, 0x00],
    [0x01, 0x03, 0x81, 0x00],
    [0x01, 0x00, 0x01, 0x00],
    [0x01, 0x00, 0x01, 0x00],
    [0x01, 0xC0, 0x07, 0x00],
    [0x00, 0x40, 0x04, 0x00],
    [0x00, 0x7F, 0xFC, 0x00],
    [0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00],
];
