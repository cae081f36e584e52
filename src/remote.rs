//! Remote drawing-opcode protocol.
//!
//! A connected host paints the canvas directly with small opcode-tagged
//! buffers. Buffers are copied into a fixed zero-padded frame before
//! parsing, so short buffers read as zeros and oversized ones are
//! truncated rather than rejected.

use core::fmt::Write;

use heapless::Vec;
use inkplane::Color;
use log::debug;

use crate::screen::Device;

/// Frame size; incoming buffers are clamped to this length.
pub const MAX_BUFFER: usize = 160;

const OP_PIXEL: u8 = 0x0A;
const OP_LINE: u8 = 0x0B;
const OP_RECT: u8 = 0x0C;
const OP_BOX: u8 = 0x0D;
const OP_TEXT: u8 = 0x0E;
const OP_BITMAP: u8 = 0x0F;
const OP_TRIANGLE: u8 = 0x1A;

/// Longest placeholder key, bracket contents excluded.
const MAX_KEY: usize = 15;

fn color_from(byte: u8) -> Option<Color> {
    match byte {
        0 => Some(Color::Black),
        1 => Some(Color::White),
        2 => Some(Color::Red),
        3 => Some(Color::Swap),
        _ => None,
    }
}

/// Applies one drawing-opcode buffer to the device canvas.
///
/// Unknown opcodes and out-of-range color selectors are ignored.
pub fn apply(device: &mut Device, buffer: &[u8]) {
    let mut frame = [0u8; MAX_BUFFER];
    let len = buffer.len().min(MAX_BUFFER);
    frame[..len].copy_from_slice(&buffer[..len]);

    let at = |i: usize| i32::from(frame[i]);

    match frame[0] {
        OP_PIXEL => {
            if let Some(color) = color_from(frame[3]) {
                device.canvas.set_pixel(at(1), at(2), color);
            }
        }
        OP_LINE => {
            if let Some(color) = color_from(frame[5]) {
                device.canvas.line(at(1), at(2), at(3), at(4), color);
            }
        }
        OP_RECT => {
            if let Some(color) = color_from(frame[5]) {
                device.canvas.rect(at(1), at(2), at(3), at(4), color);
            }
        }
        OP_BOX => {
            if let Some(color) = color_from(frame[5]) {
                device.canvas.fill_rect(at(1), at(2), at(3), at(4), color);
            }
        }
        OP_TEXT => {
            let Some(color) = color_from(frame[4]) else {
                return;
            };
            device.fonts.set_scale(at(3));

            let raw = &frame[6..];
            let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
            let text = substitute(&raw[..end], device);

            if frame[5] != 0 {
                device
                    .fonts
                    .draw_text_filled_raw(&mut device.canvas, at(1), at(2), &text, color);
            } else {
                device
                    .fonts
                    .draw_text_raw(&mut device.canvas, at(1), at(2), &text, color);
            }
        }
        OP_BITMAP => {
            // Tile (ix, iy) of an image streamed block by block.
            let x = at(1) + at(3) * at(5);
            let y = at(2) + at(4) * at(6);
            let (w, h) = (u32::from(frame[5]), u32::from(frame[6]));
            if !device.canvas.blit_bitmap(x, y, w, h, &frame[7..]) {
                debug!("bitmap block {}x{} short of data", w, h);
            }
        }
        OP_TRIANGLE => {
            // Byte 8 carries a fill flag, but both host paths draw the
            // outline; the flag is accepted and ignored.
            if let Some(color) = color_from(frame[7]) {
                device
                    .canvas
                    .triangle(at(1), at(2), at(3), at(4), at(5), at(6), color);
            }
        }
        _ => {}
    }
}

/// Expands `$[KEY]` placeholders: `U` -> battery voltage as `D.DDDV`,
/// `B` -> device id, unknown keys -> literal `[KEY]`. Unterminated or
/// oversized markers pass through unchanged. Stops at a NUL byte or when
/// a replacement no longer fits.
fn substitute(input: &[u8], device: &Device) -> Vec<u8, MAX_BUFFER> {
    let mut out: Vec<u8, MAX_BUFFER> = Vec::new();
    let mut i = 0;

    while i < input.len() && input[i] != 0 {
        if input[i] == b'$'
            && input.get(i + 1) == Some(&b'[')
            && let Some(rel) = input[i + 2..].iter().position(|&b| b == b']')
            && rel <= MAX_KEY
        {
            let key = &input[i + 2..i + 2 + rel];
            let mut repl: Vec<u8, 32> = Vec::new();
            match key {
                b"U" => {
                    let mv = device.battery_mv;
                    let mut s: heapless::String<16> = heapless::String::new();
                    let _ = write!(s, "{}.{:03}V", mv / 1000, mv % 1000);
                    let _ = repl.extend_from_slice(s.as_bytes());
                }
                b"B" => {
                    let _ = repl.extend_from_slice(device.device_id.as_bytes());
                }
                _ => {
                    let _ = repl.push(b'[');
                    let _ = repl.extend_from_slice(key);
                    let _ = repl.push(b']');
                }
            }

            if out.extend_from_slice(&repl).is_err() {
                break;
            }
            i += 2 + rel + 1;
            continue;
        }

        if out.push(input[i]).is_err() {
            break;
        }
        i += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::Device;

    fn device() -> Device {
        let mut dev = Device::new(212, 104, false).unwrap();
        dev.set_battery_millivolts(4012);
        dev.set_device_id("EPD-CLK");
        dev
    }

    #[test]
    fn pixel_opcode_sets_one_pixel() {
        let mut dev = device();
        apply(&mut dev, &[0x0A, 10, 20, 0]);
        assert_eq!(dev.canvas.pixel(10, 20), Some(false));
        assert_eq!(dev.canvas.pixel(11, 20), Some(true));
    }

    #[test]
    fn box_opcode_matches_direct_fill() {
        let mut dev = device();
        let mut reference = device();

        apply(&mut dev, &[0x0D, 4, 5, 20, 15, 0]);
        reference.canvas.fill_rect(4, 5, 20, 15, Color::Black);

        assert_eq!(dev.planes(), reference.planes());
    }

    #[test]
    fn line_rect_and_triangle_match_direct_calls() {
        let mut dev = device();
        let mut reference = device();

        apply(&mut dev, &[0x0B, 0, 0, 30, 12, 0]);
        apply(&mut dev, &[0x0C, 40, 2, 60, 22, 0]);
        apply(&mut dev, &[0x1A, 5, 40, 45, 42, 20, 60, 0, 1]);

        reference.canvas.line(0, 0, 30, 12, Color::Black);
        reference.canvas.rect(40, 2, 60, 22, Color::Black);
        reference.canvas.triangle(5, 40, 45, 42, 20, 60, Color::Black);

        assert_eq!(dev.planes(), reference.planes());
    }

    #[test]
    fn triangle_fill_flag_is_ignored() {
        let mut filled = device();
        let mut outline = device();

        apply(&mut filled, &[0x1A, 5, 40, 45, 42, 20, 60, 0, 1]);
        apply(&mut outline, &[0x1A, 5, 40, 45, 42, 20, 60, 0, 0]);

        assert_eq!(filled.planes(), outline.planes());
    }

    #[test]
    fn invalid_color_selector_skips_the_op() {
        let mut dev = device();
        apply(&mut dev, &[0x0A, 10, 20, 9]);
        assert_eq!(dev.canvas.pixel(10, 20), Some(true));
    }

    #[test]
    fn unknown_opcode_is_ignored() {
        let mut dev = device();
        let before: heapless::Vec<u8, 4736> =
            heapless::Vec::from_slice(dev.planes().0).unwrap();
        apply(&mut dev, &[0x42, 1, 2, 3, 4]);
        assert_eq!(dev.planes().0, &before[..]);
    }

    #[test]
    fn text_opcode_draws_scaled_text() {
        let mut dev = device();
        let mut reference = device();

        let mut buf = [0u8; 16];
        buf[0] = 0x0E;
        buf[1] = 8;
        buf[2] = 10;
        buf[3] = 2; // scale
        buf[4] = 0; // black
        buf[5] = 0; // not filled
        buf[6..8].copy_from_slice(b"42");

        apply(&mut dev, &buf);

        reference.fonts.set_scale(2);
        reference
            .fonts
            .draw_text(&mut reference.canvas, 8, 10, "42", Color::Black);

        assert_eq!(dev.planes(), reference.planes());
    }

    #[test]
    fn tiled_bitmap_places_blocks_by_index() {
        let mut dev = device();

        // 8x2 tile at tile index (1, 0): lands at x = 4 + 8, y = 6.
        let mut buf = [0u8; 12];
        buf[..7].copy_from_slice(&[0x0F, 4, 6, 1, 0, 8, 2]);
        buf[7] = 0xFF;
        buf[8] = 0x81;
        apply(&mut dev, &buf);

        for x in 12..20 {
            assert_eq!(dev.canvas.pixel(x, 6), Some(false), "x={x}");
        }
        assert_eq!(dev.canvas.pixel(12, 7), Some(false));
        assert_eq!(dev.canvas.pixel(13, 7), Some(true));
        assert_eq!(dev.canvas.pixel(19, 7), Some(false));
    }

    #[test]
    fn oversized_buffers_are_truncated_not_rejected() {
        let mut dev = device();
        let mut buf = [0u8; 200];
        buf[0] = 0x0A;
        buf[1] = 3;
        buf[2] = 3;
        apply(&mut dev, &buf);
        assert_eq!(dev.canvas.pixel(3, 3), Some(false));
    }

    #[test]
    fn battery_placeholder_expands_to_voltage() {
        let dev = device();
        let out = substitute(b"U=$[U]", &dev);
        assert_eq!(&out[..], b"U=4.012V");
    }

    #[test]
    fn device_id_placeholder_expands() {
        let dev = device();
        let out = substitute(b"$[B]!", &dev);
        assert_eq!(&out[..], b"EPD-CLK!");
    }

    #[test]
    fn unknown_key_becomes_bracketed_literal() {
        let dev = device();
        let out = substitute(b"$[XY]", &dev);
        assert_eq!(&out[..], b"[XY]");
    }

    #[test]
    fn unterminated_marker_passes_through() {
        let dev = device();
        let out = substitute(b"50% $[U", &dev);
        assert_eq!(&out[..], b"50% $[U");
    }

    #[test]
    fn substitution_stops_at_nul() {
        let dev = device();
        let out = substitute(b"ab\0cd", &dev);
        assert_eq!(&out[..], b"ab");
    }
}
