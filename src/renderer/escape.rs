//! Inline SGR escape decoding.
//!
//! Documents served as plain text sometimes carry raw `ESC [ ... m`
//! runs (man pages piped through `ul`, ANSI art, colorized logs). The
//! decoder applies them to the rendering template so the colors
//! survive into the cell grid.

use crate::color::Color;
use crate::style::{Style, TextAttributes};

const ESC: u8 = 0x1b;

/// Parse one numeric parameter field.
///
/// An empty or unparsable field (`?`-prefixed private parameters
/// included) decodes as 0 and therefore acts as a reset, which falls
/// the foreground back to palette index 7. Values wrap at 256 like the
/// original `strtol`-into-byte parsing this emulates.
fn field_value(field: &[u8]) -> u8 {
    let mut value = 0u32;
    for &b in field {
        if !b.is_ascii_digit() {
            return 0;
        }
        value = (value * 10 + u32::from(b - b'0')) & 0xff;
    }
    value as u8
}

/// Decode one escape run starting at `input[0] == ESC`.
///
/// Consumes the run and applies a trailing-`m` SGR parameter list to
/// the template. `l`/`h` terminated runs (mode set/reset) are consumed
/// but ignored. Malformed runs consume the ESC plus one byte and leave
/// the template untouched. Returns the number of bytes consumed.
pub(super) fn decode_sgr(input: &[u8], template: &mut Style, reversed: &mut bool) -> usize {
    debug_assert_eq!(input.first(), Some(&ESC));
    if input.len() < 2 || input[1] != b'[' {
        return input.len().min(2);
    }

    let params = &input[2..];
    let mut k = 0;
    while k < params.len() && matches!(params[k], b'0'..=b'9' | b';' | b'?') {
        k += 1;
    }
    // ESC, '[', the parameter run, and the final byte
    let consumed = (2 + k + 1).min(input.len());
    if k == 0 || params.get(k) != Some(&b'm') {
        return consumed;
    }

    // 16-color view of the current template, the base the parameters
    // mutate
    let f1 = template.fg.to_ansi16();
    let b1 = template.bg.to_ansi16() & 7;
    let mut foreground = f1;
    let mut background = b1;
    let mut fg256 = f1;
    let mut bg256 = b1;
    let mut fore = template.fg;
    let mut back = template.bg;
    let mut was_24 = false;
    let mut was_256 = false;
    let mut was_foreground = 0u8;
    let mut was_background = 0u8;
    let mut bold: Option<bool> = None;

    for field in params[..k].split(|&b| b == b';') {
        let kod = field_value(field);

        if was_background != 0 {
            match was_background {
                1 => {
                    was_background = match kod {
                        2 => 2,
                        5 => 5,
                        _ => 0,
                    };
                }
                2 => {
                    back.r = kod;
                    was_background = 3;
                }
                3 => {
                    back.g = kod;
                    was_background = 4;
                }
                4 => {
                    back.b = kod;
                    was_background = 0;
                    was_24 = true;
                }
                _ => {
                    bg256 = kod;
                    was_background = 0;
                    was_256 = true;
                }
            }
            continue;
        }

        if was_foreground != 0 {
            match was_foreground {
                1 => {
                    was_foreground = match kod {
                        2 => 2,
                        5 => 5,
                        _ => 0,
                    };
                }
                2 => {
                    fore.r = kod;
                    was_foreground = 3;
                }
                3 => {
                    fore.g = kod;
                    was_foreground = 4;
                }
                4 => {
                    fore.b = kod;
                    was_foreground = 0;
                    was_24 = true;
                }
                _ => {
                    fg256 = kod;
                    was_foreground = 0;
                    was_256 = true;
                }
            }
            continue;
        }

        match kod {
            0 => {
                background = 0;
                foreground = 7;
                back = Color::BLACK;
                fore = Color::WHITE;
                bold = Some(false);
            }
            1 => bold = Some(true),
            7 => {
                if !*reversed {
                    background = f1 & 7;
                    foreground = b1;
                    *reversed = true;
                }
            }
            27 => {
                if *reversed {
                    background = f1 & 7;
                    foreground = b1;
                    *reversed = false;
                }
            }
            30..=37 => foreground = kod - 30,
            38 => was_foreground = 1,
            40..=47 => background = kod - 40,
            48 => was_background = 1,
            _ => {}
        }
    }

    let (mut fg, mut bg) = if was_256 {
        (Color::ansi256(fg256), Color::ansi256(bg256))
    } else {
        (Color::ansi(foreground), Color::ansi(background))
    };
    if was_24 {
        fg = fore;
        bg = back;
    }
    template.fg = fg;
    template.bg = bg;
    match bold {
        Some(true) => template.attributes.insert(TextAttributes::BOLD),
        Some(false) => template.attributes.remove(TextAttributes::BOLD),
        None => {}
    }

    consumed
}
