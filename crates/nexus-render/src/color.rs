//! Color constants and helpers for the draw list.

use serde::Serialize;

/// An RGBA color; channels are bytes, alpha is a unit float so fades can
/// be expressed without quantization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Parse a `#rrggbb` hex string; malformed input falls back to white
    /// rather than failing a frame.
    pub fn from_hex(hex: &str) -> Self {
        let parse = |s: &str| u8::from_str_radix(s, 16).ok();
        let parsed = hex.strip_prefix('#').and_then(|h| {
            if h.len() != 6 {
                return None;
            }
            Some(Rgba::rgb(parse(&h[0..2])?, parse(&h[2..4])?, parse(&h[4..6])?))
        });
        parsed.unwrap_or(WHITE)
    }
}

pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
pub const BACKGROUND: Rgba = Rgba::rgb(10, 14, 26);

/// Division accents.
pub const DIV_HQ: Rgba = Rgba::rgb(0xff, 0x6b, 0x6b);
pub const DIV_NA: Rgba = Rgba::rgb(0x4e, 0xcd, 0xc4);
pub const DIV_EMEA: Rgba = Rgba::rgb(0xff, 0xe6, 0x6d);
pub const DIV_APAC: Rgba = Rgba::rgb(0xa8, 0xe6, 0xcf);

/// Agent node fill and its highlighted variant.
pub const AGENT: Rgba = Rgba::rgb(0x06, 0xb6, 0xd4);
pub const AGENT_ACTIVE: Rgba = Rgba::rgb(0x22, 0xd3, 0xee);

/// Edge defaults by interaction class.
pub const EDGE_HUMAN_HUMAN: Rgba = Rgba::rgb(100, 116, 139);
pub const EDGE_HUMAN_AI: Rgba = Rgba::rgb(56, 189, 248);
pub const EDGE_AI_AI: Rgba = Rgba::rgb(167, 139, 250);

/// Scenario states.
pub const HIGHLIGHT: Rgba = Rgba::rgb(0xff, 0xe6, 0x6d);
pub const REMOVED: Rgba = Rgba::rgb(71, 85, 105);
pub const CORRECTED: Rgba = Rgba::rgb(34, 197, 94);
pub const WHATIF_ORANGE: Rgba = Rgba::rgb(249, 115, 22);

/// Feedback flash strokes.
pub const FLASH_USEFUL: Rgba = Rgba::rgb(34, 197, 94);
pub const FLASH_NOT_USEFUL: Rgba = Rgba::rgb(0xff, 0x6b, 0x6b);
pub const FLASH_REQUEST_INFO: Rgba = Rgba::rgb(0x4e, 0xcd, 0xc4);

/// Division accent lookup.
pub fn division(division: nexus_graph::Division) -> Rgba {
    use nexus_graph::Division::*;
    match division {
        Hq => DIV_HQ,
        Na => DIV_NA,
        Emea => DIV_EMEA,
        Apac => DIV_APAC,
    }
}
