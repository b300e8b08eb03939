//! Color strings to RGBA.

use peniko::Color;
use peniko::color::{Srgb, parse_color};

/// 8-bit straight-alpha RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Parse a CSS color: hex (`#rgb`, `#rrggbb`, `#rrggbbaa`), named colors,
/// `transparent` and the functional notations.
pub fn parse(s: &str) -> Option<Rgba> {
    parse_color(s.trim())
        .ok()
        .map(|c| Rgba::from(c.to_alpha_color::<Srgb>()))
}

/// Resolve a border or text color. Unparseable strings paint black.
pub fn resolve_stroke(s: &str) -> Rgba {
    parse(s).unwrap_or_else(|| {
        log::warn!("Invalid color {:?}, using black", s);
        Rgba::BLACK
    })
}

/// Resolve a fill color. Unparseable strings leave the interior unpainted.
pub fn resolve_fill(s: &str) -> Rgba {
    parse(s).unwrap_or_else(|| {
        log::warn!("Invalid fill color {:?}, leaving shape unfilled", s);
        Rgba::TRANSPARENT
    })
}
