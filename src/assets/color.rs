use crate::foundation::core::Rgba8;
use serde::{Deserialize, Serialize};

/// Color as written in render options.
///
/// Accepts a CSS color name (`"red"`), `"#RRGGBB"` / `"#RRGGBBAA"` hex, an `{r, g, b, a}` object
/// with 0..=255 channels, or a `[r, g, b]` / `[r, g, b, a]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "[u8; 4]")]
pub struct ColorSpec(pub Rgba8);

impl From<ColorSpec> for [u8; 4] {
    fn from(c: ColorSpec) -> Self {
        [c.0.r, c.0.g, c.0.b, c.0.a]
    }
}

impl From<Rgba8> for ColorSpec {
    fn from(c: Rgba8) -> Self {
        Self(c)
    }
}

impl<'de> Deserialize<'de> for ColorSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Str(String),
            RgbaObj {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "opaque")]
                a: u8,
            },
            Arr(Vec<u8>),
        }

        fn opaque() -> u8 {
            255
        }

        match Repr::deserialize(deserializer)? {
            Repr::Str(s) => parse_color(&s).map(Self).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self(Rgba8::rgba(r, g, b, a))),
            Repr::Arr(v) => match v.as_slice() {
                &[r, g, b] => Ok(Self(Rgba8::rgb(r, g, b))),
                &[r, g, b, a] => Ok(Self(Rgba8::rgba(r, g, b, a))),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

/// Parse a color name or hex string.
pub fn parse_color(s: &str) -> Result<Rgba8, String> {
    let s = s.trim();
    if s.starts_with('#') {
        return parse_hex(s);
    }
    named_color(s).ok_or_else(|| format!("unknown color name \"{s}\""))
}

/// Look up a CSS color name (case-insensitive).
pub fn named_color(name: &str) -> Option<Rgba8> {
    let c = match name.to_ascii_lowercase().as_str() {
        "red" => Rgba8::rgb(255, 0, 0),
        "blue" => Rgba8::rgb(0, 0, 255),
        "green" => Rgba8::rgb(0, 128, 0),
        "orange" => Rgba8::rgb(255, 165, 0),
        "purple" => Rgba8::rgb(128, 0, 128),
        "cyan" | "aqua" => Rgba8::rgb(0, 255, 255),
        "magenta" | "fuchsia" => Rgba8::rgb(255, 0, 255),
        "yellow" => Rgba8::rgb(255, 255, 0),
        "white" => Rgba8::rgb(255, 255, 255),
        "black" => Rgba8::rgb(0, 0, 0),
        "gray" | "grey" => Rgba8::rgb(128, 128, 128),
        "lime" => Rgba8::rgb(0, 255, 0),
        "navy" => Rgba8::rgb(0, 0, 128),
        "teal" => Rgba8::rgb(0, 128, 128),
        "maroon" => Rgba8::rgb(128, 0, 0),
        "pink" => Rgba8::rgb(255, 192, 203),
        "brown" => Rgba8::rgb(165, 42, 42),
        _ => return None,
    };
    Some(c)
}

fn parse_hex(s: &str) -> Result<Rgba8, String> {
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    match s.len() {
        6 => Ok(Rgba8::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Rgba8::rgba(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}
