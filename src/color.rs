//! RGBA color values and their validation and text encodings.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{Result, ScribeError};

/// Straight-alpha RGBA color with one byte per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn components(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// `#rrggbbaa`, lowercase.
    pub fn encode(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl From<Color> for (u8, u8, u8, u8) {
    fn from(color: Color) -> Self {
        (color.r, color.g, color.b, color.a)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Integer primitives accepted as color channels. Sealed so that `bool` and
/// `char`, which also convert to `u8`, cannot be passed as components.
pub trait ColorComponent: sealed::Sealed + Copy + fmt::Debug {
    /// `None` when the value is outside `0..=255`.
    fn to_channel(self) -> Option<u8>;
}

macro_rules! color_component {
    ($($ty:ty),*) => {
        $(impl sealed::Sealed for $ty {}

        impl ColorComponent for $ty {
            fn to_channel(self) -> Option<u8> {
                u8::try_from(self).ok()
            }
        })*
    };
}

color_component!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Checks that `components` holds exactly four integers in `0..=255`.
///
/// Out-of-range values are rejected, never clamped. Only integer types are
/// accepted:
///
/// ```compile_fail
/// scribe::validate_and_normalize(&[true, false, true, true]);
/// ```
///
/// ```compile_fail
/// scribe::validate_and_normalize(&['a', 'b', 'c', 'd']);
/// ```
pub fn validate_and_normalize<T: ColorComponent>(components: &[T]) -> Result<Color> {
    let invalid = || ScribeError::InvalidColor(format!("{components:?}"));
    let [r, g, b, a] = components else {
        return Err(invalid());
    };
    let channel = |value: T| value.to_channel().ok_or_else(invalid);
    Ok(Color::rgba(channel(*r)?, channel(*g)?, channel(*b)?, channel(*a)?))
}

/// Same check as [`validate_and_normalize`] for untyped input such as a
/// drawing script. Floats, strings and booleans count as non-integers, so
/// `[1.0, 0, 0, 0]` is rejected.
pub fn validate_json(components: &[Value]) -> Result<Color> {
    let invalid = || ScribeError::InvalidColor(Value::Array(components.to_vec()).to_string());
    let mut channels = Vec::with_capacity(components.len());
    for value in components {
        let channel = value.as_i64().ok_or_else(invalid)?;
        channels.push(channel);
    }
    validate_and_normalize(&channels).map_err(|_| invalid())
}

impl FromStr for Color {
    type Err = ScribeError;

    /// Parses `#rrggbbaa` or `#rrggbb` (alpha 255), case-insensitive.
    fn from_str(input: &str) -> Result<Self> {
        let invalid = || ScribeError::InvalidColor(format!("{input:?}"));
        let hex = input.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() || !matches!(hex.len(), 6 | 8) {
            return Err(invalid());
        }
        let channel = |idx: usize| {
            hex.get(idx * 2..idx * 2 + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(invalid)
        };
        let alpha = if hex.len() == 8 { channel(3)? } else { 255 };
        Ok(Color::rgba(channel(0)?, channel(1)?, channel(2)?, alpha))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_channels_in_range() {
        let color = validate_and_normalize(&[0, 128, 255, 7]).unwrap();
        assert_eq!(color.components(), [0, 128, 255, 7]);
        let color = validate_and_normalize(&[255u16, 255, 255, 255]).unwrap();
        assert_eq!(color, Color::rgba(255, 255, 255, 255));
    }

    #[test]
    fn rejects_wrong_arity() {
        assert!(matches!(
            validate_and_normalize(&[0, 0, 0]),
            Err(ScribeError::InvalidColor(_))
        ));
        assert!(matches!(
            validate_and_normalize(&[0, 0, 0, 0, 0]),
            Err(ScribeError::InvalidColor(_))
        ));
        assert!(validate_and_normalize::<i32>(&[]).is_err());
    }

    #[test]
    fn every_integer_width_is_a_component() {
        assert_eq!(validate_and_normalize(&[1i8, 2, 3, 4]).unwrap(), Color::rgba(1, 2, 3, 4));
        assert_eq!(validate_and_normalize(&[1u64, 2, 3, 4]).unwrap(), Color::rgba(1, 2, 3, 4));
        assert_eq!(validate_and_normalize(&[1usize, 2, 3, 4]).unwrap(), Color::rgba(1, 2, 3, 4));
        assert!(validate_and_normalize(&[1i128, 2, 3, -4]).is_err());
        assert!(validate_and_normalize(&[1u128, 2, 3, 256]).is_err());
        assert_eq!(255isize.to_channel(), Some(255));
        assert_eq!((-1i16).to_channel(), None);
    }

    #[test]
    fn rejects_out_of_range_without_clamping() {
        assert!(validate_and_normalize(&[256, 0, 0, 0]).is_err());
        assert!(validate_and_normalize(&[0, -1, 0, 0]).is_err());
        assert!(validate_and_normalize(&[0, 0, 0, i64::MAX]).is_err());
    }

    #[test]
    fn json_components_must_be_integers() {
        let ok = [json!(1), json!(2), json!(3), json!(4)];
        assert_eq!(validate_json(&ok).unwrap(), Color::rgba(1, 2, 3, 4));

        let float = [json!(1.0), json!(2), json!(3), json!(4)];
        let err = validate_json(&float).unwrap_err();
        assert!(matches!(err, ScribeError::InvalidColor(_)));
        assert!(err.to_string().contains("[1.0,2,3,4]"));

        let text = [json!("1"), json!(2), json!(3), json!(4)];
        assert!(validate_json(&text).is_err());
        let boolean = [json!(true), json!(2), json!(3), json!(4)];
        assert!(validate_json(&boolean).is_err());
        let short = [json!(1), json!(2)];
        assert!(validate_json(&short).is_err());
    }

    #[test]
    fn encodes_lowercase_zero_padded_rgba() {
        assert_eq!(Color::TRANSPARENT.encode(), "#00000000");
        assert_eq!(Color::rgba(255, 10, 0, 171).encode(), "#ff0a00ab");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_string(), "#01020304");
    }

    #[test]
    fn parses_hex_strings() {
        assert_eq!("#FF0A00AB".parse::<Color>().unwrap(), Color::rgba(255, 10, 0, 171));
        assert_eq!("#336699".parse::<Color>().unwrap(), Color::rgba(0x33, 0x66, 0x99, 255));
        assert!("336699".parse::<Color>().is_err());
        assert!("#12345".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
    }
}
