/// Stroke colors and their string forms
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    character::complete::{char, digit1, multispace0},
    combinator::{all_consuming, map, map_res},
    sequence::{delimited, preceded, tuple},
    IResult,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ColorParseError;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`, `#rgb` or `rgb(r, g, b)`
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        match all_consuming(delimited(multispace0, color, multispace0))(input) {
            Ok((_, color)) => Ok(color),
            Err(_) => Err(ColorParseError(input.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

fn color(input: &str) -> IResult<&str, Color> {
    alt((long_hex, short_hex, functional))(input)
}

fn hex_digits<'a>(count: usize) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    take_while_m_n(count, count, |c: char| c.is_ascii_hexdigit())
}

fn long_hex(input: &str) -> IResult<&str, Color> {
    let channel = || map_res(hex_digits(2), |s| u8::from_str_radix(s, 16));
    let (input, (r, g, b)) = preceded(char('#'), tuple((channel(), channel(), channel())))(input)?;
    Ok((input, Color::new(r, g, b)))
}

fn short_hex(input: &str) -> IResult<&str, Color> {
    // #abc is shorthand for #aabbcc
    let channel = || map_res(hex_digits(1), |s| u8::from_str_radix(s, 16).map(|v| v * 17));
    let (input, (r, g, b)) = preceded(char('#'), tuple((channel(), channel(), channel())))(input)?;
    Ok((input, Color::new(r, g, b)))
}

fn functional(input: &str) -> IResult<&str, Color> {
    let channel = || delimited(multispace0, map_res(digit1, str::parse::<u8>), multispace0);
    map(
        delimited(
            tuple((tag("rgb"), multispace0, char('('))),
            tuple((channel(), preceded(char(','), channel()), preceded(char(','), channel()))),
            char(')'),
        ),
        |(r, g, b)| Color::new(r, g, b),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_black() {
        assert_eq!(Color::default(), Color::BLACK);
        assert_eq!(Color::default().to_string(), "#000000");
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Color::parse("#ff8000").unwrap(), Color::new(255, 128, 0));
        assert_eq!(Color::parse("#FF8000").unwrap(), Color::new(255, 128, 0));
        assert_eq!(Color::parse("#f80").unwrap(), Color::new(255, 136, 0));
        assert_eq!(Color::parse("  #000000 ").unwrap(), Color::BLACK);
    }

    #[test]
    fn test_parse_functional() {
        assert_eq!(Color::parse("rgb(12, 34, 56)").unwrap(), Color::new(12, 34, 56));
        assert_eq!(Color::parse("rgb(255,255,255)").unwrap(), Color::WHITE);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let inputs = [
            "", "#12", "#12345", "#1234567", "#gggggg", "red", "rgb(1, 2)", "rgb(256, 0, 0)",
        ];
        for input in inputs {
            assert_eq!(Color::parse(input), Err(ColorParseError(input.to_string())), "{input}");
        }
    }

    #[test]
    fn test_display_round_trips() {
        let color = Color::new(1, 171, 255);
        assert_eq!(color.to_string(), "#01abff");
        assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
    }

    #[test]
    fn test_serde_as_string() {
        #[derive(Serialize, Deserialize)]
        struct Holder {
            color: Color,
        }

        let holder: Holder = toml::from_str("color = \"#102030\"").unwrap();
        assert_eq!(holder.color, Color::new(16, 32, 48));
        assert!(toml::to_string(&holder).unwrap().contains("#102030"));
        assert!(toml::from_str::<Holder>("color = \"nope\"").is_err());
    }
}
