//! mIRC color codes and the palette used to decorate bot output.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::fmt;


/// Resets all color and formatting.
pub const NORMAL: char = '\x0f';
const COLOR: char = '\x03';

lazy_static! {
    static ref COLOR_SEQUENCE: Regex = Regex::new(r"\x0f|\x03(?:[0-9]{2})?").unwrap();
}

/// Removes every reset byte and every color byte along with its optional two digit code.
pub fn strip_colors(input: &str) -> String {
    COLOR_SEQUENCE.replace_all(input, "").into_owned()
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum IrcColor {
    White = 0,
    Black = 1,
    DarkBlue = 2,
    DarkGreen = 3,
    Red = 4,
    Brown = 5,
    Purple = 6,
    Olive = 7,
    Yellow = 8,
    Green = 9,
    Teal = 10,
    Cyan = 11,
    Blue = 12,
    Magenta = 13,
    DarkGray = 14,
    LightGray = 15,
}

impl IrcColor {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for IrcColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{:02}", COLOR, self.code())
    }
}

/// Which color each kind of output fragment gets.
///
/// Handed to commands and to the connection layer instead of global constants,
/// so a network without color support can turn it all off in one place.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub enabled: bool,
    pub name: IrcColor,
    pub value: IrcColor,
    pub error: IrcColor,
    pub link: IrcColor,
    pub usage: IrcColor,
    pub syntax: IrcColor,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            enabled: true,
            name: IrcColor::Blue,
            value: IrcColor::Olive,
            error: IrcColor::Red,
            link: IrcColor::DarkBlue,
            usage: IrcColor::Olive,
            syntax: IrcColor::Blue,
        }
    }
}

impl Palette {
    /// Final pass over an outgoing line.
    pub fn render(&self, text: &str) -> String {
        if self.enabled {
            text.to_owned()
        } else {
            strip_colors(text)
        }
    }
}
