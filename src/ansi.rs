//! Séquences d'échappement ANSI (couleurs et attributs de texte).

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Réinitialise tous les attributs.
pub const NONE_FORMAT: &str = "\x1b[0m";
pub const BLACK: &str = "\x1b[1;30m";
pub const L_BLACK: &str = "\x1b[0;30m";
pub const RED: &str = "\x1b[1;31m";
pub const L_RED: &str = "\x1b[0;31m";
pub const GREEN: &str = "\x1b[1;32m";
pub const L_GREEN: &str = "\x1b[0;32m";
pub const BROWN: &str = "\x1b[1;33m";
pub const YELLOW: &str = "\x1b[1;33m";
pub const BLUE: &str = "\x1b[1;34m";
pub const L_BLUE: &str = "\x1b[0;34m";
pub const PURPLE: &str = "\x1b[1;35m";
pub const L_PURPLE: &str = "\x1b[0;35m";
pub const CYAN: &str = "\x1b[1;36m";
pub const L_CYAN: &str = "\x1b[0;36m";
pub const GRAY: &str = "\x1b[1;37m";
pub const WHITE: &str = "\x1b[1;37m";

pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const BLINK: &str = "\x1b[5m";
pub const REVERSE: &str = "\x1b[7m";
pub const HIDE: &str = "\x1b[8m";
/// Efface l'écran.
pub const CLEAR: &str = "\x1b[2J";
/// Revient en début de ligne et efface la ligne.
pub const CLRLINE: &str = "\r\x1b[K";

/// Couleur ou attribut nommé de la palette.
///
/// `Brown`/`Yellow` et `Gray`/`White` partagent le même code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    None,
    Black,
    LightBlack,
    Red,
    LightRed,
    Green,
    LightGreen,
    Brown,
    Yellow,
    Blue,
    LightBlue,
    Purple,
    LightPurple,
    Cyan,
    LightCyan,
    Gray,
    White,
    Bold,
    Underline,
    Blink,
    Reverse,
    Hide,
}

impl Color {
    /// Toutes les entrées de la palette, dans l'ordre d'affichage.
    pub const ALL: &'static [Color] = &[
        Color::None,
        Color::Black,
        Color::LightBlack,
        Color::Red,
        Color::LightRed,
        Color::Green,
        Color::LightGreen,
        Color::Brown,
        Color::Yellow,
        Color::Blue,
        Color::LightBlue,
        Color::Purple,
        Color::LightPurple,
        Color::Cyan,
        Color::LightCyan,
        Color::Gray,
        Color::White,
        Color::Bold,
        Color::Underline,
        Color::Blink,
        Color::Reverse,
        Color::Hide,
    ];

    /// Séquence d'échappement associée.
    pub fn code(self) -> &'static str {
        match self {
            Color::None => NONE_FORMAT,
            Color::Black => BLACK,
            Color::LightBlack => L_BLACK,
            Color::Red => RED,
            Color::LightRed => L_RED,
            Color::Green => GREEN,
            Color::LightGreen => L_GREEN,
            Color::Brown => BROWN,
            Color::Yellow => YELLOW,
            Color::Blue => BLUE,
            Color::LightBlue => L_BLUE,
            Color::Purple => PURPLE,
            Color::LightPurple => L_PURPLE,
            Color::Cyan => CYAN,
            Color::LightCyan => L_CYAN,
            Color::Gray => GRAY,
            Color::White => WHITE,
            Color::Bold => BOLD,
            Color::Underline => UNDERLINE,
            Color::Blink => BLINK,
            Color::Reverse => REVERSE,
            Color::Hide => HIDE,
        }
    }

    /// Nom canonique (celui accepté par `FromStr` et affiché par `Display`).
    pub fn name(self) -> &'static str {
        match self {
            Color::None => "none",
            Color::Black => "black",
            Color::LightBlack => "light-black",
            Color::Red => "red",
            Color::LightRed => "light-red",
            Color::Green => "green",
            Color::LightGreen => "light-green",
            Color::Brown => "brown",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::LightBlue => "light-blue",
            Color::Purple => "purple",
            Color::LightPurple => "light-purple",
            Color::Cyan => "cyan",
            Color::LightCyan => "light-cyan",
            Color::Gray => "gray",
            Color::White => "white",
            Color::Bold => "bold",
            Color::Underline => "underline",
            Color::Blink => "blink",
            Color::Reverse => "reverse",
            Color::Hide => "hide",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl AsRef<str> for Color {
    fn as_ref(&self) -> &str {
        self.code()
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // Accepte aussi les noms de macros du header ("L_RED", "NONE_FORMAT").
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let normalized = match normalized.strip_prefix("l-") {
            Some(rest) => format!("light-{rest}"),
            None => normalized,
        };

        let color = match normalized.as_str() {
            "none" | "none-format" | "reset" => Color::None,
            "grey" => Color::Gray,
            "magenta" => Color::Purple,
            "light-magenta" => Color::LightPurple,
            other => Color::ALL
                .iter()
                .copied()
                .find(|c| c.name() == other)
                .ok_or_else(|| Error::UnknownColor(s.to_string()))?,
        };

        Ok(color)
    }
}

/// Entoure `text` de `code` puis d'un reset.
pub fn paint(code: &str, text: impl fmt::Display) -> String {
    format!("{code}{text}{NONE_FORMAT}")
}

/// Retire les séquences `ESC [ ... <lettre>` d'une chaîne.
pub fn strip(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Paramètres puis lettre finale.
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_header_values() {
        assert_eq!(NONE_FORMAT, "\u{1b}[0m");
        assert_eq!(RED, "\u{1b}[1;31m");
        assert_eq!(L_RED, "\u{1b}[0;31m");
        assert_eq!(BLUE, "\u{1b}[1;34m");
        assert_eq!(GREEN, "\u{1b}[1;32m");
        assert_eq!(CLRLINE, "\r\u{1b}[K");
    }

    #[test]
    fn test_aliases_share_codes() {
        assert_eq!(BROWN, YELLOW);
        assert_eq!(GRAY, WHITE);
        assert_eq!(Color::Brown.code(), Color::Yellow.code());
    }

    #[test]
    fn test_color_name_round_trip() {
        for color in Color::ALL {
            let parsed: Color = color.to_string().parse().unwrap();
            assert_eq!(parsed, *color);
        }
    }

    #[test]
    fn test_color_parse_header_names() {
        assert_eq!("L_RED".parse::<Color>().unwrap(), Color::LightRed);
        assert_eq!("NONE_FORMAT".parse::<Color>().unwrap(), Color::None);
        assert_eq!(" Green ".parse::<Color>().unwrap(), Color::Green);
        assert_eq!("grey".parse::<Color>().unwrap(), Color::Gray);
    }

    #[test]
    fn test_color_parse_unknown() {
        let err = "chartreuse".parse::<Color>().unwrap_err();
        assert!(matches!(err, Error::UnknownColor(ref name) if name == "chartreuse"));
    }

    #[test]
    fn test_paint_and_strip() {
        let painted = paint(GREEN, "ok");
        assert_eq!(painted, "\u{1b}[1;32mok\u{1b}[0m");
        assert_eq!(strip(&painted), "ok");
        assert_eq!(paint(RED, format_args!("{} erreurs", 2)), "\u{1b}[1;31m2 erreurs\u{1b}[0m");
        assert_eq!(strip("[ a.rs: 1 ]\u{1b}[1;31m [ERROR] x\u{1b}[0m"), "[ a.rs: 1 ] [ERROR] x");
        assert_eq!(strip("sans couleur"), "sans couleur");
    }
}
