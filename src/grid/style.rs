//! Draw styles

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PaintError;

/// Which store variant every cell of a grid uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DrawStyle {
    #[default]
    Set,
    Additive,
    Sequence,
}

impl DrawStyle {
    pub const ALL: [DrawStyle; 3] = [DrawStyle::Set, DrawStyle::Additive, DrawStyle::Sequence];

    /// Canonical name ("SET", "ADD", "SEQUENCE")
    pub fn as_str(self) -> &'static str {
        match self {
            DrawStyle::Set => "SET",
            DrawStyle::Additive => "ADD",
            DrawStyle::Sequence => "SEQUENCE",
        }
    }

    /// Style selected after this one when cycling draw modes
    pub fn next(self) -> Self {
        match self {
            DrawStyle::Set => DrawStyle::Additive,
            DrawStyle::Additive => DrawStyle::Sequence,
            DrawStyle::Sequence => DrawStyle::Set,
        }
    }

    /// Whether calling `special` twice on a cell restores it
    pub fn special_is_involution(self) -> bool {
        !matches!(self, DrawStyle::Sequence)
    }
}

impl fmt::Display for DrawStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DrawStyle {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SET" => Ok(DrawStyle::Set),
            "ADD" | "ADDITIVE" => Ok(DrawStyle::Additive),
            "SEQUENCE" | "SEQ" => Ok(DrawStyle::Sequence),
            _ => Err(PaintError::UnknownDrawStyle {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for DrawStyle {
    type Error = PaintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DrawStyle> for String {
    fn from(style: DrawStyle) -> Self {
        style.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("SET".parse::<DrawStyle>().unwrap(), DrawStyle::Set);
        assert_eq!("add".parse::<DrawStyle>().unwrap(), DrawStyle::Additive);
        assert_eq!(" Sequence ".parse::<DrawStyle>().unwrap(), DrawStyle::Sequence);

        let err = "SPRAY".parse::<DrawStyle>().unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_DRAW_STYLE");
    }

    #[test]
    fn test_cycle_visits_all() {
        let mut style = DrawStyle::Set;
        for expected in [DrawStyle::Additive, DrawStyle::Sequence, DrawStyle::Set] {
            style = style.next();
            assert_eq!(style, expected);
        }
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&DrawStyle::Additive).unwrap();
        assert_eq!(json, "\"ADD\"");
        let back: DrawStyle = serde_json::from_str("\"sequence\"").unwrap();
        assert_eq!(back, DrawStyle::Sequence);
        assert!(serde_json::from_str::<DrawStyle>("\"blur\"").is_err());
    }
}
