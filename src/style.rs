//! Matplotlib style tokens such as `"bo"` (blue circles) or `"r^"`
//! (red triangles).

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};
use thiserror::Error;

const COLORS: &str = "bgrcmykw";
const MARKERS: &str = ".,ov^<>12348spP*hH+xXDd|_";
const LINES: [&str; 4] = ["--", "-.", "-", ":"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("unknown character {0:?} in style token")]
    Unknown(char),
    #[error("style token {token:?} has more than one {what}")]
    Duplicate { token: String, what: &'static str },
}

/// Marker used for the points of a series whose style names none.
pub const DEFAULT_MARKER: char = 'o';

/// A parsed style token.  The token is kept verbatim for display; the
/// markers of a path are drawn with [`Style::marker_format`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Style {
    token: String,
    color: Option<String>,
    marker: Option<char>,
    line: Option<&'static str>,
}

impl Style {
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Color code, if any: a single letter such as `"b"` or a color
    /// cycle reference such as `"C1"`.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn marker(&self) -> Option<char> {
        self.marker
    }

    pub fn line(&self) -> Option<&'static str> {
        self.line
    }

    /// Format string drawing only the markers of a series: the color
    /// and marker of the token, without its line style.  Points are
    /// joined by arrows, never by the marker call.
    pub fn marker_format(&self) -> String {
        let mut fmt = self.color.clone().unwrap_or_default();
        fmt.push(self.marker.unwrap_or(DEFAULT_MARKER));
        fmt
    }
}

impl FromStr for Style {
    type Err = StyleError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let duplicate = |what| StyleError::Duplicate {
            token: token.to_owned(),
            what,
        };
        let mut style = Style { token: token.to_owned(), ..Style::default() };
        let mut rest = token;
        while let Some(c) = rest.chars().next() {
            // "--" and "-." before "-".
            if let Some(l) = LINES.iter().find(|l| rest.starts_with(**l)) {
                if style.line.replace(*l).is_some() {
                    return Err(duplicate("line style"));
                }
                rest = &rest[l.len()..];
                continue;
            }
            // Color cycle references: "C0" .. "C9".
            let cycle = rest.strip_prefix('C')
                .and_then(|r| r.chars().next())
                .filter(char::is_ascii_digit);
            if let Some(d) = cycle {
                if style.color.replace(format!("C{d}")).is_some() {
                    return Err(duplicate("color"));
                }
                rest = &rest[2..];
                continue;
            }
            if COLORS.contains(c) {
                if style.color.replace(c.to_string()).is_some() {
                    return Err(duplicate("color"));
                }
            } else if MARKERS.contains(c) {
                if style.marker.replace(c).is_some() {
                    return Err(duplicate("marker"));
                }
            } else {
                return Err(StyleError::Unknown(c));
            }
            rest = &rest[c.len_utf8()..];
        }
        Ok(style)
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}
