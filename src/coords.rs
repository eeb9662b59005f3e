//! Reading coordinate sequences from text files.
//!
//! Each non-blank line holds four whitespace separated tokens, e.g.
//!
//! ```text
//! label1 label2 x=1.0 y=2.0
//! ```
//!
//! The first two tokens are ignored; the last two are `label=value`
//! pairs giving the `x` and `y` coordinates of the point.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
    num::ParseFloatError,
    slice,
    str::FromStr,
};
use log::debug;
use thiserror::Error;

/// Errors for a single line of input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("expected 4 tokens, found {found}")]
    TokenCount { found: usize },

    #[error("token {token:?} is not of the form label=value")]
    MissingDelimiter { token: String },

    #[error("invalid number in {token:?}: {source}")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseFloatError,
    },

    /// The line could not be read, e.g. it is not valid UTF-8.
    #[error("unreadable line: {message}")]
    Unreadable { kind: io::ErrorKind, message: String },
}

impl From<io::Error> for ParseError {
    fn from(e: io::Error) -> Self {
        ParseError::Unreadable { kind: e.kind(), message: e.to_string() }
    }
}

/// Errors while reading a whole file.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: {source}")]
    Line {
        /// 1-based line number.
        line: usize,
        #[source]
        source: ParseError,
    },
}

/// A point of the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Coord {
    fn from(value: (f64, f64)) -> Self {
        Coord::new(value.0, value.1)
    }
}

impl From<Coord> for (f64, f64) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

/// Parse the value of a `label=value` token.  The label may have any
/// width; only the part after the first `=` is read.
pub fn parse_labeled(token: &str) -> Result<f64, ParseError> {
    let (_, value) = token.split_once('=').ok_or_else(|| {
        ParseError::MissingDelimiter { token: token.to_owned() }
    })?;
    value.parse().map_err(|source| ParseError::InvalidNumber {
        token: token.to_owned(),
        source,
    })
}

/// Parse one line made of exactly four tokens.
pub fn parse_line(line: &str) -> Result<Coord, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens[..] {
        [_, _, x, y] => Ok(Coord::new(parse_labeled(x)?, parse_labeled(y)?)),
        _ => Err(ParseError::TokenCount { found: tokens.len() }),
    }
}

/// An ordered path of points, in the order they were read.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoordinateSequence {
    points: Vec<Coord>,
}

impl CoordinateSequence {
    /// Read every non-blank line of `reader`.  The first malformed line
    /// aborts the read.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ReadError> {
        let mut points = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let c = line.map_err(ParseError::from).and_then(|line| {
                if line.trim().is_empty() {
                    Ok(None)
                } else {
                    parse_line(&line).map(Some)
                }
            });
            match c {
                Ok(Some(c)) => points.push(c),
                Ok(None) => {}
                Err(source) => return Err(ReadError::Line { line: i + 1, source }),
            }
        }
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Coord> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Coord] {
        &self.points
    }

    pub fn first(&self) -> Option<&Coord> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Coord> {
        self.points.last()
    }

    /// Consecutive pairs of points, i.e. the segments of the path.
    /// Empty when there are fewer than two points.
    pub fn segments(&self) -> impl Iterator<Item = (&Coord, &Coord)> + '_ {
        self.points.windows(2).map(|w| (&w[0], &w[1]))
    }
}

impl FromStr for CoordinateSequence {
    type Err = ReadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}

impl<C: Into<Coord>> FromIterator<C> for CoordinateSequence {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self { points: iter.into_iter().map(Into::into).collect() }
    }
}

impl<'a> IntoIterator for &'a CoordinateSequence {
    type Item = &'a Coord;
    type IntoIter = slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Read the coordinate sequence stored in the file `path`.
pub fn read_coordinates(path: impl AsRef<Path>) -> Result<CoordinateSequence, ReadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReadError::Io {
        path: path.to_owned(),
        source,
    })?;
    let seq = CoordinateSequence::from_reader(BufReader::new(file))?;
    debug!("read {} points from {}", seq.len(), path.display());
    Ok(seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, io::Cursor};

    /// Write `contents` to a fresh directory; return (dir, file).
    fn temp_file(name: &str, contents: &[u8]) -> (PathBuf, PathBuf) {
        let dir = std::env::temp_dir()
            .join(format!("pathplot_{}_{}", std::process::id(), name));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("coordinates.txt");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn labeled_values() {
        assert_eq!(parse_labeled("x=3.5"), Ok(3.5));
        assert_eq!(parse_labeled("y=-2.0"), Ok(-2.0));
        assert_eq!(parse_labeled("lat=48.25"), Ok(48.25));
        assert_eq!(parse_labeled("x=1e3"), Ok(1000.));
    }

    #[test]
    fn labeled_value_errors() {
        assert!(matches!(parse_labeled("3.5"),
                         Err(ParseError::MissingDelimiter { .. })));
        assert!(matches!(parse_labeled("x=abc"),
                         Err(ParseError::InvalidNumber { .. })));
        assert!(matches!(parse_labeled("x="),
                         Err(ParseError::InvalidNumber { .. })));
    }

    #[test]
    fn line_token_count() {
        assert_eq!(parse_line("a b x=1.0 y=2.0"), Ok(Coord::new(1., 2.)));
        assert_eq!(parse_line("a\tb  x=1.0   y=2.0  "), Ok(Coord::new(1., 2.)));
        assert_eq!(parse_line("a x=1.0 y=2.0"),
                   Err(ParseError::TokenCount { found: 3 }));
        assert_eq!(parse_line("a b c x=1.0 y=2.0"),
                   Err(ParseError::TokenCount { found: 5 }));
    }

    #[test]
    fn two_lines() {
        let seq: CoordinateSequence =
            "a b x=0.0 y=0.0\na b x=1.0 y=2.0\n".parse().unwrap();
        let pts: Vec<(f64, f64)> = seq.iter().map(|&c| c.into()).collect();
        assert_eq!(pts, [(0.0, 0.0), (1.0, 2.0)]);
    }

    #[test]
    fn length_is_number_of_non_blank_lines() {
        let input = "\nn0 t x=1 y=1\n   \nn1 t x=2 y=4\nn2 t x=3 y=9\n\n";
        let seq = CoordinateSequence::from_reader(Cursor::new(input)).unwrap();
        assert_eq!(seq.len(), 3);
        let xs: Vec<f64> = seq.iter().map(|c| c.x).collect();
        assert_eq!(xs, [1., 2., 3.]);
        assert_eq!(seq.last(), Some(&Coord::new(3., 9.)));
    }

    #[test]
    fn malformed_line_aborts_read() {
        let input = "a b x=0 y=0\n\na b x=1\na b x=2 y=2\n";
        match input.parse::<CoordinateSequence>() {
            Err(ReadError::Line { line, source }) => {
                assert_eq!(line, 3);
                assert_eq!(source, ParseError::TokenCount { found: 3 });
            }
            r => panic!("expected a line error, got {:?}", r),
        }
    }

    #[test]
    fn segments() {
        let seq: CoordinateSequence =
            [(0., 0.), (1., 1.), (2., 0.)].into_iter().collect();
        let segs: Vec<_> = seq.segments().map(|(p, q)| (p.x, q.x)).collect();
        assert_eq!(segs, [(0., 1.), (1., 2.)]);
        let one: CoordinateSequence = [(5., 5.)].into_iter().collect();
        assert_eq!(one.segments().count(), 0);
    }

    #[test]
    fn read_file() {
        let (dir, path) =
            temp_file("read_file", b"p q x=0.5 y=1.5\np q x=-1 y=2\n");
        let seq = read_coordinates(&path).unwrap();
        assert_eq!(seq.as_slice(), [Coord::new(0.5, 1.5), Coord::new(-1., 2.)]);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn invalid_utf8_reports_line() {
        let input = &b"a b x=1 y=2\na b x=\xff y=1\n"[..];
        match CoordinateSequence::from_reader(input) {
            Err(ReadError::Line { line, source }) => {
                assert_eq!(line, 2);
                assert!(matches!(source, ParseError::Unreadable {
                    kind: io::ErrorKind::InvalidData, .. }));
            }
            r => panic!("expected a line error, got {:?}", r),
        }
    }

    #[test]
    fn invalid_utf8_file() {
        let (dir, path) = temp_file("invalid_utf8", b"\xfe\xff x=1 y=2\n");
        let err = read_coordinates(&path).unwrap_err();
        assert!(matches!(err, ReadError::Line { line: 1, .. }));
        assert!(err.to_string().starts_with("line 1: unreadable line"));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn missing_file() {
        let path = std::env::temp_dir().join("pathplot_no_such_file.txt");
        match read_coordinates(&path) {
            Err(ReadError::Io { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            r => panic!("expected an I/O error, got {:?}", r),
        }
    }
}
