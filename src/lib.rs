//! Plot paths of 2D coordinates read from text files, with arrows
//! showing the direction of travel, using the [Matplotlib][] Python
//! visualization library.
//!
//! Usage
//! -----
//!
//! ```no_run
//! use pathplot::{coords, directions::Directions, plt, style::Style, PlotConfig};
//! let seq = coords::read_coordinates("coordinates.txt")?;
//! let config = PlotConfig::default();
//! let fig = plt::figure(Some(config.figsize))?;
//! let mut ax = fig.subplot()?;
//! let style: Style = config.style.parse()?;
//! Directions::new(&style).head(config.head).plot(&mut ax, &seq)?;
//! config.apply(&mut ax)?;
//! plt::show()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [Matplotlib]: https://matplotlib.org/

pub mod config;
pub mod coords;
pub mod directions;
pub mod plt;
pub mod style;

pub use config::PlotConfig;
pub use coords::{read_coordinates, Coord, CoordinateSequence};
pub use directions::{plot_with_directions, ArrowHead, Canvas, Directions};
pub use style::Style;
