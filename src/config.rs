//! Figure settings.

use crate::{
    directions::{ArrowHead, DEFAULT_ARROW_COLOR},
    plt::{Axes, Error},
};

/// Settings shared by every series of a figure.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// (width, height) in inches.
    pub figsize: (f64, f64),
    pub title: String,
    /// Label of the horizontal axis, which carries the `y` coordinates.
    pub xlabel: String,
    /// Label of the vertical axis, which carries the `x` coordinates.
    pub ylabel: String,
    pub grid: bool,
    pub head: ArrowHead,
    /// Arrow color of a lone series.  Overlaid series use the color
    /// of their style instead.
    pub arrow_color: String,
    pub style: String,
    pub overlay_style: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            figsize: (10., 8.),
            title: "Plot of Coordinates with Directions".to_string(),
            xlabel: "Y".to_string(),
            ylabel: "X".to_string(),
            grid: true,
            head: ArrowHead::default(),
            arrow_color: DEFAULT_ARROW_COLOR.to_string(),
            style: "bo".to_string(),
            overlay_style: "ro".to_string(),
        }
    }
}

impl PlotConfig {
    /// Set the title, axis labels and grid of `ax`.
    pub fn apply(&self, ax: &mut Axes) -> Result<(), Error> {
        ax.set_xlabel(&self.xlabel)?
            .set_ylabel(&self.ylabel)?
            .set_title(&self.title)?;
        if self.grid {
            ax.grid()?;
        }
        Ok(())
    }
}
