//! Drawing a coordinate sequence as a path of arrows.
//!
//! Every point gets a marker and consecutive points are joined by an
//! arrow pointing from the earlier point to the later one.  The axes
//! are swapped: `y` runs along the horizontal axis and `x` along the
//! vertical one.

use log::{debug, warn};
use crate::{
    coords::{Coord, CoordinateSequence},
    plt::{Axes, Error},
    style::Style,
};

/// Arrow color used when the style token does not name one.
pub const DEFAULT_ARROW_COLOR: &str = "r";

/// Size of arrowheads, in data units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowHead {
    pub width: f64,
    pub length: f64,
}

impl ArrowHead {
    /// Zero sized heads: arrows are drawn as plain segments.
    pub const NONE: ArrowHead = ArrowHead { width: 0., length: 0. };

    pub fn new(width: f64, length: f64) -> Self {
        Self { width, length }
    }
}

impl Default for ArrowHead {
    fn default() -> Self {
        Self { width: 10., length: 15. }
    }
}

/// A surface on which paths are drawn.  Coordinates are given in
/// display order: horizontal first, then vertical.
pub trait Canvas {
    /// Draw a marker at each (`h[i]`, `v[i]`), without joining them.
    fn markers(&mut self, h: &[f64], v: &[f64], style: &Style,
               label: Option<&str>) -> Result<(), Error>;

    /// Draw an arrow from `from` to `from + delta`.
    fn arrow(&mut self, from: (f64, f64), delta: (f64, f64),
             head: ArrowHead, color: &str) -> Result<(), Error>;
}

impl Canvas for Axes {
    fn markers(&mut self, h: &[f64], v: &[f64], style: &Style,
               label: Option<&str>) -> Result<(), Error> {
        let fmt = style.marker_format();
        let mut xy = self.xy(h, v).fmt(&fmt);
        if let Some(label) = label {
            xy = xy.label(label);
        }
        xy.plot()
    }

    fn arrow(&mut self, from: (f64, f64), delta: (f64, f64),
             head: ArrowHead, color: &str) -> Result<(), Error> {
        Axes::arrow(self, from.0, from.1, delta.0, delta.1)
            .head_width(head.width)
            .head_length(head.length)
            .color(color)
            .draw()
    }
}

/// What was drawn for one sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlotSummary {
    pub markers: usize,
    pub arrows: usize,
}

/// How to draw a sequence: marker style, arrowheads and legend label.
#[derive(Debug, Clone)]
pub struct Directions<'a> {
    style: &'a Style,
    head: ArrowHead,
    arrow_color: Option<&'a str>,
    label: Option<&'a str>,
}

/// Position of `c` on the canvas.
fn display(c: &Coord) -> (f64, f64) {
    (c.y, c.x)
}

impl<'a> Directions<'a> {
    pub fn new(style: &'a Style) -> Self {
        Directions { style, head: ArrowHead::default(),
                     arrow_color: None, label: None }
    }

    #[must_use]
    pub fn head(mut self, head: ArrowHead) -> Self {
        self.head = head;
        self
    }

    /// Color of the arrows.  Defaults to the color of the style, or
    /// [`DEFAULT_ARROW_COLOR`] if the style has none.
    #[must_use]
    pub fn arrow_color(mut self, c: &'a str) -> Self {
        self.arrow_color = Some(c);
        self
    }

    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Draw `seq` on `canvas`.  For each pair of consecutive points,
    /// both points get a marker and an arrow joins them; the last point
    /// gets one more marker.  An empty sequence draws nothing.
    pub fn plot<C>(&self, canvas: &mut C, seq: &CoordinateSequence)
                   -> Result<PlotSummary, Error>
    where C: Canvas + ?Sized {
        let Some(last) = seq.last() else {
            warn!("empty coordinate sequence, nothing to plot");
            return Ok(PlotSummary::default());
        };
        let n = 2 * seq.len() - 1;
        let mut h = Vec::with_capacity(n);
        let mut v = Vec::with_capacity(n);
        let mut push = |c: &Coord| {
            let (hc, vc) = display(c);
            h.push(hc);
            v.push(vc);
        };
        for (p, q) in seq.segments() {
            push(p);
            push(q);
        }
        push(last);

        let color = self.arrow_color.or(self.style.color())
            .unwrap_or(DEFAULT_ARROW_COLOR);
        let mut arrows = 0;
        for (p, q) in seq.segments() {
            let (p, q) = (display(p), display(q));
            canvas.arrow(p, (q.0 - p.0, q.1 - p.1), self.head, color)?;
            arrows += 1;
        }
        canvas.markers(&h, &v, self.style, self.label)?;
        let summary = PlotSummary { markers: h.len(), arrows };
        debug!("plotted {} markers and {} arrows with style {:?}",
               summary.markers, summary.arrows, self.style.as_str());
        Ok(summary)
    }
}

/// Draw `seq` with the given style and arrowheads.
pub fn plot_with_directions<C>(
    canvas: &mut C, seq: &CoordinateSequence, style: &Style, head: ArrowHead,
) -> Result<PlotSummary, Error>
where C: Canvas + ?Sized {
    Directions::new(style).head(head).plot(canvas, seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        markers: Vec<(f64, f64, String)>,
        arrows: Vec<((f64, f64), (f64, f64), ArrowHead, String)>,
        labels: Vec<String>,
    }

    impl Canvas for Recorder {
        fn markers(&mut self, h: &[f64], v: &[f64], style: &Style,
                   label: Option<&str>) -> Result<(), Error> {
            assert_eq!(h.len(), v.len());
            for (&h, &v) in h.iter().zip(v) {
                self.markers.push((h, v, style.marker_format()));
            }
            self.labels.extend(label.map(str::to_owned));
            Ok(())
        }

        fn arrow(&mut self, from: (f64, f64), delta: (f64, f64),
                 head: ArrowHead, color: &str) -> Result<(), Error> {
            self.arrows.push((from, delta, head, color.to_owned()));
            Ok(())
        }
    }

    fn seq(pts: &[(f64, f64)]) -> CoordinateSequence {
        pts.iter().copied().collect()
    }

    fn bo() -> Style {
        "bo".parse().unwrap()
    }

    #[test]
    fn one_point() -> Result<(), Error> {
        let mut c = Recorder::default();
        let s = plot_with_directions(&mut c, &seq(&[(1., 2.)]), &bo(),
                                     ArrowHead::default())?;
        assert_eq!(s, PlotSummary { markers: 1, arrows: 0 });
        assert_eq!(c.markers, [(2., 1., "bo".to_string())]);
        assert!(c.arrows.is_empty());
        Ok(())
    }

    #[test]
    fn empty_sequence() -> Result<(), Error> {
        let mut c = Recorder::default();
        let s = plot_with_directions(&mut c, &seq(&[]), &bo(),
                                     ArrowHead::default())?;
        assert_eq!(s, PlotSummary::default());
        assert!(c.markers.is_empty() && c.arrows.is_empty());
        Ok(())
    }

    #[test]
    fn three_points_swapped_axes() -> Result<(), Error> {
        let mut c = Recorder::default();
        let path = seq(&[(0., 0.), (1., 2.), (3., 2.)]);
        let s = plot_with_directions(&mut c, &path, &bo(),
                                     ArrowHead::default())?;
        assert_eq!(s, PlotSummary { markers: 5, arrows: 2 });
        let hv: Vec<(f64, f64)> =
            c.markers.iter().map(|&(h, v, _)| (h, v)).collect();
        assert_eq!(hv, [(0., 0.), (2., 1.), (2., 1.), (2., 3.), (2., 3.)]);
        let head = ArrowHead::new(10., 15.);
        let b = "b".to_string();
        assert_eq!(c.arrows, [((0., 0.), (2., 1.), head, b.clone()),
                              ((2., 1.), (0., 2.), head, b)]);
        Ok(())
    }

    #[test]
    fn overlay_without_heads() -> Result<(), Error> {
        let mut c = Recorder::default();
        let a = seq(&[(0., 0.), (1., 1.)]);
        let b = seq(&[(5., 5.), (6., 4.), (7., 7.)]);
        let (a0, b0) = (a.clone(), b.clone());
        let bo = bo();
        let ro: Style = "r^".parse().unwrap();
        Directions::new(&bo).head(ArrowHead::NONE).label("a").plot(&mut c, &a)?;
        Directions::new(&ro).head(ArrowHead::NONE).label("b").plot(&mut c, &b)?;
        assert_eq!((a, b), (a0, b0));
        assert_eq!(c.labels, ["a", "b"]);
        assert_eq!(c.markers.len(), 3 + 5);
        assert!(c.arrows.iter().all(|a| a.2 == ArrowHead::NONE));
        let colors: Vec<&str> = c.arrows.iter().map(|a| a.3.as_str()).collect();
        assert_eq!(colors, ["b", "r", "r"]);
        assert!(c.markers[3..].iter().all(|m| m.2 == "r^"));
        Ok(())
    }

    #[test]
    fn arrow_color_defaults_to_red() -> Result<(), Error> {
        let mut c = Recorder::default();
        let plain: Style = "o".parse().unwrap();
        plot_with_directions(&mut c, &seq(&[(0., 0.), (1., 0.)]), &plain,
                             ArrowHead::default())?;
        assert_eq!(c.arrows[0].3, DEFAULT_ARROW_COLOR);
        Ok(())
    }

    #[test]
    fn explicit_arrow_color() -> Result<(), Error> {
        let mut c = Recorder::default();
        let bo = bo();
        Directions::new(&bo).arrow_color("r")
            .plot(&mut c, &seq(&[(0., 0.), (1., 0.), (2., 0.)]))?;
        assert!(c.arrows.iter().all(|a| a.3 == "r"));
        assert!(c.markers.iter().all(|m| m.2 == "bo"));
        Ok(())
    }

    #[test]
    fn cycle_color_and_line_style() -> Result<(), Error> {
        let mut c = Recorder::default();
        let style: Style = "C1-o".parse().unwrap();
        plot_with_directions(&mut c, &seq(&[(0., 0.), (1., 1.), (2., 0.)]),
                             &style, ArrowHead::default())?;
        assert!(c.arrows.iter().all(|a| a.3 == "C1"));
        // The line part of the token is not passed to the marker call.
        assert!(c.markers.iter().all(|m| m.2 == "C1o"));
        Ok(())
    }
}
