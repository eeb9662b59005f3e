//! Thin binding to the parts of [Matplotlib][] needed to draw
//! coordinate paths.
//!
//! The interface stays close to Matplotlib's explicit one (a
//! [`Figure`] holding [`Axes`]) while returning Rust errors instead of
//! raising Python exceptions.
//!
//! [Matplotlib]: https://matplotlib.org/

use std::{
    fmt::{Display, Formatter},
    path::Path,
};
use lazy_static::lazy_static;
use pyo3::{
    prelude::*,
    intern,
    exceptions::{PyFileNotFoundError, PyPermissionError},
    types::PyDict,
};
use numpy::PyArray1;

/// Call the method `$m` of the Python object `$obj`, discarding the
/// returned value.
macro_rules! meth {
    ($obj: expr, $m: ident, $args: expr) => {
        Python::with_gil(|py| {
            $obj.bind(py)
                .call_method1(intern!(py, stringify!($m)), $args)
                .map(|_| ())
                .map_err(Error::from)
        })
    };
}

/// Possible errors of matplotlib functions.
#[derive(Debug)]
pub enum Error {
    /// The Python library "matplotlib" was not found.
    NoMatplotlib,
    /// The path contains an element that is not a directory or does
    /// not exist.
    FileNotFoundError,
    /// Permission denied to access or create the filesystem path.
    PermissionError,
    /// Other Python errors, e.g. an invalid format string.
    Python(PyErr),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Error::NoMatplotlib =>
                write!(f, "The matplotlib library has not been found.\n\
Please install it.  See https://matplotlib.org/\n\
If you use Anaconda, see https://github.com/PyO3/pyo3/issues/1554"),
            Error::FileNotFoundError =>
                write!(f, "A path contains an element that is not a \
                           directory or does not exist"),
            Error::PermissionError =>
                write!(f, "Permission denied to access or create the \
                           filesystem path"),
            Error::Python(e) =>
                write!(f, "Python error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<PyErr> for Error {
    fn from(e: PyErr) -> Self { Error::Python(e) }
}

/// Import and return a handle to the module `$m`.
macro_rules! pyimport { ($m: literal) => {
    Python::with_gil(|py|
        PyModule::import_bound(py, $m).map(Bound::unbind))
}}

lazy_static! {
    static ref PYPLOT: Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.pyplot")
    };
}

/// Return a handle to the module `$m`.
/// ⚠ This may try to lock Python's GIL.  Make sure it is executed
/// outside a call to `Python::with_gil`.
macro_rules! pymod { ($m: ident) => {
    $m.as_ref().map_err(|_| Error::NoMatplotlib)
}}


/// Data that can be handed to Matplotlib as a one dimensional
/// `numpy.ndarray`.
pub trait Data {
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>>;
}

impl<T> Data for T where T: AsRef<[f64]> + ?Sized {
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        PyArray1::from_slice_bound(py, self.as_ref())
    }
}

/// The top level container for all the plot elements.
#[derive(Debug)]
pub struct Figure {
    fig: PyObject, // instance of matplotlib.figure.Figure
}

/// A single set of axes; every series drawn on it shares the same
/// scales.
#[derive(Debug, Clone)]
pub struct Axes {
    ax: PyObject,
}

/// Return a new pyplot figure, `figsize` being its (width, height)
/// in inches.
pub fn figure(figsize: Option<(f64, f64)>) -> Result<Figure, Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        let kwargs = PyDict::new_bound(py);
        if let Some(size) = figsize {
            kwargs.set_item("figsize", size)?;
        }
        let fig = pyplot.bind(py)
            .getattr(intern!(py, "figure"))?
            .call((), Some(&kwargs))?;
        Ok(Figure { fig: fig.unbind() })
    })
}

/// Display all open figures and block until their windows are closed.
pub fn show() -> Result<(), Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        pyplot.bind(py).getattr(intern!(py, "show"))?.call0()?;
        Ok(())
    })
}

impl Figure {
    /// Return the single [`Axes`] covering the figure.
    pub fn subplot(&self) -> Result<Axes, Error> {
        Python::with_gil(|py| {
            let ax = self.fig.bind(py)
                .call_method0(intern!(py, "subplots"))?;
            Ok(Axes { ax: ax.unbind() })
        })
    }

    pub fn save(&self) -> Savefig {
        Savefig { fig: self.fig.clone(), dpi: None }
    }
}

pub struct Savefig {
    fig: PyObject,
    dpi: Option<f64>,
}

impl Savefig {
    pub fn dpi(&mut self, dpi: f64) -> &mut Self {
        if dpi > 0. {
            self.dpi = Some(dpi);
        } else {
            self.dpi = None;
        }
        self
    }

    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        Python::with_gil(|py| {
            let kwargs = PyDict::new_bound(py);
            if let Some(dpi) = self.dpi {
                kwargs.set_item("dpi", dpi)?;
            }
            self.fig.bind(py).call_method(
                intern!(py, "savefig"),
                (path.as_ref(),), Some(&kwargs)
            ).map(|_| ()).map_err(|e| {
                    if e.is_instance_of::<PyFileNotFoundError>(py) {
                        Error::FileNotFoundError
                    } else if e.is_instance_of::<PyPermissionError>(py) {
                        Error::PermissionError
                    } else {
                        Error::Python(e)
                    }
                })
        })?;
        Ok(())
    }
}


impl Axes {
    /// Plot `y` versus `x` as lines and/or markers.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pathplot::plt;
    /// let fig = plt::figure(None)?;
    /// let mut ax = fig.subplot()?;
    /// ax.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).fmt("bo").plot()?;
    /// fig.save().to_file("target/XY_plot.pdf")?;
    /// # Ok::<(), plt::Error>(())
    /// ```
    #[must_use]
    pub fn xy<'a, D>(&'a mut self, x: &'a D, y: &'a D) -> XY<'a, D>
    where D: Data + ?Sized {
        // Mutably borrow `self` to reflect that the final `.plot()`
        // mutates the underlying Python object.
        XY { axes: self, x, y, fmt: "", label: None }
    }

    /// Draw an arrow from (`x`, `y`) to (`x + dx`, `y + dy`).
    #[must_use]
    pub fn arrow(&mut self, x: f64, y: f64, dx: f64, dy: f64) -> Arrow<'_> {
        Arrow { axes: self, x, y, dx, dy,
                head_width: None, head_length: None, color: None }
    }

    pub fn set_title(&mut self, v: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, set_title, (v,))?;
        Ok(self)
    }

    pub fn grid(&mut self) -> Result<&mut Self, Error> {
        meth!(self.ax, grid, (true,))?;
        Ok(self)
    }

    pub fn set_xlabel(&mut self, label: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, set_xlabel, (label,))?;
        Ok(self)
    }

    pub fn set_ylabel(&mut self, label: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, set_ylabel, (label,))?;
        Ok(self)
    }

    pub fn legend(&mut self) -> Result<&mut Self, Error> {
        meth!(self.ax, legend, ())?;
        Ok(self)
    }
}

/// A pending call to `Axes.plot`.
pub struct XY<'a, D>
where D: ?Sized {
    axes: &'a Axes,
    x: &'a D,
    y: &'a D,
    fmt: &'a str,
    label: Option<&'a str>,
}

impl<'a, D> XY<'a, D>
where D: Data + ?Sized {
    /// Matplotlib format string, e.g. `"bo"` for blue circles.
    #[must_use]
    pub fn fmt(mut self, fmt: &'a str) -> Self {
        self.fmt = fmt;
        self
    }

    /// Name of the series in the legend.
    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn plot(self) -> Result<(), Error> {
        Python::with_gil(|py| {
            let kwargs = PyDict::new_bound(py);
            if let Some(label) = self.label {
                kwargs.set_item("label", label)?;
            }
            let xn = self.x.to_numpy(py);
            let yn = self.y.to_numpy(py);
            self.axes.ax.bind(py).call_method(
                intern!(py, "plot"), (xn, yn, self.fmt), Some(&kwargs))?;
            Ok(())
        })
    }
}

/// A pending call to `Axes.arrow`.
pub struct Arrow<'a> {
    axes: &'a Axes,
    x: f64,
    y: f64,
    dx: f64,
    dy: f64,
    head_width: Option<f64>,
    head_length: Option<f64>,
    color: Option<&'a str>,
}

impl<'a> Arrow<'a> {
    #[must_use]
    pub fn head_width(mut self, w: f64) -> Self {
        self.head_width = Some(w);
        self
    }

    #[must_use]
    pub fn head_length(mut self, l: f64) -> Self {
        self.head_length = Some(l);
        self
    }

    /// Face and edge color, e.g. `"r"` or `"C1"`.
    #[must_use]
    pub fn color(mut self, c: &'a str) -> Self {
        self.color = Some(c);
        self
    }

    pub fn draw(self) -> Result<(), Error> {
        Python::with_gil(|py| {
            let kwargs = PyDict::new_bound(py);
            if let Some(w) = self.head_width {
                kwargs.set_item("head_width", w)?;
            }
            if let Some(l) = self.head_length {
                kwargs.set_item("head_length", l)?;
            }
            if let Some(c) = self.color {
                kwargs.set_item("fc", c)?;
                kwargs.set_item("ec", c)?;
            }
            self.axes.ax.bind(py).call_method(
                intern!(py, "arrow"),
                (self.x, self.y, self.dx, self.dy), Some(&kwargs))?;
            Ok(())
        })
    }
}
