//! The errors a render can fail with.  Everything except `Encoding`
//! and `WorkerPanicked` is caught while the inputs are being checked,
//! before a single thread has been spawned.

use std::io;

/// Why a render (or the write of a rendered image) did not happen.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The viewport radius must be a positive, finite number, and the
    /// center must be finite.
    #[fail(
        display = "invalid viewport: radius must be positive and finite with a finite center (radius = {})",
        radius
    )]
    InvalidViewport {
        /// The radius that was asked for.
        radius: f64,
    },

    /// Both image dimensions must be positive, and the pixel count has
    /// to fit in memory addressing.
    #[fail(
        display = "invalid image size {}x{}: both dimensions must be positive",
        width, height
    )]
    InvalidImageSpec {
        /// The requested width, in pixels.
        width: usize,
        /// The requested height, in pixels.
        height: usize,
    },

    /// At least one iteration is needed so the palette has an interior
    /// slot.
    #[fail(
        display = "invalid iteration bound {}: must be at least 1",
        max_iterations
    )]
    InvalidIterations {
        /// The requested iteration bound.
        max_iterations: usize,
    },

    /// A palette handed to the renderer has to have exactly one color
    /// per possible escape count.
    #[fail(
        display = "palette has {} colors but the iteration bound needs {}",
        actual, expected
    )]
    PaletteMismatch {
        /// The number of colors the renderer needs.
        expected: usize,
        /// The number of colors the palette has.
        actual: usize,
    },

    /// One of the render threads panicked.
    #[fail(display = "a render thread panicked")]
    WorkerPanicked,

    /// The image encoder could not write the output.
    #[fail(display = "could not write image: {}", _0)]
    Encoding(#[cause] io::Error),
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        RenderError::Encoding(err)
    }
}
