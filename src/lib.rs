#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane for
//! which the recurrence `z = z * z + c`, started at `z = c`, never runs
//! off to infinity.  We can't iterate forever, so we iterate up to some
//! bound and count how many steps it took for `|z|` to leave the
//! circle of radius two.  That count is the "escape velocity" of the
//! point, and it's the number we use to pick a color.  Points that
//! never escape within the bound are presumed to be inside the set
//! and get the reserved interior color.
//!
//! Every pixel is independent of every other pixel, so the image is
//! rendered in parallel: the pixel buffer is stored column by column,
//! cut into disjoint runs of whole columns, and each run is handed to
//! its own thread.  No thread ever sees another thread's columns, so
//! no locking is needed.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
#[macro_use]
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;
extern crate rand;

pub mod bounds;
pub mod buffer;
pub mod encode;
pub mod errors;
pub mod escape;
pub mod palette;
pub mod planes;
pub mod render;

pub use bounds::Bounds;
pub use buffer::PixelBuffer;
pub use errors::RenderError;
pub use escape::escape;
pub use palette::{Palette, Rgba};
pub use planes::{map_pixel, ImageSpec, PlaneMapper, Viewport};
pub use render::{render, Renderer};
