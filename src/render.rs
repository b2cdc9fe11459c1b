// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Drives the plane mapper and the escape kernel over every pixel of
//! an image.

use crossbeam;
use num_cpus;
use rand;

use buffer::PixelBuffer;
use errors::RenderError;
use escape::escape;
use palette::{Palette, Rgba};
use planes::{ImageSpec, PlaneMapper, Viewport};

/// The Renderer contains the parameters by which an image is
/// generated.  Once set, this object should not be mutable.
#[derive(Debug)]
pub struct Renderer {
    plane: PlaneMapper,
    limit: usize,
    palette: Palette,
}

impl Renderer {
    /// Requires the image dimensions, the region of the complex plane
    /// to sample, and the iteration bound.  The palette is random; use
    /// `with_palette` to pick the colors yourself.
    pub fn new(
        image: ImageSpec,
        viewport: Viewport,
        max_iterations: usize,
    ) -> Result<Self, RenderError> {
        let palette = Palette::random(max_iterations, &mut rand::thread_rng())?;
        Ok(Renderer {
            plane: PlaneMapper::new(image, viewport),
            limit: max_iterations,
            palette,
        })
    }

    /// Swap in a palette.  It needs one color per possible escape
    /// count, i.e. exactly `max_iterations` of them.
    pub fn with_palette(mut self, palette: Palette) -> Result<Self, RenderError> {
        if palette.len() != self.limit {
            return Err(RenderError::PaletteMismatch {
                expected: self.limit,
                actual: palette.len(),
            });
        }
        self.palette = palette;
        Ok(self)
    }

    /// The palette colors are drawn from.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The color for a single pixel.
    #[inline]
    fn shade(&self, x: usize, y: usize) -> Rgba {
        self.palette
            .color(escape(self.plane.pixel_to_point(x, y), self.limit))
    }

    /// Render a run of whole columns, the first of which is column
    /// `first`.  The run is owned outright by whoever calls this.
    fn render_columns(&self, first: usize, run: &mut [Rgba]) {
        let height = self.plane.image.height();
        for (i, column) in run.chunks_mut(height).enumerate() {
            let x = first + i;
            for (y, pixel) in column.iter_mut().enumerate() {
                *pixel = self.shade(x, y);
            }
        }
    }

    /// The main function for single-threaded implementations.  Walks
    /// the image column by column.
    pub fn render_single(&self) -> PixelBuffer {
        let image = self.plane.image;
        let mut buffer = PixelBuffer::new(image);
        for (x, y) in iproduct!(0..image.width(), 0..image.height()) {
            buffer.set(x, y, self.shade(x, y));
        }
        buffer
    }

    /// A multi-threaded version of the render function that takes a
    /// thread count as an option.  The buffer is cut into one run of
    /// columns per thread; since the runs don't overlap, the threads
    /// share nothing mutable.  Returns once every thread has finished.
    pub fn render(&self, threads: usize) -> Result<PixelBuffer, RenderError> {
        let image = self.plane.image;
        let threads = threads.max(1).min(image.width());
        let columns = (image.width() + threads - 1) / threads;
        debug!(
            "rendering {}x{} at {} iterations: {} threads, {} columns each",
            image.width(),
            image.height(),
            self.limit,
            threads,
            columns
        );

        let mut buffer = PixelBuffer::new(image);
        {
            let runs = buffer.column_runs_mut(columns);
            crossbeam::scope(|spawner| {
                for (first, run) in runs {
                    spawner.spawn(move |_| {
                        trace!("columns from {} started", first);
                        self.render_columns(first, run);
                        trace!("columns from {} finished", first);
                    });
                }
            })
            .map_err(|_| RenderError::WorkerPanicked)?;
        }
        Ok(buffer)
    }
}

/// Render an image with a random palette, using one thread per CPU.
pub fn render(
    image: &ImageSpec,
    viewport: &Viewport,
    max_iterations: usize,
) -> Result<PixelBuffer, RenderError> {
    Renderer::new(*image, *viewport, max_iterations)?.render(num_cpus::get())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::Complex;

    fn gradient(len: usize) -> Palette {
        let mut colors: Vec<Rgba> = (0..len - 1)
            .map(|i| Rgba::opaque((i * 7) as u8, (i * 13) as u8, (i * 29) as u8))
            .collect();
        colors.push(Rgba::TRANSPARENT);
        Palette::from_colors(colors).unwrap()
    }

    fn renderer(width: usize, height: usize, limit: usize) -> Renderer {
        let image = ImageSpec::new(width, height).unwrap();
        let viewport = Viewport::new(Complex::new(-0.5, 0.0), 1.5).unwrap();
        Renderer::new(image, viewport, limit)
            .unwrap()
            .with_palette(gradient(limit))
            .unwrap()
    }

    #[test]
    fn fixed_palette_renders_repeat() {
        let r = renderer(4, 4, 64);
        let first = r.render(4).unwrap();
        let second = r.render(4).unwrap();
        assert_eq!(first.to_rgba_bytes(), second.to_rgba_bytes());
        let again = renderer(4, 4, 64).render(2).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn four_by_four_has_interior_and_exterior() {
        let r = renderer(4, 4, 64);
        let buf = r.render(4).unwrap();
        // Column 0 sits at re = -1.625, outside the set at the top and
        // bottom edges; -0.125 near the middle is inside.
        assert_ne!(buf.get(0, 0), Rgba::TRANSPARENT);
        assert_eq!(buf.get(2, 1), Rgba::TRANSPARENT);
        assert_eq!(buf.get(2, 2), Rgba::TRANSPARENT);
    }

    #[test]
    fn parallel_matches_serial() {
        let r = renderer(13, 7, 32);
        let serial = r.render_single();
        for threads in 1..20 {
            assert_eq!(r.render(threads).unwrap(), serial, "threads = {}", threads);
        }
        assert_eq!(r.render(0).unwrap(), serial);
    }

    #[test]
    fn pixels_follow_escape_counts() {
        let r = renderer(9, 5, 16);
        let buf = r.render(3).unwrap();
        for x in 0..9 {
            for y in 0..5 {
                let count = escape(r.plane.pixel_to_point(x, y), 16);
                assert_eq!(buf.get(x, y), r.palette().color(count));
            }
        }
    }

    #[test]
    fn degenerate_images_render() {
        assert_eq!(renderer(1, 1, 8).render(4).unwrap().width(), 1);
        let tall = renderer(1, 9, 8);
        assert_eq!(tall.render(4).unwrap(), tall.render_single());
        let wide = renderer(9, 1, 8);
        assert_eq!(wide.render(4).unwrap(), wide.render_single());
    }

    #[test]
    fn mismatched_palette_is_refused() {
        let image = ImageSpec::new(2, 2).unwrap();
        let viewport = Viewport::new(Complex::new(0.0, 0.0), 1.0).unwrap();
        let r = Renderer::new(image, viewport, 8).unwrap();
        match r.with_palette(gradient(4)) {
            Err(RenderError::PaletteMismatch { expected, actual }) => {
                assert_eq!((expected, actual), (8, 4))
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn zero_iterations_are_refused() {
        let image = ImageSpec::new(2, 2).unwrap();
        let viewport = Viewport::new(Complex::new(0.0, 0.0), 1.0).unwrap();
        assert!(Renderer::new(image, viewport, 0).is_err());
    }

    #[test]
    fn free_render_fills_buffer() {
        let image = ImageSpec::new(6, 4).unwrap();
        let viewport = Viewport::new(Complex::new(-0.2, 0.9), 0.5).unwrap();
        let buf = render(&image, &viewport, 64).unwrap();
        assert_eq!((buf.width(), buf.height()), (6, 4));
    }
}
