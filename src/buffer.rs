//! The pixel buffer a render writes into.
//!
//! Pixels are stored column by column, so a column is one contiguous
//! slice and a run of whole columns is one contiguous slice too.
//! That's what lets the renderer hand disjoint `&mut` runs to separate
//! threads with nothing more than `chunks_mut`.

use palette::Rgba;
use planes::ImageSpec;

/// A `width x height` grid of colors, column-major.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    image: ImageSpec,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    /// A buffer of transparent black pixels.
    pub fn new(image: ImageSpec) -> Self {
        PixelBuffer {
            image,
            pixels: vec![Rgba::TRANSPARENT; image.len()],
        }
    }

    /// The dimensions of the buffer.
    pub fn image(&self) -> ImageSpec {
        self.image
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.image.height()
    }

    /// The color at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        assert!(x < self.width() && y < self.height());
        self.pixels[x * self.height() + y]
    }

    /// Overwrite the color at column `x`, row `y`.
    pub fn set(&mut self, x: usize, y: usize, color: Rgba) {
        assert!(x < self.width() && y < self.height());
        let height = self.height();
        self.pixels[x * height + y] = color;
    }

    /// One column, top to bottom.
    pub fn column(&self, x: usize) -> &[Rgba] {
        let height = self.height();
        &self.pixels[x * height..(x + 1) * height]
    }

    /// Cuts the buffer into runs of at most `columns` whole columns
    /// each.  Every run is paired with the index of its first column.
    pub fn column_runs_mut(&mut self, columns: usize) -> Vec<(usize, &mut [Rgba])> {
        let columns = columns.max(1);
        let height = self.height();
        self.pixels
            .chunks_mut(columns * height)
            .enumerate()
            .map(|(i, run)| (i * columns, run))
            .collect()
    }

    /// Raw RGBA bytes in row-major order, the layout image encoders
    /// expect.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for y in 0..self.height() {
            for x in 0..self.width() {
                let c = self.get(x, y);
                bytes.extend_from_slice(&[c.r, c.g, c.b, c.a]);
            }
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_contiguous() {
        let mut buf = PixelBuffer::new(ImageSpec::new(3, 2).unwrap());
        let red = Rgba::opaque(255, 0, 0);
        buf.set(1, 0, red);
        buf.set(1, 1, red);
        assert_eq!(buf.column(1), &[red, red]);
        assert_eq!(buf.column(0), &[Rgba::TRANSPARENT, Rgba::TRANSPARENT]);
    }

    #[test]
    fn column_runs_cover_buffer_once() {
        let mut buf = PixelBuffer::new(ImageSpec::new(5, 3).unwrap());
        let runs = buf.column_runs_mut(2);
        let starts: Vec<usize> = runs.iter().map(|r| r.0).collect();
        let lengths: Vec<usize> = runs.iter().map(|r| r.1.len()).collect();
        assert_eq!(starts, vec![0, 2, 4]);
        assert_eq!(lengths, vec![6, 6, 3]);
    }

    #[test]
    fn bytes_are_row_major() {
        let mut buf = PixelBuffer::new(ImageSpec::new(2, 2).unwrap());
        buf.set(1, 0, Rgba::opaque(1, 2, 3));
        buf.set(0, 1, Rgba::opaque(4, 5, 6));
        assert_eq!(
            buf.to_rgba_bytes(),
            vec![0, 0, 0, 0, 1, 2, 3, 255, 4, 5, 6, 255, 0, 0, 0, 0]
        );
    }

    #[test]
    #[should_panic]
    fn out_of_range_reads_panic() {
        let buf = PixelBuffer::new(ImageSpec::new(2, 2).unwrap());
        buf.get(2, 0);
    }
}
