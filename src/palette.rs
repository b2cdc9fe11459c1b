//! Colors, and the lookup table that turns an escape count into one.
use rand::Rng;

use errors::RenderError;

/// An 8-bit-per-channel color with alpha.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha; 255 is opaque.
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, the conventional color of the set's
    /// interior.
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// An opaque color.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 255 }
    }
}

/// One color per escape count.  The last entry is the interior color,
/// used for every point that did not escape within the bound.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Palette {
    /// Builds a palette with `max_iterations` entries: random opaque
    /// colors for every escape count, and transparent black for the
    /// interior.  Seed the generator to get the same palette twice.
    pub fn random<R: Rng>(max_iterations: usize, rng: &mut R) -> Result<Self, RenderError> {
        if max_iterations == 0 {
            return Err(RenderError::InvalidIterations { max_iterations });
        }
        let mut colors: Vec<Rgba> = (0..max_iterations - 1)
            .map(|_| Rgba::opaque(rng.gen(), rng.gen(), rng.gen()))
            .collect();
        colors.push(Rgba::TRANSPARENT);
        Ok(Palette { colors })
    }

    /// A palette with exactly the given colors.  The last one is the
    /// interior color.
    pub fn from_colors(colors: Vec<Rgba>) -> Result<Self, RenderError> {
        if colors.is_empty() {
            return Err(RenderError::InvalidIterations { max_iterations: 0 });
        }
        Ok(Palette { colors })
    }

    /// Number of entries, which is also the iteration bound the palette
    /// was built for.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// A palette always has at least its interior entry.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color painted onto points that never escaped.
    pub fn interior(&self) -> Rgba {
        self.colors[self.colors.len() - 1]
    }

    /// The color for an escape count.  Counts at or past the end of the
    /// palette get the interior color.
    #[inline]
    pub fn color(&self, count: usize) -> Rgba {
        match self.colors.get(count) {
            Some(color) => *color,
            None => self.interior(),
        }
    }
}
