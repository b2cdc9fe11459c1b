//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the complex plane described by a center point
//! and a radius.
use num::Complex;

use errors::RenderError;

/// Describes the width and height of the integral plane, i.e. the
/// image, in pixels.  Both are positive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImageSpec {
    width: usize,
    height: usize,
}

impl ImageSpec {
    /// Rejects empty images, and images with more pixels than we can
    /// address.
    pub fn new(width: usize, height: usize) -> Result<ImageSpec, RenderError> {
        if width == 0 || height == 0 || width.checked_mul(height).is_none() {
            return Err(RenderError::InvalidImageSpec { width, height });
        }
        Ok(ImageSpec { width, height })
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Always false: a valid ImageSpec has at least one pixel.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// The region of the complex plane we sample.  The radius is half the
/// width of the region; the height follows from the aspect ratio of
/// the image.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    center: Complex<f64>,
    radius: f64,
}

impl Viewport {
    /// Rejects a radius that isn't a positive, finite number, and any
    /// center with a NaN or infinite component.
    pub fn new(center: Complex<f64>, radius: f64) -> Result<Viewport, RenderError> {
        if !(radius > 0.0) || !radius.is_finite() || !center.re.is_finite() || !center.im.is_finite()
        {
            return Err(RenderError::InvalidViewport { radius });
        }
        Ok(Viewport { center, radius })
    }

    /// The point in the middle of the viewport.
    pub fn center(&self) -> Complex<f64> {
        self.center
    }

    /// Half the width of the viewport, in plane units.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// Maps pixels of an image onto sample points of a viewport.  All of
/// the arithmetic that doesn't depend on the pixel is done once, up
/// front.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    /// The image being sampled into.
    pub image: ImageSpec,
    // Width (and height; pixels are square) of a single pixel in the
    // complex plane.
    pixel_width: f64,
    // The sample point of pixel 0,0.  Samples sit in the middle of
    // their pixel cell, not on its corner.
    origin: Complex<f64>,
}

impl PlaneMapper {
    /// Constructor.  Takes the image and the viewport; neither can be
    /// invalid, since both validate themselves on construction.
    pub fn new(image: ImageSpec, viewport: Viewport) -> PlaneMapper {
        let zoom_width = viewport.radius * 2.0;
        let pixel_width = zoom_width / (image.width as f64);
        let pixel_height = pixel_width;
        let view_height = (image.height as f64 / image.width as f64) * zoom_width;
        let left = (viewport.center.re - (zoom_width / 2.0)) + pixel_width / 2.0;
        let top = (viewport.center.im - (view_height / 2.0)) + pixel_height / 2.0;
        PlaneMapper {
            image,
            pixel_width,
            origin: Complex::new(left, top),
        }
    }

    /// The width (and height) of one pixel on the complex plane.
    pub fn pixel_width(&self) -> f64 {
        self.pixel_width
    }

    /// Given the column and row of a pixel on the integral cartesian
    /// plane, return the complex number sampled for that pixel.
    pub fn pixel_to_point(&self, x: usize, y: usize) -> Complex<f64> {
        debug_assert!(x < self.image.width && y < self.image.height);
        Complex::new(
            self.origin.re + (x as f64) * self.pixel_width,
            self.origin.im + (y as f64) * self.pixel_width,
        )
    }
}

/// Stateless version of `PlaneMapper::pixel_to_point`.  Renders go
/// through a `PlaneMapper` so the setup isn't repeated per pixel; the
/// two give bit-identical answers.
pub fn map_pixel(x: usize, y: usize, image: &ImageSpec, viewport: &Viewport) -> Complex<f64> {
    PlaneMapper::new(*image, *viewport).pixel_to_point(x, y)
}
