use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Smallest rectangle enclosing all non-zero difference pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    /// Whether the given pixel coordinate falls inside this box
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Outcome of the pixel comparison
#[derive(Debug)]
pub enum VisualDiffOutcome {
    /// Every pixel matches; no difference image is produced
    Identical,

    /// The screenshots cannot be compared pixel-by-pixel
    DimensionMismatch {
        first: (u32, u32),
        second: (u32, u32),
    },

    /// At least one pixel differs
    Different {
        /// Per-channel absolute difference image
        image: RgbaImage,
        bounding_box: BoundingBox,
    },
}

/// Decodes PNG screenshot bytes into an image
pub fn load_png(bytes: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}

/// Computes the pixel-wise absolute difference between two images.
///
/// Images of differing dimensions are reported as a distinct mismatch
/// condition instead of being compared.
pub fn diff_images(first: &DynamicImage, second: &DynamicImage) -> VisualDiffOutcome {
    if first.dimensions() != second.dimensions() {
        return VisualDiffOutcome::DimensionMismatch {
            first: first.dimensions(),
            second: second.dimensions(),
        };
    }

    let first = first.to_rgba8();
    let second = second.to_rgba8();
    let difference = absolute_difference(&first, &second);

    match bounding_box(&difference) {
        Some(bounding_box) => VisualDiffOutcome::Different {
            image: difference,
            bounding_box,
        },
        None => VisualDiffOutcome::Identical,
    }
}

/// Per-channel absolute difference of two same-size images
fn absolute_difference(first: &RgbaImage, second: &RgbaImage) -> RgbaImage {
    let (width, height) = first.dimensions();
    let mut diff = RgbaImage::new(width, height);

    for (x, y, pixel) in diff.enumerate_pixels_mut() {
        let a = first.get_pixel(x, y);
        let b = second.get_pixel(x, y);
        *pixel = Rgba([
            a[0].abs_diff(b[0]),
            a[1].abs_diff(b[1]),
            a[2].abs_diff(b[2]),
            a[3].abs_diff(b[3]),
        ]);
    }

    diff
}

/// Smallest rectangle enclosing every pixel with a non-zero channel, or None
/// when the difference image is entirely black
fn bounding_box(diff: &RgbaImage) -> Option<BoundingBox> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut any = false;

    for (x, y, pixel) in diff.enumerate_pixels() {
        if pixel.0 != [0, 0, 0, 0] {
            any = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    if !any {
        return None;
    }

    Some(BoundingBox {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    })
}
