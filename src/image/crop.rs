//! Centered square cropping.

use image::imageops;

use super::IconImage;

/// Compute the centered square crop region for a `width` x `height` image.
///
/// Returns `(left, top, side)` with `side = min(width, height)`. Offsets use
/// floor division, so an odd difference leaves the extra pixel on the
/// right or bottom edge.
#[must_use]
pub const fn crop_region(width: u32, height: u32) -> (u32, u32, u32) {
    let side = if width < height { width } else { height };
    ((width - side) / 2, (height - side) / 2, side)
}

/// Crop the centered square of `img`.
///
/// A square input is returned as an identical copy.
#[must_use]
pub fn square_crop(img: &IconImage) -> IconImage {
    let (left, top, side) = crop_region(img.width(), img.height());
    if left == 0 && top == 0 && side == img.width() && side == img.height() {
        return img.clone();
    }

    tracing::debug!(
        "Cropping {}x{} to {side}x{side} at ({left}, {top})",
        img.width(),
        img.height()
    );

    imageops::crop_imm(img, left, top, side, side).to_image()
}

#[cfg(test)]
mod tests {
    use super::*;

    use image::Rgba;

    #[allow(clippy::cast_possible_truncation)]
    fn gradient(width: u32, height: u32) -> IconImage {
        IconImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
        })
    }

    #[test]
    fn test_region_side_is_min_and_in_bounds() {
        let cases = [
            (1, 1),
            (2000, 1000),
            (1000, 2000),
            (7, 4),
            (4, 7),
            (33, 32),
            (1, 500),
        ];
        for (w, h) in cases {
            let (left, top, side) = crop_region(w, h);
            assert_eq!(side, w.min(h), "{w}x{h}");
            assert!(left + side <= w, "{w}x{h}");
            assert!(top + side <= h, "{w}x{h}");
        }
    }

    #[test]
    fn test_region_floor_division() {
        assert_eq!(crop_region(2000, 1000), (500, 0, 1000));
        assert_eq!(crop_region(7, 4), (1, 0, 4));
        assert_eq!(crop_region(4, 7), (0, 1, 4));
    }

    #[test]
    fn test_square_input_is_unchanged() {
        let img = gradient(64, 64);
        let cropped = square_crop(&img);

        assert_eq!(cropped.dimensions(), (64, 64));
        assert_eq!(cropped.as_raw(), img.as_raw());
    }

    #[test]
    fn test_landscape_crop_is_centered() {
        let img = gradient(30, 10);
        let cropped = square_crop(&img);

        assert_eq!(cropped.dimensions(), (10, 10));
        assert_eq!(cropped.get_pixel(0, 0), img.get_pixel(10, 0));
        assert_eq!(cropped.get_pixel(9, 9), img.get_pixel(19, 9));
    }

    #[test]
    fn test_portrait_crop_is_centered() {
        let img = gradient(10, 31);
        let cropped = square_crop(&img);

        assert_eq!(cropped.dimensions(), (10, 10));
        assert_eq!(cropped.get_pixel(0, 0), img.get_pixel(0, 10));
        assert_eq!(cropped.get_pixel(9, 9), img.get_pixel(9, 19));
    }
}
