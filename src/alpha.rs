// vision-overlay 🦀 MIT OR Apache-2.0 License

//! Alpha-channel compositing utilities.

use image::{DynamicImage, GrayImage, RgbImage, Rgba, RgbaImage, imageops};

use crate::error::{OverlayError, Result};

/// Build an alpha mask from image brightness.
///
/// The input is reduced to luminance and inverted, so dark pixels become
/// opaque (255) and light pixels transparent (0).
#[must_use]
pub fn create_alpha(image: &RgbImage) -> GrayImage {
    let mut alpha = imageops::grayscale(image);
    imageops::invert(&mut alpha);
    alpha
}

/// Merge an image with an alpha mask into an RGBA image.
///
/// Grayscale input is expanded to RGB before the merge.
///
/// # Arguments
///
/// * `image` - Source image without an alpha channel.
/// * `alpha` - Alpha mask, same dimensions as `image`.
///
/// # Errors
///
/// Returns an error if the source already carries an alpha channel or if the
/// mask dimensions do not match the image.
pub fn add_alpha(image: &DynamicImage, alpha: &GrayImage) -> Result<RgbaImage> {
    if image.color().has_alpha() {
        return Err(OverlayError::ImageError(
            "image already carries an alpha channel".to_string(),
        ));
    }

    let rgb = image.to_rgb8();
    if rgb.dimensions() != alpha.dimensions() {
        return Err(OverlayError::ImageError(format!(
            "alpha mask is {}x{} but the image is {}x{}",
            alpha.width(),
            alpha.height(),
            rgb.width(),
            rgb.height()
        )));
    }

    let merged = RgbaImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let pixel = rgb.get_pixel(x, y);
        let mask = alpha.get_pixel(x, y);
        Rgba([pixel[0], pixel[1], pixel[2], mask[0]])
    });
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb};

    #[test]
    fn test_create_alpha_inverts_brightness() {
        let white = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
        let mask = create_alpha(&white);
        assert!(mask.pixels().all(|p| p[0] == 0));

        let black = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));
        let mask = create_alpha(&black);
        assert!(mask.pixels().all(|p| p[0] == 255));
    }

    #[test]
    fn test_add_alpha_merges_channels() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 2, Rgb([10, 20, 30])));
        let mask = GrayImage::from_pixel(3, 2, Luma([40]));

        let merged = add_alpha(&image, &mask).unwrap();
        assert_eq!(merged.get_pixel(2, 1), &Rgba([10, 20, 30, 40]));
    }

    #[test]
    fn test_add_alpha_expands_grayscale_input() {
        let image = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 2, Luma([9])));
        let mask = GrayImage::from_pixel(2, 2, Luma([100]));

        let merged = add_alpha(&image, &mask).unwrap();
        assert_eq!(merged.get_pixel(0, 0), &Rgba([9, 9, 9, 100]));
    }

    #[test]
    fn test_add_alpha_rejects_rgba_input() {
        let image = DynamicImage::ImageRgba8(RgbaImage::new(2, 2));
        let mask = GrayImage::new(2, 2);
        assert!(add_alpha(&image, &mask).is_err());
    }

    #[test]
    fn test_add_alpha_rejects_mismatched_mask() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(4, 4));
        let mask = GrayImage::new(2, 2);
        assert!(add_alpha(&image, &mask).is_err());
    }
}
