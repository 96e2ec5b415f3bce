// vision-overlay 🦀 MIT OR Apache-2.0 License

//! Shared raster primitives for the pose renderers.

use image::RgbImage;
use imageproc::point::Point;

/// Approximate a rotated ellipse with an integer-vertex polygon.
///
/// Vertices are generated at 1 degree steps over `[0, 360)`. Consecutive
/// duplicates are collapsed and a trailing vertex equal to the first is
/// dropped, because the polygon filler treats the list as implicitly closed
/// and rejects an explicit closing vertex.
pub(crate) fn ellipse_polygon(
    center: (f32, f32),
    axes: (f32, f32),
    angle_degrees: f32,
) -> Vec<Point<i32>> {
    let (sin_a, cos_a) = angle_degrees.to_radians().sin_cos();
    let mut points: Vec<Point<i32>> = Vec::with_capacity(360);

    for step in 0..360 {
        let t = (step as f32).to_radians();
        let dx = axes.0 * t.cos();
        let dy = axes.1 * t.sin();
        let x = (center.0 + dx * cos_a - dy * sin_a).round() as i32;
        let y = (center.1 + dx * sin_a + dy * cos_a).round() as i32;
        let point = Point::new(x, y);
        if points.last() != Some(&point) {
            points.push(point);
        }
    }
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }

    points
}

/// Blend `overlay` onto `image` in place.
///
/// Every channel becomes `alpha * image + beta * overlay + gamma`, rounded
/// and saturated to `[0, 255]`.
///
/// # Panics
///
/// Panics if the two images differ in dimensions.
pub fn blend_weighted_mut(
    image: &mut RgbImage,
    alpha: f32,
    overlay: &RgbImage,
    beta: f32,
    gamma: f32,
) {
    assert_eq!(
        image.dimensions(),
        overlay.dimensions(),
        "blend inputs must share dimensions"
    );

    for (dst, src) in image.pixels_mut().zip(overlay.pixels()) {
        for (d, s) in dst.0.iter_mut().zip(src.0.iter()) {
            *d = (alpha * f32::from(*d) + beta * f32::from(*s) + gamma).round() as u8;
        }
    }
}
