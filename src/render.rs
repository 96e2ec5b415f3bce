// vision-overlay 🦀 MIT OR Apache-2.0 License

//! Human pose overlay rendering.

use ab_glyph::{FontRef, PxScale};
use image::RgbImage;
use imageproc::drawing::{
    draw_filled_circle_mut, draw_hollow_rect_mut, draw_line_segment_mut, draw_polygon_mut,
    draw_text_mut,
};
use imageproc::rect::Rect;

use crate::color::Color;
use crate::draw::{blend_weighted_mut, ellipse_polygon};
use crate::pose::{KEYPOINT_COUNT, Pose};
use crate::skeleton::LIMBS;

/// Radius of keypoint circles in pixels.
const KEYPOINT_RADIUS: i32 = 3;
/// Half-width of limb sticks in pixels.
const STICK_WIDTH: f32 = 3.0;
/// Weight of the base image in the final blend.
const IMAGE_WEIGHT: f32 = 0.6;
/// Weight of the stick plane in the final blend.
const PLANE_WEIGHT: f32 = 0.7;
/// Label text height in pixels.
const LABEL_SCALE: f32 = 16.0;

/// Render pose skeletons onto an image.
///
/// Keypoints become filled circles in their palette colors. Limb sticks are
/// filled rotated-ellipse polygons, accumulated on a cloned plane that is
/// blended back onto the image so the sticks come out translucent. Poses with
/// a track identity also get an id label and a hollow bounding box.
///
/// # Arguments
///
/// * `image` - Target image, modified in place.
/// * `poses` - Poses to draw; read-only.
/// * `font` - Font for id labels, or `None` to skip label text.
///
/// # Panics
///
/// Panics if any pose does not have exactly 18 keypoints.
pub fn draw_poses_mut(image: &mut RgbImage, poses: &[Pose], font: Option<&FontRef<'_>>) {
    tracing::debug!(poses = poses.len(), "rendering pose overlay");

    for pose in poses {
        assert_eq!(
            pose.keypoints.len(),
            KEYPOINT_COUNT,
            "pose must carry exactly {KEYPOINT_COUNT} keypoints"
        );

        for (index, keypoint) in pose.keypoints.iter().enumerate() {
            if !keypoint.is_absent() {
                draw_filled_circle_mut(
                    image,
                    (keypoint.x as i32, keypoint.y as i32),
                    KEYPOINT_RADIUS,
                    Color::from_keypoint_index(index).into(),
                );
            }
        }
    }

    // Sticks go on a separate plane; the final blend leaves them translucent
    let mut plane = image.clone();
    for pose in poses {
        for limb in &LIMBS {
            let first = pose.keypoints[limb[0]];
            let second = pose.keypoints[limb[1]];
            if first.is_absent() || second.is_absent() {
                continue;
            }

            let center = ((first.x + second.x) / 2.0, (first.y + second.y) / 2.0);
            let (dx, dy) = (first.x - second.x, first.y - second.y);
            let length = (dx * dx + dy * dy).sqrt();
            let angle = dy.atan2(dx).to_degrees();

            let stick = ellipse_polygon(center, (length / 2.0, STICK_WIDTH), angle);
            if stick.len() > 2 {
                draw_polygon_mut(&mut plane, &stick, Color::from_keypoint_index(limb[1]).into());
            }
        }

        if let Some(id) = pose.id {
            draw_identity_mut(image, pose, id, font, Color::MAGENTA, Color::RED);
        }
    }

    blend_weighted_mut(image, IMAGE_WEIGHT, &plane, PLANE_WEIGHT, 0.0);
}

/// Render pose skeletons as plain white line segments.
///
/// The lightweight variant: 1-pixel limb lines plus a white id label and
/// bounding box for identified poses. No circles, no blending.
///
/// # Panics
///
/// Panics if any pose does not have exactly 18 keypoints.
pub fn draw_poses_simple_mut(image: &mut RgbImage, poses: &[Pose], font: Option<&FontRef<'_>>) {
    tracing::debug!(poses = poses.len(), "rendering simple pose overlay");

    for pose in poses {
        assert_eq!(
            pose.keypoints.len(),
            KEYPOINT_COUNT,
            "pose must carry exactly {KEYPOINT_COUNT} keypoints"
        );

        for limb in &LIMBS {
            let first = pose.keypoints[limb[0]];
            let second = pose.keypoints[limb[1]];
            if first.is_absent() || second.is_absent() {
                continue;
            }
            draw_line_segment_mut(
                image,
                (first.x, first.y),
                (second.x, second.y),
                Color::WHITE.into(),
            );
        }

        if let Some(id) = pose.id {
            draw_identity_mut(image, pose, id, font, Color::WHITE, Color::WHITE);
        }
    }
}

/// Draw the id label and keypoint bounding box for an identified pose.
fn draw_identity_mut(
    image: &mut RgbImage,
    pose: &Pose,
    id: i32,
    font: Option<&FontRef<'_>>,
    text_color: Color,
    box_color: Color,
) {
    let Some(bbox) = pose.bounding_box() else {
        return;
    };
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    // Clamp to image bounds
    let x1 = (bbox.x_min.round() as i32).max(0).min(width as i32 - 1);
    let y1 = (bbox.y_min.round() as i32).max(0).min(height as i32 - 1);
    let x2 = (bbox.x_max.round() as i32).max(0).min(width as i32 - 1);
    let y2 = (bbox.y_max.round() as i32).max(0).min(height as i32 - 1);

    if x2 > x1 && y2 > y1 {
        let rect = Rect::at(x1, y1).of_size((x2 - x1) as u32, (y2 - y1) as u32);
        draw_hollow_rect_mut(image, rect, box_color.into());
    }

    if let Some(f) = font {
        let label = id.to_string();
        let scale = PxScale::from(LABEL_SCALE);
        // Position text above the box if there's room, otherwise below
        let text_y = if y1 > 20 { y1 - 20 } else { y2 + 5 };
        let text_x = x1;
        if text_y >= 0 && text_x < width as i32 && text_y < height as i32 {
            draw_text_mut(image, text_color.into(), text_x, text_y, scale, f, &label);
        }
    }
}
