// vision-overlay 🦀 MIT OR Apache-2.0 License

//! Pose data types consumed by the renderers.

use ndarray::{ArrayView2, ArrayView3};

use crate::error::{OverlayError, Result};

/// Number of keypoints in a pose (BODY-18 layout).
pub const KEYPOINT_COUNT: usize = 18;

/// A 2D keypoint in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keypoint {
    /// Horizontal pixel coordinate.
    pub x: f32,
    /// Vertical pixel coordinate.
    pub y: f32,
}

impl Keypoint {
    /// Sentinel for a keypoint the estimator did not detect.
    pub const ABSENT: Keypoint = Keypoint { x: -1.0, y: -1.0 };

    /// Create a new keypoint.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Check whether this keypoint carries the absent sentinel.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        *self == Self::ABSENT
    }
}

/// Axis-aligned box enclosing the detected keypoints of a pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Left edge.
    pub x_min: f32,
    /// Top edge.
    pub y_min: f32,
    /// Right edge.
    pub x_max: f32,
    /// Bottom edge.
    pub y_max: f32,
}

impl BoundingBox {
    /// Box width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    /// Box height.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }
}

/// A single estimated human pose.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    /// Keypoint locations in BODY-18 order; undetected entries hold
    /// [`Keypoint::ABSENT`].
    pub keypoints: Vec<Keypoint>,
    /// Estimator confidence for this pose.
    pub score: f32,
    /// Track identity assigned by an external tracker, if any.
    pub id: Option<i32>,
}

impl Pose {
    /// Create a new pose without a track identity.
    ///
    /// # Arguments
    ///
    /// * `keypoints` - Keypoint locations in BODY-18 order.
    /// * `score` - Estimator confidence for this pose.
    ///
    /// # Returns
    ///
    /// * A new `Pose` instance.
    #[must_use]
    pub const fn new(keypoints: Vec<Keypoint>, score: f32) -> Self {
        Self {
            keypoints,
            score,
            id: None,
        }
    }

    /// Attach a track identity.
    #[must_use]
    pub const fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    /// Build a pose from an `(18, 2)` coordinate view.
    ///
    /// The estimator score defaults to 1.0; undetected keypoints are expected
    /// to carry the `(-1, -1)` sentinel in the input.
    ///
    /// # Arguments
    ///
    /// * `keypoints` - View of keypoint coordinates, one row per keypoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the view shape is not `(18, 2)`.
    pub fn from_array(keypoints: ArrayView2<'_, f32>) -> Result<Self> {
        let shape = keypoints.shape();
        if shape[0] != KEYPOINT_COUNT || shape[1] != 2 {
            return Err(OverlayError::PoseError(format!(
                "expected keypoint array of shape ({KEYPOINT_COUNT}, 2), got ({}, {})",
                shape[0], shape[1]
            )));
        }

        let keypoints = keypoints
            .outer_iter()
            .map(|row| Keypoint::new(row[0], row[1]))
            .collect();
        Ok(Self::new(keypoints, 1.0))
    }

    /// Axis-aligned bounding box of the present keypoints.
    ///
    /// # Returns
    ///
    /// * `Some` hull of every keypoint that is not absent, or `None` when the
    ///   pose has no present keypoints.
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut bounds: Option<BoundingBox> = None;
        for keypoint in self.keypoints.iter().filter(|k| !k.is_absent()) {
            match bounds.as_mut() {
                None => {
                    bounds = Some(BoundingBox {
                        x_min: keypoint.x,
                        y_min: keypoint.y,
                        x_max: keypoint.x,
                        y_max: keypoint.y,
                    });
                }
                Some(b) => {
                    b.x_min = b.x_min.min(keypoint.x);
                    b.y_min = b.y_min.min(keypoint.y);
                    b.x_max = b.x_max.max(keypoint.x);
                    b.y_max = b.y_max.max(keypoint.y);
                }
            }
        }
        bounds
    }
}

/// Build poses from an `(N, 18, 2)` batch view.
///
/// # Arguments
///
/// * `batch` - View of keypoint coordinates, one `(18, 2)` plane per pose.
///
/// # Errors
///
/// Returns an error if the trailing dimensions are not `(18, 2)`.
pub fn poses_from_array(batch: ArrayView3<'_, f32>) -> Result<Vec<Pose>> {
    let shape = batch.shape();
    if shape[1] != KEYPOINT_COUNT || shape[2] != 2 {
        return Err(OverlayError::PoseError(format!(
            "expected batch of shape (N, {KEYPOINT_COUNT}, 2), got ({}, {}, {})",
            shape[0], shape[1], shape[2]
        )));
    }

    batch.outer_iter().map(Pose::from_array).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3};

    fn absent_pose() -> Pose {
        Pose::new(vec![Keypoint::ABSENT; KEYPOINT_COUNT], 1.0)
    }

    #[test]
    fn test_absent_sentinel() {
        assert!(Keypoint::new(-1.0, -1.0).is_absent());
        assert!(!Keypoint::new(-1.0, 0.0).is_absent());
        assert!(!Keypoint::new(0.0, 0.0).is_absent());
    }

    #[test]
    fn test_with_id() {
        let pose = absent_pose().with_id(42);
        assert_eq!(pose.id, Some(42));
        assert_eq!(absent_pose().id, None);
    }

    #[test]
    fn test_from_array_shape_check() {
        let good = Array2::<f32>::zeros((KEYPOINT_COUNT, 2));
        let pose = Pose::from_array(good.view()).unwrap();
        assert_eq!(pose.keypoints.len(), KEYPOINT_COUNT);
        assert!((pose.score - 1.0).abs() < 1e-6);

        let bad = Array2::<f32>::zeros((KEYPOINT_COUNT - 1, 2));
        assert!(Pose::from_array(bad.view()).is_err());

        let bad = Array2::<f32>::zeros((KEYPOINT_COUNT, 3));
        assert!(Pose::from_array(bad.view()).is_err());
    }

    #[test]
    fn test_poses_from_array() {
        let batch = Array3::<f32>::zeros((3, KEYPOINT_COUNT, 2));
        let poses = poses_from_array(batch.view()).unwrap();
        assert_eq!(poses.len(), 3);

        let bad = Array3::<f32>::zeros((3, 2, KEYPOINT_COUNT));
        assert!(poses_from_array(bad.view()).is_err());
    }

    #[test]
    fn test_bounding_box_ignores_absent() {
        let mut pose = absent_pose();
        pose.keypoints[0] = Keypoint::new(10.0, 20.0);
        pose.keypoints[5] = Keypoint::new(30.0, 5.0);

        let bbox = pose.bounding_box().unwrap();
        assert_eq!(bbox.x_min, 10.0);
        assert_eq!(bbox.y_min, 5.0);
        assert_eq!(bbox.x_max, 30.0);
        assert_eq!(bbox.y_max, 20.0);
        assert_eq!(bbox.width(), 20.0);
        assert_eq!(bbox.height(), 15.0);
    }

    #[test]
    fn test_bounding_box_of_absent_pose_is_none() {
        assert!(absent_pose().bounding_box().is_none());
    }
}
