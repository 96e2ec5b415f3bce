// vision-overlay 🦀 MIT OR Apache-2.0 License

//! # vision-overlay
//!
//! [![crates.io](https://img.shields.io/crates/v/vision-overlay.svg)](https://crates.io/crates/vision-overlay)
//! [![docs.rs](https://docs.rs/vision-overlay/badge.svg)](https://docs.rs/vision-overlay)
//!
//! Overlay drawing for computer-vision results: deterministic identity
//! colors, human pose skeletons, and alpha-mask compositing. The crate is a
//! presentation layer only; detections, tracks, and poses come from
//! elsewhere, and everything here draws onto caller-owned image buffers.
//!
//! ## Features
//!
//! - **Identity colors** - Stable per-id RGBA colors via HSV hue stepping,
//!   with track ids folded onto a small well-separated palette
//! - **Pose rendering** - 18-keypoint skeletons with colored keypoint
//!   circles, translucent limb sticks, id labels, and bounding boxes
//! - **Simple rendering** - A lightweight all-white line variant
//! - **Alpha utilities** - Brightness-derived alpha masks and RGB + mask
//!   to RGBA merging
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! vision-overlay = "0.1"
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use image::RgbImage;
//! use vision_overlay::{KEYPOINT_COUNT, Keypoint, Pose, draw_poses_mut, font};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut frame = RgbImage::new(1280, 720);
//!
//!     // Keypoints the estimator missed carry the absent sentinel
//!     let mut keypoints = vec![Keypoint::ABSENT; KEYPOINT_COUNT];
//!     keypoints[0] = Keypoint::new(640.0, 200.0); // nose
//!     keypoints[1] = Keypoint::new(640.0, 260.0); // neck
//!     let pose = Pose::new(keypoints, 0.93).with_id(4);
//!
//!     let font_data = font::default_font_bytes()?;
//!     let font = font::font_from_bytes(&font_data)?;
//!     draw_poses_mut(&mut frame, &[pose], Some(&font));
//!
//!     frame.save("pose.png")?;
//!     Ok(())
//! }
//! ```
//!
//! Identity colors stand alone:
//!
//! ```
//! use vision_overlay::{DEFAULT_ALPHA, DEFAULT_HUE_STEP, unique_color};
//!
//! let track_id = 17;
//! let color = unique_color(track_id, true, DEFAULT_HUE_STEP, DEFAULT_ALPHA);
//! assert_eq!(color, unique_color(track_id, true, DEFAULT_HUE_STEP, DEFAULT_ALPHA));
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`color`] | [`Color`], the keypoint palette, and [`unique_color`] |
//! | [`pose`] | [`Pose`], [`Keypoint`], and [`BoundingBox`] data types |
//! | [`skeleton`] | BODY-18 limb topology |
//! | [`render`] | [`draw_poses_mut`] and [`draw_poses_simple_mut`] |
//! | [`draw`] | Shared raster primitives ([`blend_weighted_mut`]) |
//! | [`alpha`] | [`create_alpha`] and [`add_alpha`] compositing utilities |
//! | [`font`] | Local label-font resolution |
//! | [`error`] | Error types ([`OverlayError`], [`Result`]) |
//!
//! ## License
//!
//! Dual-licensed under MIT or Apache-2.0, at your option.

// Modules
pub mod alpha;
pub mod color;
pub mod draw;
pub mod error;
pub mod font;
pub mod pose;
pub mod render;
pub mod skeleton;

// Re-export main types for convenience
pub use alpha::{add_alpha, create_alpha};
pub use color::{Color, DEFAULT_ALPHA, DEFAULT_HUE_STEP, KEYPOINT_COLORS, hsv_to_rgb, unique_color};
pub use draw::blend_weighted_mut;
pub use error::{OverlayError, Result};
pub use pose::{BoundingBox, KEYPOINT_COUNT, Keypoint, Pose, poses_from_array};
pub use render::{draw_poses_mut, draw_poses_simple_mut};
pub use skeleton::LIMBS;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
