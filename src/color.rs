// vision-overlay 🦀 MIT OR Apache-2.0 License

//! Color types and deterministic identity color generation.

/// RGBA color used for overlay drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    /// Red color.
    pub const RED: Color = Color(255, 0, 0, 255);
    /// Green color.
    pub const GREEN: Color = Color(0, 255, 0, 255);
    /// Blue color.
    pub const BLUE: Color = Color(0, 0, 255, 255);
    /// Magenta color.
    pub const MAGENTA: Color = Color(255, 0, 255, 255);
    /// White color.
    pub const WHITE: Color = Color(255, 255, 255, 255);
    /// Black color.
    pub const BLACK: Color = Color(0, 0, 0, 255);

    /// Create a new opaque color from RGB values.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b, 255)
    }

    /// Replace the alpha channel.
    pub fn with_alpha(self, alpha: u8) -> Self {
        Self(self.0, self.1, self.2, alpha)
    }

    /// Get a color from the keypoint palette by index.
    pub fn from_keypoint_index(index: usize) -> Self {
        let color = KEYPOINT_COLORS[index % KEYPOINT_COLORS.len()];
        Self(color[0], color[1], color[2], 255)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        Self([color.0, color.1, color.2])
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(color: Color) -> Self {
        Self([color.0, color.1, color.2, color.3])
    }
}

/// Keypoint Color Palette (BODY-18 order)
pub const KEYPOINT_COLORS: [[u8; 3]; 18] = [
    [255, 0, 0],   // #ff0000
    [255, 85, 0],  // #ff5500
    [255, 170, 0], // #ffaa00
    [255, 255, 0], // #ffff00
    [170, 255, 0], // #aaff00
    [85, 255, 0],  // #55ff00
    [0, 255, 0],   // #00ff00
    [0, 255, 85],  // #00ff55
    [0, 255, 170], // #00ffaa
    [0, 255, 255], // #00ffff
    [0, 170, 255], // #00aaff
    [0, 85, 255],  // #0055ff
    [0, 0, 255],   // #0000ff
    [85, 0, 255],  // #5500ff
    [170, 0, 255], // #aa00ff
    [255, 0, 255], // #ff00ff
    [255, 0, 170], // #ff00aa
    [255, 0, 85],  // #ff0055
];

/// Default hue advance between consecutive identity colors.
pub const DEFAULT_HUE_STEP: f64 = 0.41;

/// Default alpha applied to generated identity colors.
pub const DEFAULT_ALPHA: f32 = 0.7;

/// Generate a deterministic color for an integer identity.
///
/// Walks the hue circle in `hue_step` increments at full saturation, darkening
/// slightly as the index grows. Track ids are first reduced modulo the palette
/// period `floor(1 / hue_step)` so an unbounded id stream reuses a small set
/// of well-separated colors.
///
/// # Arguments
///
/// * `index` - Detection index or track id.
/// * `is_track` - Whether `index` is a track id (enables the modulo reduction).
/// * `hue_step` - Fraction of the hue circle between consecutive colors.
/// * `alpha` - Alpha for the generated color, in `[0, 1]`.
pub fn unique_color(index: usize, is_track: bool, hue_step: f64, alpha: f32) -> Color {
    let mut index = index;
    if is_track {
        let period = ((1.0 / hue_step) as usize).max(1);
        index %= period;
    }
    let h = (index as f64 * 360.0 * hue_step) as i32;
    let v = 1.0 - (index as f64 * hue_step) / 5.0;
    let (r, g, b) = hsv_to_rgb(h, 1.0, v);
    Color(
        (255.0 * r) as u8,
        (255.0 * g) as u8,
        (255.0 * b) as u8,
        (alpha * 255.0) as u8,
    )
}

/// Convert an HSV color to unit-range RGB.
///
/// `h` is in degrees (values at or above 360 wrap to 0), `s` and `v` are in
/// `[0, 1]`. Non-positive saturation yields the achromatic `(v, v, v)`.
pub fn hsv_to_rgb(h: i32, s: f64, v: f64) -> (f64, f64, f64) {
    if s <= 0.0 {
        return (v, v, v);
    }

    let mut hh = f64::from(h);
    if hh >= 360.0 {
        hh = 0.0;
    }
    hh /= 60.0;
    let sector = hh as i64;
    let ff = hh - sector as f64;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * ff);
    let t = v * (1.0 - s * (1.0 - ff));

    match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
