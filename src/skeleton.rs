// vision-overlay 🦀 MIT OR Apache-2.0 License

/// BODY-18 pose skeleton structure (pairs of keypoint indices)
/// Defines which keypoints connect to form a limb stick
pub const LIMBS: [[usize; 2]; 17] = [
    [1, 2],   // neck to right shoulder
    [1, 5],   // neck to left shoulder
    [2, 3],   // right shoulder to right elbow
    [3, 4],   // right elbow to right wrist
    [5, 6],   // left shoulder to left elbow
    [6, 7],   // left elbow to left wrist
    [1, 8],   // neck to right hip
    [8, 9],   // right hip to right knee
    [9, 10],  // right knee to right ankle
    [1, 11],  // neck to left hip
    [11, 12], // left hip to left knee
    [12, 13], // left knee to left ankle
    [1, 0],   // neck to nose
    [0, 14],  // nose to right eye
    [14, 16], // right eye to right ear
    [0, 15],  // nose to left eye
    [15, 17], // left eye to left ear
];
