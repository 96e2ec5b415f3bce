// vision-overlay 🦀 MIT OR Apache-2.0 License

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use image::RgbImage;
use vision_overlay::{
    DEFAULT_ALPHA, DEFAULT_HUE_STEP, Keypoint, Pose, draw_poses_mut, unique_color,
};

fn sample_pose(offset: f32) -> Pose {
    // a rough standing figure in BODY-18 order
    let points = [
        (320.0, 80.0),  // nose
        (320.0, 140.0), // neck
        (270.0, 140.0), // right shoulder
        (250.0, 220.0), // right elbow
        (240.0, 300.0), // right wrist
        (370.0, 140.0), // left shoulder
        (390.0, 220.0), // left elbow
        (400.0, 300.0), // left wrist
        (290.0, 320.0), // right hip
        (285.0, 420.0), // right knee
        (280.0, 520.0), // right ankle
        (350.0, 320.0), // left hip
        (355.0, 420.0), // left knee
        (360.0, 520.0), // left ankle
        (305.0, 70.0),  // right eye
        (335.0, 70.0),  // left eye
        (290.0, 80.0),  // right ear
        (350.0, 80.0),  // left ear
    ];
    let keypoints = points
        .iter()
        .map(|&(x, y)| Keypoint::new(x + offset, y))
        .collect();
    Pose::new(keypoints, 0.9)
}

fn overlay_benchmark(c: &mut Criterion) {
    let poses: Vec<Pose> = (0..4)
        .map(|i| sample_pose(i as f32 * 150.0).with_id(i))
        .collect();
    let frame = RgbImage::new(1280, 720);

    c.bench_function("unique_color", |b| {
        b.iter(|| {
            for id in 0..64usize {
                black_box(unique_color(
                    black_box(id),
                    true,
                    DEFAULT_HUE_STEP,
                    DEFAULT_ALPHA,
                ));
            }
        })
    });

    c.bench_function("draw_poses", |b| {
        b.iter(|| {
            let mut image = frame.clone();
            draw_poses_mut(&mut image, &poses, None);
            black_box(image);
        })
    });
}

criterion_group!(benches, overlay_benchmark);
criterion_main!(benches);
