//! Integration test: run a synthetic photo through the full variation
//! pipeline and check that manipulation severity actually escalates.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use fakeseek_pipeline::{ConfidenceLabel, PipelineConfig, RgbaImage};

/// A smooth multi-hue gradient that survives JPEG compression well
/// enough to compare against the original.
fn photo_like_png(width: u32, height: u32) -> Vec<u8> {
    #[allow(clippy::cast_possible_truncation)]
    let img = RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([
            ((x * 255 / width.max(1)) % 256) as u8,
            ((y * 255 / height.max(1)) % 256) as u8,
            (((x + y) * 128 / (width + height).max(1) + 64) % 256) as u8,
            255,
        ])
    });
    let mut buf = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut buf);
    image::ImageEncoder::write_image(
        encoder,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ExtendedColorType::Rgba8,
    )
    .unwrap();
    buf
}

/// Mean absolute per-channel RGB difference between two frames.
fn mean_abs_diff(a: &RgbaImage, b: &RgbaImage) -> f64 {
    assert_eq!(a.dimensions(), b.dimensions());
    let mut total = 0u64;
    let mut count = 0u64;
    for (pa, pb) in a.pixels().zip(b.pixels()) {
        for c in 0..3 {
            total += u64::from(pa.0[c].abs_diff(pb.0[c]));
            count += 1;
        }
    }
    #[allow(clippy::cast_precision_loss)]
    {
        total as f64 / count as f64
    }
}

#[test]
fn variations_escalate_from_subtle_to_extreme() {
    let png = photo_like_png(96, 96);
    let original = image::load_from_memory(&png).unwrap().to_rgba8();

    let config = PipelineConfig {
        noise_seed: Some(2024),
    };
    let set = fakeseek_pipeline::generate_variations(&png, &config).expect("pipeline succeeds");

    assert_eq!(set.results.len(), 4);

    let diff_for = |label: ConfidenceLabel| {
        let jpeg = &set.get(label).unwrap().jpeg;
        let decoded = image::load_from_memory(jpeg).unwrap().to_rgba8();
        mean_abs_diff(&original, &decoded)
    };

    let subtle = diff_for(ConfidenceLabel::Subtle);
    let extreme = diff_for(ConfidenceLabel::Extreme);

    eprintln!("mean abs diff: subtle={subtle:.2} extreme={extreme:.2}");

    // The subtle variation is a gentle tint; the extreme variation
    // stacks heavy brightness/contrast, blur, warp, noise, and q30
    // compression. The gap should be unmistakable.
    assert!(
        subtle < extreme,
        "expected extreme ({extreme:.2}) to deviate more than subtle ({subtle:.2})",
    );
    assert!(
        extreme > 2.0 * subtle,
        "expected a wide severity gap, got subtle={subtle:.2} extreme={extreme:.2}",
    );
}

#[test]
fn repeated_runs_agree_when_seeded() {
    let png = photo_like_png(48, 48);
    let config = PipelineConfig {
        noise_seed: Some(7),
    };
    let a = fakeseek_pipeline::generate_variations(&png, &config).unwrap();
    let b = fakeseek_pipeline::generate_variations(&png, &config).unwrap();
    assert_eq!(a, b);
}
