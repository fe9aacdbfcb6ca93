//! End-to-end checks: load, segment, flatten, encode, decode, restore.

use image::{ImageFormat, Rgb, RgbImage};
use ndarray::Array3;
use segrle::codec::{self, compression_ratio, CompressionStats, Run};
use segrle::frame::{self, Image};
use segrle::input::load_image;
use segrle::segmentation::{self, HsvSegmenter, SegmentConfig, Segmenter};
use std::io::Cursor;

/// Leaf-green disc on a brown-gray background, with sensor noise.
fn leaf_photo(width: u32, height: u32) -> RgbImage {
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    let radius = width.min(height) as f32 / 3.0;
    RgbImage::from_fn(width, height, |x, y| {
        let noise = ((x * 7 + y * 13) % 5) as u8;
        let (dx, dy) = (x as f32 - cx, y as f32 - cy);
        if dx * dx + dy * dy < radius * radius {
            Rgb([50 + noise, 170 + noise, 60])
        } else {
            Rgb([110 + noise, 95, 80 + noise])
        }
    })
}

fn png_bytes(rgb: &RgbImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

#[test]
fn segmented_photo_round_trips_through_codec() {
    let image = load_image(&png_bytes(&leaf_photo(320, 240))).unwrap();
    let out = segmentation::segment(&image).unwrap();
    assert_eq!(out.segmented.dim(), (200, 200, 3));

    let (h, w, c) = out.segmented.dim();
    let pixels = frame::flatten(&out.segmented);
    assert_eq!(pixels.len(), 120_000);

    let runs = codec::encode(&pixels);
    let restored = frame::unflatten(codec::decode(&runs).unwrap(), h, w, c).unwrap();
    assert_eq!(restored, out.segmented);
}

#[test]
fn segmentation_improves_compression() {
    let image = frame::from_rgb(&leaf_photo(200, 200));
    let out = segmentation::segment(&image).unwrap();

    let raw = frame::flatten(&out.normalized);
    let masked = frame::flatten(&out.segmented);
    let raw_stats = CompressionStats::new(raw.len(), &codec::encode(&raw));
    let masked_stats = CompressionStats::new(masked.len(), &codec::encode(&masked));

    assert!(masked_stats.run_count < raw_stats.run_count);
    assert!(masked_stats.ratio > raw_stats.ratio);
    // Corners are background and must be black.
    assert_eq!(out.segmented[[0, 0, 0]], 0);
    assert_eq!(out.segmented[[199, 199, 2]], 0);
    // Center is foreground and keeps its color.
    assert_eq!(out.segmented[[100, 100, 1]], out.normalized[[100, 100, 1]]);
}

#[test]
fn all_black_single_channel_image() {
    let image = frame::unflatten(vec![0; 4], 2, 2, 1).unwrap();
    let pixels = frame::flatten(&image);
    let runs = codec::encode(&pixels);
    assert_eq!(runs, vec![Run::new(0u8, 4)]);
    assert_eq!(compression_ratio(pixels.len(), runs.len()), 75.0);
}

#[test]
fn segment_twice_gives_identical_output() {
    let image = frame::from_rgb(&leaf_photo(123, 77));
    let segmenter = HsvSegmenter::new(SegmentConfig::default()).unwrap();
    assert_eq!(
        segmenter.segment(&image).unwrap(),
        segmenter.segment(&image).unwrap()
    );
}

#[test]
fn single_pixel_classification() {
    // h=60, s=204, v=200.
    let green: Image = Array3::from_shape_vec((1, 1, 3), vec![40, 200, 40]).unwrap();
    // Same hue, nearly gray: 255 * 20 / 200 = 25.5, which the fixed-point
    // reciprocal rounds to 25.
    let pale: Image = Array3::from_shape_vec((1, 1, 3), vec![180, 200, 180]).unwrap();

    let segmenter = HsvSegmenter::new(SegmentConfig {
        target_width: 1,
        target_height: 1,
        kernel_size: 1,
        ..SegmentConfig::default()
    })
    .unwrap();

    assert_eq!(segmenter.mask(&green).unwrap()[[0, 0]], 255);
    assert_eq!(segmenter.mask(&pale).unwrap()[[0, 0]], 0);
}

#[test]
fn codec_runs_on_independent_threads() {
    let handles: Vec<_> = (0..4u8)
        .map(|seed| {
            std::thread::spawn(move || {
                let data: Vec<u8> = (0..1000u32).map(|i| ((i / 37) as u8) ^ seed).collect();
                let runs = codec::encode(&data);
                (data, codec::decode(&runs).unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (data, decoded) = handle.join().unwrap();
        assert_eq!(decoded, data);
    }
}
