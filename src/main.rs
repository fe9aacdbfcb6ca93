use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use image::imageops::FilterType;
use segrle::codec::{self, CompressionStats, Run};
use segrle::frame::{self, Image};
use segrle::input::{FileSource, ImageSource};
use segrle::output::{OutputSink, PngDirectory};
use segrle::segmentation::{HsvRange, HsvSegmenter, Preprocessor, SegmentConfig, Segmenter};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input image (PNG, JPEG, ...)
    input: PathBuf,

    /// Directory for normalized, segmented and decoded PNGs
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Normalized width
    #[arg(long, default_value_t = 200)]
    width: u32,

    /// Normalized height
    #[arg(long, default_value_t = 200)]
    height: u32,

    /// Resampling filter used when normalizing
    #[arg(long, value_enum, default_value_t = Filter::Triangle)]
    filter: Filter,

    /// Lowest foreground hue (0-180 scale)
    #[arg(long, default_value_t = 30)]
    hue_min: u8,

    /// Highest foreground hue (0-180 scale)
    #[arg(long, default_value_t = 90)]
    hue_max: u8,

    #[arg(long, default_value_t = 40)]
    sat_min: u8,

    #[arg(long, default_value_t = 255)]
    sat_max: u8,

    #[arg(long, default_value_t = 40)]
    val_min: u8,

    #[arg(long, default_value_t = 255)]
    val_max: u8,

    /// Side of the square element used to denoise the mask (odd)
    #[arg(long, default_value_t = 3)]
    kernel_size: usize,

    /// Number of leading runs to print
    #[arg(long, default_value_t = 20)]
    sample: usize,

    /// Also write the foreground mask as mask.png
    #[arg(long)]
    show_mask: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Filter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<Filter> for FilterType {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Nearest => FilterType::Nearest,
            Filter::Triangle => FilterType::Triangle,
            Filter::CatmullRom => FilterType::CatmullRom,
            Filter::Gaussian => FilterType::Gaussian,
            Filter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl Args {
    fn segment_config(&self) -> SegmentConfig {
        SegmentConfig {
            target_width: self.width,
            target_height: self.height,
            filter: self.filter.into(),
            range: HsvRange {
                lower: [self.hue_min, self.sat_min, self.val_min],
                upper: [self.hue_max, self.sat_max, self.val_max],
            },
            kernel_size: self.kernel_size,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    tracing::info!("segrle starting");
    tracing::info!("Normalized size: {}x{}", args.width, args.height);

    let segmenter =
        HsvSegmenter::new(args.segment_config()).context("Invalid segmentation settings")?;

    let mut source = FileSource::new(&args.input);

    let mut output = match &args.output_dir {
        Some(dir) => Some(
            PngDirectory::new(dir)
                .with_context(|| format!("Failed to create output directory {}", dir.display()))?,
        ),
        None => None,
    };

    run_pipeline(
        &mut source,
        &segmenter,
        output.as_mut().map(|o| o as &mut dyn OutputSink),
        args.sample,
        args.show_mask,
    )?;

    Ok(())
}

fn run_pipeline<S, G>(
    source: &mut S,
    segmenter: &G,
    mut output: Option<&mut dyn OutputSink>,
    sample: usize,
    show_mask: bool,
) -> Result<CompressionStats>
where
    S: ImageSource,
    G: Segmenter,
{
    let image = source.load().context("Failed to load image")?;

    // Step 1: segmentation
    let segment_start = Instant::now();
    let segmentation = segmenter
        .segment(&image)
        .context("Failed to segment image")?;
    let segment_time = segment_start.elapsed();

    if let Some(out) = output.as_deref_mut() {
        out.write_image("normalized", &segmentation.normalized)
            .context("Failed to write normalized image")?;
        out.write_image("segmented", &segmentation.segmented)
            .context("Failed to write segmented image")?;

        if show_mask {
            out.write_image("mask", &Preprocessor::mask_to_rgb(&segmentation.mask))
                .context("Failed to write mask image")?;
        }
    }

    // Step 2: compression
    let (height, width, channels) = segmentation.segmented.dim();
    let pixels = frame::flatten(&segmentation.segmented);

    let encode_start = Instant::now();
    let runs = codec::encode(&pixels);
    let encode_time = encode_start.elapsed();

    let stats = CompressionStats::new(pixels.len(), &runs);
    println!("Original samples: {}", stats.original_len);
    println!("RLE runs:         {}", stats.run_count);
    println!("Efficiency:       {:.2}%", stats.ratio);

    println!("{}", format_sample(&runs, sample));

    // Step 3: decompression
    let decode_start = Instant::now();
    let decoded = codec::decode(&runs).context("Failed to decode runs")?;
    let decode_time = decode_start.elapsed();

    let restored = frame::unflatten(decoded, height, width, channels)
        .context("Decoded samples do not fit the segmented image")?;

    if let Some(out) = output.as_deref_mut() {
        out.write_image("decoded", &restored)
            .context("Failed to write decoded image")?;
    }

    tracing::info!(
        "segment={:.1}ms, encode={:.1}ms, decode={:.1}ms",
        millis(segment_time),
        millis(encode_time),
        millis(decode_time)
    );

    verify_round_trip(&restored, &segmentation.segmented)?;
    println!("Round trip:       lossless");

    Ok(stats)
}

/// Render the first `sample` runs as `First N runs: [(v, c), ...]`
fn format_sample(runs: &[Run<u8>], sample: usize) -> String {
    let shown: Vec<String> = runs.iter().take(sample).map(|run| run.to_string()).collect();
    format!("First {} runs: [{}]", shown.len(), shown.join(", "))
}

fn verify_round_trip(restored: &Image, segmented: &Image) -> Result<()> {
    if restored != segmented {
        bail!("Decoded image differs from the segmented image");
    }
    Ok(())
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
