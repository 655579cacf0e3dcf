use anyhow::Context;
use clap::Parser;
use image::ImageFormat;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use unicode_normalization::UnicodeNormalization;

use diagram_extractor::debug::DebugConfig;
use diagram_extractor::{
    BoundingBox, DiagramExtractor, ExtractorConfig, Retrieval, Variant, codec,
};

#[derive(Parser)]
#[command(name = "diagram-extractor")]
#[command(about = "Find diagrams in an uploaded image and store an annotated copy or a silhouette")]
struct Cli {
    /// Path to the uploaded image
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Rendering of the extracted contours
    #[arg(long, value_enum, env = "DIAGRAM_MODE", default_value_t = Variant::Annotate)]
    mode: Variant,

    /// Contour retrieval (defaults to external for annotate, full for silhouette)
    #[arg(long, value_enum)]
    retrieval: Option<Retrieval>,

    /// Directory the extracted image is stored in
    #[arg(long, value_name = "DIR", default_value = "uploads")]
    upload_dir: PathBuf,

    /// Hysteresis low threshold of the edge detector
    #[arg(long, default_value_t = diagram_extractor::config::LOW_THRESHOLD)]
    low_threshold: f32,

    /// Hysteresis high threshold of the edge detector
    #[arg(long, default_value_t = diagram_extractor::config::HIGH_THRESHOLD)]
    high_threshold: f32,

    /// Boxes must be wider and taller than this to be drawn
    #[arg(long, default_value_t = diagram_extractor::config::MIN_BOX_SIZE)]
    min_size: u32,

    /// Rectangle outline thickness in pixels
    #[arg(long, default_value_t = diagram_extractor::config::RECT_THICKNESS)]
    thickness: u32,

    /// Save intermediate stages to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Success {
    success: bool,
    image_url: PathBuf,
    contours: usize,
    boxes: Vec<BoundingBox>,
}

#[derive(Serialize)]
struct Failure {
    success: bool,
    error: String,
}

fn main() -> ExitCode {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(success) => {
            print_json(&success);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error extracting diagrams: {:#}", e);
            let failure = Failure {
                success: false,
                error: format!("{:#}", e),
            };
            print_json(&failure);
            ExitCode::FAILURE
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Failed to serialize result: {}", e),
    }
}

fn run(args: &Cli) -> anyhow::Result<Success> {
    let file_name = secure_filename(&args.image_path)
        .with_context(|| format!("No usable file name in {:?}", args.image_path))?;

    let config = ExtractorConfig::new(args.mode)
        .with_retrieval(args.retrieval.unwrap_or_else(|| args.mode.default_retrieval()))
        .with_thresholds(args.low_threshold, args.high_threshold)
        .with_min_box_size(args.min_size)
        .with_thickness(args.thickness);
    let extractor = DiagramExtractor::new(config);

    let debug = args.debug_out.clone().map(DebugConfig::new).transpose()?;

    info!("Loading image: {:?}", args.image_path);
    let bytes = std::fs::read(&args.image_path)
        .with_context(|| format!("Failed to read {:?}", args.image_path))?;

    let (output_path, format) = output_target(&args.upload_dir, &file_name);
    let output = codec::extract_bytes_as(&extractor, &bytes, Some(format))?;
    info!(
        contours = output.extraction.contours.len(),
        boxes = output.extraction.boxes.len(),
        "Extraction finished"
    );

    if let Some(debug) = &debug {
        debug.save(&output.input.image, &output.extraction)?;
    }

    std::fs::create_dir_all(&args.upload_dir)
        .with_context(|| format!("Failed to create {:?}", args.upload_dir))?;
    std::fs::write(&output_path, &output.bytes)
        .with_context(|| format!("Failed to write {:?}", output_path))?;
    info!("Saved {:?}", output_path);

    Ok(Success {
        success: true,
        image_url: output_path,
        contours: output.extraction.contours.len(),
        boxes: output.extraction.boxes,
    })
}

/// Where the extracted image goes and how it is encoded. The extension
/// decides the encoder; names it cannot pick a writable one from end in `.png`.
fn output_target(upload_dir: &Path, file_name: &str) -> (PathBuf, ImageFormat) {
    let mut path = upload_dir.join(format!("extracted_{}", file_name));
    match ImageFormat::from_path(&path) {
        Ok(format) if codec::output_format(Some(format)) == format => (path, format),
        _ => {
            path.set_extension("png");
            (path, ImageFormat::Png)
        }
    }
}

/// Reduce an upload's name to a safe flat ASCII file name. Accents are
/// decomposed first so `ü` keeps its `u`.
fn secure_filename(path: &Path) -> Option<String> {
    let name: String = path.file_name()?.to_string_lossy().nfkd().collect();

    let mut cleaned = String::with_capacity(name.len());
    for word in name.split_whitespace() {
        if !cleaned.is_empty() {
            cleaned.push('_');
        }
        cleaned.extend(
            word.chars()
                .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_')),
        );
    }

    let cleaned = cleaned.trim_matches(['.', '_']).to_string();
    if cleaned.is_empty() { None } else { Some(cleaned) }
}
