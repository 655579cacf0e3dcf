use std::path::{Path, PathBuf};

use anyhow::Result;
use image::DynamicImage;
use tracing::debug;

use crate::detection::Extraction;

/// Where intermediate stage images are written
#[derive(Clone, Debug)]
pub struct DebugConfig {
    pub output_dir: PathBuf,
}

impl DebugConfig {
    /// The directory must be empty or non-existent
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(anyhow::anyhow!(
                    "Debug directory is not empty: {}",
                    output_dir.display()
                ));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        Ok(Self { output_dir })
    }

    /// Write one PNG per stage, `NN_stage/01.png`
    pub fn save(&self, input: &DynamicImage, extraction: &Extraction) -> Result<()> {
        let stages = [
            ("00_input", input.clone()),
            ("01_grayscale", DynamicImage::ImageLuma8(extraction.grayscale.clone())),
            ("02_edges", DynamicImage::ImageLuma8(extraction.edges.clone())),
            ("03_output", extraction.output.clone()),
        ];

        for (dir_name, image) in &stages {
            self.save_stage(dir_name, image)?;
        }

        Ok(())
    }

    fn save_stage(&self, dir_name: &str, image: &DynamicImage) -> Result<()> {
        let stage_dir = self.output_dir.join(dir_name);
        std::fs::create_dir_all(&stage_dir)?;

        let output_path = stage_dir.join("01.png");
        image
            .save(&output_path)
            .map_err(|e| anyhow::anyhow!("Failed to save debug image: {}", e))?;

        debug!("saved {}", relative(&self.output_dir, &output_path).display());
        Ok(())
    }
}

fn relative<'a>(root: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}
