//! Command-line interface for writing batches of marble textures to PNG

use crate::io::configuration::{
    DEFAULT_COUNT, DEFAULT_HEIGHT, DEFAULT_OUTPUT, DEFAULT_SEED, DEFAULT_WIDTH, DEFAULT_X_PERIOD,
    DEFAULT_Y_PERIOD,
};
use crate::io::error::Result;
use crate::io::image::export_texture_as_png;
use crate::io::progress::ProgressManager;
use crate::sampling::{LayeredPerlin, SeededRandom};
use crate::texture::{MarbleTexture, TextureGenerator};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "marble")]
#[command(author, version, about = "Generate grayscale marble textures")]
/// Command-line arguments for the texture generation tool
pub struct Cli {
    /// Output PNG file (numbered when more than one texture is generated)
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Texture width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH, allow_negative_numbers = true)]
    pub width: i32,

    /// Texture height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT, allow_negative_numbers = true)]
    pub height: i32,

    /// Band period along x (values below 2 are raised to 2)
    #[arg(short = 'x', long, default_value_t = DEFAULT_X_PERIOD)]
    pub x_period: f64,

    /// Band period along y (values below 2 are raised to 2)
    #[arg(short = 'y', long, default_value_t = DEFAULT_Y_PERIOD)]
    pub y_period: f64,

    /// Random seed for reproducible reseeding
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of textures to generate, reseeding between each
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Overwrite outputs that already exist
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Generates the textures requested on the command line
pub struct TextureBatch {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl TextureBatch {
    /// Create a new batch from the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and write every texture, returning the paths written
    ///
    /// The generator is reseeded between textures, so skipped outputs do not
    /// change the content of later ones. The progress bar is finished on
    /// success and abandoned on failure.
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails (for example, non-positive
    /// dimensions) or a texture cannot be written
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let outputs = self.output_paths();
        if outputs.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(outputs.len());
        }

        let result = self.write_all(&outputs);

        if let Some(ref pm) = self.progress_manager {
            if result.is_ok() {
                pm.finish();
            } else {
                pm.abandon();
            }
        }

        result
    }

    /// Progress display, absent in quiet mode
    pub const fn progress(&self) -> Option<&ProgressManager> {
        self.progress_manager.as_ref()
    }

    fn write_all(&mut self, outputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut texture = MarbleTexture::with_periods(
            self.cli.x_period,
            self.cli.y_period,
            LayeredPerlin::default(),
            SeededRandom::new(self.cli.seed),
        )?;

        let mut written = Vec::with_capacity(outputs.len());
        for (index, path) in outputs.iter().enumerate() {
            if index > 0 {
                texture.reset()?;
            }

            if !self.should_write(path) {
                if let Some(ref mut pm) = self.progress_manager {
                    pm.complete_texture(std::time::Duration::ZERO);
                }
                continue;
            }

            let start_time = Instant::now();
            if let Some(ref pm) = self.progress_manager {
                pm.start_texture(path);
            }

            let grid = texture.generate(self.cli.width, self.cli.height)?;
            export_texture_as_png(&grid, path)?;
            written.push(path.clone());

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_texture(start_time.elapsed());
            }
        }

        Ok(written)
    }

    /// Paths the batch writes to, in generation order
    pub fn output_paths(&self) -> Vec<PathBuf> {
        match self.cli.count {
            0 => Vec::new(),
            1 => vec![self.cli.output.clone()],
            count => (0..count)
                .map(|index| Self::numbered_path(&self.cli.output, index))
                .collect(),
        }
    }

    fn should_write(&self, path: &Path) -> bool {
        if !self.cli.skip_existing() || !path.exists() {
            return true;
        }

        if !self.cli.quiet {
            log::warn!("Skipping: {} (output exists)", path.display());
        }
        false
    }

    fn numbered_path(output: &Path, index: usize) -> PathBuf {
        let stem = output.file_stem().unwrap_or_default();
        let extension = output
            .extension()
            .map_or_else(|| "png".into(), |ext| ext.to_string_lossy());
        let name = format!("{}_{index}.{extension}", stem.to_string_lossy());

        if let Some(parent) = output.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }
}
