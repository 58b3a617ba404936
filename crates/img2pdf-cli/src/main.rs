use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use img2pdf_core::{ConvertError, ConvertOptions, PageLayout, ProgressCallback};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::PathBuf;

mod logger;

#[derive(Parser)]
#[command(name = "img2pdf", about = "Combine images into a PDF, one per page", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert images into a single PDF
    Convert {
        /// Input files, in page order. Files that are not images are skipped
        #[arg(required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file [default: converted-images.pdf]
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        page: PageArgs,

        /// Document title
        #[arg(long)]
        title: Option<String>,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show how each image would be placed, without writing a PDF
    Inspect {
        /// Input files, in page order
        #[arg(required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Write an options file for use with --config
    Config {
        /// Options file to write
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        page: PageArgs,

        /// Document title
        #[arg(long)]
        title: Option<String>,

        /// Suggested output file name
        #[arg(long)]
        output_name: Option<String>,
    },
}

#[derive(Args)]
struct PageArgs {
    /// JSON options file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Page width in mm (with --paper custom)
    #[arg(long, requires = "page_height_mm")]
    page_width_mm: Option<f32>,

    /// Page height in mm (with --paper custom)
    #[arg(long, requires = "page_width_mm")]
    page_height_mm: Option<f32>,

    /// Page orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<OrientationArg> for img2pdf_core::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl PageArgs {
    /// Options from the config file (or defaults) with flags applied on top
    async fn resolve(&self) -> Result<ConvertOptions> {
        let mut options = match &self.config {
            Some(path) => ConvertOptions::load(path)
                .await
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => ConvertOptions::default(),
        };

        if let Some(paper) = self.paper {
            options.paper_size = match paper {
                PaperArg::A3 => img2pdf_core::PaperSize::A3,
                PaperArg::A4 => img2pdf_core::PaperSize::A4,
                PaperArg::A5 => img2pdf_core::PaperSize::A5,
                PaperArg::Letter => img2pdf_core::PaperSize::Letter,
                PaperArg::Legal => img2pdf_core::PaperSize::Legal,
                PaperArg::Tabloid => img2pdf_core::PaperSize::Tabloid,
                PaperArg::Custom => match (self.page_width_mm, self.page_height_mm) {
                    (Some(width_mm), Some(height_mm)) => img2pdf_core::PaperSize::Custom {
                        width_mm,
                        height_mm,
                    },
                    _ => bail!("--paper custom needs --page-width-mm and --page-height-mm"),
                },
            };
        }

        if let Some(orientation) = self.orientation {
            options.orientation = orientation.into();
        }

        options.validate()?;
        Ok(options)
    }
}

/// Terminal progress bar for a conversion
struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    fn new(terminal: &MultiProgress, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            terminal.add(ProgressBar::new(0))
        };
        let style = ProgressStyle::with_template(
            "{prefix:.bold} [{bar:40.green/238}] {pos:>3}/{len} images {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        bar.set_prefix("Converting");
        Self { bar }
    }
}

impl ProgressCallback for CliProgress {
    fn on_start(&self, total: usize) {
        self.bar.set_length(total as u64);
    }

    fn on_image_placed(&self, index: usize, _total: usize, fraction: f64) {
        self.bar.set_position(index as u64 + 1);
        self.bar.set_message(format!("{:.0}%", fraction * 100.0));
    }

    fn on_finalizing(&self) {
        self.bar.set_message("writing PDF");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let terminal = MultiProgress::new();
    logger::StderrLogger::new(cli.verbose, terminal.clone()).init()?;

    match cli.command {
        Commands::Convert {
            input,
            output,
            page,
            title,
            quiet,
        } => {
            let mut options = page.resolve().await?;
            if let Some(title) = title {
                options.title = title;
            }
            let output = output.unwrap_or_else(|| PathBuf::from(&options.output_name));

            let images = img2pdf_core::intake_paths(&input).await?;
            if images.is_empty() {
                return Err(ConvertError::EmptySelection.into());
            }

            let progress = CliProgress::new(&terminal, quiet);
            let result =
                img2pdf_core::convert_to_file(&images, &options, &output, &progress).await;
            progress.bar.finish_and_clear();
            result?;

            println!("Converted {} images → {}", images.len(), output.display());
        }

        Commands::Inspect { input, page } => {
            let options = page.resolve().await?;
            let page_mm = options.page_dimensions_mm();

            let images = img2pdf_core::intake_paths(&input).await?;
            println!(
                "Page: {} {:?} ({:.1} × {:.1} mm)",
                options.paper_size.name(),
                options.orientation,
                page_mm.0,
                page_mm.1
            );
            println!("  Accepted images: {}", images.len());
            println!("  Skipped files: {}", input.len() - images.len());

            for (index, file) in images.iter().enumerate() {
                let preview = img2pdf_core::generate_preview(file).await?;
                let layout =
                    PageLayout::fit((preview.source_width, preview.source_height), page_mm);
                println!(
                    "  {:>3}. {} ({} × {} px): scale {:.4}, {:.1} × {:.1} mm at ({:.1}, {:.1})",
                    index + 1,
                    file.name,
                    preview.source_width,
                    preview.source_height,
                    layout.scale_ratio,
                    layout.rendered_width,
                    layout.rendered_height,
                    layout.offset_x,
                    layout.offset_y
                );
            }
        }

        Commands::Config {
            output,
            page,
            title,
            output_name,
        } => {
            let mut options = page.resolve().await?;
            if let Some(title) = title {
                options.title = title;
            }
            if let Some(output_name) = output_name {
                options.output_name = output_name;
            }
            options.validate()?;
            options.save(&output).await?;
            println!("Wrote options → {}", output.display());
        }
    }

    Ok(())
}
