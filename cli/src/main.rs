//! unlayout CLI - structural reconstruction of parsed page primitives
//!
//! Consumes a "primitives dump": a JSON file produced by an external PDF
//! decoder holding, per page, the positioned characters, the flat extracted
//! text, raw table rows from up to two extraction strategies, and references
//! to extracted image bytes on disk. Emits the reconstructed document record
//! as JSON.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;

use unlayout::{
    render, Error, Extraction, Glyph, ImageSource, JsonFormat, LayoutSource, Pipeline,
    PipelineOptions, RawImage, RawRows, TableStrategy,
};

#[derive(Parser)]
#[command(name = "unlayout")]
#[command(version)]
#[command(about = "Reconstruct structured document records from parsed PDF page primitives", long_about = None)]
struct Cli {
    /// Input primitives JSON file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output JSON file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct a document record from a primitives dump
    Convert {
        /// Input primitives JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Directory to save extracted images
        #[arg(long, value_name = "DIR", default_value = "extracted_images")]
        images_dir: PathBuf,

        /// Prefer the alternate table strategy, falling back to the primary
        #[arg(long)]
        prefer_alternate: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show a summary of a primitives dump
    Info {
        /// Input primitives JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            images_dir,
            prefer_alternate,
            compact,
        }) => cmd_convert(
            &input,
            output.as_deref(),
            &images_dir,
            prefer_alternate,
            compact,
        ),
        Some(Commands::Info { input }) => cmd_info(&input),
        None => {
            if let Some(input) = cli.input {
                cmd_convert(
                    &input,
                    cli.output.as_deref(),
                    Path::new("extracted_images"),
                    false,
                    false,
                )
            } else {
                println!("{}", "Usage: unlayout <FILE> [OUTPUT]".yellow());
                println!("       unlayout --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    images_dir: &Path,
    prefer_alternate: bool,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Loading primitives...");
    let dump = Arc::new(PrimitivesDump::load(input)?);
    pb.inc(1);

    pb.set_message("Reconstructing...");
    let options = PipelineOptions::new()
        .with_asset_dir(images_dir)
        .prefer_alternate_tables(prefer_alternate);

    let mut pipeline = Pipeline::new(
        Box::new(DumpLayout(Arc::clone(&dump))),
        Box::new(DumpTables::primary(Arc::clone(&dump))),
    )
    .with_options(options);

    if dump.has_images() {
        pipeline = pipeline.with_images(Box::new(DumpImages(Arc::clone(&dump))));
    }
    if dump.has_alternate_tables() {
        pipeline = pipeline.with_alternate_tables(Box::new(DumpTables::alternate(dump.clone())));
    }

    let doc = pipeline.run()?;
    pb.inc(1);

    pb.set_message("Writing output...");
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = render::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        pb.inc(1);
        pb.finish_with_message("Done!");
        println!(
            "{} {} page(s) -> {}",
            "Reconstructed".green().bold(),
            doc.page_count(),
            path.display()
        );
        if dump.has_images() {
            println!("{} images -> {}", "Saved".green(), images_dir.display());
        }
    } else {
        pb.finish_and_clear();
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let dump = PrimitivesDump::load(input)?;

    println!("{}", "Primitives dump".green().bold());
    println!("  Pages: {}", dump.pages.len());

    for (index, page) in dump.pages.iter().enumerate() {
        println!(
            "  {} page {}: {} char(s), {} byte(s) of text, {} table(s){}, {} image(s)",
            "├─".dimmed(),
            index + 1,
            page.chars.len(),
            page.text.len(),
            page.tables.len(),
            match &page.tables_alt {
                Some(alt) => format!(" (+{} alternate)", alt.len()),
                None => String::new(),
            },
            page.images.len()
        );
    }

    Ok(())
}

/// On-disk primitives dump: the output of an external PDF decoder.
#[derive(Debug, Deserialize)]
struct PrimitivesDump {
    pages: Vec<PagePrimitives>,
}

#[derive(Debug, Deserialize)]
struct PagePrimitives {
    /// Positioned characters for heading detection
    #[serde(default)]
    chars: Vec<Glyph>,

    /// Flat extracted page text
    #[serde(default)]
    text: String,

    /// Raw table rows from the primary extraction strategy
    #[serde(default)]
    tables: Vec<RawRows>,

    /// Raw table rows from the alternate strategy; absent when the
    /// alternate extractor is unavailable
    #[serde(default)]
    tables_alt: Option<Vec<RawRows>>,

    /// References to extracted image bytes on disk
    #[serde(default)]
    images: Vec<ImageEntry>,
}

#[derive(Debug, Deserialize)]
struct ImageEntry {
    /// Path to the raw image bytes
    file: PathBuf,

    /// Width in pixels, if known
    width: Option<u32>,

    /// Height in pixels, if known
    height: Option<u32>,

    /// Source object id
    #[serde(default)]
    xref: u32,
}

impl PrimitivesDump {
    /// Load and validate a primitives dump.
    ///
    /// A file that cannot be read or parsed is the fatal "unreadable source"
    /// condition: no partial output is produced.
    fn load(path: &Path) -> Result<Self, Error> {
        let data = fs::read_to_string(path)
            .map_err(|e| Error::UnreadableSource(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&data)
            .map_err(|e| Error::UnreadableSource(format!("{}: {}", path.display(), e)))
    }

    fn page(&self, page: u32) -> Result<&PagePrimitives, Error> {
        self.pages
            .get((page - 1) as usize)
            .ok_or_else(|| Error::InvalidInput(format!("page {} out of range", page)))
    }

    fn has_images(&self) -> bool {
        self.pages.iter().any(|p| !p.images.is_empty())
    }

    fn has_alternate_tables(&self) -> bool {
        self.pages.iter().any(|p| p.tables_alt.is_some())
    }
}

/// Layout source backed by the dump.
struct DumpLayout(Arc<PrimitivesDump>);

impl LayoutSource for DumpLayout {
    fn page_count(&self) -> unlayout::Result<u32> {
        Ok(self.0.pages.len() as u32)
    }

    fn glyphs(&self, page: u32) -> unlayout::Result<Vec<Glyph>> {
        Ok(self.0.page(page)?.chars.clone())
    }

    fn text(&self, page: u32) -> unlayout::Result<String> {
        Ok(self.0.page(page)?.text.clone())
    }
}

/// Image source reading referenced byte files from disk.
struct DumpImages(Arc<PrimitivesDump>);

impl ImageSource for DumpImages {
    fn images(&self) -> unlayout::Result<BTreeMap<u32, Vec<RawImage>>> {
        let mut map = BTreeMap::new();
        for (index, page) in self.0.pages.iter().enumerate() {
            let page_number = index as u32 + 1;
            let mut raw = Vec::new();
            for entry in &page.images {
                match fs::read(&entry.file) {
                    Ok(data) => raw.push(RawImage {
                        data,
                        width: entry.width,
                        height: entry.height,
                        xref: entry.xref,
                    }),
                    Err(e) => {
                        log::warn!(
                            "skipping image {} on page {}: {}",
                            entry.file.display(),
                            page_number,
                            e
                        );
                    }
                }
            }
            if !raw.is_empty() {
                map.insert(page_number, raw);
            }
        }
        Ok(map)
    }
}

/// Table strategy reading either the primary or the alternate rows.
struct DumpTables {
    dump: Arc<PrimitivesDump>,
    alternate: bool,
}

impl DumpTables {
    fn primary(dump: Arc<PrimitivesDump>) -> Self {
        Self {
            dump,
            alternate: false,
        }
    }

    fn alternate(dump: Arc<PrimitivesDump>) -> Self {
        Self {
            dump,
            alternate: true,
        }
    }
}

impl TableStrategy for DumpTables {
    fn name(&self) -> &str {
        if self.alternate {
            "dump-alternate"
        } else {
            "dump-primary"
        }
    }

    fn extract(&self, page: u32) -> Extraction<Vec<RawRows>> {
        let page = match self.dump.page(page) {
            Ok(page) => page,
            Err(e) => return Extraction::Failed(e.to_string()),
        };

        if self.alternate {
            // An absent alternate block means the extractor was unavailable:
            // zero tables, so the resolver falls back to the primary.
            Extraction::Complete(page.tables_alt.clone().unwrap_or_default())
        } else {
            Extraction::Complete(page.tables.clone())
        }
    }
}
