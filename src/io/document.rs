//! Multi-page document assembly and export
//!
//! A document is an append-only list of rendered pages. The output extension
//! picks the format: a PDF with one page per maze, a multi-frame GIF (one
//! frame per page, first page first) or a numbered PNG per page.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};
use log::debug;
use lopdf::{Document as PdfDocument, Object, Stream, dictionary};
use rand::Rng;

use crate::io::configuration::{GenerationConfig, PAGE_DISPLAY_MS, PDF_PIXELS_PER_INCH};
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::maze::carver::generate;
use crate::render::page::render_page;

/// Ordered collection of rendered maze pages
#[derive(Debug, Clone, Default)]
pub struct Document {
    pages: Vec<RgbaImage>,
}

impl Document {
    /// Create an empty document
    pub const fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Generate `config.pages` independent mazes, one page each
    ///
    /// A single random stream is consumed page after page, so the same seed
    /// reproduces the same document. `on_page` is called with the number of
    /// pages finished so far after each one is rendered.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn generate<R: Rng>(
        config: &GenerationConfig,
        rng: &mut R,
        mut on_page: impl FnMut(usize),
    ) -> Result<Self> {
        config.validate()?;
        let layout = config.layout();
        let mut document = Self::new();

        for page in 1..=config.pages {
            let grid = generate(config.width, config.height, rng)?;
            document.push(render_page(&grid, &layout));
            debug!(
                "page {page}/{}: {} passages carved",
                config.pages,
                grid.edge_count()
            );
            on_page(page);
        }

        Ok(document)
    }

    /// Append a page after the existing ones
    pub fn push(&mut self, page: RgbaImage) {
        self.pages.push(page);
    }

    /// Number of pages
    pub const fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether no page has been added yet
    pub const fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Pages in generation order
    pub fn pages(&self) -> &[RgbaImage] {
        &self.pages
    }

    /// Write the document and return the files created
    ///
    /// `.pdf` produces a single file with one page per maze, each page sized
    /// to its image; `.gif` produces a single looping multi-frame file; `.png`
    /// produces `<stem>_001.png`, `<stem>_002.png`, ... next to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The document has no pages
    /// - The extension is not `pdf`, `gif` or `png`
    /// - The parent directory or an output file cannot be created
    /// - Image encoding fails
    pub fn save(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if self.is_empty() {
            return Err(MazeError::InvalidDocument {
                reason: "No pages have been generated".to_string(),
            });
        }

        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("pdf") => {
                create_parent_dir(path)?;
                self.save_pdf(path)?;
                Ok(vec![path.to_path_buf()])
            }
            Some("gif") => {
                create_parent_dir(path)?;
                self.save_gif(path)?;
                Ok(vec![path.to_path_buf()])
            }
            Some("png") => {
                create_parent_dir(path)?;
                self.save_png_pages(path)
            }
            _ => Err(invalid_parameter(
                "output",
                &path.display(),
                &"output must end in .pdf, .gif or .png",
            )),
        }
    }

    fn save_pdf(&self, path: &Path) -> Result<()> {
        let mut pdf = PdfDocument::with_version("1.5");
        let pages_id = pdf.new_object_id();

        let kids: Vec<Object> = self
            .pages
            .iter()
            .map(|page| {
                let (width, height) = (to_points(page.width()), to_points(page.height()));

                let image = Stream::new(
                    dictionary! {
                        "Type" => "XObject",
                        "Subtype" => "Image",
                        "Width" => page.width(),
                        "Height" => page.height(),
                        "ColorSpace" => "DeviceRGB",
                        "BitsPerComponent" => 8,
                    },
                    page.pixels()
                        .flat_map(|&Rgba([r, g, b, _])| [r, g, b])
                        .collect(),
                );
                let image_id = pdf.add_object(image);

                // Scale the unit square to the full page and paint the image into it
                let content = format!("q {width} 0 0 {height} 0 0 cm /Im0 Do Q");
                let content_id = pdf.add_object(Stream::new(dictionary! {}, content.into_bytes()));

                pdf.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
                    "Contents" => content_id,
                    "Resources" => dictionary! {
                        "XObject" => dictionary! { "Im0" => image_id },
                    },
                })
                .into()
            })
            .collect();

        let count = kids.len() as i64;
        pdf.set_object(
            pages_id,
            dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            },
        );
        let catalog_id = pdf.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        pdf.trailer.set("Root", catalog_id);
        pdf.compress();

        pdf.save(path).map_err(|e| MazeError::FileSystem {
            path: path.to_path_buf(),
            operation: "write pdf",
            source: e,
        })?;

        Ok(())
    }

    fn save_gif(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| MazeError::FileSystem {
            path: path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let export_error = |e: image::ImageError| MazeError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        };

        let mut encoder = GifEncoder::new(BufWriter::new(file));
        encoder.set_repeat(Repeat::Infinite).map_err(export_error)?;

        let frames = self.pages.iter().map(|page| {
            Frame::from_parts(
                page.clone(),
                0,
                0,
                Delay::from_numer_denom_ms(PAGE_DISPLAY_MS, 1),
            )
        });
        encoder.encode_frames(frames).map_err(export_error)?;

        Ok(())
    }

    fn save_png_pages(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.pages.len());

        for (index, page) in self.pages.iter().enumerate() {
            let page_path = page_path(path, index + 1);
            page.save(&page_path)
                .map_err(|e| MazeError::ImageExport {
                    path: page_path.clone(),
                    source: e,
                })?;
            written.push(page_path);
        }

        Ok(written)
    }
}

/// File name for a numbered page next to `path`
pub fn page_path(path: &Path, number: usize) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default();
    let name = format!("{}_{number:03}.png", stem.to_string_lossy());

    if let Some(parent) = path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}

/// PDF user-space units (1/72 inch) covering `pixels` at `PDF_PIXELS_PER_INCH`
pub const fn to_points(pixels: u32) -> f64 {
    pixels as f64 * 72.0 / PDF_PIXELS_PER_INCH
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}
