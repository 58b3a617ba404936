//! Page assembly: decode each image in order, lay it out and commit a page.

use crate::constants::{EMBED_DPI, mm_to_pt};
use crate::layout::PageLayout;
use crate::options::ConvertOptions;
use crate::types::{ConvertError, DecodedImage, ImageFile, Result};
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, RawImage, RawImageData, RawImageFormat,
    XObjectTransform,
};
use std::path::Path;

/// Receives progress as pages are committed.
///
/// All methods default to no-ops so callers only override what they need.
pub trait ProgressCallback: Send + Sync {
    /// Called once before the first image is decoded
    fn on_start(&self, total: usize) {
        let _ = total;
    }

    /// Called after image `index` (0-based) has been placed on its page.
    /// `fraction` is `(index + 1) / total` and reaches exactly 1.0 after the
    /// last image.
    fn on_image_placed(&self, index: usize, total: usize, fraction: f64) {
        let _ = (index, total, fraction);
    }

    /// Called once all pages are placed, before the document is encoded
    fn on_finalizing(&self) {}
}

/// Progress sink that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressCallback for NoProgress {}

/// The document being built.
///
/// A sink starts with one empty page; `add_page` appends another and makes
/// it current.
pub trait PageSink {
    fn add_page(&mut self);

    /// Draw an image on the current page, taking ownership of its pixels
    fn place_image(&mut self, image: DecodedImage, layout: &PageLayout) -> Result<()>;

    fn page_count(&self) -> usize;

    /// Page width and height in millimeters
    fn page_dimensions_mm(&self) -> (f32, f32);

    /// Encode the finished document
    fn finish(self) -> Result<Vec<u8>>;
}

/// `printpdf` backed page sink
pub struct PdfPageSink {
    doc: PdfDocument,
    page_width_mm: f32,
    page_height_mm: f32,
    pages: Vec<Vec<Op>>,
}

impl PdfPageSink {
    pub fn new(options: &ConvertOptions) -> Self {
        let (page_width_mm, page_height_mm) = options.page_dimensions_mm();
        Self {
            doc: PdfDocument::new(&options.title),
            page_width_mm,
            page_height_mm,
            pages: vec![Vec::new()],
        }
    }
}

impl PageSink for PdfPageSink {
    fn add_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn place_image(&mut self, image: DecodedImage, layout: &PageLayout) -> Result<()> {
        // At 72 DPI the image is drawn one point per pixel before scaling
        let scale_x = mm_to_pt(layout.rendered_width) / image.width as f32;
        let scale_y = mm_to_pt(layout.rendered_height) / image.height as f32;

        let raw = RawImage {
            pixels: RawImageData::U8(image.rgb),
            width: image.width as usize,
            height: image.height as usize,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let image_id = self.doc.add_image(&raw);

        let ops = self
            .pages
            .last_mut()
            .ok_or_else(|| ConvertError::Pdf("Document has no pages".to_string()))?;
        ops.push(Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                translate_x: Some(Mm(layout.offset_x).into_pt()),
                translate_y: Some(Mm(layout.offset_y).into_pt()),
                scale_x: Some(scale_x),
                scale_y: Some(scale_y),
                dpi: Some(EMBED_DPI),
                ..Default::default()
            },
        });

        Ok(())
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_dimensions_mm(&self) -> (f32, f32) {
        (self.page_width_mm, self.page_height_mm)
    }

    fn finish(mut self) -> Result<Vec<u8>> {
        let (width, height) = (Mm(self.page_width_mm), Mm(self.page_height_mm));
        for ops in self.pages {
            self.doc.pages.push(PdfPage::new(width, height, ops));
        }

        let mut warnings = Vec::new();
        let bytes = self.doc.save(&PdfSaveOptions::default(), &mut warnings);
        for warning in &warnings {
            log::debug!("printpdf: {:?}", warning);
        }

        Ok(bytes)
    }
}

/// Flatten any alpha channel onto a white background
fn flatten_onto_white(image: image::DynamicImage) -> image::RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut rgb = image::RgbImage::new(width, height);
    for (src, dst) in rgba.pixels().zip(rgb.pixels_mut()) {
        let [r, g, b, a] = src.0;
        let alpha = a as u16;
        let blend = |c: u8| ((c as u16 * alpha + 255 * (255 - alpha) + 127) / 255) as u8;
        dst.0 = [blend(r), blend(g), blend(b)];
    }
    rgb
}

/// Decode an image off the async executor
pub async fn decode_image(file: &ImageFile) -> Result<DecodedImage> {
    let file = file.clone();
    let decoded = tokio::task::spawn_blocking(move || {
        let image = image::load_from_memory(&file.data).map_err(|source| ConvertError::Decode {
            name: file.name.clone(),
            source,
        })?;
        let rgb = flatten_onto_white(image);

        Ok::<_, ConvertError>(DecodedImage {
            name: file.name,
            width: rgb.width(),
            height: rgb.height(),
            rgb: rgb.into_raw(),
        })
    })
    .await??;

    Ok(decoded)
}

/// Lay out every image of `images` on its own page of `sink`, in order.
///
/// Each decode completes before the next image is touched. The first image
/// goes on the sink's initial page, so the result has exactly one page per
/// image. Any failure aborts the whole run.
pub async fn assemble_into<S: PageSink>(
    mut sink: S,
    images: &[ImageFile],
    progress: &dyn ProgressCallback,
) -> Result<Vec<u8>> {
    if images.is_empty() {
        return Err(ConvertError::EmptySelection);
    }

    let total = images.len();
    progress.on_start(total);

    for (index, file) in images.iter().enumerate() {
        let image = decode_image(file).await?;
        if image.width == 0 || image.height == 0 {
            return Err(ConvertError::EmptyImage {
                name: image.name.clone(),
            });
        }

        let layout = PageLayout::fit(image.dimensions(), sink.page_dimensions_mm());

        log::debug!(
            "Placing {} ({}x{} px) at {:.1},{:.1} mm, {:.1}x{:.1} mm",
            image.name,
            image.width,
            image.height,
            layout.offset_x,
            layout.offset_y,
            layout.rendered_width,
            layout.rendered_height
        );

        if index > 0 {
            sink.add_page();
        }
        sink.place_image(image, &layout)?;

        progress.on_image_placed(index, total, (index + 1) as f64 / total as f64);
    }

    progress.on_finalizing();
    let page_count = sink.page_count();
    let bytes = sink.finish()?;
    log::info!("Finalized PDF with {} pages ({} bytes)", page_count, bytes.len());

    Ok(bytes)
}

/// Convert images to PDF bytes
pub async fn convert_images(
    images: &[ImageFile],
    options: &ConvertOptions,
    progress: &dyn ProgressCallback,
) -> Result<Vec<u8>> {
    options.validate()?;
    assemble_into(PdfPageSink::new(options), images, progress).await
}

/// Convert images and write the PDF to `output_path`
pub async fn convert_to_file(
    images: &[ImageFile],
    options: &ConvertOptions,
    output_path: impl AsRef<Path>,
    progress: &dyn ProgressCallback,
) -> Result<()> {
    let output_path = output_path.as_ref().to_owned();
    let bytes = convert_images(images, options, progress).await?;
    tokio::fs::write(&output_path, bytes).await?;
    Ok(())
}
