//! Fit-inside placement of an image on a fixed page.

/// Where and how large an image is drawn on its page, in millimeters.
///
/// Offsets are measured from the page's lower-left corner. Since the image is
/// centered on both axes the same values hold from the upper-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    /// Millimeters per source pixel
    pub scale_ratio: f32,
    pub rendered_width: f32,
    pub rendered_height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl PageLayout {
    /// Scale an image of `image_px` pixels to the largest size that fits inside
    /// `page_mm` while preserving aspect ratio, then center it.
    ///
    /// Callers must reject zero-sized images first.
    pub fn fit(image_px: (u32, u32), page_mm: (f32, f32)) -> Self {
        let (image_width, image_height) = (image_px.0 as f32, image_px.1 as f32);
        let (page_width, page_height) = page_mm;

        let scale_ratio = (page_width / image_width).min(page_height / image_height);
        let rendered_width = image_width * scale_ratio;
        let rendered_height = image_height * scale_ratio;

        Self {
            scale_ratio,
            rendered_width,
            rendered_height,
            offset_x: (page_width - rendered_width) / 2.0,
            offset_y: (page_height - rendered_height) / 2.0,
        }
    }

    /// Center of the placed image
    pub fn center(&self) -> (f32, f32) {
        (
            self.offset_x + self.rendered_width / 2.0,
            self.offset_y + self.rendered_height / 2.0,
        )
    }
}
