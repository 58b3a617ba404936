//! Image intake: media type filtering, file loading and previews

use crate::constants::{IMAGE_MEDIA_PREFIX, PREVIEW_MAX_EDGE};
use crate::types::*;
use std::path::{Path, PathBuf};

/// Whether a declared media type names an image
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with(IMAGE_MEDIA_PREFIX)
}

/// Keep the images of a selection, in selection order.
///
/// Anything else is dropped without raising an error.
pub fn filter_images(files: impl IntoIterator<Item = ImageFile>) -> ImageSet {
    files
        .into_iter()
        .filter(|file| {
            let accepted = is_image_media_type(&file.media_type);
            if !accepted {
                log::debug!(
                    "Skipping {} (media type {:?})",
                    file.name,
                    file.media_type
                );
            }
            accepted
        })
        .collect()
}

/// Guess a media type from the file extension; empty when unknown
pub fn media_type_for_path(path: impl AsRef<Path>) -> String {
    mime_guess::from_path(path)
        .first()
        .map(|mime| mime.essence_str().to_string())
        .unwrap_or_default()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read a single file, declaring its media type from the extension
pub async fn read_image_file(path: impl AsRef<Path>) -> Result<ImageFile> {
    let path = path.as_ref();
    let data = tokio::fs::read(path).await?;
    Ok(ImageFile::new(
        display_name(path),
        media_type_for_path(path),
        data,
    ))
}

/// Read multiple files in order
pub async fn read_image_files(paths: &[impl AsRef<Path>]) -> Result<Vec<ImageFile>> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        files.push(read_image_file(path).await?);
    }
    Ok(files)
}

/// Build an image set from paths. Paths that do not name an image are
/// never opened.
pub async fn intake_paths(paths: &[impl AsRef<Path>]) -> Result<ImageSet> {
    let accepted: Vec<PathBuf> = paths
        .iter()
        .map(|path| path.as_ref())
        .filter(|path| {
            let media_type = media_type_for_path(path);
            if is_image_media_type(&media_type) {
                true
            } else {
                log::debug!("Skipping {} (media type {:?})", path.display(), media_type);
                false
            }
        })
        .map(Path::to_path_buf)
        .collect();

    let files = read_image_files(&accepted).await?;
    Ok(filter_images(files))
}

/// Decode an image into a thumbnail suitable for display
pub async fn generate_preview(file: &ImageFile) -> Result<Preview> {
    let file = file.clone();
    let preview = tokio::task::spawn_blocking(move || {
        let image = image::load_from_memory(&file.data).map_err(|source| ConvertError::Decode {
            name: file.name.clone(),
            source,
        })?;
        let thumbnail = image.thumbnail(PREVIEW_MAX_EDGE, PREVIEW_MAX_EDGE).to_rgba8();

        Ok::<_, ConvertError>(Preview {
            name: file.name,
            source_width: image.width(),
            source_height: image.height(),
            width: thumbnail.width(),
            height: thumbnail.height(),
            rgba: thumbnail.into_raw(),
        })
    })
    .await??;

    Ok(preview)
}

/// Previews for a whole set, produced one at a time in selection order
pub async fn generate_previews(images: &[ImageFile]) -> Result<Vec<Preview>> {
    let mut previews = Vec::with_capacity(images.len());
    for file in images {
        previews.push(generate_preview(file).await?);
    }
    Ok(previews)
}
