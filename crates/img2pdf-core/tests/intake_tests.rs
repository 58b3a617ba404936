mod common;

use common::*;
use img2pdf_core::*;

#[test]
fn test_is_image_media_type() {
    assert!(is_image_media_type("image/png"));
    assert!(is_image_media_type("image/jpeg"));
    assert!(is_image_media_type("image/svg+xml"));
    assert!(!is_image_media_type("application/pdf"));
    assert!(!is_image_media_type("text/plain"));
    assert!(!is_image_media_type(""));
    assert!(!is_image_media_type("IMAGE/PNG"));
    assert!(!is_image_media_type("video/image"));
}

#[test]
fn test_filter_keeps_image_subsequence_in_order() {
    let files = vec![
        png_file("a.png", 2, 2),
        text_file("notes.txt"),
        ImageFile::new("b.jpg", "image/jpeg", vec![1, 2, 3]),
        ImageFile::new("doc.pdf", "application/pdf", vec![4]),
        png_file("c.png", 3, 1),
        ImageFile::new("unknown", "", vec![5]),
    ];

    let images = filter_images(files.clone());

    let names: Vec<_> = images.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["a.png", "b.jpg", "c.png"]);

    let expected: Vec<_> = files
        .into_iter()
        .filter(|f| f.media_type.starts_with("image/"))
        .collect();
    assert_eq!(images, expected);
}

#[test]
fn test_filter_is_idempotent() {
    let files = vec![
        text_file("a.txt"),
        png_file("b.png", 1, 1),
        png_file("c.png", 1, 1),
    ];

    let once = filter_images(files);
    let twice = filter_images(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn test_filter_without_images_is_empty() {
    let images = filter_images(vec![text_file("a.txt"), text_file("b.txt")]);
    assert!(images.is_empty());
}

#[test]
fn test_media_type_for_path() {
    assert_eq!(media_type_for_path("photo.png"), "image/png");
    assert_eq!(media_type_for_path("dir/photo.JPG"), "image/jpeg");
    assert_eq!(media_type_for_path("report.pdf"), "application/pdf");
    assert_eq!(media_type_for_path("no_extension"), "");
}

#[tokio::test]
async fn test_read_image_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pixel.png");
    std::fs::write(&path, png_bytes(4, 3)).unwrap();

    let file = read_image_file(&path).await.unwrap();
    assert_eq!(file.name, "pixel.png");
    assert_eq!(file.media_type, "image/png");
    assert_eq!(&file.data[..], &png_bytes(4, 3)[..]);
}

#[tokio::test]
async fn test_read_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_image_file(dir.path().join("missing.png")).await;
    assert!(matches!(result, Err(ConvertError::Io(_))));
}

#[tokio::test]
async fn test_intake_paths_skips_non_images_without_opening_them() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.png");
    let second = dir.path().join("second.jpg");
    std::fs::write(&first, png_bytes(2, 2)).unwrap();
    std::fs::write(&second, jpeg_bytes(2, 2)).unwrap();

    // Never created: must not be read
    let missing_text = dir.path().join("missing.txt");

    let images = intake_paths(&[&second, &missing_text, &first]).await.unwrap();
    let names: Vec<_> = images.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["second.jpg", "first.png"]);
    assert_eq!(images[0].media_type, "image/jpeg");
}

#[tokio::test]
async fn test_generate_previews_in_order() {
    let images = vec![png_file("wide.png", 1024, 512), png_file("small.png", 10, 20)];

    let previews = generate_previews(&images).await.unwrap();
    assert_eq!(previews.len(), 2);

    assert_eq!(previews[0].name, "wide.png");
    assert_eq!((previews[0].source_width, previews[0].source_height), (1024, 512));
    assert_eq!((previews[0].width, previews[0].height), (256, 128));
    assert_eq!(previews[0].rgba.len(), 256 * 128 * 4);

    assert_eq!(previews[1].name, "small.png");
    assert!(previews[1].width <= 256 && previews[1].height <= 256);
    assert_eq!(
        previews[1].rgba.len(),
        (previews[1].width * previews[1].height * 4) as usize
    );
}

#[tokio::test]
async fn test_preview_of_corrupt_image_fails() {
    let file = ImageFile::new("broken.png", "image/png", b"definitely not png".to_vec());
    let result = generate_preview(&file).await;
    assert!(matches!(result, Err(ConvertError::Decode { .. })));
}
