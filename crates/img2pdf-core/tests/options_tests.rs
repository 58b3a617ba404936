use img2pdf_core::*;

#[test]
fn test_paper_size_dimensions() {
    assert_eq!(PaperSize::A3.dimensions_mm(), (297.0, 420.0));
    assert_eq!(PaperSize::A4.dimensions_mm(), (210.0, 297.0));
    assert_eq!(PaperSize::A5.dimensions_mm(), (148.0, 210.0));
    assert_eq!(PaperSize::Letter.dimensions_mm(), (215.9, 279.4));
    assert_eq!(PaperSize::Legal.dimensions_mm(), (215.9, 355.6));
    assert_eq!(PaperSize::Tabloid.dimensions_mm(), (279.4, 431.8));
    assert_eq!(
        PaperSize::Custom {
            width_mm: 100.0,
            height_mm: 200.0
        }
        .dimensions_mm(),
        (100.0, 200.0)
    );
}

#[test]
fn test_orientation_swaps_dimensions() {
    assert_eq!(
        PaperSize::A4.dimensions_with_orientation(Orientation::Landscape),
        (297.0, 210.0)
    );
    assert_eq!(
        PaperSize::A4.dimensions_with_orientation(Orientation::Portrait),
        (210.0, 297.0)
    );
}

#[test]
fn test_default_options() {
    let options = ConvertOptions::default();
    assert_eq!(options.paper_size, PaperSize::A4);
    assert_eq!(options.orientation, Orientation::Portrait);
    assert_eq!(options.page_dimensions_mm(), (210.0, 297.0));
    assert_eq!(options.output_name, "converted-images.pdf");
    assert!(options.validate().is_ok());
}

#[test]
fn test_validate_rejects_bad_options() {
    let options = ConvertOptions {
        paper_size: PaperSize::Custom {
            width_mm: -1.0,
            height_mm: 100.0,
        },
        ..Default::default()
    };
    assert!(matches!(options.validate(), Err(ConvertError::Config(_))));

    let options = ConvertOptions {
        output_name: "  ".to_string(),
        ..Default::default()
    };
    assert!(matches!(options.validate(), Err(ConvertError::Config(_))));
}

#[tokio::test]
async fn test_options_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.json");

    let options = ConvertOptions {
        paper_size: PaperSize::Custom {
            width_mm: 100.0,
            height_mm: 150.0,
        },
        orientation: Orientation::Landscape,
        title: "Trip".to_string(),
        output_name: "trip.pdf".to_string(),
    };
    options.save(&path).await.unwrap();

    let loaded = ConvertOptions::load(&path).await.unwrap();
    assert_eq!(loaded, options);
}

#[tokio::test]
async fn test_partial_options_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.json");
    std::fs::write(&path, r#"{ "paper_size": "Letter" }"#).unwrap();

    let loaded = ConvertOptions::load(&path).await.unwrap();
    assert_eq!(loaded.paper_size, PaperSize::Letter);
    assert_eq!(loaded.orientation, Orientation::Portrait);
    assert_eq!(loaded.output_name, "converted-images.pdf");
}

#[tokio::test]
async fn test_malformed_options_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = ConvertOptions::load(&path).await;
    assert!(matches!(result, Err(ConvertError::Config(_))));
}
