use image::{ImageFormat, Rgb, RgbImage};
use img2pdf_core::{UnsupportedShare, constants};
use img2pdf_runtime::*;
use std::io::Cursor;
use std::sync::Arc;
use tokio::sync::mpsc;

fn png_file(name: &str, width: u32, height: u32) -> ImageFile {
    let image = RgbImage::from_pixel(width, height, Rgb([10, 120, 10]));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    ImageFile::new(name, "image/png", bytes)
}

/// Run the worker over `commands` and collect every update it sends
async fn run(commands: Vec<ConvertCommand>) -> Vec<ConvertUpdate> {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();

    for cmd in commands {
        command_tx.send(cmd).unwrap();
    }
    drop(command_tx);

    worker_task(
        command_rx,
        update_tx,
        ConvertOptions::default(),
        Arc::new(UnsupportedShare),
    )
    .await;

    let mut updates = Vec::new();
    while let Ok(update) = update_rx.try_recv() {
        updates.push(update);
    }
    updates
}

#[tokio::test]
async fn test_convert_without_selection_alerts() {
    let updates = run(vec![ConvertCommand::Convert]).await;

    assert_eq!(updates.len(), 1);
    match &updates[0] {
        ConvertUpdate::Alert { message } => {
            assert_eq!(message, constants::EMPTY_SELECTION_MESSAGE)
        }
        other => panic!("unexpected update {other:?}"),
    }
}

#[tokio::test]
async fn test_select_files_reports_counts_and_previews_in_order() {
    let files = vec![
        png_file("a.png", 8, 4),
        ImageFile::new("notes.txt", "text/plain", b"hi".to_vec()),
        png_file("b.png", 4, 8),
    ];
    let updates = run(vec![ConvertCommand::SelectFiles { files }]).await;

    assert!(matches!(
        updates[0],
        ConvertUpdate::Selected {
            accepted: 2,
            rejected: 1
        }
    ));

    let previews: Vec<_> = updates
        .iter()
        .filter_map(|u| match u {
            ConvertUpdate::PreviewReady { index, preview } => Some((*index, preview.name.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(
        previews,
        [(0, "a.png".to_string()), (1, "b.png".to_string())]
    );
}

#[tokio::test]
async fn test_convert_reports_progress_then_ready() {
    let files = vec![png_file("a.png", 8, 4), png_file("b.png", 4, 8)];
    let updates = run(vec![
        ConvertCommand::SelectFiles { files },
        ConvertCommand::Convert,
    ])
    .await;

    let progress: Vec<_> = updates
        .iter()
        .filter_map(|u| match u {
            ConvertUpdate::Progress { current, total, .. } => Some((*current, *total)),
            _ => None,
        })
        .collect();
    assert_eq!(progress, [(0, 2), (1, 2), (2, 2)]);

    match updates.last().unwrap() {
        ConvertUpdate::Ready {
            uri,
            file_name,
            page_count,
            byte_len,
        } => {
            assert!(uri.starts_with(constants::HANDLE_SCHEME));
            assert_eq!(file_name, constants::DEFAULT_OUTPUT_NAME);
            assert_eq!(*page_count, 2);
            assert!(*byte_len > 0);
        }
        other => panic!("unexpected update {other:?}"),
    }
}

#[tokio::test]
async fn test_each_conversion_gets_a_new_handle() {
    let files = vec![png_file("a.png", 2, 2)];
    let updates = run(vec![
        ConvertCommand::SelectFiles { files },
        ConvertCommand::Convert,
        ConvertCommand::Dismiss,
        ConvertCommand::Convert,
    ])
    .await;

    let uris: Vec<_> = updates
        .iter()
        .filter_map(|u| match u {
            ConvertUpdate::Ready { uri, .. } => Some(uri.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(uris.len(), 2);
    assert_ne!(uris[0], uris[1]);
    assert!(updates.iter().any(|u| matches!(u, ConvertUpdate::Dismissed)));
}

#[tokio::test]
async fn test_share_on_desktop_alerts() {
    let files = vec![png_file("a.png", 2, 2)];
    let updates = run(vec![
        ConvertCommand::SelectFiles { files },
        ConvertCommand::Convert,
        ConvertCommand::Share,
    ])
    .await;

    match updates.last().unwrap() {
        ConvertUpdate::Alert { message } => {
            assert_eq!(message, constants::SHARING_UNSUPPORTED_MESSAGE)
        }
        other => panic!("unexpected update {other:?}"),
    }
}

#[tokio::test]
async fn test_save_writes_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pdf");
    let files = vec![png_file("a.png", 2, 2)];

    let updates = run(vec![
        ConvertCommand::SelectFiles { files },
        ConvertCommand::Convert,
        ConvertCommand::Save { path: path.clone() },
    ])
    .await;

    assert!(matches!(updates.last().unwrap(), ConvertUpdate::Saved { .. }));
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_save_without_artifact_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let updates = run(vec![ConvertCommand::Save {
        path: dir.path().join("out.pdf"),
    }])
    .await;

    assert!(matches!(updates[0], ConvertUpdate::Error { .. }));
}

#[tokio::test]
async fn test_load_config_updates_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.json");
    std::fs::write(&path, r#"{ "output_name": "scan.pdf" }"#).unwrap();

    let files = vec![png_file("a.png", 2, 2)];
    let updates = run(vec![
        ConvertCommand::LoadConfig { path },
        ConvertCommand::SelectFiles { files },
        ConvertCommand::Convert,
    ])
    .await;

    assert!(matches!(updates[0], ConvertUpdate::OptionsLoaded { .. }));
    match updates.last().unwrap() {
        ConvertUpdate::Ready { file_name, .. } => assert_eq!(file_name, "scan.pdf"),
        other => panic!("unexpected update {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_config_reports_error_and_keeps_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let files = vec![png_file("a.png", 2, 2)];
    let updates = run(vec![
        ConvertCommand::LoadConfig { path },
        ConvertCommand::SelectFiles { files },
        ConvertCommand::Convert,
    ])
    .await;

    match &updates[0] {
        ConvertUpdate::Error { message } => assert!(message.starts_with("Failed to load config")),
        other => panic!("unexpected update {other:?}"),
    }
    match updates.last().unwrap() {
        ConvertUpdate::Ready { file_name, .. } => {
            assert_eq!(file_name, constants::DEFAULT_OUTPUT_NAME)
        }
        other => panic!("unexpected update {other:?}"),
    }
}
