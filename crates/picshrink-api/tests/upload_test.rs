//! Upload pipeline integration tests.
//!
//! Run with: `cargo test -p picshrink-api --test upload_test`

mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::{fixtures, setup_test_app, setup_test_app_with_blocked_storage};
use serde_json::Value;

fn image_form(data: Vec<u8>, filename: &str, mime: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        "image",
        Part::bytes(data).file_name(filename).mime_type(mime),
    )
}

#[tokio::test]
async fn upload_png_halves_dimensions_and_reports_stats() {
    let app = setup_test_app();

    let form = image_form(fixtures::create_test_png(200, 100), "photo.png", "image/png")
        .add_text("quality", "80");
    let response = app.client().post("/upload").multipart(form).await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(
        body["message"],
        "Image uploaded and processed successfully!"
    );
    assert_eq!(body["processed_image"], "processed_photo.jpg");
    assert!(body["original_size"].as_u64().unwrap() > 0);
    assert!(body["processed_size"].as_u64().unwrap() > 0);

    // Reduction is consistent with the reported sizes, rounded to 2 decimals.
    let original = body["original_size"].as_u64().unwrap() as f64;
    let processed = body["processed_size"].as_u64().unwrap() as f64;
    let expected = (original - processed) / original * 100.0;
    let reported = body["size_reduction_percent"].as_f64().unwrap();
    assert!(
        (reported - expected).abs() < 0.01,
        "reported {} vs computed {}",
        reported,
        expected
    );

    let processed_path = app.upload_dir.join("processed_photo.jpg");
    assert!(processed_path.is_file());
    assert_eq!(fixtures::dimensions_of(&processed_path), (100, 50));

    assert!(app.temp_residue().is_empty());
}

#[tokio::test]
async fn upload_always_outputs_jpeg() {
    let app = setup_test_app();

    for (data, name) in [
        (fixtures::create_test_png(64, 64), "from_png.png"),
        (fixtures::create_test_gif(64, 64), "from_gif.gif"),
        (fixtures::create_test_jpeg(64, 64), "from_jpeg.jpeg"),
    ] {
        let response = app
            .client()
            .post("/upload")
            .multipart(image_form(data, name, "application/octet-stream"))
            .await;
        assert_eq!(response.status_code(), 200, "upload of {} failed", name);
    }

    for stem in ["from_png", "from_gif", "from_jpeg"] {
        let path = app.upload_dir.join(format!("processed_{}.jpg", stem));
        let data = std::fs::read(&path).expect("processed file missing");
        assert_eq!(&data[..2], &[0xFF, 0xD8], "{} is not JPEG", stem);
    }
}

#[tokio::test]
async fn upload_without_quality_uses_default() {
    let app = setup_test_app();

    let form = image_form(fixtures::create_test_png(50, 50), "photo.png", "image/png");
    let response = app.client().post("/upload").multipart(form).await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["processed_image"], "processed_photo.jpg");
}

#[tokio::test]
async fn upload_with_junk_quality_still_succeeds() {
    let app = setup_test_app();

    for junk in ["abc", "101", "-5", "7.5", ""] {
        let form = image_form(fixtures::create_test_png(50, 50), "photo.png", "image/png")
            .add_text("quality", junk);
        let response = app.client().post("/upload").multipart(form).await;
        assert_eq!(
            response.status_code(),
            200,
            "quality {:?} should never be an error",
            junk
        );
    }
}

#[tokio::test]
async fn quality_parameter_changes_output_size() {
    let app = setup_test_app();

    let form = image_form(fixtures::create_test_png(128, 128), "high.png", "image/png")
        .add_text("quality", "95");
    let high: Value = app.client().post("/upload").multipart(form).await.json();

    let form = image_form(fixtures::create_test_png(128, 128), "low.png", "image/png")
        .add_text("quality", "5");
    let low: Value = app.client().post("/upload").multipart(form).await.json();

    assert!(
        low["processed_size"].as_u64().unwrap() <= high["processed_size"].as_u64().unwrap(),
        "quality 5 output should not exceed quality 95 output"
    );
}

#[tokio::test]
async fn upload_missing_file_is_rejected() {
    let app = setup_test_app();

    let form = MultipartForm::new().add_text("quality", "80");
    let response = app.client().post("/upload").multipart(form).await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "No image uploaded!");
}

#[tokio::test]
async fn upload_wrong_extension_is_rejected_before_write() {
    let app = setup_test_app();

    let form = image_form(b"just some text".to_vec(), "doc.txt", "text/plain");
    let response = app.client().post("/upload").multipart(form).await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid file type! Only image files are allowed.");

    // Rejected before temp persistence: the upload dir stays empty.
    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn upload_filename_without_extension_is_rejected() {
    let app = setup_test_app();

    let form = image_form(fixtures::create_test_png(10, 10), "noextension", "image/png");
    let response = app.client().post("/upload").multipart(form).await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn upload_garbage_with_image_extension_is_rejected_and_cleaned_up() {
    let app = setup_test_app();

    let form = image_form(fixtures::garbage_bytes(), "fake.jpg", "image/jpeg");
    let response = app.client().post("/upload").multipart(form).await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "Uploaded file is not a valid image!");

    assert!(app.temp_residue().is_empty());
    assert!(!app.upload_dir.join("processed_fake.jpg").exists());
}

#[tokio::test]
async fn upload_same_basename_overwrites_prior_result() {
    let app = setup_test_app();

    for size in [100u32, 60] {
        let form = image_form(
            fixtures::create_test_png(size, size),
            "same.png",
            "image/png",
        );
        let response = app.client().post("/upload").multipart(form).await;
        assert_eq!(response.status_code(), 200);
    }

    // Last write wins: one artifact, from the second (60x60) upload.
    let processed: Vec<String> = app
        .stored_files()
        .into_iter()
        .filter(|f| f.starts_with("processed_"))
        .collect();
    assert_eq!(processed, vec!["processed_same.jpg".to_string()]);
    assert_eq!(
        fixtures::dimensions_of(&app.upload_dir.join("processed_same.jpg")),
        (30, 30)
    );
}

#[tokio::test]
async fn upload_with_path_in_filename_stores_basename_only() {
    let app = setup_test_app();

    let form = image_form(
        fixtures::create_test_png(40, 40),
        "/tmp/nested/dirs/photo.png",
        "image/png",
    );
    let response = app.client().post("/upload").multipart(form).await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["processed_image"], "processed_photo.jpg");
}

#[tokio::test]
async fn unavailable_storage_directory_fails_early() {
    let app = setup_test_app_with_blocked_storage();

    let form = image_form(fixtures::create_test_png(50, 50), "photo.png", "image/png");
    let response = app.client().post("/upload").multipart(form).await;

    assert_eq!(response.status_code(), 500);
    let body: Value = response.json();
    assert_eq!(body["error"], "Server error: Unable to prepare upload directory.");
}
