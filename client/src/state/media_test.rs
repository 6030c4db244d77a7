use super::*;

// =============================================================
// MediaKind
// =============================================================

#[test]
fn media_kind_image_only_for_image_type() {
    assert_eq!(MediaKind::from_type("image"), MediaKind::Image);
    assert_eq!(MediaKind::from_type("video"), MediaKind::Video);
    assert_eq!(MediaKind::from_type("Image"), MediaKind::Video);
    assert_eq!(MediaKind::from_type(""), MediaKind::Video);
}

// =============================================================
// MediaViewState transitions
// =============================================================

#[test]
fn new_state_is_loading_without_error() {
    let state = MediaViewState::new("https://cdn.example.com/a.png");
    assert!(state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.attempt, 0);
}

#[test]
fn new_state_with_blank_url_reports_missing_url() {
    let state = MediaViewState::new("   ");
    assert_eq!(state.error, Some(MediaError::MissingUrl));
    assert_eq!(state.error.map(|e| e.to_string()).as_deref(), Some("Missing media URL"));
}

#[test]
fn load_clears_loading_and_error() {
    let mut state = MediaViewState::new("a.png");
    state.on_error();
    state.on_load();
    assert!(!state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn error_stops_loading_and_sets_message() {
    let mut state = MediaViewState::new("a.png");
    state.on_error();
    assert!(!state.loading);
    assert_eq!(state.error.map(|e| e.to_string()).as_deref(), Some("Failed to load media"));
}

#[test]
fn retry_resets_to_loading_and_bumps_attempt() {
    let mut state = MediaViewState::new("a.png");
    state.on_error();
    state.retry();
    assert!(state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.attempt, 1);

    state.on_error();
    state.retry();
    assert_eq!(state.attempt, 2);
}

#[test]
fn error_event_on_blank_url_keeps_missing_url() {
    let mut state = MediaViewState::new("");
    state.on_error();
    assert!(!state.loading);
    assert_eq!(state.error, Some(MediaError::MissingUrl));

    state.retry();
    assert_eq!(state.error, Some(MediaError::MissingUrl));
    assert_eq!(state.attempt, 0);

    state.on_load();
    assert_eq!(state.error, Some(MediaError::MissingUrl));
}

#[test]
fn retry_keeps_missing_url_error() {
    let mut state = MediaViewState::new("");
    state.retry();
    assert_eq!(state.error, Some(MediaError::MissingUrl));
    assert_eq!(state.attempt, 0);
}

// =============================================================
// Overlays
// =============================================================

#[test]
fn failed_load_shows_error_without_spinner() {
    let mut state = MediaViewState::new("a.png");
    state.on_error();
    let overlays = MediaOverlays::resolve(&state, false, DEFAULT_UPLOAD_PROGRESS, false);
    assert!(!overlays.spinner);
    assert_eq!(overlays.error, Some(MediaError::LoadFailed));
    assert_eq!(overlays.upload, None);
}

#[test]
fn uploading_reports_supplied_progress_and_keeps_remove_button() {
    let state = MediaViewState::new("blob:local");
    let overlays = MediaOverlays::resolve(&state, true, 42.0, true);
    assert_eq!(overlays.upload, Some(UploadOverlay { progress: 42.0 }));
    assert!(overlays.remove_button);
}

#[test]
fn not_uploading_hides_progress() {
    let state = MediaViewState::new("a.png");
    let overlays = MediaOverlays::resolve(&state, false, 42.0, true);
    assert_eq!(overlays.upload, None);
    assert!(overlays.remove_button);
}

#[test]
fn progress_is_clamped() {
    assert_eq!(clamp_progress(-5.0), 0.0);
    assert_eq!(clamp_progress(150.0), 100.0);
    assert_eq!(clamp_progress(f64::NAN), 0.0);
    assert_eq!(clamp_progress(64.5), 64.5);
}

#[test]
fn upload_caption_shows_progress_as_given() {
    assert_eq!(UploadOverlay { progress: 42.0 }.caption(), "42%");
    assert_eq!(UploadOverlay { progress: 42.5 }.caption(), "42.5%");
    assert_eq!(UploadOverlay { progress: 0.0 }.caption(), "0%");
}

// =============================================================
// PendingAttachment
// =============================================================

#[test]
fn pending_attachment_starts_uploading_at_zero() {
    let pending = PendingAttachment::start("blob:1", "image");
    assert_eq!(pending.progress, 0.0);
    assert!(pending.uploading);
}

#[test]
fn pending_attachment_finishes_at_hundred() {
    let mut pending = PendingAttachment::start("blob:1", "video");
    assert!(pending.advance(40.0));
    assert!(pending.advance(40.0));
    assert!(!pending.advance(40.0));
    assert_eq!(pending.progress, 100.0);
    assert!(!pending.uploading);
}

#[test]
fn mime_types_map_to_preview_kinds() {
    assert_eq!(media_type_for_mime("image/png"), "image");
    assert_eq!(media_type_for_mime("video/mp4"), "video");
    assert_eq!(MediaKind::from_type(media_type_for_mime("application/pdf")), MediaKind::Video);
}
