//! Media preview display state (loading, error, retry, upload overlay).
//!
//! DESIGN
//! ======
//! The browser drives this state through `load` / `error` events on the
//! `<img>` or `<video>` element. `attempt` is bumped on retry; the component
//! keys the media element on it so a retry mounts a fresh element and the
//! browser issues a new request instead of only clearing the error text.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

/// Default upload progress when the caller does not supply one.
pub const DEFAULT_UPLOAD_PROGRESS: f64 = 100.0;

/// Kind of attachment being previewed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Map the attachment type string onto a renderer. Only `"image"` renders
    /// as an image; every other type falls back to the video player.
    #[must_use]
    pub fn from_type(raw: &str) -> Self {
        if raw == "image" { Self::Image } else { Self::Video }
    }
}

/// Reasons a preview cannot show its media.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    /// The caller passed an empty URL.
    #[error("Missing media URL")]
    MissingUrl,
    /// The browser fired an `error` event for the media element.
    #[error("Failed to load media")]
    LoadFailed,
}

/// Transient display state owned by one preview widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaViewState {
    pub loading: bool,
    pub error: Option<MediaError>,
    /// Number of retries requested so far.
    pub attempt: u32,
}

impl MediaViewState {
    /// Fresh state for `url`: loading, or `MissingUrl` when the URL is blank.
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self {
            loading: true,
            error: validate_url(url).err(),
            attempt: 0,
        }
    }

    /// Media element finished loading.
    pub fn on_load(&mut self) {
        self.loading = false;
        if self.error != Some(MediaError::MissingUrl) {
            self.error = None;
        }
    }

    /// Media element failed to load. A blank `src` also fires `error`; that
    /// case keeps reporting the missing URL.
    pub fn on_error(&mut self) {
        self.loading = false;
        if self.error != Some(MediaError::MissingUrl) {
            self.error = Some(MediaError::LoadFailed);
        }
    }

    /// Reset to loading and request a fresh element.
    ///
    /// A missing URL cannot be fixed by retrying, so that error is kept.
    pub fn retry(&mut self) {
        if self.error == Some(MediaError::MissingUrl) {
            return;
        }
        self.loading = true;
        self.error = None;
        self.attempt = self.attempt.saturating_add(1);
    }
}

/// Reject blank media URLs.
///
/// # Errors
///
/// Returns [`MediaError::MissingUrl`] when `url` is empty or whitespace.
pub fn validate_url(url: &str) -> Result<(), MediaError> {
    if url.trim().is_empty() { Err(MediaError::MissingUrl) } else { Ok(()) }
}

/// Upload overlay contents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UploadOverlay {
    /// Progress bar value, clamped to `0..=100`.
    pub progress: f64,
}

impl UploadOverlay {
    /// Caption shown under the progress bar, e.g. `42%` or `42.5%`.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("{}%", self.progress)
    }
}

/// Which overlays a preview shows for a given state and upload inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaOverlays {
    pub spinner: bool,
    pub error: Option<MediaError>,
    pub upload: Option<UploadOverlay>,
    pub remove_button: bool,
}

impl MediaOverlays {
    /// Resolve overlays. The remove button is independent of loading, error,
    /// and upload state: it renders whenever a remove callback exists.
    #[must_use]
    pub fn resolve(state: &MediaViewState, is_uploading: bool, upload_progress: f64, removable: bool) -> Self {
        Self {
            spinner: state.loading && state.error.is_none(),
            error: state.error,
            upload: is_uploading.then(|| UploadOverlay { progress: clamp_progress(upload_progress) }),
            remove_button: removable,
        }
    }
}

/// Clamp a progress percentage into `0..=100`; NaN reads as zero.
#[must_use]
pub fn clamp_progress(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) }
}

/// Attachment staged in the composer while it uploads.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingAttachment {
    pub url: String,
    pub media_type: String,
    pub progress: f64,
    pub uploading: bool,
}

impl PendingAttachment {
    /// Start tracking an upload of `url` from zero.
    #[must_use]
    pub fn start(url: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self { url: url.into(), media_type: media_type.into(), progress: 0.0, uploading: true }
    }

    /// Advance progress by `step` percent. Returns `true` while more remains.
    pub fn advance(&mut self, step: f64) -> bool {
        self.progress = clamp_progress(self.progress + step);
        if self.progress >= 100.0 {
            self.uploading = false;
        }
        self.uploading
    }
}

/// Map a MIME type onto the preview's type string.
#[must_use]
pub fn media_type_for_mime(mime: &str) -> &'static str {
    if mime.starts_with("image/") { "image" } else { "video" }
}
