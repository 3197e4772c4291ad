//! Avatar upload card: pick a file, compress it off the UI path, preview the
//! result, and submit it to the profile update endpoint.
//!
//! The preview lives in an explicit [`AvatarFormState`] container so every
//! transition goes through a named operation. Rapid re-selection is resolved with
//! sequence-number tagging: each compression job gets the next sequence number and
//! only the most recently issued job may set the preview, so a slow stale job can
//! never overwrite a newer image.

use api::ProfileUpdate;
use dioxus::prelude::*;
use imaging::ImagingError;

use crate::account::{outcome_feedback, AccountCard, AccountCardBody, AccountCardFooter};
use crate::icons::FaXmark;
use crate::toast::{show_toast, ToastLevel};
use crate::use_toasts;
use crate::Icon;

const TYPE_REJECTION_MESSAGE: &str = "Only png, jpeg, jpg, or webp images are allowed.";
const PROCESSING_ERROR_MESSAGE: &str = "Error processing image. Please try again.";

/// Preview and submission state for the avatar form.
///
/// Holds at most one encoded avatar at a time. Transitions:
/// `begin_compression` issues a sequence number, `accept` applies a completed
/// compression only if it carries the latest number, `clear` reverts to the file
/// picker, and `begin_submit`/`finish_submit` bracket an in-flight submission.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AvatarFormState {
    preview: Option<String>,
    submitting: bool,
    seq: u64,
}

impl AvatarFormState {
    pub fn new(initial: Option<String>) -> Self {
        Self {
            preview: initial,
            submitting: false,
            seq: 0,
        }
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn can_submit(&self) -> bool {
        self.preview.is_some() && !self.submitting
    }

    /// Issue the sequence number for a new compression job.
    pub fn begin_compression(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    /// Apply a completed compression. Returns false (leaving the preview
    /// untouched) if a newer job was issued in the meantime.
    pub fn accept(&mut self, seq: u64, data_url: String) -> bool {
        if seq != self.seq {
            return false;
        }
        self.preview = Some(data_url);
        true
    }

    /// User-triggered removal of the current preview.
    pub fn clear(&mut self) {
        self.preview = None;
    }

    /// Returns false if there is nothing to submit or a submission is in flight.
    pub fn begin_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.submitting = true;
        true
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}

/// Map a selected file name onto a MIME type from the allow-list.
/// A name without a `.` (or a bare dotfile like `.png`) has no extension.
fn mime_from_file_name(name: &str) -> Option<&'static str> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    let ext = ext.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpeg" => Some("image/jpeg"),
        "jpg" => Some("image/jpg"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Run the compression pipeline off the UI path.
///
/// Native targets hand the CPU-bound work to a blocking thread. On wasm32 there is
/// a single cooperative thread, so the pipeline runs stepwise inside the spawned
/// task, yielding to the event loop between encode attempts to keep input and
/// rendering responsive.
async fn compress_off_ui(bytes: Vec<u8>, mime: &'static str) -> Result<String, ImagingError> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        match tokio::task::spawn_blocking(move || imaging::compress_to_data_url(&bytes, mime))
            .await
        {
            Ok(result) => result,
            Err(e) => Err(ImagingError::Processing(e.to_string())),
        }
    }
    #[cfg(target_arch = "wasm32")]
    {
        let mut job = imaging::CompressionJob::new(&bytes, mime)?;
        loop {
            match job.step()? {
                Some(url) => return Ok(url),
                None => gloo_timers::future::sleep(std::time::Duration::ZERO).await,
            }
        }
    }
}

/// Card for uploading, previewing, and submitting a profile picture.
///
/// `avatar` seeds the preview with the previously stored avatar data URL; pass an
/// empty string when the user has none.
#[component]
pub fn UpdateAvatarCard(avatar: String) -> Element {
    let initial = if avatar.is_empty() { None } else { Some(avatar) };
    let mut state = use_signal(move || AvatarFormState::new(initial.clone()));
    let toasts = use_toasts();

    let handle_file_change = move |evt: FormEvent| {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };

        // Reject disallowed types before reading or decoding anything.
        let Some(mime) = mime_from_file_name(&file.name()) else {
            show_toast(toasts, ToastLevel::Error, TYPE_REJECTION_MESSAGE, None);
            return;
        };

        let seq = state.write().begin_compression();
        spawn(async move {
            let bytes = match file.read_bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(e) => {
                    tracing::error!("failed to read selected file: {e}");
                    show_toast(
                        toasts,
                        ToastLevel::Error,
                        "Error",
                        Some(PROCESSING_ERROR_MESSAGE),
                    );
                    return;
                }
            };
            match compress_off_ui(bytes, mime).await {
                Ok(data_url) => {
                    if !state.write().accept(seq, data_url) {
                        tracing::debug!("discarded stale avatar compression result");
                    }
                }
                Err(ImagingError::UnsupportedType(t)) => {
                    tracing::warn!("rejected avatar upload of type {t}");
                    show_toast(toasts, ToastLevel::Error, TYPE_REJECTION_MESSAGE, None);
                }
                Err(e) => {
                    tracing::error!("avatar compression failed: {e}");
                    show_toast(
                        toasts,
                        ToastLevel::Error,
                        "Error",
                        Some(PROCESSING_ERROR_MESSAGE),
                    );
                }
            }
        });
    };

    let handle_submit = move |_: FormEvent| {
        if !state.write().begin_submit() {
            return;
        }
        let avatar = state.peek().preview().map(str::to_string);
        spawn(async move {
            let update = ProfileUpdate {
                avatar,
                ..Default::default()
            };
            let result = api::update_user(update).await;
            outcome_feedback(toasts, result, "Updated Profile Picture");
            state.write().finish_submit();
        });
    };

    rsx! {
        AccountCard {
            header: "Profile Picture",
            description: "Upload a profile picture to display on your profile page.",
            form {
                onsubmit: handle_submit,
                AccountCardBody {
                    if let Some(preview) = state().preview().map(str::to_string) {
                        figure {
                            class: "avatar-preview",
                            img {
                                src: "{preview}",
                                alt: "Profile picture preview",
                            }
                            button {
                                r#type: "button",
                                class: "avatar-remove",
                                onclick: move |_| state.write().clear(),
                                Icon { icon: FaXmark, width: 14, height: 14 }
                            }
                        }
                    } else {
                        input {
                            r#type: "file",
                            id: "avatar",
                            name: "avatar",
                            accept: "image/png, image/jpeg, image/jpg, image/webp",
                            onchange: handle_file_change,
                        }
                    }
                    p { class: "form-help", "Recommended size: 300x300" }
                }
                AccountCardFooter {
                    description: "Image will be resized and compressed to max 100KB",
                    button {
                        r#type: "submit",
                        class: "primary",
                        disabled: !state().can_submit(),
                        if state().submitting() { "Saving..." } else { "Update Profile Picture" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_avatar_seeds_preview() {
        let state = AvatarFormState::new(Some("data:image/jpeg;base64,AA==".to_string()));
        assert!(state.can_submit());

        let empty = AvatarFormState::new(None);
        assert!(!empty.can_submit());
    }

    #[test]
    fn test_submit_requires_preview() {
        let mut state = AvatarFormState::new(None);
        assert!(!state.begin_submit());

        let seq = state.begin_compression();
        assert!(state.accept(seq, "data:image/jpeg;base64,AA==".to_string()));
        assert!(state.begin_submit());
    }

    #[test]
    fn test_clear_reverts_to_picker_and_disables_submit() {
        let mut state = AvatarFormState::new(Some("data:image/jpeg;base64,AA==".to_string()));
        state.clear();
        assert!(state.preview().is_none());
        assert!(!state.begin_submit());
    }

    #[test]
    fn test_no_concurrent_submissions() {
        let mut state = AvatarFormState::new(Some("data:image/jpeg;base64,AA==".to_string()));
        assert!(state.begin_submit());
        assert!(!state.begin_submit());

        // Preview survives the round trip, so the user can retry after an error.
        state.finish_submit();
        assert!(state.preview().is_some());
        assert!(state.begin_submit());
    }

    #[test]
    fn test_stale_compression_result_is_discarded() {
        let mut state = AvatarFormState::new(None);
        let first = state.begin_compression();
        let second = state.begin_compression();

        // The newer job completes first and wins.
        assert!(state.accept(second, "data:image/jpeg;base64,Qg==".to_string()));
        // The stale job must not overwrite it.
        assert!(!state.accept(first, "data:image/jpeg;base64,QQ==".to_string()));
        assert_eq!(state.preview(), Some("data:image/jpeg;base64,Qg=="));
    }

    #[test]
    fn test_accept_replaces_previous_preview() {
        let mut state = AvatarFormState::new(Some("data:image/jpeg;base64,QQ==".to_string()));
        let seq = state.begin_compression();
        assert!(state.accept(seq, "data:image/jpeg;base64,Qg==".to_string()));
        assert_eq!(state.preview(), Some("data:image/jpeg;base64,Qg=="));
    }

    #[test]
    fn test_mime_from_file_name() {
        assert_eq!(mime_from_file_name("me.PNG"), Some("image/png"));
        assert_eq!(mime_from_file_name("photo.jpeg"), Some("image/jpeg"));
        assert_eq!(mime_from_file_name("photo.jpg"), Some("image/jpg"));
        assert_eq!(mime_from_file_name("pic.webp"), Some("image/webp"));
        assert_eq!(mime_from_file_name("avatar.final.png"), Some("image/png"));
        assert_eq!(mime_from_file_name("doc.pdf"), None);
        assert_eq!(mime_from_file_name("noextension"), None);
        // A file literally named after an extension has no extension.
        assert_eq!(mime_from_file_name("png"), None);
        assert_eq!(mime_from_file_name(".png"), None);
    }
}
