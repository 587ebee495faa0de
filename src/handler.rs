//! The share request handler: validation, file staging, and intent
//! composition. Everything the host OS owns (URI issuance, the chooser UI)
//! sits behind the [`FileRefProvider`] and [`ChooserLauncher`] seams so the
//! handler is testable without a device.

use std::path::Path;

use base64::{engine::general_purpose, Engine as _};

use crate::error::{Error, Result};
use crate::mime;
use crate::models::{ShareIntent, ShareRequest};
use crate::staging::StagingArea;

/// Issues an opaque, read-scoped reference for a local file. Backed by the
/// host file-sharing provider on mobile and a plain `file://` URL on desktop.
pub trait FileRefProvider {
    fn provide(&self, path: &Path) -> Result<String>;
}

/// Hands a composed intent to the host chooser UI. Dispatch is
/// fire-and-forget; whether the user completes or cancels the share is never
/// observed.
pub trait ChooserLauncher {
    fn launch(&self, intent: &ShareIntent) -> Result<()>;
}

/// Validates the request, stages an embedded file if one is present, and
/// dispatches the composed intent to the chooser.
pub fn handle(
    request: &ShareRequest,
    staging: &StagingArea,
    refs: &dyn FileRefProvider,
    chooser: &dyn ChooserLauncher,
) -> Result<()> {
    let intent = build_intent(request, staging, refs)?;
    log::info!("dispatching share intent (chooser: {})", intent.chooser_title);
    chooser.launch(&intent)
}

/// Builds the intent without dispatching it. Validation is eager: the first
/// failed check returns immediately, before any file is decoded or written.
pub(crate) fn build_intent(
    request: &ShareRequest,
    staging: &StagingArea,
    refs: &dyn FileRefProvider,
) -> Result<ShareIntent> {
    let file = request
        .file
        .as_ref()
        .filter(|file| !file.from_base64.is_empty());

    if request.text.is_none() && request.url.is_none() && file.is_none() {
        return Err(Error::Validation(
            "Must provide at least one of: url, message, file".to_string(),
        ));
    }

    let mut file_ref = None;
    let mut mime_type = Some("text/plain".to_string());

    if let Some(file) = file {
        if file.file_name.is_empty() {
            return Err(Error::Validation(
                "Must provide a valid filename for the file".to_string(),
            ));
        }
        // Purge before decoding, so a malformed payload still leaves the
        // directory cleared of the previous call's files.
        staging.prepare()?;
        let bytes = decode_payload(&file.from_base64)?;
        let staged = staging.write(&file.file_name, &bytes)?;
        log::debug!("staged {} ({} bytes)", staged.display(), bytes.len());
        file_ref = Some(refs.provide(&staged)?);
    }

    let mut text = None;
    match (request.text.as_deref(), request.url.as_deref()) {
        (Some(message), url) => {
            // Text wins; a URL is appended only when it is a web link.
            let mut composed = message.to_string();
            if let Some(url) = url.filter(|url| url.starts_with("http")) {
                composed.push(' ');
                composed.push_str(url);
            }
            text = Some(composed);
        }
        (None, Some(url)) if url.starts_with("http") => {
            text = Some(url.to_string());
        }
        (None, Some(url)) if url.starts_with("file:") => {
            mime_type = mime::from_url(url);
            let path = mime::file_url_path(url);
            file_ref = Some(refs.provide(Path::new(path))?);
        }
        (None, Some(_)) => {
            return Err(Error::Validation("Unsupported url".to_string()));
        }
        (None, None) => {}
    }

    Ok(ShareIntent {
        text,
        file_ref,
        mime_type: mime_type.map(|mime| mime::normalize(&mime)),
        subject: request.title.clone(),
        chooser_title: request.dialog_title.clone(),
    })
}

/// Strips an optional data-URI prefix (everything up to and including the
/// first comma) and decodes the remainder as standard base64.
fn decode_payload(data: &str) -> Result<Vec<u8>> {
    let encoded = match data.split_once(',') {
        Some((_, rest)) => rest,
        None => data,
    };
    general_purpose::STANDARD
        .decode(encoded)
        .map_err(|_| Error::Decode("Could not create file - invalid base64 data".to_string()))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::models::ShareFilePayload;

    struct StubRefs;

    impl FileRefProvider for StubRefs {
        fn provide(&self, path: &Path) -> Result<String> {
            Ok(format!("content://staged{}", path.display()))
        }
    }

    #[derive(Default)]
    struct RecordingChooser {
        launched: RefCell<Vec<ShareIntent>>,
    }

    impl ChooserLauncher for RecordingChooser {
        fn launch(&self, intent: &ShareIntent) -> Result<()> {
            self.launched.borrow_mut().push(intent.clone());
            Ok(())
        }
    }

    fn staging() -> (TempDir, StagingArea) {
        let tmp = tempfile::tempdir().unwrap();
        let area = StagingArea::new(tmp.path());
        (tmp, area)
    }

    fn request() -> ShareRequest {
        ShareRequest {
            title: None,
            text: None,
            url: None,
            dialog_title: "Share".to_string(),
            file: None,
        }
    }

    fn file_payload(data: &str, name: &str) -> Option<ShareFilePayload> {
        Some(ShareFilePayload {
            from_base64: data.to_string(),
            file_name: name.to_string(),
        })
    }

    #[test]
    fn empty_request_is_rejected_without_file_io() {
        let (_tmp, area) = staging();
        let chooser = RecordingChooser::default();

        let err = handle(&request(), &area, &StubRefs, &chooser).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Must provide at least one of: url, message, file"
        );
        assert!(!area.dir().exists());
        assert!(chooser.launched.borrow().is_empty());
    }

    #[test]
    fn stages_file_from_data_uri_payload() {
        let (_tmp, area) = staging();
        let chooser = RecordingChooser::default();
        let mut req = request();
        req.file = file_payload("data:text/plain;base64,SGVsbG8=", "a.txt");

        handle(&req, &area, &StubRefs, &chooser).unwrap();

        assert_eq!(fs::read(area.dir().join("a.txt")).unwrap(), b"Hello");
        let launched = chooser.launched.borrow();
        assert_eq!(launched.len(), 1);
        assert_eq!(launched[0].mime_type.as_deref(), Some("text/plain"));
        assert_eq!(
            launched[0].file_ref.as_deref(),
            Some(format!("content://staged{}", area.dir().join("a.txt").display()).as_str())
        );
    }

    #[test]
    fn bare_base64_without_prefix_is_accepted() {
        let (_tmp, area) = staging();
        let mut req = request();
        req.file = file_payload("SGVsbG8=", "a.txt");

        build_intent(&req, &area, &StubRefs).unwrap();

        assert_eq!(fs::read(area.dir().join("a.txt")).unwrap(), b"Hello");
    }

    #[test]
    fn invalid_base64_reports_decode_error_after_purge() {
        let (_tmp, area) = staging();
        let chooser = RecordingChooser::default();
        area.prepare().unwrap();
        area.write("stale.txt", b"old").unwrap();
        let mut req = request();
        req.file = file_payload("!!!not-base64!!!", "b.txt");

        let err = handle(&req, &area, &StubRefs, &chooser).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Could not create file - invalid base64 data"
        );
        // The pre-decode purge ran, but no new file was written.
        assert!(!area.dir().join("stale.txt").exists());
        assert!(!area.dir().join("b.txt").exists());
        assert!(chooser.launched.borrow().is_empty());
    }

    #[test]
    fn missing_filename_is_rejected_before_any_write() {
        let (_tmp, area) = staging();
        let mut req = request();
        req.file = file_payload("SGVsbG8=", "");

        let err = build_intent(&req, &area, &StubRefs).unwrap_err();

        assert_eq!(err.to_string(), "Must provide a valid filename for the file");
        assert!(!area.dir().exists());
    }

    #[test]
    fn text_and_http_url_are_composed() {
        let (_tmp, area) = staging();
        let mut req = request();
        req.text = Some("hello".to_string());
        req.url = Some("http://example.com".to_string());

        let intent = build_intent(&req, &area, &StubRefs).unwrap();

        assert_eq!(intent.text.as_deref(), Some("hello http://example.com"));
    }

    #[test]
    fn non_http_url_is_dropped_when_text_is_present() {
        let (_tmp, area) = staging();
        let mut req = request();
        req.text = Some("hello".to_string());
        req.url = Some("ftp://example.com".to_string());

        let intent = build_intent(&req, &area, &StubRefs).unwrap();

        assert_eq!(intent.text.as_deref(), Some("hello"));
    }

    #[test]
    fn http_url_alone_is_shared_as_text() {
        let (_tmp, area) = staging();
        let mut req = request();
        req.url = Some("https://example.com/page".to_string());

        let intent = build_intent(&req, &area, &StubRefs).unwrap();

        assert_eq!(intent.text.as_deref(), Some("https://example.com/page"));
        assert!(intent.file_ref.is_none());
        assert_eq!(intent.mime_type.as_deref(), Some("text/plain"));
    }

    #[test]
    fn file_url_resolves_mime_and_reference() {
        let (_tmp, area) = staging();
        let mut req = request();
        req.url = Some("file:///tmp/photo.jpg".to_string());

        let intent = build_intent(&req, &area, &StubRefs).unwrap();

        assert_eq!(intent.mime_type.as_deref(), Some("image/jpeg"));
        assert_eq!(
            intent.file_ref.as_deref(),
            Some("content://staged/tmp/photo.jpg")
        );
        assert!(intent.text.is_none());
    }

    #[test]
    fn file_url_with_unknown_extension_has_no_mime() {
        let (_tmp, area) = staging();
        let mut req = request();
        req.url = Some("file:///tmp/blob.zzz-unknown".to_string());

        let intent = build_intent(&req, &area, &StubRefs).unwrap();

        assert!(intent.mime_type.is_none());
    }

    #[test]
    fn unsupported_scheme_is_rejected_without_dispatch() {
        let (_tmp, area) = staging();
        let chooser = RecordingChooser::default();
        let mut req = request();
        req.url = Some("ssh://host".to_string());

        let err = handle(&req, &area, &StubRefs, &chooser).unwrap_err();

        assert_eq!(err.to_string(), "Unsupported url");
        assert!(chooser.launched.borrow().is_empty());
    }

    #[test]
    fn consecutive_stagings_keep_only_the_latest_file() {
        let (_tmp, area) = staging();
        let mut req = request();
        // "one"
        req.file = file_payload("b25l", "x.txt");
        build_intent(&req, &area, &StubRefs).unwrap();
        // "two"
        req.file = file_payload("dHdv", "x.txt");
        build_intent(&req, &area, &StubRefs).unwrap();

        let entries: Vec<_> = fs::read_dir(area.dir()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(fs::read(area.dir().join("x.txt")).unwrap(), b"two");
    }

    #[test]
    fn file_only_share_defaults_to_text_plain() {
        let (_tmp, area) = staging();
        let mut req = request();
        req.file = file_payload("SGVsbG8=", "a.txt");

        let intent = build_intent(&req, &area, &StubRefs).unwrap();

        assert!(intent.text.is_none());
        assert_eq!(intent.mime_type.as_deref(), Some("text/plain"));
    }

    #[test]
    fn title_becomes_subject_even_when_empty() {
        let (_tmp, area) = staging();
        let mut req = request();
        req.text = Some("hi".to_string());
        req.title = Some(String::new());

        let intent = build_intent(&req, &area, &StubRefs).unwrap();

        assert_eq!(intent.subject.as_deref(), Some(""));
    }

    #[test]
    fn chooser_title_comes_from_the_request() {
        let (_tmp, area) = staging();
        let mut req = request();
        req.text = Some("hi".to_string());
        req.dialog_title = "Send with".to_string();

        let intent = build_intent(&req, &area, &StubRefs).unwrap();

        assert_eq!(intent.chooser_title, "Send with");
    }
}
