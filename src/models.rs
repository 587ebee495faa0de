use serde::{Deserialize, Serialize};

fn default_dialog_title() -> String {
    "Share".to_string()
}

/// A file embedded in a share request as base64 data, optionally carrying a
/// `data:` URI prefix.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareFilePayload {
    #[serde(default)]
    pub from_base64: String,
    #[serde(default)]
    pub file_name: String,
}

/// One share call from the web layer.
///
/// All content fields are optional, but at least one of `text`, `url`, or a
/// non-empty `file.fromBase64` must be present.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRequest {
    pub title: Option<String>,
    pub text: Option<String>,
    pub url: Option<String>,
    #[serde(default = "default_dialog_title")]
    pub dialog_title: String,
    pub file: Option<ShareFilePayload>,
}

/// The composed payload handed to the host chooser facility.
///
/// `file_ref` is an opaque reference issued by the host file-sharing
/// provider; the raw filesystem path is never exposed to the share target.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareIntent {
    pub text: Option<String>,
    pub file_ref: Option<String>,
    pub mime_type: Option<String>,
    pub subject: Option<String>,
    pub chooser_title: String,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanShareResult {
    pub value: bool,
}
