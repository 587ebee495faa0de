use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

// This enum defines the errors that can be sent back to the frontend.
// Using `thiserror` makes it easy to convert from other error types,
// and `serde::Serialize` allows it to be returned in a command's `Err` variant.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field is missing or a URL scheme is not shareable. Carries
    /// the exact message reported to the caller.
    #[error("{0}")]
    Validation(String),
    /// The embedded file payload is not valid base64.
    #[error("{0}")]
    Decode(String),
    /// Staging the file in the cache directory failed.
    #[error("{0}")]
    Io(String),
    #[error("Failed to interact with native sharing API: {0}")]
    NativeApi(String),
    #[error("Tauri API error: {0}")]
    Tauri(#[from] tauri::Error),
    #[cfg(mobile)]
    #[error(transparent)]
    PluginInvoke(#[from] tauri::plugin::mobile::PluginInvokeError),
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}
