//! # tauri-plugin-share-sheet
//!
//! A Tauri plugin exposing the host OS share sheet to the webview. A share
//! request may carry text, a URL, and a base64-encoded file; embedded files
//! are staged in a cache-backed directory and handed to the share target
//! through an opaque reference issued by the host file-sharing provider.
//!
//! ## Usage
//!
//! ### Rust
//!
//! Initialize the plugin in your `main.rs` or `lib.rs` to register the
//! commands and the staging-area state.
//!
//! ```rust,ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(tauri_plugin_share_sheet::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! ### Frontend (JavaScript/TypeScript)
//!
//! ```js
//! import { invoke } from '@tauri-apps/api/core';
//!
//! await invoke('plugin:share-sheet|share', {
//!   request: {
//!     text: 'I found this cool project built with Tauri.',
//!     url: 'https://tauri.app',
//!     dialogTitle: 'Share',
//!   },
//! });
//!
//! // Share a file from base64 content. The file is staged in the app cache
//! // and purged again on the next share call.
//! await invoke('plugin:share-sheet|share', {
//!   request: {
//!     file: { fromBase64: 'SGVsbG8=', fileName: 'document.txt' },
//!   },
//! });
//! ```

use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

pub use models::*;

#[cfg(desktop)]
mod desktop;
#[cfg(mobile)]
mod mobile;

mod commands;
mod error;
mod handler;
mod mime;
mod models;
mod staging;

pub use error::{Error, Result};
pub use handler::{ChooserLauncher, FileRefProvider};
pub use staging::StagingArea;

#[cfg(desktop)]
use desktop::Share;
#[cfg(mobile)]
use mobile::Share;

/// Extensions to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`] to access the share APIs.
pub trait ShareExt<R: Runtime> {
    fn share(&self) -> &Share<R>;
}

impl<R: Runtime, T: Manager<R>> crate::ShareExt<R> for T {
    fn share(&self) -> &Share<R> {
        self.state::<Share<R>>().inner()
    }
}

/// Initializes the plugin.
///
/// This registers the commands and manages the staging area rooted in the
/// app cache directory. Staged files survive each call so the share target
/// can read them; the whole staging directory is removed when the
/// application exits.
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("share-sheet")
        .invoke_handler(tauri::generate_handler![
            commands::share,
            commands::can_share,
            commands::cleanup,
        ])
        .setup(|app, api| {
            #[cfg(mobile)]
            let share = mobile::init(app, api)?;
            #[cfg(desktop)]
            let share = desktop::init(app, api)?;
            app.manage(share);
            let cache_root = app.path().app_cache_dir()?;
            app.manage(staging::StagingArea::new(cache_root));
            Ok(())
        })
        .on_drop(|app| {
            app.state::<staging::StagingArea>().remove_all();
        })
        .build()
}
