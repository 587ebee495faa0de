use std::path::Path;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tauri::{
    plugin::{PluginApi, PluginHandle},
    AppHandle, Runtime, Window,
};

use crate::handler::{self, ChooserLauncher, FileRefProvider};
use crate::models::{CanShareResult, ShareIntent, ShareRequest};
use crate::staging::StagingArea;
use crate::Result;

#[cfg(target_os = "android")]
const PLUGIN_IDENTIFIER: &str = "plugin.sharesheet";

#[cfg(target_os = "ios")]
tauri::ios_plugin_binding!(init_plugin_share_sheet);

// initializes the Kotlin or Swift plugin classes
pub fn init<R: Runtime, C: DeserializeOwned>(
    _app: &AppHandle<R>,
    api: PluginApi<R, C>,
) -> crate::Result<Share<R>> {
    #[cfg(target_os = "android")]
    let handle = api.register_android_plugin(PLUGIN_IDENTIFIER, "ShareSheetPlugin")?;
    #[cfg(target_os = "ios")]
    let handle = api.register_ios_plugin(init_plugin_share_sheet)?;
    Ok(Share(handle))
}

/// Access to the share APIs on Android and iOS.
///
/// Validation, staging, and intent composition run in Rust; the native side
/// only issues scoped file references and shows the chooser over the
/// foreground activity.
pub struct Share<R: Runtime>(PluginHandle<R>);

impl<R: Runtime> Share<R> {
    pub fn share(
        &self,
        _window: Window<R>,
        staging: &StagingArea,
        request: ShareRequest,
    ) -> Result<()> {
        handler::handle(&request, staging, &HostFileRef(&self.0), &HostChooser(&self.0))
    }

    pub fn can_share(&self, _window: Window<R>) -> Result<CanShareResult> {
        self.0.run_mobile_plugin("canShare", ()).map_err(Into::into)
    }

    pub fn cleanup(&self, staging: &StagingArea) -> Result<()> {
        staging.remove_all();
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FileRefArgs {
    path: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileRefResponse {
    uri: String,
}

/// Content URIs issued by the host file-sharing provider, scoped to the
/// app's package identity and time-limited by the OS.
struct HostFileRef<'a, R: Runtime>(&'a PluginHandle<R>);

impl<R: Runtime> FileRefProvider for HostFileRef<'_, R> {
    fn provide(&self, path: &Path) -> Result<String> {
        let response: FileRefResponse = self.0.run_mobile_plugin(
            "getFileRef",
            FileRefArgs {
                path: path.to_string_lossy().into_owned(),
            },
        )?;
        Ok(response.uri)
    }
}

/// Chooser over a generic send action, restricted to default-category
/// targets and shown on the foreground activity.
struct HostChooser<'a, R: Runtime>(&'a PluginHandle<R>);

impl<R: Runtime> ChooserLauncher for HostChooser<'_, R> {
    fn launch(&self, intent: &ShareIntent) -> Result<()> {
        self.0
            .run_mobile_plugin("launchChooser", intent)
            .map_err(Into::into)
    }
}
