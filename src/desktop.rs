use std::path::Path;

use serde::de::DeserializeOwned;
use tauri::{plugin::PluginApi, AppHandle, Runtime, Window};

use crate::handler::{self, ChooserLauncher, FileRefProvider};
use crate::models::{CanShareResult, ShareIntent, ShareRequest};
use crate::staging::StagingArea;
use crate::Result;

pub fn init<R: Runtime, C: DeserializeOwned>(
    app: &AppHandle<R>,
    _api: PluginApi<R, C>,
) -> crate::Result<Share<R>> {
    Ok(Share(app.clone()))
}

/// Access to the share APIs on desktop.
///
/// No system chooser is wired up here: requests are validated, staged, and
/// composed exactly as on mobile, then dispatch is a logged no-op.
pub struct Share<R: Runtime>(AppHandle<R>);

impl<R: Runtime> Share<R> {
    pub fn share(
        &self,
        _window: Window<R>,
        staging: &StagingArea,
        request: ShareRequest,
    ) -> Result<()> {
        handler::handle(&request, staging, &LocalFileRef, &LogChooser)
    }

    pub fn can_share(&self, _window: Window<R>) -> Result<CanShareResult> {
        Ok(CanShareResult { value: false })
    }

    pub fn cleanup(&self, staging: &StagingArea) -> Result<()> {
        staging.remove_all();
        Ok(())
    }
}

struct LocalFileRef;

impl FileRefProvider for LocalFileRef {
    fn provide(&self, path: &Path) -> Result<String> {
        Ok(format!("file://{}", path.display()))
    }
}

struct LogChooser;

impl ChooserLauncher for LogChooser {
    fn launch(&self, intent: &ShareIntent) -> Result<()> {
        log::warn!(
            "no native chooser on this platform; dropping share intent (chooser: {})",
            intent.chooser_title
        );
        Ok(())
    }
}
