use tauri::{command, AppHandle, Runtime, State, Window};

use crate::{error, models, staging::StagingArea, ShareExt};

#[command]
pub async fn share<R: Runtime>(
    app: AppHandle<R>,
    window: Window<R>,
    staging: State<'_, StagingArea>,
    request: models::ShareRequest,
) -> Result<(), error::Error> {
    app.share().share(window, &staging, request)
}

#[command]
pub async fn can_share<R: Runtime>(
    app: AppHandle<R>,
    window: Window<R>,
) -> Result<models::CanShareResult, error::Error> {
    app.share().can_share(window)
}

#[command]
pub async fn cleanup<R: Runtime>(
    app: AppHandle<R>,
    staging: State<'_, StagingArea>,
) -> Result<(), error::Error> {
    app.share().cleanup(&staging)
}
