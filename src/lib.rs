pub mod acquire;
pub mod config;
pub mod error;
pub mod platform;
mod state;

use acquire::{FileAcquirer, FileRequest, FileResult};
use config::Config;
use error::AcquireError;
use state::PluginState;
use tauri::ipc::InvokeBody;
use tauri::plugin::{Builder, TauriPlugin};
use tauri::{Manager, Runtime, State};
use tracing::info;

pub const PLUGIN_NAME: &str = "fileupload";

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct EchoResponse {
    pub value: String,
}

#[tauri::command]
fn echo(value: String) -> EchoResponse {
    info!("Echo: {}", value);
    EchoResponse { value }
}

#[tauri::command]
async fn process_file(
    state: State<'_, PluginState>,
    request: tauri::ipc::Request<'_>,
) -> Result<FileResult, String> {
    let file_request = parse_request(request.body()).map_err(|e| e.to_string())?;
    let acquirer = state.acquirer();

    // Reads are blocking; keep them off the async runtime
    tokio::task::spawn_blocking(move || acquirer.acquire(file_request))
        .await
        .map_err(|e| format!("Error processing file: {}", e))?
        .map_err(|e| e.to_string())
}

/// Pull `{ filePath, type, name }` out of a raw invoke body.
fn parse_request(body: &InvokeBody) -> Result<FileRequest, AcquireError> {
    match body {
        InvokeBody::Json(value) => serde_json::from_value(value.clone())
            .map_err(|e| AcquireError::InvalidRequest(format!("malformed arguments: {}", e))),
        InvokeBody::Raw(_) => Err(AcquireError::InvalidRequest(
            "expected JSON arguments".to_string(),
        )),
    }
}

/// Build the plugin. Configured from `plugins.fileupload` in `tauri.conf.json`.
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<Config>> {
    Builder::<R, Option<Config>>::new(PLUGIN_NAME)
        .invoke_handler(tauri::generate_handler![echo, process_file])
        .setup(|app, api| {
            let config = api.config().clone().unwrap_or_default();
            info!(
                "Initializing fileupload plugin (chunk size {}, short reads {:?})",
                config.effective_chunk_size(),
                config.short_read
            );

            let acquirer = FileAcquirer::new(config, platform::resolver(app));
            app.manage(PluginState::new(acquirer));
            Ok(())
        })
        .build()
}
