use anyhow::{bail, Result};
use tauri_plugin_fileupload::acquire::{FileAcquirer, FileRequest};
use tauri_plugin_fileupload::config::Config;
use tauri_plugin_fileupload::platform::NoProviderResolver;
use tracing_subscriber::EnvFilter;

/// Run one acquisition from the command line and print the result without the raw bytes.
fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(reference), Some(file_type), Some(name)) = (args.next(), args.next(), args.next())
    else {
        bail!("usage: fileupload-probe <reference> <type> <name>");
    };

    let acquirer = FileAcquirer::new(Config::default(), Box::new(NoProviderResolver));
    let result = acquirer.acquire(FileRequest::new(reference, file_type, name))?;

    let summary = serde_json::json!({
        "base64": result.encoded_data,
        "size": result.size,
        "type": result.declared_type,
        "fileName": result.declared_name,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
