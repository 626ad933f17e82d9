use std::io::{self, Read};

/// Opens content-provider URIs as byte streams.
pub trait ContentResolver: Send + Sync {
    fn open(&self, uri: &str) -> io::Result<Box<dyn Read + Send>>;
}

/// Resolve content:// URIs through tauri-plugin-android-fs.
/// The host app must install that plugin.
#[cfg(target_os = "android")]
pub struct AndroidResolver<R: tauri::Runtime> {
    app: tauri::AppHandle<R>,
}

#[cfg(target_os = "android")]
impl<R: tauri::Runtime> AndroidResolver<R> {
    pub fn new(app: tauri::AppHandle<R>) -> Self {
        Self { app }
    }
}

#[cfg(target_os = "android")]
impl<R: tauri::Runtime> ContentResolver for AndroidResolver<R> {
    fn open(&self, uri: &str) -> io::Result<Box<dyn Read + Send>> {
        use tauri_plugin_android_fs::AndroidFsExt;
        use tauri_plugin_fs::FilePath;

        log::info!("Android: opening content stream: {}", uri);

        let url = url::Url::parse(uri)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

        // Convert FilePath to FileUri (infallible conversion)
        let uri: tauri_plugin_android_fs::FileUri = FilePath::Url(url).into();

        let api = self.app.android_fs_async();

        // Called from the blocking pool, so waiting on the bridge here is fine
        let file = tauri::async_runtime::block_on(api.open_file_readable(&uri))
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

        Ok(Box::new(file))
    }
}

/// Platforms without a content provider. Every open fails.
pub struct NoProviderResolver;

impl ContentResolver for NoProviderResolver {
    fn open(&self, uri: &str) -> io::Result<Box<dyn Read + Send>> {
        log::info!("Desktop: no content provider for: {}", uri);

        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "content providers are not available on this platform",
        ))
    }
}

/// The resolver for the platform this build targets.
#[cfg(target_os = "android")]
pub fn resolver<R: tauri::Runtime>(app: &tauri::AppHandle<R>) -> Box<dyn ContentResolver> {
    Box::new(AndroidResolver::new(app.clone()))
}

#[cfg(not(target_os = "android"))]
pub fn resolver<R: tauri::Runtime>(_app: &tauri::AppHandle<R>) -> Box<dyn ContentResolver> {
    Box::new(NoProviderResolver)
}
