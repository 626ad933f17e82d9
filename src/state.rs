use std::sync::Arc;

use crate::acquire::FileAcquirer;

/// Managed plugin state. The acquirer is shared read-only across commands.
pub struct PluginState {
    acquirer: Arc<FileAcquirer>,
}

impl PluginState {
    pub fn new(acquirer: FileAcquirer) -> Self {
        Self {
            acquirer: Arc::new(acquirer),
        }
    }

    pub fn acquirer(&self) -> Arc<FileAcquirer> {
        self.acquirer.clone()
    }
}
