pub mod add;
pub mod apply;
pub mod export;
pub mod init;
pub mod templates;
pub mod tree;

pub use add::{add, AddArgs};
pub use apply::{apply, ApplyArgs};
pub use export::{export, ExportArgs};
pub use init::{init, InitArgs};
pub use templates::templates;
pub use tree::{tree, TreeArgs};

use crate::config::Config;
use sitecraft_editor::{ElementStore, Persistence};
use std::path::Path;

/// Open the project's persisted store; every change is saved back
pub(crate) fn open_store(config: &Config, cwd: &Path) -> ElementStore {
    Persistence::file(config.storage_path(cwd)).open_store()
}
