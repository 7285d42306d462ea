use std::path::Path;

use crate::error::{Error, Result};

/// Removes local files recoverably.
pub trait Trash {
    fn trash(&self, path: &Path) -> Result<()>;
}

/// The operating system's recycle bin.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTrash;

impl Trash for SystemTrash {
    fn trash(&self, path: &Path) -> Result<()> {
        trash::delete(path).map_err(|e| Error::Trash {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
