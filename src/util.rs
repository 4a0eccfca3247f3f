/// Filesystem helpers shared by the scaffolder.
pub mod fs {
    use std::fs::{self, OpenOptions};
    use std::io;

    use camino::Utf8Path;

    /// Ensure a directory exists, creating it recursively if needed.
    ///
    /// Returns `true` when the directory was missing beforehand.
    pub fn ensure_dir(path: &Utf8Path) -> io::Result<bool> {
        if path.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(path)?;
        Ok(true)
    }

    /// Ensure a file exists without touching existing content.
    ///
    /// The file is opened in append mode, so a second call never truncates.
    /// Returns `true` when the file was missing beforehand.
    pub fn touch(path: &Utf8Path) -> io::Result<bool> {
        let existed = path.exists();
        OpenOptions::new().create(true).append(true).open(path)?;
        Ok(!existed)
    }

}
