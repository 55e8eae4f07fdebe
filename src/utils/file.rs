use camino::Utf8Path;
use std::fs;
use std::io;
use walkdir::WalkDir;

pub struct FileUtils;

impl FileUtils {
    /// Recursively copies a directory tree from source to destination.
    /// Creates all necessary directories, overwrites existing files and carries
    /// file and directory permissions over. Stops at the first error; whatever
    /// was copied up to that point stays in place.
    pub fn copy_recursive(src: &Utf8Path, dst: &Utf8Path) -> io::Result<()> {
        // Children are visited before their directory so a read-only source
        // directory gets its mode applied only after it has been filled.
        for entry in WalkDir::new(src).contents_first(true) {
            let entry = entry?;

            let rel_path = entry
                .path()
                .strip_prefix(src)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

            let dst_path = if rel_path.as_os_str().is_empty() {
                dst.as_std_path().to_path_buf()
            } else {
                dst.as_std_path().join(rel_path)
            };

            if entry.file_type().is_dir() {
                fs::create_dir_all(&dst_path)?;
                fs::set_permissions(&dst_path, entry.metadata()?.permissions())?;
            } else {
                if let Some(parent) = dst_path.parent() {
                    fs::create_dir_all(parent)?;
                }
                // fs::copy also copies the permission bits.
                fs::copy(entry.path(), &dst_path)?;
            }
        }

        Ok(())
    }

    /// Removes whatever sits at `path`: a directory tree, a file or a
    /// symlink (the link itself, never its target). Absent is fine.
    pub fn remove_path_if_exists(path: &Utf8Path) -> io::Result<()> {
        let meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e),
        };

        if meta.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        }
    }
}
