use std::{
    fs,
    io::{Cursor, Read as _},
    path::Path,
};

use tracing::{debug, warn};
use zip::{ZipArchive, result::ZipError};

use crate::{Error, Result};

/// Extracts an in-memory zip archive to a specified path, preserving the relative paths of its entries.
///
/// The path and its ancestors are created first. Existing files are overwritten. Entries whose
/// names would escape the path are skipped.
///
/// # Errors
///
/// Returns [`Error::ContainerFormat`] naming `artifact` if the archive is unreadable, or
/// [`Error::Filesystem`] if a directory or file cannot be written.
pub fn extract_archive<P: AsRef<Path>>(artifact: &str, archive: &[u8], path: P) -> Result<()> {
    let path = path.as_ref();
    let container_error = |source: ZipError| Error::ContainerFormat {
        artifact: artifact.to_owned(),
        source,
    };

    fs::create_dir_all(path).map_err(Error::filesystem(path))?;
    let mut archive = ZipArchive::new(Cursor::new(archive)).map_err(container_error)?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(container_error)?;
        let Some(relative) = entry.enclosed_name() else {
            warn!("skipping {} in {artifact}: path escapes the output directory", entry.name());
            continue;
        };
        let p = path.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&p).map_err(Error::filesystem(&p))?;
            continue;
        }

        // Archives do not always carry directory entries
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent).map_err(Error::filesystem(parent))?;
        }

        let mut contents = Vec::new();
        entry
            .read_to_end(&mut contents)
            .map_err(|err| container_error(ZipError::Io(err)))?;
        fs::write(&p, contents).map_err(Error::filesystem(&p))?;
        debug!("extracted {}", p.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use zip::{ZipWriter, write::SimpleFileOptions};

    use super::*;

    fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for (name, data) in entries {
            if name.ends_with('/') {
                writer.add_directory(*name, options).unwrap();
            } else {
                writer.start_file(*name, options).unwrap();
                writer.write_all(data).unwrap();
            }
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn restores_nested_paths() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("a").join("b");
        let archive = zip_bytes(&[
            ("top.txt", &b"top"[..]),
            ("empty/", &[]),
            ("nested/deeper/file.bin", &[0, 1, 2, 255]),
        ]);

        extract_archive("art", &archive, &out).unwrap();

        assert_eq!(fs::read(out.join("top.txt")).unwrap(), b"top");
        assert!(out.join("empty").is_dir());
        assert_eq!(
            fs::read(out.join("nested/deeper/file.bin")).unwrap(),
            [0, 1, 2, 255]
        );
    }

    #[test]
    fn overwrites_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("file.txt"), "old contents").unwrap();

        extract_archive("art", &zip_bytes(&[("file.txt", &b"new"[..])]), dir.path()).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("file.txt")).unwrap(), "new");
    }

    #[test]
    fn skips_escaping_entries() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let archive = zip_bytes(&[("../evil.txt", &b"x"[..]), ("ok.txt", &b"y"[..])]);

        extract_archive("art", &archive, &out).unwrap();

        assert!(!dir.path().join("evil.txt").exists());
        assert_eq!(fs::read(out.join("ok.txt")).unwrap(), b"y");
    }

    #[test]
    fn names_the_artifact_on_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_archive("broken-art", b"definitely not a zip", dir.path()).unwrap_err();
        assert!(matches!(&err, Error::ContainerFormat { artifact, .. } if artifact == "broken-art"));
        assert!(err.to_string().contains("broken-art"));
    }
}
