//! Output writers for `tpie-memgen`.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};

use crate::error::MemgenError;

/// Writes the generated text to standard output.
///
/// # Errors
///
/// Returns [`MemgenError::Stdout`] when the stream rejects the write, for
/// example when the reading end of a pipe has closed.
pub fn write_stdout(content: &str) -> Result<(), MemgenError> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(MemgenError::Stdout)
}

/// Writes the generated text to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`MemgenError::InvalidOutputPath`] when `path` has no file name
/// and [`MemgenError::Io`] when the directory or file cannot be written.
pub fn write_file(path: &Utf8Path, content: &str) -> Result<Utf8PathBuf, MemgenError> {
    let (parent, filename) = split_path(path)?;
    let dir = ensure_dir(parent)?;
    let mut file = dir
        .open_with(
            filename,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(|io_err| MemgenError::Io {
            path: path.to_path_buf(),
            source: io_err,
        })?;

    file.write_all(content.as_bytes())
        .map_err(|io_err| MemgenError::Io {
            path: path.to_path_buf(),
            source: io_err,
        })?;

    tracing::info!(%path, bytes = content.len(), "wrote generated overloads");
    Ok(path.to_path_buf())
}

/// Reads a previously generated file, returning `None` when it is missing.
///
/// # Errors
///
/// Returns [`MemgenError::InvalidOutputPath`] when `path` has no file name
/// and [`MemgenError::Io`] for failures other than a missing file.
pub fn read_existing(path: &Utf8Path) -> Result<Option<String>, MemgenError> {
    let (parent, filename) = split_path(path)?;
    let dir = match Dir::open_ambient_dir(parent, ambient_authority()) {
        Ok(dir) => dir,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(MemgenError::Io {
                path: parent.to_path_buf(),
                source: err,
            });
        }
    };
    match dir.read_to_string(filename) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(MemgenError::Io {
            path: path.to_path_buf(),
            source: err,
        }),
    }
}

/// Confirms that `path` holds exactly `expected`.
///
/// # Errors
///
/// Returns [`MemgenError::OutOfDate`] when the file is missing or differs,
/// and propagates read failures from [`read_existing`].
pub fn check_file(path: &Utf8Path, expected: &str) -> Result<(), MemgenError> {
    match read_existing(path)? {
        Some(current) if current == expected => {
            tracing::info!(%path, "generated overloads are up to date");
            Ok(())
        }
        Some(_) => {
            tracing::warn!(%path, "generated overloads differ from the checked-in file");
            Err(MemgenError::OutOfDate(path.to_path_buf()))
        }
        None => {
            tracing::warn!(%path, "generated overloads file is missing");
            Err(MemgenError::OutOfDate(path.to_path_buf()))
        }
    }
}

fn split_path(path: &Utf8Path) -> Result<(&Utf8Path, &str), MemgenError> {
    let filename = path
        .file_name()
        .ok_or_else(|| MemgenError::InvalidOutputPath(path.to_path_buf()))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    Ok((parent, filename))
}

fn ensure_dir(path: &Utf8Path) -> Result<Dir, MemgenError> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority()).map_err(|io_err| {
                MemgenError::Io {
                    path: path.to_path_buf(),
                    source: io_err,
                }
            })?;
            Dir::open_ambient_dir(path, ambient_authority()).map_err(|io_err| MemgenError::Io {
                path: path.to_path_buf(),
                source: io_err,
            })
        }
        Err(open_err) => Err(MemgenError::Io {
            path: path.to_path_buf(),
            source: open_err,
        }),
    }
}
