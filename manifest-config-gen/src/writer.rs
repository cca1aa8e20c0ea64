//! Generated source writer using `cap_std` for filesystem operations.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use std::io::Write;

use crate::error::GeneratorError;
use crate::generator::GeneratedClass;

/// Writes a generated class under the output directory.
///
/// The package name maps to a directory path, so `com.example.Foo` lands at
/// `<out_dir>/com/example/FooManifestConfig.java`.
///
/// # Errors
///
/// Returns [`GeneratorError::Io`] when the directory structure cannot be
/// created or the file cannot be written.
pub fn write_class(
    out_dir: &Utf8Path,
    class: &GeneratedClass,
) -> Result<Utf8PathBuf, GeneratorError> {
    let dir = ensure_dir(out_dir)?;
    let filename = format!("{}.java", class.class_name);

    let package_dir = class.package.replace('.', "/");
    let (target, file_path) = if package_dir.is_empty() {
        (dir, out_dir.join(&filename))
    } else {
        dir.create_dir_all(&package_dir)
            .map_err(|io_err| GeneratorError::Io {
                path: out_dir.join(&package_dir),
                source: io_err,
            })?;
        let handle = dir
            .open_dir(&package_dir)
            .map_err(|io_err| GeneratorError::Io {
                path: out_dir.join(&package_dir),
                source: io_err,
            })?;
        (handle, out_dir.join(&package_dir).join(&filename))
    };

    let mut file = target
        .open_with(
            &filename,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(|io_err| GeneratorError::Io {
            path: file_path.clone(),
            source: io_err,
        })?;

    file.write_all(class.source.as_bytes())
        .map_err(|io_err| GeneratorError::Io {
            path: file_path.clone(),
            source: io_err,
        })?;

    Ok(file_path)
}

fn ensure_dir(path: &Utf8Path) -> Result<Dir, GeneratorError> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority()).map_err(|io_err| {
                GeneratorError::Io {
                    path: path.to_path_buf(),
                    source: io_err,
                }
            })?;
            Dir::open_ambient_dir(path, ambient_authority()).map_err(|io_err| GeneratorError::Io {
                path: path.to_path_buf(),
                source: io_err,
            })
        }
        Err(open_err) => Err(GeneratorError::Io {
            path: path.to_path_buf(),
            source: open_err,
        }),
    }
}
