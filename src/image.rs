use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Open failed on {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Read failed on {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads a raw binary image into memory.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<u8>, ImageError> {
    let path = path.as_ref();
    let mut f = File::open(path).map_err(|source| ImageError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut image = vec![];
    f.read_to_end(&mut image)
        .map_err(|source| ImageError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Loaded {} ({} bytes)", path.display(), image.len());
    Ok(image)
}
