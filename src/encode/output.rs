use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::encode::gif::GifSink;
use crate::encode::images::{ImageSequenceSink, StillFormat};
use crate::encode::sink::FrameSink;
use crate::foundation::error::{MorphError, MorphResult};

/// Container the rendered frames end up in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One animated GIF file.
    #[default]
    Gif,
    /// A directory of numbered PNG files.
    Png,
    /// A directory of numbered JPEG files.
    Jpeg,
}

impl OutputFormat {
    /// Where output goes when no path is given.
    pub fn default_path(self) -> PathBuf {
        match self {
            Self::Gif => PathBuf::from("res.gif"),
            Self::Png | Self::Jpeg => PathBuf::from("res"),
        }
    }

    fn still(self) -> Option<StillFormat> {
        match self {
            Self::Gif => None,
            Self::Png => Some(StillFormat::Png),
            Self::Jpeg => Some(StillFormat::Jpeg),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Gif => "gif",
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gif" => Ok(Self::Gif),
            "png" => Ok(Self::Png),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            other => Err(MorphError::config(format!(
                "unknown output format '{other}' (expected gif, png or jpeg)"
            ))),
        }
    }
}

pub fn ensure_parent_dir(path: &Path) -> MorphResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Resolve and check the output location for `format`.
///
/// A GIF path must not name an existing directory; its parent directory is created when
/// missing. A frame directory must not name an existing file; it is created when missing.
/// Every failure here is a configuration error, reported before any shape is processed.
pub fn resolve_output(format: OutputFormat, path: Option<&Path>) -> MorphResult<PathBuf> {
    let path = path.map_or_else(|| format.default_path(), Path::to_path_buf);
    match format {
        OutputFormat::Gif => {
            if path.is_dir() {
                return Err(MorphError::config(format!(
                    "gif output '{}' is a directory",
                    path.display()
                )));
            }
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent).map_err(|e| {
                    MorphError::config(format!(
                        "cannot create output directory '{}': {e}",
                        parent.display()
                    ))
                })?;
            }
        }
        OutputFormat::Png | OutputFormat::Jpeg => {
            if path.exists() && !path.is_dir() {
                return Err(MorphError::config(format!(
                    "frame output '{}' exists and is not a directory",
                    path.display()
                )));
            }
            std::fs::create_dir_all(&path).map_err(|e| {
                MorphError::config(format!(
                    "cannot create output directory '{}': {e}",
                    path.display()
                ))
            })?;
        }
    }
    Ok(path)
}

/// Build the sink that writes `format` to an already resolved `path`.
pub fn open_sink(format: OutputFormat, path: &Path) -> Box<dyn FrameSink> {
    match format.still() {
        None => Box::new(GifSink::new(path)),
        Some(still) => Box::new(ImageSequenceSink::new(path, still)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/output.rs"]
mod tests;
