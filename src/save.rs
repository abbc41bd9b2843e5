use std::{
    fs::{self, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDateTime};
use log::{debug, info, warn};

use crate::conversion::Conversion;

/// Files saved within one second before giving up on finding a free name.
const MAX_ATTEMPTS: usize = 1000;

/// Destination for conversion results the user chose to keep.
pub trait ResultSink {
    /// Store `content` and return where it went.
    fn save(&mut self, content: &str, conversion: Conversion) -> Result<PathBuf>;
}

/// Writes every result into its own timestamped text file.
#[derive(Debug, Clone)]
pub struct FileSink {
    directory: PathBuf,
}

impl FileSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Save `content` as if it were `time`.
    ///
    /// A file saved within the same second as an existing one gets a numeric suffix instead of
    /// replacing it.
    pub fn save_at(
        &self,
        content: &str,
        conversion: Conversion,
        time: NaiveDateTime,
    ) -> Result<PathBuf> {
        let stamp = time.format("%Y%m%d_%H%M%S").to_string();

        for attempt in 0..MAX_ATTEMPTS {
            let path = self.directory.join(file_name(conversion, &stamp, attempt));

            let file = match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => file,
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                    debug!("{} already exists", path.display());
                    continue;
                }
                Err(err) => {
                    return Err(err)
                        .with_context(|| format!("could not create {}", path.display()));
                }
            };

            write_new_file(&path, file, content)?;

            info!("Saved {} result to {}", conversion.tag(), path.display());
            return Ok(path);
        }

        bail!(
            "more than {MAX_ATTEMPTS} {} results saved at {stamp}",
            conversion.tag()
        )
    }
}

/// Write `content` into the freshly created `file` at `path`, removing it again on failure.
fn write_new_file(path: &Path, file: impl Write, content: &str) -> Result<()> {
    let mut writer = BufWriter::new(file);
    let result = writer
        .write_all(content.as_bytes())
        .and_then(|()| writer.flush());
    drop(writer);

    if let Err(err) = result {
        if let Err(remove_err) = fs::remove_file(path) {
            warn!("could not remove {}: {remove_err}", path.display());
        }
        return Err(err).with_context(|| format!("could not write {}", path.display()));
    }

    Ok(())
}

impl ResultSink for FileSink {
    fn save(&mut self, content: &str, conversion: Conversion) -> Result<PathBuf> {
        self.save_at(content, conversion, Local::now().naive_local())
    }
}

/// File name of a saved result: `conversion_<tag>_<stamp>.txt`, with `_<attempt>` before the
/// extension for every attempt after the first.
#[must_use]
pub fn file_name(conversion: Conversion, stamp: &str, attempt: usize) -> String {
    let tag = conversion.tag();
    match attempt {
        0 => format!("conversion_{tag}_{stamp}.txt"),
        n => format!("conversion_{tag}_{stamp}_{n}.txt"),
    }
}
