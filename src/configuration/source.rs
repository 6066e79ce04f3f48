//! Resolution of the config file argument into a readable stream.

use std::fmt::{self, Debug, Formatter};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::ConfigurationError;
use super::utilities::get_default_configuration_file_path;


/// A config file handle that may be open or closed.
///
/// The recorded path (if any) allows a closed handle to be reopened,
/// e.g. when a reloading server hands back the handle it used last time.
pub struct ConfigFile {
    path: Option<PathBuf>,
    stream: Option<Box<dyn Read + Send>>,
}

impl ConfigFile {
    /// Open the file at `path` for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let file = open_file(path)?;

        Ok(Self::from_file(file, path))
    }

    /// Wrap an already open file, recording the path it was opened from.
    pub fn from_file<P: Into<PathBuf>>(file: File, path: P) -> Self {
        Self {
            path: Some(path.into()),
            stream: Some(Box::new(file)),
        }
    }

    /// Wrap an arbitrary reader. Once closed, such a handle cannot be reopened.
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Self {
            path: None,
            stream: Some(Box::new(reader)),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_closed(&self) -> bool {
        self.stream.is_none()
    }

    /// Close the underlying stream, keeping the recorded path.
    pub fn close(&mut self) {
        self.stream = None;
    }

    /// Take the handle's current state, leaving the handle closed.
    fn take_state(&mut self) -> HandleState {
        match (self.stream.take(), &self.path) {
            (Some(stream), _) => HandleState::ReadableNow(stream),
            (None, Some(path)) => HandleState::ReopenByPath(path.clone()),
            (None, None) => HandleState::Unrecoverable,
        }
    }
}

impl Debug for ConfigFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigFile")
            .field("path", &self.path)
            .field("closed", &self.is_closed())
            .finish()
    }
}


enum HandleState {
    ReadableNow(Box<dyn Read + Send>),
    ReopenByPath(PathBuf),
    Unrecoverable,
}


/// Where the configuration should be read from.
#[derive(Debug)]
pub enum ConfigSource<'a> {
    /// Search the current directory for a default config file.
    Default,

    /// A path to open.
    Path(PathBuf),

    /// A handle in any state. It is always left closed once loading finishes.
    Handle(&'a mut ConfigFile),
}

impl<'a> From<&'a mut ConfigFile> for ConfigSource<'a> {
    fn from(handle: &'a mut ConfigFile) -> Self {
        Self::Handle(handle)
    }
}

impl From<PathBuf> for ConfigSource<'_> {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for ConfigSource<'_> {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<&str> for ConfigSource<'_> {
    fn from(path: &str) -> Self {
        Self::Path(PathBuf::from(path))
    }
}

impl From<String> for ConfigSource<'_> {
    fn from(path: String) -> Self {
        Self::Path(PathBuf::from(path))
    }
}

impl<'a, T> From<Option<T>> for ConfigSource<'a>
where
    T: Into<ConfigSource<'a>>,
{
    fn from(source: Option<T>) -> Self {
        source.map(Into::into).unwrap_or(Self::Default)
    }
}


/// A stream ready to be read, plus the best-effort path it came from.
pub(crate) struct ResolvedStream {
    reader: Box<dyn Read + Send>,
    path: Option<PathBuf>,
}

impl ResolvedStream {
    pub(crate) fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read the remaining contents. The stream is closed when this returns.
    ///
    /// Contents that are not UTF-8 are a parse error, not an I/O one.
    pub(crate) fn read_to_string(mut self) -> Result<String, ConfigurationError> {
        let mut contents = String::new();
        self.reader
            .read_to_string(&mut contents)
            .map_err(|error| match error.kind() {
                ErrorKind::InvalidData => ConfigurationError::Parse {
                    message: format!("could not {}: {}", self.describe_read(), error),
                },
                _ => ConfigurationError::io(self.describe_read(), error),
            })?;

        Ok(contents)
    }

    fn describe_read(&self) -> String {
        match &self.path {
            Some(path) => format!("read config file {}", path.display()),
            None => "read config stream".to_string(),
        }
    }
}


/// Turn a [`ConfigSource`] into a readable stream.
///
/// A handle source is closed by this call whatever the outcome.
pub(crate) fn resolve_source(source: ConfigSource<'_>) -> Result<ResolvedStream, ConfigurationError> {
    match source {
        ConfigSource::Default => {
            let path = get_default_configuration_file_path()?;
            debug!("Using default config file {}.", path.display());
            open_stream(path)
        }
        ConfigSource::Path(path) => open_stream(path),
        ConfigSource::Handle(handle) => resolve_handle(handle),
    }
}

fn resolve_handle(handle: &mut ConfigFile) -> Result<ResolvedStream, ConfigurationError> {
    let recorded_path = handle.path.clone();

    match handle.take_state() {
        HandleState::ReadableNow(reader) => Ok(ResolvedStream {
            reader,
            path: recorded_path,
        }),
        HandleState::ReopenByPath(path) => {
            debug!("Reopening closed config file {}.", path.display());
            match open_stream(path) {
                Err(ConfigurationError::NotFound { path }) => {
                    Err(ConfigurationError::Deleted { path })
                }
                other => other,
            }
        }
        HandleState::Unrecoverable => Err(ConfigurationError::UnrecoverableHandle),
    }
}

fn open_stream(path: PathBuf) -> Result<ResolvedStream, ConfigurationError> {
    let file = open_file(&path)?;

    Ok(ResolvedStream {
        reader: Box::new(file),
        path: Some(path),
    })
}

fn open_file(path: &Path) -> Result<File, ConfigurationError> {
    File::open(path).map_err(|error| match error.kind() {
        ErrorKind::NotFound => ConfigurationError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigurationError::io(format!("open config file {}", path.display()), error),
    })
}
