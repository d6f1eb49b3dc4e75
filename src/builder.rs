use std::path::PathBuf;

use tracing::debug;

use crate::bind;
use crate::document::Document;
use crate::error::BindError;
use crate::file;
use crate::resolve::{self, ResolveInput};
use crate::schema::Destination;

/// Builder for loading layered documents and binding them.
///
/// Files are merged in the order they were added, later overriding earlier.
/// Environment variables are off until a prefix is set with
/// [`env_prefix()`](Self::env_prefix), and then override every file.
///
/// ```ignore
/// let mut config = AppConfig::default();
/// Loader::new()
///     .file("/etc/app/app.ini")
///     .optional_file("app.local.toml")
///     .env_prefix("APP")
///     .bind_all(&mut config)?;
/// ```
#[derive(Debug, Default)]
pub struct Loader {
    files: Vec<(PathBuf, bool)>,
    env_prefix: Option<String>,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required file. Loading fails if it cannot be read.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push((path.into(), false));
        self
    }

    /// Add a file that is silently skipped when it does not exist.
    pub fn optional_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push((path.into(), true));
        self
    }

    /// Overlay `{PREFIX}__{SECTION}__{OPTION}` environment variables on top of
    /// every file.
    pub fn env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Disable environment variable loading entirely.
    pub fn no_env(mut self) -> Self {
        self.env_prefix = None;
        self
    }

    /// Build the `ResolveInput` from current builder state.
    fn build_input(&self, env_vars: Vec<(String, String)>) -> Result<ResolveInput, BindError> {
        let files = file::load_files(&self.files)?;
        debug!(
            requested = self.files.len(),
            loaded = files.len(),
            env = self.env_prefix.as_deref().unwrap_or("<disabled>"),
            "loading document layers"
        );
        Ok(ResolveInput {
            files,
            env_vars,
            env_prefix: self.env_prefix.clone(),
        })
    }

    fn document_with_env(&self, env_vars: Vec<(String, String)>) -> Result<Document, BindError> {
        resolve::resolve(self.build_input(env_vars)?)
    }

    /// Load and merge every layer into one document.
    pub fn document(&self) -> Result<Document, BindError> {
        let env_vars = match self.env_prefix {
            Some(_) => std::env::vars().collect(),
            None => Vec::new(),
        };
        self.document_with_env(env_vars)
    }

    /// Load every layer and bind the whole document into `dest`.
    pub fn bind_all<D: Destination + ?Sized>(&self, dest: &mut D) -> Result<(), BindError> {
        bind::bind_all(dest, &self.document()?)
    }

    /// Load every layer and bind the section named `name` into `dest`.
    pub fn bind_section<D: Destination + ?Sized>(
        &self,
        name: &str,
        dest: &mut D,
    ) -> Result<(), BindError> {
        self.document()?.bind_section(name, dest)
    }
}
