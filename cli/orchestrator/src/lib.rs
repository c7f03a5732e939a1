#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
//! Commands behind the `quill` binary.

use std::fs;
use std::path::{Path, PathBuf};

use codegen::{CodegenError, SourceCodeWriter};
use config::{Config, ConfigError};
use logging::LoggingError;
use model::{ModelIoError, SourceFile};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while running a Quill command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or saved
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The log subscriber could not be installed
    #[error(transparent)]
    Logging(#[from] LoggingError),
    /// The model file could not be read or parsed
    #[error("Failed to load model: {0}")]
    Model(#[from] ModelIoError),
    /// The model could not be rendered
    #[error(transparent)]
    Codegen(#[from] CodegenError),
    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The model declares no type, so no file name can be derived
    #[error("Model {0} declares no types; pass --output to choose a file")]
    NoTypes(PathBuf),
    /// `init-config` would overwrite an existing file
    #[error("Config file already exists at {0} (use --force to overwrite)")]
    ConfigExists(PathBuf),
}

/// Result type alias for Quill commands.
pub type Result<T> = std::result::Result<T, CliError>;

/// Render the model stored at `model_path` with the writer `config` selects.
pub fn render_model(model_path: &Path, config: &Config) -> Result<String> {
    let source = SourceFile::from_file(model_path)?;
    let writer = codegen::writer_for(&config.codegen.language, config.format.indent)?;
    render_source(&source, writer.as_ref(), model_path)
}

/// Render the model at `model_path` and write it to disk.
///
/// Without `output`, the file lands under `config.codegen.output_dir`, in the
/// directory matching the model's package. Returns the written path.
pub fn render_to_file(model_path: &Path, config: &Config, output: Option<&Path>) -> Result<PathBuf> {
    let source = SourceFile::from_file(model_path)?;
    let writer = codegen::writer_for(&config.codegen.language, config.format.indent)?;
    let target = match output {
        Some(path) => path.to_path_buf(),
        None => default_target(&source, writer.as_ref(), &config.codegen.output_dir)
            .ok_or_else(|| CliError::NoTypes(model_path.to_path_buf()))?,
    };
    let text = render_source(&source, writer.as_ref(), model_path)?;

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&target, text)?;
    info!(path = %target.display(), "wrote source file");
    Ok(target)
}

fn render_source(
    source: &SourceFile,
    writer: &dyn SourceCodeWriter,
    model_path: &Path,
) -> Result<String> {
    debug!(model = %model_path.display(), language = writer.language(), "rendering model");
    Ok(writer.generate(source)?)
}

/// `{output_dir}/{package as directories}/{file name}`, or `None` for a model without types.
fn default_target(
    source: &SourceFile,
    writer: &dyn SourceCodeWriter,
    output_dir: &Path,
) -> Option<PathBuf> {
    let file_name = writer.file_name(source)?;
    let mut target = output_dir.to_path_buf();
    if let Some(package) = source.package() {
        target.extend(package.split('.'));
    }
    target.push(file_name);
    Some(target)
}

/// Write the default configuration to `path`.
///
/// An existing file is only replaced when `force` is set.
pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::ConfigExists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Config::default().save(path)?;
    info!(path = %path.display(), "wrote default configuration");
    Ok(())
}
