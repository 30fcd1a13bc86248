//! Override document loading from disk

use std::fs;
use std::path::Path;

use crate::domain::ConfigDocument;
use crate::error::{ConfigError, Result};

/// Load a document, choosing the parser from the file extension.
pub fn load_document(path: &Path) -> Result<ConfigDocument> {
    let content = fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    let origin = path.display().to_string();

    let document = match ext.as_str() {
        "toml" => ConfigDocument::from_toml_str(origin, &content)?,
        "yaml" | "yml" => ConfigDocument::from_yaml_str(origin, &content)?,
        "json" => ConfigDocument::from_json_str(origin, &content)?,
        other => {
            return Err(ConfigError::UnsupportedFormat {
                extension: other.to_string(),
                path: path.to_path_buf(),
            })
        }
    };

    tracing::debug!(path = %path.display(), keys = document.fields().len(), "loaded override document");
    Ok(document)
}

/// Load every path in order.
pub fn load_documents<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<ConfigDocument>> {
    paths.iter().map(|path| load_document(path.as_ref())).collect()
}
