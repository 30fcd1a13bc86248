//! Stack merge: documents in precedence order, each followed by its own
//! environment overlay.

use serde_json::Map;

use super::deep::deep_merge_maps;
use crate::domain::{ConfigDocument, Environment, EnvironmentSelection, MergedConfig};
use crate::error::Result;
use crate::resolver::{select_environment, EnvSource};

/// Merge `documents` (lowest precedence first) for a concrete environment.
///
/// Per document: its own fields go in, then its `environments.<env>` fragment,
/// so a document's overlay beats its own base values and the whole document
/// beats everything before it. Inputs are only read.
pub fn merge_documents(documents: &[&ConfigDocument], environment: Environment) -> Result<MergedConfig> {
    let mut merged = Map::new();

    for document in documents {
        let (rest, fragment) = document.split(environment)?;
        tracing::trace!(
            document = document.origin(),
            keys = rest.len(),
            overlay_keys = fragment.len(),
            "merging document"
        );
        deep_merge_maps(&mut merged, rest);
        deep_merge_maps(&mut merged, fragment);
    }

    Ok(MergedConfig::new(environment, merged))
}

/// Merge after resolving the selection; `None` or `Current` consult `source`.
pub fn merge(
    documents: &[&ConfigDocument],
    selection: Option<EnvironmentSelection>,
    source: &dyn EnvSource,
) -> Result<MergedConfig> {
    let environment = select_environment(selection, source)?;
    merge_documents(documents, environment)
}

/// The four-document composition: global base, agency common, app base,
/// agency app.
pub fn merge_configs(
    base_common: &ConfigDocument,
    agency_common: &ConfigDocument,
    base_app: &ConfigDocument,
    agency_app: &ConfigDocument,
    selection: Option<EnvironmentSelection>,
    source: &dyn EnvSource,
) -> Result<MergedConfig> {
    merge(&[base_common, agency_common, base_app, agency_app], selection, source)
}
