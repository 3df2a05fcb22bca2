//! Model lookup by identifier

use super::{EntityTagger, LexiconTagger, ModelSource};
use crate::domain::{MindRepError, Result};
use std::path::Path;
use std::sync::Arc;

/// Model used when none is configured
///
/// The name matches the spaCy identifier operators already configure; the
/// model behind it is the bundled lexicon tagger.
pub const DEFAULT_MODEL: &str = "en_core_web_sm";

/// Models compiled into the binary, by identifier
const BUILTIN_MODELS: &[(&str, &str)] = &[(
    DEFAULT_MODEL,
    include_str!("../../../models/en_core_web_sm.toml"),
)];

/// Identifiers of the compiled-in models
pub fn builtin_models() -> impl Iterator<Item = &'static str> {
    BUILTIN_MODELS.iter().map(|(name, _)| *name)
}

/// Load a tagger
///
/// With `model_path` set the model is read from that file, otherwise the
/// identifier must name a compiled-in model. Any failure is reported as
/// [`MindRepError::ModelUnavailable`] so callers can fall back to
/// pattern-only anonymisation.
pub fn load_model(identifier: &str, model_path: Option<&Path>) -> Result<Arc<dyn EntityTagger>> {
    let tagger = match model_path {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|e| {
                MindRepError::model_unavailable(
                    identifier,
                    format!("cannot read {}: {e}", path.display()),
                )
            })?;
            LexiconTagger::from_toml(&content, ModelSource::File(path.display().to_string()))
        }
        None => {
            let (_, content) = BUILTIN_MODELS
                .iter()
                .find(|(name, _)| *name == identifier)
                .ok_or_else(|| {
                    MindRepError::model_unavailable(identifier, "no such built-in model")
                })?;
            LexiconTagger::from_toml(content, ModelSource::Builtin)
        }
    }
    .map_err(|e| match e {
        unavailable @ MindRepError::ModelUnavailable { .. } => unavailable,
        other => MindRepError::model_unavailable(identifier, other.to_string()),
    })?;

    tracing::debug!(
        model = %tagger.model_info().name,
        version = %tagger.model_info().version,
        kind = %tagger.model_info().kind,
        "Entity model loaded"
    );

    Ok(Arc::new(tagger))
}
