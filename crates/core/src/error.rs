use thiserror::Error;

use crate::model::{EngineConfigError, GlyphError};
use crate::vocabulary::VocabularyError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Glyph(#[from] GlyphError),
    #[error(transparent)]
    EngineConfig(#[from] EngineConfigError),
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
}
