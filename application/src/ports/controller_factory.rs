//! Port for building a fresh controller per batch record

use crate::use_cases::analyze_text::AnalyzeTextUseCase;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

#[derive(Error, Debug)]
#[error("Failed to build controller: {0}")]
pub struct FactoryError(pub String);

/// Builds an [`AnalyzeTextUseCase`] bound to one credential.
///
/// Every generation call made by the returned controller must observe
/// `cancel`, so that cancelling the token winds the analysis down promptly.
pub trait ControllerFactory: Send + Sync {
    fn build(
        &self,
        credential: &str,
        cancel: CancellationToken,
    ) -> Result<AnalyzeTextUseCase, FactoryError>;
}
