// Topic modeler trait — swap-ready abstraction.
//
// The pipeline only depends on this seam, so the inference algorithm
// can be replaced (e.g. by a variational fit) without touching the rest
// of the system. The contract is a pure function of (matrix, config):
// no hidden fit state survives between calls, and the config's explicit
// seed makes refits reproducible.

use crate::config::TopicConfig;
use crate::error::AnalysisError;

use super::matrix::DocTermMatrix;
use super::model::TopicModelResult;

/// Fits a topic model to a document–term matrix.
pub trait TopicModeler {
    /// Fit K topics. Fails with `InsufficientVocabulary` when the
    /// matrix has fewer terms than topics; K is never silently reduced.
    fn fit(
        &self,
        matrix: &DocTermMatrix,
        config: &TopicConfig,
    ) -> Result<TopicModelResult, AnalysisError>;
}
