// Topic modeling — document–term matrix construction and latent topic
// inference over the normalized corpus.

pub mod lda;
pub mod matrix;
pub mod model;
pub mod traits;

pub use lda::LdaModel;
pub use matrix::DocTermMatrix;
pub use model::{Topic, TopicModelResult, TopicOutcome};
pub use traits::TopicModeler;
