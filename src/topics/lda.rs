// Latent Dirichlet allocation by collapsed Gibbs sampling.
//
// Each document is a mixture of K latent topics; each topic is a
// distribution over vocabulary terms. One sweep resamples every token's
// topic assignment from its full conditional:
//
//   p(z = k) ∝ (n_dk + α) · (n_kw + β) / (n_k + V·β)
//
// The fit is a pure function of (matrix, config): the RNG is seeded
// from config.seed, documents and tokens are visited in fixed order,
// and no fit state survives between calls — so a refit with the same
// inputs reproduces the same term-weight tables exactly.
//
// Convergence is declared when the relative change in corpus
// log-likelihood between checkpoints drops below the configured
// tolerance. Hitting the iteration cap or the optional time budget
// instead returns the best checkpoint so far, flagged non-converged.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::TopicConfig;
use crate::error::AnalysisError;

use super::matrix::DocTermMatrix;
use super::model::{DocTopics, TermWeight, Topic, TopicModelResult};
use super::traits::TopicModeler;

/// How many Gibbs sweeps between log-likelihood checkpoints.
const CHECKPOINT_INTERVAL: usize = 10;

/// Collapsed Gibbs sampling LDA — the default topic modeler.
pub struct LdaModel;

/// Smoothed posterior estimates captured at a checkpoint.
struct Snapshot {
    /// Topic–term distributions, K × V; each row sums to 1.
    phi: Vec<Vec<f64>>,
    /// Document–topic distributions, D × K; each row sums to 1.
    theta: Vec<Vec<f64>>,
    log_likelihood: f64,
}

struct SamplerState {
    /// Topic assignment per (doc, token position).
    z: Vec<Vec<usize>>,
    /// n_dk: tokens in doc d assigned to topic k.
    doc_topic: Vec<Vec<u32>>,
    /// n_kw: instances of word w assigned to topic k.
    topic_word: Vec<Vec<u32>>,
    /// n_k: total tokens assigned to topic k.
    topic_total: Vec<u32>,
}

impl TopicModeler for LdaModel {
    fn fit(
        &self,
        matrix: &DocTermMatrix,
        config: &TopicConfig,
    ) -> Result<TopicModelResult, AnalysisError> {
        let k = config.num_topics;
        let v = matrix.vocab_size();
        if v < k {
            return Err(AnalysisError::InsufficientVocabulary {
                vocabulary: v,
                requested: k,
            });
        }

        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut state = init_state(matrix, k, &mut rng);

        let deadline = config
            .time_budget_secs
            .map(|secs| Instant::now() + Duration::from_secs(secs));

        let mut best = snapshot(&state, matrix, config);
        let mut last_ll = best.log_likelihood;
        let mut converged = false;
        let mut iterations = 0;

        for sweep in 1..=config.max_iterations {
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    debug!(sweep, "Time budget expired, returning best fit so far");
                    break;
                }
            }

            gibbs_sweep(&mut state, matrix, config, &mut rng);
            iterations = sweep;

            if sweep % CHECKPOINT_INTERVAL == 0 || sweep == config.max_iterations {
                let current = snapshot(&state, matrix, config);
                let ll = current.log_likelihood;
                if ll > best.log_likelihood {
                    best = current;
                }

                let relative_change = ((ll - last_ll) / last_ll.abs().max(1.0)).abs();
                debug!(sweep, log_likelihood = ll, relative_change, "Checkpoint");
                if relative_change < config.convergence_tolerance {
                    converged = true;
                    break;
                }
                last_ll = ll;
            }
        }

        info!(
            topics = k,
            vocabulary = v,
            iterations,
            converged,
            log_likelihood = best.log_likelihood,
            "Topic model fit finished"
        );

        Ok(build_result(best, matrix, config, converged, iterations))
    }
}

fn init_state(matrix: &DocTermMatrix, k: usize, rng: &mut StdRng) -> SamplerState {
    let v = matrix.vocab_size();
    let mut state = SamplerState {
        z: Vec::with_capacity(matrix.num_docs()),
        doc_topic: vec![vec![0; k]; matrix.num_docs()],
        topic_word: vec![vec![0; v]; k],
        topic_total: vec![0; k],
    };

    for (d, doc) in matrix.docs.iter().enumerate() {
        let mut assignments = Vec::with_capacity(doc.token_ids.len());
        for &w in &doc.token_ids {
            let topic = rng.random_range(0..k);
            assignments.push(topic);
            state.doc_topic[d][topic] += 1;
            state.topic_word[topic][w] += 1;
            state.topic_total[topic] += 1;
        }
        state.z.push(assignments);
    }
    state
}

fn gibbs_sweep(
    state: &mut SamplerState,
    matrix: &DocTermMatrix,
    config: &TopicConfig,
    rng: &mut StdRng,
) {
    let k = config.num_topics;
    let v = matrix.vocab_size() as f64;
    let mut weights = vec![0.0; k];

    for (d, doc) in matrix.docs.iter().enumerate() {
        for (pos, &w) in doc.token_ids.iter().enumerate() {
            let old = state.z[d][pos];
            state.doc_topic[d][old] -= 1;
            state.topic_word[old][w] -= 1;
            state.topic_total[old] -= 1;

            let mut total = 0.0;
            for (topic, weight) in weights.iter_mut().enumerate() {
                *weight = (f64::from(state.doc_topic[d][topic]) + config.alpha)
                    * (f64::from(state.topic_word[topic][w]) + config.beta)
                    / (f64::from(state.topic_total[topic]) + v * config.beta);
                total += *weight;
            }

            let mut draw = rng.random::<f64>() * total;
            let mut new = k - 1;
            for (topic, &weight) in weights.iter().enumerate() {
                draw -= weight;
                if draw <= 0.0 {
                    new = topic;
                    break;
                }
            }

            state.z[d][pos] = new;
            state.doc_topic[d][new] += 1;
            state.topic_word[new][w] += 1;
            state.topic_total[new] += 1;
        }
    }
}

/// Smoothed phi/theta estimates plus the corpus log-likelihood under
/// them.
fn snapshot(state: &SamplerState, matrix: &DocTermMatrix, config: &TopicConfig) -> Snapshot {
    let k = config.num_topics;
    let v = matrix.vocab_size();

    let phi: Vec<Vec<f64>> = (0..k)
        .map(|topic| {
            let denom = f64::from(state.topic_total[topic]) + v as f64 * config.beta;
            (0..v)
                .map(|w| (f64::from(state.topic_word[topic][w]) + config.beta) / denom)
                .collect()
        })
        .collect();

    let theta: Vec<Vec<f64>> = matrix
        .docs
        .iter()
        .enumerate()
        .map(|(d, doc)| {
            let denom = doc.token_ids.len() as f64 + k as f64 * config.alpha;
            (0..k)
                .map(|topic| (f64::from(state.doc_topic[d][topic]) + config.alpha) / denom)
                .collect()
        })
        .collect();

    let mut log_likelihood = 0.0;
    for (d, doc) in matrix.docs.iter().enumerate() {
        for &w in &doc.token_ids {
            let p: f64 = (0..k).map(|topic| theta[d][topic] * phi[topic][w]).sum();
            log_likelihood += p.max(f64::MIN_POSITIVE).ln();
        }
    }

    Snapshot {
        phi,
        theta,
        log_likelihood,
    }
}

fn build_result(
    best: Snapshot,
    matrix: &DocTermMatrix,
    config: &TopicConfig,
    converged: bool,
    iterations: usize,
) -> TopicModelResult {
    let k = config.num_topics;

    let topics: Vec<Topic> = best
        .phi
        .iter()
        .enumerate()
        .map(|(id, row)| {
            // Full distribution, weight descending with alphabetical
            // tie-break; the head of the list is the topic's label.
            let mut terms: Vec<TermWeight> = row
                .iter()
                .enumerate()
                .map(|(w, &weight)| TermWeight {
                    term: matrix.vocabulary[w].clone(),
                    weight,
                })
                .collect();
            terms.sort_by(|a, b| {
                b.weight
                    .partial_cmp(&a.weight)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.term.cmp(&b.term))
            });

            // Representatives: highest posterior for this topic among
            // ALL documents, not just those it dominates.
            let mut ranked_docs: Vec<usize> = (0..matrix.num_docs()).collect();
            ranked_docs.sort_by(|&a, &b| {
                best.theta[b][id]
                    .partial_cmp(&best.theta[a][id])
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| matrix.docs[a].doc_id.cmp(&matrix.docs[b].doc_id))
            });
            let representative_docs = ranked_docs
                .into_iter()
                .take(config.representative_docs)
                .map(|d| matrix.docs[d].doc_id.clone())
                .collect();

            Topic {
                id,
                terms,
                representative_docs,
            }
        })
        .collect();

    let assignments: Vec<DocTopics> = matrix
        .docs
        .iter()
        .enumerate()
        .map(|(d, doc)| {
            let distribution = best.theta[d].clone();
            let dominant = (0..k)
                .max_by(|&a, &b| {
                    distribution[a]
                        .partial_cmp(&distribution[b])
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .unwrap_or(0);
            DocTopics {
                doc_id: doc.doc_id.clone(),
                distribution,
                dominant,
            }
        })
        .collect();

    TopicModelResult {
        topics,
        assignments,
        converged,
        iterations,
        log_likelihood: best.log_likelihood,
    }
}
