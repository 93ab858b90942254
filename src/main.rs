use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use lacuna::config::AnalysisConfig;
use lacuna::corpus::import;
use lacuna::gaps;
use lacuna::normalize::{self, Normalizer};
use lacuna::output::terminal;
use lacuna::pipeline;
use lacuna::stats::frequency;
use lacuna::topics::{DocTermMatrix, LdaModel, TopicModeler};

/// Lacuna: research trend and gap analysis for academic paper corpora.
///
/// Turns paper metadata (title, abstract, keywords, year, citations)
/// into trend signals: frequent and bursting vocabulary, latent topic
/// clusters, and recurring statements of unmet research needs.
#[derive(Parser)]
#[command(name = "lacuna", version, about)]
struct Cli {
    /// Path to a JSON analysis configuration (defaults apply when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis pipeline over a corpus
    Analyze {
        /// JSON file containing an array of paper records
        corpus: PathBuf,

        /// Write the full result bundle as JSON to this path
        #[arg(long)]
        export: Option<PathBuf>,

        /// How many keywords and gap clusters to display
        #[arg(long, default_value = "20")]
        top: usize,
    },

    /// Keyword frequency and burst statistics only
    Keywords {
        corpus: PathBuf,

        /// How many terms to display
        #[arg(long, default_value = "30")]
        top: usize,
    },

    /// Topic modeling only
    Topics {
        corpus: PathBuf,

        /// Override the configured topic count K
        #[arg(long)]
        k: Option<usize>,

        /// Override the configured random seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Research gap extraction only
    Gaps {
        corpus: PathBuf,

        /// Override the configured similarity threshold
        #[arg(long)]
        threshold: Option<f64>,
    },
}

fn main() -> Result<()> {
    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lacuna=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze { corpus, export, top } => {
            let docs = import::from_json_file(&corpus)
                .with_context(|| format!("failed to import corpus from {}", corpus.display()))?;
            let result = pipeline::run(&docs, &config)?;

            terminal::display_summary(&result);
            terminal::display_keywords(&result.keywords, top);
            terminal::display_burst(&result.keywords, top);
            terminal::display_topics(&result.topics, config.topics.top_terms);
            terminal::display_gaps(&result.gaps, top);

            if let Some(path) = export {
                let json = serde_json::to_string_pretty(&result)?;
                std::fs::write(&path, json)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Result bundle written to {}", path.display());
            }
        }

        Commands::Keywords { corpus, top } => {
            let docs = import::from_json_file(&corpus)?;
            let normalizer = Normalizer::new(&config.normalizer)?;
            let mut normalized = normalize::normalize_corpus(&normalizer, &docs);
            normalize::salience::enrich_keywords(
                &docs,
                &mut normalized,
                &normalizer,
                &config.normalizer,
            );
            let records = frequency::keyword_records(&normalized, &config.burst);
            terminal::display_keywords(&records, top);
            terminal::display_burst(&records, top);
        }

        Commands::Topics { corpus, k, seed } => {
            let mut config = config.clone();
            if let Some(k) = k {
                config.topics.num_topics = k;
            }
            if let Some(seed) = seed {
                config.topics.seed = seed;
            }
            config.validate()?;
            let topic_config = config.topics.clone();

            let docs = import::from_json_file(&corpus)?;
            let normalizer = Normalizer::new(&config.normalizer)?;
            let normalized = normalize::normalize_corpus(&normalizer, &docs);
            let matrix = DocTermMatrix::build(&normalized, &topic_config);
            let result = LdaModel.fit(&matrix, &topic_config)?;
            terminal::display_topics(
                &lacuna::topics::TopicOutcome::Fitted(result),
                topic_config.top_terms,
            );
        }

        Commands::Gaps { corpus, threshold } => {
            let mut config = config.clone();
            if let Some(threshold) = threshold {
                config.gaps.similarity_threshold = threshold;
            }
            config.validate()?;
            let gap_config = config.gaps.clone();

            let docs = import::from_json_file(&corpus)?;
            let normalizer = Normalizer::new(&config.normalizer)?;
            let analysis = gaps::extract_gaps(&docs, &normalizer, &gap_config)?;
            terminal::display_gaps(&analysis, usize::MAX);
        }
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<AnalysisConfig> {
    match path {
        Some(path) => AnalysisConfig::from_json_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(AnalysisConfig::default()),
    }
}
