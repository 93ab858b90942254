// Colored terminal output for analysis results.
//
// This module handles all terminal-specific formatting: colors, tables,
// weight bars. The main.rs display paths delegate here; nothing in the
// pipeline depends on it.

use colored::Colorize;

use crate::gaps::GapAnalysis;
use crate::pipeline::AnalysisResult;
use crate::stats::frequency::{self, KeywordRecord};
use crate::topics::{TopicModelResult, TopicOutcome};

/// Display the ranked keyword table.
pub fn display_keywords(records: &[KeywordRecord], top: usize) {
    if records.is_empty() {
        println!("No keywords found — the corpus may be empty or all-stopword.");
        return;
    }

    println!("\n{}", format!("=== Top Keywords ({} distinct terms) ===", records.len()).bold());
    println!();
    println!(
        "  {:>4}  {:<32} {:>6}  {:>8}",
        "Rank".dimmed(),
        "Term".dimmed(),
        "Docs".dimmed(),
        "Burst".dimmed(),
    );
    println!("  {}", "-".repeat(58).dimmed());

    for (i, record) in records.iter().take(top).enumerate() {
        let burst = match record.burst {
            Some(score) => format!("{score:+.2}"),
            None => "n/a".to_string(),
        };
        let burst_colored = match record.burst {
            Some(s) if s >= 1.0 => burst.bright_red(),
            Some(s) if s > 0.0 => burst.bright_yellow(),
            _ => burst.dimmed(),
        };
        println!(
            "  {:>4}  {:<32} {:>6}  {:>8}",
            i + 1,
            record.term,
            record.total_frequency,
            burst_colored,
        );
    }
    println!();
}

/// Display the trending-term list (burst ranking).
pub fn display_burst(records: &[KeywordRecord], top: usize) {
    let bursting = frequency::top_burst(records, top);
    if bursting.is_empty() {
        println!("No burst scores computable — the corpus needs 2+ distinct years.");
        return;
    }

    println!("\n{}", "=== Trending Terms ===".bold());
    println!();
    for (i, record) in bursting.iter().enumerate() {
        let score = record.burst.unwrap_or(0.0);
        let marker = if score >= 1.0 {
            "▲".bright_red()
        } else if score > 0.0 {
            "△".bright_yellow()
        } else {
            "▽".bright_blue()
        };
        println!(
            "  {:>2}. {} {:<32} {:+.2}  ({} docs)",
            i + 1,
            marker,
            record.term.bold(),
            score,
            record.total_frequency,
        );
    }
    println!();
}

/// Display topics as a weight bar chart.
///
/// A topic's weight is its average share across all document
/// distributions — how much of the corpus talks about it.
pub fn display_topics(outcome: &TopicOutcome, top_terms: usize) {
    let result = match outcome {
        TopicOutcome::Fitted(result) => result,
        TopicOutcome::NotComputable { reason } => {
            println!("Topics not computable: {reason}");
            return;
        }
    };

    let convergence = if result.converged {
        format!("converged in {} iterations", result.iterations)
    } else {
        format!("not converged after {} iterations", result.iterations)
    };
    println!(
        "\n{}",
        format!("=== Research Topics ({} topics, {convergence}) ===", result.topics.len()).bold()
    );
    println!();

    let bar_width: usize = 20;
    for topic in &result.topics {
        let weight = corpus_share(result, topic.id);
        let filled = (weight * bar_width as f64).round() as usize;
        let bar = format!(
            "[{}{}]",
            "=".repeat(filled.min(bar_width)),
            " ".repeat(bar_width.saturating_sub(filled))
        );
        let colored_bar = if weight >= 0.25 {
            bar.bright_green()
        } else if weight >= 0.10 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        let label = topic_label(result, topic.id);
        println!("  {:>2}. {:<40} {} {:.2}", topic.id + 1, label.bold(), colored_bar, weight);

        let terms: Vec<&str> = topic
            .terms
            .iter()
            .take(top_terms)
            .map(|t| t.term.as_str())
            .collect();
        println!("      Terms: {}", terms.join(", ").dimmed());
        println!(
            "      Representative papers: {}",
            topic.representative_docs.join(", ").dimmed()
        );
        println!();
    }
}

/// Display ranked gap clusters.
pub fn display_gaps(analysis: &GapAnalysis, top: usize) {
    if analysis.clusters.is_empty() {
        println!("No limitation/future-research statements matched.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Research Gaps ({} statements in {} clusters) ===",
            analysis.statements.len(),
            analysis.clusters.len()
        )
        .bold()
    );
    println!();

    for cluster in analysis.clusters.iter().take(top) {
        let mentions = if cluster.member_count == 1 {
            "1 mention".to_string()
        } else {
            format!("{} mentions", cluster.member_count)
        };
        let since = cluster
            .earliest_year
            .map(|y| format!(", since {y}"))
            .unwrap_or_default();
        println!(
            "  {:>2}. {} {}",
            cluster.id + 1,
            format!("({mentions}{since})").bright_yellow(),
            cluster.representative,
        );
    }
    println!();
}

/// Display the run summary: corpus size, citation aggregates.
pub fn display_summary(result: &AnalysisResult) {
    println!("\n{}", "=== Corpus Summary ===".bold());
    println!("  Papers analyzed:   {}", result.corpus_size);
    println!("  Distinct keywords: {}", result.keywords.len());
    println!(
        "  Citations:         {} total, {:.1} mean, h-index {}",
        result.citations.total_citations,
        result.citations.mean_citations,
        result.citations.h_index,
    );
    println!(
        "  Network:           {} nodes, {} edges",
        result.network.nodes.len(),
        result.network.edges.len(),
    );
}

/// A topic's average share across all document distributions.
fn corpus_share(result: &TopicModelResult, topic_id: usize) -> f64 {
    if result.assignments.is_empty() {
        return 0.0;
    }
    result
        .assignments
        .iter()
        .map(|a| a.distribution[topic_id])
        .sum::<f64>()
        / result.assignments.len() as f64
}

/// Label a topic by its top terms, joined with " / ".
fn topic_label(result: &TopicModelResult, topic_id: usize) -> String {
    result.topics[topic_id]
        .terms
        .iter()
        .take(3)
        .map(|t| t.term.as_str())
        .collect::<Vec<_>>()
        .join(" / ")
}
