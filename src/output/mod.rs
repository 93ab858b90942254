// Terminal rendering of analysis results.

pub mod terminal;
