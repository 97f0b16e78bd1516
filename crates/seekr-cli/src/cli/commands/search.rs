//! Search command handler.

use std::io::{self, Write};

use anyhow::{Context, Result};
use seekr_core::api::{ResultEntry, build_result_entries};
use seekr_core::config::Config;

use crate::cli::emphasis::Emphasis;

pub async fn run(config: &Config, args: &[String]) -> Result<()> {
    let terms = super::query_terms(args)?;
    let client = super::client(config)?;

    let results = client
        .search(&terms)
        .await
        .with_context(|| format!("search '{}' at {}", terms.join(" "), client.base_url()))?;
    tracing::info!(hits = results.len(), "search finished");

    let entries = build_result_entries(&results);
    let mut out = io::stdout().lock();
    write_results(&mut out, &entries, Emphasis::for_stdout())?;
    Ok(())
}

fn write_results(out: &mut impl Write, entries: &[ResultEntry], emphasis: Emphasis) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "No results");
    }

    for (rank, entry) in entries.iter().enumerate() {
        writeln!(
            out,
            "{}. [{}] {} ({} matches)",
            rank + 1,
            entry.id,
            entry.url,
            entry.match_count
        )?;
        if entry.snippet.is_empty() {
            continue;
        }
        let snippet: String = entry
            .snippet
            .iter()
            .map(|part| {
                if part.marked {
                    emphasis.wrap(&part.text)
                } else {
                    part.text.clone()
                }
            })
            .collect();
        writeln!(out, "   {snippet}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use seekr_core::api::{DocumentId, parse_snippet};

    use super::*;

    fn entry(id: &str, snippet: &str) -> ResultEntry {
        ResultEntry {
            id: DocumentId::from(id),
            url: format!("https://example.com/{id}"),
            snippet: parse_snippet(snippet),
            match_count: 2,
        }
    }

    #[test]
    fn test_write_results_ranks_and_marks() {
        let mut out = Vec::new();
        write_results(
            &mut out,
            &[entry("7", "the (((fox)))"), entry("3", "")],
            Emphasis::Brackets,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "1. [7] https://example.com/7 (2 matches)\n   the [[fox]]\n2. [3] https://example.com/3 (2 matches)\n"
        );
    }

    #[test]
    fn test_write_results_empty() {
        let mut out = Vec::new();
        write_results(&mut out, &[], Emphasis::Brackets).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No results\n");
    }
}
