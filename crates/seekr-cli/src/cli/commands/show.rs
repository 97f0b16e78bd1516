//! Show command handler.

use std::io::{self, Write};

use anyhow::{Context, Result};
use seekr_core::api::DocumentId;
use seekr_core::config::Config;
use seekr_core::highlight::{LineSurface, Segment, highlight_document};

use crate::cli::emphasis::Emphasis;

pub async fn run(config: &Config, id: &str, args: &[String]) -> Result<()> {
    let terms = super::query_terms(args)?;
    let client = super::client(config)?;
    let id = DocumentId::from(id);

    let results = client
        .search(&terms)
        .await
        .with_context(|| format!("search '{}' at {}", terms.join(" "), client.base_url()))?;
    let Some(hit) = results.get(&id) else {
        anyhow::bail!(
            "Document {id} is not among the results for '{}'",
            terms.join(" ")
        );
    };

    let text = client
        .fetch_document(&id)
        .await
        .with_context(|| format!("fetch document {id}"))?;

    let mut surface = LineSurface::new();
    let highlighted = highlight_document(&text, &hit.matches, config.highlight, &mut surface);

    let mut out = io::stdout().lock();
    write_document(&mut out, &highlighted.segments, Emphasis::for_stdout())?;
    write_summary(&mut out, highlighted.navigation.offsets())?;
    Ok(())
}

fn write_document(out: &mut impl Write, segments: &[Segment<'_>], emphasis: Emphasis) -> io::Result<()> {
    for segment in segments {
        if !segment.is_highlighted() {
            out.write_all(segment.text.as_bytes())?;
            continue;
        }
        // Close the emphasis at each line end so it never spills into the margin.
        for (i, line) in segment.text.split('\n').enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            if !line.is_empty() {
                out.write_all(emphasis.wrap(line).as_bytes())?;
            }
        }
    }

    let ends_with_newline = segments
        .iter()
        .rev()
        .find(|s| !s.text.is_empty())
        .is_some_and(|s| s.text.ends_with('\n'));
    if !ends_with_newline {
        writeln!(out)?;
    }
    Ok(())
}

/// One line listing where the highlighted spans start (1-based line numbers).
fn write_summary(out: &mut impl Write, rows: &[usize]) -> io::Result<()> {
    writeln!(out)?;
    if rows.is_empty() {
        return writeln!(out, "-- no highlighted matches");
    }

    let mut lines: Vec<usize> = rows.iter().map(|row| row + 1).collect();
    lines.dedup();
    let list = lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let noun = if rows.len() == 1 { "span" } else { "spans" };
    writeln!(out, "-- {} highlighted {noun} on line {list}", rows.len())
}
