// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Command bodies, written against generic readers and writers so tests can
//! drive them with byte buffers instead of a terminal.

use super::display::{count_line, listing_header, matches_header, term_line, PROMPT};
use anyhow::{Context, Result};
use autocomplete::{by_natural_order, by_reverse_weight_order, load_path, Autocomplete, Term};
use serde::Serialize;
use std::io::{BufRead, Write};

/// Load a dataset file and build the table.
pub fn load_autocomplete(path: &str) -> Result<Autocomplete> {
    let terms = load_path(path).with_context(|| format!("failed to load dataset '{}'", path))?;
    tracing::info!(path, terms = terms.len(), "dataset loaded");
    Ok(Autocomplete::new(terms))
}

/// Interactive loop: prompt, read a prefix, print up to `limit` matches.
///
/// Ends cleanly at end of input.
pub fn query_loop<R: BufRead, W: Write>(
    ac: &Autocomplete,
    limit: usize,
    input: R,
    mut out: W,
) -> Result<()> {
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        let line = line.context("failed to read prefix")?;
        let prefix = line.trim_end_matches('\r');
        let results = ac.all_matches(prefix);
        let shown = results.len().min(limit);

        writeln!(out, "{}", matches_header(prefix, shown, results.len()))?;
        for term in &results[..shown] {
            writeln!(out, "  {}", term_line(term))?;
        }

        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

/// One `count<TAB>"prefix"` line per prefix.
pub fn count<W: Write>(ac: &Autocomplete, prefixes: &[String], mut out: W) -> Result<()> {
    for (prefix, n) in prefixes.iter().zip(ac.number_of_matches_batch(prefixes)) {
        writeln!(out, "{}", count_line(prefix, n))?;
    }
    Ok(())
}

/// First `limit` terms by lexicographic order, then by reverse-weight order.
pub fn top<W: Write>(ac: &Autocomplete, limit: usize, mut out: W) -> Result<()> {
    let mut terms: Vec<Term> = ac.terms().to_vec();
    let shown = limit.min(terms.len());

    terms.sort_by(by_natural_order());
    writeln!(out, "{}", listing_header(&format!("Top {} by lexicographic order:", shown)))?;
    for term in &terms[..shown] {
        writeln!(out, "{}", term_line(term))?;
    }

    terms.sort_by(by_reverse_weight_order());
    writeln!(out, "{}", listing_header(&format!("Top {} by reverse-weight order:", shown)))?;
    for term in &terms[..shown] {
        writeln!(out, "{}", term_line(term))?;
    }
    Ok(())
}

#[derive(Serialize)]
struct BatchAnswer<'a> {
    prefix: &'a str,
    count: usize,
    matches: &'a [Term],
}

/// Read every prefix from `input`, answer them together, print JSON lines.
pub fn batch<R: BufRead, W: Write>(
    ac: &Autocomplete,
    limit: usize,
    input: R,
    mut out: W,
) -> Result<()> {
    let prefixes = input
        .lines()
        .map(|line| line.map(|l| l.trim_end_matches('\r').to_string()))
        .collect::<Result<Vec<String>, _>>()
        .context("failed to read prefixes")?;

    tracing::debug!(prefixes = prefixes.len(), "answering batch");
    let answers = ac.all_matches_batch(&prefixes);

    for (prefix, matches) in prefixes.iter().zip(&answers) {
        let answer = BatchAnswer {
            prefix,
            count: matches.len(),
            matches: &matches[..matches.len().min(limit)],
        };
        serde_json::to_writer(&mut out, &answer)?;
        writeln!(out)?;
    }
    Ok(())
}
