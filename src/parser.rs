//! Parsers for the textual forms used on the command line and in env vars.
//!
//! - edge: `SRC:DEST`, e.g. `0:1` or `-1:0` (range checks happen in the graph)
//! - value list: comma-separated integers, e.g. `10, 20,30`

use tracing::instrument;

/// Parse a `SRC:DEST` edge.
#[instrument(level = "trace")]
pub fn parse_edge(input: &str) -> Result<(i32, i32), String> {
    let (src, dest) = input
        .split_once(':')
        .ok_or_else(|| format!("expected SRC:DEST, got '{input}'"))?;
    let src = parse_int(src)?;
    let dest = parse_int(dest)?;
    Ok((src, dest))
}

/// Parse a comma-separated list of integers; blank input yields an empty list.
#[instrument(level = "trace")]
pub fn parse_value_list(input: &str) -> Result<Vec<i32>, String> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    input.split(',').map(parse_int).collect()
}

/// Parse a comma-separated list of `SRC:DEST` edges.
#[instrument(level = "trace")]
pub fn parse_edge_list(input: &str) -> Result<Vec<[i32; 2]>, String> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    input
        .split(',')
        .map(|edge| parse_edge(edge.trim()).map(|(src, dest)| [src, dest]))
        .collect()
}

fn parse_int(input: &str) -> Result<i32, String> {
    let trimmed = input.trim();
    trimmed
        .parse::<i32>()
        .map_err(|e| format!("invalid integer '{trimmed}': {e}"))
}
