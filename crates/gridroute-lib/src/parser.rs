//! Reader for the plain-text terrain description format.
//!
//! ```text
//! 5          side length
//! 6 N        start case and heading (N, E, S, O or W)
//! 1-2        path between two cases
//! 13         goal case
//! .          end of description
//! ```
//!
//! Blank lines are ignored and the end of the stream also ends the input.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::coordinate::{Coordinate, Direction};
use crate::error::{Error, Result};
use crate::terrain::Terrain;

/// Load a terrain description from disk.
pub fn load_terrain(path: &Path) -> Result<Terrain> {
    let file = File::open(path)?;
    let terrain = parse_terrain(BufReader::new(file))?;
    debug!(path = %path.display(), side = terrain.side(), "loaded terrain");
    Ok(terrain)
}

/// Parse a terrain description from any buffered reader.
pub fn parse_terrain<R: BufRead>(reader: R) -> Result<Terrain> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(index, line)| line.map(|text| (index + 1, text)));

    let mut next_meaningful = move || -> Result<Option<(usize, String)>> {
        for entry in lines.by_ref() {
            let (number, text) = entry?;
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return Ok(Some((number, trimmed.to_string())));
            }
        }
        Ok(None)
    };

    let (number, text) =
        next_meaningful()?.ok_or_else(|| Error::parse(1, "missing side length"))?;
    let side = parse_number(number, &text)?;
    if side == 0 {
        return Err(Error::parse(number, "side length must be positive"));
    }
    let mut terrain =
        Terrain::new(side).map_err(|err| Error::parse(number, err.to_string()))?;

    let (number, text) =
        next_meaningful()?.ok_or_else(|| Error::parse(number + 1, "missing start position"))?;
    let (start, direction) = parse_start(number, &text, side)?;
    terrain.set_start(start, direction)?;

    while let Some((number, text)) = next_meaningful()? {
        if text.starts_with('.') {
            break;
        }
        match text.split_once('-') {
            Some((a, b)) => {
                let a = parse_case(number, a, side)?;
                let b = parse_case(number, b, side)?;
                terrain.add_path(a, b)?;
            }
            None => {
                let goal = parse_case(number, &text, side)?;
                terrain.add_goal(goal)?;
            }
        }
    }

    Ok(terrain)
}

fn parse_start(line: usize, text: &str, side: u32) -> Result<(Coordinate, Direction)> {
    let mut fields = text.split_whitespace();
    let case = fields
        .next()
        .ok_or_else(|| Error::parse(line, "missing start case"))?;
    let start = parse_case(line, case, side)?;

    let symbol = fields
        .next()
        .ok_or_else(|| Error::parse(line, "missing start direction"))?;
    let mut chars = symbol.chars();
    let direction = match (chars.next(), chars.next()) {
        (Some(symbol), None) => Direction::from_symbol(symbol),
        _ => None,
    }
    .ok_or_else(|| Error::parse(line, format!("unknown direction '{symbol}'")))?;

    if fields.next().is_some() {
        return Err(Error::parse(line, "unexpected text after start direction"));
    }
    Ok((start, direction))
}

fn parse_case(line: usize, text: &str, side: u32) -> Result<Coordinate> {
    let case = parse_number(line, text)?;
    Coordinate::from_case(case, side)
        .map_err(|_| Error::parse(line, format!("case {case} is outside a terrain of side {side}")))
}

fn parse_number(line: usize, text: &str) -> Result<u32> {
    let text = text.trim();
    text.parse()
        .map_err(|_| Error::parse(line, format!("expected a number, found '{text}'")))
}
