//! # Note Selectors
//!
//! Parsing of user-typed note references. This is boundary code: the store only
//! ever sees well-formed [`NoteId`]s, and text that is not one is rejected here as
//! [`NotesError::InvalidInput`].
//!
//! Accepted forms:
//! - a single id: `3`
//! - an inclusive range: `2-5` (expands to 2, 3, 4, 5)
//! - the keyword `all`
//!
//! Ids are parsed as signed integers. `0` or `-2` parse fine and then resolve to
//! "not found" in the store, which is where the range check belongs.

use crate::error::{NotesError, Result};
use crate::model::NoteId;
use std::str::FromStr;

/// Longest range a single argument may expand to.
const MAX_RANGE_LEN: NoteId = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteSelector {
    All,
    Id(NoteId),
}

impl FromStr for NoteSelector {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(NoteSelector::All);
        }
        s.parse::<NoteId>()
            .map(NoteSelector::Id)
            .map_err(|_| format!("Invalid note id: {}", s))
    }
}

/// Parses a single id for commands that act on exactly one note.
pub fn parse_id(s: &str) -> Result<NoteId> {
    match NoteSelector::from_str(s).map_err(NotesError::InvalidInput)? {
        NoteSelector::Id(id) => Ok(id),
        NoteSelector::All => Err(NotesError::InvalidInput(
            "'all' is not accepted here, give a single note id".to_string(),
        )),
    }
}

/// Parses a single input that may be an id, a range or `all`.
///
/// Range rules:
/// - Start must be <= end (`3-3` is valid, `3-2` is an error)
/// - A leading `-` is a sign, not a range separator
/// - Whether the ids exist is decided later by the store
pub fn parse_id_or_range(s: &str) -> std::result::Result<Vec<NoteSelector>, String> {
    let s = s.trim();
    let separator = s
        .char_indices()
        .skip(1)
        .find(|(_, c)| *c == '-')
        .map(|(i, _)| i);
    if let Some(dash_pos) = separator {
        let start = parse_bound(&s[..dash_pos])?;
        let end = parse_bound(&s[dash_pos + 1..])?;
        return expand_range(start, end);
    }

    NoteSelector::from_str(s).map(|sel| vec![sel])
}

/// Parses every input and flattens the result. `all` swallows everything else.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<NoteSelector>> {
    let mut selectors = Vec::new();
    for input in inputs {
        let parsed = parse_id_or_range(input.as_ref()).map_err(NotesError::InvalidInput)?;
        selectors.extend(parsed);
    }
    if selectors.is_empty() {
        return Err(NotesError::InvalidInput("No note ids given".to_string()));
    }
    if selectors.contains(&NoteSelector::All) {
        return Ok(vec![NoteSelector::All]);
    }
    Ok(selectors)
}

fn parse_bound(s: &str) -> std::result::Result<NoteId, String> {
    s.parse::<NoteId>()
        .map_err(|_| format!("Invalid range bound: {:?}", s))
}

fn expand_range(start: NoteId, end: NoteId) -> std::result::Result<Vec<NoteSelector>, String> {
    if start > end {
        return Err(format!(
            "Invalid range: start ({}) must be <= end ({})",
            start, end
        ));
    }
    if end.checked_sub(start).map_or(true, |span| span >= MAX_RANGE_LEN) {
        return Err(format!(
            "Invalid range: {}-{} spans more than {} notes",
            start, end, MAX_RANGE_LEN
        ));
    }
    Ok((start..=end).map(NoteSelector::Id).collect())
}
