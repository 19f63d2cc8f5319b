extern crate nom;

use nom::{
    bytes::complete::take_till, character::complete::char, multi::separated_list0, IResult,
};

use crate::error::{Error, Result};

/// Splits a raw comma-separated modifier field. Empty entries are kept
/// here so callers can see exactly what was written.
pub fn parse_modifiers(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list0(char(','), take_till(|c: char| c == ','))(input)
}

/// Modifier codes in recorded order with empty entries dropped.
pub fn split_modifiers(raw: &str) -> Result<Vec<String>> {
    let (rest, modifiers) =
        parse_modifiers(raw).map_err(|e| Error::invalid(format!("modifiers {raw:?}: {e}")))?;
    if !rest.is_empty() {
        return Err(Error::invalid(format!("unparsed modifiers: {rest:?}")));
    }

    Ok(modifiers
        .into_iter()
        .filter(|m| !m.is_empty())
        .map(String::from)
        .collect())
}
