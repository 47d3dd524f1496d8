//! Header conversion.

use crate::models::{HarHeader, Header, Headers};
use crate::variables::VariableParser;

/// Converts request headers, substituting every value.
///
/// Disabled pairs are skipped. A header block given as text is split into
/// lines of `Name: Value`; blank lines are ignored and a line without a
/// colon yields a header with an empty value.
pub fn convert_headers(headers: Option<&Headers>, parser: &dyn VariableParser) -> Vec<HarHeader> {
    match headers {
        Some(Headers::List(list)) => list
            .iter()
            .filter(|header| !header.disabled)
            .map(|header| convert_pair(header, parser))
            .collect(),
        Some(Headers::Text(block)) => block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                let (name, value) = line.split_once(':').unwrap_or((line, ""));
                HarHeader::new(name.trim(), parser.parse(value.trim()))
            })
            .collect(),
        None => Vec::new(),
    }
}

fn convert_pair(header: &Header, parser: &dyn VariableParser) -> HarHeader {
    HarHeader {
        name: header.key.clone().unwrap_or_default(),
        value: parser.parse(header.value.as_deref().unwrap_or_default()),
        comment: header
            .description
            .as_ref()
            .map(|description| description.text().to_string()),
    }
}
