//! Port list parsing.
//!
//! Two formats are accepted: an inclusive range (`"1-1000"`) or a comma
//! separated list (`"22,80,443"`).

use std::collections::HashSet;

use crate::error::InputError;

/// Lenient parser: malformed input degrades to an empty list.
///
/// Ranges are all-or-nothing. In a comma list, entries that are not ports in
/// `1..=65535` are skipped. Duplicates keep their first position.
pub fn parse_port_list(input: &str) -> Vec<u16> {
    let input = input.trim();

    if input.contains('-') {
        return parse_range(input).unwrap_or_default();
    }

    dedup(input.split(',').filter_map(parse_port))
}

/// Strict parser: any malformed entry rejects the whole input.
pub fn parse_ports_strict(input: &str) -> Result<Vec<u16>, InputError> {
    let trimmed = input.trim();
    let err = || InputError::Ports(input.to_string());

    let ports = if trimmed.contains('-') {
        parse_range(trimmed).ok_or_else(err)?
    } else {
        let parsed: Option<Vec<u16>> = trimmed.split(',').map(parse_port).collect();
        dedup(parsed.ok_or_else(err)?)
    };

    if ports.is_empty() {
        return Err(err());
    }
    Ok(ports)
}

fn parse_range(input: &str) -> Option<Vec<u16>> {
    let (start, end) = input.split_once('-')?;
    let start = parse_port(start)?;
    let end = parse_port(end)?;

    (start <= end).then(|| (start..=end).collect())
}

fn parse_port(s: &str) -> Option<u16> {
    s.trim().parse::<u16>().ok().filter(|port| *port > 0)
}

fn dedup(ports: impl IntoIterator<Item = u16>) -> Vec<u16> {
    let mut seen = HashSet::new();
    ports.into_iter().filter(|port| seen.insert(*port)).collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
