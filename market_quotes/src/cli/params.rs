use std::collections::HashSet;

/// Parses a comma-separated symbol list, uppercasing and de-duplicating while
/// preserving order. Blank entries are skipped.
pub fn parse_symbols(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(',')
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbols() {
        assert_eq!(parse_symbols("AAPL,MSFT"), vec!["AAPL", "MSFT"]);
        assert_eq!(parse_symbols(" aapl , ,msft,AAPL"), vec!["AAPL", "MSFT"]);
        assert!(parse_symbols(" , ").is_empty());
    }
}
