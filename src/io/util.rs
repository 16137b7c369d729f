use super::{Format, error::Error};
use std::str::FromStr;

/// Trimmed fixed-width field, empty when the line is too short.
pub fn column(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end.min(line.len()))
        .unwrap_or("")
        .trim()
}

/// Parses one whitespace-separated token, naming `label` on failure.
pub fn parse_field<T: FromStr>(
    token: Option<&str>,
    format: Format,
    line: usize,
    label: &str,
) -> Result<T, Error> {
    let token = token.ok_or_else(|| Error::parse(format, line, format!("missing {label}")))?;
    token
        .parse::<T>()
        .map_err(|_| Error::parse(format, line, format!("invalid {label} '{token}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_tolerates_short_lines() {
        let line = "ATOM      1  P    DA A   1";
        assert_eq!(column(line, 17, 20), "DA");
        assert_eq!(column(line, 21, 22), "A");
        assert_eq!(column(line, 22, 26), "1");
        assert_eq!(column(line, 30, 38), "");
    }

    #[test]
    fn parse_field_reports_label_and_token() {
        let mut tokens = "12 x".split_whitespace();
        let n: u64 = parse_field(tokens.next(), Format::Dump, 3, "atom id").unwrap();
        assert_eq!(n, 12);

        let err = parse_field::<f64>(tokens.next(), Format::Dump, 3, "x coordinate").unwrap_err();
        assert!(err.to_string().contains("invalid x coordinate 'x'"));

        let err = parse_field::<f64>(tokens.next(), Format::Dump, 3, "y coordinate").unwrap_err();
        assert!(err.to_string().contains("missing y coordinate"));
    }
}
