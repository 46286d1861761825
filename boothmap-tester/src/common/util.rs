use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse comma-separated seeds; decimal or `0x`-prefixed hex.
pub fn parse_seeds(s: &str) -> Result<Vec<u64>> {
    split_csv(s)
        .iter()
        .map(|token| {
            let parsed = match token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
            {
                Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
                None => token.replace('_', "").parse::<u64>(),
            };
            parsed.with_context(|| format!("invalid seed '{token}'"))
        })
        .collect()
}

/// RFC 3339 timestamp stamped on generated reports.
pub fn report_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" walkthrough, ,fuzz,  restore ");
        assert_eq!(parts, vec!["walkthrough", "fuzz", "restore"]);
    }

    #[test]
    fn seeds_accept_decimal_and_hex() {
        assert_eq!(
            parse_seeds("1337, 0xC0FFEE,1_000").unwrap(),
            vec![1337, 0x00C0_FFEE, 1000]
        );
        assert!(parse_seeds("12,nope").is_err());
        assert!(parse_seeds("").unwrap().is_empty());
    }

    #[test]
    fn timestamp_is_utc() {
        assert!(report_timestamp().ends_with('Z'));
    }
}
