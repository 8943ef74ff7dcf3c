use anyhow::{Context, Result};

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse `--seeds`; decimal or `0x`-prefixed hex.
pub fn parse_seeds(raw: &str) -> Result<Vec<u64>> {
    split_csv(raw)
        .iter()
        .map(|token| {
            let parsed = token.strip_prefix("0x").map_or_else(
                || token.parse::<u64>(),
                |hex| u64::from_str_radix(hex, 16),
            );
            parsed.with_context(|| format!("invalid seed '{token}'"))
        })
        .collect()
}

/// Seed for one iteration of a sweep, so failures can be replayed alone.
pub fn iteration_seed(seed: u64, iteration: usize) -> u64 {
    seed.wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(u64::try_from(iteration).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" range, ,selection,  query ");
        assert_eq!(parts, vec!["range", "selection", "query"]);
    }

    #[test]
    fn seeds_accept_decimal_and_hex() {
        assert_eq!(parse_seeds("1, 0x10").expect("seeds"), vec![1, 16]);
        assert!(parse_seeds("1,nope").is_err());
    }

    #[test]
    fn iteration_seeds_differ() {
        assert_ne!(iteration_seed(7, 0), iteration_seed(7, 1));
        assert_eq!(iteration_seed(7, 3), iteration_seed(7, 3));
    }
}
