use log::warn;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Serialize, Deserialize};
use crate::core::{CellIndex, GridError, Result, cell_from_raw};
use super::sponsors::GridConfig;

/// What to do when two sponsors claim the same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapPolicy {
    /// The sponsor listed later owns the shared cell.
    LastWriterWins,
    #[default]
    Reject,
}

/// Check indices are on the grid, sponsor names are unique and, under
/// `OverlapPolicy::Reject`, that no cell is claimed twice.
pub fn validate(config: &GridConfig) -> Result<()> {
    let mut names: FxHashSet<&str> = FxHashSet::default();
    let mut claimed: FxHashMap<CellIndex, &str> = FxHashMap::default();

    for sponsor in &config.sponsors {
        if !names.insert(sponsor.name.as_str()) {
            return Err(GridError::DuplicateSponsor(sponsor.name.clone()));
        }
        for &raw in &sponsor.blocks {
            let Some(index) = cell_from_raw(raw) else {
                return Err(GridError::IndexOutOfRange { sponsor: sponsor.name.clone(), index: raw });
            };
            if let Some(&first) = claimed.get(&index) {
                if first == sponsor.name { continue; }
                match config.overlap {
                    OverlapPolicy::Reject => {
                        return Err(GridError::Overlap {
                            index,
                            first: first.to_string(),
                            second: sponsor.name.clone(),
                        });
                    }
                    OverlapPolicy::LastWriterWins => {
                        warn!("cell {} claimed by '{}' and '{}'; '{}' wins", index, first, sponsor.name, sponsor.name);
                    }
                }
            }
            claimed.insert(index, sponsor.name.as_str());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SponsorConfig;

    fn two(a: Vec<i64>, b: Vec<i64>) -> GridConfig {
        GridConfig::new(vec![
            SponsorConfig::new("a", "a.png", None, a),
            SponsorConfig::new("b", "b.png", None, b),
        ])
    }

    #[test]
    fn demo_is_valid() {
        assert_eq!(validate(&GridConfig::demo()), Ok(()));
    }

    #[test]
    fn out_of_range_rejected() {
        let cfg = two(vec![1, 2], vec![10_000]);
        assert_eq!(
            validate(&cfg),
            Err(GridError::IndexOutOfRange { sponsor: "b".into(), index: 10_000 })
        );
    }

    #[test]
    fn wide_and_negative_block_numbers_from_json() {
        let cfg = GridConfig::from_json_str(r#"{ "sponsors": { "a": { "src": "a.png", "blocks": [70000] } } }"#).unwrap();
        assert_eq!(
            validate(&cfg),
            Err(GridError::IndexOutOfRange { sponsor: "a".into(), index: 70_000 })
        );

        let cfg = GridConfig::from_json_str(r#"{ "sponsors": { "b": { "src": "b.png", "blocks": [3, -1] } } }"#).unwrap();
        assert_eq!(
            validate(&cfg),
            Err(GridError::IndexOutOfRange { sponsor: "b".into(), index: -1 })
        );
    }

    #[test]
    fn overlap_rejected_by_default() {
        let cfg = two(vec![1, 2], vec![2, 3]);
        assert_eq!(
            validate(&cfg),
            Err(GridError::Overlap { index: 2, first: "a".into(), second: "b".into() })
        );
    }

    #[test_log::test]
    fn overlap_allowed_last_writer_wins() {
        let cfg = two(vec![1, 2], vec![2, 3]).with_overlap(OverlapPolicy::LastWriterWins);
        assert_eq!(validate(&cfg), Ok(()));
    }

    #[test]
    fn repeated_index_within_claim_is_fine() {
        let cfg = two(vec![1, 1, 2], vec![3]);
        assert_eq!(validate(&cfg), Ok(()));
    }

    #[test]
    fn duplicate_names_rejected() {
        let cfg = GridConfig::new(vec![
            SponsorConfig::new("a", "a.png", None, vec![1]),
            SponsorConfig::new("a", "b.png", None, vec![2]),
        ]);
        assert_eq!(validate(&cfg), Err(GridError::DuplicateSponsor("a".into())));
    }

    #[test]
    fn policy_names() {
        let p: OverlapPolicy = serde_json::from_str("\"last-writer-wins\"").unwrap();
        assert_eq!(p, OverlapPolicy::LastWriterWins);
    }
}
