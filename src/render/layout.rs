// Render pass: config -> per-sponsor regions.
//
// Runs once over a validated configuration. Each sponsor's claim is split
// into connected groups and every group is projected with the configured
// fit mode. Cell ownership is recorded in sponsor order, so under
// last-writer-wins a shared cell belongs to the later sponsor.

use log::{debug, info};
use serde::Serialize;
use crate::config::{GridConfig, SponsorConfig, validate};
use crate::core::{CellIndex, Result};
use crate::grid::{BlockStatus, Occupancy, partition};
use crate::projection::{FitMode, Region, project};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SponsorLayout {
    pub name: String,
    pub image: String,
    pub href: String,
    pub regions: Vec<Region>,
}

impl SponsorLayout {
    pub fn cell_count(&self) -> usize {
        self.regions.iter().map(|r| r.cells).sum()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GridLayout {
    pub mode: FitMode,
    pub sponsors: Vec<SponsorLayout>,
    #[serde(skip)]
    pub occupancy: Occupancy,
}

impl GridLayout {
    pub fn sponsor(&self, name: &str) -> Option<&SponsorLayout> {
        self.sponsors.iter().find(|s| s.name == name)
    }

    pub fn block_status(&self, index: CellIndex) -> BlockStatus {
        self.occupancy.status(index)
    }

    pub fn region_count(&self) -> usize {
        self.sponsors.iter().map(|s| s.regions.len()).sum()
    }
}

pub fn layout_sponsor(sponsor: &SponsorConfig, mode: FitMode) -> SponsorLayout {
    let regions: Vec<Region> = partition(&sponsor.cells())
        .iter()
        .map(|g| project(g, mode))
        .collect();
    debug!("{}: {} cells in {} region(s)", sponsor.name, sponsor.blocks.len(), regions.len());
    SponsorLayout {
        name: sponsor.name.clone(),
        image: sponsor.image.clone(),
        href: sponsor.href().to_string(),
        regions,
    }
}

pub fn render(config: &GridConfig) -> Result<GridLayout> {
    validate(config)?;

    let mut occupancy = Occupancy::new();
    let mut sponsors = Vec::with_capacity(config.sponsors.len());
    for sponsor in &config.sponsors {
        for (cell, prev) in occupancy.assign(&sponsor.name, &sponsor.cells()) {
            debug!("cell {} reassigned from '{}' to '{}'", cell, prev, sponsor.name);
        }
        sponsors.push(layout_sponsor(sponsor, config.mode));
    }

    let layout = GridLayout { mode: config.mode, sponsors, occupancy };
    info!(
        "rendered {} sponsor(s), {} region(s), {} cell(s) claimed ({} mode)",
        layout.sponsors.len(),
        layout.region_count(),
        layout.occupancy.claimed_count(),
        layout.mode,
    );
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OverlapPolicy;
    use crate::core::GridError;
    use crate::projection::Projection;

    #[test_log::test]
    fn demo_layout() {
        let layout = render(&GridConfig::demo()).unwrap();
        assert_eq!(layout.sponsors.len(), 4);
        assert_eq!(layout.region_count(), 4);

        let sunbula = layout.sponsor("sunbula").unwrap();
        let r = sunbula.regions[0].rect;
        assert_eq!((r.min_row, r.max_row, r.min_col, r.max_col), (0, 1, 0, 3));
        assert_eq!(sunbula.href, "https://www.instagram.com/sunbulapan/");

        // datirs has a hole at 4355 but stays one region
        let datirs = layout.sponsor("datirs").unwrap();
        assert_eq!(datirs.regions.len(), 1);
        assert_eq!(datirs.cell_count(), 20);
        assert_eq!((datirs.regions[0].rect.width, datirs.regions[0].rect.height), (7, 3));
        assert_eq!(layout.block_status(4355), BlockStatus::Available);
    }

    #[test]
    fn block_status_reports_owner() {
        let layout = render(&GridConfig::demo()).unwrap();
        assert_eq!(
            layout.block_status(6431),
            BlockStatus::Unavailable { sponsor: "fireflylife".into() }
        );
        assert_eq!(layout.occupancy.claimed_count(), 8 + 4 + 20 + 6);
    }

    #[test]
    fn disjoint_claim_gives_two_regions() {
        let cfg = GridConfig::new(vec![SponsorConfig::new(
            "split", "s.png", None, vec![0, 1, 100, 101, 50, 51, 150, 151],
        )]);
        let layout = render(&cfg).unwrap();
        let s = layout.sponsor("split").unwrap();
        assert_eq!(s.regions.len(), 2);
        assert_eq!(s.regions[1].rect.min_col, 50);
        assert_eq!(s.href, "#");
    }

    #[test]
    fn stretch_mode_carries_samples() {
        let layout = render(&GridConfig::demo().with_mode(FitMode::Stretch)).unwrap();
        let yh = layout.sponsor("yallahikes").unwrap();
        match &yh.regions[0].projection {
            Projection::Stretch(p) => assert_eq!(p.samples.len(), 4),
            other => panic!("expected stretch, got {:?}", other),
        }
    }

    #[test]
    fn off_grid_config_fails_render() {
        let cfg = GridConfig::from_json_str(r#"{ "sponsors": { "big": { "src": "b.png", "blocks": [0, 70000] } } }"#).unwrap();
        assert_eq!(
            render(&cfg).unwrap_err(),
            GridError::IndexOutOfRange { sponsor: "big".into(), index: 70_000 }
        );
    }

    #[test]
    fn empty_claim_has_no_regions() {
        let cfg = GridConfig::new(vec![SponsorConfig::new("none", "n.png", None, vec![])]);
        let layout = render(&cfg).unwrap();
        assert!(layout.sponsors[0].regions.is_empty());
    }

    #[test]
    fn overlap_policy_controls_render() {
        let sponsors = vec![
            SponsorConfig::new("a", "a.png", None, vec![1, 2]),
            SponsorConfig::new("b", "b.png", None, vec![2, 3]),
        ];
        let strict = GridConfig::new(sponsors.clone());
        assert!(matches!(render(&strict), Err(GridError::Overlap { index: 2, .. })));

        let lenient = GridConfig::new(sponsors).with_overlap(OverlapPolicy::LastWriterWins);
        let layout = render(&lenient).unwrap();
        assert_eq!(layout.occupancy.owner(2), Some("b"));
        assert_eq!(layout.sponsor("a").unwrap().cell_count(), 2);
    }
}
