use serde::Serialize;
use crate::core::GRID_CELLS;
use crate::projection::Projection;
use super::layout::GridLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridStats {
    pub sponsors: usize,
    pub regions: usize,
    pub claimed_cells: usize,
    pub available_cells: usize,
}

impl GridStats {
    pub fn from_layout(layout: &GridLayout) -> Self {
        Self {
            sponsors: layout.sponsors.len(),
            regions: layout.region_count(),
            claimed_cells: layout.occupancy.claimed_count(),
            available_cells: layout.occupancy.available_count(),
        }
    }

    pub fn fill_ratio(&self) -> f64 {
        self.claimed_cells as f64 / GRID_CELLS as f64
    }
}

#[derive(Debug, Serialize)]
pub struct LayoutReport<'a> {
    pub stats: GridStats,
    pub layout: &'a GridLayout,
}

impl<'a> LayoutReport<'a> {
    pub fn new(layout: &'a GridLayout) -> Self {
        Self { stats: GridStats::from_layout(layout), layout }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn print_summary(&self) {
        let s = &self.stats;
        println!("=== Pixel Grid ({} mode) ===", self.layout.mode);
        println!("Sponsors: {} | Regions: {} | Claimed: {} | Available: {} ({:.2}% filled)",
            s.sponsors, s.regions, s.claimed_cells, s.available_cells, s.fill_ratio() * 100.0);
    }

    pub fn print_detail(&self) {
        self.print_summary();
        println!();
        for sponsor in &self.layout.sponsors {
            println!("  {} -> {} ({} cells)", sponsor.name, sponsor.href, sponsor.cell_count());
            for region in &sponsor.regions {
                let r = region.rect;
                let extra = match &region.projection {
                    Projection::Stretch(p) => format!("{} samples", p.samples.len()),
                    Projection::Cover(p) => format!(
                        "container left={} top={} {}x{}",
                        p.container.left, p.container.top, p.container.width, p.container.height
                    ),
                };
                println!("    rows {}-{} cols {}-{} ({}x{}, {} cells) {}",
                    r.min_row, r.max_row, r.min_col, r.max_col, r.width, r.height, region.cells, extra);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::render::render;

    #[test]
    fn demo_stats() {
        let layout = render(&GridConfig::demo()).unwrap();
        let stats = GridStats::from_layout(&layout);
        assert_eq!(stats, GridStats { sponsors: 4, regions: 4, claimed_cells: 38, available_cells: 9962 });
        assert!((stats.fill_ratio() - 0.0038).abs() < 1e-9);
    }

    #[test]
    fn json_report_shape() {
        let layout = render(&GridConfig::demo()).unwrap();
        let json = LayoutReport::new(&layout).to_json().unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["stats"]["sponsors"], 4);
        assert_eq!(v["layout"]["mode"], "cover");
        assert_eq!(v["layout"]["sponsors"][0]["name"], "sunbula");
        assert_eq!(v["layout"]["sponsors"][0]["regions"][0]["projection"]["container"]["width"], 4.0);
    }
}
