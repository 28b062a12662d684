use std::fmt;
use std::path::Path;
use anyhow::Context;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use crate::core::{CellIndex, cell_from_raw};
use crate::projection::FitMode;
use super::validate::OverlapPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SponsorConfig {
    #[serde(skip)]
    pub name: String,
    #[serde(rename = "src", alias = "image")]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Block numbers as written in the config; `validate` checks they are on the grid.
    #[serde(default)]
    pub blocks: Vec<i64>,
}

impl SponsorConfig {
    pub fn new(name: &str, image: &str, url: Option<&str>, blocks: Vec<i64>) -> Self {
        Self {
            name: name.to_string(),
            image: image.to_string(),
            url: url.map(str::to_string),
            blocks,
        }
    }

    /// Claimed cells that lie on the grid, in config order.
    pub fn cells(&self) -> Vec<CellIndex> {
        self.blocks.iter().filter_map(|&b| cell_from_raw(b)).collect()
    }

    /// Link target for the sponsor's tiles; `#` when no URL is configured.
    pub fn href(&self) -> &str {
        self.url.as_deref().filter(|u| !u.is_empty()).unwrap_or("#")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct GridConfig {
    #[serde(deserialize_with = "sponsors_in_order")]
    pub sponsors: Vec<SponsorConfig>,
    #[serde(default)]
    pub mode: FitMode,
    #[serde(default)]
    pub overlap: OverlapPolicy,
}

impl GridConfig {
    pub fn new(sponsors: Vec<SponsorConfig>) -> Self {
        Self { sponsors, ..Default::default() }
    }

    pub fn with_mode(mut self, mode: FitMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_overlap(mut self, overlap: OverlapPolicy) -> Self {
        self.overlap = overlap;
        self
    }

    pub fn from_json_str(content: &str) -> anyhow::Result<Self> {
        let config: GridConfig = serde_json::from_str(content).context("invalid grid config JSON")?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        Self::from_json_str(&content).with_context(|| format!("in {}", path.display()))
    }

    pub fn sponsor(&self, name: &str) -> Option<&SponsorConfig> {
        self.sponsors.iter().find(|s| s.name == name)
    }

    /// The four sponsors the site launched with.
    pub fn demo() -> Self {
        Self::new(vec![
            SponsorConfig::new(
                "sunbula",
                "images/entities/sunbula.jpg",
                Some("https://www.instagram.com/sunbulapan/"),
                vec![0, 1, 2, 3, 100, 101, 102, 103],
            ),
            SponsorConfig::new(
                "yallahikes",
                "images/entities/yallahikes.jpg",
                Some("https://www.instagram.com/yallahikes/"),
                vec![1316, 1317, 1416, 1417],
            ),
            SponsorConfig::new(
                "datirs",
                "images/entities/datirs.jpg",
                Some("https://www.datirs.com/"),
                vec![
                    4152, 4153, 4154, 4155, 4156, 4157, 4158, 4252, 4253, 4254, 4255, 4256,
                    4257, 4258, 4352, 4353, 4354, 4356, 4357, 4358,
                ],
            ),
            SponsorConfig::new(
                "fireflylife",
                "images/entities/fireflylife.jpg",
                Some("https://www.fireflylife.org/"),
                vec![6330, 6331, 6332, 6430, 6431, 6432],
            ),
        ])
    }
}

// Sponsors are a JSON object keyed by name; keep document order.
fn sponsors_in_order<'de, D>(deserializer: D) -> Result<Vec<SponsorConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    struct SponsorMap;

    impl<'de> Visitor<'de> for SponsorMap {
        type Value = Vec<SponsorConfig>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a map of sponsor name to sponsor config")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, mut sponsor)) = map.next_entry::<String, SponsorConfig>()? {
                sponsor.name = name;
                out.push(sponsor);
            }
            Ok(out)
        }
    }

    deserializer.deserialize_map(SponsorMap)
}
