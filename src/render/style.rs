// CSS emission for rendered regions.
//
// Stretch regions produce one rule per cell (background sized to the whole
// rectangle, positioned by the cell's sample point). Cover regions produce
// one absolutely positioned container rule per region.

use std::fmt;
use crate::projection::{Projection, Region, background_size};
use super::layout::{GridLayout, SponsorLayout};

#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub selector: String,
    pub declarations: Vec<(&'static str, String)>,
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.selector)?;
        for (prop, value) in &self.declarations {
            write!(f, " {}: {};", prop, value)?;
        }
        write!(f, " }}")
    }
}

impl StyleRule {
    pub fn get(&self, prop: &str) -> Option<&str> {
        self.declarations.iter().find(|(p, _)| *p == prop).map(|(_, v)| v.as_str())
    }
}

/// At most two decimals, trailing zeros dropped: 33.333 -> "33.33%", 50.0 -> "50%".
pub fn percent(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    format!("{}%", s)
}

/// Double-quoted CSS string with quotes, backslashes and line breaks escaped.
pub fn css_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('"');
    for ch in raw.chars() {
        match ch {
            '"' | '\\' | '\'' => {
                out.push('\\');
                out.push(ch);
            }
            '\n' => out.push_str("\\a "),
            '\r' => out.push_str("\\d "),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

pub fn region_rules(sponsor: &SponsorLayout, region_idx: usize, region: &Region) -> Vec<StyleRule> {
    let image = format!("url({})", css_string(&sponsor.image));
    match &region.projection {
        Projection::Stretch(p) => {
            let (w, h) = background_size(&region.rect);
            let size = format!("{} {}", percent(w), percent(h));
            p.samples.iter().map(|s| StyleRule {
                selector: format!(".pixel-block[data-index=\"{}\"]", s.index),
                declarations: vec![
                    ("background-image", image.clone()),
                    ("background-size", size.clone()),
                    ("background-position", format!("{} {}", percent(s.x_percent), percent(s.y_percent))),
                    ("background-repeat", "no-repeat".to_string()),
                ],
            }).collect()
        }
        Projection::Cover(p) => {
            let c = p.container;
            vec![StyleRule {
                selector: format!(".sponsor-tile[data-sponsor={}][data-region=\"{}\"]", css_string(&sponsor.name), region_idx),
                declarations: vec![
                    ("position", "absolute".to_string()),
                    ("left", percent(c.left)),
                    ("top", percent(c.top)),
                    ("width", percent(c.width)),
                    ("height", percent(c.height)),
                    ("background-image", image),
                    ("background-size", "cover".to_string()),
                    ("background-position", "center".to_string()),
                ],
            }]
        }
    }
}

pub fn sponsor_rules(sponsor: &SponsorLayout) -> Vec<StyleRule> {
    sponsor.regions.iter()
        .enumerate()
        .flat_map(|(i, r)| region_rules(sponsor, i, r))
        .collect()
}

pub fn stylesheet(layout: &GridLayout) -> String {
    let mut out = String::new();
    for sponsor in &layout.sponsors {
        let note = format!("{} -> {}", sponsor.name, sponsor.href).replace("*/", "* /");
        out.push_str(&format!("/* {} */\n", note));
        for rule in sponsor_rules(sponsor) {
            out.push_str(&rule.to_string());
            out.push('\n');
        }
    }
    out
}
