//! Chart descriptors: chart kind, series keys, colors and literal rows.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::color::HexColor;

/// Kind of chart a descriptor asks the host to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
        };
        f.write_str(name)
    }
}

/// A single cell of a chart row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartValue {
    Number(f64),
    Text(String),
}

impl ChartValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ChartValue::Number(n) => Some(*n),
            ChartValue::Text(_) => None,
        }
    }
}

impl fmt::Display for ChartValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartValue::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            ChartValue::Number(n) => write!(f, "{}", n),
            ChartValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for ChartValue {
    fn from(value: f64) -> Self {
        ChartValue::Number(value)
    }
}

impl From<&str> for ChartValue {
    fn from(value: &str) -> Self {
        ChartValue::Text(value.to_string())
    }
}

/// One row of chart data, e.g. `{ year = "2021", growth = 25 }`
pub type ChartRow = BTreeMap<String, ChartValue>;

fn default_category_key() -> String {
    "name".to_string()
}

/// Declarative chart bundle consumed by a charting widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,

    /// Field used as x-axis label (bar/line) or slice label (pie)
    #[serde(default = "default_category_key")]
    pub category_key: String,

    /// Numeric series drawn from each row
    pub data_keys: Vec<String>,

    /// One color per entry of `data_keys`
    pub colors: Vec<HexColor>,

    /// Pie slice colors, cycled over rows
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub palette: Vec<HexColor>,

    pub data: Vec<ChartRow>,
}

impl ChartConfig {
    /// Row labels taken from the category field
    pub fn categories(&self) -> Vec<String> {
        self.data
            .iter()
            .map(|row| {
                row.get(&self.category_key)
                    .map(ToString::to_string)
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Numeric values of one series; rows missing the key yield `None`
    pub fn series(&self, key: &str) -> Vec<Option<f64>> {
        self.data
            .iter()
            .map(|row| row.get(key).and_then(ChartValue::as_f64))
            .collect()
    }

    /// Color for the series at `index`
    pub fn series_color(&self, index: usize) -> Option<HexColor> {
        self.colors.get(index).copied()
    }

    /// Color for the pie slice at `index`, falling back to the series color
    pub fn slice_color(&self, index: usize) -> Option<HexColor> {
        if self.palette.is_empty() {
            self.colors.first().copied()
        } else {
            self.palette.get(index % self.palette.len()).copied()
        }
    }

    /// Largest value across every series, used for axis bounds
    pub fn max_value(&self) -> f64 {
        self.data_keys
            .iter()
            .flat_map(|key| self.series(key))
            .flatten()
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn growth_chart() -> ChartConfig {
        ChartConfig {
            kind: ChartKind::Line,
            category_key: "year".into(),
            data_keys: vec!["growth".into()],
            colors: vec![HexColor::new(0x4F, 0x46, 0xE5)],
            palette: Vec::new(),
            data: vec![
                ChartRow::from([("year".into(), "2019".into()), ("growth".into(), 20.0.into())]),
                ChartRow::from([("year".into(), "2020".into()), ("growth".into(), 18.0.into())]),
            ],
        }
    }

    #[test]
    fn test_categories_and_series() {
        let chart = growth_chart();
        assert_eq!(chart.categories(), vec!["2019", "2020"]);
        assert_eq!(chart.series("growth"), vec![Some(20.0), Some(18.0)]);
        assert_eq!(chart.series("margin"), vec![None, None]);
        assert_eq!(chart.max_value(), 20.0);
    }

    #[test]
    fn test_slice_color_cycles_palette() {
        let mut chart = growth_chart();
        assert_eq!(chart.slice_color(3), chart.series_color(0));

        chart.palette = vec![HexColor::new(1, 1, 1), HexColor::new(2, 2, 2)];
        assert_eq!(chart.slice_color(0), Some(HexColor::new(1, 1, 1)));
        assert_eq!(chart.slice_color(3), Some(HexColor::new(2, 2, 2)));
    }

    #[test]
    fn test_chart_value_display() {
        assert_eq!(ChartValue::Number(25.0).to_string(), "25");
        assert_eq!(ChartValue::Number(2.5).to_string(), "2.5");
        assert_eq!(ChartValue::Text("2021".into()).to_string(), "2021");
    }

    #[test]
    fn test_deserializes_camel_case_keys() {
        let json = r##"{
            "type": "bar",
            "dataKeys": ["count"],
            "colors": ["#4F46E5"],
            "data": [{ "name": "Proposal", "count": 5 }]
        }"##;
        let chart: ChartConfig = serde_json::from_str(json).unwrap();
        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.category_key, "name");
        assert_eq!(chart.series("count"), vec![Some(5.0)]);
    }
}
