//! Built-in tenant configuration.
//!
//! The Bridges Fund Management preset is what the dashboard shows when no
//! configuration file is found, and what `impact-dashboard init` writes out.
//!
//! # Example
//!
//! ```rust
//! use impact_dashboard::config::presets::bridges_config;
//!
//! let config = bridges_config();
//! assert_eq!(config.dashboard.tabs.len(), 3);
//! ```

use std::collections::BTreeMap;

use super::charts::{ChartConfig, ChartKind, ChartRow, ChartValue};
use super::color::HexColor;
use super::core::{AnalyticsSection, AppConfig, Client, DashboardSection, TabConfig, TabIcon};

pub const PRIMARY: HexColor = HexColor::new(0x4F, 0x46, 0xE5);
pub const SECONDARY: HexColor = HexColor::new(0x81, 0x8C, 0xF8);
const INDIGO_200: HexColor = HexColor::new(0xC7, 0xD2, 0xFE);
const INDIGO_100: HexColor = HexColor::new(0xE0, 0xE7, 0xFF);

/// Configuration for Bridges Fund Management.
pub fn bridges_config() -> AppConfig {
    AppConfig {
        title: "Bridges Fund Management - Impact Investing Dashboard".into(),
        company_name: "Bridges Fund Management".into(),
        logo: "/path/to/bridges-logo.png".into(),
        primary_color: PRIMARY,
        secondary_color: SECONDARY,
        user_name: "Emma Murray".into(),
        features: bridges_features(),
        dashboard: DashboardSection {
            tabs: bridges_tabs(),
            charts: BTreeMap::from([
                ("dealsByStage".to_string(), deals_by_stage()),
                ("investmentByIndustry".to_string(), investment_by_industry()),
            ]),
        },
        analytics: AnalyticsSection {
            charts: BTreeMap::from([
                ("revenueGrowth".to_string(), revenue_growth()),
                ("profitMargin".to_string(), profit_margin()),
            ]),
        },
        clients: vec![
            client("ecotech", "EcoTech Solutions", "Energy Transition"),
            client("circularware", "CircularWare", "Circular Economy"),
            client(
                "greenbuild",
                "GreenBuild Systems",
                "Decarbonizing Built Environment",
            ),
            client("sustainatour", "SustainaTour", "Sustainable Tourism"),
        ],
    }
}

fn bridges_tabs() -> Vec<TabConfig> {
    vec![
        TabConfig {
            id: "dealPipeline".into(),
            label: "Deal Pipeline".into(),
            description: "Track potential investments".into(),
            icon: TabIcon::Briefcase,
        },
        TabConfig {
            id: "portfolioPerformance".into(),
            label: "Portfolio Performance".into(),
            description: "Monitor existing investments".into(),
            icon: TabIcon::BarChart2,
        },
        TabConfig {
            id: "impactMetrics".into(),
            label: "Impact Metrics".into(),
            description: "Measure social and environmental impact".into(),
            icon: TabIcon::FileText,
        },
    ]
}

fn bridges_features() -> BTreeMap<String, bool> {
    [
        "dealTracking",
        "impactMeasurement",
        "portfolioAnalysis",
        "reporting",
        "dataVisualization",
    ]
    .into_iter()
    .map(|name| (name.to_string(), true))
    .collect()
}

fn deals_by_stage() -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Bar,
        category_key: "name".into(),
        data_keys: vec!["count".into()],
        colors: vec![PRIMARY],
        palette: Vec::new(),
        data: rows(
            "name",
            "count",
            &[
                ("Initial Contact", 10.0),
                ("Proposal", 5.0),
                ("Negotiation", 3.0),
                ("Due Diligence", 2.0),
                ("Closed", 1.0),
            ],
        ),
    }
}

fn investment_by_industry() -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Pie,
        category_key: "name".into(),
        data_keys: vec!["value".into()],
        colors: vec![PRIMARY],
        palette: vec![PRIMARY, SECONDARY, INDIGO_200, INDIGO_100],
        data: rows(
            "name",
            "value",
            &[
                ("Energy Transition", 40.0),
                ("Circular Economy", 30.0),
                ("Decarbonizing Built Environment", 20.0),
                ("Sustainable Tourism", 10.0),
            ],
        ),
    }
}

fn revenue_growth() -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Line,
        category_key: "year".into(),
        data_keys: vec!["growth".into()],
        colors: vec![PRIMARY],
        palette: Vec::new(),
        data: rows(
            "year",
            "growth",
            &[("2019", 20.0), ("2020", 18.0), ("2021", 25.0), ("2022", 30.0)],
        ),
    }
}

fn profit_margin() -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Bar,
        category_key: "year".into(),
        data_keys: vec!["margin".into()],
        colors: vec![SECONDARY],
        palette: Vec::new(),
        data: rows(
            "year",
            "margin",
            &[("2019", 15.0), ("2020", 14.0), ("2021", 17.0), ("2022", 19.0)],
        ),
    }
}

fn rows(category_key: &str, value_key: &str, points: &[(&str, f64)]) -> Vec<ChartRow> {
    points
        .iter()
        .map(|(label, value)| {
            ChartRow::from([
                (category_key.to_string(), ChartValue::from(*label)),
                (value_key.to_string(), ChartValue::Number(*value)),
            ])
        })
        .collect()
}

fn client(id: &str, name: &str, industry: &str) -> Client {
    Client {
        id: id.into(),
        name: name.into(),
        industry: industry.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_in_navigation_order() {
        let config = bridges_config();
        let ids: Vec<_> = config.dashboard.tabs.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["dealPipeline", "portfolioPerformance", "impactMetrics"]);
    }

    #[test]
    fn test_every_feature_enabled() {
        let config = bridges_config();
        assert_eq!(config.features.len(), 5);
        assert!(config.features.values().all(|enabled| *enabled));
    }

    #[test]
    fn test_analytics_series() {
        let config = bridges_config();
        let growth = &config.analytics.charts["revenueGrowth"];
        assert_eq!(growth.series("growth"), vec![Some(20.0), Some(18.0), Some(25.0), Some(30.0)]);

        let margin = &config.analytics.charts["profitMargin"];
        assert_eq!(margin.categories(), vec!["2019", "2020", "2021", "2022"]);
        assert_eq!(margin.colors, vec![SECONDARY]);
    }

    #[test]
    fn test_pie_palette_covers_every_slice() {
        let config = bridges_config();
        let pie = &config.dashboard.charts["investmentByIndustry"];
        assert_eq!(pie.palette.len(), pie.data.len());
        assert_eq!(pie.colors.len(), pie.data_keys.len());
    }
}
