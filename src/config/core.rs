use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::charts::ChartConfig;
use super::color::HexColor;

/// Root configuration record for a tenant dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Window / header title
    pub title: String,

    /// Tenant company name
    pub company_name: String,

    /// Path to the tenant logo
    pub logo: String,

    pub primary_color: HexColor,

    pub secondary_color: HexColor,

    /// Signed-in user shown in the header
    pub user_name: String,

    /// Feature flags
    #[serde(default)]
    pub features: BTreeMap<String, bool>,

    /// Navigation tabs and shared dashboard charts
    pub dashboard: DashboardSection,

    /// Analytics charts consumed by custom components
    #[serde(default)]
    pub analytics: AnalyticsSection,

    #[serde(default)]
    pub clients: Vec<Client>,
}

impl AppConfig {
    /// Look up a tab descriptor by identifier
    pub fn tab(&self, id: &str) -> Option<&TabConfig> {
        self.dashboard.tabs.iter().find(|tab| tab.id == id)
    }

    /// Position of a tab in navigation order
    pub fn tab_index(&self, id: &str) -> Option<usize> {
        self.dashboard.tabs.iter().position(|tab| tab.id == id)
    }

    /// Whether a feature flag is set; unknown flags are off
    pub fn feature_enabled(&self, name: &str) -> bool {
        self.features.get(name).copied().unwrap_or(false)
    }

    /// Every chart descriptor with its section, in stable order
    pub fn all_charts(&self) -> impl Iterator<Item = (ChartSection, &str, &ChartConfig)> {
        let dashboard = self
            .dashboard
            .charts
            .iter()
            .map(|(name, chart)| (ChartSection::Dashboard, name.as_str(), chart));
        let analytics = self
            .analytics
            .charts
            .iter()
            .map(|(name, chart)| (ChartSection::Analytics, name.as_str(), chart));
        dashboard.chain(analytics)
    }

    /// Look up a chart descriptor in one section
    pub fn chart(&self, section: ChartSection, name: &str) -> Option<&ChartConfig> {
        match section {
            ChartSection::Dashboard => self.dashboard.charts.get(name),
            ChartSection::Analytics => self.analytics.charts.get(name),
        }
    }
}

/// Navigation tabs plus charts shared by the host shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSection {
    pub tabs: Vec<TabConfig>,

    #[serde(default)]
    pub charts: BTreeMap<String, ChartConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSection {
    #[serde(default)]
    pub charts: BTreeMap<String, ChartConfig>,
}

/// Which section of the configuration a chart lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSection {
    Dashboard,
    Analytics,
}

impl fmt::Display for ChartSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartSection::Dashboard => f.write_str("dashboard"),
            ChartSection::Analytics => f.write_str("analytics"),
        }
    }
}

/// A navigation entry pairing a dashboard view with display metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabConfig {
    pub id: String,
    pub label: String,
    pub description: String,
    pub icon: TabIcon,
}

/// Icon references understood by the host shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabIcon {
    Briefcase,
    BarChart2,
    FileText,
    Phone,
    Users,
}

impl TabIcon {
    /// Terminal glyph for the icon
    pub fn glyph(self) -> &'static str {
        match self {
            TabIcon::Briefcase => "▣",
            TabIcon::BarChart2 => "▥",
            TabIcon::FileText => "▤",
            TabIcon::Phone => "☏",
            TabIcon::Users => "☺",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub industry: String,
}
