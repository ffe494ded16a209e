//! Reference lists shipped alongside the tenant configuration.

use serde::{Deserialize, Serialize};

use crate::components::deal_pipeline::DealStage;

/// Supplementary data the host shell may use for pickers and legends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomData {
    pub investment_stages: Vec<String>,
    pub industries: Vec<String>,
    pub performance_metrics: Vec<String>,
    pub impact_metrics: Vec<String>,
}

impl CustomData {
    /// Reference data for Bridges Fund Management
    pub fn bridges() -> Self {
        Self {
            investment_stages: DealStage::ALL.iter().map(|s| s.to_string()).collect(),
            industries: strings(&[
                "Energy Transition",
                "Circular Economy",
                "Decarbonizing Built Environment",
                "Sustainable Tourism",
            ]),
            performance_metrics: strings(&[
                "Revenue Growth",
                "Profit Margin",
                "ESG Score",
                "Jobs Created",
            ]),
            impact_metrics: strings(&[
                "CO2 Emissions Reduced",
                "Jobs Created",
                "Waste Diverted from Landfills",
                "Clean Energy Generated",
            ]),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stages_follow_pipeline_order() {
        let data = CustomData::bridges();
        assert_eq!(
            data.investment_stages,
            vec!["Initial Contact", "Proposal", "Negotiation", "Due Diligence", "Closed"]
        );
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(CustomData::bridges()).unwrap();
        assert!(json.get("investmentStages").is_some());
        assert!(json.get("performanceMetrics").is_some());
    }
}
