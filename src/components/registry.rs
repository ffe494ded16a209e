use std::collections::BTreeMap;

use super::{
    DashboardComponent, DealPipelineComponent, ImpactMetricsComponent,
    PortfolioPerformanceComponent,
};

/// Maps tab identifiers to the components rendered under them
#[derive(Default)]
pub struct ComponentRegistry {
    components: BTreeMap<String, Box<dyn DashboardComponent>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the three Bridges Fund Management views
    pub fn bridges() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(DealPipelineComponent::new()));
        registry.register(Box::new(PortfolioPerformanceComponent::new()));
        registry.register(Box::new(ImpactMetricsComponent::new()));
        registry
    }

    /// Register a component under its own id, replacing any previous entry
    pub fn register(&mut self, component: Box<dyn DashboardComponent>) {
        self.insert(component.id(), component);
    }

    /// Register a component under an explicit tab id
    pub fn insert(&mut self, tab_id: impl Into<String>, component: Box<dyn DashboardComponent>) {
        let tab_id = tab_id.into();
        if self.components.contains_key(&tab_id) {
            tracing::debug!(tab = %tab_id, "replacing registered component");
        }
        self.components.insert(tab_id, component);
    }

    pub fn get(&self, tab_id: &str) -> Option<&dyn DashboardComponent> {
        self.components.get(tab_id).map(|c| c.as_ref())
    }

    pub fn get_mut(&mut self, tab_id: &str) -> Option<&mut (dyn DashboardComponent + 'static)> {
        self.components.get_mut(tab_id).map(|c| c.as_mut())
    }

    pub fn contains(&self, tab_id: &str) -> bool {
        self.components.contains_key(tab_id)
    }

    /// Registered tab ids in sorted order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// Registered components with their tab ids
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn DashboardComponent)> {
        self.components
            .iter()
            .map(|(id, component)| (id.as_str(), component.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridges_registry_ids() {
        let registry = ComponentRegistry::bridges();
        let ids: Vec<_> = registry.ids().collect();
        assert_eq!(ids, vec!["dealPipeline", "impactMetrics", "portfolioPerformance"]);
    }

    #[test]
    fn test_insert_under_alias() {
        let mut registry = ComponentRegistry::new();
        registry.insert("deals", Box::new(DealPipelineComponent::new()));

        assert!(registry.contains("deals"));
        assert!(!registry.contains("dealPipeline"));
        assert_eq!(registry.get("deals").map(|c| c.title()), Some("Deal Pipeline"));
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = ComponentRegistry::bridges();
        registry.register(Box::new(ImpactMetricsComponent::new()));
        assert_eq!(registry.len(), 3);
    }
}
