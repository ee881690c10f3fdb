use contracts::dashboards::d402_seller_performance::{PolicyCatalogResponse, PolicySelection};
use std::collections::HashMap;

use super::policies::{self, BonusFn, RevenueFn};
use super::service::AnalysisOptions;

pub const SIMPLE_REVENUE: &str = "simple";
pub const BONUS_BY_PROFIT: &str = "by_profit";

/// Реестр политик расчета: имя -> функция.
///
/// JSON requests and config.toml can only name a policy, so names are
/// resolved here before the analyzer validates the pair.
pub struct PolicyRegistry {
    revenue: HashMap<String, RevenueFn>,
    bonus: HashMap<String, BonusFn>,
}

impl PolicyRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            revenue: HashMap::new(),
            bonus: HashMap::new(),
        };
        registry.register_revenue(SIMPLE_REVENUE, policies::calculate_simple_revenue);
        registry.register_bonus(BONUS_BY_PROFIT, policies::calculate_bonus_by_profit);
        registry
    }

    pub fn register_revenue(&mut self, name: &str, policy: RevenueFn) {
        self.revenue.insert(name.to_string(), policy);
    }

    pub fn register_bonus(&mut self, name: &str, policy: BonusFn) {
        self.bonus.insert(name.to_string(), policy);
    }

    /// Unknown names resolve to `None`; the analyzer treats that slot as missing.
    pub fn resolve(&self, selection: &PolicySelection) -> AnalysisOptions {
        let calculate_revenue = selection.calculate_revenue.as_deref().and_then(|name| {
            let policy = self.revenue.get(name).copied();
            if policy.is_none() {
                tracing::debug!("revenue policy '{}' is not registered", name);
            }
            policy
        });
        let calculate_bonus = selection.calculate_bonus.as_deref().and_then(|name| {
            let policy = self.bonus.get(name).copied();
            if policy.is_none() {
                tracing::debug!("bonus policy '{}' is not registered", name);
            }
            policy
        });

        AnalysisOptions {
            calculate_revenue,
            calculate_bonus,
        }
    }

    pub fn catalog(&self) -> PolicyCatalogResponse {
        let mut revenue_policies: Vec<String> = self.revenue.keys().cloned().collect();
        let mut bonus_policies: Vec<String> = self.bonus.keys().cloned().collect();
        revenue_policies.sort();
        bonus_policies.sort();

        PolicyCatalogResponse {
            revenue_policies,
            bonus_policies,
        }
    }
}

impl Default for PolicyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
