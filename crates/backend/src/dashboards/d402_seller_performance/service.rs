use contracts::dashboards::d402_seller_performance::{Product, SalesDataset, SellerReportEntry};
use std::cmp::Ordering;
use std::collections::HashMap;

use super::error::AnalysisError;
use super::policies::{self, BonusFn, RevenueFn};
use super::stat::SellerStat;
use crate::shared::logger::Diagnostics;

/// Переопределение политик расчета. Honored only as a complete pair.
#[derive(Clone, Copy, Default)]
pub struct AnalysisOptions {
    pub calculate_revenue: Option<RevenueFn>,
    pub calculate_bonus: Option<BonusFn>,
}

/// Расчет отчета по эффективности продавцов
pub struct SellerPerformanceAnalyzer {
    calculate_revenue: RevenueFn,
    calculate_bonus: BonusFn,
}

impl SellerPerformanceAnalyzer {
    /// Validates the override pair. A half-filled pair is reported through
    /// `diagnostics` and replaced by the default pair.
    pub fn new(options: &AnalysisOptions, diagnostics: &dyn Diagnostics) -> Self {
        match (options.calculate_revenue, options.calculate_bonus) {
            (Some(calculate_revenue), Some(calculate_bonus)) => Self {
                calculate_revenue,
                calculate_bonus,
            },
            (None, None) => Self::default(),
            (revenue, bonus) => {
                diagnostics.log(
                    "options",
                    &format!(
                        "Не удалось загрузить обязательные функции из options \
                         (calculateRevenue: {}, calculateBonus: {}), используются функции по умолчанию",
                        if revenue.is_some() { "ok" } else { "missing" },
                        if bonus.is_some() { "ok" } else { "missing" },
                    ),
                );
                Self::default()
            }
        }
    }

    pub fn analyze(&self, data: Option<&SalesDataset>) -> Result<Vec<SellerReportEntry>, AnalysisError> {
        let start_time = std::time::Instant::now();
        let data = validate(data)?;

        tracing::info!(
            "D402: analyzing {} sellers, {} products, {} purchase records",
            data.sellers.len(),
            data.products.len(),
            data.purchase_records.len()
        );

        // Статистика в порядке каталога; индекс id -> позиция, последний дубль выигрывает
        let mut stats: Vec<SellerStat> = data.sellers.iter().map(SellerStat::new).collect();
        let seller_index: HashMap<&str, usize> = data
            .sellers
            .iter()
            .enumerate()
            .map(|(pos, seller)| (seller.id.as_str(), pos))
            .collect();
        let product_index: HashMap<&str, &Product> = data
            .products
            .iter()
            .map(|product| (product.sku.as_str(), product))
            .collect();

        tracing::debug!(
            "D402: built indices ({} sellers, {} skus)",
            seller_index.len(),
            product_index.len()
        );

        for record in &data.purchase_records {
            let pos = *seller_index.get(record.seller_id.as_str()).ok_or_else(|| {
                AnalysisError::UnknownSeller {
                    seller_id: record.seller_id.clone(),
                }
            })?;
            let stat = &mut stats[pos];
            stat.record_sale(record.total_amount);

            for item in &record.items {
                let product = *product_index
                    .get(item.sku.as_str())
                    .ok_or_else(|| AnalysisError::UnknownProduct {
                        sku: item.sku.clone(),
                    })?;
                let cost = product.purchase_price * f64::from(item.quantity);
                let revenue = (self.calculate_revenue)(item, product);
                stat.record_item(&item.sku, item.quantity, revenue - cost);
            }
        }

        // sort_by is stable: equal profit keeps catalog order
        stats.sort_by(|a, b| b.profit.partial_cmp(&a.profit).unwrap_or(Ordering::Equal));

        let total = stats.len();
        for (index, stat) in stats.iter_mut().enumerate() {
            stat.bonus = (self.calculate_bonus)(index, total, stat);
        }

        let report: Vec<SellerReportEntry> = stats
            .into_iter()
            .map(SellerStat::into_report_entry)
            .collect();

        tracing::info!(
            "D402: report built for {} sellers in {:?}ms",
            report.len(),
            start_time.elapsed().as_millis()
        );

        Ok(report)
    }
}

impl Default for SellerPerformanceAnalyzer {
    fn default() -> Self {
        Self {
            calculate_revenue: policies::calculate_simple_revenue,
            calculate_bonus: policies::calculate_bonus_by_profit,
        }
    }
}

/// Один расчет с заданными опциями
pub fn analyze(
    data: Option<&SalesDataset>,
    options: &AnalysisOptions,
    diagnostics: &dyn Diagnostics,
) -> Result<Vec<SellerReportEntry>, AnalysisError> {
    SellerPerformanceAnalyzer::new(options, diagnostics).analyze(data)
}

fn validate(data: Option<&SalesDataset>) -> Result<&SalesDataset, AnalysisError> {
    let data = data.ok_or_else(|| AnalysisError::InvalidInput("data is missing".to_string()))?;

    if data.sellers.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "sellers must be a non-empty list".to_string(),
        ));
    }
    if data.purchase_records.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "purchase_records must be a non-empty list".to_string(),
        ));
    }

    Ok(data)
}
