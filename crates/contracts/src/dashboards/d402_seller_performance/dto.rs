use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::logger::DiagnosticEntry;

// ---------------------------------------------------------------------------
// Input: reference data and purchase records
// ---------------------------------------------------------------------------

/// Карточка продавца
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// Карточка товара
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    /// Закупочная цена за единицу
    pub purchase_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Розничная цена по каталогу (в расчете не используется)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
}

/// Строка чека
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseItem {
    pub sku: String,
    /// Цена продажи за единицу
    pub sale_price: f64,
    pub quantity: u32,
    /// Скидка в процентах (0..100), не доля
    #[serde(default)]
    pub discount: f64,
}

/// Чек: одна продажа одного продавца
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub seller_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Итоговая сумма чека, идет в выручку продавца как есть
    pub total_amount: f64,
    #[serde(default)]
    pub items: Vec<PurchaseItem>,
}

/// Исходные данные для отчета.
///
/// Missing collections deserialize as empty; emptiness of `sellers` and
/// `purchase_records` is rejected by the analyzer, `products` is not checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesDataset {
    #[serde(default)]
    pub sellers: Vec<Seller>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub purchase_records: Vec<PurchaseRecord>,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: u64,
}

/// Строка итогового отчета по продавцу
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReportEntry {
    pub seller_id: String,
    /// "{first_name} {last_name}"
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u32,
    /// Up to 10 best-selling SKUs by quantity, descending
    pub top_products: Vec<TopProduct>,
    pub bonus: f64,
}

// ---------------------------------------------------------------------------
// API
// ---------------------------------------------------------------------------

/// Выбор политик расчета по именам.
///
/// Both names must resolve for the override to be honored; otherwise the
/// analyzer falls back to the default pair and reports a diagnostic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySelection {
    #[serde(rename = "calculateRevenue", default)]
    pub calculate_revenue: Option<String>,
    #[serde(rename = "calculateBonus", default)]
    pub calculate_bonus: Option<String>,
}

impl PolicySelection {
    pub fn is_empty(&self) -> bool {
        self.calculate_revenue.is_none() && self.calculate_bonus.is_none()
    }
}

/// POST /api/d402/seller_performance
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SellerPerformanceRequest {
    /// `null` or missing means "no data"
    #[serde(default)]
    pub data: Option<SalesDataset>,
    #[serde(default)]
    pub options: Option<PolicySelection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerPerformanceResponse {
    pub generated_at: DateTime<Utc>,
    /// Sellers ordered by profit, rank 0 first
    pub sellers: Vec<SellerReportEntry>,
    #[serde(default)]
    pub diagnostics: Vec<DiagnosticEntry>,
}

/// GET /api/d402/policies
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyCatalogResponse {
    pub revenue_policies: Vec<String>,
    pub bonus_policies: Vec<String>,
}
