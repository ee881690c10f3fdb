use contracts::dashboards::d402_seller_performance::{Seller, SellerReportEntry, TopProduct};
use std::collections::HashMap;

use crate::shared::format::round_money;

/// Сколько позиций попадает в top_products
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Промежуточная статистика продавца на время одного расчета
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStat {
    pub id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u32,
    pub bonus: f64,
    /// (sku, quantity) in first-encounter order
    products_sold: Vec<(String, u64)>,
    product_positions: HashMap<String, usize>,
}

impl SellerStat {
    pub fn new(seller: &Seller) -> Self {
        Self {
            id: seller.id.clone(),
            name: format!("{} {}", seller.first_name, seller.last_name),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            bonus: 0.0,
            products_sold: Vec::new(),
            product_positions: HashMap::new(),
        }
    }

    /// Учесть чек: +1 продажа, итог чека в выручку
    pub fn record_sale(&mut self, total_amount: f64) {
        self.sales_count += 1;
        self.revenue += total_amount;
    }

    /// Учесть строку чека
    pub fn record_item(&mut self, sku: &str, quantity: u32, profit: f64) {
        self.profit += profit;

        match self.product_positions.get(sku) {
            Some(&pos) => self.products_sold[pos].1 += u64::from(quantity),
            None => {
                self.product_positions
                    .insert(sku.to_string(), self.products_sold.len());
                self.products_sold.push((sku.to_string(), u64::from(quantity)));
            }
        }
    }

    pub fn quantity_sold(&self, sku: &str) -> Option<u64> {
        self.product_positions
            .get(sku)
            .map(|&pos| self.products_sold[pos].1)
    }

    pub fn products_sold(&self) -> impl Iterator<Item = (&str, u64)> {
        self.products_sold
            .iter()
            .map(|(sku, quantity)| (sku.as_str(), *quantity))
    }

    /// Top `limit` SKUs by quantity, descending; ties keep encounter order
    pub fn top_products(&self, limit: usize) -> Vec<TopProduct> {
        let mut sorted: Vec<&(String, u64)> = self.products_sold.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));

        sorted
            .into_iter()
            .take(limit)
            .map(|(sku, quantity)| TopProduct {
                sku: sku.clone(),
                quantity: *quantity,
            })
            .collect()
    }

    pub fn into_report_entry(self) -> SellerReportEntry {
        let top_products = self.top_products(TOP_PRODUCTS_LIMIT);
        SellerReportEntry {
            seller_id: self.id,
            name: self.name,
            revenue: round_money(self.revenue),
            profit: round_money(self.profit),
            sales_count: self.sales_count,
            top_products,
            bonus: round_money(self.bonus),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seller() -> Seller {
        Seller {
            id: "seller_1".to_string(),
            first_name: "Alexey".to_string(),
            last_name: "Petrov".to_string(),
            start_date: None,
            position: None,
        }
    }

    #[test]
    fn test_new_stat_is_zeroed() {
        let stat = SellerStat::new(&seller());
        assert_eq!(stat.name, "Alexey Petrov");
        assert_eq!(stat.sales_count, 0);
        assert_eq!(stat.revenue, 0.0);
        assert_eq!(stat.products_sold().count(), 0);
    }

    #[test]
    fn test_record_item_merges_same_sku() {
        let mut stat = SellerStat::new(&seller());
        stat.record_item("A", 2, 10.0);
        stat.record_item("B", 1, 5.0);
        stat.record_item("A", 3, 15.0);

        assert_eq!(stat.quantity_sold("A"), Some(5));
        assert_eq!(stat.quantity_sold("B"), Some(1));
        assert_eq!(stat.quantity_sold("C"), None);
        assert_eq!(stat.profit, 30.0);
        let order: Vec<&str> = stat.products_sold().map(|(sku, _)| sku).collect();
        assert_eq!(order, vec!["A", "B"]);
    }

    #[test]
    fn test_top_products_sorted_by_quantity() {
        let mut stat = SellerStat::new(&seller());
        stat.record_item("A", 5, 0.0);
        stat.record_item("B", 9, 0.0);
        stat.record_item("C", 2, 0.0);

        let top = stat.top_products(TOP_PRODUCTS_LIMIT);
        let pairs: Vec<(&str, u64)> = top.iter().map(|p| (p.sku.as_str(), p.quantity)).collect();
        assert_eq!(pairs, vec![("B", 9), ("A", 5), ("C", 2)]);
    }

    #[test]
    fn test_top_products_ties_keep_encounter_order_and_limit() {
        let mut stat = SellerStat::new(&seller());
        for i in 0..12 {
            stat.record_item(&format!("SKU_{:03}", i), 1, 0.0);
        }
        stat.record_item("SKU_011", 1, 0.0);

        let top = stat.top_products(TOP_PRODUCTS_LIMIT);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].sku, "SKU_011");
        assert_eq!(top[0].quantity, 2);
        assert_eq!(top[1].sku, "SKU_000");
        assert_eq!(top[9].sku, "SKU_008");
    }

    #[test]
    fn test_into_report_entry_rounds_money() {
        let mut stat = SellerStat::new(&seller());
        stat.record_sale(10.005);
        stat.record_item("A", 1, 33.3333);
        stat.bonus = 4.999;

        let entry = stat.into_report_entry();
        assert_eq!(entry.seller_id, "seller_1");
        assert_eq!(entry.revenue, 10.01);
        assert_eq!(entry.profit, 33.33);
        assert_eq!(entry.bonus, 5.0);
        assert_eq!(entry.sales_count, 1);
    }
}
