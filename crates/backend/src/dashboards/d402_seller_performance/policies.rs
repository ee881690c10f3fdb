use contracts::dashboards::d402_seller_performance::{Product, PurchaseItem};

use super::stat::SellerStat;

/// Выручка по строке чека
pub type RevenueFn = fn(&PurchaseItem, &Product) -> f64;

/// Бонус продавца: (место в рейтинге с 0, всего продавцов, статистика)
pub type BonusFn = fn(usize, usize, &SellerStat) -> f64;

/// Цена продажи × количество × (1 − скидка%). Карточка товара не используется.
pub fn calculate_simple_revenue(item: &PurchaseItem, _product: &Product) -> f64 {
    item.sale_price * f64::from(item.quantity) * (1.0 - item.discount / 100.0)
}

/// Бонус от прибыли по месту в рейтинге.
///
/// Arms are checked in order and the first match wins: 1st place 15%,
/// 2nd and 3rd 10%, last place 0%, everyone else 5%. With three sellers
/// the last one is still 3rd and gets 10%.
pub fn calculate_bonus_by_profit(index: usize, total: usize, seller: &SellerStat) -> f64 {
    let coefficient = match index {
        0 => 0.15,
        1 | 2 => 0.10,
        i if i + 1 == total => 0.0,
        _ => 0.05,
    };

    seller.profit * coefficient
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d402_seller_performance::Seller;

    fn item(sale_price: f64, quantity: u32, discount: f64) -> PurchaseItem {
        PurchaseItem {
            sku: "SKU_001".to_string(),
            sale_price,
            quantity,
            discount,
        }
    }

    fn product(purchase_price: f64) -> Product {
        Product {
            sku: "SKU_001".to_string(),
            purchase_price,
            name: None,
            category: None,
            sale_price: None,
        }
    }

    fn stat_with_profit(profit: f64) -> SellerStat {
        let mut stat = SellerStat::new(&Seller {
            id: "seller_1".to_string(),
            first_name: "Ivan".to_string(),
            last_name: "Ivanov".to_string(),
            start_date: None,
            position: None,
        });
        stat.profit = profit;
        stat
    }

    #[test]
    fn test_simple_revenue_applies_percent_discount() {
        assert_eq!(calculate_simple_revenue(&item(100.0, 3, 10.0), &product(1.0)), 270.0);
        assert_eq!(calculate_simple_revenue(&item(50.0, 2, 0.0), &product(30.0)), 100.0);
        assert_eq!(calculate_simple_revenue(&item(50.0, 2, 100.0), &product(30.0)), 0.0);
    }

    #[test]
    fn test_simple_revenue_ignores_product() {
        let line = item(20.0, 4, 25.0);
        assert_eq!(
            calculate_simple_revenue(&line, &product(1.0)),
            calculate_simple_revenue(&line, &product(1000.0))
        );
    }

    #[test]
    fn test_bonus_tiers_for_five_sellers() {
        let stat = stat_with_profit(1000.0);
        let bonuses: Vec<f64> = (0..5)
            .map(|rank| calculate_bonus_by_profit(rank, 5, &stat))
            .collect();
        assert_eq!(bonuses, vec![150.0, 100.0, 100.0, 50.0, 0.0]);
    }

    #[test]
    fn test_bonus_first_match_wins_for_small_teams() {
        let stat = stat_with_profit(1000.0);
        // rank 2 of 3 is also last place, the "2nd/3rd" arm comes first
        assert_eq!(calculate_bonus_by_profit(1, 3, &stat), 100.0);
        assert_eq!(calculate_bonus_by_profit(2, 3, &stat), 100.0);
        assert_eq!(calculate_bonus_by_profit(1, 2, &stat), 100.0);
        assert_eq!(calculate_bonus_by_profit(0, 1, &stat), 150.0);
        assert_eq!(calculate_bonus_by_profit(3, 4, &stat), 0.0);
    }

    #[test]
    fn test_bonus_on_negative_profit_keeps_sign() {
        let stat = stat_with_profit(-200.0);
        assert_eq!(calculate_bonus_by_profit(0, 5, &stat), -30.0);
    }
}
