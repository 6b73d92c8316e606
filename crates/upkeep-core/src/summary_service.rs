use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use upkeep_domain::{BelongsToCategory, Category, CategoryKind, Contract, Purchase};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractCategorySummary {
    pub id: Uuid,
    pub name: String,
    pub contract_count: usize,
    pub monthly_total: f64,
    pub yearly_total: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractSummary {
    pub total_contracts: usize,
    pub total_monthly_amount: f64,
    pub total_yearly_amount: f64,
    pub categories: Vec<ContractCategorySummary>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseCategorySummary {
    pub id: Uuid,
    pub name: String,
    pub purchase_count: usize,
    pub total_spent: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseSummary {
    pub total_purchases: usize,
    pub total_spent: f64,
    pub categories: Vec<PurchaseCategorySummary>,
}

/// Record count and summed amounts for one group of records.
#[derive(Debug, Clone, Copy)]
struct Tally<const N: usize> {
    count: usize,
    amounts: [f64; N],
}

impl<const N: usize> Default for Tally<N> {
    fn default() -> Self {
        Self {
            count: 0,
            amounts: [0.0; N],
        }
    }
}

impl<const N: usize> Tally<N> {
    fn add(&mut self, amounts: [f64; N]) {
        self.count += 1;
        for (total, amount) in self.amounts.iter_mut().zip(amounts) {
            *total += amount;
        }
    }
}

/// Groups records by category, returning per-category tallies and the overall tally.
fn tally_by_category<T, const N: usize>(
    records: &[T],
    amounts: impl Fn(&T) -> [f64; N],
) -> (HashMap<Uuid, Tally<N>>, Tally<N>)
where
    T: BelongsToCategory,
{
    let mut by_category: HashMap<Uuid, Tally<N>> = HashMap::new();
    let mut overall = Tally::default();
    for record in records {
        let values = amounts(record);
        by_category
            .entry(record.category_id())
            .or_default()
            .add(values);
        overall.add(values);
    }
    (by_category, overall)
}

pub struct SummaryService;

impl SummaryService {
    /// Contract counts and normalized costs, overall and per contracts category.
    ///
    /// Rows follow the order of `categories`; categories of another kind are
    /// skipped. Contracts filed under an unlisted category still count toward
    /// the overall totals.
    pub fn contracts(categories: &[Category], contracts: &[Contract]) -> ContractSummary {
        let (by_category, overall) = tally_by_category(contracts, |contract| {
            [contract.monthly_price(), contract.yearly_price()]
        });

        let categories = categories
            .iter()
            .filter(|category| category.kind == CategoryKind::Contracts)
            .map(|category| {
                let tally = by_category.get(&category.id).copied().unwrap_or_default();
                let [monthly, yearly] = tally.amounts;
                ContractCategorySummary {
                    id: category.id,
                    name: category.name.clone(),
                    contract_count: tally.count,
                    monthly_total: monthly,
                    yearly_total: yearly,
                }
            })
            .collect();

        let [total_monthly, total_yearly] = overall.amounts;
        ContractSummary {
            total_contracts: overall.count,
            total_monthly_amount: total_monthly,
            total_yearly_amount: total_yearly,
            categories,
        }
    }

    /// Purchase counts and spend, overall and per purchases category.
    pub fn purchases(categories: &[Category], purchases: &[Purchase]) -> PurchaseSummary {
        let (by_category, overall) =
            tally_by_category(purchases, |purchase| [purchase.price.unwrap_or(0.0)]);

        let categories = categories
            .iter()
            .filter(|category| category.kind == CategoryKind::Purchases)
            .map(|category| {
                let tally = by_category.get(&category.id).copied().unwrap_or_default();
                PurchaseCategorySummary {
                    id: category.id,
                    name: category.name.clone(),
                    purchase_count: tally.count,
                    total_spent: tally.amounts[0],
                }
            })
            .collect();

        PurchaseSummary {
            total_purchases: overall.count,
            total_spent: overall.amounts[0],
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use upkeep_domain::BillingInterval;

    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn contract_summary_normalizes_prices_per_category() {
        let media = Category::new("Media", CategoryKind::Contracts);
        let utilities = Category::new("Utilities", CategoryKind::Contracts);
        let gadgets = Category::new("Gadgets", CategoryKind::Purchases);
        let contracts = vec![
            Contract::new(media.id, "Streaming", start()).with_price(12.0, BillingInterval::Monthly),
            Contract::new(media.id, "News", start()).with_price(120.0, BillingInterval::Yearly),
            Contract::new(Uuid::new_v4(), "Orphan", start()).with_price(5.0, BillingInterval::Monthly),
        ];

        let summary = SummaryService::contracts(&[media.clone(), gadgets, utilities], &contracts);

        assert_eq!(summary.total_contracts, 3);
        assert_eq!(summary.total_monthly_amount, 27.0);
        assert_eq!(summary.total_yearly_amount, 324.0);
        assert_eq!(summary.categories.len(), 2);
        assert_eq!(summary.categories[0].id, media.id);
        assert_eq!(summary.categories[0].contract_count, 2);
        assert_eq!(summary.categories[0].monthly_total, 22.0);
        assert_eq!(summary.categories[0].yearly_total, 264.0);
        assert_eq!(summary.categories[1].name, "Utilities");
        assert_eq!(summary.categories[1].contract_count, 0);
    }

    #[test]
    fn purchase_summary_counts_unpriced_items_without_spend() {
        let tools = Category::new("Tools", CategoryKind::Purchases);
        let purchases = vec![
            Purchase::new(tools.id, "Drill").with_price(129.5),
            Purchase::new(tools.id, "Gift"),
        ];

        let summary = SummaryService::purchases(&[tools], &purchases);

        assert_eq!(summary.total_purchases, 2);
        assert_eq!(summary.total_spent, 129.5);
        assert_eq!(summary.categories[0].purchase_count, 2);
        assert_eq!(summary.categories[0].total_spent, 129.5);
    }

    #[test]
    fn tally_groups_records_by_category() {
        let home = Uuid::new_v4();
        let car = Uuid::new_v4();
        let contracts = vec![
            Contract::new(home, "Power", start()).with_price(60.0, BillingInterval::Monthly),
            Contract::new(car, "Insurance", start()).with_price(600.0, BillingInterval::Yearly),
            Contract::new(home, "Internet", start()).with_price(40.0, BillingInterval::Monthly),
        ];

        let (by_category, overall) =
            tally_by_category(&contracts, |contract| [contract.monthly_price()]);

        assert_eq!(overall.count, 3);
        assert_eq!(overall.amounts, [150.0]);
        assert_eq!(by_category[&home].count, 2);
        assert_eq!(by_category[&home].amounts, [100.0]);
        assert_eq!(by_category[&car].amounts, [50.0]);
    }
}
