//! View-model over the catalog: search/category filtering, the category
//! selector, and the dashboard aggregates.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::catalog::builder::{Catalog, Occupation};
use crate::catalog::definitions::Category;
use crate::catalog::series::DataPoint;
use crate::catalog::trend::Trend;

/// Category selector value that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// List card for one occupation.
#[derive(Debug, Clone, Serialize)]
pub struct OccupationSummary {
    pub code: String,
    pub title: String,
    pub category: Category,
    pub trend: Trend,
    pub latest_score189: i32,
    pub latest_applications: u32,
}

impl From<&Occupation> for OccupationSummary {
    fn from(occupation: &Occupation) -> Self {
        let latest = occupation.latest();
        Self {
            code: occupation.code.clone(),
            title: occupation.title.clone(),
            category: occupation.category,
            trend: occupation.trend,
            latest_score189: latest.score189,
            latest_applications: latest.applications,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickStats {
    pub score189: i32,
    pub score190: i32,
    pub backlog: u32,
    pub trend: Trend,
    pub invitations_last_12_months: u32,
}

/// Detail view: the full occupation plus the "current" sidebar numbers.
#[derive(Debug, Clone, Serialize)]
pub struct OccupationDetail {
    #[serde(flatten)]
    pub occupation: Occupation,
    pub latest: DataPoint,
    pub quick_stats: QuickStats,
}

impl From<&Occupation> for OccupationDetail {
    fn from(occupation: &Occupation) -> Self {
        let latest = occupation.latest().clone();
        let quick_stats = QuickStats {
            score189: latest.score189,
            score190: latest.score190,
            backlog: latest.applications,
            trend: occupation.trend,
            invitations_last_12_months: occupation.total_invitations(),
        };
        Self {
            occupation: occupation.clone(),
            latest,
            quick_stats,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub total_occupations: usize,
    pub average_latest_score189: u32,
    pub category_count: usize,
}

/// Occupations matching the search text and category, in catalog order.
///
/// Title match is case-insensitive; code match is a substring test against the
/// lowercased query. An empty query matches everything.
pub fn filter<'a>(catalog: &'a Catalog, query: &str, category: &str) -> Vec<&'a Occupation> {
    let query = query.to_lowercase();
    catalog
        .occupations()
        .iter()
        .filter(|occupation| {
            let matches_search = occupation.title.to_lowercase().contains(&query)
                || occupation.code.contains(&query);
            let matches_category =
                category == ALL_CATEGORIES || occupation.category.as_str() == category;
            matches_search && matches_category
        })
        .collect()
}

/// `"All"` followed by the distinct categories present, sorted.
pub fn categories(catalog: &Catalog) -> Vec<String> {
    let present: BTreeSet<&str> = catalog
        .occupations()
        .iter()
        .map(|o| o.category.as_str())
        .collect();

    std::iter::once(ALL_CATEGORIES)
        .chain(present)
        .map(str::to_string)
        .collect()
}

/// Rounded mean of every occupation's December 189 score; 0 for no occupations.
pub fn average_latest_score189(occupations: &[Occupation]) -> u32 {
    if occupations.is_empty() {
        return 0;
    }
    let sum: i64 = occupations
        .iter()
        .map(|o| i64::from(o.latest().score189))
        .sum();
    (sum as f64 / occupations.len() as f64).round() as u32
}

pub fn stats(catalog: &Catalog) -> CatalogStats {
    CatalogStats {
        total_occupations: catalog.len(),
        average_latest_score189: average_latest_score189(catalog.occupations()),
        category_count: categories(catalog).len() - 1,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::series::MONTHS;

    pub(crate) fn occupation(
        code: &str,
        title: &str,
        category: Category,
        final_score: i32,
    ) -> Occupation {
        let data = MONTHS
            .iter()
            .enumerate()
            .map(|(i, month)| DataPoint {
                month: *month,
                score189: if i == 11 { final_score } else { 80 },
                score190: 75,
                score491: 65,
                invitations: if i % 3 == 0 { 50 } else { 0 },
                applications: 1000 + i as u32,
            })
            .collect();
        Occupation {
            code: code.to_string(),
            title: title.to_string(),
            category,
            trend: Trend::Stable,
            description: String::new(),
            data,
        }
    }

    pub(crate) fn sample_catalog() -> Catalog {
        Catalog::from_occupations(vec![
            occupation("233211", "Civil Engineer", Category::Engineering, 85),
            occupation("351311", "Chef", Category::Trades, 75),
            occupation("254499", "Registered Nurse (NEC)", Category::Health, 70),
            occupation("233512", "Mechanical Engineer", Category::Engineering, 86),
            occupation("252511", "Physiotherapist", Category::Health, 75),
        ])
        .unwrap()
    }

    fn codes(found: &[&Occupation]) -> Vec<String> {
        found.iter().map(|o| o.code.clone()).collect()
    }

    #[test]
    fn test_title_search_is_case_insensitive() {
        let catalog = Catalog::from_occupations(vec![
            occupation("233211", "Civil Engineer", Category::Engineering, 85),
            occupation("351311", "Chef", Category::Trades, 75),
        ])
        .unwrap();
        let found = filter(&catalog, "engineer", ALL_CATEGORIES);
        assert_eq!(codes(&found), vec!["233211"]);

        let found = filter(&catalog, "CHEF", ALL_CATEGORIES);
        assert_eq!(codes(&found), vec!["351311"]);
    }

    #[test]
    fn test_category_only_keeps_catalog_order() {
        let catalog = sample_catalog();
        let found = filter(&catalog, "", "Health");
        assert_eq!(codes(&found), vec!["254499", "252511"]);
    }

    #[test]
    fn test_code_substring_matches() {
        let catalog = sample_catalog();
        let found = filter(&catalog, "2332", ALL_CATEGORIES);
        assert_eq!(codes(&found), vec!["233211"]);
    }

    #[test]
    fn test_search_and_category_combine() {
        let catalog = sample_catalog();
        let found = filter(&catalog, "engineer", "Trades");
        assert!(found.is_empty());

        let found = filter(&catalog, "engineer", "Engineering");
        assert_eq!(codes(&found), vec!["233211", "233512"]);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert_eq!(filter(&sample_catalog(), "", ALL_CATEGORIES).len(), 5);
    }

    #[test]
    fn test_unknown_category_is_empty_not_error() {
        assert!(filter(&sample_catalog(), "", "Astronomy").is_empty());
    }

    #[test]
    fn test_categories_all_first_then_sorted() {
        assert_eq!(
            categories(&sample_catalog()),
            vec!["All", "Engineering", "Health", "Trades"]
        );
    }

    #[test]
    fn test_average_latest_score() {
        let occupations = vec![
            occupation("233211", "Civil Engineer", Category::Engineering, 80),
            occupation("351311", "Chef", Category::Trades, 90),
        ];
        assert_eq!(average_latest_score189(&occupations), 85);
    }

    #[test]
    fn test_average_rounds_half_up() {
        let occupations = vec![
            occupation("233211", "Civil Engineer", Category::Engineering, 80),
            occupation("351311", "Chef", Category::Trades, 81),
        ];
        assert_eq!(average_latest_score189(&occupations), 81);
    }

    #[test]
    fn test_average_of_empty_is_zero() {
        assert_eq!(average_latest_score189(&[]), 0);
    }

    #[test]
    fn test_stats() {
        let stats = stats(&sample_catalog());
        assert_eq!(stats.total_occupations, 5);
        assert_eq!(stats.category_count, 3);
        // (85 + 75 + 70 + 86 + 75) / 5 = 78.2
        assert_eq!(stats.average_latest_score189, 78);
    }

    #[test]
    fn test_detail_quick_stats() {
        let occ = occupation("233211", "Civil Engineer", Category::Engineering, 88);
        let detail = OccupationDetail::from(&occ);
        assert_eq!(detail.latest.month, "Dec");
        assert_eq!(detail.quick_stats.score189, 88);
        assert_eq!(detail.quick_stats.backlog, 1011);
        // months 0, 3, 6, 9
        assert_eq!(detail.quick_stats.invitations_last_12_months, 200);
    }

    #[test]
    fn test_summary_flattens_latest() {
        let occ = occupation("351311", "Chef", Category::Trades, 77);
        let summary = OccupationSummary::from(&occ);
        assert_eq!(summary.latest_score189, 77);
        assert_eq!(summary.latest_applications, 1011);
    }
}
