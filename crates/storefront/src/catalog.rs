//! Catalog filter/sort pipeline.
//!
//! The storefront fetches the full product list once (cached in
//! [`crate::state::AppState`]) and derives every listing from it here. The
//! pipeline is a pure function of (product list, criteria): no I/O, no
//! side effects, deterministic, recomputed wholesale per request.
//!
//! Criteria arrive as URL query parameters and are deserialized leniently:
//! a malformed price bound or category ID means "filter not applied", and an
//! unknown sort key falls back to the default order. A request with junk
//! parameters degrades to the unfiltered listing instead of failing.

use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use amrita_core::CategoryId;

use crate::models::Product;

/// Sort order for the catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Lexicographic ascending on display name (case-insensitive).
    Name,
    /// Numeric ascending on price.
    PriceAsc,
    /// Numeric descending on price.
    PriceDesc,
    /// Rating descending; products without a rating sort as 0.
    Rating,
    /// Creation time descending.
    Newest,
    /// Featured products first, input order preserved within each group.
    #[default]
    Featured,
}

impl FromStr for SortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "price_asc" => Ok(Self::PriceAsc),
            "price_desc" => Ok(Self::PriceDesc),
            "rating" => Ok(Self::Rating),
            "newest" => Ok(Self::Newest),
            "featured" => Ok(Self::Featured),
            _ => Err(()),
        }
    }
}

/// User-selected catalog criteria, deserialized from query parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Free-text search over name, description, and ingredients.
    #[serde(default)]
    pub q: Option<String>,
    /// Exact-match category filter.
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Option<CategoryId>,
    /// Inclusive lower price bound.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub price_min: Option<Decimal>,
    /// Inclusive upper price bound.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub price_max: Option<Decimal>,
    /// Sort order; defaults to featured-first.
    #[serde(default, deserialize_with = "lenient_sort")]
    pub sort: SortKey,
}

impl CatalogQuery {
    /// Whether any narrowing criterion is active.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        self.query_text().is_some()
            || self.category.is_some()
            || self.price_min.is_some()
            || self.price_max.is_some()
    }

    /// The active search text, if any (trimmed; empty means no filter).
    fn query_text(&self) -> Option<&str> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }
}

/// Apply the filter stage then the sort stage, returning the ordered subset.
///
/// Filtering keeps a product iff it matches all active criteria; sorting is
/// stable, so ties preserve the input order (which is what makes the
/// `featured` order well-defined).
#[must_use]
pub fn filter_and_sort(products: &[Product], criteria: &CatalogQuery) -> Vec<Product> {
    let needle = criteria.query_text().map(str::to_lowercase);

    let mut result: Vec<Product> = products
        .iter()
        .filter(|p| matches(p, criteria, needle.as_deref()))
        .cloned()
        .collect();

    sort(&mut result, criteria.sort);
    result
}

/// Whether a product satisfies every active predicate.
fn matches(product: &Product, criteria: &CatalogQuery, needle: Option<&str>) -> bool {
    if let Some(needle) = needle
        && !text_matches(product, needle)
    {
        return false;
    }

    if let Some(category) = criteria.category
        && product.category_id != Some(category)
    {
        return false;
    }

    if let Some(min) = criteria.price_min
        && product.price < min
    {
        return false;
    }

    if let Some(max) = criteria.price_max
        && product.price > max
    {
        return false;
    }

    true
}

/// Case-insensitive substring match over name, description, and ingredients.
fn text_matches(product: &Product, needle: &str) -> bool {
    let haystacks = [
        Some(product.name.as_str()),
        product.description.as_deref(),
        product.ingredients.as_deref(),
    ];
    haystacks
        .into_iter()
        .flatten()
        .any(|text| text.to_lowercase().contains(needle))
}

/// Stable in-place sort by the given key.
fn sort(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::Name => {
            products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Rating => products.sort_by(|a, b| {
            b.rating
                .unwrap_or_default()
                .cmp(&a.rating.unwrap_or_default())
        }),
        SortKey::Newest => products.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Featured => products.sort_by(|a, b| b.featured.cmp(&a.featured)),
    }
}

// =============================================================================
// Lenient query-parameter deserializers
// =============================================================================

/// Deserialize an optional decimal, treating malformed input as unset.
fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse::<Decimal>().ok()))
}

/// Deserialize an optional category ID, treating malformed input as unset.
fn lenient_category<'de, D>(deserializer: D) -> Result<Option<CategoryId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse::<CategoryId>().ok()))
}

/// Deserialize a sort key, falling back to the default on unknown input.
fn lenient_sort<'de, D>(deserializer: D) -> Result<SortKey, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| s.trim().parse::<SortKey>().ok())
        .unwrap_or_default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use amrita_core::ProductId;
    use chrono::{Duration, TimeZone, Utc};

    fn product(name: &str, price: i64, featured: bool) -> Product {
        Product {
            id: ProductId::generate(),
            slug: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            description: None,
            ingredients: None,
            price: Decimal::new(price, 0),
            stock: 10,
            rating: None,
            review_count: 0,
            featured,
            category_id: None,
            image_url: None,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn sample_list() -> Vec<Product> {
        vec![
            product("Ashwagandha", 599, false),
            product("Turmeric", 449, true),
        ]
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_result_is_subset_satisfying_predicates() {
        let mut list = sample_list();
        list.push(product("Triphala", 299, false));

        let criteria = CatalogQuery {
            price_min: Some(Decimal::new(300, 0)),
            price_max: Some(Decimal::new(500, 0)),
            ..CatalogQuery::default()
        };

        let result = filter_and_sort(&list, &criteria);
        assert!(result.len() < list.len());
        for p in &result {
            assert!(p.price >= Decimal::new(300, 0));
            assert!(p.price <= Decimal::new(500, 0));
            assert!(list.iter().any(|orig| orig.id == p.id));
        }
    }

    #[test]
    fn test_idempotent() {
        let list = sample_list();
        let criteria = CatalogQuery {
            sort: SortKey::PriceAsc,
            ..CatalogQuery::default()
        };

        let once = filter_and_sort(&list, &criteria);
        let twice = filter_and_sort(&once, &criteria);
        assert_eq!(names(&once), names(&twice));
    }

    #[test]
    fn test_price_asc_adjacent_ordering() {
        let mut list = sample_list();
        list.push(product("Brahmi", 349, false));
        list.push(product("Chyawanprash", 699, true));

        let criteria = CatalogQuery {
            sort: SortKey::PriceAsc,
            ..CatalogQuery::default()
        };
        let result = filter_and_sort(&list, &criteria);

        for pair in result.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }
    }

    #[test]
    fn test_price_asc_example() {
        // [Ashwagandha 599, Turmeric 449] sorted price_asc yields
        // [Turmeric(449), Ashwagandha(599)].
        let criteria = CatalogQuery {
            sort: SortKey::PriceAsc,
            ..CatalogQuery::default()
        };
        let result = filter_and_sort(&sample_list(), &criteria);
        assert_eq!(names(&result), vec!["Turmeric", "Ashwagandha"]);
    }

    #[test]
    fn test_query_substring_example() {
        let criteria = CatalogQuery {
            q: Some("ashwa".to_string()),
            ..CatalogQuery::default()
        };
        let result = filter_and_sort(&sample_list(), &criteria);
        assert_eq!(names(&result), vec!["Ashwagandha"]);
    }

    #[test]
    fn test_query_matches_description_and_ingredients() {
        let mut list = sample_list();
        list[0].ingredients = Some("Withania somnifera root extract".to_string());
        list[1].description = Some("Golden milk staple with curcumin".to_string());

        let by_ingredient = filter_and_sort(
            &list,
            &CatalogQuery {
                q: Some("WITHANIA".to_string()),
                ..CatalogQuery::default()
            },
        );
        assert_eq!(names(&by_ingredient), vec!["Ashwagandha"]);

        let by_description = filter_and_sort(
            &list,
            &CatalogQuery {
                q: Some("curcumin".to_string()),
                ..CatalogQuery::default()
            },
        );
        assert_eq!(names(&by_description), vec!["Turmeric"]);
    }

    #[test]
    fn test_featured_partition_and_stability() {
        let list = vec![
            product("A", 100, false),
            product("B", 200, true),
            product("C", 300, false),
            product("D", 400, true),
        ];

        let result = filter_and_sort(&list, &CatalogQuery::default());

        // Featured first, input order preserved within each group.
        assert_eq!(names(&result), vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn test_no_criteria_returns_full_list_in_default_order() {
        let list = sample_list();
        let criteria = CatalogQuery::default();
        assert!(!criteria.is_filtered());

        let result = filter_and_sort(&list, &criteria);
        assert_eq!(result.len(), list.len());
        // Default order is featured-first.
        assert_eq!(names(&result), vec!["Turmeric", "Ashwagandha"]);
    }

    #[test]
    fn test_rating_missing_sorts_as_zero() {
        let mut list = sample_list();
        list[0].rating = Some(Decimal::new(45, 1)); // 4.5
        // list[1] has no rating

        let criteria = CatalogQuery {
            sort: SortKey::Rating,
            ..CatalogQuery::default()
        };
        let result = filter_and_sort(&list, &criteria);
        assert_eq!(names(&result), vec!["Ashwagandha", "Turmeric"]);
    }

    #[test]
    fn test_newest_sorts_descending() {
        let mut list = sample_list();
        list[1].created_at += Duration::days(7);

        let criteria = CatalogQuery {
            sort: SortKey::Newest,
            ..CatalogQuery::default()
        };
        let result = filter_and_sort(&list, &criteria);
        assert_eq!(names(&result), vec!["Turmeric", "Ashwagandha"]);
    }

    #[test]
    fn test_name_sort_case_insensitive() {
        let list = vec![
            product("turmeric", 449, false),
            product("Ashwagandha", 599, false),
            product("Brahmi", 349, false),
        ];

        let criteria = CatalogQuery {
            sort: SortKey::Name,
            ..CatalogQuery::default()
        };
        let result = filter_and_sort(&list, &criteria);
        assert_eq!(names(&result), vec!["Ashwagandha", "Brahmi", "turmeric"]);
    }

    #[test]
    fn test_price_bounds_inclusive() {
        let list = sample_list();
        let criteria = CatalogQuery {
            price_min: Some(Decimal::new(449, 0)),
            price_max: Some(Decimal::new(599, 0)),
            ..CatalogQuery::default()
        };
        let result = filter_and_sort(&list, &criteria);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_category_filter() {
        let mut list = sample_list();
        let herbs = amrita_core::CategoryId::generate();
        list[0].category_id = Some(herbs);

        let criteria = CatalogQuery {
            category: Some(herbs),
            ..CatalogQuery::default()
        };
        let result = filter_and_sort(&list, &criteria);
        assert_eq!(names(&result), vec!["Ashwagandha"]);
    }

    #[test]
    fn test_blank_query_is_no_filter() {
        let criteria = CatalogQuery {
            q: Some("   ".to_string()),
            ..CatalogQuery::default()
        };
        assert!(!criteria.is_filtered());
        let result = filter_and_sort(&sample_list(), &criteria);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_malformed_bounds_deserialize_as_unset() {
        let criteria: CatalogQuery = serde_json::from_value(serde_json::json!({
            "q": "ashwa",
            "price_min": "not-a-number",
            "price_max": "",
            "category": "also-not-a-uuid",
        }))
        .unwrap();

        assert!(criteria.price_min.is_none());
        assert!(criteria.price_max.is_none());
        assert!(criteria.category.is_none());
        assert_eq!(criteria.q.as_deref(), Some("ashwa"));
    }

    #[test]
    fn test_unknown_sort_falls_back_to_default() {
        let criteria: CatalogQuery = serde_json::from_value(serde_json::json!({
            "sort": "cheapest-first",
        }))
        .unwrap();
        assert_eq!(criteria.sort, SortKey::Featured);

        let criteria: CatalogQuery = serde_json::from_value(serde_json::json!({
            "sort": "price_desc",
        }))
        .unwrap();
        assert_eq!(criteria.sort, SortKey::PriceDesc);
    }
}
