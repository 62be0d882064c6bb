//! Category consistency across tag columns.
//!
//! Both checks are advisory. Spellings listed together in one whitelist
//! group are known to be distinct and are never reported as similar; a case
//! variant of a whitelisted spelling is still reported.

use std::collections::{BTreeMap, BTreeSet};

use sonocat_model::{DatasetSchema, RecordSet};
use sonocat_query::record_tags;
use tracing::debug;

use crate::issue::Issue;
use crate::similarity::{category_similarity, partial_similarity};

/// Check every tag column of the schema.
///
/// With `partial` set, a category contained in a longer one also counts as
/// similar.
pub fn check(
    records: &RecordSet,
    schema: &DatasetSchema,
    threshold: f64,
    partial: bool,
) -> Vec<Issue> {
    let whitelist = Whitelist::new(&schema.category_whitelist);
    let mut issues = Vec::new();

    for column in &schema.tag_columns {
        if !records.has_column(column) {
            continue;
        }
        let categories: BTreeSet<&str> = records
            .iter()
            .flat_map(|r| record_tags(r, column))
            .collect();
        debug!(column = %column, categories = categories.len(), "checking categories");

        issues.extend(case_variants(column, &categories));
        issues.extend(similar_pairs(
            column,
            &categories,
            &whitelist,
            threshold,
            partial,
        ));
    }

    issues
}

/// Categories that are equal ignoring case but spelled differently.
fn case_variants(column: &str, categories: &BTreeSet<&str>) -> Vec<Issue> {
    let mut by_lower: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for category in categories {
        by_lower
            .entry(category.to_lowercase())
            .or_default()
            .push(*category);
    }

    by_lower
        .into_values()
        .filter(|variants| variants.len() > 1)
        .map(|variants| Issue::CaseInconsistency {
            column: column.to_string(),
            variants: variants.into_iter().map(str::to_string).collect(),
        })
        .collect()
}

/// Pairs of categories above the similarity threshold.
///
/// Once a category is reported as part of a pair it is not paired again,
/// so a cluster of typos yields one warning per stray spelling. Pairs that
/// differ only in case are left to [`case_variants`].
fn similar_pairs(
    column: &str,
    categories: &BTreeSet<&str>,
    whitelist: &Whitelist,
    threshold: f64,
    partial: bool,
) -> Vec<Issue> {
    let sorted: Vec<&str> = categories.iter().copied().collect();
    let mut processed: BTreeSet<&str> = BTreeSet::new();
    let mut issues = Vec::new();

    for (index, first) in sorted.iter().enumerate() {
        if !processed.insert(*first) {
            continue;
        }
        for second in &sorted[index + 1..] {
            if processed.contains(second)
                || first.to_lowercase() == second.to_lowercase()
                || whitelist.same_group(first, second)
            {
                continue;
            }
            let mut score = category_similarity(first, second);
            if partial {
                score = score.max(partial_similarity(first, second));
            }
            if score >= threshold {
                issues.push(Issue::SimilarCategories {
                    column: column.to_string(),
                    first: (*first).to_string(),
                    second: (*second).to_string(),
                    score: percent(score),
                });
                processed.insert(*second);
            }
        }
    }

    issues
}

fn percent(score: f64) -> u8 {
    (score * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Case-insensitive lookup of whitelist group membership.
struct Whitelist {
    groups: Vec<BTreeSet<String>>,
}

impl Whitelist {
    fn new(groups: &[Vec<String>]) -> Self {
        Self {
            groups: groups
                .iter()
                .map(|group| group.iter().map(|c| c.to_lowercase()).collect())
                .collect(),
        }
    }

    fn same_group(&self, a: &str, b: &str) -> bool {
        let (a, b) = (a.to_lowercase(), b.to_lowercase());
        self.groups
            .iter()
            .any(|group| group.contains(&a) && group.contains(&b))
    }
}
