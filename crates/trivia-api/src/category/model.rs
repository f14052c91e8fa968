use std::collections::BTreeMap;

use trivia_db::models::Category;

/// Wire shape for categories: a map from category id to display name.
/// `BTreeMap` keeps the keys in id order, matching the seeded listing.
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.name)).collect()
}
