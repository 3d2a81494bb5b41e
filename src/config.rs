use std::path::PathBuf;

use crate::dataset::{Category, CategoryKeys};
use crate::util::capitalize;

#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub dataset: PathBuf,
    pub categories: CategoryKeys,
    pub column_titles: [String; 2],
    pub column_fractions: [f32; 2],
    pub max_age: f32,
    pub title: String,
    pub subtitle: String,
}

impl ChartConfig {
    pub fn column_title(&self, category: Category) -> &str {
        &self.column_titles[category.index()]
    }

    pub fn column_fraction(&self, category: Category) -> f32 {
        self.column_fractions[category.index()]
    }

    pub fn person_label(&self, category: Category) -> String {
        capitalize(self.categories.key(category).trim())
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from("age_gaps.csv"),
            categories: CategoryKeys::default(),
            column_titles: ["Women".to_owned(), "Men".to_owned()],
            column_fractions: [1.0 / 3.0, 2.0 / 3.0],
            max_age: 100.0,
            title: "Love Can't Count".to_owned(),
            subtitle: "AGE GAP OF ACTORS IN HOLLYWOOD MOVIES".to_owned(),
        }
    }
}
