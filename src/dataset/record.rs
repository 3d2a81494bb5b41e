#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    First,
    Second,
}

impl Category {
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    pub fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryKeys {
    pub first: String,
    pub second: String,
}

impl CategoryKeys {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn key(&self, category: Category) -> &str {
        match category {
            Category::First => &self.first,
            Category::Second => &self.second,
        }
    }

    pub fn resolve(&self, value: &str) -> Option<Category> {
        let value = value.trim();
        Category::ALL
            .into_iter()
            .find(|category| self.key(*category).trim().eq_ignore_ascii_case(value))
    }
}

impl Default for CategoryKeys {
    fn default() -> Self {
        Self::new("woman", "man")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRecord {
    pub age_a: u32,
    pub age_b: u32,
    pub category_a: Category,
    pub category_b: Category,
    pub label: String,
    pub name_a: String,
    pub name_b: String,
}

#[cfg(test)]
impl RawRecord {
    pub fn new(
        age_a: u32,
        age_b: u32,
        category_a: Category,
        category_b: Category,
        label: &str,
        name_a: &str,
        name_b: &str,
    ) -> Self {
        Self {
            age_a,
            age_b,
            category_a,
            category_b,
            label: label.to_owned(),
            name_a: name_a.to_owned(),
            name_b: name_b.to_owned(),
        }
    }
}
