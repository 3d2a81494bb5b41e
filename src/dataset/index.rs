use std::collections::{HashMap, HashSet};

use super::record::{Category, RawRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RelationshipKey {
    pub age_a: u32,
    pub age_b: u32,
    pub category_a: Category,
    pub category_b: Category,
}

impl RelationshipKey {
    pub fn of(record: &RawRecord) -> Self {
        Self {
            age_a: record.age_a,
            age_b: record.age_b,
            category_a: record.category_a,
            category_b: record.category_b,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationshipEntry {
    pub count: usize,
    pub age_a: u32,
    pub age_b: u32,
    pub category_a: Category,
    pub category_b: Category,
    pub label: String,
    pub name_a: String,
    pub name_b: String,
}

impl RelationshipEntry {
    fn first_seen(record: &RawRecord) -> Self {
        Self {
            count: 1,
            age_a: record.age_a,
            age_b: record.age_b,
            category_a: record.category_a,
            category_b: record.category_b,
            label: record.label.clone(),
            name_a: record.name_a.clone(),
            name_b: record.name_b.clone(),
        }
    }

    pub fn gap(&self) -> u32 {
        self.age_a.abs_diff(self.age_b)
    }
}

#[derive(Clone, Debug, Default)]
pub struct RelationshipIndex {
    entries: Vec<RelationshipEntry>,
    index_by_key: HashMap<RelationshipKey, usize>,
}

impl RelationshipIndex {
    fn insert(&mut self, record: &RawRecord) {
        let key = RelationshipKey::of(record);
        match self.index_by_key.get(&key) {
            Some(&index) => self.entries[index].count += 1,
            None => {
                self.index_by_key.insert(key, self.entries.len());
                self.entries.push(RelationshipEntry::first_seen(record));
            }
        }
    }

    pub fn entries(&self) -> &[RelationshipEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn get(&self, key: &RelationshipKey) -> Option<&RelationshipEntry> {
        self.index_by_key
            .get(key)
            .and_then(|&index| self.entries.get(index))
    }

    pub fn total_records(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }
}

#[derive(Clone, Debug, Default)]
struct AgeColumn {
    ages: Vec<u32>,
    known: HashSet<u32>,
}

impl AgeColumn {
    fn observe(&mut self, age: u32) {
        if self.known.insert(age) {
            self.ages.push(age);
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PositionIndex {
    columns: [AgeColumn; 2],
}

impl PositionIndex {
    fn observe(&mut self, category: Category, age: u32) {
        self.columns[category.index()].observe(age);
    }

    pub fn ages(&self, category: Category) -> &[u32] {
        &self.columns[category.index()].ages
    }

    pub fn contains(&self, category: Category, age: u32) -> bool {
        self.columns[category.index()].known.contains(&age)
    }
}

#[derive(Clone, Debug, Default)]
pub struct AgeGapIndex {
    pub relationships: RelationshipIndex,
    pub positions: PositionIndex,
}

impl AgeGapIndex {
    pub fn build(records: &[RawRecord]) -> Self {
        let mut index = Self::default();
        for record in records {
            index.relationships.insert(record);
            index.positions.observe(record.category_a, record.age_a);
            index.positions.observe(record.category_b, record.age_b);
        }

        debug_assert!(index.positions_are_referenced());
        index
    }

    fn positions_are_referenced(&self) -> bool {
        Category::ALL.into_iter().all(|category| {
            self.positions.ages(category).iter().all(|&age| {
                self.relationships.entries().iter().any(|entry| {
                    (entry.age_a == age && entry.category_a == category)
                        || (entry.age_b == age && entry.category_b == category)
                })
            })
        })
    }
}
