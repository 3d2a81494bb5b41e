use super::index::{RelationshipEntry, RelationshipIndex};
use super::record::Category;

pub const NO_MOVIE_LABEL: &str = "No movie exists";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LargestGap {
    pub gap: u32,
    pub partner_age: u32,
    pub partner_category: Category,
    pub label: String,
    pub name_self: String,
    pub name_partner: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GapOutcome {
    Found(LargestGap),
    NoMovie,
}

impl GapOutcome {
    pub fn movie_exists(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn partner_age(&self) -> Option<u32> {
        match self {
            Self::Found(found) => Some(found.partner_age),
            Self::NoMovie => None,
        }
    }

    pub fn partner_category(&self) -> Option<Category> {
        match self {
            Self::Found(found) => Some(found.partner_category),
            Self::NoMovie => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Found(found) => &found.label,
            Self::NoMovie => NO_MOVIE_LABEL,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GapReport {
    outcomes: [GapOutcome; 2],
}

impl GapReport {
    pub fn outcome(&self, category: Category) -> &GapOutcome {
        &self.outcomes[category.index()]
    }
}

pub fn largest_gap(index: &RelationshipIndex, selected_age: u32) -> GapReport {
    GapReport {
        outcomes: Category::ALL.map(|category| largest_gap_in(index, selected_age, category)),
    }
}

fn largest_gap_in(index: &RelationshipIndex, selected_age: u32, category: Category) -> GapOutcome {
    let mut best: Option<LargestGap> = None;

    for entry in index.entries() {
        let Some(candidate) = candidate_for(entry, selected_age, category) else {
            continue;
        };

        // Strict comparison keeps the earliest entry on ties.
        if best.as_ref().is_none_or(|current| candidate.gap > current.gap) {
            best = Some(candidate);
        }
    }

    best.map_or(GapOutcome::NoMovie, GapOutcome::Found)
}

fn candidate_for(entry: &RelationshipEntry, selected_age: u32, category: Category) -> Option<LargestGap> {
    if entry.age_a == selected_age && entry.category_a == category {
        Some(LargestGap {
            gap: entry.gap(),
            partner_age: entry.age_b,
            partner_category: entry.category_b,
            label: entry.label.clone(),
            name_self: entry.name_a.clone(),
            name_partner: entry.name_b.clone(),
        })
    } else if entry.age_b == selected_age && entry.category_b == category {
        Some(LargestGap {
            gap: entry.gap(),
            partner_age: entry.age_a,
            partner_category: entry.category_a,
            label: entry.label.clone(),
            name_self: entry.name_b.clone(),
            name_partner: entry.name_a.clone(),
        })
    } else {
        None
    }
}
