use eframe::egui::Pos2;
use tracing::debug;

use crate::dataset::{Category, GapReport, PositionIndex, RelationshipIndex, largest_gap};

use super::layout::ChartLayout;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(super) enum Selection {
    #[default]
    Unselected,
    Selected { age: u32, gaps: GapReport },
}

impl Selection {
    pub(super) fn age(&self) -> Option<u32> {
        match self {
            Self::Unselected => None,
            Self::Selected { age, .. } => Some(*age),
        }
    }

    pub(super) fn gaps(&self) -> Option<&GapReport> {
        match self {
            Self::Unselected => None,
            Self::Selected { gaps, .. } => Some(gaps),
        }
    }

    pub(super) fn toggle(&mut self, age: u32, relationships: &RelationshipIndex) {
        if self.age() == Some(age) {
            debug!(age, "selection cleared");
            *self = Self::Unselected;
            return;
        }

        let gaps = largest_gap(relationships, age);
        for category in Category::ALL {
            let outcome = gaps.outcome(category);
            debug!(
                age,
                ?category,
                movie_exists = outcome.movie_exists(),
                partner_age = ?outcome.partner_age(),
                partner_category = ?outcome.partner_category(),
                label = outcome.label(),
                "largest gap"
            );
        }
        *self = Self::Selected { age, gaps };
    }
}

pub(super) fn hit_test(
    layout: &ChartLayout,
    positions: &PositionIndex,
    pointer: Pos2,
) -> Option<(Category, u32)> {
    Category::ALL.into_iter().find_map(|category| {
        positions
            .ages(category)
            .iter()
            .copied()
            .find(|&age| layout.circle_center(category, age).distance(pointer) < ChartLayout::HIT_RADIUS)
            .map(|age| (category, age))
    })
}
