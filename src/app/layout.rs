use eframe::egui::{Pos2, Rect, pos2, vec2};

use crate::config::ChartConfig;
use crate::dataset::Category;

#[derive(Clone, Copy, Debug)]
pub(super) struct ChartLayout {
    rect: Rect,
    column_x: [f32; 2],
    max_age: f32,
}

impl ChartLayout {
    pub(super) const CIRCLE_RADIUS: f32 = 5.0;
    pub(super) const HIT_RADIUS: f32 = 10.0;
    pub(super) const CURVE_BULGE: f32 = 20.0;
    pub(super) const INDICATOR_OFFSET: f32 = 60.0;
    pub(super) const PANEL_GAP: f32 = 100.0;
    pub(super) const PANEL_HEIGHT: f32 = 160.0;

    pub(super) fn new(rect: Rect, config: &ChartConfig) -> Self {
        let column_x =
            Category::ALL.map(|category| rect.left() + rect.width() * config.column_fraction(category));
        Self {
            rect,
            column_x,
            max_age: config.max_age.max(f32::EPSILON),
        }
    }

    pub(super) fn rect(&self) -> Rect {
        self.rect
    }

    pub(super) fn column_x(&self, category: Category) -> f32 {
        self.column_x[category.index()]
    }

    /// Affine and unclamped: ages above the configured maximum land above the canvas.
    pub(super) fn age_to_y(&self, age: u32) -> f32 {
        self.rect.bottom() - (age as f32 / self.max_age) * self.rect.height()
    }

    pub(super) fn circle_center(&self, category: Category, age: u32) -> Pos2 {
        pos2(self.column_x(category), self.age_to_y(age))
    }

    pub(super) fn gap_indicator_y(&self, age: u32) -> f32 {
        if age as f32 <= self.max_age {
            self.age_to_y(age)
        } else {
            self.rect.center().y
        }
    }

    pub(super) fn gap_indicator_x(&self, category: Category) -> f32 {
        self.column_x(category) + Self::outward(category) * Self::INDICATOR_OFFSET
    }

    pub(super) fn outward(category: Category) -> f32 {
        match category {
            Category::First => -1.0,
            Category::Second => 1.0,
        }
    }

    pub(super) fn panel_rect(&self, category: Category) -> Rect {
        let width = self.rect.width() / 6.0;
        let left = match category {
            Category::First => self.column_x(category) - width - Self::PANEL_GAP,
            Category::Second => self.column_x(category) + Self::PANEL_GAP,
        };
        let top = self.rect.top() + self.rect.height() / 3.0;
        Rect::from_min_size(pos2(left, top), vec2(width, Self::PANEL_HEIGHT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ChartLayout {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(1200.0, 800.0));
        ChartLayout::new(rect, &ChartConfig::default())
    }

    #[test]
    fn ages_map_bottom_to_top() {
        let layout = layout();
        assert_eq!(layout.age_to_y(0), 800.0);
        assert_eq!(layout.age_to_y(100), 0.0);
        assert_eq!(layout.age_to_y(50), 400.0);
    }

    #[test]
    fn ages_beyond_max_are_not_clamped() {
        let layout = layout();
        assert!(layout.age_to_y(110) < 0.0);
        assert_eq!(layout.gap_indicator_y(110), 400.0);
        assert_eq!(layout.gap_indicator_y(25), 600.0);
    }

    #[test]
    fn columns_follow_width_fractions() {
        let layout = layout();
        assert!((layout.column_x(Category::First) - 400.0).abs() < 1e-3);
        assert!((layout.column_x(Category::Second) - 800.0).abs() < 1e-3);
        assert!((layout.gap_indicator_x(Category::First) - 340.0).abs() < 1e-3);
        assert!((layout.gap_indicator_x(Category::Second) - 860.0).abs() < 1e-3);
    }

    #[test]
    fn resize_moves_circles_without_new_index() {
        let config = ChartConfig::default();
        let small = ChartLayout::new(Rect::from_min_size(Pos2::ZERO, vec2(600.0, 400.0)), &config);
        let large = ChartLayout::new(Rect::from_min_size(Pos2::ZERO, vec2(1200.0, 800.0)), &config);
        assert_eq!(small.circle_center(Category::Second, 50).y, 200.0);
        assert_eq!(large.circle_center(Category::Second, 50).y, 400.0);
    }

    #[test]
    fn panels_sit_outside_the_columns() {
        let layout = layout();
        let left = layout.panel_rect(Category::First);
        let right = layout.panel_rect(Category::Second);

        assert!((left.width() - 200.0).abs() < 1e-3);
        assert!((left.right() - 300.0).abs() < 1e-3);
        assert!((right.left() - 900.0).abs() < 1e-3);
        assert!((right.top() - 800.0 / 3.0).abs() < 1e-3);
        assert_eq!(right.height(), ChartLayout::PANEL_HEIGHT);
    }
}
