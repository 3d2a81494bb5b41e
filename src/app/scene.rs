use std::f32::consts::FRAC_PI_2;

use eframe::egui::{Align2, Color32, Pos2, Rect, Stroke, pos2};

use crate::config::ChartConfig;
use crate::dataset::{AgeGapIndex, Category, GapOutcome, GapReport, RelationshipEntry};

use super::layout::ChartLayout;
use super::selection::Selection;

#[derive(Clone, Debug, PartialEq)]
pub(super) enum DrawCommand {
    Fill {
        rect: Rect,
        color: Color32,
    },
    Text {
        pos: Pos2,
        anchor: Align2,
        text: String,
        size: f32,
        color: Color32,
        angle: f32,
    },
    Line {
        from: Pos2,
        to: Pos2,
        stroke: Stroke,
    },
    Curve {
        points: [Pos2; 4],
        stroke: Stroke,
    },
    Circle {
        center: Pos2,
        radius: f32,
        fill: Color32,
    },
    Panel {
        rect: Rect,
        fill: Color32,
        outline: Stroke,
        heading: String,
        body: String,
    },
}

#[derive(Clone, Copy, Debug)]
pub(super) struct Palette {
    pub(super) pastel: Color32,
    pub(super) selected: Color32,
    pub(super) indicator: Color32,
}

pub(super) fn palette(category: Category) -> Palette {
    match category {
        Category::First => Palette {
            pastel: Color32::from_rgb(0xFF, 0xC0, 0xCB),
            selected: Color32::from_rgb(0xC7, 0x15, 0x85),
            indicator: Color32::from_rgb(0xFF, 0x69, 0xB4),
        },
        Category::Second => Palette {
            pastel: Color32::from_rgb(0xA2, 0xB6, 0xFF),
            selected: Color32::from_rgb(0x00, 0x00, 0x8B),
            indicator: Color32::from_rgb(0x1E, 0x90, 0xFF),
        },
    }
}

pub(super) const START_HINT: &str = "Click on the circles to begin!";

pub(super) fn render(
    index: &AgeGapIndex,
    selection: &Selection,
    layout: &ChartLayout,
    config: &ChartConfig,
) -> Vec<DrawCommand> {
    let mut commands = Vec::new();
    draw_frame(&mut commands, selection, layout, config);

    if let Some(age) = selection.age() {
        for entry in index.relationships.entries() {
            draw_connections(&mut commands, entry, age, layout);
        }
    }

    for category in Category::ALL {
        let pastel = palette(category).pastel;
        for &age in index.positions.ages(category) {
            if selection.age() != Some(age) {
                commands.push(circle(layout, category, age, pastel));
            }
        }
    }

    let (Some(age), Some(gaps)) = (selection.age(), selection.gaps()) else {
        return commands;
    };

    for category in Category::ALL {
        if index.positions.contains(category, age) {
            commands.push(circle(layout, category, age, palette(category).selected));
        }
    }

    for category in Category::ALL {
        if let Some(partner_age) = gaps.outcome(category).partner_age() {
            let x = layout.gap_indicator_x(category);
            commands.push(DrawCommand::Line {
                from: pos2(x, layout.gap_indicator_y(age)),
                to: pos2(x, layout.gap_indicator_y(partner_age)),
                stroke: Stroke::new(2.0, palette(category).indicator),
            });
        }
    }

    for category in Category::ALL {
        commands.push(info_panel(layout, config, category, age, gaps));
    }

    commands
}

fn draw_frame(
    commands: &mut Vec<DrawCommand>,
    selection: &Selection,
    layout: &ChartLayout,
    config: &ChartConfig,
) {
    let rect = layout.rect();
    let muted = Color32::from_gray(100);

    commands.push(DrawCommand::Fill {
        rect,
        color: Color32::WHITE,
    });
    commands.push(text(
        pos2(rect.center().x, rect.top() + 30.0),
        Align2::CENTER_TOP,
        &config.title,
        48.0,
        Color32::BLACK,
    ));
    commands.push(text(
        pos2(rect.center().x, rect.top() + 95.0),
        Align2::CENTER_TOP,
        &config.subtitle,
        18.0,
        muted,
    ));
    commands.push(DrawCommand::Text {
        pos: pos2(rect.left() + 50.0, rect.center().y),
        anchor: Align2::CENTER_CENTER,
        text: "Age".to_owned(),
        size: 16.0,
        color: muted,
        angle: -FRAC_PI_2,
    });

    for category in Category::ALL {
        commands.push(text(
            pos2(layout.column_x(category), rect.bottom() - 40.0),
            Align2::CENTER_CENTER,
            config.column_title(category),
            16.0,
            muted,
        ));
    }

    if selection.age().is_none() {
        commands.push(text(rect.center(), Align2::CENTER_CENTER, START_HINT, 16.0, muted));
    }
}

fn draw_connections(commands: &mut Vec<DrawCommand>, entry: &RelationshipEntry, age: u32, layout: &ChartLayout) {
    for category in Category::ALL {
        let (partner_age, partner_category) = if entry.age_a == age && entry.category_a == category {
            (entry.age_b, entry.category_b)
        } else if entry.age_b == age && entry.category_b == category {
            (entry.age_a, entry.category_a)
        } else {
            continue;
        };

        let from = layout.circle_center(category, age);
        let to = layout.circle_center(partner_category, partner_age);
        let stroke = Stroke::new(1.0, palette(category).pastel);

        if partner_category == category {
            let control = pos2(
                from.x + ChartLayout::outward(category) * ChartLayout::CURVE_BULGE,
                (from.y + to.y) / 2.0,
            );
            commands.push(DrawCommand::Curve {
                points: [from, control, control, to],
                stroke,
            });
        } else {
            commands.push(DrawCommand::Line { from, to, stroke });
        }
    }
}

fn info_panel(
    layout: &ChartLayout,
    config: &ChartConfig,
    category: Category,
    age: u32,
    gaps: &GapReport,
) -> DrawCommand {
    let outcome = gaps.outcome(category);
    let body = match outcome {
        GapOutcome::Found(found) => format!(
            "Age {age}\nLargest Age Gap: {}\nActors: {}({age}) & {}({})",
            found.label, found.name_self, found.name_partner, found.partner_age
        ),
        GapOutcome::NoMovie => format!("\n{}", outcome.label()),
    };

    DrawCommand::Panel {
        rect: layout.panel_rect(category),
        fill: palette(category).pastel,
        outline: Stroke::new(2.0, Color32::BLACK),
        heading: format!("Selected {}", config.person_label(category)),
        body,
    }
}

fn circle(layout: &ChartLayout, category: Category, age: u32, fill: Color32) -> DrawCommand {
    DrawCommand::Circle {
        center: layout.circle_center(category, age),
        radius: ChartLayout::CIRCLE_RADIUS,
        fill,
    }
}

fn text(pos: Pos2, anchor: Align2, text: &str, size: f32, color: Color32) -> DrawCommand {
    DrawCommand::Text {
        pos,
        anchor,
        text: text.to_owned(),
        size,
        color,
        angle: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use super::*;
    use crate::dataset::Category::{First, Second};
    use crate::dataset::{NO_MOVIE_LABEL, RawRecord};

    fn layout() -> ChartLayout {
        ChartLayout::new(
            Rect::from_min_size(Pos2::ZERO, vec2(1200.0, 800.0)),
            &ChartConfig::default(),
        )
    }

    fn selected(index: &AgeGapIndex, age: u32) -> Selection {
        let mut selection = Selection::default();
        selection.toggle(age, &index.relationships);
        selection
    }

    fn panels(commands: &[DrawCommand]) -> Vec<(&str, &str)> {
        commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Panel { heading, body, .. } => Some((heading.as_str(), body.as_str())),
                _ => None,
            })
            .collect()
    }

    fn has_hint(commands: &[DrawCommand]) -> bool {
        commands
            .iter()
            .any(|command| matches!(command, DrawCommand::Text { text, .. } if text == START_HINT))
    }

    #[test]
    fn unselected_chart_has_circles_and_hint_only() {
        let records = vec![RawRecord::new(20, 45, First, Second, "Film A", "Alice", "Bob")];
        let index = AgeGapIndex::build(&records);
        let commands = render(&index, &Selection::Unselected, &layout(), &ChartConfig::default());

        assert!(has_hint(&commands));
        assert!(panels(&commands).is_empty());
        let circles = commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Circle { .. }))
            .count();
        assert_eq!(circles, 2);
        assert!(matches!(&commands[0], DrawCommand::Fill { color, .. } if *color == Color32::WHITE));
    }

    #[test]
    fn cross_category_partner_is_a_straight_line() {
        let records = vec![RawRecord::new(20, 45, First, Second, "Film A", "Alice", "Bob")];
        let index = AgeGapIndex::build(&records);
        let layout = layout();
        let commands = render(&index, &selected(&index, 20), &layout, &ChartConfig::default());

        let connector = DrawCommand::Line {
            from: layout.circle_center(First, 20),
            to: layout.circle_center(Second, 45),
            stroke: Stroke::new(1.0, palette(First).pastel),
        };
        assert!(commands.contains(&connector));
        assert!(!commands.iter().any(|command| matches!(command, DrawCommand::Curve { .. })));
        assert!(!has_hint(&commands));
    }

    #[test]
    fn same_category_partner_is_an_outward_curve() {
        let records = vec![RawRecord::new(20, 25, First, First, "Film B", "Carol", "Dana")];
        let index = AgeGapIndex::build(&records);
        let layout = layout();
        let commands = render(&index, &selected(&index, 20), &layout, &ChartConfig::default());

        let curve = commands
            .iter()
            .find_map(|command| match command {
                DrawCommand::Curve { points, .. } => Some(*points),
                _ => None,
            })
            .expect("curved connector");
        assert_eq!(curve[0], layout.circle_center(First, 20));
        assert_eq!(curve[3], layout.circle_center(First, 25));
        assert!(curve[1].x < layout.column_x(First));
        assert!(!commands.iter().any(|command| matches!(
            command,
            DrawCommand::Line { stroke, .. } if stroke.width == 1.0
        )));
    }

    #[test]
    fn selected_circles_are_drawn_after_every_unselected_one() {
        let records = vec![
            RawRecord::new(25, 40, First, Second, "One", "a", "b"),
            RawRecord::new(25, 30, Second, First, "Two", "c", "d"),
        ];
        let index = AgeGapIndex::build(&records);
        let commands = render(&index, &selected(&index, 25), &layout(), &ChartConfig::default());

        let circle_fills = commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Circle { fill, .. } => Some(*fill),
                _ => None,
            })
            .collect::<Vec<_>>();
        let selected_colors = [palette(First).selected, palette(Second).selected];

        assert_eq!(circle_fills.len(), 4);
        assert_eq!(&circle_fills[2..], &selected_colors);
        assert!(circle_fills[..2].iter().all(|fill| !selected_colors.contains(fill)));
    }

    #[test]
    fn panels_show_result_or_no_movie_message() {
        let records = vec![RawRecord::new(20, 45, First, Second, "Film A", "Alice", "Bob")];
        let index = AgeGapIndex::build(&records);
        let commands = render(&index, &selected(&index, 20), &layout(), &ChartConfig::default());
        let no_movie = format!("\n{NO_MOVIE_LABEL}");

        assert_eq!(
            panels(&commands),
            vec![
                (
                    "Selected Woman",
                    "Age 20\nLargest Age Gap: Film A\nActors: Alice(20) & Bob(45)"
                ),
                ("Selected Man", no_movie.as_str()),
            ]
        );
    }

    #[test]
    fn gap_indicator_spans_selected_and_partner_ages() {
        let records = vec![
            RawRecord::new(20, 30, First, Second, "Ten", "a", "b"),
            RawRecord::new(20, 50, First, Second, "Thirty", "c", "d"),
        ];
        let index = AgeGapIndex::build(&records);
        let layout = layout();
        let commands = render(&index, &selected(&index, 20), &layout, &ChartConfig::default());

        let x = layout.gap_indicator_x(First);
        let indicator = DrawCommand::Line {
            from: pos2(x, layout.age_to_y(20)),
            to: pos2(x, layout.age_to_y(50)),
            stroke: Stroke::new(2.0, palette(First).indicator),
        };
        assert!(commands.contains(&indicator));
        assert!(!commands.iter().any(|command| matches!(
            command,
            DrawCommand::Line { stroke, .. } if stroke.color == palette(Second).indicator
        )));
    }

    #[test]
    fn deselecting_clears_panels() {
        let records = vec![RawRecord::new(20, 45, First, Second, "Film A", "Alice", "Bob")];
        let index = AgeGapIndex::build(&records);
        let mut selection = selected(&index, 20);
        selection.toggle(20, &index.relationships);

        let commands = render(&index, &selection, &layout(), &ChartConfig::default());
        assert!(panels(&commands).is_empty());
        assert!(has_hint(&commands));
    }
}
