use eframe::egui::emath::Rot2;
use eframe::egui::epaint::{CubicBezierShape, TextShape};
use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Shape, StrokeKind, vec2};

use super::scene::DrawCommand;

pub(super) fn paint(painter: &Painter, commands: &[DrawCommand]) {
    for command in commands {
        match command {
            DrawCommand::Fill { rect, color } => {
                painter.rect_filled(*rect, 0.0, *color);
            }
            DrawCommand::Text {
                pos,
                anchor,
                text,
                size,
                color,
                angle,
            } => paint_text(painter, *pos, *anchor, text, *size, *color, *angle),
            DrawCommand::Line { from, to, stroke } => {
                painter.line_segment([*from, *to], *stroke);
            }
            DrawCommand::Curve { points, stroke } => {
                painter.add(CubicBezierShape::from_points_stroke(
                    *points,
                    false,
                    Color32::TRANSPARENT,
                    *stroke,
                ));
            }
            DrawCommand::Circle {
                center,
                radius,
                fill,
            } => {
                painter.circle_filled(*center, *radius, *fill);
            }
            DrawCommand::Panel {
                rect,
                fill,
                outline,
                heading,
                body,
            } => {
                painter.rect_filled(*rect, 0.0, *fill);
                painter.rect_stroke(*rect, 0.0, *outline, StrokeKind::Middle);
                painter.text(
                    rect.min + vec2(10.0, 10.0),
                    Align2::LEFT_TOP,
                    heading,
                    FontId::proportional(16.0),
                    Color32::BLACK,
                );
                let galley = painter.layout(
                    body.clone(),
                    FontId::proportional(16.0),
                    Color32::BLACK,
                    (rect.width() - 20.0).max(1.0),
                );
                painter.galley(rect.min + vec2(10.0, 30.0), galley, Color32::BLACK);
            }
        }
    }
}

fn paint_text(
    painter: &Painter,
    pos: Pos2,
    anchor: Align2,
    text: &str,
    size: f32,
    color: Color32,
    angle: f32,
) {
    if angle == 0.0 {
        painter.text(pos, anchor, text, FontId::proportional(size), color);
        return;
    }

    // Rotated text is always centred on `pos`; the galley rotates about its top-left corner.
    let galley = painter.layout_no_wrap(text.to_owned(), FontId::proportional(size), color);
    let half = galley.size() * 0.5;
    let origin = pos - Rot2::from_angle(angle) * half;
    painter.add(Shape::Text(TextShape::new(origin, galley, color).with_angle(angle)));
}
