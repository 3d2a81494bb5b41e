use eframe::egui::{self, CursorIcon, PointerButton, Sense, Ui};
use tracing::debug;

use super::ViewModel;
use super::layout::ChartLayout;
use super::paint::paint;
use super::scene::render;
use super::selection::hit_test;

impl ViewModel {
    pub(super) fn draw_chart(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());
        let layout = ChartLayout::new(rect, &self.config);

        let hovered = ui
            .input(|input| input.pointer.hover_pos())
            .and_then(|pointer| hit_test(&layout, &self.index.positions, pointer));
        if hovered.is_some() {
            ui.output_mut(|output| output.cursor_icon = CursorIcon::PointingHand);
        }

        if response.clicked_by(PointerButton::Primary)
            && let Some(pointer) = response.interact_pointer_pos()
            && let Some((category, age)) = hit_test(&layout, &self.index.positions, pointer)
        {
            debug!(?category, age, "circle clicked");
            self.selection.toggle(age, &self.index.relationships);
        }

        let commands = render(&self.index, &self.selection, &layout, &self.config);
        paint(&ui.painter_at(rect), &commands);
    }

    pub(super) fn show(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.draw_chart(ui));
    }
}
