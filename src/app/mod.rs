use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui::{self, Context};
use tracing::{info, warn};

use crate::config::ChartConfig;
use crate::dataset::{AgeGapIndex, Category, load_records};

mod layout;
mod paint;
mod scene;
mod selection;
mod view;

use self::selection::Selection;

pub struct AgeGapApp {
    config: ChartConfig,
    state: AppState,
}

enum AppState {
    Loading {
        rx: Receiver<Result<AgeGapIndex, String>>,
    },
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    config: ChartConfig,
    index: AgeGapIndex,
    selection: Selection,
}

impl ViewModel {
    fn new(index: AgeGapIndex, config: ChartConfig) -> Self {
        Self {
            config,
            index,
            selection: Selection::default(),
        }
    }
}

impl AgeGapApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ChartConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        let state = Self::start_load(&config);
        Self { config, state }
    }

    fn spawn_load(config: &ChartConfig) -> Receiver<Result<AgeGapIndex, String>> {
        let (tx, rx) = mpsc::channel();
        let path = config.dataset.clone();
        let keys = config.categories.clone();

        thread::spawn(move || {
            info!(path = %path.display(), "loading dataset");
            let result = load_records(&path, &keys)
                .map(|records| {
                    let index = AgeGapIndex::build(&records);
                    info!(
                        rows = index.relationships.total_records(),
                        relationships = index.relationships.len(),
                        first_ages = index.positions.ages(Category::First).len(),
                        second_ages = index.positions.ages(Category::Second).len(),
                        "dataset indexed"
                    );
                    index
                })
                .map_err(|error| {
                    warn!("dataset load failed: {error:#}");
                    format!("{error:#}")
                });
            let _ = tx.send(result);
        });

        rx
    }

    fn poll_load(rx: &Receiver<Result<AgeGapIndex, String>>, config: &ChartConfig) -> Option<AppState> {
        match rx.try_recv() {
            Ok(Ok(index)) => Some(AppState::Ready(Box::new(ViewModel::new(index, config.clone())))),
            Ok(Err(error)) => Some(AppState::Error(error)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                warn!("dataset loader exited without a result");
                Some(AppState::Error("Background load worker disconnected".to_owned()))
            }
        }
    }

    fn start_load(config: &ChartConfig) -> AppState {
        AppState::Loading {
            rx: Self::spawn_load(config),
        }
    }
}

impl eframe::App for AgeGapApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                transition = Self::poll_load(rx, &self.config);
                if transition.is_some() {
                    ctx.request_repaint();
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading dataset...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load the dataset");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(Self::start_load(&self.config));
                    }
                });
            }
            AppState::Ready(model) => model.show(ctx),
        }

        if let Some(next_state) = transition {
            self.state = next_state;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_that_dies_without_sending_becomes_an_error() {
        let (tx, rx) = mpsc::channel::<Result<AgeGapIndex, String>>();
        drop(tx);

        let state = AgeGapApp::poll_load(&rx, &ChartConfig::default());
        assert!(matches!(
            state,
            Some(AppState::Error(ref message)) if message == "Background load worker disconnected"
        ));
    }

    #[test]
    fn pending_loader_keeps_loading() {
        let (_tx, rx) = mpsc::channel::<Result<AgeGapIndex, String>>();
        assert!(AgeGapApp::poll_load(&rx, &ChartConfig::default()).is_none());
    }

    #[test]
    fn loader_results_map_to_ready_or_error() {
        let (tx, rx) = mpsc::channel();
        tx.send(Ok(AgeGapIndex::default())).expect("receiver alive");
        let ready = AgeGapApp::poll_load(&rx, &ChartConfig::default());
        assert!(matches!(ready, Some(AppState::Ready(ref model)) if model.selection.age().is_none()));

        tx.send(Err("dataset contains no rows".to_owned())).expect("receiver alive");
        let failed = AgeGapApp::poll_load(&rx, &ChartConfig::default());
        assert!(matches!(failed, Some(AppState::Error(ref message)) if message.contains("no rows")));
    }
}
