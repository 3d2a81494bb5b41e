mod app;
mod config;
mod dataset;
mod util;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::ChartConfig;
use crate::dataset::CategoryKeys;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[arg(long, default_value = "age_gaps.csv")]
    dataset: PathBuf,

    #[arg(long, default_value = "woman")]
    first_category: String,

    #[arg(long, default_value = "man")]
    second_category: String,

    #[arg(long, default_value = "Women")]
    first_title: String,

    #[arg(long, default_value = "Men")]
    second_title: String,

    /// Column position as a fraction of the window width
    #[arg(long, default_value_t = 1.0 / 3.0)]
    first_column: f32,

    #[arg(long, default_value_t = 2.0 / 3.0)]
    second_column: f32,

    /// Age mapped to the top of the window
    #[arg(long, default_value_t = 100.0)]
    max_age: f32,

    #[arg(long, default_value = "Love Can't Count")]
    title: String,

    #[arg(long, default_value = "AGE GAP OF ACTORS IN HOLLYWOOD MOVIES")]
    subtitle: String,
}

impl Args {
    fn into_config(self) -> ChartConfig {
        ChartConfig {
            dataset: self.dataset,
            categories: CategoryKeys::new(self.first_category, self.second_category),
            column_titles: [self.first_title, self.second_title],
            column_fractions: [self.first_column, self.second_column],
            max_age: self.max_age,
            title: self.title,
            subtitle: self.subtitle,
        }
    }
}

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Args::parse().into_config();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1280.0, 860.0]),
        ..Default::default()
    };

    eframe::run_native(
        "age-gap-plot",
        options,
        Box::new(move |cc| Ok(Box::new(app::AgeGapApp::new(cc, config)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_chart_config_defaults() {
        let config = Args::parse_from(["age-gap-plot"]).into_config();
        let defaults = ChartConfig::default();

        assert_eq!(config.dataset, defaults.dataset);
        assert_eq!(config.categories, defaults.categories);
        assert_eq!(config.column_titles, defaults.column_titles);
        assert_eq!(config.column_fractions, defaults.column_fractions);
        assert_eq!(config.max_age, defaults.max_age);
        assert_eq!(config.title, defaults.title);
    }

    #[test]
    fn category_flags_override_keys() {
        let config = Args::parse_from([
            "age-gap-plot",
            "--first-category",
            "female",
            "--second-category",
            "male",
            "--max-age",
            "90",
        ])
        .into_config();

        assert_eq!(config.categories, CategoryKeys::new("female", "male"));
        assert_eq!(config.max_age, 90.0);
    }
}
