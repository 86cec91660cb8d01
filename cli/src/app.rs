use costarpath_core::{GraphStore, LoadError, load_dataset_with_report};
use indicatif::{ProgressBar, ProgressStyle};
use std::{error::Error, path::PathBuf, time::Duration};
use tracing::debug;

pub struct CostarPathApp {
    pub data_dir: PathBuf,
}

impl CostarPathApp {
    pub fn new(data_dir: PathBuf) -> Result<Self, Box<dyn Error>> {
        if !data_dir.is_dir() {
            return Err(format!("Data path does not exist: {:?}", data_dir).into());
        }
        Ok(Self { data_dir })
    }

    pub fn load_data(&self, show_progress: bool) -> Result<GraphStore, LoadError> {
        let spinner = show_progress.then(|| {
            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
                spinner.set_style(style);
            }
            spinner.set_message(format!("Loading data from {}...", self.data_dir.display()));
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner
        });

        let loaded = load_dataset_with_report(&self.data_dir);

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        let (store, report) = loaded?;
        debug!(?report, "load report");
        Ok(store)
    }
}
