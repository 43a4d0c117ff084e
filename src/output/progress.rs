use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use super::styling::{bright, bright_green, bright_yellow};

/// Progress tracking for the fetch and render phases
pub struct PhaseProgress {
    pb: ProgressBar,
}

impl PhaseProgress {
    pub fn start_fetch_run() -> Self {
        eprintln!("{}  {}", bright("⚙️"), bright("Phases").underlined());
        let pb = create_spinner(bright_yellow("Phase 1/3: Fetching run metadata").to_string());
        Self { pb }
    }

    pub fn finish_fetch_run_start_jobs(self) -> Self {
        self.pb
            .finish_with_message(bright_green("Phase 1/3: Fetched run metadata ✓").to_string());
        let pb = create_spinner(bright_yellow("Phase 2/3: Fetching jobs").to_string());
        Self { pb }
    }

    pub fn finish_jobs_start_render(self) -> Self {
        self.pb
            .finish_with_message(bright_green("Phase 2/3: Fetched jobs ✓").to_string());
        let pb = create_spinner(bright_yellow("Phase 3/3: Rendering summary").to_string());
        Self { pb }
    }

    pub fn finish_render(self) {
        self.pb
            .finish_with_message(bright_green("Phase 3/3: Summary rendered ✓").to_string());
        eprintln!("\n");
    }
}

fn create_spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_draw_target(ProgressDrawTarget::stderr());
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {msg} {spinner}")
            .unwrap(),
    );
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
