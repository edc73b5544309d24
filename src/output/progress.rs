use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress indication for the runner's fixed delay cycles.
pub struct CycleProgress {
    pb: ProgressBar,
}

impl CycleProgress {
    /// Create a bar for `total` cycles, drawn to stderr.
    pub fn start(total: u64) -> Self {
        let pb = ProgressBar::new(total);
        pb.set_draw_target(ProgressDrawTarget::stderr());
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.green/dim} {pos}/{len} [{elapsed_precise}]")
                .unwrap(),
        );
        Self { pb }
    }

    pub fn advance(&self) {
        self.pb.inc(1);
    }

    pub fn finish(self) {
        self.pb.finish();
        eprintln!();
    }
}
