use indicatif::{ProgressBar, ProgressStyle};

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} classes ({eta}) {msg}";

/// Progress tracker for displaying progress during scanning
#[derive(Debug, Default)]
pub struct ProgressTracker {
    /// Whether a bar may be drawn at all
    enabled: bool,
}

impl ProgressTracker {
    /// Create a new progress tracker
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Run `operation` over every item in order, stopping at the first error
    pub fn track_progress<T, R, E, F>(&self, items: &[T], mut operation: F) -> Result<Vec<R>, E>
    where
        F: FnMut(&T) -> Result<R, E>,
    {
        // Small datasets finish before a bar is worth drawing
        let progress_bar = if self.enabled && items.len() > 10 {
            let pb = ProgressBar::new(items.len() as u64);
            let style = ProgressStyle::default_bar()
                .template(PROGRESS_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-");
            pb.set_style(style);
            pb.set_message("Analyzing dataset's content...");
            Some(pb)
        } else {
            None
        };

        let mut results = Vec::with_capacity(items.len());
        for item in items {
            match operation(item) {
                Ok(result) => results.push(result),
                Err(e) => {
                    if let Some(pb) = &progress_bar {
                        pb.abandon_with_message("Scan failed");
                    }
                    return Err(e);
                }
            }
            if let Some(pb) = &progress_bar {
                pb.inc(1);
            }
        }

        if let Some(pb) = progress_bar {
            pb.finish_with_message("Scan complete");
        }

        Ok(results)
    }
}
