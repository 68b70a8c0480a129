//! Render adapters turning the view state into visible output

use crate::core::error::ClientError;
use crate::core::record::Record;
use crate::core::stats::Counters;
use crate::view::format::format_status;
use std::fmt::{self, Write};

/// Receives every recomputed view from the controller
///
/// Implementations own all presentation concerns; the controller never
/// inspects what they produce.
pub trait RenderAdapter<R: Record> {
    /// Show the filtered and sorted records with the counters
    fn render(&mut self, view: &[R], counters: &Counters);

    /// A fetch was dispatched
    fn render_loading(&mut self) {}

    /// The latest fetch failed; previously rendered records stay valid
    fn render_error(&mut self, error: &ClientError);
}

/// Plain-text renderer: one line per record under a counters line
///
/// Keeps the last frame so callers (and tests) can print or inspect it.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    frame: String,
    frames_rendered: usize,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent output
    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn frames_rendered(&self) -> usize {
        self.frames_rendered
    }

    fn replace_frame(&mut self, frame: String) {
        self.frame = frame;
        self.frames_rendered += 1;
    }
}

/// "Total: 5 | Pending: 2 | Interview: 1"
pub fn counters_line(counters: &Counters) -> String {
    let mut line = format!("Total: {}", counters.total);
    for (name, count) in &counters.by_bucket {
        let _ = write!(line, " | {}: {}", format_status(name), count);
    }
    line
}

impl<R: Record + fmt::Display> RenderAdapter<R> for TextRenderer {
    fn render(&mut self, view: &[R], counters: &Counters) {
        let mut frame = counters_line(counters);
        frame.push('\n');

        if view.is_empty() {
            let resource = R::resource_name();
            if counters.total == 0 {
                let _ = write!(frame, "No {} yet.", resource);
            } else {
                let _ = write!(frame, "No {} match your current filter.", resource);
            }
        } else {
            let cards: Vec<String> = view.iter().map(ToString::to_string).collect();
            frame.push_str(&cards.join("\n"));
        }

        self.replace_frame(frame);
    }

    fn render_loading(&mut self) {
        self.replace_frame(format!("Loading {}...", R::resource_name()));
    }

    fn render_error(&mut self, error: &ClientError) {
        self.replace_frame(format!(
            "Failed to load {}. Please try again. ({})",
            R::resource_name(),
            error
        ));
    }
}
