use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::LineGauge;

use crate::tui::component::Component;

/// Frames for one sweep of the indeterminate bar.
const SWEEP_FRAMES: usize = 24;

/// Indeterminate progress bar shown while the mode catalog loads.
pub struct ProgressBar<'a> {
    label: &'a str,
    frame_index: usize,
}

impl<'a> ProgressBar<'a> {
    pub fn new(label: &'a str, frame_index: usize) -> Self {
        Self { label, frame_index }
    }

    /// Fill ratio for the current frame: sweeps 0 to 1, then restarts.
    fn ratio(&self) -> f64 {
        (self.frame_index % SWEEP_FRAMES) as f64 / (SWEEP_FRAMES - 1) as f64
    }
}

impl Component for ProgressBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [_, row, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, bar, _] = Layout::horizontal([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .areas(row);

        let gauge = LineGauge::default()
            .filled_style(Style::default().fg(Color::Cyan))
            .unfilled_style(Style::default().fg(Color::DarkGray))
            .label(self.label)
            .ratio(self.ratio());
        frame.render_widget(gauge, bar);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_ratio_wraps() {
        assert_eq!(ProgressBar::new("", 0).ratio(), 0.0);
        assert_eq!(ProgressBar::new("", SWEEP_FRAMES - 1).ratio(), 1.0);
        assert_eq!(ProgressBar::new("", SWEEP_FRAMES).ratio(), 0.0);
    }

    #[test]
    fn test_render_label() {
        let mut terminal = Terminal::new(TestBackend::new(80, 5)).unwrap();
        terminal
            .draw(|f| ProgressBar::new("Loading modes...", 5).render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Loading modes..."));
    }
}
