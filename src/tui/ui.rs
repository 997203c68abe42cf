use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    ModePicker, ProgressBar, ResultPanel, ReviewBanner, SubmitButton, TitleBar, Toast,
};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

/// Editor height when a result shares the screen with it.
const INPUT_HEIGHT_WITH_RESULT: u16 = 8;

pub fn draw_ui(
    frame: &mut Frame,
    app: &App,
    tui: &mut TuiState,
    notice: Option<&str>,
    spinner_frame: usize,
) {
    use Constraint::{Length, Min};
    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    TitleBar::new(app.selected_mode.clone(), app.status_message.clone()).render(frame, title_area);

    // Startup gates everything else: progress, then error banner, then the form
    if app.initializing {
        ProgressBar::new(&app.status_message, spinner_frame).render(frame, main_area);
    } else if let Some(error_msg) = &app.error {
        draw_error_view(frame, main_area, error_msg);
    } else {
        draw_form(frame, main_area, app, tui, spinner_frame);

        if let Some(picker) = tui.mode_picker.as_mut() {
            ModePicker::new(picker, &app.selected_mode).render(frame, main_area);
        }
    }

    if let Some(message) = notice {
        Toast::new(message).render(frame, frame.area());
    }
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error_paragraph = Paragraph::new(error_msg)
        .style(Style::default().fg(Color::Red))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red))
                .title(" ERROR "),
        )
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    frame.render_widget(error_paragraph, area);
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let response = app.shown_response();
    let review = app.review();
    let banner = review.as_ref().map(|r| ReviewBanner::new(r));
    let banner_height = banner.as_ref().map_or(0, |b| b.height(area.width));

    let (input_constraint, result_constraint) = if response.is_some() {
        (Length(INPUT_HEIGHT_WITH_RESULT), Min(3))
    } else {
        (Min(3), Length(0))
    };

    let [mode_area, input_area, submit_area, banner_area, result_area] = Layout::vertical([
        Length(1),
        input_constraint,
        Length(1),
        Length(banner_height),
        result_constraint,
    ])
    .areas(area);

    frame.render_widget(mode_line(app), mode_area);

    tui.input_box.render(frame, input_area);

    SubmitButton::new(
        app.show_submit(),
        app.can_submit(),
        app.is_submitting(),
        spinner_frame,
    )
    .render(frame, submit_area);

    if let Some(mut banner) = banner {
        banner.render(frame, banner_area);
    }

    if let Some(response) = response {
        ResultPanel::new(&response.body, &mut tui.result_scroll).render(frame, result_area);
    }
}

fn mode_line(app: &App) -> Line<'_> {
    let value_style = if app.can_edit() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
        Span::styled("Mode: ", Style::default().fg(Color::Gray)),
        Span::styled(app.selected_mode.as_str(), value_style),
        Span::styled("  (Ctrl+P to change)", Style::default().fg(Color::DarkGray)),
    ])
}
