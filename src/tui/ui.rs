use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::state::AppState;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{EventDetails, EventList, TitleBar};
use crate::tui::mount::TuiMount;
use crate::view::PAGE_TITLE;

const HELP_TEXT: &str = " ↑/↓ Move  Enter Select  Click Select  q Quit ";

/// Screen areas of the page shell.
pub struct PageLayout {
    pub title: Rect,
    pub list: Rect,
    pub details: Rect,
    pub footer: Rect,
}

/// Heading line, two equal columns, help line.
pub fn page_layout(area: Rect) -> PageLayout {
    use Constraint::{Length, Min, Percentage};
    let [title, main, footer] = Layout::vertical([Length(1), Min(0), Length(1)]).areas(area);
    let [list, details] = Layout::horizontal([Percentage(50), Percentage(50)])
        .spacing(1)
        .areas(main);
    PageLayout {
        title,
        list,
        details,
        footer,
    }
}

pub fn draw_ui(frame: &mut Frame, state: &AppState, mount: &TuiMount, tui: &mut TuiState) {
    let layout = page_layout(frame.area());

    TitleBar::new(PAGE_TITLE.to_string(), status_text(state)).render(frame, layout.title);

    tui.event_list.set_row_count(mount.row_count());
    EventList::new(&mut tui.event_list, mount.event_list.as_ref()).render(frame, layout.list);

    EventDetails::new(mount.event_details.as_ref()).render(frame, layout.details);

    frame.render_widget(
        Line::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        layout.footer,
    );
}

fn status_text(state: &AppState) -> String {
    match state.events.len() {
        0 => String::new(),
        1 => "1 event".to_string(),
        n => format!("{n} events"),
    }
}
