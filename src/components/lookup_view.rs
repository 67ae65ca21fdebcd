use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, ResultCard, ResultCardProps, SearchBar, SearchBarProps};
use crate::action::Action;
use crate::state::{AppState, Focus};
use crate::theme::Theme;

pub const TITLE: &str = "Clima App";
pub const LOADING_LABEL: &str = "Cargando...";

/// Props for LookupView - read-only view of state
pub struct LookupViewProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole lookup screen: title, search controls, and whatever the
/// state says should sit below them
pub struct LookupView {
    theme: Theme,
    search: SearchBar,
}

impl LookupView {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            search: SearchBar::new(),
        }
    }
}

impl Default for LookupView {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl Component<Action> for LookupView {
    type Props<'a> = LookupViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Esc => return vec![Action::Quit],
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return vec![Action::Quit];
            }
            KeyCode::Tab | KeyCode::BackTab => return vec![Action::UiFocusNext],
            _ => {}
        }

        match props.state.focus {
            Focus::Button => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => vec![Action::LookupSubmit],
                _ => Vec::new(),
            },
            Focus::Input => {
                let search_props = SearchBarProps {
                    city: &props.state.city,
                    focus: props.state.focus,
                    is_focused: true,
                    theme: &self.theme,
                };
                self.search
                    .handle_event(event, search_props)
                    .into_iter()
                    .collect()
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: LookupViewProps<'_>) {
        let state = props.state;
        let theme = &self.theme;
        let search = &mut self.search;

        frame.render_widget(Block::default().style(Style::default().bg(theme.background)), area);

        let [body, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

        // Only sections backed by state get rows; the rest stays blank
        let mut constraints = vec![
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacer
            Constraint::Length(SearchBar::height(theme.search_layout)),
        ];
        if state.loading {
            constraints.push(Constraint::Length(1));
            constraints.push(Constraint::Length(1));
        }
        if state.has_error() {
            constraints.push(Constraint::Length(1));
            constraints.push(Constraint::Length(1));
        }
        if state.weather.is_some() {
            constraints.push(Constraint::Length(1));
            constraints.push(Constraint::Length(ResultCard::height(theme)));
        }
        constraints.push(Constraint::Fill(1));
        let chunks = Layout::vertical(constraints)
            .horizontal_margin(2)
            .vertical_margin(1)
            .split(body);

        let title = Line::from(vec![Span::styled(
            TITLE,
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )]);
        frame.render_widget(Paragraph::new(title), chunks[0]);

        search.render(
            frame,
            chunks[2],
            SearchBarProps {
                city: &state.city,
                focus: state.focus,
                is_focused: props.is_focused,
                theme,
            },
        );

        let mut next = 4;
        if state.loading {
            let spinner = Line::from(vec![
                Span::styled(state.spinner_frame(), Style::default().fg(theme.spinner)),
                Span::raw(" "),
                Span::styled(LOADING_LABEL, Style::default().fg(theme.muted)),
            ])
            .centered();
            frame.render_widget(Paragraph::new(spinner), chunks[next]);
            next += 2;
        }
        if state.has_error() {
            let error = Line::from(vec![Span::styled(
                state.error.as_str(),
                Style::default().fg(theme.error),
            )]);
            frame.render_widget(Paragraph::new(error), chunks[next]);
            next += 2;
        }
        if let Some(weather) = &state.weather {
            let mut card = ResultCard;
            card.render(frame, chunks[next], ResultCardProps { weather, theme });
        }

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            status_area,
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("Enter", "buscar"),
                    StatusBarHint::new("Tab", "foco"),
                    StatusBarHint::new("Esc", "salir"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
