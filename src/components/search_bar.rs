use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;
use crate::state::Focus;
use crate::theme::{SearchLayout, Theme};

pub const PLACEHOLDER: &str = "Busca una ciudad...";
pub const BUTTON_LABEL: &str = "Buscar";

/// City input plus the "Buscar" button
pub struct SearchBar {
    input: TextInput,
}

pub struct SearchBarProps<'a> {
    pub city: &'a str,
    pub focus: Focus,
    pub is_focused: bool,
    pub theme: &'a Theme,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
        }
    }
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows the bar needs for a given layout.
    pub fn height(layout: SearchLayout) -> u16 {
        match layout {
            SearchLayout::Row => 3,
            SearchLayout::Stacked => 6,
        }
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused || props.focus != Focus::Input {
            return Vec::new();
        }

        let input_props = TextInputProps {
            value: props.city,
            placeholder: PLACEHOLDER,
            is_focused: true,
            style: input_style(props.theme),
            on_change: Action::CityChange,
            on_submit: submit_lookup,
            on_cursor_move: Some(ui_render),
        };
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let theme = props.theme;
        let [input_area, button_area] = match theme.search_layout {
            SearchLayout::Row => {
                Layout::horizontal([Constraint::Fill(1), Constraint::Length(12)])
                    .spacing(1)
                    .areas(area)
            }
            SearchLayout::Stacked => {
                Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).areas(area)
            }
        };

        let input_focused = props.is_focused && props.focus == Focus::Input;
        let input_block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style(theme, input_focused))
            .style(Style::default().bg(theme.input_bg));
        let inner = input_block.inner(input_area);
        frame.render_widget(input_block, input_area);
        let input_props = TextInputProps {
            value: props.city,
            placeholder: PLACEHOLDER,
            is_focused: input_focused,
            style: input_style(theme),
            on_change: Action::CityChange,
            on_submit: submit_lookup,
            on_cursor_move: Some(ui_render),
        };
        self.input.render(frame, inner, input_props);

        let button_focused = props.is_focused && props.focus == Focus::Button;
        let mut label_style = Style::default()
            .fg(theme.button_fg)
            .add_modifier(Modifier::BOLD);
        if button_focused {
            label_style = label_style.add_modifier(Modifier::UNDERLINED);
        }
        let button = Paragraph::new(Line::styled(BUTTON_LABEL, label_style).centered()).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(border_style(theme, button_focused))
                .style(Style::default().bg(theme.button_bg)),
        );
        frame.render_widget(button, button_area);
    }
}

fn border_style(theme: &Theme, focused: bool) -> Style {
    if focused {
        Style::default().fg(theme.focus)
    } else {
        Style::default().fg(theme.muted)
    }
}

fn input_style(theme: &Theme) -> TextInputStyle {
    TextInputStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::xy(1, 0),
            bg: Some(theme.input_bg),
            fg: Some(theme.text),
        },
        placeholder_style: Some(Style::default().fg(theme.muted)),
        cursor_style: None,
    }
}

fn submit_lookup(_: String) -> Action {
    Action::LookupSubmit
}

fn ui_render(_: usize) -> Action {
    Action::Render
}
