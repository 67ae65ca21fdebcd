use artbox::{
    Alignment as ArtAlignment, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Padding, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::state::WeatherResult;
use crate::theme::{Theme, temperature_colors};

/// Border rows plus city, description, humidity and wind.
const CARD_FIXED_ROWS: u16 = 6;

pub struct ResultCard;

pub struct ResultCardProps<'a> {
    pub weather: &'a WeatherResult,
    pub theme: &'a Theme,
}

impl ResultCard {
    pub fn height(theme: &Theme) -> u16 {
        CARD_FIXED_ROWS + theme.temperature_rows
    }
}

impl Component<Action> for ResultCard {
    type Props<'a> = ResultCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let ResultCardProps { weather, theme } = props;

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.muted))
            .padding(Padding::horizontal(2))
            .style(Style::default().bg(theme.card_bg).fg(theme.text));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [city_area, temp_area, desc_area, humidity_area, wind_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(theme.temperature_rows),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let line = |text: String, style: Style| {
            Paragraph::new(Line::styled(text, style)).alignment(theme.card_alignment)
        };

        frame.render_widget(
            line(
                weather.city_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            city_area,
        );

        let temperature = weather.temperature_label();
        if theme.temperature_rows > 1 {
            let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
                .with_plain_fallback()
                .with_alignment(ArtAlignment::Center)
                .with_fill(temperature_gradient(weather.temperature_celsius));
            frame.render_widget(ArtBox::new(&renderer, &temperature), temp_area);
        } else {
            frame.render_widget(
                line(temperature, Style::default().add_modifier(Modifier::BOLD)),
                temp_area,
            );
        }

        frame.render_widget(
            line(weather.description_label(), Style::default()),
            desc_area,
        );
        frame.render_widget(
            line(
                format!("Humedad: {}", weather.humidity_label()),
                Style::default(),
            ),
            humidity_area,
        );
        frame.render_widget(
            line(format!("Viento: {}", weather.wind_label()), Style::default()),
            wind_area,
        );
    }
}

fn temperature_gradient(celsius: f64) -> Fill {
    let (start, end) = temperature_colors(celsius);
    Fill::Linear(LinearGradient::horizontal(start, end))
}
