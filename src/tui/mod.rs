//! Ratatui-based dashboard.
//!
//! A sidebar menu switches between three pages:
//! - Explanations: background text and the textbook curve
//! - Charts: a country multi-select and one Phillips curve per selected country
//! - Sources: where the data comes from
//!
//! Charts are rebuilt from scratch (fetch + fit) whenever the Charts page is
//! opened, the selection changes, or `r` is pressed.

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use tracing::info;

use crate::app::pipeline::{ChartOutcome, charts_for};
use crate::cli::TuiArgs;
use crate::data::{DbnomicsClient, SeriesProvider, TheoryCurve, theory::THEORY_SEED, theory_curve};
use crate::domain::{ChartSpec, Country};
use crate::error::AppError;

mod content;
mod plotters_chart;
mod state;

pub use state::{Action, DashboardState, Focus, Page};

use plotters_chart::{PhillipsPlot, SCATTER_COLOR, THEORY_COLOR, TREND_COLOR};

/// Start the dashboard.
pub fn run(args: TuiArgs) -> Result<(), AppError> {
    let logo = load_logo(args.logo.as_deref())?;
    let provider = DbnomicsClient::from_env()?;

    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(provider, logo);
    app.event_loop(&mut terminal)
}

fn load_logo(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| AppError::new(2, format!("Failed to read logo '{}': {e}", path.display()))),
        None => Ok(content::DEFAULT_LOGO.to_string()),
    }
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, SetTitle(content::WINDOW_TITLE)) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App<P> {
    state: DashboardState,
    provider: P,
    logo: String,
    theory: TheoryCurve,
    charts: Vec<(Country, ChartOutcome)>,
    status: String,
}

impl<P: SeriesProvider> App<P> {
    fn new(provider: P, logo: String) -> Self {
        Self {
            state: DashboardState::default(),
            provider,
            logo,
            theory: theory_curve(THEORY_SEED),
            charts: Vec::new(),
            status: "Ready.".to_string(),
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                self.redraw(terminal)?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                        break;
                    }
                    match self.state.handle_key(key.code) {
                        Action::Quit => break,
                        Action::Refresh => {
                            // Show the fetch status before blocking on the network.
                            self.status = "Fetching DBnomics data...".to_string();
                            self.redraw(terminal)?;
                            self.refresh_charts();
                        }
                        Action::None => {}
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn redraw<B: ratatui::backend::Backend>(&self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        terminal
            .draw(|f| self.draw(f))
            .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
        Ok(())
    }

    fn refresh_charts(&mut self) {
        let selected = self.state.selected_countries();
        self.charts = charts_for(&self.provider, &selected);

        let ready = self.charts.iter().filter(|(_, o)| o.chart().is_some()).count();
        info!(selected = selected.len(), ready, "charts refreshed");
        self.status = format!("{ready}/{} chart(s) ready.", selected.len());
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let header_height = self.logo.lines().count() as u16 + 3;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_height),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = self
            .logo
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Cyan))))
            .collect();
        lines.push(Line::from(Span::styled(
            content::PAGE_TITLE,
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(20), Constraint::Min(0)])
            .split(area);

        self.draw_menu(frame, chunks[0]);
        match self.state.page {
            Page::Explanations => self.draw_explanations(frame, chunks[1]),
            Page::Charts => self.draw_charts(frame, chunks[1]),
            Page::Sources => self.draw_sources(frame, chunks[1]),
        }
    }

    fn draw_menu(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items: Vec<ListItem> = Page::ALL
            .iter()
            .enumerate()
            .map(|(i, page)| ListItem::new(format!("{} {}", i + 1, page.label())))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title("Menu")
                    .borders(Borders::ALL)
                    .border_style(focus_style(self.state.focus == Focus::Menu)),
            )
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        state.select(Some(self.state.page.index()));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_explanations(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let mut lines = Vec::new();
        for para in content::EXPLANATIONS {
            lines.push(Line::from(*para));
            lines.push(Line::from(""));
        }
        let text = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Explanations").borders(Borders::ALL));
        frame.render_widget(text, chunks[0]);

        let theory = &self.theory;
        let (x_bounds, y_bounds) = plotters_chart::bounds([&theory.points[..]]);
        draw_plot_block(
            frame,
            chunks[1],
            &theory.title,
            PhillipsPlot {
                line: &theory.points,
                points: &theory.points,
                line_color: THEORY_COLOR,
                point_color: THEORY_COLOR,
                x_bounds,
                y_bounds,
                x_label: &theory.x_label,
                y_label: &theory.y_label,
            },
        );
    }

    fn draw_charts(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.draw_country_selector(frame, chunks[0]);

        if self.charts.is_empty() {
            let msg = if self.state.selected_countries().is_empty() {
                "Select at least one country (Tab, then ←/→ and Space)."
            } else {
                "Press r to load charts."
            };
            let p = Paragraph::new(msg)
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(p, chunks[1]);
            return;
        }

        let n = self.charts.len() as u32;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, n); self.charts.len()])
            .split(chunks[1]);

        for ((country, outcome), &rect) in self.charts.iter().zip(rows.iter()) {
            match outcome {
                ChartOutcome::Ready(chart) => draw_country_chart(frame, rect, chart),
                ChartOutcome::NoData { reason, .. } => {
                    draw_message(frame, rect, country, format!("No data to display: {reason}"), Color::Yellow);
                }
                ChartOutcome::Failed { reason, .. } => {
                    draw_message(frame, rect, country, format!("Could not load data: {reason}"), Color::Red);
                }
            }
        }
    }

    fn draw_country_selector(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let focused = self.state.focus == Focus::Content;
        let mut spans = Vec::new();
        for (i, country) in Country::ALL.iter().enumerate() {
            let mark = if self.state.is_selected(*country) { "[x]" } else { "[ ]" };
            let mut style = Style::default();
            if focused && i == self.state.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!("{mark} {}", country.display_name()), style));
            spans.push(Span::raw("   "));
        }

        let p = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title("Select Country")
                .borders(Borders::ALL)
                .border_style(focus_style(focused)),
        );
        frame.render_widget(p, area);
    }

    fn draw_sources(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines = vec![
            Line::from(vec![
                Span::styled("DBnomics", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
                Span::raw(" sources."),
            ]),
            Line::from(""),
        ];
        for (label, url) in content::sources() {
            lines.push(Line::from(vec![
                Span::styled(format!("{label}: "), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(url, Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED)),
            ]));
        }

        let p = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Sources").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = match self.state.focus {
            Focus::Menu => "↑/↓ page  1-3 jump  Tab countries  r reload  q quit",
            Focus::Content => "←/→ country  Space toggle  Esc menu  r reload  q quit",
        };
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn draw_country_chart(frame: &mut ratatui::Frame<'_>, area: Rect, chart: &ChartSpec) {
    let scatter = chart.scatter_xy();
    let trend = chart.trend_xy();
    let (x_bounds, y_bounds) = plotters_chart::bounds([&scatter[..], &trend[..]]);
    let title = format!("{}  (· observed, ─ {})", chart.title, chart.trend_name);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let periods = Paragraph::new(period_labels(chart)).style(Style::default().fg(Color::Gray));
    frame.render_widget(periods, chunks[1]);

    draw_plot_block(
        frame,
        chunks[0],
        &title,
        PhillipsPlot {
            line: &trend,
            points: &scatter,
            line_color: TREND_COLOR,
            point_color: SCATTER_COLOR,
            x_bounds,
            y_bounds,
            x_label: &chart.x_label,
            y_label: &chart.y_label,
        },
    );
}

/// `period (u, π)` for every plotted point, in scatter order.
fn period_labels(chart: &ChartSpec) -> String {
    chart
        .scatter
        .iter()
        .map(|p| format!("{} ({:.1}, {:.1})", p.label, p.x, p.y))
        .collect::<Vec<_>>()
        .join("  ")
}

fn draw_plot_block(frame: &mut ratatui::Frame<'_>, area: Rect, title: &str, plot: PhillipsPlot<'_>) {
    let block = Block::default().title(title.to_string()).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Clear, inner);
    frame.render_widget(plot, inner);
}

fn draw_message(frame: &mut ratatui::Frame<'_>, area: Rect, country: &Country, msg: String, color: Color) {
    let p = Paragraph::new(msg)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(country.display_name()).borders(Borders::ALL));
    frame.render_widget(p, area);
}

fn focus_style(focused: bool) -> Style {
    if focused { Style::default().fg(Color::Yellow) } else { Style::default() }
}
