//! Interactive Atmospheric Temperature Explorer
//!
//! Terminal frontend for the temperature-vs-altitude chart. Renders the
//! full scene from `atmo-chart-core` and drives its view-state machine
//! from keyboard and mouse events.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package demo-interactive
//! ```
//!
//! # Controls
//!
//! - `Up` / `Down`   - Move marker focus to the next higher / lower altitude
//! - `Enter` / Space - Select the focused marker
//! - Left click      - Select the marker under the cursor
//! - `u`             - Toggle between Celsius and Fahrenheit
//! - `r`             - Reset the selection
//! - `q` / `Esc`     - Quit
//!
//! Set `ATMO_LOG` (an `env_filter` directive) to write a log file next to
//! the binary; the terminal itself stays clean.

use atmo_chart_core::{
    focus_down, focus_up, layer_for_altitude, layer_summaries, scale, spawn_decor_loader,
    tooltip_content, DecorGroup, DecorShape, Scene, Vec2, ViewState, ANNOUNCEMENT_LIFETIME,
    DEFAULT_DECOR, PLACEHOLDER_PROMPT, TEMPERATURE_PROFILE,
};
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::crossterm::execute;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine, Rectangle};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap};
use ratatui::{DefaultTerminal, Frame};
use std::io;
use std::sync::mpsc::Receiver;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::info;

fn main() -> io::Result<()> {
    init_logging();

    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;
    let result = App::new().run(&mut terminal);
    execute!(io::stdout(), DisableMouseCapture)?;
    ratatui::restore();
    result
}

/// Route logs to a file when `ATMO_LOG` is set; the TUI owns the terminal.
fn init_logging() {
    if std::env::var_os("ATMO_LOG").is_none() {
        return;
    }
    let Ok(file) = std::fs::File::create("demo-interactive.log") else {
        return;
    };
    let filter = tracing_subscriber::EnvFilter::try_from_env("ATMO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
}

struct App {
    view: ViewState,
    /// Marker currently holding input focus (keyboard traversal target).
    focused: usize,
    /// Marker whose tooltip is showing, if any. Display-only state.
    tooltip: Option<usize>,
    decor: Vec<DecorGroup>,
    decor_rx: Receiver<DecorGroup>,
    announcement: Option<(String, Instant)>,
    scene: Scene,
    /// Chart inner area from the last draw, for mouse hit-testing.
    chart_area: Rect,
}

impl App {
    fn new() -> Self {
        let view = ViewState::default();
        let scene = Scene::build(&view, &[]);
        App {
            view,
            focused: 0,
            tooltip: None,
            decor: Vec::new(),
            decor_rx: spawn_decor_loader(&DEFAULT_DECOR),
            announcement: None,
            scene,
            chart_area: Rect::default(),
        }
    }

    fn run(mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        info!("atmospheric temperature explorer started");
        loop {
            self.merge_decor();
            self.expire_announcement();
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            break;
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }
        }
        info!("atmospheric temperature explorer closed");
        Ok(())
    }

    /// Drain any decorative groups the background loader has delivered.
    fn merge_decor(&mut self) {
        let mut merged = false;
        while let Ok(group) = self.decor_rx.try_recv() {
            info!(id = group.id, shapes = group.shapes.len(), "decor merged into scene");
            self.decor.push(group);
            merged = true;
        }
        if merged {
            self.rebuild_scene();
        }
    }

    fn expire_announcement(&mut self) {
        let expired = self
            .announcement
            .as_ref()
            .is_some_and(|(_, since)| since.elapsed() >= ANNOUNCEMENT_LIFETIME);
        if expired {
            self.announcement = None;
        }
    }

    fn rebuild_scene(&mut self) {
        self.scene = Scene::build(&self.view, &self.decor);
    }

    /// Returns true when the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up => {
                self.focused = focus_up(self.focused);
                self.tooltip = Some(self.focused);
            }
            KeyCode::Down => {
                self.focused = focus_down(self.focused);
                self.tooltip = Some(self.focused);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.focused),
            KeyCode::Char('u') => {
                self.view.toggle_unit();
                self.rebuild_scene();
            }
            KeyCode::Char('r') => self.view.reset(),
            KeyCode::Char('q') | KeyCode::Esc => return true,
            _ => {}
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let hit = self
            .pixel_of_cell(mouse.column, mouse.row)
            .and_then(|(px, py)| self.hit_marker(px, py));
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = hit {
                    self.focused = index;
                    self.select(index);
                }
            }
            MouseEventKind::Moved => {
                // Pointer-leave hides the tooltip; hovering a marker shows it.
                self.tooltip = hit;
            }
            _ => {}
        }
    }

    fn select(&mut self, index: usize) {
        let announcement = self.view.select(index);
        self.announcement = Some((announcement.text, Instant::now()));
    }

    /// Convert a terminal cell to drawing-surface pixels, if inside the chart.
    fn pixel_of_cell(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        let area = self.chart_area;
        if area.width == 0 || area.height == 0 || !area.contains(Position::new(column, row)) {
            return None;
        }
        let px = (f64::from(column - area.x) + 0.5) / f64::from(area.width) * scale::SURFACE_WIDTH;
        let py = (f64::from(row - area.y) + 0.5) / f64::from(area.height) * scale::SURFACE_HEIGHT;
        Some((px, py))
    }

    /// Convert a surface pixel position to the nearest terminal cell.
    fn cell_of_pixel(&self, position: Vec2) -> (u16, u16) {
        let area = self.chart_area;
        let col = f64::from(area.x)
            + position.x / scale::SURFACE_WIDTH * f64::from(area.width.max(1));
        let row = f64::from(area.y)
            + position.y / scale::SURFACE_HEIGHT * f64::from(area.height.max(1));
        (col as u16, row as u16)
    }

    /// Nearest marker within roughly one terminal cell of the pixel position.
    fn hit_marker(&self, px: f64, py: f64) -> Option<usize> {
        let tol_x = (scale::SURFACE_WIDTH / f64::from(self.chart_area.width.max(1))).max(12.0);
        let tol_y = (scale::SURFACE_HEIGHT / f64::from(self.chart_area.height.max(1))).max(12.0);
        self.scene
            .markers
            .iter()
            .filter(|marker| {
                (marker.position.x - px).abs() <= tol_x && (marker.position.y - py).abs() <= tol_y
            })
            .min_by(|a, b| {
                let da = (a.position - Vec2::new(px, py)).norm_squared();
                let db = (b.position - Vec2::new(px, py)).norm_squared();
                da.total_cmp(&db)
            })
            .map(|marker| marker.index)
    }

    fn draw(&mut self, frame: &mut Frame) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(20), Constraint::Length(1), Constraint::Length(1)])
            .split(frame.area());
        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(outer[0]);
        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(main[1]);

        self.draw_chart(frame, main[0]);
        self.draw_details(frame, side[0]);
        self.draw_table(frame, side[1]);
        self.draw_footer(frame, outer[1]);
        self.draw_announcement(frame, outer[2]);
        self.draw_tooltip(frame);
    }

    fn draw_chart(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Atmospheric Temperature Profile")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.chart_area = inner;

        // Approximate pixel width of one terminal cell, for text anchoring.
        let char_px = scale::SURFACE_WIDTH / f64::from(inner.width.max(1));
        let flip = |y: f64| scale::SURFACE_HEIGHT - y;
        let scene = &self.scene;
        let selected = self.view.selected;
        let focused = self.focused;

        let canvas = Canvas::default()
            .marker(symbols::Marker::Braille)
            .x_bounds([0.0, scale::SURFACE_WIDTH])
            .y_bounds([0.0, scale::SURFACE_HEIGHT])
            .paint(|ctx| {
                for line in &scene.grid_lines {
                    ctx.draw(&CanvasLine {
                        x1: line.from.x,
                        y1: flip(line.from.y),
                        x2: line.to.x,
                        y2: flip(line.to.y),
                        color: Color::DarkGray,
                    });
                }
                for line in &scene.axes {
                    ctx.draw(&CanvasLine {
                        x1: line.from.x,
                        y1: flip(line.from.y),
                        x2: line.to.x,
                        y2: flip(line.to.y),
                        color: Color::White,
                    });
                }
                for band in &scene.bands {
                    let tint = Color::Rgb(band.color_rgb[0], band.color_rgb[1], band.color_rgb[2]);
                    ctx.draw(&Rectangle {
                        x: band.origin.x,
                        y: flip(band.origin.y + band.size.y),
                        width: band.size.x,
                        height: band.size.y,
                        color: tint,
                    });
                    let anchor = band.label.position;
                    ctx.print(
                        anchor.x,
                        flip(anchor.y),
                        TextLine::from(Span::styled(band.label.text.clone(), Style::default().fg(tint))),
                    );
                }
                for line in &scene.boundary_lines {
                    ctx.draw(&CanvasLine {
                        x1: line.from.x,
                        y1: flip(line.from.y),
                        x2: line.to.x,
                        y2: flip(line.to.y),
                        color: Color::Gray,
                    });
                }
                for pair in scene.curve.windows(2) {
                    ctx.draw(&CanvasLine {
                        x1: pair[0].x,
                        y1: flip(pair[0].y),
                        x2: pair[1].x,
                        y2: flip(pair[1].y),
                        color: Color::Red,
                    });
                }
                for label in &scene.axis_labels {
                    // Middle-anchored text.
                    let width = label.text.chars().count() as f64 * char_px;
                    ctx.print(
                        label.position.x - width / 2.0,
                        flip(label.position.y),
                        TextLine::from(Span::styled(
                            label.text.clone(),
                            Style::default().fg(Color::Gray),
                        )),
                    );
                }
                for label in &scene.boundary_labels {
                    // End-anchored text in the right gutter.
                    let width = label.text.chars().count() as f64 * char_px;
                    ctx.print(
                        label.position.x - width,
                        flip(label.position.y),
                        TextLine::from(Span::styled(
                            label.text.clone(),
                            Style::default().fg(Color::Gray),
                        )),
                    );
                }
                for group in &scene.decor {
                    for shape in &group.shapes {
                        let (center, radius) = match shape {
                            DecorShape::Circle { center, radius } => (center, *radius),
                            DecorShape::Ellipse { center, radii } => (center, (radii.x + radii.y) / 2.0),
                        };
                        ctx.draw(&Circle {
                            x: center.x,
                            y: flip(center.y),
                            radius,
                            color: Color::DarkGray,
                        });
                    }
                }
                for marker in &scene.markers {
                    let style = if selected == Some(marker.index) {
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                    } else if focused == marker.index {
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Cyan)
                    };
                    let symbol = if focused == marker.index { "◉" } else { "●" };
                    ctx.print(
                        marker.position.x,
                        flip(marker.position.y),
                        TextLine::from(Span::styled(symbol, style)),
                    );
                }
            });
        frame.render_widget(canvas, inner);
    }

    fn draw_details(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("Layer Details").borders(Borders::ALL);
        let text = if let Some(details) = self.view.selected_details() {
            Text::from(vec![
                TextLine::from(Span::styled(
                    details.layer_name,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                TextLine::from(format!("Altitude: {}", details.altitude_text)),
                TextLine::from(format!("Temperature: {}", details.temperature_text)),
                TextLine::from(format!("Layer Range: {}", details.layer_range_text)),
                TextLine::from(format!("Characteristics: {}", details.characteristics)),
            ])
        } else {
            Text::from(PLACEHOLDER_PROMPT)
        };
        let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn draw_table(&self, frame: &mut Frame, area: Rect) {
        let unit = self.view.unit;
        let selected_layer = self
            .view
            .selected
            .map(|index| layer_for_altitude(TEMPERATURE_PROFILE[index].altitude_km).name);

        let header = Row::new(vec![
            Cell::from("Layer"),
            Cell::from("Altitude"),
            Cell::from("Temp Range"),
            Cell::from("Characteristics"),
        ])
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = layer_summaries().into_iter().map(|summary| {
            let style = if selected_layer == Some(summary.layer.name) {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(summary.layer.name),
                Cell::from(summary.layer.range_text()),
                Cell::from(format!(
                    "{} to {}",
                    unit.format(summary.min_temperature),
                    unit.format(summary.max_temperature)
                )),
                Cell::from(summary.layer.characteristics),
            ])
            .style(style)
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(13),
                Constraint::Length(10),
                Constraint::Length(20),
                Constraint::Min(20),
            ],
        )
        .header(header)
        .column_spacing(1)
        .block(Block::default().title("Layer Data").borders(Borders::ALL));
        frame.render_widget(table, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let focused = &self.scene.markers[self.focused];
        let help = TextLine::from(vec![
            Span::styled("[↑/↓]", Style::default().fg(Color::Yellow)),
            Span::raw(" move  "),
            Span::styled("[Enter/Space]", Style::default().fg(Color::Yellow)),
            Span::raw(" select  "),
            Span::styled("[u]", Style::default().fg(Color::Yellow)),
            Span::raw(format!(" {}  ", self.view.toggle_label())),
            Span::styled("[r]", Style::default().fg(Color::Yellow)),
            Span::raw(" reset  "),
            Span::styled("[q]", Style::default().fg(Color::Yellow)),
            Span::raw(" quit  |  "),
            Span::styled(
                focused.description.clone(),
                Style::default().fg(Color::Gray),
            ),
        ]);
        frame.render_widget(Paragraph::new(help), area);
    }

    fn draw_announcement(&self, frame: &mut Frame, area: Rect) {
        if let Some((text, _)) = &self.announcement {
            let paragraph = Paragraph::new(Span::styled(
                text.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(paragraph, area);
        }
    }

    fn draw_tooltip(&self, frame: &mut Frame) {
        let Some(index) = self.tooltip else {
            return;
        };
        let marker = &self.scene.markers[index];
        let tip = tooltip_content(index, self.view.unit);

        let lines = vec![
            TextLine::from(Span::styled(
                tip.layer_name,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            TextLine::from(tip.altitude_text.clone()),
            TextLine::from(tip.temperature_text.clone()),
        ];
        let width = lines
            .iter()
            .map(TextLine::width)
            .max()
            .unwrap_or(0) as u16
            + 2;
        let height = lines.len() as u16 + 2;

        // Position near the marker, nudged away from the edges.
        let (col, row) = self.cell_of_pixel(marker.position);
        let frame_area = frame.area();
        let x = (col + 2).min(frame_area.width.saturating_sub(width));
        let y = row.saturating_sub(height).min(frame_area.height.saturating_sub(height));
        let popup = Rect::new(x, y, width.min(frame_area.width), height.min(frame_area.height));

        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
            popup,
        );
    }
}
