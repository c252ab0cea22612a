//! Chart widgets
//!
//! The expense pie chart is drawn on a braille canvas, one filled sector
//! per category with its percentage printed inside. The balance chart is a
//! plain ratatui line chart.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph,
    },
    Frame,
};

use crate::models::ExpenseCategory;
use crate::reports::{BalanceTrend, ExpenseBreakdown};

/// Pie slice colors, in category order
pub const SLICE_COLORS: [Color; 4] = [
    Color::Rgb(0xff, 0x99, 0x99),
    Color::Rgb(0x66, 0xb3, 0xff),
    Color::Rgb(0x99, 0xff, 0x99),
    Color::Rgb(0xff, 0xcc, 0x99),
];

/// Color used for a category's slice
pub fn slice_color(category: ExpenseCategory) -> Color {
    SLICE_COLORS[category.index()]
}

const RADIUS: f64 = 1.0;
const RADIAL_STEPS: usize = 24;

/// Points filling a sector of the unit circle
fn sector_points(start_deg: f64, sweep_deg: f64) -> Vec<(f64, f64)> {
    let angular_steps = (sweep_deg * 2.0).ceil().max(1.0) as usize;
    let mut points = Vec::with_capacity(angular_steps * RADIAL_STEPS);

    for a in 0..=angular_steps {
        let angle = (start_deg + sweep_deg * a as f64 / angular_steps as f64).to_radians();
        let (sin, cos) = angle.sin_cos();
        for r in 1..=RADIAL_STEPS {
            let radius = RADIUS * r as f64 / RADIAL_STEPS as f64;
            points.push((radius * cos, radius * sin));
        }
    }

    points
}

/// Render the expense pie chart with a legend on the right
pub fn render_pie_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    breakdown: &ExpenseBreakdown,
    symbol: &str,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(30)])
        .split(inner);
    let pie_area = chunks[0];

    // Braille dots are square when a cell is twice as tall as it is wide
    let y_half = RADIUS * 1.1;
    let x_half = if pie_area.height == 0 {
        y_half
    } else {
        y_half * f64::from(pie_area.width) / (2.0 * f64::from(pie_area.height))
    };

    let sectors: Vec<_> = breakdown
        .slices()
        .iter()
        .map(|s| (sector_points(s.start_angle, s.sweep), slice_color(s.category)))
        .collect();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-x_half, x_half])
        .y_bounds([-y_half, y_half])
        .paint(|ctx| {
            for (coords, color) in &sectors {
                ctx.draw(&Points {
                    coords,
                    color: *color,
                });
            }
            ctx.layer();
            for slice in breakdown.slices() {
                let mid = (slice.start_angle + slice.sweep / 2.0).to_radians();
                let (sin, cos) = mid.sin_cos();
                ctx.print(
                    0.6 * cos,
                    0.6 * sin,
                    Span::styled(
                        slice.label(),
                        Style::default()
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });
    frame.render_widget(canvas, pie_area);

    let mut legend: Vec<Line> = breakdown
        .slices()
        .iter()
        .map(|s| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(slice_color(s.category))),
                Span::raw(format!("{:<10}", s.category.name())),
                Span::raw(format!("{:>10} ", s.amount.format_with_symbol(symbol))),
                Span::styled(s.label(), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();
    legend.push(Line::from(""));
    legend.push(Line::from(vec![
        Span::raw(format!("{:<12}", "Total")),
        Span::styled(
            format!("{:>10}", breakdown.total().format_with_symbol(symbol)),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(Paragraph::new(legend), chunks[1]);
}

/// Render the balance history line chart
pub fn render_balance_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    trend: &BalanceTrend,
    symbol: &str,
) {
    let graph_type = if trend.len() > 1 {
        GraphType::Line
    } else {
        GraphType::Scatter
    };

    let dataset = Dataset::default()
        .name("Balance")
        .marker(Marker::Braille)
        .graph_type(graph_type)
        .style(Style::default().fg(Color::Cyan))
        .data(trend.points());

    let [y_low, y_high] = trend.y_bounds();
    let y_labels = vec![
        Span::raw(format_axis_amount(y_low, symbol)),
        Span::raw(format_axis_amount((y_low + y_high) / 2.0, symbol)),
        Span::raw(format_axis_amount(y_high, symbol)),
    ];
    let x_labels: Vec<Span> = trend
        .time_labels("%H:%M:%S")
        .into_iter()
        .map(Span::raw)
        .collect();

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .x_axis(
            Axis::default()
                .title("Time")
                .style(Style::default().fg(Color::Gray))
                .bounds(trend.x_bounds())
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(format!("Balance ({})", symbol))
                .style(Style::default().fg(Color::Gray))
                .bounds([y_low, y_high])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

fn format_axis_amount(value: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, value)
}
