//! Array pane: one horizontal bar per element, colored by its marker

use crate::snapshot::Markers;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Color for a marker label
pub fn marker_color(label: &str) -> Color {
    match label {
        "Swap" | "Swapped" | "X" | "TRUE" => DEFAULT_THEME.error,
        "Found" | "Sorted" | "Sorted Pivot" | "Placed" | "Ok" | "FALSE" => DEFAULT_THEME.success,
        "Pivot" | "Mid" | "Max" | "Largest" | "Min" | "Key" => DEFAULT_THEME.secondary,
        "?" | "Target" | "Process" | "Update" | "Push" => DEFAULT_THEME.warning,
        _ => DEFAULT_THEME.primary,
    }
}

/// Render the data view. Scrolls so the first marked element stays visible.
pub fn render_array_pane(
    frame: &mut Frame,
    area: Rect,
    data: &[i64],
    markers: &Markers,
    scroll: &mut usize,
) {
    let block = Block::default()
        .title(format!(" Array ({} items) ", data.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    // index + value + label columns, the rest is bar
    let bar_width = (area.width as usize).saturating_sub(2 + 4 + 6 + 14).max(1);
    let max_abs = data.iter().map(|v| v.unsigned_abs()).max().unwrap_or(0).max(1);

    if let Some(first) = markers.iter().map(|(i, _)| i).min() {
        if first < *scroll || first >= *scroll + visible_height {
            *scroll = first.saturating_sub(visible_height / 2);
        }
    }
    *scroll = (*scroll).min(data.len().saturating_sub(visible_height));

    let lines: Vec<Line> = data
        .iter()
        .enumerate()
        .skip(*scroll)
        .take(visible_height)
        .map(|(idx, &value)| {
            let label = markers.get(idx);
            let color = label.map_or(DEFAULT_THEME.bar, marker_color);
            let len = ((value.unsigned_abs() as u128 * bar_width as u128) / max_abs as u128) as usize;

            let mut spans = vec![
                Span::styled(format!("{:>3} ", idx), Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled("█".repeat(len.max(1)), Style::default().fg(color)),
                Span::styled(format!(" {:>5}", value), Style::default().fg(DEFAULT_THEME.number)),
            ];
            if let Some(label) = label {
                spans.push(Span::styled(
                    format!(" {}", label),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
