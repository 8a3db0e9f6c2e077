//! Variable trace and auxiliary view

use crate::snapshot::Vars;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render traced variables (top) and the auxiliary view (bottom).
///
/// `aux_label` names the secondary structure, e.g. "Merge Buffer"; `None`
/// hides the auxiliary block for algorithms that have none.
pub fn render_trace_pane(
    frame: &mut Frame,
    area: Rect,
    vars: &Vars,
    aux: &[i64],
    aux_label: Option<&str>,
) {
    let chunks = match aux_label {
        Some(_) => Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area),
        None => Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(100)])
            .split(area),
    };

    let var_lines: Vec<Line> = if vars.is_empty() {
        vec![Line::from(Span::styled(
            "No trace yet. Press r to run.",
            Style::default().fg(DEFAULT_THEME.comment),
        ))]
    } else {
        vars.iter()
            .map(|(name, value)| {
                let value_style = if name == "status" {
                    Style::default()
                        .fg(DEFAULT_THEME.success)
                        .add_modifier(Modifier::BOLD)
                } else if value.as_int().is_some() {
                    Style::default().fg(DEFAULT_THEME.number)
                } else {
                    Style::default().fg(DEFAULT_THEME.fg)
                };
                Line::from(vec![
                    Span::styled(format!("{:>12}", name), Style::default().fg(DEFAULT_THEME.primary)),
                    Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
                    Span::styled(value.to_string(), value_style),
                ])
            })
            .collect()
    };

    let vars_block = Block::default()
        .title(" Trace ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));
    frame.render_widget(Paragraph::new(var_lines).block(vars_block), chunks[0]);

    if let Some(label) = aux_label {
        let items: Vec<String> = aux.iter().map(|v| v.to_string()).collect();
        let text = if items.is_empty() {
            Span::styled("(empty)", Style::default().fg(DEFAULT_THEME.comment))
        } else {
            Span::styled(
                format!("[{}]", items.join(", ")),
                Style::default().fg(DEFAULT_THEME.number),
            )
        };
        let aux_block = Block::default()
            .title(format!(" {} ", label))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border));
        frame.render_widget(
            Paragraph::new(Line::from(text))
                .block(aux_block)
                .wrap(Wrap { trim: true }),
            chunks[1],
        );
    }
}
