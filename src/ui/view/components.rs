//! 通用 UI 组件
//!
//! 容器元素、对话框、输入框等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
};

/// [组件] 范围控件元素：画成一条量规
pub fn render_range_element(frame: &mut Frame, area: Rect, min: i64, max: i64, value: i64) {
    let span = (max - min).max(1) as f64;
    let ratio = ((value - min) as f64 / span).clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(value.to_string());
    frame.render_widget(gauge, area);
}

/// [组件] 标签元素：居中文本
pub fn render_label_element(frame: &mut Frame, area: Rect, text: &str) {
    let label = Paragraph::new(text.to_string())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .centered();
    frame.render_widget(label, area);
}

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 带有标题和样式的输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    is_focused: bool,
    active_color: Color,
) {
    let style = if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let input = Paragraph::new(value)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(input, area);
}
