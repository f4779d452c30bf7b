//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件；容器里挂了什么就画什么

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::state::{App, AppMode};
use crate::host::Element;
use crate::models::Binding;
use components::{render_dialog_framework, render_input_widget, render_label_element, render_range_element};
use layouts::centered_rect;

pub mod components;
pub mod layouts;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(6),    // 控件容器
            Constraint::Length(6), // 宿主状态
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_surface(frame, app, chunks[1]);
    render_host_panel(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);

    // 渲染弹窗
    if app.mode == AppMode::BindingInput {
        render_bind_dialog(frame, app);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("🎚️ Fader 数值滑块")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

/// 渲染容器里的已挂载元素（按文档顺序）
fn render_surface(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title("控件容器").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let elements: Vec<&Element> = app.container.children().collect();
    if elements.is_empty() {
        let empty = Paragraph::new("（容器为空，控件已卸载）").style(Style::default().fg(Color::Gray));
        frame.render_widget(empty, inner);
        return;
    }

    let constraints: Vec<Constraint> = elements
        .iter()
        .map(|element| match element {
            Element::Range { .. } => Constraint::Length(3),
            Element::Label { .. } => Constraint::Length(1),
        })
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (element, row) in elements.iter().zip(rows.iter()) {
        match element {
            Element::Range { min, max, value } => {
                render_range_element(frame, *row, *min, *max, *value);
            }
            Element::Label { text } => render_label_element(frame, *row, text),
        }
    }
}

fn render_host_panel(frame: &mut Frame, app: &App, area: Rect) {
    let bound = match app.bound_field {
        Some(value) => value.to_string(),
        None => "（未绑定）".to_string(),
    };
    let content = format!(
        "绑定字段: {}\n最近输出: {}\n绑定状态: {}\n范围: [{}, {}]  步进: {}",
        bound,
        app.outputs.value,
        binding_text(app.control.binding()),
        app.config.min,
        app.config.max,
        app.config.step,
    );

    let panel = Paragraph::new(content)
        .block(Block::default().title("宿主状态").borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.mode {
        AppMode::Normal => {
            "[h/l ←/→] 拖动  [b] 重绑定  [u] 清除绑定  [r] 推送刷新  [q] 退出"
        }
        AppMode::BindingInput => "输入数值后按 [Enter] 提交  [Esc] 取消",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_bind_dialog(frame: &mut Frame, app: &App) {
    let area = centered_rect(50, 25, frame.area());
    let inner = render_dialog_framework(frame, area, "重绑定外部值");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    render_input_widget(
        frame,
        chunks[0],
        "绑定值",
        &app.input_buffer,
        true,
        Color::Yellow,
    );

    let hint = Paragraph::new("提交后宿主立即推送刷新；若存在本地编辑，该值不会被采纳")
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(hint, chunks[1]);
}

fn binding_text(binding: Binding) -> String {
    match binding {
        Binding::Unset => "未编辑".to_string(),
        Binding::UserEdited(v) => format!("用户编辑({v})"),
        Binding::HostAdopted(v) => format!("采纳默认({v})"),
    }
}
