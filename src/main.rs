use std::fs;
use std::io;
use std::path::PathBuf;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use fader::logger::init_file_logger;
use fader::storage::{load_config, load_session, save_session};
use fader::ui::{self, App, render};

/// 获取数据目录路径 (~/.local/share/fader/)
fn get_data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户数据目录"))?
        .join("fader");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

fn main() -> io::Result<()> {
    let data_dir = get_data_dir()?;

    // TUI 独占终端，日志落盘 (~/.local/share/fader/fader.log)
    init_file_logger(&data_dir.join("fader.log"))?;

    // 配置与会话记录
    let config = load_config(&data_dir.join("config.toml"))?;
    let session_path = data_dir.join("session.toml");
    let mut session = load_session(&session_path)?;
    session.touch();

    // 创建应用状态（挂载控件）
    let mut app = App::new(config, &session);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // 卸载控件并记录会话
    app.teardown();
    save_session(&session, &session_path)?;
    println!("会话已记录到 {}", session_path.display());

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            if key.kind == crossterm::event::KeyEventKind::Press {
                if ui::handle_key_event(app, key.code)? {
                    break;
                }
            }
        }
    }
    Ok(())
}
