use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// 打开日志文件：追加模式，历史会话的日志保留
fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// 初始化写入文件的日志订阅器
///
/// TUI 独占终端，日志只能落盘；用 `FADER_LOG` 覆盖默认过滤级别。
pub fn init_file_logger(path: &Path) -> io::Result<()> {
    let file = open_log_file(path)?;

    let filter =
        EnvFilter::try_from_env("FADER_LOG").unwrap_or_else(|_| EnvFilter::new("fader=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_target(false)
                .compact(),
        )
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_log_file_appends_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fader.log");

        let mut first = open_log_file(&path).unwrap();
        writeln!(first, "第一次会话").unwrap();
        drop(first);

        let mut second = open_log_file(&path).unwrap();
        writeln!(second, "第二次会话").unwrap();
        drop(second);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("第一次会话"));
        assert!(content.contains("第二次会话"));
    }
}
