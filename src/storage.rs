use std::fs;
use std::io;
use std::path::Path;

use crate::models::{SessionState, SliderConfig};

/// 从TOML文件加载配置，文件不存在时回到默认值
pub fn load_config(path: &Path) -> io::Result<SliderConfig> {
    if !path.exists() {
        return Ok(SliderConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: SliderConfig =
        toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    if config.min > config.max {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("取值范围颠倒: min {} > max {}", config.min, config.max),
        ));
    }

    Ok(config)
}

/// 从TOML文件加载会话记录
pub fn load_session(path: &Path) -> io::Result<SessionState> {
    if !path.exists() {
        return Ok(SessionState::default());
    }

    let content = fs::read_to_string(path)?;
    let session: SessionState =
        toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(session)
}

/// 保存会话记录到TOML文件
pub fn save_session(session: &SessionState, path: &Path) -> io::Result<()> {
    let content = toml::to_string_pretty(session)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Bounds;

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, SliderConfig::default());

        let session = load_session(&dir.path().join("session.toml")).unwrap();
        assert_eq!(session.runs, 0);
    }

    #[test]
    fn test_config_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max = 100\nstep = 5\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.bounds(), Bounds { min: 0, max: 100 });
        assert_eq!(config.step, 5);
        assert_eq!(config.initial, None);
    }

    #[test]
    fn test_session_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");

        let mut session = SessionState::default();
        session.touch();
        save_session(&session, &path).unwrap();

        let loaded = load_session(&path).unwrap();
        assert_eq!(loaded.runs, 1);
        assert_eq!(loaded.last_mounted, session.last_mounted);
    }

    #[test]
    fn test_inverted_bounds_config_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "min = 100\nmax = 0\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_corrupt_config_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "min = \"oops\"").unwrap();

        let err = load_config(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
