use std::str::FromStr;

use log::LevelFilter;

/// アプリケーション設定
///
/// この構造体はビルド時に`cfg.toml`ファイルから読み込まれた設定を保持します。
/// ピン配置はボード固有の定数であり、ここには含めません。
#[toml_cfg::toml_config]
pub struct Config {
    #[default("custom-esp32-cam")]
    board_label: &'static str,

    #[default(true)]
    halt_on_invalid_pin_map: bool,

    #[default("info")]
    log_level: &'static str,
}

/// 設定エラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board_label が設定されていません")]
    MissingBoardLabel,
    #[error("無効なログレベル: {0}")]
    InvalidLogLevel(String),
}

/// アプリケーション設定を表す構造体
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 起動時レポートに表示するボード名
    pub board_label: String,

    /// ピン配置の検証に失敗した場合に起動を中止するか
    pub halt_on_invalid_pin_map: bool,

    /// ログレベル
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// 設定ファイルから設定をロードします
    pub fn load() -> Result<Self, ConfigError> {
        // toml_cfg によって生成された定数
        let config = CONFIG;
        Self::from_values(
            config.board_label,
            config.halt_on_invalid_pin_map,
            config.log_level,
        )
    }

    fn from_values(
        board_label: &str,
        halt_on_invalid_pin_map: bool,
        log_level: &str,
    ) -> Result<Self, ConfigError> {
        let board_label = validate_board_label(board_label)?;
        let log_level = parse_log_level(log_level)?;

        Ok(AppConfig {
            board_label: board_label.to_string(),
            halt_on_invalid_pin_map,
            log_level,
        })
    }
}

pub fn validate_board_label(label: &str) -> Result<&str, ConfigError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        Err(ConfigError::MissingBoardLabel)
    } else {
        Ok(trimmed)
    }
}

pub fn parse_log_level(value: &str) -> Result<LevelFilter, ConfigError> {
    LevelFilter::from_str(value.trim()).map_err(|_| ConfigError::InvalidLogLevel(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults() {
        // cfg.toml が無い場合はデフォルト値
        let config = AppConfig::load().unwrap();
        assert_eq!(config.board_label, "custom-esp32-cam");
        assert!(config.halt_on_invalid_pin_map);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_from_values() {
        let config = AppConfig::from_values(" rev-b ", false, "DEBUG").unwrap();
        assert_eq!(config.board_label, "rev-b");
        assert!(!config.halt_on_invalid_pin_map);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_empty_board_label() {
        assert_eq!(validate_board_label("  "), Err(ConfigError::MissingBoardLabel));
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("info"), Ok(LevelFilter::Info));
        assert_eq!(parse_log_level("off"), Ok(LevelFilter::Off));
        assert_eq!(
            parse_log_level("verbose"),
            Err(ConfigError::InvalidLogLevel("verbose".to_string()))
        );
    }
}
