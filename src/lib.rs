/*!
 * # Custom ESP32-CAM Pin Map Library
 *
 * カスタムESP32-CAMボードのカメラ信号とGPIO番号の対応表
 *
 * ## モジュール構成
 * - `config`: ビルド時設定 (cfg.toml)
 * - `hardware`: ピン配置、検証、カメラドライバへの受け渡し
 */

// 公開モジュール
pub mod config;
pub mod hardware;

pub use config::{AppConfig, ConfigError};
pub use hardware::pins::raw;
pub use hardware::{
    validate, CameraPins, DriverPinConfig, GpioPin, PinMapError, SignalRole, BOARD_PINS,
};

/// ライブラリのバージョン情報
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
