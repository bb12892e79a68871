/// カメラドライバへの受け渡し
///
/// カメラの初期化そのものは外部ドライバ (esp32-camera) が行う。
/// このモジュールはピン配置をドライバの形式に変換し、起動時レポートを出力するだけ。
pub mod driver_config;
pub mod report;

pub use driver_config::DriverPinConfig;
pub use report::{difference_report, log_pin_map, pin_report};
