use esp32_cam_pins::hardware::{difference_report, log_pin_map, AI_THINKER_PINS};
use esp32_cam_pins::{validate, AppConfig, DriverPinConfig, BOARD_PINS};
use log::{error, info, warn};

/// 起動時にカメラピン配置を出力・検証する
fn main() -> anyhow::Result<()> {
    // ESP-IDFの基本初期化
    esp_idf_sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    // 設定ファイル読み込み
    let app_config = AppConfig::load().map_err(|e| {
        error!("設定ファイルの読み込みに失敗しました: {}", e);
        anyhow::anyhow!("設定ファイルの読み込みエラー: {}", e)
    })?;
    log::set_max_level(app_config.log_level);

    log_pin_map(&app_config.board_label, &BOARD_PINS);
    // 標準のESP32-CAMと配線が異なるピンを明示する
    for line in difference_report(&BOARD_PINS, &AI_THINKER_PINS) {
        info!("標準ESP32-CAMとの差分: {}", line);
    }
    info!("ドライバ設定: {:?}", DriverPinConfig::from(&BOARD_PINS));

    match validate(&BOARD_PINS) {
        Ok(()) => info!("✓ カメラピン配置は有効です"),
        Err(e) if app_config.halt_on_invalid_pin_map => {
            return Err(anyhow::anyhow!("カメラピン配置が無効です: {}", e));
        }
        Err(e) => warn!("カメラピン配置が無効ですが続行します: {}", e),
    }

    Ok(())
}
