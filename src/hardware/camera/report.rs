use log::info;

use crate::hardware::pins::CameraPins;

/// ピン配置を1行ずつの文字列にする (`XCLK  -> GPIO21`)
pub fn pin_report(pins: &CameraPins) -> Vec<String> {
    pins.iter()
        .map(|(role, pin)| format!("{:<6}-> {}", role.label(), pin))
        .collect()
}

/// 基準ボードとの差分を1行ずつの文字列にする (`Y2    : GPIO4 (基準: GPIO5)`)
pub fn difference_report(pins: &CameraPins, reference: &CameraPins) -> Vec<String> {
    pins.differences(reference)
        .into_iter()
        .map(|(role, ours, theirs)| format!("{:<6}: {} (基準: {})", role.label(), ours, theirs))
        .collect()
}

/// ピン配置をログに出力
pub fn log_pin_map(board_label: &str, pins: &CameraPins) {
    info!("カメラピン配置 ({})", board_label);
    for line in pin_report(pins) {
        info!("  {}", line);
    }
}
