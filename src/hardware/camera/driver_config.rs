use crate::hardware::pins::CameraPins;

/// esp32-camera の `camera_config_t` と同じ並びのピン設定
///
/// 未接続の信号は -1 となり、ドライバ側で設定がスキップされる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverPinConfig {
    pub pin_pwdn: i32,
    pub pin_reset: i32,
    pub pin_xclk: i32,
    pub pin_sccb_sda: i32,
    pub pin_sccb_scl: i32,
    pub pin_d7: i32,
    pub pin_d6: i32,
    pub pin_d5: i32,
    pub pin_d4: i32,
    pub pin_d3: i32,
    pub pin_d2: i32,
    pub pin_d1: i32,
    pub pin_d0: i32,
    pub pin_vsync: i32,
    pub pin_href: i32,
    pub pin_pclk: i32,
}

impl From<&CameraPins> for DriverPinConfig {
    fn from(pins: &CameraPins) -> Self {
        Self {
            pin_pwdn: pins.pwdn.as_raw(),
            pin_reset: pins.reset.as_raw(),
            pin_xclk: pins.xclk.as_raw(),
            pin_sccb_sda: pins.siod.as_raw(),
            pin_sccb_scl: pins.sioc.as_raw(),
            pin_d7: pins.y9.as_raw(),
            pin_d6: pins.y8.as_raw(),
            pin_d5: pins.y7.as_raw(),
            pin_d4: pins.y6.as_raw(),
            pin_d3: pins.y5.as_raw(),
            pin_d2: pins.y4.as_raw(),
            pin_d1: pins.y3.as_raw(),
            pin_d0: pins.y2.as_raw(),
            pin_vsync: pins.vsync.as_raw(),
            pin_href: pins.href.as_raw(),
            pin_pclk: pins.pclk.as_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::pins::BOARD_PINS;

    #[test]
    fn test_driver_config_from_board_pins() {
        let config = DriverPinConfig::from(&BOARD_PINS);

        assert_eq!(config.pin_pwdn, -1);
        assert_eq!(config.pin_reset, -1);
        assert_eq!(config.pin_xclk, 21);
        assert_eq!(config.pin_sccb_sda, 26);
        assert_eq!(config.pin_sccb_scl, 27);
        assert_eq!(
            [
                config.pin_d0, config.pin_d1, config.pin_d2, config.pin_d3,
                config.pin_d4, config.pin_d5, config.pin_d6, config.pin_d7,
            ],
            [4, 5, 18, 19, 36, 39, 34, 35]
        );
        assert_eq!(config.pin_vsync, 25);
        assert_eq!(config.pin_href, 23);
        assert_eq!(config.pin_pclk, 22);
    }
}
