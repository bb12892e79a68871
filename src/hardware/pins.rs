use std::fmt;

use crate::hardware::validation::{gpio_exists, PinMapError};

/// カメラインターフェースの信号ロール
///
/// パラレルカメラ (DVP) 接続に必要な16本の論理信号。
/// 物理ピン番号はボードごとに異なるため、ロールとは分けて管理する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalRole {
    PowerDown,
    Reset,
    ExternalClock,
    I2cData,
    I2cClock,
    Data9,
    Data8,
    Data7,
    Data6,
    Data5,
    Data4,
    Data3,
    Data2,
    VerticalSync,
    HorizontalReference,
    PixelClock,
}

impl SignalRole {
    /// 全ロール（ピン定義ヘッダと同じ並び）
    pub const ALL: [SignalRole; 16] = [
        SignalRole::PowerDown,
        SignalRole::Reset,
        SignalRole::ExternalClock,
        SignalRole::I2cData,
        SignalRole::I2cClock,
        SignalRole::Data9,
        SignalRole::Data8,
        SignalRole::Data7,
        SignalRole::Data6,
        SignalRole::Data5,
        SignalRole::Data4,
        SignalRole::Data3,
        SignalRole::Data2,
        SignalRole::VerticalSync,
        SignalRole::HorizontalReference,
        SignalRole::PixelClock,
    ];

    /// カメラドライバで慣例的に使われる信号名 (`XCLK_GPIO_NUM` の `XCLK` 部分)
    pub const fn label(self) -> &'static str {
        match self {
            SignalRole::PowerDown => "PWDN",
            SignalRole::Reset => "RESET",
            SignalRole::ExternalClock => "XCLK",
            SignalRole::I2cData => "SIOD",
            SignalRole::I2cClock => "SIOC",
            SignalRole::Data9 => "Y9",
            SignalRole::Data8 => "Y8",
            SignalRole::Data7 => "Y7",
            SignalRole::Data6 => "Y6",
            SignalRole::Data5 => "Y5",
            SignalRole::Data4 => "Y4",
            SignalRole::Data3 => "Y3",
            SignalRole::Data2 => "Y2",
            SignalRole::VerticalSync => "VSYNC",
            SignalRole::HorizontalReference => "HREF",
            SignalRole::PixelClock => "PCLK",
        }
    }

    /// MCU側から見た信号の向き
    pub const fn direction(self) -> PinDirection {
        match self {
            SignalRole::PowerDown | SignalRole::Reset | SignalRole::ExternalClock => {
                PinDirection::Output
            }
            // SCCB (I2C互換) はオープンドレインの双方向
            SignalRole::I2cData | SignalRole::I2cClock => PinDirection::Bidirectional,
            _ => PinDirection::Input,
        }
    }
}

impl fmt::Display for SignalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 信号の向き
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinDirection {
    Input,
    Output,
    Bidirectional,
}

impl PinDirection {
    /// MCUがラインを駆動する必要があるか
    pub const fn drives_line(self) -> bool {
        !matches!(self, PinDirection::Input)
    }
}

/// ピン割り当て
///
/// 未配線の信号は `NotConnected` で表し、有効なGPIO番号と混同しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GpioPin {
    Connected(u8),
    NotConnected,
}

impl GpioPin {
    /// esp32-camera ドライバが「未接続」として扱う値
    pub const NOT_CONNECTED_RAW: i32 = -1;

    /// ドライバに渡す生のピン番号 (未接続は -1)
    pub const fn as_raw(self) -> i32 {
        match self {
            GpioPin::Connected(gpio) => gpio as i32,
            GpioPin::NotConnected => Self::NOT_CONNECTED_RAW,
        }
    }

    /// 生のピン番号から変換します
    ///
    /// # エラー
    ///
    /// -1 以外の負数、または `u8` に収まらない値の場合は `PinMapError::InvalidRawPin` を返します
    pub fn from_raw(raw: i32) -> Result<Self, PinMapError> {
        if raw == Self::NOT_CONNECTED_RAW {
            return Ok(GpioPin::NotConnected);
        }
        u8::try_from(raw)
            .map(GpioPin::Connected)
            .map_err(|_| PinMapError::InvalidRawPin(raw))
    }

    pub const fn number(self) -> Option<u8> {
        match self {
            GpioPin::Connected(gpio) => Some(gpio),
            GpioPin::NotConnected => None,
        }
    }

    pub const fn is_connected(self) -> bool {
        matches!(self, GpioPin::Connected(_))
    }
}

impl fmt::Display for GpioPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpioPin::Connected(gpio) => write!(f, "GPIO{}", gpio),
            GpioPin::NotConnected => f.write_str("not connected"),
        }
    }
}

/// カメラピン設定構造体
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraPins {
    pub pwdn: GpioPin,
    pub reset: GpioPin,
    pub xclk: GpioPin,
    pub siod: GpioPin,
    pub sioc: GpioPin,
    pub y9: GpioPin,
    pub y8: GpioPin,
    pub y7: GpioPin,
    pub y6: GpioPin,
    pub y5: GpioPin,
    pub y4: GpioPin,
    pub y3: GpioPin,
    pub y2: GpioPin,
    pub vsync: GpioPin,
    pub href: GpioPin,
    pub pclk: GpioPin,
}

impl CameraPins {
    /// ロールに割り当てられたピンを取得
    pub const fn pin(&self, role: SignalRole) -> GpioPin {
        match role {
            SignalRole::PowerDown => self.pwdn,
            SignalRole::Reset => self.reset,
            SignalRole::ExternalClock => self.xclk,
            SignalRole::I2cData => self.siod,
            SignalRole::I2cClock => self.sioc,
            SignalRole::Data9 => self.y9,
            SignalRole::Data8 => self.y8,
            SignalRole::Data7 => self.y7,
            SignalRole::Data6 => self.y6,
            SignalRole::Data5 => self.y5,
            SignalRole::Data4 => self.y4,
            SignalRole::Data3 => self.y3,
            SignalRole::Data2 => self.y2,
            SignalRole::VerticalSync => self.vsync,
            SignalRole::HorizontalReference => self.href,
            SignalRole::PixelClock => self.pclk,
        }
    }

    /// 全ロールと割り当てを `SignalRole::ALL` の順に列挙
    pub fn iter(&self) -> impl Iterator<Item = (SignalRole, GpioPin)> + '_ {
        SignalRole::ALL
            .into_iter()
            .map(move |role| (role, self.pin(role)))
    }

    /// パラレルデータ線 (D0-D7 = Y2-Y9)
    pub const fn data_pins(&self) -> [GpioPin; 8] {
        [
            self.y2, self.y3, self.y4, self.y5, self.y6, self.y7, self.y8, self.y9,
        ]
    }

    /// 接続済みピンのビットマスク (`gpio_config_t::pin_bit_mask` 用)
    ///
    /// ESP32に存在しないGPIO番号はマスクに含めない (`validate` で検出される)
    pub fn connected_pin_mask(&self) -> u64 {
        self.iter()
            .filter_map(|(_, pin)| pin.number())
            .filter(|&gpio| gpio_exists(gpio))
            .fold(0u64, |mask, gpio| mask | (1u64 << gpio))
    }

    /// 別ボードとの差分 (ロール, 自分, 相手)
    pub fn differences(&self, other: &CameraPins) -> Vec<(SignalRole, GpioPin, GpioPin)> {
        self.iter()
            .filter_map(|(role, pin)| {
                let theirs = other.pin(role);
                (pin != theirs).then_some((role, pin, theirs))
            })
            .collect()
    }
}

/// カスタムESP32-CAMボードのピン配置
///
/// PWDN / RESET はこのリビジョンでは未配線。
/// Y2 は標準のESP32-CAM (GPIO5) と異なり GPIO4。
pub const BOARD_PINS: CameraPins = CameraPins {
    pwdn: GpioPin::NotConnected,
    reset: GpioPin::NotConnected,
    xclk: GpioPin::Connected(21),
    siod: GpioPin::Connected(26),
    sioc: GpioPin::Connected(27),
    y9: GpioPin::Connected(35),
    y8: GpioPin::Connected(34),
    y7: GpioPin::Connected(39),
    y6: GpioPin::Connected(36),
    y5: GpioPin::Connected(19),
    y4: GpioPin::Connected(18),
    y3: GpioPin::Connected(5),
    y2: GpioPin::Connected(4),
    vsync: GpioPin::Connected(25),
    href: GpioPin::Connected(23),
    pclk: GpioPin::Connected(22),
};

/// 標準のAI-Thinker ESP32-CAMのピン配置（比較用）
pub const AI_THINKER_PINS: CameraPins = CameraPins {
    pwdn: GpioPin::Connected(32),
    reset: GpioPin::NotConnected,
    xclk: GpioPin::Connected(0),
    siod: GpioPin::Connected(26),
    sioc: GpioPin::Connected(27),
    y9: GpioPin::Connected(35),
    y8: GpioPin::Connected(34),
    y7: GpioPin::Connected(39),
    y6: GpioPin::Connected(36),
    y5: GpioPin::Connected(21),
    y4: GpioPin::Connected(19),
    y3: GpioPin::Connected(18),
    y2: GpioPin::Connected(5),
    vsync: GpioPin::Connected(25),
    href: GpioPin::Connected(23),
    pclk: GpioPin::Connected(22),
};

/// C互換のピン番号定数 (`BOARD_PINS` から生成)
pub mod raw {
    use super::BOARD_PINS;

    pub const PWDN_GPIO_NUM: i32 = BOARD_PINS.pwdn.as_raw();
    pub const RESET_GPIO_NUM: i32 = BOARD_PINS.reset.as_raw();
    pub const XCLK_GPIO_NUM: i32 = BOARD_PINS.xclk.as_raw();
    pub const SIOD_GPIO_NUM: i32 = BOARD_PINS.siod.as_raw();
    pub const SIOC_GPIO_NUM: i32 = BOARD_PINS.sioc.as_raw();
    pub const Y9_GPIO_NUM: i32 = BOARD_PINS.y9.as_raw();
    pub const Y8_GPIO_NUM: i32 = BOARD_PINS.y8.as_raw();
    pub const Y7_GPIO_NUM: i32 = BOARD_PINS.y7.as_raw();
    pub const Y6_GPIO_NUM: i32 = BOARD_PINS.y6.as_raw();
    pub const Y5_GPIO_NUM: i32 = BOARD_PINS.y5.as_raw();
    pub const Y4_GPIO_NUM: i32 = BOARD_PINS.y4.as_raw();
    pub const Y3_GPIO_NUM: i32 = BOARD_PINS.y3.as_raw();
    pub const Y2_GPIO_NUM: i32 = BOARD_PINS.y2.as_raw();
    pub const VSYNC_GPIO_NUM: i32 = BOARD_PINS.vsync.as_raw();
    pub const HREF_GPIO_NUM: i32 = BOARD_PINS.href.as_raw();
    pub const PCLK_GPIO_NUM: i32 = BOARD_PINS.pclk.as_raw();
}
