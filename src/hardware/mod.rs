/// ハードウェア定義モジュール
pub mod camera;
pub mod pins;
pub mod validation;

pub use camera::{difference_report, log_pin_map, pin_report, DriverPinConfig};
pub use pins::{CameraPins, GpioPin, PinDirection, SignalRole, AI_THINKER_PINS, BOARD_PINS};
pub use validation::{validate, PinMapError};
