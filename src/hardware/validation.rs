use log::{debug, warn};

use crate::hardware::pins::{CameraPins, GpioPin, SignalRole, BOARD_PINS};

/// ピン配置の検証エラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PinMapError {
    #[error("GPIO{gpio} が {first} と {second} に重複して割り当てられています")]
    DuplicatePin {
        gpio: u8,
        first: SignalRole,
        second: SignalRole,
    },
    #[error("{role} に割り当てられた GPIO{gpio} はESP32に存在しません")]
    NonexistentGpio { role: SignalRole, gpio: u8 },
    #[error("{role} は出力が必要ですが GPIO{gpio} は入力専用です")]
    InputOnlyGpio { role: SignalRole, gpio: u8 },
    #[error("無効なピン番号です: {0}")]
    InvalidRawPin(i32),
}

/// ESP32 (無印) に存在するGPIOか
pub const fn gpio_exists(gpio: u8) -> bool {
    matches!(gpio, 0..=19 | 21..=23 | 25..=27 | 32..=39)
}

/// GPIO34-39 は入力専用 (出力ドライバ・プルアップなし)
pub const fn is_input_only(gpio: u8) -> bool {
    matches!(gpio, 34..=39)
}

/// `validate` と同じ検査を const 文脈で行う
pub const fn is_consistent(pins: &CameraPins) -> bool {
    let roles = SignalRole::ALL;
    let mut i = 0;
    while i < roles.len() {
        let role = roles[i];
        if let GpioPin::Connected(gpio) = pins.pin(role) {
            if !gpio_exists(gpio) {
                return false;
            }
            if is_input_only(gpio) && role.direction().drives_line() {
                return false;
            }
            let mut j = i + 1;
            while j < roles.len() {
                if let GpioPin::Connected(other) = pins.pin(roles[j]) {
                    if other == gpio {
                        return false;
                    }
                }
                j += 1;
            }
        }
        i += 1;
    }
    true
}

// 配線ミスはビルド時に検出する
const _: () = assert!(is_consistent(&BOARD_PINS), "BOARD_PINS is miswired");

/// ピン配置を検証し、最初に見つかった違反を返します
pub fn validate(pins: &CameraPins) -> Result<(), PinMapError> {
    let result = find_violation(pins);
    match &result {
        Ok(()) => debug!("ピン配置の検証に成功しました"),
        Err(e) => warn!("ピン配置の検証に失敗しました: {}", e),
    }
    result
}

fn find_violation(pins: &CameraPins) -> Result<(), PinMapError> {
    let assigned: Vec<(SignalRole, u8)> = pins
        .iter()
        .filter_map(|(role, pin)| pin.number().map(|gpio| (role, gpio)))
        .collect();

    for (index, &(role, gpio)) in assigned.iter().enumerate() {
        if !gpio_exists(gpio) {
            return Err(PinMapError::NonexistentGpio { role, gpio });
        }
        if is_input_only(gpio) && role.direction().drives_line() {
            return Err(PinMapError::InputOnlyGpio { role, gpio });
        }
        if let Some(&(second, _)) = assigned[index + 1..].iter().find(|(_, other)| *other == gpio) {
            return Err(PinMapError::DuplicatePin {
                gpio,
                first: role,
                second,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::pins::AI_THINKER_PINS;

    #[test]
    fn test_board_pins_are_valid() {
        assert!(validate(&BOARD_PINS).is_ok());
        assert!(is_consistent(&BOARD_PINS));
    }

    #[test]
    fn test_ai_thinker_pins_are_valid() {
        assert!(validate(&AI_THINKER_PINS).is_ok());
    }

    #[test]
    fn test_duplicate_pin_detected() {
        let pins = CameraPins {
            pclk: GpioPin::Connected(21),
            ..BOARD_PINS
        };
        assert_eq!(
            validate(&pins),
            Err(PinMapError::DuplicatePin {
                gpio: 21,
                first: SignalRole::ExternalClock,
                second: SignalRole::PixelClock,
            })
        );
        assert!(!is_consistent(&pins));
    }

    #[test]
    fn test_not_connected_may_repeat() {
        let pins = CameraPins {
            y2: GpioPin::NotConnected,
            ..BOARD_PINS
        };
        assert!(validate(&pins).is_ok());
    }

    #[test]
    fn test_nonexistent_gpio_detected() {
        let pins = CameraPins {
            href: GpioPin::Connected(24),
            ..BOARD_PINS
        };
        assert_eq!(
            validate(&pins),
            Err(PinMapError::NonexistentGpio {
                role: SignalRole::HorizontalReference,
                gpio: 24,
            })
        );
        assert!(!is_consistent(&pins));
    }

    #[test]
    fn test_input_only_gpio_for_output_detected() {
        let pins = CameraPins {
            pwdn: GpioPin::Connected(32),
            xclk: GpioPin::Connected(37),
            ..BOARD_PINS
        };
        assert_eq!(
            validate(&pins),
            Err(PinMapError::InputOnlyGpio {
                role: SignalRole::ExternalClock,
                gpio: 37,
            })
        );
    }

    #[test]
    fn test_gpio_tables() {
        assert!(gpio_exists(0));
        assert!(gpio_exists(39));
        assert!(!gpio_exists(20));
        assert!(!gpio_exists(28));
        assert!(!gpio_exists(40));
        assert!(is_input_only(34));
        assert!(!is_input_only(33));
    }

    #[test]
    fn test_error_message() {
        let err = PinMapError::InvalidRawPin(-5);
        assert_eq!(err.to_string(), "無効なピン番号です: -5");
    }
}
