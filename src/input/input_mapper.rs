//! Input mapping from held keys to semantic actions
//!
//! Keys:
//! - W/S: object forward/backward (Z)
//! - A/D: object left/right (X)
//! - I/K: camera forward/backward (Z)
//! - J/L: camera left/right (X)
//! - Q/E: camera turn left/right (Y rotation)
//!
//! The exercise object also spins about Y by `rotate_speed` every frame.

use mt3_math::Vector3;

use crate::camera::CameraInput;
use crate::config::CameraConfig;

/// Actions triggered by a held key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    ObjectForward,
    ObjectBackward,
    ObjectLeft,
    ObjectRight,
    CameraForward,
    CameraBackward,
    CameraLeft,
    CameraRight,
    CameraTurnLeft,
    CameraTurnRight,
}

/// A key with no mapped action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownKey(pub char);

impl std::fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown key '{}' (expected any of wasdijklqe)", self.0)
    }
}

impl std::error::Error for UnknownKey {}

/// Maps keys to actions
pub struct InputMapper;

impl InputMapper {
    /// Map a single key (case-insensitive)
    pub fn map_key(key: char) -> Option<InputAction> {
        match key.to_ascii_lowercase() {
            'w' => Some(InputAction::ObjectForward),
            's' => Some(InputAction::ObjectBackward),
            'a' => Some(InputAction::ObjectLeft),
            'd' => Some(InputAction::ObjectRight),
            'i' => Some(InputAction::CameraForward),
            'k' => Some(InputAction::CameraBackward),
            'j' => Some(InputAction::CameraLeft),
            'l' => Some(InputAction::CameraRight),
            'q' => Some(InputAction::CameraTurnLeft),
            'e' => Some(InputAction::CameraTurnRight),
            _ => None,
        }
    }

    /// Map every key in a string such as `"wd"`
    pub fn map_held(keys: &str) -> Result<Vec<InputAction>, UnknownKey> {
        keys.chars()
            .map(|c| Self::map_key(c).ok_or(UnknownKey(c)))
            .collect()
    }
}

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Camera position and rotation change
    pub camera: CameraInput,
    /// Exercise object translation
    pub movement: Vector3,
    /// Exercise object rotation about Y in radians
    pub spin: f32,
}

impl FrameInput {
    /// Combine held actions into one frame of input
    pub fn from_actions(actions: &[InputAction], config: &CameraConfig) -> Self {
        let step = config.move_speed;
        let mut input = FrameInput {
            spin: config.rotate_speed,
            ..Default::default()
        };

        for action in actions {
            match action {
                InputAction::ObjectForward => input.movement.z += step,
                InputAction::ObjectBackward => input.movement.z -= step,
                InputAction::ObjectLeft => input.movement.x -= step,
                InputAction::ObjectRight => input.movement.x += step,
                InputAction::CameraForward => input.camera.translate_delta.z += step,
                InputAction::CameraBackward => input.camera.translate_delta.z -= step,
                InputAction::CameraLeft => input.camera.translate_delta.x -= step,
                InputAction::CameraRight => input.camera.translate_delta.x += step,
                InputAction::CameraTurnLeft => input.camera.rotate_delta.y -= config.rotate_speed,
                InputAction::CameraTurnRight => input.camera.rotate_delta.y += config.rotate_speed,
            }
        }

        input
    }
}
