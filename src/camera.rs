//! Exercise camera
//!
//! The camera is an affine transform like any other object. Its world matrix
//! is `scale · rotate · translate`; the view matrix is the inverse of that.

use mt3_math::{MathError, Matrix4x4, Vector3};

use crate::config::CameraConfig;

/// Per-frame camera change supplied by the host
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraInput {
    /// Added to the camera position (world space)
    pub translate_delta: Vector3,
    /// Added to the Euler angles in radians
    pub rotate_delta: Vector3,
}

/// Camera state: scale, Euler rotation and position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub scale: Vector3,
    pub rotate: Vector3,
    pub translate: Vector3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl Camera {
    pub fn new(scale: Vector3, rotate: Vector3, translate: Vector3) -> Self {
        Self { scale, rotate, translate }
    }

    /// Camera at the configured starting pose
    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(config.scale(), config.rotate(), config.translate())
    }

    /// Camera-to-world transform
    pub fn world_matrix(&self) -> Matrix4x4 {
        Matrix4x4::make_affine(self.scale, self.rotate, self.translate)
    }

    /// World-to-camera transform
    pub fn view_matrix(&self) -> Result<Matrix4x4, MathError> {
        self.world_matrix().inverse()
    }

    /// View · perspective projection
    pub fn view_projection(
        &self,
        aspect: f32,
        fov_y: f32,
        near: f32,
        far: f32,
    ) -> Result<Matrix4x4, MathError> {
        let projection = Matrix4x4::make_perspective_fov(fov_y, aspect, near, far);
        Ok(self.view_matrix()? * projection)
    }

    /// Direction the camera looks along (its local +Z)
    pub fn forward(&self) -> Vector3 {
        Matrix4x4::make_rotate(self.rotate).transform_normal(Vector3::Z)
    }

    /// Apply one frame of input
    pub fn apply(&mut self, input: CameraInput) {
        self.translate += input.translate_delta;
        self.rotate += input.rotate_delta;
        if input != CameraInput::default() {
            log::trace!(
                "camera moved to {:?}, rotation {:?}",
                self.translate,
                self.rotate
            );
        }
    }
}
