//! Frame rendering system
//!
//! Builds the camera projector for the frame and lets the active exercise
//! draw onto the surface.

use mt3_math::{MathError, Matrix4x4};
use mt3_present::{DrawSurface, LabelLayout, ScreenProjector, WireframeStyle};

use crate::camera::Camera;
use crate::config::{AppConfig, CameraConfig, WindowConfig};
use crate::exercises::{Exercise, Frame};

/// Draws exercises with the configured window, lens and layout
#[derive(Debug, Clone)]
pub struct RenderSystem {
    window: WindowConfig,
    aspect: f32,
    camera_config: CameraConfig,
    labels: LabelLayout,
    style: WireframeStyle,
}

impl RenderSystem {
    /// Create render system from config
    pub fn new(config: &AppConfig) -> Self {
        Self {
            window: config.window.clone(),
            aspect: config.aspect_ratio(),
            camera_config: config.camera.clone(),
            labels: config.labels,
            style: config.wireframe,
        }
    }

    /// Viewport covering the whole window, depth `0..1`
    pub fn viewport(&self) -> Matrix4x4 {
        Matrix4x4::make_viewport(
            0.0,
            0.0,
            self.window.width as f32,
            self.window.height as f32,
            0.0,
            1.0,
        )
    }

    /// World → screen mapping for the camera's current pose
    pub fn projector(&self, camera: &Camera) -> Result<ScreenProjector, MathError> {
        let view_projection = camera.view_projection(
            self.aspect,
            self.camera_config.fov_y,
            self.camera_config.near,
            self.camera_config.far,
        )?;
        Ok(ScreenProjector::new(view_projection, self.viewport()))
    }

    /// Render one frame
    pub fn render(
        &self,
        camera: &Camera,
        exercise: &dyn Exercise,
        surface: &mut dyn DrawSurface,
    ) -> Result<(), MathError> {
        let frame = Frame {
            projector: self.projector(camera)?,
            labels: &self.labels,
            style: &self.style,
        };
        exercise.draw(&frame, surface)
    }
}
