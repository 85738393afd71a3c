//! Numeric labels for vectors and matrices
//!
//! Values are printed with two decimals, one value per column.

use mt3_math::{Matrix4x4, Vector3};
use serde::{Deserialize, Serialize};

use crate::DrawSurface;

/// Pixel spacing for label tables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelLayout {
    /// Horizontal distance between value columns
    pub column_width: i32,
    /// Vertical distance between rows
    pub row_height: i32,
}

impl Default for LabelLayout {
    fn default() -> Self {
        Self {
            column_width: 60,
            row_height: 20,
        }
    }
}

/// Print `x y z label` on one row starting at `(x, y)`
pub fn vector_screen_printf<S: DrawSurface + ?Sized>(
    surface: &mut S,
    layout: &LabelLayout,
    x: i32,
    y: i32,
    vector: &Vector3,
    label: &str,
) {
    let cw = layout.column_width;
    surface.screen_print(x, y, &format!("{:.2}", vector.x));
    surface.screen_print(x + cw, y, &format!("{:.2}", vector.y));
    surface.screen_print(x + cw * 2, y, &format!("{:.2}", vector.z));
    surface.screen_print(x + cw * 3, y, label);
}

/// Print a scalar and its label on one row starting at `(x, y)`
pub fn scalar_screen_printf<S: DrawSurface + ?Sized>(
    surface: &mut S,
    layout: &LabelLayout,
    x: i32,
    y: i32,
    value: f32,
    label: &str,
) {
    surface.screen_print(x, y, &format!("{:.2}", value));
    surface.screen_print(x + layout.column_width, y, label);
}

/// Print the label at `(x, y)` and the 4x4 values on the four rows below
pub fn matrix_screen_printf<S: DrawSurface + ?Sized>(
    surface: &mut S,
    layout: &LabelLayout,
    x: i32,
    y: i32,
    matrix: &Matrix4x4,
    label: &str,
) {
    surface.screen_print(x, y, label);
    for (row, values) in matrix.m.iter().enumerate() {
        let row_y = y + (row as i32 + 1) * layout.row_height;
        for (col, value) in values.iter().enumerate() {
            surface.screen_print(x + col as i32 * layout.column_width, row_y, &format!("{:6.2}", value));
        }
    }
}
