/// FrustumParams — the six off-center frustum extents.
///
/// Extents are camera-local: `left`/`right` along +X and `bottom`/`top`
/// along +Y, measured on the near plane at distance `near` in front of
/// the eye. Values are validated at construction, so every
/// `FrustumParams` can be turned into a matrix without dividing by zero.

use glam::{Mat4, Vec3, Vec4};
use crate::error::{Error, Result};

/// Validated off-center frustum.
///
/// Invariants: all values finite, `right > left`, `top > bottom`,
/// `0 < near < far`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumParams {
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
}

impl FrustumParams {
    /// Create validated frustum parameters.
    ///
    /// # Errors
    ///
    /// `Error::DegenerateFrustum` if any value is non-finite, `near <= 0`,
    /// `right <= left`, `top <= bottom` or `far <= near`.
    pub fn new(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Result<Self> {
        let values = [left, right, bottom, top, near, far];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::DegenerateFrustum(format!(
                "non-finite extents (l={}, r={}, b={}, t={}, n={}, f={})",
                left, right, bottom, top, near, far
            )));
        }
        if near <= 0.0 {
            return Err(Error::DegenerateFrustum(format!(
                "near ({}) must be greater than 0",
                near
            )));
        }
        if right <= left {
            return Err(Error::DegenerateFrustum(format!(
                "right ({}) must be greater than left ({})",
                right, left
            )));
        }
        if top <= bottom {
            return Err(Error::DegenerateFrustum(format!(
                "top ({}) must be greater than bottom ({})",
                top, bottom
            )));
        }
        if far <= near {
            return Err(Error::DegenerateFrustum(format!(
                "far ({}) must be greater than near ({})",
                far, near
            )));
        }

        Ok(Self { left, right, bottom, top, near, far })
    }

    // ===== GETTERS =====

    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn right(&self) -> f32 {
        self.right
    }

    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// Tangents of the four half-angles: (left, right, bottom, top) / near.
    ///
    /// Independent of where the near plane sits, so two frusta with the
    /// same angular extent return the same tangents.
    pub fn tangents(&self) -> Vec4 {
        Vec4::new(self.left, self.right, self.bottom, self.top) / self.near
    }

    /// General (off-center) perspective matrix.
    ///
    /// Rows, with `n`/`f` the near/far distances:
    /// ```text
    /// [ 2n/(r-l)   0          (r+l)/(r-l)   0          ]
    /// [ 0          2n/(t-b)   (t+b)/(t-b)   0          ]
    /// [ 0          0         -(f+n)/(f-n)  -2fn/(f-n)  ]
    /// [ 0          0         -1             0          ]
    /// ```
    /// Maps view space looking down -Z to OpenGL-style clip space.
    pub fn projection_matrix(&self) -> Mat4 {
        let (l, r, b, t, n, f) = (self.left, self.right, self.bottom, self.top, self.near, self.far);

        let x_scale = 2.0 * n / (r - l);
        let y_scale = 2.0 * n / (t - b);
        let skew_x = (r + l) / (r - l);
        let skew_y = (t + b) / (t - b);
        let c = -(f + n) / (f - n);
        let d = -(2.0 * f * n) / (f - n);

        // glam stores columns
        Mat4::from_cols(
            Vec4::new(x_scale, 0.0, 0.0, 0.0),
            Vec4::new(0.0, y_scale, 0.0, 0.0),
            Vec4::new(skew_x, skew_y, c, -1.0),
            Vec4::new(0.0, 0.0, d, 0.0),
        )
    }

    /// Camera-local corners of the frustum cross-section at `depth` along +Z.
    ///
    /// Order: bottom-left, top-left, top-right, bottom-right.
    pub fn corners_at_depth(&self, depth: f32) -> [Vec3; 4] {
        let t = self.tangents() * depth;
        [
            Vec3::new(t.x, t.z, depth),
            Vec3::new(t.x, t.w, depth),
            Vec3::new(t.y, t.w, depth),
            Vec3::new(t.y, t.z, depth),
        ]
    }
}

/// Build an off-center perspective matrix from raw extents.
///
/// # Errors
///
/// Same validation as `FrustumParams::new()`.
pub fn perspective_off_center(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Result<Mat4> {
    Ok(FrustumParams::new(left, right, bottom, top, near, far)?.projection_matrix())
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
