//! Orthographic camera for 3D axes.

use std::f64::consts::FRAC_PI_2;

/// Point in normalized plot space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Point3 {
    /// Create a point.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Camera on a sphere around the origin, looking at it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Rotation around the z axis, in radians.
    pub azimuth: f64,
    /// Angle above the xy plane, in radians.
    pub elevation: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            azimuth: (-60.0_f64).to_radians(),
            elevation: 30.0_f64.to_radians(),
        }
    }
}

impl Camera {
    /// Rotate by the given angles, keeping the elevation within the poles.
    pub fn rotate(&mut self, d_azimuth: f64, d_elevation: f64) {
        self.azimuth = (self.azimuth + d_azimuth).rem_euclid(std::f64::consts::TAU);
        self.elevation = (self.elevation + d_elevation).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    /// Screen coordinates of `p`.
    pub fn project(&self, p: Point3) -> (f64, f64) {
        let (sa, ca) = self.azimuth.sin_cos();
        let (se, ce) = self.elevation.sin_cos();

        // Right vector: (-sin(a), cos(a), 0)
        let screen_x = -p.x * sa + p.y * ca;
        // Up vector: (-cos(a)*sin(e), -sin(a)*sin(e), cos(e))
        let screen_y = -p.x * ca * se - p.y * sa * se + p.z * ce;

        (screen_x, screen_y)
    }

    /// Distance along the view direction. Larger is further away.
    pub fn depth(&self, p: Point3) -> f64 {
        let (sa, ca) = self.azimuth.sin_cos();
        let (se, ce) = self.elevation.sin_cos();
        -(p.x * ce * ca + p.y * ce * sa + p.z * se)
    }
}

/// Unit normal of the triangle `v0 v1 v2`, or `+z` when degenerate.
pub fn triangle_normal(v0: Point3, v1: Point3, v2: Point3) -> [f64; 3] {
    let (ux, uy, uz) = (v1.x - v0.x, v1.y - v0.y, v1.z - v0.z);
    let (vx, vy, vz) = (v2.x - v0.x, v2.y - v0.y, v2.z - v0.z);
    let nx = uy * vz - uz * vy;
    let ny = uz * vx - ux * vz;
    let nz = ux * vy - uy * vx;
    let len = (nx * nx + ny * ny + nz * nz).sqrt();
    if len < 1e-15 {
        [0.0, 0.0, 1.0]
    } else {
        [nx / len, ny / len, nz / len]
    }
}

/// Ambient plus two-sided diffuse light intensity for a face normal.
pub fn light_intensity(normal: [f64; 3]) -> f64 {
    const LIGHT: [f64; 3] = [0.4, -0.5, 0.76];
    const AMBIENT: f64 = 0.35;

    let len = (LIGHT[0] * LIGHT[0] + LIGHT[1] * LIGHT[1] + LIGHT[2] * LIGHT[2]).sqrt();
    let dot = (normal[0] * LIGHT[0] + normal[1] * LIGHT[1] + normal[2] * LIGHT[2]) / len;
    (AMBIENT + (1.0 - AMBIENT) * dot.abs()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_top_down_view_keeps_plane() {
        let camera = Camera {
            azimuth: -FRAC_PI_2,
            elevation: FRAC_PI_2,
        };
        let (sx, sy) = camera.project(Point3::new(0.3, 0.7, 5.0));
        assert!((sx - 0.3).abs() < EPS);
        assert!((sy - 0.7).abs() < EPS);
    }

    #[test]
    fn test_higher_points_are_closer_from_above() {
        let camera = Camera::default();
        assert!(camera.depth(Point3::new(0.0, 0.0, 1.0)) < camera.depth(Point3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_elevation_is_clamped() {
        let mut camera = Camera::default();
        camera.rotate(0.0, 10.0);
        assert_eq!(camera.elevation, FRAC_PI_2);
        camera.rotate(0.0, -10.0);
        assert_eq!(camera.elevation, -FRAC_PI_2);
    }

    #[test]
    fn test_flat_face_normal() {
        let n = triangle_normal(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        assert_eq!(n, [0.0, 0.0, 1.0]);
        let intensity = light_intensity(n);
        assert!(intensity > 0.35 && intensity <= 1.0);
    }
}
