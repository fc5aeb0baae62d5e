use glam::{Mat4, Vec2, Vec3};

/// Perspective camera looking down `-z` by default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width over height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

/// A world point as seen through the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Normalized device coordinates, y up.
    pub ndc: Vec2,
    /// Distance along the view axis.
    pub depth: f32,
}

/// Cursor position in window pixels (y down) to `[-1, 1]` on both axes, y up.
pub fn normalized_pointer(cursor: Vec2, viewport: Vec2) -> Vec2 {
    let uv = cursor / viewport.max(Vec2::ONE);
    Vec2::new(uv.x, -uv.y) * 2. - Vec2::new(1., -1.)
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            position: Vec3::new(0., 0., 5.),
            target: Vec3::ZERO,
            fov_y: 75f32.to_radians(),
            aspect: 1.,
            near: 0.1,
            far: 1000.,
        }
    }
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Camera {
            aspect,
            ..Default::default()
        }
    }
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }
    /// Scale from view-space size at unit depth to NDC height.
    pub fn focal(&self) -> f32 {
        1. / (self.fov_y / 2.).tan()
    }
    /// `None` when the point is behind the near plane or outside the viewport.
    pub fn to_screen(&self, world: Vec3) -> Option<Projected> {
        self.project_with(&self.view(), &self.projection(), world)
    }
    pub(crate) fn project_with(&self, view: &Mat4, projection: &Mat4, world: Vec3) -> Option<Projected> {
        let eye = view.transform_point3(world);
        let depth = -eye.z;
        if depth <= self.near || depth >= self.far {
            return None;
        }
        let ndc = projection.project_point3(eye);
        if ndc.x.abs() > 1. || ndc.y.abs() > 1. {
            return None;
        }
        Some(Projected {
            ndc: Vec2::new(ndc.x, ndc.y),
            depth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_corners_and_center() {
        let viewport = Vec2::new(1920., 1080.);
        assert_eq!(normalized_pointer(Vec2::ZERO, viewport), Vec2::new(-1., 1.));
        assert_eq!(normalized_pointer(viewport, viewport), Vec2::new(1., -1.));
        assert_eq!(normalized_pointer(Vec2::new(1920., 0.), viewport), Vec2::new(1., 1.));
        assert_eq!(normalized_pointer(Vec2::new(0., 1080.), viewport), Vec2::new(-1., -1.));
        assert_eq!(normalized_pointer(viewport / 2., viewport), Vec2::ZERO);
    }

    #[test]
    fn pointer_survives_minimized_window() {
        let pointer = normalized_pointer(Vec2::new(3., 4.), Vec2::ZERO);
        assert!(pointer.is_finite());
    }

    #[test]
    fn default_matches_host_camera() {
        let camera = Camera::default();
        assert_eq!(camera.position, Vec3::new(0., 0., 5.));
        assert!((camera.fov_y.to_degrees() - 75.).abs() < 1e-4);
    }

    #[test]
    fn target_projects_to_center() {
        let mut camera = Camera::new(16. / 9.);
        camera.position = Vec3::new(0.3, 0.5, 8.);
        camera.look_at(Vec3::new(0., 0.2, -22.));
        let projected = camera.to_screen(camera.target).unwrap();
        assert!(projected.ndc.length() < 1e-4);
        assert!((projected.depth - (camera.target - camera.position).length()).abs() < 1e-3);
    }

    #[test]
    fn points_behind_are_dropped() {
        let camera = Camera::default();
        assert!(camera.to_screen(Vec3::new(0., 0., 10.)).is_none());
        assert!(camera.to_screen(Vec3::new(0., 0., -10.)).is_some());
    }

    #[test]
    fn points_off_screen_are_dropped() {
        let camera = Camera::default();
        assert!(camera.to_screen(Vec3::new(100., 0., 0.)).is_none());
    }

    #[test]
    fn depth_scales_with_focal() {
        let camera = Camera::default();
        // half the viewport height at depth 10
        let edge = (camera.fov_y / 2.).tan() * 10. * 0.5;
        let projected = camera.to_screen(Vec3::new(0., edge, -5.)).unwrap();
        assert!((projected.ndc.y - 0.5).abs() < 1e-4);
        assert!((projected.depth - 10.).abs() < 1e-4);
        assert!((camera.focal() * edge / 10. - 0.5).abs() < 1e-4);
    }
}
