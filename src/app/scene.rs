use glam::{EulerRot, Mat4, Vec2, Vec3};
use log::info;
use rand::Rng;

use super::camera::Camera;
use super::haze::{FloatMotion, HazeSphere};
use super::starfield;
use super::theme::{Palette, ThemeMode};

pub const FAR_STAR_COUNT: usize = 2800;
pub const FAR_STAR_SPREAD: f32 = 240.;
pub const NEAR_STAR_COUNT: usize = 5200;
pub const NEAR_STAR_SPREAD: f32 = 190.;

const POINTER_SWAY: Vec2 = Vec2::new(0.75, 0.45);
const CAMERA_HEIGHT: f32 = 0.2;
const CAMERA_DISTANCE: f32 = 8.;
const CAMERA_EASE: f32 = 0.04;
const CAMERA_DOLLY_EASE: f32 = 0.02;
const LOOK_AT: Vec3 = Vec3::new(0., 0.2, -22.);

/// Radians per second of group tumble around x and y.
const SPIN: Vec2 = Vec2::new(0.003, 0.006);

pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Background, fog, two star layers and two haze spheres, with pointer
/// parallax on the camera and a slow tumble of the whole group.
///
/// Both star buffers are generated once here and never regenerated, including
/// across theme changes.
pub struct StarfieldScene {
    far_stars: Vec<f32>,
    near_stars: Vec<f32>,
    haze: [HazeSphere; 2],
    float_motion: FloatMotion,
    /// Euler angles of the star group; `x` and `y` only ever grow.
    rotation: Vec2,
    palette: Palette,
}

impl StarfieldScene {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, mode: ThemeMode) -> Self {
        let near_stars = starfield::generate(rng, NEAR_STAR_COUNT, NEAR_STAR_SPREAD);
        let far_stars = starfield::generate(rng, FAR_STAR_COUNT, FAR_STAR_SPREAD);

        Self {
            far_stars,
            near_stars,
            haze: [HazeSphere::new(-60., 9.5), HazeSphere::new(-110., 16.)],
            float_motion: FloatMotion::new(rng, 0.15, 0.15, 0.35),
            rotation: Vec2::ZERO,
            palette: Palette::for_mode(mode),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.palette.mode
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        if mode == self.palette.mode {
            return;
        }
        self.palette = Palette::for_mode(mode);
        info!(
            "Theme switched to {mode} (background {}, ambient {})",
            self.palette.background.css(),
            self.palette.ambient_intensity
        );
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
    pub fn far_stars(&self) -> &[f32] {
        &self.far_stars
    }
    pub fn near_stars(&self) -> &[f32] {
        &self.near_stars
    }
    pub fn haze(&self) -> &[HazeSphere; 2] {
        &self.haze
    }
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    pub fn group_transform(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.)
    }

    pub fn haze_transform(&self) -> Mat4 {
        self.group_transform() * self.float_motion.transform()
    }

    /// Per-frame step. `pointer` is normalized to `[-1, 1]` with y up.
    ///
    /// Camera easing is a fixed fraction per call, so its speed follows the
    /// frame rate; the tumble is scaled by `dt` and does not.
    pub fn update(&mut self, dt: f32, pointer: Vec2, camera: &mut Camera) {
        let position = &mut camera.position;
        position.x = lerp(position.x, pointer.x * POINTER_SWAY.x, CAMERA_EASE);
        position.y = lerp(
            position.y,
            CAMERA_HEIGHT + pointer.y * POINTER_SWAY.y,
            CAMERA_EASE,
        );
        position.z = lerp(position.z, CAMERA_DISTANCE, CAMERA_DOLLY_EASE);
        camera.look_at(LOOK_AT);

        self.rotation += SPIN * dt;
        self.float_motion.update(dt);
    }
}
