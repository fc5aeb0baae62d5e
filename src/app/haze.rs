use glam::{EulerRot, Mat4, Vec3};
use rand::Rng;

/// Haze spheres sit slightly above the look-at line.
const HAZE_LIFT: f32 = 0.6;

/// A translucent glow sphere that never occludes what is behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazeSphere {
    pub depth: f32,
    pub radius: f32,
}

impl HazeSphere {
    pub fn new(depth: f32, radius: f32) -> Self {
        Self { depth, radius }
    }
    pub fn center(&self) -> Vec3 {
        Vec3::new(0., HAZE_LIFT, self.depth)
    }
}

/// Slow idle bob and sway applied to a subtree.
///
/// Each instance starts at a random phase so separate wrappers never move in
/// lockstep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatMotion {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
    offset: f32,
    elapsed: f32,
}

impl FloatMotion {
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        speed: f32,
        rotation_intensity: f32,
        float_intensity: f32,
    ) -> Self {
        Self {
            speed,
            rotation_intensity,
            float_intensity,
            offset: rng.gen::<f32>() * 10_000.,
            elapsed: 0.,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    fn phase(&self) -> f32 {
        (self.offset + self.elapsed) / 4. * self.speed
    }

    pub fn rotation(&self) -> Vec3 {
        let phase = self.phase();
        Vec3::new(
            phase.cos() / 8. * self.rotation_intensity,
            phase.sin() / 8. * self.rotation_intensity,
            phase.sin() / 20. * self.rotation_intensity,
        )
    }

    pub fn lift(&self) -> f32 {
        self.phase().sin() / 10. * self.float_intensity
    }

    pub fn transform(&self) -> Mat4 {
        let rotation = self.rotation();
        Mat4::from_translation(Vec3::new(0., self.lift(), 0.))
            * Mat4::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z)
    }
}
