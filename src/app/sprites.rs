use glam::{Mat4, Vec2};

use super::camera::Camera;
use super::scene::StarfieldScene;
use super::starfield;
use super::theme::{Fog, PointStyle};

/// Farthest a polygon's center can sit from the nearest pixel center.
const PIXEL_CENTER_REACH_PX: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// One screen-space disc, ready to hand to the graphics backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// NDC, y up.
    pub center: Vec2,
    /// Radius in NDC height units; divide by the aspect ratio for width.
    pub radius: f32,
    pub color: [f32; 4],
}

/// Smallest radius, in NDC height units, at which a regular `segments`-gon
/// still covers a pixel center wherever it lands.
///
/// The polygon's inscribed circle has to reach the nearest pixel center, which
/// can be up to half a pixel diagonal away.
pub fn min_star_radius(segments: u32, viewport_height: f32) -> f32 {
    let inscribed = (std::f32::consts::PI / segments as f32).cos();
    let radius_px = PIXEL_CENTER_REACH_PX / inscribed * 1.01;
    // a pixel is 2 / height in NDC
    radius_px * 2. / viewport_height
}

/// Projects one star layer through the group transform and the camera.
///
/// The cloud is never culled as a whole, only point by point. Radii shrink
/// with distance and are floored at `min_radius` so far stars stay visible.
pub fn stars(
    positions: &[f32],
    style: &PointStyle,
    group: Mat4,
    camera: &Camera,
    fog: &Fog,
    min_radius: f32,
) -> Vec<Sprite> {
    let view = camera.view() * group;
    let projection = camera.projection();
    let base = style.color.rgb();

    starfield::points(positions)
        .filter_map(|point| camera.project_with(&view, &projection, point))
        .map(|projected| {
            let [r, g, b] = fog.apply(base, projected.depth);
            Sprite {
                center: projected.ndc,
                radius: (style.size / (2. * projected.depth)).max(min_radius),
                color: [r, g, b, style.opacity],
            }
        })
        .collect()
}

/// The two glow spheres as discs, farthest first.
pub fn haze(scene: &StarfieldScene, camera: &Camera) -> Vec<Sprite> {
    let transform = scene.haze_transform();
    let palette = scene.palette();
    let fog = &palette.fog;

    let mut sprites: Vec<(f32, Sprite)> = scene
        .haze()
        .iter()
        .zip(palette.haze.iter())
        .filter_map(|(sphere, style)| {
            let center = transform.transform_point3(sphere.center());
            let eye = camera.view().transform_point3(center);
            let depth = -eye.z;
            if depth <= camera.near {
                return None;
            }
            let ndc = camera.projection().project_point3(eye);
            let [r, g, b] = fog.apply(style.color.rgb(), depth);
            Some((
                depth,
                Sprite {
                    center: Vec2::new(ndc.x, ndc.y),
                    radius: sphere.radius * camera.focal() / depth,
                    color: [r, g, b, style.opacity],
                },
            ))
        })
        .collect();

    sprites.sort_by(|a, b| b.0.total_cmp(&a.0));
    sprites.into_iter().map(|(_, sprite)| sprite).collect()
}
