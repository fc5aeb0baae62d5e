use super::*;

pub mod camera;
use camera::Camera;

pub mod haze;
pub mod scene;
use scene::StarfieldScene;

pub mod sprites;
use sprites::Sprite;

pub mod starfield;
pub mod theme;

use log::info;

const BACKGROUND_Z: f32 = 0.9;
const HAZE_Z: f32 = 0.8;
const FAR_STARS_Z: f32 = 0.5;
const NEAR_STARS_Z: f32 = 0.4;

const STAR_SEGMENTS: u32 = 6;
const HAZE_SEGMENTS: u32 = 32;

#[derive(Default, Clone, strum::EnumIter, Debug, Textures)]
#[strum(serialize_all = "snake_case")]
pub enum Txts {
    #[default]
    White,
}

pub struct BackdropApp {
    pub graphics: Graphics<Txts>,
    scene: StarfieldScene,
    camera: Camera,
    mouse_position: ::glam::Vec2,
    viewport_height: f32,
}

impl App<Txts> for BackdropApp {
    async fn new(window: winit::window::Window) -> Self {
        let graphics = Graphics::new(window).await;

        let config = crate::config();
        let mut rng = config.rng();
        let scene = StarfieldScene::new(&mut rng, config.mode);
        info!(
            "Starfield ready: {} far and {} near stars, {} theme",
            scene.far_stars().len() / 3,
            scene.near_stars().len() / 3,
            scene.mode()
        );

        Self {
            graphics,
            scene,
            camera: Camera::default(),
            mouse_position: ::glam::Vec2::ZERO,
            viewport_height: 1.,
        }
    }

    fn graphics(&self) -> &Graphics<Txts> {
        &self.graphics
    }

    fn graphics_mut(&mut self) -> &mut Graphics<Txts> {
        &mut self.graphics
    }

    fn update(&mut self, dt: f32) {
        if let Some(mode) = theme::take_requested_mode() {
            self.scene.set_mode(mode);
        }

        self.update_viewport();

        self.scene.update(dt, self.mouse_position, &mut self.camera);
    }

    fn draw(&mut self) {
        self.draw_background();
        self.draw_haze();
        self.draw_stars();
    }

    fn input(&mut self, event: &WindowEvent) -> bool {
        if let WindowEvent::MouseInput { state, button, .. } = event {
            match button {
                winit::event::MouseButton::Right => {
                    if state != &winit::event::ElementState::Pressed {
                        return false;
                    }
                    theme::request_mode(self.scene.mode().toggled());
                    return true;
                }
                _ => {}
            }
        } else if let WindowEvent::CursorMoved { position, .. } = event {
            let win_size = self.graphics.window().inner_size();
            self.mouse_position = camera::normalized_pointer(
                ::glam::vec2(position.x as f32, position.y as f32),
                ::glam::vec2(win_size.width as f32, win_size.height as f32),
            );
        }
        false
    }
}

impl BackdropApp {
    fn update_viewport(&mut self) {
        let win_size = self.graphics.window().inner_size();
        if win_size.width == 0 || win_size.height == 0 {
            return;
        }
        let aspect = win_size.width as f32 / win_size.height as f32;
        if (aspect - self.camera.aspect).abs() > f32::EPSILON {
            info!("Viewport resized to {}x{}", win_size.width, win_size.height);
        }
        self.camera.aspect = aspect;
        self.viewport_height = win_size.height as f32;
    }

    fn draw_background(&mut self) {
        let [r, g, b] = self.scene.palette().background.rgb();
        let background = Shape::from_square_centered()
            .apply(GTransform::from_inflation(2.))
            .set_color(Color::from_rgba(r, g, b, 1.))
            .set_z(BACKGROUND_Z);

        self.graphics.add_geometry(background.into());
    }

    fn draw_haze(&mut self) {
        // Alpha blended: the graphics backend has no additive mode. Close to
        // additive on the dark background, but in light mode it tints the
        // background toward the haze color instead of brightening it.
        for sprite in sprites::haze(&self.scene, &self.camera) {
            let shape = self
                .sprite_shape(&sprite, Shape::from_circle(HAZE_SEGMENTS as _))
                .set_z(HAZE_Z);
            self.graphics.add_geometry(shape.into());
        }
    }

    fn draw_stars(&mut self) {
        let palette = *self.scene.palette();
        let group = self.scene.group_transform();
        let min_radius = sprites::min_star_radius(STAR_SEGMENTS, self.viewport_height);

        let layers = [
            (self.scene.far_stars(), &palette.far_stars, FAR_STARS_Z),
            (self.scene.near_stars(), &palette.near_stars, NEAR_STARS_Z),
        ];
        let mut shapes = vec![];
        for (positions, style, z) in layers {
            for sprite in sprites::stars(positions, style, group, &self.camera, &palette.fog, min_radius) {
                shapes.push(self.sprite_shape(&sprite, Shape::from_circle(STAR_SEGMENTS as _)).set_z(z));
            }
        }

        for shape in shapes {
            self.graphics.add_geometry(shape.into());
        }
    }

    fn sprite_shape(&self, sprite: &Sprite, shape: Shape<Txts>) -> Shape<Txts> {
        let [r, g, b, a] = sprite.color;
        let gtransform = GTransform::from_translation(vec2(sprite.center.x, sprite.center.y))
            .stretch(vec2(sprite.radius / self.camera.aspect, sprite.radius));

        shape
            .apply(gtransform)
            .set_color(Color::from_rgba(r, g, b, a))
    }
}
