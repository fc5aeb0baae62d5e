use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::BackdropError;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn from_name(name: &str) -> Result<Self, BackdropError> {
        Self::from_str(name.trim()).map_err(|_| BackdropError::UnknownMode(name.to_string()))
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    fn pick<T>(self, dark: T, light: T) -> T {
        match self {
            ThemeMode::Dark => dark,
            ThemeMode::Light => light,
        }
    }
}

/// 24-bit `0xRRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor(pub u32);

impl HexColor {
    pub fn rgb(self) -> [f32; 3] {
        let channel = |shift: u32| ((self.0 >> shift) & 0xff) as f32 / 255.;
        [channel(16), channel(8), channel(0)]
    }

    pub fn css(self) -> String {
        format!("#{:06x}", self.0 & 0xff_ffff)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointStyle {
    pub color: HexColor,
    pub size: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazeStyle {
    pub color: HexColor,
    pub opacity: f32,
}

/// Linear fog: untouched up to `near`, fully fog colored from `far` on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    pub color: HexColor,
    pub near: f32,
    pub far: f32,
}

impl Fog {
    pub fn factor(&self, depth: f32) -> f32 {
        ((depth - self.near) / (self.far - self.near)).clamp(0., 1.)
    }

    pub fn apply(&self, color: [f32; 3], depth: f32) -> [f32; 3] {
        let t = self.factor(depth);
        let fog = self.color.rgb();
        [
            color[0] + (fog[0] - color[0]) * t,
            color[1] + (fog[1] - color[1]) * t,
            color[2] + (fog[2] - color[2]) * t,
        ]
    }
}

/// Everything the mode decides about the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub mode: ThemeMode,
    pub background: HexColor,
    pub fog: Fog,
    pub ambient_intensity: f32,
    pub far_stars: PointStyle,
    pub near_stars: PointStyle,
    pub haze: [HazeStyle; 2],
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        let background = mode.pick(HexColor(0x000006), HexColor(0xeef2ff));
        Self {
            mode,
            background,
            fog: Fog {
                color: background,
                near: 26.,
                far: 260.,
            },
            ambient_intensity: mode.pick(0.22, 0.7),
            far_stars: PointStyle {
                color: mode.pick(HexColor(0xe5e7eb), HexColor(0x1f2937)),
                size: 0.012,
                opacity: 0.55,
            },
            near_stars: PointStyle {
                color: mode.pick(HexColor(0xffffff), HexColor(0x0f172a)),
                size: 0.017,
                opacity: 0.7,
            },
            haze: [
                HazeStyle {
                    color: mode.pick(HexColor(0x93c5fd), HexColor(0x2563eb)),
                    opacity: mode.pick(0.06, 0.05),
                },
                HazeStyle {
                    color: mode.pick(HexColor(0xffffff), HexColor(0x0f172a)),
                    opacity: 0.03,
                },
            ],
        }
    }
}

// 0 = nothing pending
static REQUESTED_MODE: AtomicU8 = AtomicU8::new(0);

/// Queue a mode change for the running app; it is picked up on the next frame.
pub fn request_mode(mode: ThemeMode) {
    let code = match mode {
        ThemeMode::Dark => 1,
        ThemeMode::Light => 2,
    };
    REQUESTED_MODE.store(code, Ordering::Relaxed);
}

pub fn take_requested_mode() -> Option<ThemeMode> {
    match REQUESTED_MODE.swap(0, Ordering::Relaxed) {
        1 => Some(ThemeMode::Dark),
        2 => Some(ThemeMode::Light),
        _ => None,
    }
}
