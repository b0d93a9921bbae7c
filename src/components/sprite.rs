use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key and its draw size in pixels.
///
/// When `animated` is set, `offset` selects the current tile inside a
/// spritesheet and the tile size equals the draw size. Otherwise the whole
/// texture is drawn scaled to `width` x `height`.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub animated: bool,
}

impl Sprite {
    /// Animated spritesheet sprite with the given tile size.
    pub fn sheet(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vector2::zero(),
            animated: true,
        }
    }

    /// Static sprite drawn from the whole texture, scaled to the given size.
    pub fn whole(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vector2::zero(),
            animated: false,
        }
    }
}
