mod frame_texture;
mod sprite_renderer;

pub use frame_texture::TextureFrameSink;
pub use sprite_renderer::TextureSpriteRenderer;
