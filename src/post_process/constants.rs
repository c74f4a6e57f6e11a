//! Texture sizes for the generated overlays

/// Edge length of the stretched vignette texture
pub const VIGNETTE_TEXTURE_SIZE: u32 = 256;

/// Edge length of the repeating grain tile
pub const GRAIN_TILE_SIZE: u32 = 128;
