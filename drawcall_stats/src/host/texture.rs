/// Texture descriptions as supplied by the capture host

use bitflags::bitflags;

/// Component type of a texture format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompType {
    #[default]
    Typeless,
    Float,
    UNorm,
    SNorm,
    UInt,
    SInt,
    UScaled,
    SScaled,
    Depth,
    UNormSRGB,
}

impl CompType {
    /// Floating-point data (exported as HDR)
    pub fn is_float(&self) -> bool {
        matches!(self, CompType::Float)
    }
}

bitflags! {
    /// How a texture was created (bind/usage categories)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TextureCategory: u32 {
        const SHADER_READ = 1 << 0;
        const COLOR_TARGET = 1 << 1;
        const DEPTH_TARGET = 1 << 2;
        const SHADER_READ_WRITE = 1 << 3;
        const SWAP_BUFFER = 1 << 4;
    }
}

/// Texture metadata snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureDescription {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Depth in slices (1 for non-volume textures)
    pub depth: u32,
    /// Number of array slices (6 per cube for cubemaps)
    pub array_size: u32,
    /// Number of mip levels
    pub mips: u32,
    /// Multisample count
    pub ms_samples: u32,
    /// Cubemap or cubemap array
    pub cubemap: bool,
    /// Component type of the format
    pub comp_type: CompType,
    /// Creation categories
    pub creation_flags: TextureCategory,
}

impl TextureDescription {
    /// Plain single-mip 2D texture
    pub fn new_2d(width: u32, height: u32, comp_type: CompType) -> Self {
        Self {
            width,
            height,
            depth: 1,
            array_size: 1,
            mips: 1,
            ms_samples: 1,
            cubemap: false,
            comp_type,
            creation_flags: TextureCategory::SHADER_READ,
        }
    }

    /// Color or depth/stencil attachment
    pub fn is_render_target(&self) -> bool {
        self.creation_flags.intersects(TextureCategory::COLOR_TARGET | TextureCategory::DEPTH_TARGET)
    }

    /// Has more than one array slice or depth slice
    pub fn has_slices(&self) -> bool {
        self.array_size > 1 || self.depth > 1
    }
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
