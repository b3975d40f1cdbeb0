/// Texture save requests handed to the capture host

use std::fmt;
use super::capture_host::ResourceId;

/// Destination image container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    /// Low dynamic range, alpha kept as-is
    Tga,
    /// Linear floating point (high dynamic range)
    Exr,
}

impl FileType {
    /// File extension without the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            FileType::Tga => "tga",
            FileType::Exr => "exr",
        }
    }
}

/// Alpha handling when writing the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlphaMapping {
    /// Keep alpha unmodified (no premultiply, no blend)
    #[default]
    Preserve,
}

/// Cubemap face, in array-slice order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeFace {
    PositiveX,
    NegativeX,
    PositiveY,
    NegativeY,
    PositiveZ,
    NegativeZ,
}

impl CubeFace {
    /// Faces in slice order
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PositiveX,
        CubeFace::NegativeX,
        CubeFace::PositiveY,
        CubeFace::NegativeY,
        CubeFace::PositiveZ,
        CubeFace::NegativeZ,
    ];

    /// Face of a cubemap array slice
    pub fn from_slice(slice: u32) -> Self {
        Self::ALL[(slice % 6) as usize]
    }

    /// File name label ("X+", "X-", ...)
    pub fn label(&self) -> &'static str {
        match self {
            CubeFace::PositiveX => "X+",
            CubeFace::NegativeX => "X-",
            CubeFace::PositiveY => "Y+",
            CubeFace::NegativeY => "Y-",
            CubeFace::PositiveZ => "Z+",
            CubeFace::NegativeZ => "Z-",
        }
    }
}

impl fmt::Display for CubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which 2D sub-image of the texture to save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceSelector {
    /// Plain 2D texture
    Whole,
    /// One slice of a texture array
    ArraySlice(u32),
    /// One depth slice of a volume texture
    DepthSlice(u32),
    /// One face of a cubemap (array slice index plus its face)
    CubeFace { slice: u32, face: CubeFace },
}

/// A single save request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureSave {
    /// Texture to save
    pub resource_id: ResourceId,
    /// Mip level (always 0 on export)
    pub mip: u32,
    /// Sub-image selector
    pub slice: SliceSelector,
    /// Destination container
    pub dest_type: FileType,
    /// Alpha handling
    pub alpha: AlphaMapping,
}
