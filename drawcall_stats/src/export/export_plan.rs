/// Export planning: a pure function of texture metadata and config.
///
/// Decides skip/export, the destination container (EXR for float formats,
/// TGA otherwise) and the file list (one per cube face, per slice, or a
/// single file). Only mip 0 is exported.

use std::fmt;
use crate::host::{
    AlphaMapping, CubeFace, FileType, ResourceId, SliceSelector, TextureDescription, TextureSave,
};
use super::export_config::ExportConfig;

/// Why a texture was not exported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// `ResourceId::NULL`
    NullResource,
    /// The host has no description for this id
    UnknownResource,
    /// Color/depth target while `export_render_targets` is off
    RenderTarget,
    /// At or below the minimum size in both dimensions
    TooSmall { width: u32, height: u32 },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NullResource => write!(f, "invalid resource"),
            SkipReason::UnknownResource => write!(f, "unknown resource"),
            SkipReason::RenderTarget => write!(f, "render target"),
            SkipReason::TooSmall { width, height } => write!(f, "too small ({}x{})", width, height),
        }
    }
}

/// One file to write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// File name including extension
    pub file_name: String,
    pub slice: SliceSelector,
}

/// Files to write for one texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPlan {
    pub resource_id: ResourceId,
    pub dest_type: FileType,
    pub files: Vec<PlannedFile>,
}

impl ExportPlan {
    /// Host save request for one planned file
    pub fn save_request(&self, file: &PlannedFile) -> TextureSave {
        TextureSave {
            resource_id: self.resource_id,
            mip: 0,
            slice: file.slice,
            dest_type: self.dest_type,
            alpha: AlphaMapping::Preserve,
        }
    }
}

/// Plan the export of one texture
///
/// `description` is the host's description of `id` (`None` if unknown).
/// `stem` is the file name without suffix or extension.
pub fn plan_texture_export(
    id: ResourceId,
    description: Option<&TextureDescription>,
    stem: &str,
    config: &ExportConfig,
) -> Result<ExportPlan, SkipReason> {
    if id.is_null() {
        return Err(SkipReason::NullResource);
    }
    let desc = description.ok_or(SkipReason::UnknownResource)?;

    if !config.export_render_targets && desc.is_render_target() {
        return Err(SkipReason::RenderTarget);
    }
    if desc.width <= config.min_texture_size && desc.height <= config.min_texture_size {
        return Err(SkipReason::TooSmall { width: desc.width, height: desc.height });
    }

    let dest_type = if desc.comp_type.is_float() { FileType::Exr } else { FileType::Tga };

    Ok(ExportPlan {
        resource_id: id,
        dest_type,
        files: plan_files(desc, stem, dest_type.extension()),
    })
}

/// File list for one texture
///
/// - single image: `<stem>.<ext>`
/// - cubemap: `<stem>_<face>.<ext>` for the first cube of the array, then
///   `<stem>_<cube>_<face>.<ext>` for cube 1 onwards (`tex_1_X+.exr`)
/// - volume: `<stem>_<depth slice>.<ext>`
/// - array: `<stem>_<array slice>.<ext>`
fn plan_files(desc: &TextureDescription, stem: &str, ext: &str) -> Vec<PlannedFile> {
    if !desc.has_slices() {
        vec![PlannedFile {
            file_name: format!("{}.{}", stem, ext),
            slice: SliceSelector::Whole,
        }]
    } else if desc.cubemap && desc.array_size > 1 {
        // Later cubes of a cube array get their index so names stay unique
        (0..desc.array_size)
            .map(|slice| {
                let face = CubeFace::from_slice(slice);
                let cube = slice / 6;
                let file_name = if cube == 0 {
                    format!("{}_{}.{}", stem, face, ext)
                } else {
                    format!("{}_{}_{}.{}", stem, cube, face, ext)
                };
                PlannedFile { file_name, slice: SliceSelector::CubeFace { slice, face } }
            })
            .collect()
    } else if desc.depth > 1 {
        (0..desc.depth)
            .map(|i| PlannedFile {
                file_name: format!("{}_{}.{}", stem, i, ext),
                slice: SliceSelector::DepthSlice(i),
            })
            .collect()
    } else {
        (0..desc.array_size)
            .map(|i| PlannedFile {
                file_name: format!("{}_{}.{}", stem, i, ext),
                slice: SliceSelector::ArraySlice(i),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "export_plan_tests.rs"]
mod tests;
