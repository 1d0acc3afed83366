//! Fixed texture table: three material textures and two environment cubes.
//!
//! Loading never fails as a whole. A file that is missing or cannot be decoded
//! leaves its slot empty, and the presence bitmask tells the kernel which slots
//! it may sample.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::RgbaImage;
use log::{info, warn};
use thiserror::Error;

/// Edge length every texture is resampled to
pub const TEXTURE_SIZE: u32 = 512;

/// Material texture names, by texture id starting at 1
pub const MATERIAL_TEXTURES: [&str; 3] = ["metal", "wood", "plaster"];

/// Cube faces in GPU layer order
pub const CUBE_FACES: [&str; 6] = ["posx", "negx", "posy", "negy", "posz", "negz"];

/// File name suffix of each environment cube
pub const ENVIRONMENT_SUFFIXES: [&str; 2] = ["", "1"];

const NORMAL_MASK_SHIFT: u32 = 8;
const ENVIRONMENT_MASK_SHIFT: u32 = 16;

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("texture {path} could not be loaded: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type TextureResult<T> = Result<T, TextureError>;

/// Decode `path` and resample it to [`TEXTURE_SIZE`] squared RGBA8
pub fn load_texture_file(path: &Path) -> TextureResult<RgbaImage> {
    let img = image::open(path).map_err(|source| TextureError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    let img = if img.width() == TEXTURE_SIZE && img.height() == TEXTURE_SIZE {
        img
    } else {
        img.resize_exact(TEXTURE_SIZE, TEXTURE_SIZE, FilterType::Triangle)
    };
    Ok(img.to_rgba8())
}

fn load_slot(path: PathBuf) -> Option<RgbaImage> {
    match load_texture_file(&path) {
        Ok(img) => Some(img),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextureTable {
    diffuse: [Option<RgbaImage>; 3],
    normal: [Option<RgbaImage>; 3],
    environments: [Option<Vec<RgbaImage>>; 2],
}

impl TextureTable {
    /// Table with every slot empty
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn load(dir: &Path) -> Self {
        let diffuse = MATERIAL_TEXTURES.map(|name| load_slot(dir.join(format!("{}_diffuse.jpg", name))));
        let normal = MATERIAL_TEXTURES.map(|name| load_slot(dir.join(format!("{}_normal.jpg", name))));
        let environments = ENVIRONMENT_SUFFIXES.map(|suffix| {
            CUBE_FACES
                .iter()
                .map(|face| load_slot(dir.join(format!("{}{}.jpg", face, suffix))))
                .collect::<Option<Vec<_>>>()
        });

        let table = Self {
            diffuse,
            normal,
            environments,
        };
        info!(
            "Loaded textures from {} (mask {:#07x})",
            dir.display(),
            table.presence_mask()
        );
        table
    }

    fn material_index(id: u32) -> Option<usize> {
        let index = (id as usize).checked_sub(1)?;
        (index < MATERIAL_TEXTURES.len()).then_some(index)
    }

    /// Diffuse map for texture id `id` (1-based)
    pub fn diffuse(&self, id: u32) -> Option<&RgbaImage> {
        Self::material_index(id).and_then(|i| self.diffuse[i].as_ref())
    }

    pub fn normal(&self, id: u32) -> Option<&RgbaImage> {
        Self::material_index(id).and_then(|i| self.normal[i].as_ref())
    }

    /// All six faces of environment cube `cube`, or `None` if any is missing
    pub fn environment(&self, cube: u32) -> Option<&[RgbaImage]> {
        self.environments.get(cube as usize)?.as_deref()
    }

    /// Bit `id` for diffuse maps, bit `8 + id` for normal maps and bit
    /// `16 + cube` for complete environment cubes.
    pub fn presence_mask(&self) -> u32 {
        let mut mask = 0;
        for id in 1..=MATERIAL_TEXTURES.len() as u32 {
            if self.diffuse(id).is_some() {
                mask |= 1 << id;
            }
            if self.normal(id).is_some() {
                mask |= 1 << (NORMAL_MASK_SHIFT + id);
            }
        }
        for cube in 0..ENVIRONMENT_SUFFIXES.len() as u32 {
            if self.environment(cube).is_some() {
                mask |= 1 << (ENVIRONMENT_MASK_SHIFT + cube);
            }
        }
        mask
    }
}
