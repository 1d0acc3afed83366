pub mod textures;

pub use textures::{load_texture_file, TextureError, TextureTable};
