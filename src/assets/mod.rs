use std::collections::HashMap;

use macroquad::texture::{Texture2D, load_texture};
use thiserror::Error;

use crate::domain::PieceColor;

/// Cache key for the neutral base tile texture
pub const TILE_KEY: &str = "tile";

/// A required texture could not be fetched or decoded.
/// Fatal to startup: the game loop never starts without a full cache.
#[derive(Debug, Error)]
#[error("could not load asset '{path}': {cause}")]
pub struct AssetError {
    path: String,
    cause: macroquad::Error,
}

/// AssetStore caches every texture the renderer needs, keyed by id.
/// The cache is fully populated before the first frame; lookups never load
/// lazily.
pub struct AssetStore {
    textures: HashMap<&'static str, Texture2D>,
}

impl AssetStore {
    async fn load(&mut self, key: &'static str, path: &str) -> Result<(), AssetError> {
        let texture = load_texture(path).await.map_err(|cause| AssetError {
            path: path.to_owned(),
            cause,
        })?;
        self.textures.insert(key, texture);
        Ok(())
    }

    /// Synchronous cache lookup; keys are fixed at load time
    pub fn texture(&self, key: &str) -> &Texture2D {
        &self.textures[key]
    }
}

/// Load every required texture before the first frame.
/// All loads must settle successfully; the first failure aborts startup with
/// no partial or degraded rendering mode.
pub async fn load_all() -> Result<AssetStore, AssetError> {
    let mut store = AssetStore {
        textures: HashMap::new(),
    };

    store.load(TILE_KEY, "assets/tile_base.png").await?;
    for color in PieceColor::ALL {
        let path = format!("assets/diamond_{}.png", color.id());
        store.load(color.id(), &path).await?;
    }

    Ok(store)
}
