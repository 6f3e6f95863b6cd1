//! Optional card illustrations loaded from an asset directory.
//!
//! Card image paths such as `/png/card-1.png` are resolved against the
//! directory given with `--assets`. Missing files are not an error: the
//! scene draws a plain card instead.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use macroquad::prelude::*;

use arcana_core::Catalog;

/// Loaded textures keyed by the catalog's image path.
#[derive(Default)]
pub struct Art {
    textures: HashMap<String, Texture2D>,
}

/// Resolve a catalog image path against an asset root.
pub fn resolve(root: &Path, image: &str) -> PathBuf {
    root.join(image.trim_start_matches('/'))
}

impl Art {
    /// Load every card image plus the card back that exists under `root`.
    pub async fn load(root: &Path, catalog: &Catalog) -> Self {
        let mut textures = HashMap::new();
        let images = catalog
            .iter()
            .map(|c| c.image.as_str())
            .chain(std::iter::once(Catalog::BACK_IMAGE));
        for image in images {
            let path = resolve(root, image);
            let Some(path_str) = path.to_str() else {
                continue;
            };
            match load_texture(path_str).await {
                Ok(texture) => {
                    texture.set_filter(FilterMode::Linear);
                    textures.insert(image.to_string(), texture);
                }
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "card art not loaded"),
            }
        }
        tracing::info!(loaded = textures.len(), "card art ready");
        Self { textures }
    }

    /// Texture for an image path, if it was loaded.
    pub fn get(&self, image: &str) -> Option<&Texture2D> {
        self.textures.get(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_strips_leading_slash() {
        let root = Path::new("/srv/public");
        assert_eq!(
            resolve(root, "/png/card-1.png"),
            PathBuf::from("/srv/public/png/card-1.png")
        );
        assert_eq!(
            resolve(root, "png/card-verse.png"),
            PathBuf::from("/srv/public/png/card-verse.png")
        );
    }
}
