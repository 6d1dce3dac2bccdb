use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use image::RgbaImage;
use log::info;

use crate::error::AssetError;

/// Loads each asset once per path and hands out shared references to it.
pub struct AssetCache<A> {
    entries: HashMap<PathBuf, Rc<A>>,
    loads: usize,
}

impl<A> AssetCache<A> {
    pub fn new() -> Self {
        AssetCache {
            entries: HashMap::new(),
            loads: 0,
        }
    }

    /// Returns the cached asset for `path`, calling `loader` only if this is
    /// the first time we've seen it. A failed load leaves nothing behind, so
    /// a later call will try again.
    pub fn get_or_load<F>(&mut self, path: &Path, loader: F) -> Result<Rc<A>, AssetError>
    where
        F: FnOnce(&Path) -> Result<A, AssetError>,
    {
        if let Some(asset) = self.entries.get(path) {
            return Ok(Rc::clone(asset));
        }

        let asset = Rc::new(loader(path)?);
        self.loads += 1;
        self.entries.insert(path.to_owned(), Rc::clone(&asset));
        Ok(asset)
    }

    /// How many times a loader actually ran.
    pub fn loads(&self) -> usize {
        self.loads
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A> Default for AssetCache<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes an image file into RGBA pixels.
pub fn load_surface(path: &Path) -> Result<RgbaImage, AssetError> {
    let image = image::open(path).map_err(|source| AssetError::Load {
        path: path.to_owned(),
        source,
    })?;
    let image = image.into_rgba8();
    info!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Reads just enough of an image file to learn its size. Used to validate
/// textures before handing the path to the GPU side.
pub fn probe_dimensions(path: &Path) -> Result<(u32, u32), AssetError> {
    image::image_dimensions(path).map_err(|source| AssetError::Load {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::process;

    use image::Rgba;

    use super::*;

    fn scratch_png(name: &str, width: u32, height: u32) -> PathBuf {
        let path = env::temp_dir().join(format!("asteroid-drift-{}-{}.png", process::id(), name));
        RgbaImage::from_pixel(width, height, Rgba([200, 100, 50, 255]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_each_path_loads_once() {
        let path = scratch_png("once", 3, 5);
        let mut cache = AssetCache::new();

        let first = cache.get_or_load(&path, load_surface).unwrap();
        for _ in 0..99 {
            let again = cache.get_or_load(&path, load_surface).unwrap();
            assert!(Rc::ptr_eq(&first, &again));
        }

        assert_eq!(cache.loads(), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(first.dimensions(), (3, 5));
        assert_eq!(probe_dimensions(&path).unwrap(), (3, 5));
    }

    #[test]
    fn test_missing_file_is_an_error_and_not_cached() {
        let path = env::temp_dir().join("asteroid-drift-definitely-missing.png");
        let mut cache: AssetCache<RgbaImage> = AssetCache::new();

        let err = cache.get_or_load(&path, load_surface).unwrap_err();
        assert!(matches!(err, AssetError::Load { .. }));
        assert!(cache.is_empty());
        assert_eq!(cache.loads(), 0);
        assert!(probe_dimensions(&path).is_err());
    }
}
