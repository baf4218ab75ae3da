// Asset loading functionality

use super::AssetError;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Asset file kinds and where they live under the asset root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetType {
    /// Shared spritesheet images
    Spritesheet,
    /// Sprite definition files
    Sprite,
}

impl AssetType {
    /// Get the default directory for this asset type
    pub fn default_directory(&self) -> &'static str {
        match self {
            AssetType::Spritesheet => "spritesheets",
            AssetType::Sprite => "sprites",
        }
    }

    /// Get supported file extensions for this asset type
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            AssetType::Spritesheet => &["png"],
            AssetType::Sprite => &["json"],
        }
    }
}

/// Asset loader responsible for finding and reading asset files
#[derive(Debug, Clone)]
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the directory holding assets of a given type
    pub fn type_directory(&self, asset_type: AssetType) -> PathBuf {
        self.base_path.join(asset_type.default_directory())
    }

    /// Root directory of a map (`maps/<name>`)
    pub fn map_directory(&self, map_name: &str) -> PathBuf {
        self.base_path.join("maps").join(map_name)
    }

    /// Map background images (`maps/<name>/images`)
    pub fn map_images_directory(&self, map_name: &str) -> PathBuf {
        self.map_directory(map_name).join("images")
    }

    /// Tileset definition of a map
    pub fn tileset_path(&self, map_name: &str) -> PathBuf {
        self.map_directory(map_name)
            .join("tileset")
            .join("tileset.json")
    }

    /// A named section of a map
    pub fn map_section_path(&self, map_name: &str, section: &str) -> PathBuf {
        self.map_directory(map_name)
            .join("map_sections")
            .join(format!("{section}.json"))
    }

    /// List all assets of a given type
    pub fn list_assets(&self, asset_type: AssetType) -> Result<Vec<PathBuf>, AssetError> {
        list_files(&self.type_directory(asset_type), asset_type.extensions())
    }

    /// Read a file that the game cannot start without
    pub fn read_required(&self, path: &Path) -> Result<Vec<u8>, AssetError> {
        std::fs::read(path).map_err(|source| AssetError::MissingFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and deserialize a required JSON file
    pub fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<T, AssetError> {
        let bytes = self.read_required(path)?;
        serde_json::from_slice(&bytes).map_err(|source| AssetError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

/// List files in `dir` whose extension is one of `extensions`
///
/// The directory is required: failing to open it is [`AssetError::MissingFile`].
/// The result is sorted so load order does not depend on the file system.
pub fn list_files(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>, AssetError> {
    let entries = std::fs::read_dir(dir).map_err(|source| AssetError::MissingFile {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .map(|ext| extensions.contains(&ext.to_string_lossy().as_ref()))
            .unwrap_or(false);
        if matches {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// File name of `path` as a registry key (e.g. `main.000.png`)
pub fn file_name_key(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// File stem of `path` as a registry key (e.g. `char_idle_down`)
pub fn file_stem_key(path: &Path) -> String {
    path.file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_asset_type_directories() {
        assert_eq!(AssetType::Spritesheet.default_directory(), "spritesheets");
        assert_eq!(AssetType::Sprite.default_directory(), "sprites");
    }

    #[test]
    fn test_map_paths() {
        let loader = AssetLoader::new("/game/assets");
        assert_eq!(
            loader.tileset_path("sample_map"),
            PathBuf::from("/game/assets/maps/sample_map/tileset/tileset.json")
        );
        assert_eq!(
            loader.map_section_path("sample_map", "main"),
            PathBuf::from("/game/assets/maps/sample_map/map_sections/main.json")
        );
        assert_eq!(
            loader.map_images_directory("sample_map"),
            PathBuf::from("/game/assets/maps/sample_map/images")
        );
    }

    #[test]
    fn test_list_assets_filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let sprites = dir.path().join("sprites");
        fs::create_dir_all(&sprites).unwrap();
        fs::write(sprites.join("b.json"), "{}").unwrap();
        fs::write(sprites.join("a.json"), "{}").unwrap();
        fs::write(sprites.join("notes.txt"), "").unwrap();

        let loader = AssetLoader::new(dir.path());
        let files = loader.list_assets(AssetType::Sprite).unwrap();
        let keys: Vec<_> = files.iter().map(|p| file_stem_key(p)).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_list_missing_directory_fails() {
        let loader = AssetLoader::new("/definitely/not/here");
        let err = loader.list_assets(AssetType::Spritesheet).unwrap_err();
        assert!(
            matches!(err, AssetError::MissingFile { ref path, .. } if path.ends_with("spritesheets"))
        );
    }

    #[test]
    fn test_list_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sprites")).unwrap();
        let loader = AssetLoader::new(dir.path());
        assert!(loader.list_assets(AssetType::Sprite).unwrap().is_empty());
    }

    #[test]
    fn test_read_required_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loader = AssetLoader::new(dir.path());
        let err = loader
            .read_required(&dir.path().join("tileset.json"))
            .unwrap_err();
        assert!(matches!(err, AssetError::MissingFile { .. }));
    }

    #[test]
    fn test_read_json_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let loader = AssetLoader::new(dir.path());
        let err = loader.read_json::<serde_json::Value>(&path).unwrap_err();
        assert!(matches!(err, AssetError::Parse { .. }));
    }

    #[test]
    fn test_keys() {
        let path = Path::new("/a/sprites/char_idle_down.json");
        assert_eq!(file_name_key(path), "char_idle_down.json");
        assert_eq!(file_stem_key(path), "char_idle_down");
    }
}
