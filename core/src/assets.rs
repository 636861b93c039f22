//! Assets and Catalogs
//!
//! ASCII art and text content, read once at startup and never mutated
//! afterwards.
//!
//! # Layout
//!
//! Relative to the asset root (`$WAIFU_ASSETS_DIR`, default `./assets`):
//!
//! ```text
//! expressions/neutral          head, eyes open
//! expressions/neutral-blink    head, eyes closed
//! expressions/-happy           head, reaction face
//! clothes/hoodie               starting outfit
//! clothes/**                   dress-up catalog (one outfit per file)
//! gifts/**                     gift catalog (one gift per file)
//! words-of-encouragement.txt   one line per encouragement
//! ```
//!
//! # Gift Files
//!
//! The first line may be a signed happiness delta (`+10`, `-2`, `7`). The
//! rest of the file is the reaction line. Both are optional.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{AssetError, StartupError};

/// Environment variable overriding the asset root
pub const ASSETS_DIR_ENV: &str = "WAIFU_ASSETS_DIR";

/// Neutral head
pub const NEUTRAL_HEAD: &str = "expressions/neutral";
/// Blinking head
pub const BLINK_HEAD: &str = "expressions/neutral-blink";
/// Happy head
pub const HAPPY_HEAD: &str = "expressions/-happy";
/// Starting outfit
pub const DEFAULT_BODY: &str = "clothes/hoodie";
/// Encouragement lines
pub const ENCOURAGEMENTS: &str = "words-of-encouragement.txt";
/// Dress-up catalog root
pub const CLOTHES_DIR: &str = "clothes";
/// Gift catalog root
pub const GIFTS_DIR: &str = "gifts";

/// Happiness granted by a gift file without a delta line
pub const DEFAULT_GIFT_HAPPINESS: i32 = 5;

/// Read access to text assets
pub trait AssetSource {
    /// Read the asset at a logical (root-relative) path
    fn read(&self, logical: &str) -> Result<String, AssetError>;

    /// List every file under a logical directory as
    /// `(relative name, content)`, sorted by name
    ///
    /// An empty directory is a valid, empty catalog.
    fn scan(&self, logical_dir: &str) -> io::Result<Catalog>;
}

/// One catalog entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Display name (path relative to the catalog root)
    pub name: String,
    /// File content
    pub payload: String,
}

/// An immutable list of named payloads
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from `(name, payload)` pairs
    #[must_use]
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Convenience constructor for tests and fixtures
    #[must_use]
    pub fn from_pairs<N: Into<String>, P: Into<String>>(
        pairs: impl IntoIterator<Item = (N, P)>,
    ) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(name, payload)| CatalogEntry {
                    name: name.into(),
                    payload: payload.into(),
                })
                .collect(),
        )
    }

    /// All entries
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Entry at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A gift parsed from its catalog entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gift {
    /// Display name
    pub name: String,
    /// Happiness delta applied on receipt
    pub happiness: i32,
    /// Reaction shown in the chat panel
    pub reaction: String,
}

impl Gift {
    /// Parse a gift entry
    #[must_use]
    pub fn parse(entry: &CatalogEntry) -> Self {
        let mut lines = entry.payload.lines();
        let first = lines.next().unwrap_or_default().trim();

        let (happiness, rest) = match first.parse::<i32>() {
            Ok(delta) => (delta, lines.collect::<Vec<_>>().join("\n")),
            Err(_) => (DEFAULT_GIFT_HAPPINESS, entry.payload.clone()),
        };

        let reaction = rest.trim();
        let reaction = if reaction.is_empty() {
            format!("Thank you for the {}!", entry.name)
        } else {
            reaction.to_string()
        };

        Self {
            name: entry.name.clone(),
            happiness,
            reaction,
        }
    }
}

/// Files on disk under a root directory
#[derive(Clone, Debug)]
pub struct FsAssets {
    root: PathBuf,
}

impl FsAssets {
    /// Assets under `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Assets under `$WAIFU_ASSETS_DIR`, or `./assets`
    #[must_use]
    pub fn from_env() -> Self {
        let root = std::env::var_os(ASSETS_DIR_ENV)
            .filter(|d| !d.is_empty())
            .map_or_else(|| PathBuf::from("assets"), PathBuf::from);
        Self::new(root)
    }

    /// Root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

// Path below the catalog root, always `/`-separated
fn display_name(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    Some(parts.join("/"))
}

impl AssetSource for FsAssets {
    fn read(&self, logical: &str) -> Result<String, AssetError> {
        let path = self.root.join(logical);
        fs::read_to_string(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                AssetError::NotFound { path }
            } else {
                AssetError::Read { path, source }
            }
        })
    }

    fn scan(&self, logical_dir: &str) -> io::Result<Catalog> {
        let root = self.root.join(logical_dir);
        let mut entries = Vec::new();

        let walker = WalkDir::new(&root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e));
        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }
            let Some(name) = display_name(&root, entry.path()) else {
                continue;
            };
            let payload = fs::read_to_string(entry.path())?;
            entries.push(CatalogEntry { name, payload });
        }

        Ok(Catalog::new(entries))
    }
}

/// Everything the companion needs from disk
#[derive(Clone, Debug)]
pub struct Assets {
    /// Head, eyes open
    pub neutral_head: String,
    /// Head, eyes closed
    pub blink_head: String,
    /// Head, reaction face
    pub happy_head: String,
    /// Starting outfit
    pub body: String,
    /// Encouragement lines (blank lines dropped)
    pub encouragements: Vec<String>,
    /// Dress-up catalog
    pub clothes: Catalog,
    /// Gift catalog
    pub gifts: Catalog,
}

impl Assets {
    /// Load all assets
    ///
    /// Missing art, a missing encouragement file, or a missing clothing
    /// directory is fatal. An empty clothing directory, or a missing or
    /// empty gift directory, is not: the companion reports it when the
    /// menu is opened.
    pub fn load(source: &impl AssetSource) -> Result<Self, StartupError> {
        let neutral_head = source.read(NEUTRAL_HEAD)?;
        let blink_head = source.read(BLINK_HEAD)?;
        let happy_head = source.read(HAPPY_HEAD)?;
        let body = source.read(DEFAULT_BODY)?;
        let encouragements = source
            .read(ENCOURAGEMENTS)?
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();

        let clothes = source
            .scan(CLOTHES_DIR)
            .map_err(|e| StartupError::Clothes {
                path: PathBuf::from(CLOTHES_DIR),
                source: e,
            })?;
        if clothes.is_empty() {
            tracing::warn!("Clothing catalog is empty");
        }

        let gifts = match source.scan(GIFTS_DIR) {
            Ok(gifts) => gifts,
            Err(e) => {
                tracing::warn!(error = %e, "No gift catalog, gift menu will be empty");
                Catalog::default()
            }
        };

        tracing::info!(
            clothes = clothes.len(),
            gifts = gifts.len(),
            "Assets loaded"
        );

        Ok(Self {
            neutral_head: trim_art(neutral_head),
            blink_head: trim_art(blink_head),
            happy_head: trim_art(happy_head),
            body: trim_art(body),
            encouragements,
            clothes: trim_catalog(clothes),
            gifts,
        })
    }
}

// Art files usually end in a newline; keep only the drawing itself
fn trim_art(art: String) -> String {
    art.trim_end_matches(['\n', '\r']).to_string()
}

fn trim_catalog(catalog: Catalog) -> Catalog {
    Catalog::new(
        catalog
            .entries
            .into_iter()
            .map(|e| CatalogEntry {
                name: e.name,
                payload: trim_art(e.payload),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(root, NEUTRAL_HEAD, "(o_o)\n");
        write(root, BLINK_HEAD, "(-_-)\n");
        write(root, HAPPY_HEAD, "(^_^)\n");
        write(root, DEFAULT_BODY, "/|hoodie|\\\n");
        write(root, "clothes/summer/dress", "/~dress~\\\n");
        write(root, ENCOURAGEMENTS, "You can do it!\n\n  Keep going!  \n");
        dir
    }

    #[test]
    fn test_load_full_fixture() {
        let dir = fixture();
        write(dir.path(), "gifts/cookie", "+10\nYum!");

        let assets = Assets::load(&FsAssets::new(dir.path())).unwrap();
        assert_eq!(assets.neutral_head, "(o_o)");
        assert_eq!(assets.body, "/|hoodie|\\");
        assert_eq!(assets.encouragements, vec!["You can do it!", "Keep going!"]);

        let names: Vec<_> = assets.clothes.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["hoodie", "summer/dress"]);
        assert_eq!(assets.clothes.get(1).unwrap().payload, "/~dress~\\");
        assert_eq!(assets.gifts.len(), 1);
    }

    #[test]
    fn test_missing_head_is_fatal() {
        let dir = fixture();
        fs::remove_file(dir.path().join(HAPPY_HEAD)).unwrap();

        let err = Assets::load(&FsAssets::new(dir.path())).unwrap_err();
        assert!(matches!(err, StartupError::Asset(AssetError::NotFound { .. })));
    }

    #[test]
    fn test_missing_gift_dir_is_not_fatal() {
        let dir = fixture();
        let assets = Assets::load(&FsAssets::new(dir.path())).unwrap();
        assert!(assets.gifts.is_empty());
    }

    #[test]
    fn test_scan_skips_hidden_files() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "gifts/.gitkeep", "");
        let catalog = FsAssets::new(dir.path()).scan(GIFTS_DIR).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_scan_nested_sorted_and_skips_hidden_dirs() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "gifts/sweets/cookie", "+5");
        write(dir.path(), "gifts/flowers", "+10");
        write(dir.path(), "gifts/.cache/stale", "+99");
        write(dir.path(), "gifts/apple", "+1");

        let catalog = FsAssets::new(dir.path()).scan(GIFTS_DIR).unwrap();
        let names: Vec<_> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["apple", "flowers", "sweets/cookie"]);
    }

    #[test]
    fn test_scan_missing_dir_errors() {
        let dir = TempDir::new().unwrap();
        assert!(FsAssets::new(dir.path()).scan(CLOTHES_DIR).is_err());
    }

    #[test]
    fn test_gift_parse_with_delta() {
        let entry = CatalogEntry {
            name: "flowers".to_string(),
            payload: "+10\nThey smell lovely!\n".to_string(),
        };
        let gift = Gift::parse(&entry);
        assert_eq!(gift.happiness, 10);
        assert_eq!(gift.reaction, "They smell lovely!");
    }

    #[test]
    fn test_gift_parse_negative_delta() {
        let entry = CatalogEntry {
            name: "homework".to_string(),
            payload: "-4".to_string(),
        };
        let gift = Gift::parse(&entry);
        assert_eq!(gift.happiness, -4);
        assert_eq!(gift.reaction, "Thank you for the homework!");
    }

    #[test]
    fn test_gift_parse_rejects_doubled_sign() {
        let entry = CatalogEntry {
            name: "pebble".to_string(),
            payload: "++5\nShiny.".to_string(),
        };
        let gift = Gift::parse(&entry);
        assert_eq!(gift.happiness, DEFAULT_GIFT_HAPPINESS);
        assert_eq!(gift.reaction, "++5\nShiny.");

        let mixed = CatalogEntry {
            name: "pebble".to_string(),
            payload: "+-5".to_string(),
        };
        assert_eq!(Gift::parse(&mixed).happiness, DEFAULT_GIFT_HAPPINESS);
    }

    #[test]
    fn test_gift_parse_without_delta() {
        let entry = CatalogEntry {
            name: "cookie".to_string(),
            payload: "So crunchy!".to_string(),
        };
        let gift = Gift::parse(&entry);
        assert_eq!(gift.happiness, DEFAULT_GIFT_HAPPINESS);
        assert_eq!(gift.reaction, "So crunchy!");
    }
}
