//! Sprites: immutable multi-line character art, loaded once at startup.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

/// Sub-directory holding the ship animation frames.
pub const SHIP_DIR: &str = "spaceship";
/// Sub-directory holding the garbage sprites.
pub const GARBAGE_DIR: &str = "garbage";
/// Sub-directory holding the game-over banner.
pub const GAMEOVER_DIR: &str = "gameover";
/// File stem of the game-over banner inside [`GAMEOVER_DIR`].
pub const GAMEOVER_NAME: &str = "gameover";

#[derive(Debug, Error)]
pub enum SpriteError {
    #[error("sprite directory not found: {}", .0.display())]
    MissingDir(PathBuf),

    #[error("failed to read sprite {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("sprite directory {} contains no sprites", .0.display())]
    Empty(PathBuf),

    #[error("sprite `{0}` is missing")]
    Missing(String),
}

/// A static block of text art.
///
/// The size is measured once: `rows` is the number of lines, `cols` the
/// length (in chars) of the longest one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    lines: Vec<String>,
    rows: usize,
    cols: usize,
}

impl Sprite {
    pub fn new(text: &str) -> Self {
        let lines: Vec<String> = text.lines().map(str::to_owned).collect();
        let rows = lines.len();
        let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        Self { lines, rows, cols }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// (rows, cols)
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Length of the first line, used to center banners.
    pub fn first_line_width(&self) -> usize {
        self.lines.first().map(|l| l.chars().count()).unwrap_or(0)
    }
}

/// Name -> sprite mapping for one directory.
pub type SpriteMap = BTreeMap<String, Rc<Sprite>>;

/// Load every regular file of `dir` as a sprite keyed by its file stem.
pub fn load_dir(dir: &Path) -> Result<SpriteMap, SpriteError> {
    if !dir.is_dir() {
        return Err(SpriteError::MissingDir(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|source| SpriteError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut sprites = SpriteMap::new();
    for entry in entries {
        let entry = entry.map_err(|source| SpriteError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let text = fs::read_to_string(&path).map_err(|source| SpriteError::Io {
            path: path.clone(),
            source,
        })?;
        sprites.insert(name.to_owned(), Rc::new(Sprite::new(&text)));
    }

    Ok(sprites)
}

/// All sprites the game needs, grouped by role.
#[derive(Debug, Clone)]
pub struct SpriteLibrary {
    /// Ship animation frames, in file-name order.
    pub ship: Vec<Rc<Sprite>>,
    pub garbage: SpriteMap,
    pub gameover: Rc<Sprite>,
}

impl SpriteLibrary {
    /// Load the library from `root/{spaceship,garbage,gameover}`.
    pub fn load(root: &Path) -> Result<Self, SpriteError> {
        if !root.is_dir() {
            return Err(SpriteError::MissingDir(root.to_path_buf()));
        }

        let ship_dir = root.join(SHIP_DIR);
        let ship: Vec<Rc<Sprite>> = load_dir(&ship_dir)?.into_values().collect();
        if ship.is_empty() {
            return Err(SpriteError::Empty(ship_dir));
        }

        let garbage_dir = root.join(GARBAGE_DIR);
        let garbage = load_dir(&garbage_dir)?;
        if garbage.is_empty() {
            return Err(SpriteError::Empty(garbage_dir));
        }

        let gameover = load_dir(&root.join(GAMEOVER_DIR))?
            .remove(GAMEOVER_NAME)
            .ok_or_else(|| SpriteError::Missing(GAMEOVER_NAME.to_owned()))?;

        Ok(Self {
            ship,
            garbage,
            gameover,
        })
    }

    /// Build a library from in-memory text (tests, benches).
    pub fn from_parts(ship: &[&str], garbage: &[(&str, &str)], gameover: &str) -> Self {
        Self {
            ship: ship.iter().map(|t| Rc::new(Sprite::new(t))).collect(),
            garbage: garbage
                .iter()
                .map(|(name, t)| ((*name).to_owned(), Rc::new(Sprite::new(t))))
                .collect(),
            gameover: Rc::new(Sprite::new(gameover)),
        }
    }

    /// Garbage sprites as a slice-friendly list, in name order.
    pub fn garbage_list(&self) -> Vec<Rc<Sprite>> {
        self.garbage.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_uses_longest_line() {
        let s = Sprite::new("  .\n .'.\n|o o|\n");
        assert_eq!(s.size(), (3, 5));
        assert_eq!(s.first_line_width(), 3);
    }

    #[test]
    fn empty_text_has_zero_size() {
        let s = Sprite::new("");
        assert_eq!(s.size(), (0, 0));
        assert!(s.lines().is_empty());
    }

    #[test]
    fn size_counts_chars_not_bytes() {
        let s = Sprite::new("ÿÿÿ");
        assert_eq!(s.cols(), 3);
    }

    #[test]
    fn load_dir_keys_by_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("duck.txt"), "<o)\n ( )").unwrap();
        std::fs::write(dir.path().join("lamp.txt"), "|").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let sprites = load_dir(dir.path()).unwrap();
        assert_eq!(sprites.len(), 2);
        assert_eq!(sprites["duck"].size(), (2, 3));
        assert_eq!(sprites["lamp"].size(), (1, 1));
    }

    #[test]
    fn load_dir_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(load_dir(&missing), Err(SpriteError::MissingDir(p)) if p == missing));
    }
}
