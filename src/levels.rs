//! Level packs
//!
//! A pack is a JSON array of maps; each map is an array of row strings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Maps used when no pack file is given. The player symbol comes first in
/// row-major order on every map.
const BUILTIN_LEVELS: &[&[&str]] = &[
    &[
        "                    ",
        " @       =     o    ",
        " xxxxx  xxxx  xxxx  ",
        "     x!!x  x!!x     ",
        "     xxxx  xxxx     ",
    ],
    &[
        "                      ",
        "  @     o      o      ",
        "  xxxxxxxxxxxxxxxxx   ",
        "     |        v       ",
        "                      ",
        "!!!!!!!!!!!!!!!!!!!!!!",
    ],
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelPack {
    pub levels: Vec<Vec<String>>,
}

impl LevelPack {
    pub fn builtin() -> Self {
        Self {
            levels: BUILTIN_LEVELS
                .iter()
                .map(|rows| rows.iter().map(|r| r.to_string()).collect())
                .collect(),
        }
    }

    pub fn from_json(json: &str) -> SimResult<Self> {
        let pack: Self = serde_json::from_str(json)?;
        if pack.levels.is_empty() {
            return Err(SimError::EmptyPack);
        }
        Ok(pack)
    }

    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let pack = Self::from_json(&json)?;
        log::info!("Loaded {} levels from {}", pack.len(), path.as_ref().display());
        Ok(pack)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ActorType, LevelParser, extended_symbols};

    #[test]
    fn test_from_json() {
        let pack = LevelPack::from_json(r#"[["x@x"], ["@ o", "xxx"]]"#).unwrap();
        assert_eq!(pack.len(), 2);
        assert_eq!(pack.levels[1], vec!["@ o".to_string(), "xxx".to_string()]);
    }

    #[test]
    fn test_empty_pack_rejected() {
        assert!(matches!(LevelPack::from_json("[]"), Err(SimError::EmptyPack)));
        assert!(matches!(LevelPack::from_json(r#"{"x": 1}"#), Err(SimError::Json(_))));
    }

    #[test]
    fn test_builtin_levels_parse() {
        let parser = LevelParser::new(extended_symbols());
        let pack = LevelPack::builtin();
        assert!(!pack.is_empty());
        for rows in &pack.levels {
            let level = parser.parse(rows.as_slice());
            assert!(level.width() > 0);
            assert_eq!(level.player().map(|p| p.actor_type()), Some(ActorType::Player));
            assert!(!level.no_more_actors(ActorType::Coin));
            assert!(!level.no_more_actors(ActorType::Player));
        }
    }
}
