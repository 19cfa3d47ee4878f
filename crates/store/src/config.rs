use std::path::PathBuf;

use geoselect_shared::geo::MIN_AREA_SIZE_DEG;

use crate::persistence::DEFAULT_STORAGE_KEY;

const DEFAULT_DB_PATH: &str = "data/areas.redb";

#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub db_path: PathBuf,
    pub storage_key: String,
    pub min_area_size: f64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            min_area_size: MIN_AREA_SIZE_DEG,
        }
    }
}

impl StoreConfig {
    /// Read `AREAS_DB_PATH`, `AREAS_STORAGE_KEY` and `AREAS_MIN_SIZE`, falling
    /// back to defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`StoreConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let db_path = lookup("AREAS_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);
        let storage_key = lookup("AREAS_STORAGE_KEY")
            .filter(|k| !k.trim().is_empty())
            .unwrap_or(defaults.storage_key);
        let min_area_size = match lookup("AREAS_MIN_SIZE") {
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() && v >= 0.0 => v,
                _ => {
                    tracing::warn!(value = %raw, "Invalid AREAS_MIN_SIZE, using default");
                    defaults.min_area_size
                }
            },
            None => defaults.min_area_size,
        };

        StoreConfig {
            db_path,
            storage_key,
            min_area_size,
        }
    }
}
