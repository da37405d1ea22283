use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Key under which the theme preference is stored
pub const THEME_KEY: &str = "theme";

/// Small persisted key/value store
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for Box<P> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// SQLite-backed preferences
pub struct PrefsDb {
    conn: Connection,
}

impl PrefsDb {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open preferences at {}", path.display()))?;

        let mut prefs = PrefsDb { conn };
        prefs.init_schema()?;

        Ok(prefs)
    }

    pub fn default_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("meterdash").join("prefs.db")
        } else {
            // Fallback to temp dir if no config dir available
            crate::utils::get_prefs_fallback_path()
        }
    }

    fn init_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            ) WITHOUT ROWID;
            ",
        )?;

        Ok(())
    }
}

impl PreferenceStore for PrefsDb {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM preferences WHERE key = ?1")?;

        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO preferences (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;

        Ok(())
    }
}

/// Session-only preferences, used when the database is unavailable
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    values: HashMap<String, String>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefs_db_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.db");

        let mut prefs = PrefsDb::open(&path).unwrap();
        assert_eq!(prefs.get(THEME_KEY).unwrap(), None);

        prefs.set(THEME_KEY, "dark").unwrap();
        prefs.set(THEME_KEY, "light").unwrap();
        assert_eq!(prefs.get(THEME_KEY).unwrap().as_deref(), Some("light"));

        // Survives reopening
        drop(prefs);
        let reopened = PrefsDb::open(&path).unwrap();
        assert_eq!(reopened.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_memory_prefs() {
        let mut prefs = MemoryPrefs::new();
        assert_eq!(prefs.get("missing").unwrap(), None);
        prefs.set("k", "v").unwrap();
        assert_eq!(prefs.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut prefs: Box<dyn PreferenceStore> = Box::new(MemoryPrefs::new());
        prefs.set(THEME_KEY, "dark").unwrap();
        assert_eq!(prefs.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }
}
