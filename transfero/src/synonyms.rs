//! Synonym lookup behind a narrow provider interface.
//!
//! The production provider reads a gzip-compressed JSON database (word →
//! synonym list) from disk once per process. A missing or unreadable
//! database degrades to empty synonym sets; a learner losing synonym
//! credit is better than a dead server.

use std::collections::{BTreeSet, HashMap};
use std::io::Read;
use std::path::Path;

pub trait Synonyms: Send + Sync {
    fn get(&self, word: &str) -> BTreeSet<String>;
}

/// Environment variable naming the synonym database; falls back to
/// `data/wordnet_synonyms.json.gz` relative to the working directory.
pub const SYNONYM_DB_ENV: &str = "VOCAB_TUISTER_WORDNET";
pub const SYNONYM_DB_DEFAULT: &str = "data/wordnet_synonyms.json.gz";

/// A WordNet-style synonym database decompressed into memory.
pub struct SynonymDb {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymDb {
    pub fn open(path: &Path) -> std::io::Result<SynonymDb> {
        let file = std::fs::File::open(path)?;
        let mut decoder = flate2::read::GzDecoder::new(file);
        let mut raw = String::new();
        decoder.read_to_string(&mut raw)?;
        let entries: HashMap<String, Vec<String>> = serde_json::from_str(&raw)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        log::info!("loaded {} synonym entries from {}", entries.len(), path.display());
        Ok(SynonymDb { entries })
    }

    /// Opens the configured database, or an empty one with a warning when
    /// it cannot be read.
    pub fn open_default() -> SynonymDb {
        let path = std::env::var(SYNONYM_DB_ENV).unwrap_or_else(|_| SYNONYM_DB_DEFAULT.to_string());
        match SynonymDb::open(Path::new(&path)) {
            Ok(db) => db,
            Err(error) => {
                log::warn!("synonym database '{path}' unavailable ({error}); synonyms disabled");
                SynonymDb { entries: HashMap::new() }
            }
        }
    }

    pub fn from_entries(entries: HashMap<String, Vec<String>>) -> SynonymDb {
        SynonymDb { entries }
    }
}

impl Synonyms for SynonymDb {
    fn get(&self, word: &str) -> BTreeSet<String> {
        self.entries
            .get(word)
            .map(|synonyms| synonyms.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// A provider with no entries, for configurations without a database.
pub struct NoSynonyms;

impl Synonyms for NoSynonyms {
    fn get(&self, _word: &str) -> BTreeSet<String> {
        BTreeSet::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_entries() {
        let db = SynonymDb::from_entries(HashMap::from([(
            "hear".to_string(),
            vec!["listen".to_string(), "heed".to_string()],
        )]));
        let synonyms = db.get("hear");
        assert!(synonyms.contains("listen"));
        assert!(synonyms.contains("heed"));
        assert!(db.get("unknown").is_empty());
    }

    #[test]
    fn test_gzip_round_trip() {
        use std::io::Write;
        let mut encoder =
            flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(br#"{"take": ["seize", "capture"]}"#)
            .unwrap();
        let bytes = encoder.finish().unwrap();

        let dir = std::env::temp_dir().join("transfero-synonym-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("synonyms.json.gz");
        std::fs::write(&path, bytes).unwrap();

        let db = SynonymDb::open(&path).unwrap();
        assert!(db.get("take").contains("seize"));
    }
}
