//! Reading cast datasets.
//!
//! A dataset is JSON: either a bare array of characters or an object with a
//! `characters` array. Files ending in `.br` are Brotli-compressed.

use brotli::Decompressor;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::generator::{generate_characters, GeneratorConfig};
use crate::model::{Cast, Character};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid cast JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate character id '{0}'")]
    DuplicateId(String),
}

/// Source of a cast.
///
/// Implemented by the file reader and by the generator, so the viewer can load
/// either through the same path.
pub trait CastReader: Send {
    /// Reads a cast. Readers that do not need a path ignore it.
    fn read(&self, path: &Path) -> Result<Cast, DatasetError>;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DatasetFile {
    Bare(Vec<Character>),
    Wrapped { characters: Vec<Character> },
}

impl DatasetFile {
    fn into_characters(self) -> Vec<Character> {
        match self {
            DatasetFile::Bare(characters) => characters,
            DatasetFile::Wrapped { characters } => characters,
        }
    }
}

/// Parses a dataset from JSON text and validates identifier uniqueness.
pub fn parse_cast(json: &str) -> Result<Cast, DatasetError> {
    let file: DatasetFile = serde_json::from_str(json)?;
    Cast::try_new(file.into_characters()).map_err(DatasetError::DuplicateId)
}

/// Reads a dataset file from disk, decompressing `.br` files.
pub fn read_cast_file(path: &Path) -> Result<Cast, DatasetError> {
    let io_error = |source| DatasetError::Io { path: path.to_path_buf(), source };

    let file = File::open(path).map_err(io_error)?;
    let compressed = path.extension().is_some_and(|ext| ext == "br");

    let mut reader: Box<dyn Read> = if compressed {
        Box::new(Decompressor::new(file, 4096))
    } else {
        Box::new(BufReader::new(file))
    };

    let mut json = String::new();
    reader.read_to_string(&mut json).map_err(io_error)?;

    let cast = parse_cast(&json)?;
    info!(path = %path.display(), characters = cast.len(), compressed, "Loaded cast");
    Ok(cast)
}

/// Reads JSON dataset files.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCastReader;

impl JsonCastReader {
    pub fn new() -> Self {
        Self
    }
}

impl CastReader for JsonCastReader {
    fn read(&self, path: &Path) -> Result<Cast, DatasetError> {
        read_cast_file(path)
    }
}

/// Produces a seeded random cast instead of reading a file.
#[derive(Debug, Clone)]
pub struct GeneratedCastReader {
    config: GeneratorConfig,
}

impl GeneratedCastReader {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }
}

impl CastReader for GeneratedCastReader {
    fn read(&self, _path: &Path) -> Result<Cast, DatasetError> {
        Cast::try_new(generate_characters(&self.config)).map_err(DatasetError::DuplicateId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let cast = parse_cast(r#"[{"id": "1", "name": "Solo"}]"#).unwrap();
        assert_eq!(cast.len(), 1);
        assert!(cast.characters()[0].timeline_points.is_empty());
    }

    #[test]
    fn test_parse_wrapped_object() {
        let cast = parse_cast(r#"{"characters": [{"id": "1", "name": "A"}, {"id": "2", "name": "B"}]}"#).unwrap();
        assert_eq!(cast.len(), 2);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = parse_cast(r#"[{"id": "1", "name": "A"}, {"id": "1", "name": "B"}]"#).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateId(ref id) if id == "1"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_cast("[{"), Err(DatasetError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = read_cast_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
        assert!(err.to_string().contains("here.json"));
    }

    #[test]
    fn test_generated_reader_ignores_path() {
        let reader = GeneratedCastReader::new(GeneratorConfig { characters: 6, seed: 7, ..GeneratorConfig::default() });
        let cast = reader.read(Path::new("")).unwrap();
        assert_eq!(cast.len(), 6);
    }
}
