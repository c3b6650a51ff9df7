use anyhow::{anyhow, Result};
use std::path::PathBuf;
use tracing::{debug, warn};
use watchwise_models::WatchedMovie;

/// The persisted watched collection. Mirrors the original's local-storage
/// behavior: the whole list is rewritten on every mutation, no diffing.
pub struct WatchedStore {
    path: PathBuf,
    movies: Vec<WatchedMovie>,
}

impl WatchedStore {
    /// Open the store at `path`. A missing file is an empty collection; a
    /// corrupt file is logged and treated as empty (the next mutation
    /// overwrites it).
    pub fn open(path: PathBuf) -> Result<Self> {
        let movies = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            match serde_json::from_str::<Vec<WatchedMovie>>(&content) {
                Ok(movies) => {
                    debug!(count = movies.len(), "Loaded watched list");
                    movies
                }
                Err(e) => {
                    warn!("Watched list at {:?} is corrupt ({}), starting empty", path, e);
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        Ok(Self { path, movies })
    }

    pub fn movies(&self) -> &[WatchedMovie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, imdb_id: &str) -> Option<&WatchedMovie> {
        self.movies.iter().find(|m| m.imdb_id == imdb_id)
    }

    pub fn contains(&self, imdb_id: &str) -> bool {
        self.get(imdb_id).is_some()
    }

    /// Append `movie` unless an entry with the same id already exists.
    /// Returns whether the list changed; a change is persisted immediately.
    pub fn add(&mut self, movie: WatchedMovie) -> Result<bool> {
        if self.contains(&movie.imdb_id) {
            debug!(imdb_id = %movie.imdb_id, "Already watched, not adding");
            return Ok(false);
        }
        self.movies.push(movie);
        self.persist()?;
        Ok(true)
    }

    /// Remove the entry matching `imdb_id`, if present.
    pub fn remove(&mut self, imdb_id: &str) -> Result<bool> {
        let before = self.movies.len();
        self.movies.retain(|m| m.imdb_id != imdb_id);
        if self.movies.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.movies)
            .map_err(|e| anyhow!("Failed to serialize watched list: {}", e))?;
        std::fs::write(&self.path, json)
            .map_err(|e| anyhow!("Failed to write watched list: {}", e))?;
        debug!(count = self.movies.len(), "Persisted watched list");
        Ok(())
    }
}
