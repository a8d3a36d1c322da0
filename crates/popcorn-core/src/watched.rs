//! Session-local watched list.
//!
//! Insertion-ordered; entries are never removed. At most one entry per
//! IMDb id: re-adding a movie is rejected rather than overwriting the
//! earlier rating.

use crate::error::PopcornError;
use crate::models::WatchedEntry;

/// Aggregates shown above the watched list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WatchedSummary {
    pub count: usize,
    pub avg_imdb_rating: f32,
    pub avg_user_rating: f32,
    pub avg_runtime_minutes: f32,
}

#[derive(Debug, Clone, Default)]
pub struct WatchedList {
    entries: Vec<WatchedEntry>,
}

impl WatchedList {
    pub fn add(&mut self, entry: WatchedEntry) -> Result<(), PopcornError> {
        if self.contains(&entry.imdb_id) {
            return Err(PopcornError::AlreadyWatched(entry.imdb_id));
        }
        tracing::debug!(imdb_id = %entry.imdb_id, rating = entry.user_rating, "added to watched");
        self.entries.push(entry);
        Ok(())
    }

    pub fn contains(&self, imdb_id: &str) -> bool {
        self.get(imdb_id).is_some()
    }

    pub fn get(&self, imdb_id: &str) -> Option<&WatchedEntry> {
        self.entries.iter().find(|e| e.imdb_id == imdb_id)
    }

    pub fn entries(&self) -> &[WatchedEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summary(&self) -> WatchedSummary {
        if self.entries.is_empty() {
            return WatchedSummary::default();
        }
        let n = self.entries.len() as f32;
        let avg = |f: fn(&WatchedEntry) -> f32| self.entries.iter().map(f).sum::<f32>() / n;

        WatchedSummary {
            count: self.entries.len(),
            avg_imdb_rating: avg(|e| e.imdb_rating),
            avg_user_rating: avg(|e| f32::from(e.user_rating)),
            avg_runtime_minutes: avg(|e| e.runtime_minutes as f32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, imdb: f32, user: u8, runtime: u32) -> WatchedEntry {
        WatchedEntry {
            imdb_id: id.into(),
            title: format!("Movie {id}"),
            year: "2000".into(),
            poster_url: None,
            imdb_rating: imdb,
            runtime_minutes: runtime,
            user_rating: user,
        }
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut list = WatchedList::default();
        for (i, id) in ["tt3", "tt1", "tt2"].iter().enumerate() {
            list.add(entry(id, 7.0, 5, 100)).unwrap();
            assert_eq!(list.entries().len(), i + 1);
        }
        let ids: Vec<&str> = list.entries().iter().map(|e| e.imdb_id.as_str()).collect();
        assert_eq!(ids, ["tt3", "tt1", "tt2"]);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut list = WatchedList::default();
        list.add(entry("tt1", 7.0, 5, 100)).unwrap();

        let err = list.add(entry("tt1", 7.0, 9, 100)).unwrap_err();
        assert!(matches!(err, PopcornError::AlreadyWatched(id) if id == "tt1"));
        assert_eq!(list.entries().len(), 1);
        // The first rating stands
        assert_eq!(list.get("tt1").unwrap().user_rating, 5);
    }

    #[test]
    fn test_summary() {
        let mut list = WatchedList::default();
        list.add(entry("tt1", 8.0, 10, 120)).unwrap();
        list.add(entry("tt2", 6.0, 6, 90)).unwrap();

        let s = list.summary();
        assert_eq!(s.count, 2);
        assert!((s.avg_imdb_rating - 7.0).abs() < 1e-6);
        assert!((s.avg_user_rating - 8.0).abs() < 1e-6);
        assert!((s.avg_runtime_minutes - 105.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_summary_is_zero() {
        let list = WatchedList::default();
        assert!(list.is_empty());
        assert_eq!(list.summary(), WatchedSummary::default());
    }
}
