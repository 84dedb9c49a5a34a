//! The activity catalog store.
//!
//! A [`Catalog`] owns every activity for the lifetime of the process. The set
//! of activity names is fixed at construction, so the outer map is never
//! mutated and needs no lock. Each record sits behind its own
//! [`RwLock`], and membership checks happen under the same write guard as the
//! mutation they protect.
//!
//! # Usage
//!
//! ```rust
//! # tokio_test::block_on(async {
//! use mergington_core::Catalog;
//!
//! let catalog = Catalog::builtin();
//! catalog.add_participant("Chess Club", "new@mergington.edu").await?;
//! assert!(catalog.get("Chess Club").await?.has_participant("new@mergington.edu"));
//! # Ok::<(), mergington_core::Error>(())
//! # }).unwrap();
//! ```

use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::activity::Activity;
use crate::error::{Error, Result};
use crate::seed::{self, SeedEntry};

/// Point-in-time copy of the whole catalog, in seed order.
pub type CatalogSnapshot = IndexMap<String, Activity>;

/// Process-wide store of activities keyed by name.
#[derive(Debug, Default)]
pub struct Catalog {
    activities: IndexMap<String, RwLock<Activity>>,
}

impl Catalog {
    /// Build a catalog from seed entries.
    ///
    /// Fails if two entries share a name or if an entry lists the same
    /// participant twice.
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = SeedEntry>,
    {
        let mut activities = IndexMap::new();
        for SeedEntry { name, activity } in entries {
            let mut seen = std::collections::HashSet::new();
            if let Some(dup) = activity
                .participants
                .iter()
                .find(|email| !seen.insert(email.as_str()))
            {
                return Err(Error::seed(format!(
                    "{dup} listed more than once for {name}"
                )));
            }
            if activities.contains_key(&name) {
                return Err(Error::DuplicateActivity { name });
            }
            activities.insert(name, RwLock::new(activity));
        }
        tracing::debug!(count = activities.len(), "catalog initialized");
        Ok(Self { activities })
    }

    /// Catalog holding the built-in Mergington seed.
    pub fn builtin() -> Self {
        let activities = seed::builtin()
            .into_iter()
            .map(|entry| (entry.name, RwLock::new(entry.activity)))
            .collect();
        Self { activities }
    }

    /// Number of activities.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Returns `true` if the catalog has no activities.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Activity names in seed order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.keys().map(String::as_str)
    }

    /// Snapshot every activity.
    pub async fn list(&self) -> CatalogSnapshot {
        let mut snapshot = IndexMap::with_capacity(self.activities.len());
        for (name, lock) in &self.activities {
            snapshot.insert(name.clone(), lock.read().await.clone());
        }
        snapshot
    }

    /// Snapshot one activity.
    pub async fn get(&self, name: &str) -> Result<Activity> {
        let lock = self.entry(name)?;
        Ok(lock.read().await.clone())
    }

    /// Append `email` to the activity's participants.
    pub async fn add_participant(&self, name: &str, email: &str) -> Result<()> {
        let mut activity = self.entry(name)?.write().await;
        if activity.has_participant(email) {
            return Err(Error::AlreadySignedUp {
                email: email.to_string(),
                activity: name.to_string(),
            });
        }
        activity.participants.push(email.to_string());
        tracing::info!(activity = name, email, "participant added");
        Ok(())
    }

    /// Remove `email` from the activity's participants.
    pub async fn remove_participant(&self, name: &str, email: &str) -> Result<()> {
        let mut activity = self.entry(name)?.write().await;
        let Some(index) = activity.participants.iter().position(|p| p == email) else {
            return Err(Error::NotSignedUp {
                email: email.to_string(),
                activity: name.to_string(),
            });
        };
        activity.participants.remove(index);
        tracing::info!(activity = name, email, "participant removed");
        Ok(())
    }

    fn entry(&self, name: &str) -> Result<&RwLock<Activity>> {
        self.activities
            .get(name)
            .ok_or_else(|| Error::not_found(name))
    }
}

// ============================================================================
// Tests
// ============================================================================
