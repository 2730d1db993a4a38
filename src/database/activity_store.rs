use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use crate::models::Activity;
use crate::services::validation::has_capacity;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Activity not found")]
    NotFound,

    #[error("Activity is at maximum capacity")]
    Full,

    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Shared in-memory activity table, keyed by activity name.
///
/// Every mutation runs its checks and its write under one lock acquisition,
/// so two concurrent signups can never both take the last free place.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    inner: Arc<RwLock<BTreeMap<String, Activity>>>,
}

impl ActivityStore {
    pub fn new(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    pub fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.inner.read().clone()
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.inner.read().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends `email` to the participant list of `name`.
    ///
    /// Checks run in order: existence, capacity, duplicate.
    pub fn add_participant(&self, name: &str, email: &str) -> StoreResult<usize> {
        let mut activities = self.inner.write();
        let activity = activities.get_mut(name).ok_or(StoreError::NotFound)?;

        if !has_capacity(activity.participants.len(), activity.max_participants) {
            return Err(StoreError::Full);
        }
        if activity.is_signed_up(email) {
            return Err(StoreError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(activity.participants.len())
    }

    /// Removes `email` from `name`, keeping the remaining signup order.
    pub fn remove_participant(&self, name: &str, email: &str) -> StoreResult<usize> {
        let mut activities = self.inner.write();
        let activity = activities.get_mut(name).ok_or(StoreError::NotFound)?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(StoreError::NotSignedUp);
        };

        activity.participants.remove(pos);
        Ok(activity.participants.len())
    }
}
