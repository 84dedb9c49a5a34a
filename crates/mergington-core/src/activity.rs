//! The activity record.

use serde::{Deserialize, Serialize};

/// An extracurricular offering and its current participants.
///
/// The activity's name is not stored here; it is the key under which the
/// record lives in the [`Catalog`](crate::Catalog).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-text description.
    pub description: String,
    /// Free-text meeting schedule.
    pub schedule: String,
    /// Advertised capacity. Not enforced.
    pub max_participants: u32,
    /// Participant emails in signup order.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Create an activity with no participants.
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder-style helper that appends initial participants.
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants
            .extend(participants.into_iter().map(Into::into));
        self
    }

    /// Returns `true` if `email` is a participant.
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Remaining advertised spots, saturating at zero.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    /// Returns `true` once the participant count reaches the advertised capacity.
    pub fn is_full(&self) -> bool {
        self.spots_left() == 0
    }
}
