//! Resolution records.

use resolutions_security::OwnedResource;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A new-year's resolution owned by one identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub id: Uuid,
    pub text: String,
    /// Name of the owning identity.
    pub owner: String,
    pub completed: bool,
}

impl Resolution {
    /// A fresh, incomplete resolution with a random id.
    #[must_use]
    pub fn new(text: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            owner: owner.into(),
            completed: false,
        }
    }
}

impl OwnedResource for Resolution {
    fn owner(&self) -> &str {
        &self.owner
    }
}

/// Field-level change to a stored resolution. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionPatch {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl ResolutionPatch {
    /// Apply the set fields to `resolution`.
    pub fn apply_to(self, resolution: &mut Resolution) {
        if let Some(text) = self.text {
            resolution.text = text;
        }
        if let Some(completed) = self.completed {
            resolution.completed = completed;
        }
    }
}
