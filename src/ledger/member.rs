use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person taking part in a trip's shared expenses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Member {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            avatar_url: None,
        }
    }

    pub fn with_avatar(name: impl Into<String>, avatar_url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            avatar_url: Some(avatar_url.into()),
        }
    }
}
