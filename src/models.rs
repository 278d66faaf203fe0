//! Frontend Models
//!
//! Data structures matching the remote todo API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two people in the battle. Also the collection key and the
/// literal path segment used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Participant {
    Boy,
    Girl,
}

impl Participant {
    pub const ALL: [Participant; 2] = [Participant::Boy, Participant::Girl];

    pub fn as_str(&self) -> &'static str {
        match self {
            Participant::Boy => "boy",
            Participant::Girl => "girl",
        }
    }

    /// Single-character discriminator used in temporary ids
    pub fn initial(&self) -> char {
        match self {
            Participant::Boy => 'b',
            Participant::Girl => 'g',
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Participant::Boy => "남자친구",
            Participant::Girl => "여자친구",
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Todo item (matches API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
    /// Local only: creation not yet confirmed by the server
    #[serde(skip)]
    pub pending: bool,
}

impl TodoItem {
    /// Item appended before the server has assigned its id
    pub fn optimistic(temp_id: String, text: String) -> Self {
        Self {
            id: temp_id,
            text,
            completed: false,
            pending: true,
        }
    }
}

/// Response body of `GET /todos`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoLists {
    #[serde(default)]
    pub boy_todos: Vec<TodoItem>,
    #[serde(default)]
    pub girl_todos: Vec<TodoItem>,
}

impl TodoLists {
    pub fn of(&self, participant: Participant) -> &[TodoItem] {
        match participant {
            Participant::Boy => &self.boy_todos,
            Participant::Girl => &self.girl_todos,
        }
    }

    pub fn of_mut(&mut self, participant: Participant) -> &mut Vec<TodoItem> {
        match participant {
            Participant::Boy => &mut self.boy_todos,
            Participant::Girl => &mut self.girl_todos,
        }
    }
}

/// Request body of `POST /todos/{participant}`
#[derive(Debug, Serialize)]
pub struct CreateTodoArgs<'a> {
    pub text: &'a str,
}
