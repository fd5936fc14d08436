use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// The role of the author of a chat message
pub enum Role {
    System,
    User,
    Assistant,
    Data,
}
