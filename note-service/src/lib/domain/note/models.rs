use std::fmt;
use std::str::FromStr;

use crate::domain::note::errors::NoteIdError;
use crate::domain::user::models::Identity;

/// Short text note attributed to the user who last wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub data: String,
    pub author: String,
}

/// Store-assigned note identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteId(pub i64);

impl FromStr for NoteId {
    type Err = NoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(NoteId)
            .map_err(|e| NoteIdError::InvalidFormat(format!("{}: {}", s, e)))
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to write note content on behalf of an identity.
///
/// Used for both creation and update; an update re-attributes the note.
#[derive(Debug, Clone)]
pub struct WriteNoteCommand {
    pub data: String,
    pub author: Identity,
}

impl WriteNoteCommand {
    pub fn new(data: String, author: Identity) -> Self {
        Self { data, author }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_id_parse() {
        assert_eq!("12".parse::<NoteId>(), Ok(NoteId(12)));
        assert!("twelve".parse::<NoteId>().is_err());
        assert!("".parse::<NoteId>().is_err());
    }
}
