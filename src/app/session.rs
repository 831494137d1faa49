use std::path::{Path, PathBuf};

use crate::error::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoImageSelected,
    ImageSelected,
}

/// The operator's current selection. Overwritten by each new selection, never cleared.
#[derive(Debug, Default)]
pub struct Session {
    selected: Option<PathBuf>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, path: PathBuf) {
        self.selected = Some(path);
    }

    pub fn selected(&self) -> Result<&Path, SessionError> {
        self.selected
            .as_deref()
            .ok_or(SessionError::NoImageSelected)
    }

    pub fn state(&self) -> SessionState {
        match self.selected {
            Some(_) => SessionState::ImageSelected,
            None => SessionState::NoImageSelected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_without_selection() {
        let session = Session::new();
        assert_eq!(session.state(), SessionState::NoImageSelected);
        assert_eq!(session.selected(), Err(SessionError::NoImageSelected));
    }

    #[test]
    fn new_selection_overwrites_previous() {
        let mut session = Session::new();
        session.select(PathBuf::from("a.png"));
        session.select(PathBuf::from("b.jpg"));
        assert_eq!(session.state(), SessionState::ImageSelected);
        assert_eq!(session.selected().unwrap(), Path::new("b.jpg"));
    }
}
