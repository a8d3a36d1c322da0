/// What a toggle did to the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    Selected(String),
    Cleared,
}

/// The movie currently open in the detail pane, if any.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    current: Option<String>,
}

impl Selection {
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_selected(&self, imdb_id: &str) -> bool {
        self.current.as_deref() == Some(imdb_id)
    }

    /// Select `imdb_id`, or clear the selection if it is already selected.
    pub fn toggle(&mut self, imdb_id: &str) -> SelectionChange {
        if self.is_selected(imdb_id) {
            self.current = None;
            SelectionChange::Cleared
        } else {
            self.current = Some(imdb_id.to_string());
            SelectionChange::Selected(imdb_id.to_string())
        }
    }

    /// Returns `true` if something was selected.
    pub fn clear(&mut self) -> bool {
        self.current.take().is_some()
    }
}
