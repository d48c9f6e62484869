//! Transient drag-and-drop session state.

/// State of an in-progress drag.
///
/// Held by the session as `Option<DragSession>`: `None` when idle, `Some`
/// while a drag is active. At most one exists at a time; starting a new
/// drag implicitly ends the previous one, and the value is destroyed on
/// drop or cancel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSession {
    /// Id of the item being dragged.
    pub active_id: String,
    /// Selection as it stood when the drag began, after the drag-start
    /// adjustment.
    pub origin_selection: Vec<String>,
}

impl DragSession {
    /// Begin a drag of `active_id` with the given selection snapshot.
    pub fn new(active_id: impl Into<String>, origin_selection: Vec<String>) -> Self {
        Self {
            active_id: active_id.into(),
            origin_selection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_active_and_origin() {
        let session = DragSession::new("a", vec!["a".into(), "b".into()]);
        assert_eq!(session.active_id, "a");
        assert_eq!(session.origin_selection.len(), 2);
    }
}
