//! Edits a component keeps on top of a value owned by its host.

/// An edit made against `base`. Once the host hands down a different value
/// the edit no longer applies and the host's value is shown again.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalEdit<T> {
    base: T,
    edited: T,
}

impl<T: Clone + PartialEq> LocalEdit<T> {
    pub fn new(base: T, edited: T) -> Self {
        Self { base, edited }
    }

    pub fn resolve(edit: Option<&Self>, current: &T) -> T {
        match edit {
            Some(edit) if edit.base == *current => edit.edited.clone(),
            _ => current.clone(),
        }
    }
}
