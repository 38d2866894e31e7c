use crate::types::Company;

/// Session-local set of watched company ids.
///
/// Defaults are applied at most once: the first time a non-empty company
/// collection arrives while the user has not touched the list. After that the
/// list is only changed by `toggle`, so emptying it by hand is permanent for
/// the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Watchlist {
    ids: Vec<u32>,
    seeded: bool,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if this call populated the list.
    pub fn seed_defaults(&mut self, companies: &[Company], defaults: &[u32]) -> bool {
        if self.seeded || companies.is_empty() {
            return false;
        }
        self.seeded = true;
        if !self.ids.is_empty() {
            return false;
        }
        self.ids = companies
            .iter()
            .filter(|c| defaults.contains(&c.id))
            .map(|c| c.id)
            .collect();
        !self.ids.is_empty()
    }

    /// Adds or removes `id`. Returns whether it is watched afterwards.
    pub fn toggle(&mut self, id: u32) -> bool {
        self.seeded = true;
        if let Some(pos) = self.ids.iter().position(|&x| x == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
