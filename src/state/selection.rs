use crate::api::models::{Vendor, VendorId};

/// Currently selected vendors, in the order they were picked.
///
/// Selection is independent of the role filter: changing the filter never
/// touches it, only [`SelectionModel::select_all`] looks at what is visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionModel {
    ids: Vec<VendorId>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: VendorId) -> bool {
        if let Some(pos) = self.ids.iter().position(|x| *x == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Replace the selection with exactly `visible`.
    pub fn select_all<'a>(&mut self, visible: impl IntoIterator<Item = &'a Vendor>) {
        self.ids.clear();
        for v in visible {
            if !self.ids.contains(&v.id) {
                self.ids.push(v.id);
            }
        }
    }

    pub fn deselect_all(&mut self) {
        self.ids.clear();
    }

    pub fn is_selected(&self, id: VendorId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[VendorId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{Role, RoleFilter, VendorDirectory};

    #[test]
    fn toggle_keeps_ids_toggled_an_odd_number_of_times() {
        let mut sel = SelectionModel::new();
        let seq = [1, 2, 3, 2, 5, 1, 1, 7, 7, 7, 3];
        for id in seq {
            sel.toggle(VendorId(id));
        }
        let mut expected: Vec<u32> = (1..=7)
            .filter(|id| seq.iter().filter(|x| *x == id).count() % 2 == 1)
            .collect();
        let mut got: Vec<u32> = sel.ids().iter().map(|id| id.0).collect();
        expected.sort();
        got.sort();
        assert_eq!(got, expected);
        assert_eq!(got, vec![1, 5, 7]);
    }

    #[test]
    fn toggle_appends_in_pick_order() {
        let mut sel = SelectionModel::new();
        assert!(sel.toggle(VendorId(9)));
        assert!(sel.toggle(VendorId(2)));
        assert!(!sel.toggle(VendorId(9)));
        assert!(sel.toggle(VendorId(9)));
        assert_eq!(sel.ids(), &[VendorId(2), VendorId(9)]);
    }

    #[test]
    fn select_all_replaces_previous_selection() {
        let dir = VendorDirectory::seeded();
        let mut sel = SelectionModel::new();
        sel.toggle(VendorId(1)); // an electrician
        let cleaners = dir.visible(RoleFilter::Only(Role::Cleaner));
        sel.select_all(cleaners.iter().copied());
        for v in dir.all() {
            assert_eq!(sel.is_selected(v.id), v.role == Role::Cleaner, "{}", v.name);
        }
    }

    #[test]
    fn deselect_all_is_idempotent() {
        let dir = VendorDirectory::seeded();
        let mut sel = SelectionModel::new();
        sel.select_all(dir.all());
        sel.deselect_all();
        assert!(sel.is_empty());
        sel.deselect_all();
        assert!(sel.is_empty());
    }
}
