//! The page's ordered section list and the edits the editor UI issues on it.
//!
//! Positions are recomputed after every structural change; ids are allocated
//! once and never reused or reassigned, so the rendered page's anchors and
//! style scopes stay stable across reorders.

use crate::error::EditorError;
use folio_traits::{Confirm, ConfirmPrompt};
use folio_types::{BlockSlug, Section, SectionId};

/// A mutation issued by the editor UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionCommand {
    Add { slug: BlockSlug, title: Option<String> },
    Remove { index: usize },
    Duplicate { index: usize },
    Edit { index: usize },
    Reorder { from: usize, to: usize },
}

/// What a [`SectionCommand`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    Added(SectionId),
    Removed(Section),
    /// The user declined the confirmation; nothing changed.
    RemoveCancelled,
    Duplicated(SectionId),
    Editing(SectionId),
    Reordered,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionList {
    sections: Vec<Section>,
    active: Option<SectionId>,
    /// `None` once `u64::MAX` has been handed out or loaded.
    next_id: Option<SectionId>,
}

impl Default for SectionList {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionList {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            active: None,
            next_id: Some(SectionId::new(1)),
        }
    }

    /// Takes ownership of a loaded page, recomputing every index.
    ///
    /// Fresh ids continue after the highest loaded one. A page that already
    /// holds `u64::MAX` loads fine but can't grow.
    pub fn from_sections(sections: Vec<Section>) -> Self {
        let next_id = match sections.iter().map(|s| s.id()).max() {
            Some(max) => max.next(),
            None => Some(SectionId::new(1)),
        };
        if next_id.is_none() {
            log::warn!("Page holds section id {}; no new sections can be added", u64::MAX);
        }
        let mut list = Self {
            sections,
            active: None,
            next_id,
        };
        list.reindex();
        list
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn into_sections(self) -> Vec<Section> {
        self.sections
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Mutable access for editing a section's overrides or title.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Section> {
        self.sections.get_mut(index)
    }

    pub fn position(&self, id: SectionId) -> Option<usize> {
        self.sections.iter().position(|s| s.id() == id)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The section currently being edited.
    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.is_some() && self.sections.get(index).map(Section::id) == self.active
    }

    /// DOM anchor of the section at `index`, for scroll-to-section.
    pub fn anchor(&self, index: usize) -> Result<String, EditorError> {
        Ok(self.checked(index)?.anchor())
    }

    /// Appends a new section of block `slug`.
    pub fn add(&mut self, slug: impl Into<BlockSlug>, title: Option<String>) -> Result<SectionId, EditorError> {
        let id = self.allocate_id()?;
        let mut section = Section::new(id, slug);
        section.title = title;
        self.sections.push(section);
        self.reindex();
        log::debug!("Added section {} at index {}", id, self.sections.len() - 1);
        Ok(id)
    }

    /// Removes the section at `index` once `confirm` approves.
    ///
    /// Returns `Ok(None)` when the user declines.
    pub fn remove(&mut self, index: usize, confirm: &dyn Confirm) -> Result<Option<Section>, EditorError> {
        self.checked(index)?;
        if !confirm.confirm(&ConfirmPrompt::delete_section()) {
            log::debug!("Removal of section at index {} cancelled", index);
            return Ok(None);
        }

        let removed = self.sections.remove(index);
        if self.active == Some(removed.id()) {
            self.active = None;
        }
        self.reindex();
        log::debug!("Removed section {} from index {}", removed.id(), index);
        Ok(Some(removed))
    }

    /// Copies the section at `index` (overrides and title) under a fresh id,
    /// directly after the original.
    pub fn duplicate(&mut self, index: usize) -> Result<SectionId, EditorError> {
        self.checked(index)?;
        let id = self.allocate_id()?;
        let copy = self.sections[index].duplicate_as(id);
        self.sections.insert(index + 1, copy);
        self.reindex();
        log::debug!("Duplicated section at index {} as {}", index, id);
        Ok(id)
    }

    /// Marks the section at `index` as the one being edited.
    pub fn edit(&mut self, index: usize) -> Result<SectionId, EditorError> {
        let id = self.checked(index)?.id();
        self.active = Some(id);
        Ok(id)
    }

    /// Moves the section at `from` so that it ends up at `to`.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), EditorError> {
        self.checked(from)?;
        self.checked(to)?;
        if from != to {
            let section = self.sections.remove(from);
            self.sections.insert(to, section);
            self.reindex();
        }
        Ok(())
    }

    pub fn apply(&mut self, command: SectionCommand, confirm: &dyn Confirm) -> Result<CommandResult, EditorError> {
        match command {
            SectionCommand::Add { slug, title } => self.add(slug, title).map(CommandResult::Added),
            SectionCommand::Remove { index } => Ok(match self.remove(index, confirm)? {
                Some(section) => CommandResult::Removed(section),
                None => CommandResult::RemoveCancelled,
            }),
            SectionCommand::Duplicate { index } => self.duplicate(index).map(CommandResult::Duplicated),
            SectionCommand::Edit { index } => self.edit(index).map(CommandResult::Editing),
            SectionCommand::Reorder { from, to } => self.reorder(from, to).map(|_| CommandResult::Reordered),
        }
    }

    fn checked(&self, index: usize) -> Result<&Section, EditorError> {
        self.sections.get(index).ok_or(EditorError::IndexOutOfBounds {
            index,
            len: self.sections.len(),
        })
    }

    // Ids are never reused, even after the highest one was removed.
    fn allocate_id(&mut self) -> Result<SectionId, EditorError> {
        let id = self.next_id.ok_or(EditorError::IdSpaceExhausted)?;
        self.next_id = id.next();
        Ok(id)
    }

    fn reindex(&mut self) {
        for (index, section) in self.sections.iter_mut().enumerate() {
            section.set_index(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_traits::{AlwaysConfirm, NeverConfirm};
    use folio_types::{Category, Mapping};
    use serde_json::json;

    fn list() -> SectionList {
        let mut list = SectionList::new();
        list.add("hero", Some("Intro".to_string())).unwrap();
        list.add("text", None).unwrap();
        list.add("contact", None).unwrap();
        list
    }

    fn slugs(list: &SectionList) -> Vec<&str> {
        list.sections().iter().map(|s| s.slug.as_str()).collect()
    }

    fn assert_indices_match_positions(list: &SectionList) {
        for (position, section) in list.sections().iter().enumerate() {
            assert_eq!(section.index(), position);
        }
    }

    #[test]
    fn test_add_allocates_sequential_ids() {
        let list = list();
        let ids: Vec<u64> = list.sections().iter().map(|s| s.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(list.get(0).unwrap().title.as_deref(), Some("Intro"));
        assert_indices_match_positions(&list);
    }

    #[test]
    fn test_remove_with_confirmation() {
        let mut list = list();
        let removed = list.remove(1, &AlwaysConfirm).unwrap().unwrap();

        assert_eq!(removed.slug.as_str(), "text");
        assert_eq!(slugs(&list), vec!["hero", "contact"]);
        assert_indices_match_positions(&list);
    }

    #[test]
    fn test_remove_declined_changes_nothing() {
        let mut list = list();
        let before = list.clone();

        assert_eq!(list.remove(1, &NeverConfirm).unwrap(), None);
        assert_eq!(list, before);
    }

    #[test]
    fn test_remove_asks_with_delete_prompt() {
        let mut list = list();
        let confirm = |prompt: &ConfirmPrompt| prompt == &ConfirmPrompt::delete_section();
        assert!(list.remove(0, &confirm).unwrap().is_some());
    }

    #[test]
    fn test_removing_active_section_clears_active() {
        let mut list = list();
        list.edit(2).unwrap();
        list.remove(2, &AlwaysConfirm).unwrap();
        assert_eq!(list.active(), None);
    }

    #[test]
    fn test_duplicate_inserts_copy_after_source() {
        let mut list = list();
        list.get_mut(0).unwrap().contents =
            Mapping::try_from(json!({ "title": "Custom Title" })).unwrap();

        let id = list.duplicate(0).unwrap();

        assert_eq!(id, SectionId::new(4));
        assert_eq!(slugs(&list), vec!["hero", "hero", "text", "contact"]);
        let copy = list.get(1).unwrap();
        assert_eq!(copy.id(), id);
        assert_eq!(copy.overrides(Category::Contents), list.get(0).unwrap().overrides(Category::Contents));
        assert_eq!(copy.title.as_deref(), Some("Intro"));
        assert_indices_match_positions(&list);
    }

    #[test]
    fn test_reorder_keeps_ids() {
        let mut list = list();
        list.reorder(0, 2).unwrap();

        assert_eq!(slugs(&list), vec!["text", "contact", "hero"]);
        assert_eq!(list.get(2).unwrap().id(), SectionId::new(1));
        assert_indices_match_positions(&list);
    }

    #[test]
    fn test_edit_marks_active() {
        let mut list = list();
        let id = list.edit(1).unwrap();

        assert_eq!(list.active(), Some(id));
        assert!(list.is_active(1));
        assert!(!list.is_active(0));

        // Active follows the section, not the position.
        list.reorder(1, 0).unwrap();
        assert!(list.is_active(0));
    }

    #[test]
    fn test_apply_dispatches_commands() {
        let mut list = SectionList::new();
        let added = list
            .apply(SectionCommand::Add { slug: "hero".into(), title: None }, &AlwaysConfirm)
            .unwrap();
        assert_eq!(added, CommandResult::Added(SectionId::new(1)));

        let dup = list.apply(SectionCommand::Duplicate { index: 0 }, &AlwaysConfirm).unwrap();
        assert_eq!(dup, CommandResult::Duplicated(SectionId::new(2)));

        let cancelled = list.apply(SectionCommand::Remove { index: 0 }, &NeverConfirm).unwrap();
        assert_eq!(cancelled, CommandResult::RemoveCancelled);

        let moved = list.apply(SectionCommand::Reorder { from: 1, to: 0 }, &AlwaysConfirm).unwrap();
        assert_eq!(moved, CommandResult::Reordered);
        assert_eq!(list.get(0).unwrap().id(), SectionId::new(2));
    }

    #[test]
    fn test_from_sections_reindexes_and_continues_ids() {
        let mut list = SectionList::from_sections(vec![Section::new(10, "hero"), Section::new(4, "text")]);
        assert_indices_match_positions(&list);

        let id = list.add("contact", None).unwrap();
        assert_eq!(id, SectionId::new(11));
        assert_eq!(list.anchor(2).unwrap(), "11");
    }

    // Edge case tests

    #[test]
    fn test_ids_not_reused_after_removing_last() {
        let mut list = list();
        list.remove(2, &AlwaysConfirm).unwrap();
        assert_eq!(list.add("faq", None).unwrap(), SectionId::new(4));
    }

    #[test]
    fn test_out_of_bounds_indices() {
        let mut list = list();
        let err = EditorError::IndexOutOfBounds { index: 3, len: 3 };

        assert_eq!(list.remove(3, &AlwaysConfirm).unwrap_err(), err);
        assert_eq!(list.duplicate(3).unwrap_err(), err);
        assert_eq!(list.edit(3).unwrap_err(), err);
        assert_eq!(list.reorder(0, 3).unwrap_err(), err);
        assert_eq!(list.anchor(3).unwrap_err(), err);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_out_of_bounds_does_not_consume_ids() {
        let mut list = list();
        assert!(list.duplicate(9).is_err());
        assert!(list.apply(SectionCommand::Duplicate { index: 9 }, &AlwaysConfirm).is_err());
        assert_eq!(list.add("faq", None).unwrap(), SectionId::new(4));
    }

    #[test]
    fn test_default_starts_at_first_id() {
        let mut list = SectionList::default();
        assert_eq!(list.add("hero", None).unwrap(), SectionId::new(1));
    }

    #[test]
    fn test_max_id_page_loads_but_cannot_grow() {
        let mut list = SectionList::from_sections(vec![Section::new(u64::MAX, "hero"), Section::new(2, "text")]);
        assert_eq!(list.len(), 2);
        assert_indices_match_positions(&list);

        assert_eq!(list.add("faq", None).unwrap_err(), EditorError::IdSpaceExhausted);
        assert_eq!(list.duplicate(1).unwrap_err(), EditorError::IdSpaceExhausted);
        assert_eq!(slugs(&list), vec!["hero", "text"]);

        // Non-allocating edits keep working.
        list.reorder(0, 1).unwrap();
        assert_eq!(list.edit(1).unwrap(), SectionId::new(u64::MAX));
    }

    #[test]
    fn test_allocating_the_last_id_exhausts_the_list() {
        let mut list = SectionList::from_sections(vec![Section::new(u64::MAX - 1, "hero")]);
        assert_eq!(list.add("text", None).unwrap(), SectionId::new(u64::MAX));
        assert_eq!(list.add("faq", None).unwrap_err(), EditorError::IdSpaceExhausted);
        assert_eq!(list.len(), 2);
    }
}
