//! Tag-set partitioning for the assign/unassign view.
//!
//! The storage layer hands over the full tag list, the target's directly
//! assigned tags, and (for models) the tags inherited from the parent
//! category. This module computes the three presentation sets and the
//! column-width hint; it never touches the database.

use serde::Serialize;
use std::collections::HashSet;

use crate::types::DbId;

/// A tag as the partition sees it: id + name, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagRef {
    pub id: DbId,
    pub name: String,
}

/// The three-way split rendered by the tag-assignment view.
#[derive(Debug, Clone, Serialize)]
pub struct TagPartition {
    /// Tags directly associated with the target, sorted by (name, id).
    pub assigned: Vec<TagRef>,
    /// Every other tag in the system, sorted by (name, id).
    pub available: Vec<TagRef>,
    /// Tags shown read-only from the parent category (models only). Never
    /// add/remove candidates for the target itself.
    pub inherited: Vec<TagRef>,
    /// Maximum tag-name length (in chars) across all three sets. Derived,
    /// non-authoritative; the UI uses it to size columns.
    pub name_width: usize,
}

/// Partition `all` into the target's assigned and available sets.
///
/// `available` is everything in `all` whose id is not in `assigned_ids`, so
/// the two sets are disjoint and their union is `all`.
pub fn partition(all: Vec<TagRef>, assigned_ids: &HashSet<DbId>, inherited: Vec<TagRef>) -> TagPartition {
    let (mut assigned, mut available): (Vec<TagRef>, Vec<TagRef>) =
        all.into_iter().partition(|tag| assigned_ids.contains(&tag.id));

    sort_tags(&mut assigned);
    sort_tags(&mut available);
    let mut inherited = inherited;
    sort_tags(&mut inherited);

    let name_width = assigned
        .iter()
        .chain(available.iter())
        .chain(inherited.iter())
        .map(|tag| tag.name.chars().count())
        .max()
        .unwrap_or(0);

    TagPartition {
        assigned,
        available,
        inherited,
        name_width,
    }
}

/// Presentation order: lexicographic by name, ties broken by ascending id.
fn sort_tags(tags: &mut [TagRef]) {
    tags.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(id: DbId, name: &str) -> TagRef {
        TagRef { id, name: name.to_string() }
    }

    #[test]
    fn union_is_all_and_sets_are_disjoint() {
        let all = vec![tag(1, "4x4"), tag(2, "luxury"), tag(3, "eco"), tag(4, "family")];
        let assigned_ids: HashSet<DbId> = [2, 4].into_iter().collect();

        let part = partition(all.clone(), &assigned_ids, vec![]);

        let mut union: Vec<DbId> = part
            .assigned
            .iter()
            .chain(part.available.iter())
            .map(|t| t.id)
            .collect();
        union.sort();
        assert_eq!(union, vec![1, 2, 3, 4]);

        for t in &part.assigned {
            assert!(!part.available.iter().any(|a| a.id == t.id));
        }
    }

    #[test]
    fn sorted_by_name_then_id() {
        let all = vec![tag(9, "eco"), tag(3, "eco"), tag(1, "4x4")];
        let part = partition(all, &HashSet::new(), vec![]);

        let order: Vec<(DbId, &str)> = part.available.iter().map(|t| (t.id, t.name.as_str())).collect();
        assert_eq!(order, vec![(1, "4x4"), (3, "eco"), (9, "eco")]);
    }

    #[test]
    fn inherited_never_enters_available() {
        let all = vec![tag(1, "4x4"), tag(2, "luxury")];
        let inherited = vec![tag(1, "4x4"), tag(5, "vintage")];
        let assigned_ids: HashSet<DbId> = [2].into_iter().collect();

        let part = partition(all, &assigned_ids, inherited);

        // Tag 1 stays available (it is not assigned to the target itself);
        // tag 5 exists only in the inherited list.
        assert_eq!(part.available.len(), 1);
        assert_eq!(part.available[0].id, 1);
        assert!(!part.available.iter().any(|t| t.id == 5));
        assert_eq!(part.inherited.len(), 2);
    }

    #[test]
    fn width_spans_all_three_sets() {
        let all = vec![tag(1, "eco")];
        let inherited = vec![tag(7, "grand-touring")];
        let part = partition(all, &HashSet::new(), inherited);
        assert_eq!(part.name_width, "grand-touring".len());
    }

    #[test]
    fn width_is_zero_when_empty() {
        let part = partition(vec![], &HashSet::new(), vec![]);
        assert_eq!(part.name_width, 0);
    }

    #[test]
    fn width_counts_chars_not_bytes() {
        let part = partition(vec![tag(1, "élégance")], &HashSet::new(), vec![]);
        assert_eq!(part.name_width, 8);
    }
}
