//! Merging a block's default category data with a section's overrides.
//!
//! The merge is a structural deep merge:
//!
//! 1. The defaults are the baseline; their keys and key order are kept.
//! 2. For each override key, two mappings are merged recursively. Anything
//!    else (scalars, arrays, nulls, or a key the baseline lacks) replaces the
//!    baseline value outright. Arrays are replaced whole, never index-merged.
//! 3. Baseline keys the override never mentions keep their default.
//! 4. Override-only keys are appended in their original order.
//!
//! A structural mismatch (a mapping on one side, anything else on the other)
//! is resolved by the same rule: the override wins at that node. It is
//! recorded as a [`ShapeConflict`] for diagnostics, never raised.

use folio_types::{BlockDefinition, Category, Mapping, MergedSection, Section, Value, ValueKind};

/// An override whose structural kind disagreed with the block's default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeConflict {
    pub category: Category,
    /// Dotted key path to the conflicting node, e.g. `padding.top`.
    pub path: String,
    pub default_kind: ValueKind,
    pub override_kind: ValueKind,
}

/// Merges one category. See the module docs for the rules.
pub fn merge(defaults: &Mapping, overrides: &Mapping) -> Mapping {
    merge_at(defaults, overrides, "", &mut |_| {})
}

/// Merges one category and reports every structural conflict it resolved.
pub fn merge_with_conflicts(
    category: Category,
    defaults: &Mapping,
    overrides: &Mapping,
) -> (Mapping, Vec<ShapeConflict>) {
    let mut conflicts = Vec::new();
    let merged = merge_at(defaults, overrides, "", &mut |(path, default_kind, override_kind)| {
        conflicts.push(ShapeConflict {
            category,
            path,
            default_kind,
            override_kind,
        })
    });
    (merged, conflicts)
}

/// Applies [`merge`] to all three categories of a section.
pub fn merge_section(block: &BlockDefinition, section: &Section) -> (MergedSection, Vec<ShapeConflict>) {
    let mut conflicts = Vec::new();
    let [settings, contents, styles] = Category::ALL.map(|category| {
        let (mapping, found) =
            merge_with_conflicts(category, block.defaults(category), section.overrides(category));
        conflicts.extend(found);
        mapping
    });
    (MergedSection::new(section, settings, contents, styles), conflicts)
}

type ConflictSink<'a> = dyn FnMut((String, ValueKind, ValueKind)) + 'a;

fn merge_at(defaults: &Mapping, overrides: &Mapping, prefix: &str, on_conflict: &mut ConflictSink<'_>) -> Mapping {
    if overrides.is_empty() {
        return defaults.clone();
    }

    let mut merged = defaults.clone();
    for (key, value) in overrides {
        match (merged.get_mut(key), value) {
            (Some(Value::Mapping(base)), Value::Mapping(nested)) => {
                let path = join_path(prefix, key);
                let combined = merge_at(base, nested, &path, on_conflict);
                *base = combined;
            }
            (Some(slot), _) => {
                if slot.kind() != value.kind()
                    && (slot.kind() == ValueKind::Mapping || value.kind() == ValueKind::Mapping)
                {
                    on_conflict((join_path(prefix, key), slot.kind(), value.kind()));
                }
                *slot = value.clone();
            }
            (None, _) => {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    merged
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}
