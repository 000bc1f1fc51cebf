//! Interface and extension resolution over the visited item list.
//!
//! A single pass in collection order:
//!
//! 1. Object types get the fields of the interfaces they implement, unless a
//!    field of the same name is already declared. Inherited fields go ahead
//!    of the type's own fields, in interface order.
//! 2. Extensions that implement interfaces get the same treatment, and their
//!    interface names are appended to the base type.
//! 3. Extensions fold their missing fields (and tags) into the base type of
//!    the same name. An extension with no base becomes an object type.
//!
//! The pass does not iterate to a fixed point. An interface field injected
//! into a base type after one of its extensions has already been folded is
//! not seen by that extension.

use crate::model::{Field, ItemKind, TypeItem};

/// Counters collected during resolution.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergeStats {
    pub interface_fields_injected: usize,
    pub extensions_folded: usize,
    pub extensions_promoted: usize,
}

/// Resolve interfaces and extensions in place.
pub fn resolve(items: &mut [TypeItem]) -> MergeStats {
    let mut stats = MergeStats::default();

    for index in 0..items.len() {
        let kind = items[index].kind;
        match kind {
            ItemKind::ObjectType if !items[index].interfaces.is_empty() => {
                stats.interface_fields_injected += inject_interface_fields(items, index);
            }
            ItemKind::Extension => {
                if !items[index].interfaces.is_empty() {
                    stats.interface_fields_injected += inject_interface_fields(items, index);
                    if let Some(base) = find_base(items, index) {
                        let interfaces = items[index].interfaces.clone();
                        items[base].interfaces.extend(interfaces);
                    }
                }

                match find_base(items, index) {
                    Some(base) => {
                        fold_extension(items, index, base);
                        stats.extensions_folded += 1;
                    }
                    None => {
                        tracing::debug!(
                            name = %items[index].name,
                            "extension has no base type, promoting to object type"
                        );
                        items[index].kind = ItemKind::ObjectType;
                        stats.extensions_promoted += 1;
                    }
                }
            }
            _ => {}
        }
    }

    stats
}

/// Give `items[index]` the fields of each implemented interface that it does
/// not already declare, placed before its own fields. Returns the number of
/// fields added.
fn inject_interface_fields(items: &mut [TypeItem], index: usize) -> usize {
    let mut inherited: Vec<Field> = Vec::new();
    let target = &items[index];

    for interface_name in &target.interfaces {
        let Some(interface) = items
            .iter()
            .find(|i| i.kind == ItemKind::Interface && &i.name == interface_name)
        else {
            tracing::debug!(
                name = %target.name,
                interface = %interface_name,
                "implemented interface not found"
            );
            continue;
        };

        for field in &interface.fields {
            let declared =
                target.has_field(&field.name) || inherited.iter().any(|f| f.name == field.name);
            if !declared {
                inherited.push(field.clone());
            }
        }
    }

    let added = inherited.len();
    items[index].fields.splice(0..0, inherited);
    added
}

/// The first other item with the same name and a different kind.
fn find_base(items: &[TypeItem], index: usize) -> Option<usize> {
    let extension = &items[index];
    let is_base = |item: &TypeItem| item.name == extension.name && item.kind != extension.kind;
    items
        .iter()
        .enumerate()
        .position(|(i, item)| i != index && is_base(item))
}

fn fold_extension(items: &mut [TypeItem], index: usize, base: usize) {
    let missing: Vec<Field> = items[index]
        .fields
        .iter()
        .filter(|f| !items[base].has_field(&f.name))
        .cloned()
        .collect();
    let tags = items[index].tags.clone();

    let base_item = &mut items[base];
    base_item.fields.extend(missing);
    base_item.tags.extend(tags);
}
