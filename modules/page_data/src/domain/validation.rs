//! Component tree invariant checks

use crate::contract::{Component, ComponentError, CoreComponent, ParentComponent};
use std::collections::HashSet;

/// Validate a component tree
///
/// Checks, depth-first from `root`:
/// - every id is non-empty
/// - ids are unique across the tree
/// - `component_type` matches the record kind
///
/// A navbar item's embedded dropdown is part of the tree.
pub fn validate_component_tree(root: &Component) -> Result<(), ComponentError> {
    let mut seen = HashSet::new();
    visit(root, &mut seen)
}

fn visit<'a>(component: &'a Component, seen: &mut HashSet<&'a str>) -> Result<(), ComponentError> {
    check_node(component, seen)?;

    if let Component::NavbarItem(item) = component {
        if let Some(dropdown) = &item.dropdown {
            check_node(dropdown, seen)?;
            for child in dropdown.children() {
                visit(child, seen)?;
            }
        }
    }

    for child in component.children() {
        visit(child, seen)?;
    }
    Ok(())
}

fn check_node<'a, C: CoreComponent + ?Sized>(
    component: &'a C,
    seen: &mut HashSet<&'a str>,
) -> Result<(), ComponentError> {
    let base = component.base();
    if base.id.is_empty() {
        return Err(ComponentError::EmptyId {
            name: base.name.clone(),
        });
    }

    let expected = component.kind().as_str();
    if base.component_type != expected {
        return Err(ComponentError::TagMismatch {
            id: base.id.clone(),
            expected,
            found: base.component_type.clone(),
        });
    }

    if !seen.insert(base.id.as_str()) {
        return Err(ComponentError::DuplicateId {
            id: base.id.clone(),
        });
    }
    Ok(())
}
