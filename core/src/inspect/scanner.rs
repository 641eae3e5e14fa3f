//! Attribute scanner
//!
//! Turns a target's declared members into ordered descriptors. Scanning is
//! read-only and never fails: a type that cannot describe itself yields no
//! descriptors.

use std::panic::{AssertUnwindSafe, catch_unwind};

use hashbrown::HashSet;

use super::error::{InspectError, panic_message};
use super::registry::{DeclaredMember, MemberRegistry};
use super::target::Inspectable;
use super::types::{MemberDescriptor, MemberKind};

/// Collect the declared members of a target, in declaration order
///
/// Returns `None` if `describe` fails or panics.
fn declared_members(target: &dyn Inspectable) -> Option<Vec<DeclaredMember>> {
    let type_name = target.type_name();
    let mut registry = MemberRegistry::new(type_name);

    let result = catch_unwind(AssertUnwindSafe(|| target.describe(&mut registry)))
        .unwrap_or_else(|payload| {
            Err(InspectError::Panicked {
                type_name,
                message: panic_message(payload.as_ref()),
            })
        });

    if let Err(e) = result {
        tracing::warn!("Scan of {} failed, showing no members: {}", type_name, e);
        return None;
    }

    registry.finalize();
    Some(registry.members)
}

/// Scan a target for members carrying a recognized marker
///
/// Yields actions and foldout fields in declaration order. Actions that take
/// parameters are skipped: only zero-argument methods can become buttons.
pub fn scan(target: &dyn Inspectable) -> Vec<MemberDescriptor> {
    let Some(members) = declared_members(target) else {
        return Vec::new();
    };

    members
        .iter()
        .filter(|m| match m.kind {
            MemberKind::Action if !m.params.is_empty() => {
                tracing::debug!(
                    "Skipping {}::{}: actions with parameters are not invocable",
                    m.declaring_type,
                    m.name
                );
                false
            }
            MemberKind::Action | MemberKind::Foldout => true,
            MemberKind::Field => false,
        })
        .map(DeclaredMember::to_descriptor)
        .collect()
}

/// Scan every drawable field of a target
///
/// Without `include_base`, only fields declared by the target's own type are
/// returned. With it, base-type fields come first, followed by own fields
/// whose names were not already shown. Hidden fields are never returned.
pub fn scan_fields(target: &dyn Inspectable, include_base: bool) -> Vec<MemberDescriptor> {
    let Some(members) = declared_members(target) else {
        return Vec::new();
    };

    let own_type = target.type_name();
    let is_field = |m: &&DeclaredMember| {
        matches!(m.kind, MemberKind::Field | MemberKind::Foldout) && !m.hidden
    };

    let mut shown: HashSet<&str> = HashSet::new();
    let mut fields = Vec::new();

    if include_base {
        for member in members
            .iter()
            .filter(is_field)
            .filter(|m| m.declaring_type != own_type)
        {
            if shown.insert(member.name.as_str()) {
                fields.push(member.to_descriptor());
            }
        }
    }

    for member in members
        .iter()
        .filter(is_field)
        .filter(|m| m.declaring_type == own_type)
    {
        if shown.insert(member.name.as_str()) {
            fields.push(member.to_descriptor());
        }
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{Broken, Panicky, Spawner, Turret};

    #[test]
    fn test_scan_skips_parameterized_actions() {
        let turret = Turret::default();
        let actions: Vec<_> = scan(&turret)
            .into_iter()
            .filter(MemberDescriptor::is_action)
            .collect();

        // configure(x) is declared but takes a parameter
        assert!(actions.iter().all(|d| d.params.is_empty()));
        assert!(actions.iter().all(|d| d.name != "configure"));
    }

    #[test]
    fn test_reset_and_configure_yield_one_action() {
        let spawner = Spawner::default();
        let descriptors = scan(&spawner);

        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].name, "reset");
        assert_eq!(descriptors[0].kind, MemberKind::Action);
    }

    #[test]
    fn test_scan_preserves_declaration_order() {
        let turret = Turret::default();
        let names: Vec<_> = scan(&turret).into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["stats", "reset", "overheat", "aim", "jam"]);

        // Deterministic across scans
        let again: Vec<_> = scan(&turret).into_iter().map(|d| d.name).collect();
        assert_eq!(names, again);
    }

    #[test]
    fn test_scan_excludes_plain_fields() {
        let turret = Turret::default();
        assert!(scan(&turret).iter().all(|d| d.kind != MemberKind::Field));
    }

    #[test]
    fn test_scan_failure_yields_empty() {
        assert!(scan(&Broken).is_empty());
        assert!(scan_fields(&Broken, true).is_empty());
    }

    #[test]
    fn test_scan_panic_yields_empty() {
        assert!(scan(&Panicky).is_empty());
    }

    #[test]
    fn test_scan_fields_own_only() {
        let turret = Turret::default();
        let names: Vec<_> = scan_fields(&turret, false)
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["stats", "range", "label", "aim"]);
    }

    #[test]
    fn test_scan_fields_base_first_and_dedup() {
        let turret = Turret::default();
        let fields = scan_fields(&turret, true);
        let names: Vec<_> = fields.iter().map(|d| d.name.as_str()).collect();

        // Base fields first; the base `label` shadows the own one; `secret` is hidden
        assert_eq!(names, vec!["health", "label", "stats", "range", "aim"]);
        assert_eq!(fields[1].declaring_type, "Building");
        assert!(!names.contains(&"secret"));
    }
}
