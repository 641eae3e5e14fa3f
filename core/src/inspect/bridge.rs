//! Invocation/mutation bridge
//!
//! Applies interaction events to the target and the expansion store. Every
//! failure is contained to the event that caused it; the remaining events of
//! the cycle are still applied.

use std::panic::{AssertUnwindSafe, catch_unwind};

use hashbrown::{HashMap, HashSet};

use super::error::{ActionError, panic_message};
use super::expansion::{ExpansionStore, FoldoutState};
use super::layout::InspectorEvent;
use super::target::Inspectable;
use super::types::{Constraints, DescriptorId, MemberDescriptor, MemberKind, ValueType};

/// A failed action or rejected edit
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationFailure {
    /// Qualifying name of the member (`Type::member`)
    pub member: String,
    pub message: String,
}

/// Outcome of dispatching one cycle's events
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchReport {
    /// Actions that completed
    pub invoked: Vec<DescriptorId>,
    /// Foldouts toggled, with their new state
    pub toggled: Vec<(DescriptorId, FoldoutState)>,
    /// Fields written
    pub edited: Vec<DescriptorId>,
    pub failures: Vec<InvocationFailure>,
    /// Whether layout heights changed (a foldout toggled)
    pub relayout: bool,
}

impl DispatchReport {
    pub fn is_empty(&self) -> bool {
        self.invoked.is_empty()
            && self.toggled.is_empty()
            && self.edited.is_empty()
            && self.failures.is_empty()
    }

    /// Merge another report into this one
    pub fn absorb(&mut self, other: DispatchReport) {
        self.invoked.extend(other.invoked);
        self.toggled.extend(other.toggled);
        self.edited.extend(other.edited);
        self.failures.extend(other.failures);
        self.relayout |= other.relayout;
    }
}

/// Declared shape of a bound field
#[derive(Debug, Clone, Copy)]
struct BoundField {
    value_type: Option<ValueType>,
    constraints: Option<Constraints>,
}

/// Routes interaction events to the target
///
/// Only actions bound with [`InvocationBridge::bind`] can be invoked.
#[derive(Debug, Default)]
pub struct InvocationBridge {
    /// Zero-argument actions of the current descriptors
    actions: HashSet<DescriptorId>,
    /// Field types and constraints by descriptor id, applied to edits
    fields: HashMap<DescriptorId, BoundField>,
    /// Initial expansion of foldouts without a recorded state
    foldout_defaults: HashMap<DescriptorId, bool>,
    /// Total failures since creation
    failure_count: usize,
}

impl InvocationBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the actions and fields of the current descriptors
    ///
    /// Replaces whatever was bound before.
    pub fn bind<'a>(&mut self, descriptors: impl IntoIterator<Item = &'a MemberDescriptor>) {
        self.actions.clear();
        self.fields.clear();
        self.foldout_defaults.clear();

        for desc in descriptors {
            match desc.kind {
                MemberKind::Action => {
                    if desc.params.is_empty() {
                        self.actions.insert(desc.id.clone());
                    }
                }
                MemberKind::Foldout | MemberKind::Field => {
                    if desc.kind == MemberKind::Foldout {
                        self.foldout_defaults
                            .insert(desc.id.clone(), desc.default_expanded);
                    }
                    self.fields.insert(
                        desc.id.clone(),
                        BoundField {
                            value_type: desc.value_type,
                            constraints: desc.constraints,
                        },
                    );
                }
            }
        }
    }

    /// Failures recorded since the bridge was created
    pub fn failure_count(&self) -> usize {
        self.failure_count
    }

    /// Apply all events of a cycle in order
    pub fn dispatch(
        &mut self,
        target: &mut dyn Inspectable,
        store: &mut ExpansionStore,
        events: impl IntoIterator<Item = InspectorEvent>,
    ) -> DispatchReport {
        let mut report = DispatchReport::default();

        for event in events {
            match event {
                InspectorEvent::Invoke(id) if !self.actions.contains(&id) => {
                    tracing::warn!("'{}' is not a bound zero-argument action", id);
                    report.failures.push(InvocationFailure {
                        member: id.to_string(),
                        message: ActionError::NotInvocable(id.to_string()).to_string(),
                    });
                }
                InspectorEvent::Invoke(id) => match invoke(target, id.member()) {
                    Ok(()) => {
                        tracing::debug!("Invoked {}", id);
                        report.invoked.push(id);
                    }
                    Err(e) => {
                        tracing::error!("Action '{}' failed: {}", id, e);
                        report.failures.push(InvocationFailure {
                            member: id.to_string(),
                            message: e.to_string(),
                        });
                    }
                },
                InspectorEvent::Toggle(id) => {
                    let default_expanded =
                        self.foldout_defaults.get(&id).copied().unwrap_or(true);
                    let state = store.toggle_or(&id, default_expanded);
                    report.toggled.push((id, state));
                    report.relayout = true;
                }
                InspectorEvent::Edit { id, field, value } => {
                    let bound = self.fields.get(&id).copied();
                    if let Some(expected) = bound.and_then(|b| b.value_type)
                        && value.value_type() != expected
                    {
                        tracing::warn!("Edit of '{}' has the wrong value type", id);
                        report.failures.push(InvocationFailure {
                            member: id.to_string(),
                            message: format!(
                                "expected {:?} value, got {:?}",
                                expected,
                                value.value_type()
                            ),
                        });
                        continue;
                    }
                    let value = match bound.and_then(|b| b.constraints) {
                        Some(c) => value.clamped(&c),
                        None => value,
                    };
                    if target.write_field(&field, &value) {
                        report.edited.push(id);
                    } else {
                        tracing::warn!("Write to '{}' rejected", id);
                        report.failures.push(InvocationFailure {
                            member: id.to_string(),
                            message: format!("write of {:?} rejected", value),
                        });
                    }
                }
            }
        }

        self.failure_count += report.failures.len();
        report
    }
}

/// Call an action, turning a panic into an error
fn invoke(target: &mut dyn Inspectable, action: &str) -> Result<(), ActionError> {
    catch_unwind(AssertUnwindSafe(|| target.invoke(action)))
        .unwrap_or_else(|payload| Err(ActionError::Panicked(panic_message(payload.as_ref()))))
}
