//! Inspector Core - Attribute-driven inspector toolkit
//!
//! This crate lets host applications expose the members of their objects in
//! an egui inspector without hand-writing UI for each type.
//!
//! # Architecture
//!
//! - [`Inspectable`] - Trait implemented by each inspected type
//! - [`scan`] - Discovers annotated members in declaration order
//! - [`compose`] - Pure layout of buttons, foldouts and field editors
//! - [`InspectorPanel`] - egui rendering of the composed controls
//! - [`InvocationBridge`] - Applies clicks and edits with failure isolation

pub mod config;
pub mod inspect;
#[cfg(test)]
pub mod test_utils;

// Re-export core traits and types
pub use config::{Config, InspectorConfig};
pub use inspect::{
    ActionError, Constraints, Control, ControlTree, DescriptorId, DispatchReport, ExpansionStore,
    FieldValue, FoldoutState, InspectError, Inspectable, InspectorEvent, InspectorPanel,
    InvocationBridge, LayoutMetrics, MemberDescriptor, MemberKind, MemberRegistry, ValueType,
    compose, scan, scan_fields,
};
