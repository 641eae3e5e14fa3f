//! Attribute-driven inspection
//!
//! Discovers the annotated members of a target, draws controls for them and
//! invokes them on demand.
//!
//! # Overview
//!
//! Targets implement [`Inspectable`] and declare their members in
//! `describe`: zero-argument actions become buttons, foldout fields get a
//! collapsible header, plain fields get a value editor. Each UI refresh:
//!
//! 1. [`scan`] turns the declarations into [`MemberDescriptor`]s (cached by
//!    the panel until the target changes identity)
//! 2. [`compose`] builds a [`ControlTree`] from the descriptors and the
//!    current [`ExpansionStore`]
//! 3. [`InspectorPanel`] draws the tree with egui and collects
//!    [`InspectorEvent`]s
//! 4. [`InvocationBridge`] applies the events to the target and the store
//!
//! # Usage
//!
//! ```rust,ignore
//! impl Inspectable for Turret {
//!     fn describe(&self, members: &mut MemberRegistry) -> Result<(), InspectError> {
//!         members.foldout("stats", ValueType::F32, "Stats");
//!         members.button("reset");
//!         Ok(())
//!     }
//!     // invoke / read_field / write_field ...
//! }
//!
//! // Every frame
//! let report = panel.render(ctx, &mut turret, &mut store, &mut bridge);
//! ```
//!
//! # Failure isolation
//!
//! A target that cannot describe itself shows no members. An action that
//! returns an error or panics is logged with its qualifying name
//! (`Type::member`); the rest of the frame's events are still applied.

pub mod bridge;
pub mod draw;
pub mod error;
pub mod expansion;
pub mod layout;
pub mod panel;
pub mod registry;
pub mod scanner;
pub mod target;
pub mod types;

// Re-export commonly used types
pub use bridge::{DispatchReport, InvocationBridge, InvocationFailure};
pub use error::{ActionError, InspectError};
pub use expansion::{ExpansionStore, FoldoutState, StoreError};
pub use layout::{Control, ControlTree, FieldEditor, InspectorEvent, LayoutMetrics, compose};
pub use panel::InspectorPanel;
pub use registry::MemberRegistry;
pub use scanner::{scan, scan_fields};
pub use target::{Inspectable, TargetKey, short_type_name};
pub use types::{
    Constraints, DescriptorId, FieldValue, MemberDescriptor, MemberKind, ParamSpec, ValueType,
};
