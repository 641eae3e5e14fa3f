//! The `Inspectable` trait implemented by inspector targets

use super::error::{ActionError, InspectError};
use super::registry::MemberRegistry;
use super::types::FieldValue;

/// An object whose members can be discovered, drawn and invoked.
///
/// Types declare their members once in [`describe`](Inspectable::describe),
/// in declaration order. The declaration must not depend on instance state;
/// the inspector caches it until the target's identity changes.
///
/// ```rust,ignore
/// impl Inspectable for Turret {
///     fn describe(&self, members: &mut MemberRegistry) -> Result<(), InspectError> {
///         members.foldout("stats", ValueType::F32, "Stats");
///         members.button("reset");
///         Ok(())
///     }
///     // ...
/// }
/// ```
pub trait Inspectable {
    /// Short type name used as the declaring type of own members
    fn type_name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Declare members on the registry
    fn describe(&self, members: &mut MemberRegistry) -> Result<(), InspectError>;

    /// Invoke a zero-argument action by member name
    fn invoke(&mut self, action: &str) -> Result<(), ActionError>;

    /// Read the current value of a field, if it exists
    fn read_field(&self, field: &str) -> Option<FieldValue>;

    /// Write a field; returns false if the field is unknown or the value rejected
    fn write_field(&mut self, field: &str, value: &FieldValue) -> bool;
}

/// Strip the module path from a type name (`a::b::Turret` -> `Turret`)
///
/// Generic arguments are kept as written.
pub fn short_type_name(full: &'static str) -> &'static str {
    let base_end = full.find('<').unwrap_or(full.len());
    let start = full[..base_end].rfind("::").map_or(0, |i| i + 2);
    &full[start..]
}

/// Identity of a target instance for scan caching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetKey {
    type_name: &'static str,
    addr: usize,
}

impl TargetKey {
    pub fn of(target: &dyn Inspectable) -> Self {
        Self {
            type_name: target.type_name(),
            addr: target as *const dyn Inspectable as *const () as usize,
        }
    }
}
