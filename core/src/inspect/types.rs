//! Inspector type definitions
//!
//! Core types shared by the scanner, the layout composer and the bridge.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Value type identifier for declared fields and action parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    I32,
    U32,
    F32,
    Bool,
    Text,
    Vec2,  // { x: f32, y: f32 }
    Vec3,  // { x: f32, y: f32, z: f32 }
    Color, // 0xRRGGBBAA
}

/// Runtime value representation for field editors
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    I32(i32),
    U32(u32),
    F32(f32),
    Bool(bool),
    Text(String),
    Vec2 { x: f32, y: f32 },
    Vec3 { x: f32, y: f32, z: f32 },
    Color(u32), // 0xRRGGBBAA format
}

impl FieldValue {
    /// Get RGBA bytes of a packed color
    pub fn as_rgba(&self) -> [u8; 4] {
        match self {
            FieldValue::Color(packed) => packed.to_be_bytes(),
            _ => [0, 0, 0, 0xFF],
        }
    }

    /// Get the value type for this field value
    pub fn value_type(&self) -> ValueType {
        match self {
            FieldValue::I32(_) => ValueType::I32,
            FieldValue::U32(_) => ValueType::U32,
            FieldValue::F32(_) => ValueType::F32,
            FieldValue::Bool(_) => ValueType::Bool,
            FieldValue::Text(_) => ValueType::Text,
            FieldValue::Vec2 { .. } => ValueType::Vec2,
            FieldValue::Vec3 { .. } => ValueType::Vec3,
            FieldValue::Color(_) => ValueType::Color,
        }
    }

    /// Clamp numeric values to the given constraints; other values pass through
    pub fn clamped(self, constraints: &Constraints) -> Self {
        match self {
            FieldValue::I32(v) => FieldValue::I32(constraints.clamp(v as f64) as i32),
            FieldValue::U32(v) => FieldValue::U32(constraints.clamp(v as f64).max(0.0) as u32),
            FieldValue::F32(v) => FieldValue::F32(constraints.clamp(v as f64) as f32),
            other => other,
        }
    }
}

/// Range constraints for numeric fields
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: f64,
    pub max: f64,
}

impl Constraints {
    /// Create new constraints with min and max values
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Bounds ordered low to high; None when either bound is NaN
    pub fn bounds(&self) -> Option<(f64, f64)> {
        if self.min.is_nan() || self.max.is_nan() {
            return None;
        }
        Some((self.min.min(self.max), self.min.max(self.max)))
    }

    /// Clamp a value to these constraints
    ///
    /// Inverted bounds are swapped; NaN bounds leave the value unchanged.
    pub fn clamp(&self, value: f64) -> f64 {
        match self.bounds() {
            Some((lo, hi)) => value.clamp(lo, hi),
            None => value,
        }
    }
}

/// A declared action parameter
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: String,
    pub value_type: ValueType,
}

/// Parameter list of a declared action
pub type ParamList = SmallVec<[ParamSpec; 2]>;

/// Kind of a discovered member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// Zero-argument method rendered as a button
    Action,
    /// Field decorated with a foldout header
    Foldout,
    /// Plain serialized field
    Field,
}

/// Stable identity of a member: its declaring type and name
///
/// The text form (`Type::member`) is the qualifying name used in logs and as
/// the expansion store key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DescriptorId(String);

impl DescriptorId {
    pub fn new(declaring_type: &str, member: &str) -> Self {
        Self(format!("{}::{}", declaring_type, member))
    }

    /// The qualifying name, `Type::member`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The member part of the qualifying name
    pub fn member(&self) -> &str {
        self.0.rsplit_once("::").map_or(&self.0, |(_, m)| m)
    }
}

impl fmt::Display for DescriptorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Scanned metadata for one annotated member
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDescriptor {
    pub id: DescriptorId,
    /// Type that declared the member (a base type for inherited members)
    pub declaring_type: String,
    pub name: String,
    pub kind: MemberKind,
    /// Button text or foldout header
    pub label: String,
    /// Field type (None for actions)
    pub value_type: Option<ValueType>,
    /// Optional range constraints (for sliders)
    pub constraints: Option<Constraints>,
    /// Declared parameters; always empty for actions the scanner emits
    pub params: ParamList,
    /// Expansion state a foldout starts in
    pub default_expanded: bool,
    /// Excluded from the generic field helper
    pub hidden: bool,
}

impl MemberDescriptor {
    /// Label to draw, falling back to the member name for empty labels
    pub fn display_label(&self) -> &str {
        if !self.label.is_empty() {
            &self.label
        } else if !self.name.is_empty() {
            &self.name
        } else {
            "<unnamed>"
        }
    }

    pub fn is_action(&self) -> bool {
        self.kind == MemberKind::Action
    }
}
