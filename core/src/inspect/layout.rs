//! Control composition
//!
//! Pure function from (target, descriptors, expansion states) to a control
//! tree. Nothing here touches a rendering surface or mutates the target; the
//! egui panel draws the tree and [`ControlTree::click`] maps clicks to events.

use serde::{Deserialize, Serialize};

use super::expansion::ExpansionStore;
use super::target::Inspectable;
use super::types::{Constraints, DescriptorId, FieldValue, MemberDescriptor, MemberKind};

/// Fixed layout measurements, in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    /// Height of one control line (default: 18.0)
    #[serde(default = "default_line_height")]
    pub single_line_height: f32,
    /// Gap between stacked controls (default: 2.0)
    #[serde(default = "default_spacing")]
    pub standard_vertical_spacing: f32,
    /// Horizontal offset per indent level (default: 15.0)
    #[serde(default = "default_indent_width")]
    pub indent_width: f32,
}

fn default_line_height() -> f32 {
    18.0
}
fn default_spacing() -> f32 {
    2.0
}
fn default_indent_width() -> f32 {
    15.0
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            single_line_height: default_line_height(),
            standard_vertical_spacing: default_spacing(),
            indent_width: default_indent_width(),
        }
    }
}

impl LayoutMetrics {
    /// Vertical offset of a foldout body below its header
    pub fn body_offset(&self) -> f32 {
        self.single_line_height + self.standard_vertical_spacing
    }

    /// Total height of a foldout for the given body height
    pub fn foldout_height(&self, expanded: bool, body_height: f32) -> f32 {
        if expanded {
            self.body_offset() + body_height
        } else {
            self.single_line_height
        }
    }
}

/// Editor for a single field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEditor {
    pub id: DescriptorId,
    /// Member name, the key for reads and writes
    pub field: String,
    pub label: String,
    /// Current value; `None` if the target could not read it
    pub value: Option<FieldValue>,
    pub constraints: Option<Constraints>,
    /// Indent level (0 = top level)
    pub indent: u32,
    /// Offset from the top of the owning control
    pub y_offset: f32,
    pub height: f32,
}

/// One composed control
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    /// Clickable action
    Button { id: DescriptorId, label: String },
    /// Toggle header with the decorated field beneath it when expanded
    Foldout {
        id: DescriptorId,
        header: String,
        expanded: bool,
        height: f32,
        body: Option<FieldEditor>,
    },
    /// Plain field editor
    Field(FieldEditor),
}

impl Control {
    pub fn id(&self) -> &DescriptorId {
        match self {
            Control::Button { id, .. } | Control::Foldout { id, .. } => id,
            Control::Field(editor) => &editor.id,
        }
    }

    /// Height of this control
    pub fn height(&self, metrics: &LayoutMetrics) -> f32 {
        match self {
            Control::Button { .. } => metrics.single_line_height,
            Control::Foldout { height, .. } => *height,
            Control::Field(editor) => editor.height,
        }
    }
}

/// Interaction raised by a control
#[derive(Debug, Clone, PartialEq)]
pub enum InspectorEvent {
    /// Call a zero-argument action
    Invoke(DescriptorId),
    /// Flip a foldout's expansion state
    Toggle(DescriptorId),
    /// Write a new value into a field
    Edit {
        id: DescriptorId,
        field: String,
        value: FieldValue,
    },
}

/// Controls composed for one draw cycle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlTree {
    pub controls: Vec<Control>,
}

impl ControlTree {
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Find a control by descriptor id
    pub fn get(&self, id: &DescriptorId) -> Option<&Control> {
        self.controls.iter().find(|c| c.id() == id)
    }

    /// Total stacked height, with standard spacing between controls
    pub fn total_height(&self, metrics: &LayoutMetrics) -> f32 {
        let gaps = self.controls.len().saturating_sub(1) as f32;
        self.controls
            .iter()
            .map(|c| c.height(metrics))
            .sum::<f32>()
            + gaps * metrics.standard_vertical_spacing
    }

    /// Event raised by clicking the control with the given id
    ///
    /// Buttons invoke, foldout headers toggle, field editors raise nothing on
    /// a plain click.
    pub fn click(&self, id: &DescriptorId) -> Option<InspectorEvent> {
        match self.get(id)? {
            Control::Button { id, .. } => Some(InspectorEvent::Invoke(id.clone())),
            Control::Foldout { id, .. } => Some(InspectorEvent::Toggle(id.clone())),
            Control::Field(_) => None,
        }
    }
}

fn field_editor(
    target: &dyn Inspectable,
    desc: &MemberDescriptor,
    label: &str,
    indent: u32,
    y_offset: f32,
    metrics: &LayoutMetrics,
) -> FieldEditor {
    FieldEditor {
        id: desc.id.clone(),
        field: desc.name.clone(),
        label: label.to_string(),
        // A value of another type than declared is shown as unavailable
        value: target
            .read_field(&desc.name)
            .filter(|v| desc.value_type.is_none_or(|t| v.value_type() == t)),
        constraints: desc.constraints,
        indent,
        y_offset,
        height: metrics.single_line_height,
    }
}

/// Compose one control per descriptor
pub fn compose(
    target: &dyn Inspectable,
    descriptors: &[MemberDescriptor],
    store: &ExpansionStore,
    metrics: &LayoutMetrics,
) -> ControlTree {
    let controls = descriptors
        .iter()
        .map(|desc| match desc.kind {
            MemberKind::Action => Control::Button {
                id: desc.id.clone(),
                label: desc.display_label().to_string(),
            },
            MemberKind::Foldout => {
                let expanded = store
                    .state_or(&desc.id, desc.default_expanded)
                    .is_expanded();
                let body = expanded.then(|| {
                    field_editor(target, desc, &desc.name, 1, metrics.body_offset(), metrics)
                });
                let body_height = body.as_ref().map_or(0.0, |b| b.height);
                Control::Foldout {
                    id: desc.id.clone(),
                    header: desc.display_label().to_string(),
                    expanded,
                    height: metrics.foldout_height(expanded, body_height),
                    body,
                }
            }
            MemberKind::Field => Control::Field(field_editor(
                target,
                desc,
                desc.display_label(),
                0,
                0.0,
                metrics,
            )),
        })
        .collect();

    ControlTree { controls }
}
