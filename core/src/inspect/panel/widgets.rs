//! Widget rendering for field editors

use super::super::layout::FieldEditor;
use super::super::types::FieldValue;

/// Handles rendering of value widgets
pub(super) struct ValueWidgetRenderer;

impl ValueWidgetRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render a widget for a single field
    ///
    /// Returns Some(new_value) if the value was changed, None otherwise.
    pub fn render_field(&self, ui: &mut egui::Ui, editor: &FieldEditor) -> Option<FieldValue> {
        let Some(current) = &editor.value else {
            ui.add_enabled(
                false,
                egui::Label::new(format!("{}: <unavailable>", editor.label)),
            );
            return None;
        };

        // Malformed ranges fall back to a drag value
        let bounds = editor.constraints.and_then(|c| c.bounds());

        match (current, bounds) {
            // Float with range -> slider
            (FieldValue::F32(v), Some((lo, hi))) => {
                let mut v = *v;
                let changed = ui
                    .add(egui::Slider::new(&mut v, lo as f32..=hi as f32).text(&editor.label))
                    .changed();
                changed.then_some(FieldValue::F32(v))
            }
            // Float without range -> drag value
            (FieldValue::F32(v), None) => {
                let mut v = *v;
                let changed = ui
                    .horizontal(|ui| {
                        ui.label(&editor.label);
                        ui.add(egui::DragValue::new(&mut v).speed(0.1)).changed()
                    })
                    .inner;
                changed.then_some(FieldValue::F32(v))
            }
            (FieldValue::I32(v), Some((lo, hi))) => {
                let mut v = *v;
                let changed = ui
                    .add(egui::Slider::new(&mut v, lo as i32..=hi as i32).text(&editor.label))
                    .changed();
                changed.then_some(FieldValue::I32(v))
            }
            (FieldValue::I32(v), None) => {
                let mut v = *v;
                let changed = ui
                    .horizontal(|ui| {
                        ui.label(&editor.label);
                        ui.add(egui::DragValue::new(&mut v)).changed()
                    })
                    .inner;
                changed.then_some(FieldValue::I32(v))
            }
            (FieldValue::U32(v), Some((lo, hi))) => {
                let mut v = *v;
                let changed = ui
                    .add(egui::Slider::new(&mut v, lo as u32..=hi as u32).text(&editor.label))
                    .changed();
                changed.then_some(FieldValue::U32(v))
            }
            (FieldValue::U32(v), None) => {
                let mut v = *v;
                let changed = ui
                    .horizontal(|ui| {
                        ui.label(&editor.label);
                        ui.add(egui::DragValue::new(&mut v)).changed()
                    })
                    .inner;
                changed.then_some(FieldValue::U32(v))
            }
            // Bool -> checkbox
            (FieldValue::Bool(v), _) => {
                let mut v = *v;
                ui.checkbox(&mut v, &editor.label)
                    .changed()
                    .then_some(FieldValue::Bool(v))
            }
            (FieldValue::Text(s), _) => {
                let mut s = s.clone();
                let changed = ui
                    .horizontal(|ui| {
                        ui.label(&editor.label);
                        ui.text_edit_singleline(&mut s).changed()
                    })
                    .inner;
                changed.then_some(FieldValue::Text(s))
            }
            // Vec2 -> two drag values
            (FieldValue::Vec2 { x, y }, _) => {
                let (mut x, mut y) = (*x, *y);
                let mut changed = false;
                ui.horizontal(|ui| {
                    ui.label(&editor.label);
                    changed |= ui
                        .add(egui::DragValue::new(&mut x).speed(0.1).prefix("x:"))
                        .changed();
                    changed |= ui
                        .add(egui::DragValue::new(&mut y).speed(0.1).prefix("y:"))
                        .changed();
                });
                changed.then_some(FieldValue::Vec2 { x, y })
            }
            // Vec3 -> three drag values
            (FieldValue::Vec3 { x, y, z }, _) => {
                let (mut x, mut y, mut z) = (*x, *y, *z);
                let mut changed = false;
                ui.horizontal(|ui| {
                    ui.label(&editor.label);
                    changed |= ui
                        .add(egui::DragValue::new(&mut x).speed(0.1).prefix("x:"))
                        .changed();
                    changed |= ui
                        .add(egui::DragValue::new(&mut y).speed(0.1).prefix("y:"))
                        .changed();
                    changed |= ui
                        .add(egui::DragValue::new(&mut z).speed(0.1).prefix("z:"))
                        .changed();
                });
                changed.then_some(FieldValue::Vec3 { x, y, z })
            }
            // Color -> sRGBA picker on the unpacked 0xRRGGBBAA bytes
            (FieldValue::Color(_), _) => {
                let mut rgba = current.as_rgba();
                let changed = ui
                    .horizontal(|ui| {
                        ui.label(&editor.label);
                        ui.color_edit_button_srgba_unmultiplied(&mut rgba).changed()
                    })
                    .inner;
                changed.then_some(FieldValue::Color(u32::from_be_bytes(rgba)))
            }
        }
    }
}
