//! Action button rendering

use super::super::layout::InspectorEvent;
use super::super::types::DescriptorId;

/// Render an action button
///
/// Returns an invoke event if the button was clicked.
pub(super) fn render_action(
    ui: &mut egui::Ui,
    id: &DescriptorId,
    label: &str,
) -> Option<InspectorEvent> {
    let button = egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 0.0));
    ui.add(button)
        .on_hover_text(id.as_str())
        .clicked()
        .then(|| InspectorEvent::Invoke(id.clone()))
}
