//! Inspector panel UI
//!
//! Draws the composed control tree with egui and collects interaction
//! events. The panel only reads the target; [`InspectorPanel::render`] hands
//! the collected events to the bridge once drawing is done.

use super::bridge::{DispatchReport, InvocationBridge};
use super::draw;
use super::expansion::ExpansionStore;
use super::layout::{Control, ControlTree, FieldEditor, InspectorEvent, LayoutMetrics, compose};
use super::scanner::{scan, scan_fields};
use super::target::{Inspectable, TargetKey};
use super::types::{MemberDescriptor, MemberKind};
use crate::config::Config;

mod actions;
mod widgets;

use widgets::ValueWidgetRenderer;

/// Cached scan of one target
struct ScanCache {
    key: TargetKey,
    include_base: bool,
    descriptors: Vec<MemberDescriptor>,
}

/// Inspector panel state
pub struct InspectorPanel {
    /// Whether the panel window is visible
    pub visible: bool,
    metrics: LayoutMetrics,
    /// Draw every field (like a default inspector) before the buttons
    draw_all_fields: bool,
    include_base_fields: bool,
    /// Marked members (actions and foldouts) of the current target
    marked: Option<ScanCache>,
    /// Drawable fields of the current target
    fields: Option<ScanCache>,
    /// Number of scans performed, for diagnostics
    scan_count: usize,
    value_renderer: ValueWidgetRenderer,
}

impl Default for InspectorPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl InspectorPanel {
    /// Create a visible panel with default metrics
    pub fn new() -> Self {
        Self {
            visible: true,
            metrics: LayoutMetrics::default(),
            draw_all_fields: true,
            include_base_fields: true,
            marked: None,
            fields: None,
            scan_count: 0,
            value_renderer: ValueWidgetRenderer::new(),
        }
    }

    /// Create a panel from user configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            metrics: config.layout,
            draw_all_fields: config.inspector.draw_all_fields,
            include_base_fields: config.inspector.include_base_fields,
            ..Self::new()
        }
    }

    /// Toggle panel visibility
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Set panel visibility
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Drop cached scans; the next draw re-scans the target
    pub fn invalidate(&mut self) {
        self.marked = None;
        self.fields = None;
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Number of scans performed so far
    pub fn scan_count(&self) -> usize {
        self.scan_count
    }

    /// Marked members of a target, re-scanned when its identity changes
    pub fn descriptors(&mut self, target: &dyn Inspectable) -> &[MemberDescriptor] {
        let key = TargetKey::of(target);
        if self.marked.as_ref().is_none_or(|c| c.key != key) {
            tracing::debug!("Scanning {} for inspector members", target.type_name());
            self.scan_count += 1;
            self.marked = Some(ScanCache {
                key,
                include_base: false,
                descriptors: scan(target),
            });
        }
        match &self.marked {
            Some(cache) => cache.descriptors.as_slice(),
            None => &[],
        }
    }

    /// Drawable fields of a target, re-scanned when its identity changes
    pub fn field_descriptors(
        &mut self,
        target: &dyn Inspectable,
        include_base: bool,
    ) -> &[MemberDescriptor] {
        let key = TargetKey::of(target);
        if self
            .fields
            .as_ref()
            .is_none_or(|c| c.key != key || c.include_base != include_base)
        {
            tracing::debug!("Scanning {} for inspector fields", target.type_name());
            self.scan_count += 1;
            self.fields = Some(ScanCache {
                key,
                include_base,
                descriptors: scan_fields(target, include_base),
            });
        }
        match &self.fields {
            Some(cache) => cache.descriptors.as_slice(),
            None => &[],
        }
    }

    /// Draw buttons and foldouts for the target's marked members
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        target: &dyn Inspectable,
        store: &ExpansionStore,
    ) -> Vec<InspectorEvent> {
        let metrics = self.metrics;
        let tree = compose(target, self.descriptors(target), store, &metrics);
        self.draw_tree(ui, &tree)
    }

    /// Draw only the target's action buttons
    pub fn show_actions(&mut self, ui: &mut egui::Ui, target: &dyn Inspectable) -> Vec<InspectorEvent> {
        let metrics = self.metrics;
        let actions: Vec<MemberDescriptor> = self
            .descriptors(target)
            .iter()
            .filter(|d| d.kind == MemberKind::Action)
            .cloned()
            .collect();
        let tree = compose(target, &actions, &ExpansionStore::new(), &metrics);
        self.draw_tree(ui, &tree)
    }

    /// Draw every drawable field of the target
    ///
    /// With `include_base`, fields declared by base types come first.
    pub fn show_fields(
        &mut self,
        ui: &mut egui::Ui,
        target: &dyn Inspectable,
        store: &ExpansionStore,
        include_base: bool,
    ) -> Vec<InspectorEvent> {
        let metrics = self.metrics;
        let tree = compose(
            target,
            self.field_descriptors(target, include_base),
            store,
            &metrics,
        );
        self.draw_tree(ui, &tree)
    }

    /// Draw the full inspector for a target, as configured
    pub fn show_inspector(
        &mut self,
        ui: &mut egui::Ui,
        target: &dyn Inspectable,
        store: &ExpansionStore,
    ) -> Vec<InspectorEvent> {
        if self.draw_all_fields {
            let mut events = self.show_fields(ui, target, store, self.include_base_fields);
            draw::splitter(ui);
            events.extend(self.show_actions(ui, target));
            events
        } else {
            self.show(ui, target, store)
        }
    }

    /// Render the inspector window and apply its events
    ///
    /// Returns what the bridge did this frame.
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        target: &mut dyn Inspectable,
        store: &mut ExpansionStore,
        bridge: &mut InvocationBridge,
    ) -> DispatchReport {
        if !self.visible {
            return DispatchReport::default();
        }

        let mut events = Vec::new();

        egui::Window::new("Inspector")
            .id(egui::Id::new("inspector_window"))
            .default_pos([10.0, 10.0])
            .default_size([320.0, 400.0])
            .resizable(true)
            .collapsible(true)
            .show(ctx, |ui| {
                draw::header(ui, target.type_name());

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        events = self.show_inspector(ui, &*target, &*store);
                    });
            });

        let key = TargetKey::of(&*target);
        bridge.bind(
            [&self.marked, &self.fields]
                .into_iter()
                .flatten()
                .filter(|cache| cache.key == key)
                .flat_map(|cache| cache.descriptors.iter()),
        );

        let report = bridge.dispatch(target, store, events);
        if report.relayout {
            ctx.request_repaint();
        }
        report
    }

    /// Draw a composed tree, collecting interaction events
    fn draw_tree(&self, ui: &mut egui::Ui, tree: &ControlTree) -> Vec<InspectorEvent> {
        let mut events = Vec::new();

        for control in &tree.controls {
            match control {
                Control::Button { id, label } => {
                    events.extend(actions::render_action(ui, id, label));
                }
                Control::Foldout {
                    id,
                    header,
                    expanded,
                    body,
                    ..
                } => {
                    if draw::header_foldout_plain(ui, header, *expanded) != *expanded {
                        events.push(InspectorEvent::Toggle(id.clone()));
                    }
                    if let Some(editor) = body {
                        ui.add_space(self.metrics.standard_vertical_spacing);
                        events.extend(self.draw_editor(ui, editor));
                    }
                }
                Control::Field(editor) => {
                    events.extend(self.draw_editor(ui, editor));
                }
            }
        }

        events
    }

    /// Draw one field editor at its indent level
    fn draw_editor(&self, ui: &mut egui::Ui, editor: &FieldEditor) -> Option<InspectorEvent> {
        let indent = editor.indent as f32 * self.metrics.indent_width;
        let new_value = ui
            .horizontal(|ui| {
                ui.add_space(indent);
                self.value_renderer.render_field(ui, editor)
            })
            .inner?;

        Some(InspectorEvent::Edit {
            id: editor.id.clone(),
            field: editor.field.clone(),
            value: new_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{Broken, Spawner, Turret, run_ui};

    #[test]
    fn test_show_without_input_raises_nothing() {
        let turret = Turret::default();
        let store = ExpansionStore::new();
        let mut panel = InspectorPanel::new();

        run_ui(|ui| {
            assert!(panel.show(ui, &turret, &store).is_empty());
            assert!(panel.show_inspector(ui, &turret, &store).is_empty());
        });
    }

    #[test]
    fn test_rescans_only_on_identity_change() {
        let turret = Turret::default();
        let spawner = Spawner::default();
        let store = ExpansionStore::new();
        let mut panel = InspectorPanel::new();

        run_ui(|ui| {
            panel.show(ui, &turret, &store);
        });
        run_ui(|ui| {
            panel.show(ui, &turret, &store);
        });
        assert_eq!(panel.scan_count(), 1);

        run_ui(|ui| {
            panel.show(ui, &spawner, &store);
        });
        assert_eq!(panel.scan_count(), 2);
        assert_eq!(panel.descriptors(&spawner).len(), 1);

        panel.invalidate();
        panel.descriptors(&spawner);
        assert_eq!(panel.scan_count(), 3);
    }

    #[test]
    fn test_field_scan_tracks_include_base() {
        let turret = Turret::default();
        let mut panel = InspectorPanel::new();

        assert_eq!(panel.field_descriptors(&turret, false).len(), 4);
        assert_eq!(panel.field_descriptors(&turret, true).len(), 5);
        assert_eq!(panel.scan_count(), 2);
    }

    #[test]
    fn test_broken_target_draws_nothing() {
        let store = ExpansionStore::new();
        let mut panel = InspectorPanel::new();

        run_ui(|ui| {
            assert!(panel.show_inspector(ui, &Broken, &store).is_empty());
        });
        assert!(panel.descriptors(&Broken).is_empty());
    }

    #[test]
    fn test_hidden_panel_dispatches_nothing() {
        let mut turret = Turret::default();
        let mut store = ExpansionStore::new();
        let mut bridge = InvocationBridge::new();
        let mut panel = InspectorPanel::new();
        panel.set_visible(false);

        let ctx = egui::Context::default();
        let mut report = DispatchReport::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            report = panel.render(ctx, &mut turret, &mut store, &mut bridge);
        });
        assert!(report.is_empty());
        assert_eq!(panel.scan_count(), 0);
    }

    #[test]
    fn test_render_without_input_leaves_target_untouched() {
        let mut turret = Turret::default();
        let mut store = ExpansionStore::new();
        let mut bridge = InvocationBridge::new();
        let mut panel = InspectorPanel::new();

        let ctx = egui::Context::default();
        let mut report = DispatchReport::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            report = panel.render(ctx, &mut turret, &mut store, &mut bridge);
        });

        assert!(report.is_empty());
        assert_eq!(turret, Turret::default());
        assert!(store.is_empty());
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.layout.single_line_height = 24.0;
        config.inspector.draw_all_fields = false;

        let panel = InspectorPanel::from_config(&config);
        assert_eq!(panel.metrics().single_line_height, 24.0);
        assert!(!panel.draw_all_fields);
        assert!(panel.visible);
    }
}
