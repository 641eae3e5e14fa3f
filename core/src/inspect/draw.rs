//! Static drawing helpers for custom inspector UI
//!
//! Small immediate-mode building blocks (header bars, foldout headers,
//! splitters, tinted boxes) shared by the inspector panel and host tools.

use egui::{Align2, Color32, FontId, Key, Rect, Response, Sense, Ui, vec2};

/// Height of a header bar
pub const HEADER_HEIGHT: f32 = 17.0;
/// Horizontal inset of header titles (room for the foldout arrow)
const TITLE_INSET: f32 = 16.0;
/// Width of the button on a header bar
const HEADER_BUTTON_WIDTH: f32 = 30.0;

/// Background tints for boxes and help text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Gray,
    Blue,
    Red,
    Green,
    Orange,
    Border,
    FlatBox,
}

impl Tint {
    pub fn color(self) -> Color32 {
        match self {
            Tint::Gray => rgba(0.5, 0.5, 0.5, 0.3),
            Tint::Blue => rgba(0.0, 0.5, 1.0, 0.3),
            Tint::Red => rgba(1.0, 0.3, 0.0, 0.3),
            Tint::Green => rgba(0.0, 1.0, 0.5, 0.3),
            Tint::Orange => rgba(1.0, 0.5, 0.0, 0.3),
            Tint::Border => rgba(0.0, 0.5, 1.0, 0.0),
            Tint::FlatBox => rgba(0.35, 0.35, 0.35, 0.1),
        }
    }
}

fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color32 {
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(to_u8(r), to_u8(g), to_u8(b), to_u8(a))
}

/// Header bar background for the current theme
pub fn header_tint(dark_mode: bool) -> Color32 {
    let t = if dark_mode { 0.1 } else { 1.0 };
    rgba(t, t, t, 0.2)
}

/// Splitter line color for the current theme
pub fn splitter_color(dark_mode: bool) -> Color32 {
    if dark_mode {
        rgba(0.12, 0.12, 0.12, 1.0)
    } else {
        rgba(0.6, 0.6, 0.6, 1.0)
    }
}

/// Paint a header bar: optional background, optional arrow, bold-ish title
fn paint_bar(ui: &Ui, rect: Rect, title: &str, open: Option<bool>, background: bool) {
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter();
    if background {
        painter.rect_filled(rect, 0.0, header_tint(ui.visuals().dark_mode));
    }
    let color = ui.visuals().strong_text_color();
    if let Some(open) = open {
        let arrow = if open { "▼" } else { "▶" };
        painter.text(
            rect.left_center() + vec2(3.0, 0.0),
            Align2::LEFT_CENTER,
            arrow,
            FontId::proportional(9.0),
            color,
        );
    }
    painter.text(
        rect.left_center() + vec2(TITLE_INSET, 0.0),
        Align2::LEFT_CENTER,
        title,
        FontId::proportional(13.0),
        color,
    );
}

fn allocate_bar(ui: &mut Ui, sense: Sense) -> (Rect, Response) {
    ui.allocate_exact_size(vec2(ui.available_width(), HEADER_HEIGHT), sense)
}

/// Full-width tinted header with a title
pub fn header(ui: &mut Ui, title: &str) {
    let (rect, _) = allocate_bar(ui, Sense::hover());
    paint_bar(ui, rect, title, None, true);
    ui.add_space(ui.spacing().item_spacing.y);
}

/// Tinted foldout header; clicking anywhere on the bar toggles
///
/// Returns the new open state.
pub fn header_foldout(ui: &mut Ui, title: &str, open: bool) -> bool {
    foldout_bar(ui, title, open, true).0
}

/// Foldout header without a background
pub fn header_foldout_plain(ui: &mut Ui, title: &str, open: bool) -> bool {
    foldout_bar(ui, title, open, false).0
}

/// Foldout header with a small button at the right edge
pub fn header_foldout_with_button(
    ui: &mut Ui,
    title: &str,
    open: bool,
    button_label: &str,
    on_button: impl FnOnce(),
) -> bool {
    let (open, rect) = foldout_bar(ui, title, open, false);
    let button_rect = Rect::from_min_size(
        rect.right_top() - vec2(HEADER_BUTTON_WIDTH, 0.0),
        vec2(HEADER_BUTTON_WIDTH, rect.height()),
    );
    if ui
        .put(button_rect, egui::Button::new(button_label).small())
        .clicked()
    {
        on_button();
    }
    open
}

/// Foldout header that calls `on_hide` when H is pressed while hovered
pub fn header_foldout_hideable(
    ui: &mut Ui,
    title: &str,
    open: bool,
    on_hide: impl FnOnce(),
) -> bool {
    let (rect, response) = allocate_bar(ui, Sense::click());
    paint_bar(ui, rect, title, Some(open), false);
    if response.hovered() && ui.input(|i| i.key_pressed(Key::H)) {
        on_hide();
    }
    if response.clicked() { !open } else { open }
}

fn foldout_bar(ui: &mut Ui, title: &str, open: bool, background: bool) -> (bool, Rect) {
    let (rect, response) = allocate_bar(ui, Sense::click());
    paint_bar(ui, rect, title, Some(open), background);
    let open = if response.clicked() { !open } else { open };
    (open, rect)
}

/// Thin horizontal separator line
pub fn splitter(ui: &mut Ui) {
    ui.add_space(ui.spacing().item_spacing.y);
    let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), 1.0), Sense::hover());
    if ui.is_rect_visible(rect) {
        let line = Rect::from_min_max(
            rect.left_top() + vec2(TITLE_INSET, 0.0),
            rect.right_bottom(),
        );
        ui.painter()
            .rect_filled(line, 0.0, splitter_color(ui.visuals().dark_mode));
    }
}

/// Help text inside a blue tinted box
pub fn description(ui: &mut Ui, text: &str) {
    egui::Frame::new()
        .fill(Tint::Blue.color())
        .inner_margin(egui::Margin::same(4))
        .show(ui, |ui| {
            ui.label(text);
        });
}

/// Button-styled bool toggle
pub fn bool_button(ui: &mut Ui, value: &mut bool, text: &str) -> Response {
    ui.toggle_value(value, text)
}

/// Requested list edit from [`add_remove_buttons`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEdit {
    Add,
    Remove,
}

/// Right-aligned add/remove buttons
pub fn add_remove_buttons(ui: &mut Ui) -> Option<ListEdit> {
    let mut edit = None;
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if ui.small_button("−").clicked() {
            edit = Some(ListEdit::Remove);
        }
        if ui.small_button("+").clicked() {
            edit = Some(ListEdit::Add);
        }
    });
    edit
}

/// Full-width tinted box of the given height; returns its rect
pub fn tinted_box(ui: &mut Ui, height: f32) -> Rect {
    let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), height), Sense::hover());
    if ui.is_rect_visible(rect) {
        ui.painter()
            .rect_filled(rect, 0.0, header_tint(ui.visuals().dark_mode));
    }
    rect
}
