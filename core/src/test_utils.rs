//! Shared test utilities for unit tests

use crate::inspect::{
    ActionError, Constraints, FieldValue, InspectError, Inspectable, MemberRegistry, ValueType,
};

// ============================================================================
// Test Targets
// ============================================================================

/// Target with a base type, foldouts, plain fields and several actions
#[derive(Debug, Clone, PartialEq)]
pub struct Turret {
    // Declared by the `Building` base
    pub health: i32,
    pub building_label: String,
    pub secret: u32,
    // Own members
    pub stats: f32,
    pub range: f32,
    pub label: String,
    pub aim: (f32, f32),
    pub resets: u32,
}

impl Default for Turret {
    fn default() -> Self {
        Self {
            health: 100,
            building_label: "Building".to_string(),
            secret: 42,
            stats: 12.5,
            range: 20.0,
            label: "Turret".to_string(),
            aim: (0.0, 1.0),
            resets: 0,
        }
    }
}

impl Inspectable for Turret {
    fn describe(&self, members: &mut MemberRegistry) -> Result<(), InspectError> {
        members.base_begin("Building");
        members.field("health", ValueType::I32, Some(Constraints::new(0.0, 100.0)));
        members.field("label", ValueType::Text, None);
        members.hidden_field("secret", ValueType::U32);
        members.base_end();

        members.foldout("stats", ValueType::F32, "Stats");
        members.field("range", ValueType::F32, Some(Constraints::new(0.0, 50.0)));
        members.field("label", ValueType::Text, None);
        members.button("reset");
        members.button("overheat");
        members.action_begin("configure");
        members.action_param("x", ValueType::I32);
        members.action_end();
        members.foldout("aim", ValueType::Vec2, "Aim");
        members.button("jam");
        Ok(())
    }

    fn invoke(&mut self, action: &str) -> Result<(), ActionError> {
        match action {
            "reset" => {
                *self = Self {
                    resets: self.resets + 1,
                    ..Self::default()
                };
                Ok(())
            }
            "overheat" => Err(ActionError::InvalidOperation(
                "turret is already overheating".to_string(),
            )),
            "jam" => panic!("turret jammed"),
            other => Err(ActionError::UnknownAction(other.to_string())),
        }
    }

    fn read_field(&self, field: &str) -> Option<FieldValue> {
        match field {
            "health" => Some(FieldValue::I32(self.health)),
            "label" => Some(FieldValue::Text(self.label.clone())),
            "secret" => Some(FieldValue::U32(self.secret)),
            "stats" => Some(FieldValue::F32(self.stats)),
            "range" => Some(FieldValue::F32(self.range)),
            "aim" => Some(FieldValue::Vec2 {
                x: self.aim.0,
                y: self.aim.1,
            }),
            _ => None,
        }
    }

    fn write_field(&mut self, field: &str, value: &FieldValue) -> bool {
        match (field, value) {
            ("health", FieldValue::I32(v)) => self.health = *v,
            ("label", FieldValue::Text(v)) => self.label = v.clone(),
            ("stats", FieldValue::F32(v)) => self.stats = *v,
            ("range", FieldValue::F32(v)) => self.range = *v,
            ("aim", FieldValue::Vec2 { x, y }) => self.aim = (*x, *y),
            _ => return false,
        }
        true
    }
}

/// Target with an inverted range and a foldout that starts collapsed
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Gauge {
    pub level: f32,
    pub dial: f32,
    pub resets: u32,
}

impl Inspectable for Gauge {
    fn describe(&self, members: &mut MemberRegistry) -> Result<(), InspectError> {
        members.field("level", ValueType::F32, Some(Constraints::new(10.0, 0.0)));
        members.foldout_collapsed("dial", ValueType::F32, "Dial");
        members.button("reset");
        members.action_begin("calibrate");
        members.action_param("offset", ValueType::F32);
        members.action_end();
        Ok(())
    }

    fn invoke(&mut self, action: &str) -> Result<(), ActionError> {
        match action {
            "reset" => {
                self.level = 0.0;
                self.resets += 1;
                Ok(())
            }
            "calibrate" => {
                self.dial = 0.0;
                Ok(())
            }
            other => Err(ActionError::UnknownAction(other.to_string())),
        }
    }

    fn read_field(&self, field: &str) -> Option<FieldValue> {
        match field {
            "level" => Some(FieldValue::F32(self.level)),
            "dial" => Some(FieldValue::F32(self.dial)),
            _ => None,
        }
    }

    fn write_field(&mut self, field: &str, value: &FieldValue) -> bool {
        match (field, value) {
            ("level", FieldValue::F32(v)) => self.level = *v,
            ("dial", FieldValue::F32(v)) => self.dial = *v,
            _ => return false,
        }
        true
    }
}

/// Target with `reset()` and `configure(x)`
#[derive(Debug, Default)]
pub struct Spawner {
    pub count: i32,
}

impl Inspectable for Spawner {
    fn describe(&self, members: &mut MemberRegistry) -> Result<(), InspectError> {
        members.button("reset");
        members.action_begin("configure");
        members.action_param("x", ValueType::I32);
        members.action_end();
        Ok(())
    }

    fn invoke(&mut self, action: &str) -> Result<(), ActionError> {
        match action {
            "reset" => {
                self.count = 0;
                Ok(())
            }
            other => Err(ActionError::UnknownAction(other.to_string())),
        }
    }

    fn read_field(&self, _field: &str) -> Option<FieldValue> {
        None
    }

    fn write_field(&mut self, _field: &str, _value: &FieldValue) -> bool {
        false
    }
}

/// Target whose description is unavailable
pub struct Broken;

impl Inspectable for Broken {
    fn describe(&self, _members: &mut MemberRegistry) -> Result<(), InspectError> {
        Err(InspectError::Unavailable {
            type_name: self.type_name(),
            reason: "members are not registered".to_string(),
        })
    }

    fn invoke(&mut self, action: &str) -> Result<(), ActionError> {
        Err(ActionError::UnknownAction(action.to_string()))
    }

    fn read_field(&self, _field: &str) -> Option<FieldValue> {
        None
    }

    fn write_field(&mut self, _field: &str, _value: &FieldValue) -> bool {
        false
    }
}

/// Target whose description panics halfway through
pub struct Panicky;

impl Inspectable for Panicky {
    fn describe(&self, members: &mut MemberRegistry) -> Result<(), InspectError> {
        members.button("first");
        panic!("describe exploded");
    }

    fn invoke(&mut self, action: &str) -> Result<(), ActionError> {
        Err(ActionError::UnknownAction(action.to_string()))
    }

    fn read_field(&self, _field: &str) -> Option<FieldValue> {
        None
    }

    fn write_field(&mut self, _field: &str, _value: &FieldValue) -> bool {
        false
    }
}

// ============================================================================
// Headless UI
// ============================================================================

/// Run one headless egui frame with a central panel
pub fn run_ui(mut f: impl FnMut(&mut egui::Ui)) {
    let ctx = egui::Context::default();
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| f(ui));
    });
}
