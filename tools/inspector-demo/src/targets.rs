//! Sample inspector targets

use inspector_core::inspect::{
    ActionError, Constraints, FieldValue, InspectError, Inspectable, MemberRegistry, ValueType,
};

/// A light source with a foldout for its light settings
#[derive(Debug, Clone, PartialEq)]
pub struct Lantern {
    // Declared by the `Prop` base
    pub name: String,
    pub visible: bool,
    // Own members
    pub intensity: f32,
    pub color: u32,
    pub flicker: bool,
    pub fuel: i32,
}

impl Default for Lantern {
    fn default() -> Self {
        Self {
            name: "Lantern".to_string(),
            visible: true,
            intensity: 1.0,
            color: 0xFFC864FF,
            flicker: false,
            fuel: 100,
        }
    }
}

impl Inspectable for Lantern {
    fn describe(&self, members: &mut MemberRegistry) -> Result<(), InspectError> {
        members.base_begin("Prop");
        members.field("name", ValueType::Text, None);
        members.field("visible", ValueType::Bool, None);
        members.base_end();

        members.foldout_with_range(
            "intensity",
            ValueType::F32,
            "Light",
            Constraints::new(0.0, 8.0),
        );
        members.field("color", ValueType::Color, None);
        members.field("flicker", ValueType::Bool, None);
        members.field("fuel", ValueType::I32, Some(Constraints::new(0.0, 100.0)));
        members.button("refuel");
        members.button("burn");
        members.button("shatter");
        Ok(())
    }

    fn invoke(&mut self, action: &str) -> Result<(), ActionError> {
        match action {
            "refuel" => {
                self.fuel = 100;
                Ok(())
            }
            "burn" => {
                if self.fuel < 25 {
                    return Err(ActionError::InvalidOperation(format!(
                        "not enough fuel ({} left)",
                        self.fuel
                    )));
                }
                self.fuel -= 25;
                Ok(())
            }
            "shatter" => panic!("the glass broke"),
            other => Err(ActionError::UnknownAction(other.to_string())),
        }
    }

    fn read_field(&self, field: &str) -> Option<FieldValue> {
        match field {
            "name" => Some(FieldValue::Text(self.name.clone())),
            "visible" => Some(FieldValue::Bool(self.visible)),
            "intensity" => Some(FieldValue::F32(self.intensity)),
            "color" => Some(FieldValue::Color(self.color)),
            "flicker" => Some(FieldValue::Bool(self.flicker)),
            "fuel" => Some(FieldValue::I32(self.fuel)),
            _ => None,
        }
    }

    fn write_field(&mut self, field: &str, value: &FieldValue) -> bool {
        match (field, value) {
            ("name", FieldValue::Text(v)) => self.name = v.clone(),
            ("visible", FieldValue::Bool(v)) => self.visible = *v,
            ("intensity", FieldValue::F32(v)) => self.intensity = *v,
            ("color", FieldValue::Color(v)) => self.color = *v,
            ("flicker", FieldValue::Bool(v)) => self.flicker = *v,
            ("fuel", FieldValue::I32(v)) => self.fuel = *v,
            _ => return false,
        }
        true
    }
}

/// Enemy wave spawner; `configure(waves)` takes a parameter and gets no button
#[derive(Debug, Clone, PartialEq)]
pub struct WaveSpawner {
    pub waves: u32,
    pub spawn_delay: f32,
    pub origin: (f32, f32, f32),
    pub spawned: u32,
}

impl Default for WaveSpawner {
    fn default() -> Self {
        Self {
            waves: 3,
            spawn_delay: 1.5,
            origin: (0.0, 0.0, 0.0),
            spawned: 0,
        }
    }
}

impl Inspectable for WaveSpawner {
    fn describe(&self, members: &mut MemberRegistry) -> Result<(), InspectError> {
        members.field("waves", ValueType::U32, Some(Constraints::new(1.0, 20.0)));
        members.foldout("spawn_delay", ValueType::F32, "Timing");
        members.foldout("origin", ValueType::Vec3, "Origin");
        members.hidden_field("spawned", ValueType::U32);
        members.button("spawn_wave");
        members.button("reset");
        members.action_begin("configure");
        members.action_param("waves", ValueType::U32);
        members.action_end();
        Ok(())
    }

    fn invoke(&mut self, action: &str) -> Result<(), ActionError> {
        match action {
            "spawn_wave" => {
                if self.spawned >= self.waves {
                    return Err(ActionError::InvalidOperation(
                        "all waves already spawned".to_string(),
                    ));
                }
                self.spawned += 1;
                tracing::info!("Spawned wave {}/{}", self.spawned, self.waves);
                Ok(())
            }
            "reset" => {
                *self = Self::default();
                Ok(())
            }
            other => Err(ActionError::UnknownAction(other.to_string())),
        }
    }

    fn read_field(&self, field: &str) -> Option<FieldValue> {
        match field {
            "waves" => Some(FieldValue::U32(self.waves)),
            "spawn_delay" => Some(FieldValue::F32(self.spawn_delay)),
            "origin" => Some(FieldValue::Vec3 {
                x: self.origin.0,
                y: self.origin.1,
                z: self.origin.2,
            }),
            "spawned" => Some(FieldValue::U32(self.spawned)),
            _ => None,
        }
    }

    fn write_field(&mut self, field: &str, value: &FieldValue) -> bool {
        match (field, value) {
            ("waves", FieldValue::U32(v)) => self.waves = *v,
            ("spawn_delay", FieldValue::F32(v)) => self.spawn_delay = v.max(0.0),
            ("origin", FieldValue::Vec3 { x, y, z }) => self.origin = (*x, *y, *z),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inspector_core::inspect::{
        ExpansionStore, InspectorEvent, InvocationBridge, MemberKind, scan, scan_fields,
    };

    #[test]
    fn test_spawner_configure_has_no_button() {
        let spawner = WaveSpawner::default();
        let actions: Vec<_> = scan(&spawner)
            .into_iter()
            .filter(|d| d.kind == MemberKind::Action)
            .map(|d| d.name)
            .collect();
        assert_eq!(actions, vec!["spawn_wave", "reset"]);
    }

    #[test]
    fn test_lantern_fields_base_first() {
        let lantern = Lantern::default();
        let names: Vec<_> = scan_fields(&lantern, true)
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(
            names,
            vec!["name", "visible", "intensity", "color", "flicker", "fuel"]
        );
    }

    #[test]
    fn test_burn_until_empty_then_fail() {
        let mut lantern = Lantern::default();
        let mut store = ExpansionStore::new();
        let mut bridge = InvocationBridge::new();
        bridge.bind(&scan(&lantern));
        let burn = inspector_core::DescriptorId::new("Lantern", "burn");

        let events = std::iter::repeat_n(InspectorEvent::Invoke(burn), 5);
        let report = bridge.dispatch(&mut lantern, &mut store, events);

        assert_eq!(report.invoked.len(), 4);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(lantern.fuel, 0);
    }

    #[test]
    fn test_shatter_is_contained() {
        let mut lantern = Lantern::default();
        let mut store = ExpansionStore::new();
        let mut bridge = InvocationBridge::new();
        bridge.bind(&scan(&lantern));
        let report = bridge.dispatch(
            &mut lantern,
            &mut store,
            [InspectorEvent::Invoke(inspector_core::DescriptorId::new(
                "Lantern", "shatter",
            ))],
        );
        assert_eq!(report.failures[0].member, "Lantern::shatter");
        assert!(report.failures[0].message.contains("the glass broke"));
    }
}
