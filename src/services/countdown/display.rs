use crate::models::countdown::{pad_unit, RemainingDuration, TimeUnit};

/// Where the countdown writes its output: four text slots and the enabled
/// state of the start control.
pub trait DisplaySurface {
    fn set_slot(&mut self, unit: TimeUnit, text: &str);
    fn set_start_enabled(&mut self, enabled: bool);

    /// Write every unit of `remaining` as zero-padded text.
    fn render(&mut self, remaining: &RemainingDuration) {
        for unit in TimeUnit::ALL {
            self.set_slot(unit, &pad_unit(remaining.get(unit)));
        }
    }
}

/// In-memory display read by the egui countdown panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownDisplay {
    slots: [String; 4],
    start_enabled: bool,
}

impl Default for CountdownDisplay {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| pad_unit(0)),
            start_enabled: false,
        }
    }
}

impl CountdownDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, unit: TimeUnit) -> &str {
        &self.slots[unit.index()]
    }

    pub fn start_enabled(&self) -> bool {
        self.start_enabled
    }
}

impl DisplaySurface for CountdownDisplay {
    fn set_slot(&mut self, unit: TimeUnit, text: &str) {
        let slot = &mut self.slots[unit.index()];
        slot.clear();
        slot.push_str(text);
    }

    fn set_start_enabled(&mut self, enabled: bool) {
        self.start_enabled = enabled;
    }
}
