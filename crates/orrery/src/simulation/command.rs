use time::OffsetDateTime;

use super::state::{Layer, SimulationUpdate};

/// UI intents. Generic over what the page offers; each maps onto a
/// [`SimulationState`](super::SimulationState) change or a meteorite action.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Play,
    Pause,
    TogglePlay,
    SetTimeScale(f64),
    SetDate(OffsetDateTime),
    /// Jump forwards (or backwards) by a number of days.
    ShiftDays(f64),
    SelectAsteroid(Option<String>),
    SelectMeteorite(Option<String>),
    SetSunIntensity(f64),
    SetLayer(Layer, bool),
    SetMoons { parent: String, visible: bool },
    /// A partial state document from the page.
    Update(SimulationUpdate),
    /// Add a random meteorite discovered at the current date.
    SpawnRandomMeteorite,
    /// Show or hide a known meteorite.
    SetMeteoriteActive { id: String, active: bool },
}

/// Commands queued by the page, drained once per tick.
#[derive(Debug, Default)]
pub struct CommandQueue {
    commands: Vec<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Take every pending command, oldest first.
    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}
