#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SchedulerPhase {
    Uninitialized, // No tick observed yet, rotation suppressed
    Active,        // Rotations follow the tick triggers
}

/// Indices of the active palette color and image.
///
/// Both indices are always valid once the state exists: seeding replaces the
/// "nothing selected yet" sentinel before a `RotationState` is ever handed out.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct RotationState {
    pub current_color_index: usize,
    pub current_image_index: usize,
    pub phase: SchedulerPhase,
}

impl RotationState {
    pub fn is_initialized(&self) -> bool {
        self.phase == SchedulerPhase::Active
    }
}
