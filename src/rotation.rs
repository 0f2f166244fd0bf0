use rand::Rng;
use crate::constants::*;
use crate::state::{RotationState, SchedulerPhase};
use crate::ticker::Tick;

/// What changed on a tick. `None` means the element keeps its current index.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct TickOutcome {
    pub new_color_index: Option<usize>,
    pub new_image_index: Option<usize>,
}

impl TickOutcome {
    pub fn color_changed(&self) -> bool {
        self.new_color_index.is_some()
    }

    pub fn image_changed(&self) -> bool {
        self.new_image_index.is_some()
    }
}

/// Pick a uniformly random index in `0..total` that differs from `current`.
///
/// A single-element domain has nowhere else to go, so it always yields 0.
pub fn pick<R: Rng + ?Sized>(rng: &mut R, current: Option<usize>, total: usize) -> usize {
    debug_assert!(total > 0, "cannot pick from an empty set");
    if total <= 1 {
        return 0;
    }
    match current {
        Some(current) if current < total => {
            // Draw from the remaining total - 1 slots and skip over the current one
            let i = rng.random_range(0..total - 1);
            if i >= current { i + 1 } else { i }
        }
        _ => rng.random_range(0..total),
    }
}

pub fn seed<R: Rng + ?Sized>(rng: &mut R, palette_size: usize, image_count: usize) -> RotationState {
    RotationState {
        current_color_index: pick(rng, None, palette_size),
        current_image_index: pick(rng, None, image_count),
        phase: SchedulerPhase::Uninitialized,
    }
}

/// Decide the rotations for one tick and return the next state with the deltas.
///
/// The first tick after seeding only activates the scheduler, so a start
/// exactly on a minute or five-minute boundary does not rotate immediately.
pub fn on_tick<R: Rng + ?Sized>(
    rng: &mut R,
    state: RotationState,
    tick: &Tick,
    palette_size: usize,
    image_count: usize,
) -> (RotationState, TickOutcome) {
    let mut next = state;
    let mut outcome = TickOutcome::default();

    match state.phase {
        SchedulerPhase::Uninitialized => {
            next.phase = SchedulerPhase::Active;
        }
        SchedulerPhase::Active => {
            if tick.second == COLOR_ROTATION_SECOND {
                let index = pick(rng, Some(state.current_color_index), palette_size);
                next.current_color_index = index;
                outcome.new_color_index = Some(index);
            }
            if tick.minute % IMAGE_ROTATION_MINUTES == 0 {
                let index = pick(rng, Some(state.current_image_index), image_count);
                next.current_image_index = index;
                outcome.new_image_index = Some(index);
            }
        }
    }

    (next, outcome)
}

/// Owns the rotation state between ticks for the presentation layer.
pub struct RotationScheduler<R: Rng> {
    rng: R,
    palette_size: usize,
    image_count: usize,
    state: RotationState,
}

impl<R: Rng> RotationScheduler<R> {
    pub fn new(mut rng: R, palette_size: usize, image_count: usize) -> Self {
        let state = seed(&mut rng, palette_size, image_count);
        Self { rng, palette_size, image_count, state }
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    pub fn on_tick(&mut self, tick: &Tick) -> TickOutcome {
        let (next, outcome) = on_tick(&mut self.rng, self.state, tick, self.palette_size, self.image_count);
        self.state = next;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn tick(minute: u32, second: u32) -> Tick {
        Tick { hour: 10, minute, second }
    }

    fn active_scheduler(seed: u64) -> RotationScheduler<StdRng> {
        let mut scheduler = RotationScheduler::new(StdRng::seed_from_u64(seed), 6, 3);
        scheduler.on_tick(&tick(1, 30));
        scheduler
    }

    #[test]
    fn pick_never_returns_current() {
        let mut rng = StdRng::seed_from_u64(7);
        for total in 2..10 {
            for current in 0..total {
                for _ in 0..200 {
                    let next = pick(&mut rng, Some(current), total);
                    assert!(next < total);
                    assert_ne!(next, current);
                }
            }
        }
    }

    #[test]
    fn pick_single_element_returns_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick(&mut rng, Some(0), 1), 0);
        assert_eq!(pick(&mut rng, None, 1), 0);
    }

    #[test]
    fn pick_reaches_every_other_index() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 6];
        for _ in 0..1000 {
            seen[pick(&mut rng, Some(2), 6)] = true;
        }
        assert_eq!(seen, [true, true, false, true, true, true]);
    }

    #[test]
    fn seed_selects_valid_indices() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let state = seed(&mut rng, 6, 3);
            assert!(state.current_color_index < 6);
            assert!(state.current_image_index < 3);
            assert!(!state.is_initialized());
        }
    }

    #[test]
    fn first_tick_never_rotates() {
        for (minute, second) in [(0, 0), (5, 0), (3, 0), (4, 30)] {
            let mut scheduler = RotationScheduler::new(StdRng::seed_from_u64(5), 6, 3);
            let before = scheduler.state();
            let outcome = scheduler.on_tick(&tick(minute, second));
            assert!(!outcome.color_changed());
            assert!(!outcome.image_changed());
            assert!(scheduler.state().is_initialized());
            assert_eq!(scheduler.state().current_color_index, before.current_color_index);
            assert_eq!(scheduler.state().current_image_index, before.current_image_index);
        }
    }

    #[test]
    fn five_minute_boundary_rotates_both() {
        let mut scheduler = active_scheduler(9);
        let before = scheduler.state();
        let outcome = scheduler.on_tick(&tick(5, 0));
        assert!(outcome.color_changed());
        assert!(outcome.image_changed());
        assert_eq!(outcome.new_color_index, Some(scheduler.state().current_color_index));
        assert_eq!(outcome.new_image_index, Some(scheduler.state().current_image_index));
        assert_ne!(scheduler.state().current_color_index, before.current_color_index);
        assert_ne!(scheduler.state().current_image_index, before.current_image_index);
    }

    #[test]
    fn minute_boundary_rotates_color_only() {
        let mut scheduler = active_scheduler(13);
        let before = scheduler.state();
        let outcome = scheduler.on_tick(&tick(3, 0));
        assert!(outcome.color_changed());
        assert!(!outcome.image_changed());
        assert_eq!(scheduler.state().current_image_index, before.current_image_index);
    }

    #[test]
    fn mid_minute_tick_rotates_nothing() {
        let mut scheduler = active_scheduler(17);
        let before = scheduler.state();
        let outcome = scheduler.on_tick(&tick(4, 30));
        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(scheduler.state(), before);
    }

    #[test]
    fn image_rotates_off_the_minute_on_five_minute_marks() {
        let mut scheduler = active_scheduler(19);
        let outcome = scheduler.on_tick(&tick(10, 15));
        assert!(!outcome.color_changed());
        assert!(outcome.image_changed());
    }

    #[test]
    fn monochrome_palette_keeps_its_only_color() {
        let mut scheduler = RotationScheduler::new(StdRng::seed_from_u64(23), 1, 3);
        scheduler.on_tick(&tick(0, 10));
        let outcome = scheduler.on_tick(&tick(1, 0));
        assert_eq!(outcome.new_color_index, Some(0));
        assert_eq!(scheduler.state().current_color_index, 0);
    }

    #[test]
    fn long_run_never_repeats_an_index() {
        let mut scheduler = RotationScheduler::new(StdRng::seed_from_u64(29), 6, 3);
        let mut minute = 0;
        for n in 0..10_000 {
            let before = scheduler.state();
            let outcome = scheduler.on_tick(&tick(minute, 0));
            if n > 0 {
                assert!(outcome.color_changed());
            }
            if let Some(color) = outcome.new_color_index {
                assert_ne!(color, before.current_color_index);
            }
            if let Some(image) = outcome.new_image_index {
                assert_ne!(image, before.current_image_index);
            }
            minute = (minute + 1) % 60;
        }
    }

    #[test]
    fn pure_on_tick_leaves_input_state_untouched() {
        let mut rng = StdRng::seed_from_u64(31);
        let state = RotationState {
            current_color_index: 2,
            current_image_index: 1,
            phase: SchedulerPhase::Active,
        };
        let (next, outcome) = on_tick(&mut rng, state, &tick(15, 0), 6, 3);
        assert_eq!(state.current_color_index, 2);
        assert_ne!(next.current_color_index, 2);
        assert_ne!(next.current_image_index, 1);
        assert!(outcome.color_changed() && outcome.image_changed());
    }
}
