//! Balance simulator for Orbital Works.
//! Run with: cargo test -p neon-idle simulate_ -- --nocapture

#[cfg(test)]
mod tests {
    use crate::games::orbital::logic;
    use crate::games::orbital::state::*;
    use crate::rng::SeededRng;

    /// Buy automation once affordable and launch whenever a mission is.
    fn play_tick(state: &mut OrbitalState, rng: &mut SeededRng) {
        if !state.automation && state.credits >= state.cost(OrbitalItem::Automation) {
            let _ = logic::purchase(state, OrbitalItem::Automation);
        }
        if logic::mission_view(state).affordable {
            let _ = logic::launch_mission(state, rng);
        }
        logic::tick(state);
    }

    fn assert_invariants(state: &OrbitalState, t: u32) {
        for (name, v) in [
            ("credits", state.credits),
            ("ore", state.ore),
            ("alloy", state.alloy),
            ("fuel", state.fuel),
            ("parts", state.parts),
        ] {
            assert!(v >= 0.0 && v.is_finite(), "{} = {} at tick {}", name, v, t);
        }
    }

    #[test]
    fn simulate_automation_grows_a_seeded_chain() {
        let mut state = OrbitalState::new();
        state.credits = 0.0;
        state.buildings = [10, 4, 2, 2, 0];
        state.automation = true;
        let owned_before: u32 = state.buildings.iter().sum();
        let mut prev_totals = state.totals.clone();

        for t in 0..3_000 {
            logic::tick(&mut state);
            assert_invariants(&state, t);
            assert!(state.totals.credits_earned >= prev_totals.credits_earned);
            assert!(state.totals.ore_mined >= prev_totals.ore_mined);
            prev_totals = state.totals.clone();
        }

        println!(
            "after 3000 ticks: credits={:.0} buildings={:?} earned={:.0}",
            state.credits, state.buildings, state.totals.credits_earned
        );
        let owned_after: u32 = state.buildings.iter().sum();
        assert!(owned_after > owned_before);
        assert!(state.totals.credits_earned > 0.0);
        assert!(state.achievements.contains("ore_1k"));
        assert!(state.achievements.contains("parts_100"));
    }

    #[test]
    fn simulate_full_chain_reaches_missions() {
        let mut state = OrbitalState::new();
        state.credits = 20_000.0;
        state.buildings = [40, 10, 10, 5, 1];
        let mut rng = SeededRng::new(42);

        for t in 0..2_000 {
            play_tick(&mut state, &mut rng);
            assert_invariants(&state, t);
        }

        println!(
            "chain: missions={} parts_built={:.0} earned={:.0}",
            state.totals.missions_launched, state.totals.parts_built, state.totals.credits_earned
        );
        assert!(state.totals.parts_built >= 100.0);
        assert!(state.totals.missions_launched >= 1);
        assert!(state.achievements.contains("first_mission"));
    }

    #[test]
    fn simulate_is_deterministic_for_a_seed() {
        let run = || {
            let mut state = OrbitalState::new();
            state.credits = 20_000.0;
            state.buildings = [40, 10, 10, 5, 1];
            let mut rng = SeededRng::new(7);
            for _ in 0..500 {
                play_tick(&mut state, &mut rng);
            }
            (state.credits, state.totals.missions_launched, state.buildings)
        };
        assert_eq!(run(), run());
    }
}
