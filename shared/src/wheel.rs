use serde::{Serialize, Deserialize};
use rand::Rng;

/// Direction of a two-stop gradient fill, as rendered on the canvas.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GradientDirection {
    Horizontal,
    Vertical,
    Diagonal,
}

/// Visual fill of one wheel slice.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PrizeFill {
    Solid { color: String },
    Gradient { from: String, to: String, direction: GradientDirection },
}

impl PrizeFill {
    pub fn solid(color: &str) -> Self {
        PrizeFill::Solid { color: color.to_string() }
    }
}

/// One weighted outcome on the wheel. Order in the prize list determines the
/// slice position and the selection tie-break.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Prize {
    pub id: String,
    pub label: String,
    /// Relative selection weight. Not required to sum to 1 across the list.
    pub weight: f64,
    pub fill: PrizeFill,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub bonus_code: Option<String>,
    /// RFC 3339 expiry of the bonus code, if any.
    #[serde(default)]
    pub expires_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelPhase {
    Idle,
    Spinning,
    Resolved,
}

/// What an accepted spin hands the animation driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub prize_index: usize,
    pub start_rotation: f64,
    pub target_rotation: f64,
    pub duration_ms: u32,
}

/// Immutable record of one completed spin.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinResult {
    pub prize: Prize,
    pub prize_index: usize,
    /// Absolute resting rotation of the wheel, in degrees.
    pub rotation: f64,
}

// === API types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordSpinRequest {
    pub page_id: String,
    pub prize_id: String,
    pub rotation: f64,
    pub occurred_at: String,
}

// Animation constants. The pointer sits at the visual top of the wheel,
// which is 270 degrees in canvas coordinates (y axis points down).
pub const POINTER_ANGLE: f64 = 270.0;
/// Extra full turns added to every spin so the animation reads as a real
/// spin regardless of which slice wins. Fixed, not randomized.
pub const FULL_SPINS: f64 = 8.0;
pub const SPIN_DURATION_MS: u32 = 6000;
/// The landing point may drift from the slice midpoint by at most this
/// fraction of the slice, so it never crosses into a neighboring slice.
pub const MAX_JITTER_FRACTION: f64 = 0.4;

/// Cumulative-weight selection: walk the prizes in order accumulating
/// normalized weight and take the first one whose running total meets `r`.
/// A zero weight sum degrades to a uniform draw. If floating point rounding
/// leaves the running total short of `r` after the walk, the last prize wins.
pub fn pick_index(prizes: &[Prize], r: f64) -> usize {
    let total: f64 = prizes.iter().map(|p| p.weight).sum();
    let uniform = 1.0 / prizes.len() as f64;
    let mut acc = 0.0;
    for (i, prize) in prizes.iter().enumerate() {
        acc += if total > 0.0 { prize.weight / total } else { uniform };
        if acc >= r {
            return i;
        }
    }
    prizes.len() - 1
}

/// The wheel engine: prize-weight normalization, outcome selection, rotation
/// targeting and the idle/spinning/resolved state machine. The hosting
/// component drives the animation frames and calls [`WheelEngine::complete`]
/// when the timer runs out; the engine owns every other piece of spin state.
#[derive(Debug)]
pub struct WheelEngine {
    prizes: Vec<Prize>,
    phase: WheelPhase,
    rotation: f64,
    disabled: bool,
    pending: Option<SpinPlan>,
    last_result: Option<SpinResult>,
}

impl WheelEngine {
    pub fn new(prizes: Vec<Prize>) -> Self {
        Self {
            prizes,
            phase: WheelPhase::Idle,
            rotation: 0.0,
            disabled: false,
            pending: None,
            last_result: None,
        }
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    /// Replace the prize list. The list is frozen while a spin is in flight,
    /// so a mid-spin update is dropped.
    pub fn set_prizes(&mut self, prizes: Vec<Prize>) {
        if self.phase == WheelPhase::Spinning {
            log::warn!("prize list update ignored while the wheel is spinning");
            return;
        }
        self.prizes = prizes;
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn phase(&self) -> WheelPhase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == WheelPhase::Spinning
    }

    /// Current absolute rotation in degrees. Accumulates across spins.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn last_result(&self) -> Option<&SpinResult> {
        self.last_result.as_ref()
    }

    pub fn slice_angle(&self) -> f64 {
        360.0 / self.prizes.len().max(1) as f64
    }

    pub fn spin(&mut self) -> Option<SpinPlan> {
        self.spin_with(&mut rand::thread_rng())
    }

    /// Select an outcome and compute the rotation target for it. Returns
    /// `None` without changing state when the wheel is disabled, empty or
    /// already spinning; repeated clicks must never double-spin.
    pub fn spin_with<R: Rng>(&mut self, rng: &mut R) -> Option<SpinPlan> {
        if self.prizes.is_empty() {
            log::debug!("spin ignored: no prizes configured");
            return None;
        }
        if self.disabled {
            log::debug!("spin ignored: wheel is disabled");
            return None;
        }
        if self.phase == WheelPhase::Spinning {
            log::debug!("spin ignored: already spinning");
            return None;
        }

        let r: f64 = rng.gen();
        let index = pick_index(&self.prizes, r);

        let slice = self.slice_angle();
        let jitter = rng.gen_range(-MAX_JITTER_FRACTION..MAX_JITTER_FRACTION) * slice;
        let landing = (index as f64 + 0.5) * slice + jitter;

        // Rotate so the landing angle ends up under the fixed pointer, after
        // the full extra turns. Rotation only ever grows.
        let on_circle = (POINTER_ANGLE - landing).rem_euclid(360.0);
        let adjustment = (on_circle - self.rotation.rem_euclid(360.0)).rem_euclid(360.0);
        let target = self.rotation + FULL_SPINS * 360.0 + adjustment;

        let plan = SpinPlan {
            prize_index: index,
            start_rotation: self.rotation,
            target_rotation: target,
            duration_ms: SPIN_DURATION_MS,
        };
        self.phase = WheelPhase::Spinning;
        self.pending = Some(plan);
        Some(plan)
    }

    /// Finish the in-flight spin: snap the rotation to the plan target and
    /// emit the result. Returns the result exactly once per spin; any call
    /// without a spin in flight is a no-op.
    pub fn complete(&mut self) -> Option<SpinResult> {
        let plan = self.pending.take()?;
        self.rotation = plan.target_rotation;
        self.phase = WheelPhase::Resolved;
        let result = SpinResult {
            prize: self.prizes[plan.prize_index].clone(),
            prize_index: plan.prize_index,
            rotation: plan.target_rotation,
        };
        self.last_result = Some(result.clone());
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn prize(id: &str, weight: f64) -> Prize {
        Prize {
            id: id.to_string(),
            label: id.to_uppercase(),
            weight,
            fill: PrizeFill::solid("#f97316"),
            redirect_url: None,
            bonus_code: None,
            expires_at: None,
        }
    }

    fn frequencies(weights: &[f64], draws: usize) -> Vec<f64> {
        let prizes: Vec<Prize> = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| prize(&format!("p{}", i), w))
            .collect();
        let mut engine = WheelEngine::new(prizes);
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = vec![0usize; weights.len()];
        for _ in 0..draws {
            let plan = engine.spin_with(&mut rng).expect("spin should start");
            counts[plan.prize_index] += 1;
            engine.complete().expect("spin should resolve");
        }
        counts.iter().map(|&c| c as f64 / draws as f64).collect()
    }

    #[test]
    fn selection_converges_to_normalized_weights() {
        let freq = frequencies(&[1.0, 2.0, 3.0, 4.0], 10_000);
        let expected = [0.1, 0.2, 0.3, 0.4];
        for (observed, expected) in freq.iter().zip(expected.iter()) {
            assert!(
                (observed - expected).abs() < 0.02,
                "observed {} vs expected {}",
                observed,
                expected
            );
        }
    }

    #[test]
    fn all_zero_weights_fall_back_to_uniform() {
        let freq = frequencies(&[0.0, 0.0, 0.0], 10_000);
        for observed in freq {
            assert!((observed - 1.0 / 3.0).abs() < 0.02, "observed {}", observed);
        }
    }

    #[test]
    fn zero_weight_prize_is_never_selected_when_others_have_weight() {
        let freq = frequencies(&[1.0, 0.0, 1.0], 10_000);
        assert_eq!(freq[1], 0.0);
    }

    #[test]
    fn rounding_shortfall_selects_last_prize() {
        let prizes: Vec<Prize> = (0..7).map(|i| prize(&format!("p{}", i), 0.1)).collect();
        // r at the very top of the range: the cumulative walk can end short
        // of it, which must resolve to the last prize rather than no prize.
        assert_eq!(pick_index(&prizes, 1.0), 6);
        assert_eq!(pick_index(&prizes, 0.999_999_999_999_999_9), 6);
    }

    #[test]
    fn first_slice_wins_ties_at_zero() {
        let prizes = vec![prize("a", 1.0), prize("b", 1.0)];
        assert_eq!(pick_index(&prizes, 0.0), 0);
    }

    #[test]
    fn spin_while_disabled_is_a_no_op() {
        let mut engine = WheelEngine::new(vec![prize("a", 1.0), prize("b", 1.0)]);
        engine.set_disabled(true);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(engine.spin_with(&mut rng).is_none());
        assert_eq!(engine.phase(), WheelPhase::Idle);
        assert!(engine.complete().is_none());
        assert!(engine.last_result().is_none());
    }

    #[test]
    fn spin_with_no_prizes_is_a_no_op() {
        let mut engine = WheelEngine::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(engine.spin_with(&mut rng).is_none());
        assert_eq!(engine.phase(), WheelPhase::Idle);
    }

    #[test]
    fn second_spin_during_flight_is_ignored_and_result_fires_once() {
        let mut engine = WheelEngine::new(vec![prize("a", 1.0), prize("b", 1.0)]);
        let mut rng = StdRng::seed_from_u64(7);
        let plan = engine.spin_with(&mut rng).unwrap();
        // Immediate second click before the animation resolves.
        assert!(engine.spin_with(&mut rng).is_none());
        let result = engine.complete().unwrap();
        assert_eq!(result.prize_index, plan.prize_index);
        assert_eq!(result.rotation, plan.target_rotation);
        // The in-flight spin resolved once; there is nothing left to emit.
        assert!(engine.complete().is_none());
    }

    #[test]
    fn prize_list_is_frozen_mid_spin() {
        let mut engine = WheelEngine::new(vec![prize("a", 1.0), prize("b", 1.0)]);
        let mut rng = StdRng::seed_from_u64(3);
        engine.spin_with(&mut rng).unwrap();
        engine.set_prizes(vec![prize("c", 1.0)]);
        assert_eq!(engine.prizes().len(), 2);
        engine.complete().unwrap();
        engine.set_prizes(vec![prize("c", 1.0)]);
        assert_eq!(engine.prizes().len(), 1);
    }

    #[test]
    fn target_rotation_lands_selected_slice_under_pointer() {
        let mut engine = WheelEngine::new(vec![
            prize("a", 1.0),
            prize("b", 1.0),
            prize("c", 1.0),
        ]);
        let mut rng = StdRng::seed_from_u64(11);
        let slice = engine.slice_angle();
        for _ in 0..200 {
            let plan = engine.spin_with(&mut rng).unwrap();
            // Wheel-local angle sitting under the pointer at rest.
            let local = (POINTER_ANGLE - plan.target_rotation).rem_euclid(360.0);
            let lo = plan.prize_index as f64 * slice;
            let hi = lo + slice;
            assert!(
                local >= lo && local < hi,
                "landing angle {} outside slice {} [{}, {})",
                local,
                plan.prize_index,
                lo,
                hi
            );
            let midpoint = lo + slice / 2.0;
            assert!((local - midpoint).abs() <= MAX_JITTER_FRACTION * slice + 1e-9);
            engine.complete().unwrap();
        }
    }

    #[test]
    fn three_equal_slices_align_index_one_midpoint_with_pointer() {
        // Equal slices of 120 degrees: slice 1 covers 120..240 with its
        // midpoint at 180. When index 1 wins, the resting rotation modulo
        // 360 must place that midpoint under the 270-degree pointer, give or
        // take the bounded jitter, after the fixed extra turns.
        let mut engine = WheelEngine::new(vec![
            prize("a", 1.0),
            prize("b", 1.0),
            prize("c", 1.0),
        ]);
        let mut rng = StdRng::seed_from_u64(5);
        loop {
            let start = engine.rotation();
            let plan = engine.spin_with(&mut rng).unwrap();
            assert!(plan.target_rotation - start >= FULL_SPINS * 360.0);
            engine.complete().unwrap();
            if plan.prize_index == 1 {
                let resting = plan.target_rotation.rem_euclid(360.0);
                let expected = (POINTER_ANGLE - 180.0).rem_euclid(360.0);
                let diff = (resting - expected + 180.0).rem_euclid(360.0) - 180.0;
                assert!(diff.abs() <= MAX_JITTER_FRACTION * 120.0 + 1e-9);
                break;
            }
        }
    }

    #[test]
    fn rotation_accumulates_across_spins() {
        let mut engine = WheelEngine::new(vec![prize("a", 1.0), prize("b", 3.0)]);
        let mut rng = StdRng::seed_from_u64(9);
        let first = engine.spin_with(&mut rng).unwrap();
        assert_eq!(first.start_rotation, 0.0);
        engine.complete().unwrap();
        assert_eq!(engine.rotation(), first.target_rotation);

        let second = engine.spin_with(&mut rng).unwrap();
        assert_eq!(second.start_rotation, first.target_rotation);
        assert!(second.target_rotation > second.start_rotation);
        engine.complete().unwrap();
        assert_eq!(engine.rotation(), second.target_rotation);
    }

    #[test]
    fn resolved_engine_spins_again_and_disabled_resolved_engine_does_not() {
        let mut engine = WheelEngine::new(vec![prize("a", 1.0)]);
        let mut rng = StdRng::seed_from_u64(2);
        engine.spin_with(&mut rng).unwrap();
        engine.complete().unwrap();
        assert_eq!(engine.phase(), WheelPhase::Resolved);

        engine.set_disabled(true);
        assert!(engine.spin_with(&mut rng).is_none());
        assert_eq!(engine.phase(), WheelPhase::Resolved);

        engine.set_disabled(false);
        assert!(engine.spin_with(&mut rng).is_some());
    }
}
