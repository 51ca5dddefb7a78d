//! Recombining Cox-Ross-Rubinstein binomial lattice.
//!
//! Time to maturity is cut into `steps` equal intervals. Over each interval
//! the underlying moves up by `u = exp(σ √Δt)` or down by `d = 1/u`, so an
//! up-move followed by a down-move lands on the same node and the tree grows
//! linearly in the number of steps.
//!
//! Node `(i, j)` sits at time step `i` after `j` down-moves, which gives the
//! recombination rule
//!
//! ```text
//! S[i+1][j]   = S[i][j] · u      for j in 0..=i
//! S[i+1][i+1] = S[i][i] · d
//! ```
//!
//! Backward induction weights the two successors of a node with the
//! risk-neutral probabilities
//!
//! ```text
//! q_u = (exp((r − q) Δt) − d) / (u − d),   q_d = 1 − q_u
//! ```
//!
//! and discounts by `exp(−r Δt)` per step.

use op_core::{DiscountFactor, Rate, Real, Size, Time, Volatility};
use tracing::{debug, trace};

/// A recombining binomial lattice of underlying prices and option values.
///
/// The lattice has `steps + 1` time layers, with layer `i` holding `i + 1`
/// nodes. Both trees are allocated and the price tree is filled on
/// construction; the value tree is filled by one of the `roll_back_*`
/// methods.
#[derive(Debug, Clone)]
pub struct BinomialLattice {
    steps: Size,
    dt: Time,
    up: Real,
    down: Real,
    q_up: Real,
    q_down: Real,
    step_discount: DiscountFactor,
    price_tree: Vec<Vec<Real>>,
    payoff_tree: Vec<Vec<Real>>,
}

impl BinomialLattice {
    /// Build a Cox-Ross-Rubinstein lattice under the cost of carry
    /// `risk_free_rate − dividend_yield`.
    ///
    /// No inputs are checked. Zero volatility gives `u = d = 1` and
    /// non-finite probabilities, which then propagate into the option value.
    pub fn cox_ross_rubinstein(
        spot: Real,
        volatility: Volatility,
        risk_free_rate: Rate,
        dividend_yield: Rate,
        maturity: Time,
        steps: Size,
    ) -> Self {
        let dt = maturity / steps as Real;
        let up = (volatility * dt.sqrt()).exp();
        let down = 1.0 / up;
        let q_up = (((risk_free_rate - dividend_yield) * dt).exp() - down) / (up - down);
        let q_down = 1.0 - q_up;
        let step_discount = (-risk_free_rate * dt).exp();

        debug!(steps, dt, up, down, q_up, q_down, step_discount, "built CRR lattice");

        let mut lattice = Self {
            steps,
            dt,
            up,
            down,
            q_up,
            q_down,
            step_discount,
            price_tree: triangle(steps),
            payoff_tree: triangle(steps),
        };
        lattice.fill_price_tree(spot);
        lattice
    }

    fn fill_price_tree(&mut self, spot: Real) {
        let (up, down) = (self.up, self.down);
        self.price_tree[0][0] = spot;
        for i in 0..self.steps {
            let (done, rest) = self.price_tree.split_at_mut(i + 1);
            let previous = &done[i];
            let current = &mut rest[0];
            for (node, &price) in current.iter_mut().zip(previous) {
                *node = price * up;
            }
            current[i + 1] = previous[i] * down;
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Number of time steps.
    pub fn steps(&self) -> Size {
        self.steps
    }

    /// Time increment per step.
    pub fn dt(&self) -> Time {
        self.dt
    }

    /// Up-move multiplier.
    pub fn up(&self) -> Real {
        self.up
    }

    /// Down-move multiplier (`1 / up`).
    pub fn down(&self) -> Real {
        self.down
    }

    /// Risk-neutral probability of an up-move.
    pub fn q_up(&self) -> Real {
        self.q_up
    }

    /// Risk-neutral probability of a down-move.
    pub fn q_down(&self) -> Real {
        self.q_down
    }

    /// One-step discount factor `exp(−r Δt)`.
    pub fn step_discount(&self) -> DiscountFactor {
        self.step_discount
    }

    /// Underlying price at every node, layer by layer.
    pub fn price_tree(&self) -> &[Vec<Real>] {
        &self.price_tree
    }

    /// Option value at every node. All zeros until rolled back.
    pub fn payoff_tree(&self) -> &[Vec<Real>] {
        &self.payoff_tree
    }

    /// Option value at the root.
    pub fn value(&self) -> Real {
        self.payoff_tree[0][0]
    }

    // ── Backward induction ───────────────────────────────────────────────

    /// Value an option that can be exercised at any node.
    ///
    /// After computing each layer's continuation values, every node is
    /// floored at `payoff(price)`. A NaN continuation value stays NaN.
    /// Returns the root value.
    pub fn roll_back_american(&mut self, payoff: &dyn Fn(Real) -> Real) -> Real {
        self.roll_back(payoff, true)
    }

    /// Value an option that can only be exercised at maturity.
    pub fn roll_back_european(&mut self, payoff: &dyn Fn(Real) -> Real) -> Real {
        self.roll_back(payoff, false)
    }

    fn roll_back(&mut self, payoff: &dyn Fn(Real) -> Real, early_exercise: bool) -> Real {
        let n = self.steps;
        let (q_up, q_down, discount) = (self.q_up, self.q_down, self.step_discount);

        for (value, &price) in self.payoff_tree[n].iter_mut().zip(&self.price_tree[n]) {
            *value = payoff(price);
        }

        for i in (0..n).rev() {
            let (head, tail) = self.payoff_tree.split_at_mut(i + 1);
            let next = &tail[0];
            let current = &mut head[i];
            for (value, pair) in current.iter_mut().zip(next.windows(2)) {
                *value = (pair[0] * q_up + pair[1] * q_down) * discount;
            }
            if early_exercise {
                for (value, &price) in current.iter_mut().zip(&self.price_tree[i]) {
                    *value = exercise_floor(*value, payoff(price));
                }
            }
            trace!(step = i, nodes = current.len(), "rolled back layer");
        }

        self.value()
    }
}

/// `max(continuation, exercise)`, except that NaN on either side wins.
#[inline]
fn exercise_floor(continuation: Real, exercise: Real) -> Real {
    if continuation.is_nan() || continuation >= exercise {
        continuation
    } else {
        exercise
    }
}

/// Zero-filled triangular storage: layer `i` has `i + 1` entries.
fn triangle(steps: Size) -> Vec<Vec<Real>> {
    (0..=steps).map(|i| vec![0.0; i + 1]).collect()
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    fn put_payoff(strike: Real) -> impl Fn(Real) -> Real {
        move |s| (strike - s).max(0.0)
    }

    fn call_payoff(strike: Real) -> impl Fn(Real) -> Real {
        move |s| (s - strike).max(0.0)
    }

    fn atm_lattice(steps: Size) -> BinomialLattice {
        BinomialLattice::cox_ross_rubinstein(100.0, 0.2, 0.03, 0.01, 0.5, steps)
    }

    #[test]
    fn triangular_shape() {
        let lattice = atm_lattice(7);
        assert_eq!(lattice.price_tree().len(), 8);
        assert_eq!(lattice.payoff_tree().len(), 8);
        for (i, layer) in lattice.price_tree().iter().enumerate() {
            assert_eq!(layer.len(), i + 1);
        }
        assert!(lattice.payoff_tree().iter().flatten().all(|&v| v == 0.0));
    }

    #[test]
    fn root_is_spot() {
        let lattice = atm_lattice(10);
        assert_eq!(lattice.price_tree()[0], vec![100.0]);
    }

    #[test]
    fn geometry() {
        let lattice = atm_lattice(100);
        let dt = 0.5 / 100.0;
        assert_relative_eq!(lattice.dt(), dt, max_relative = 1e-15);
        assert_relative_eq!(lattice.up(), (0.2 * dt.sqrt()).exp(), max_relative = 1e-15);
        assert_relative_eq!(lattice.up() * lattice.down(), 1.0, max_relative = 1e-15);
        assert!(lattice.up() > 1.0);
        assert_abs_diff_eq!(lattice.q_up() + lattice.q_down(), 1.0, epsilon = 1e-15);
        assert_relative_eq!(
            lattice.step_discount(),
            (-0.03 * dt).exp(),
            max_relative = 1e-15
        );
        // Discounted expected one-step growth matches the cost of carry.
        let growth = lattice.q_up() * lattice.up() + lattice.q_down() * lattice.down();
        assert_relative_eq!(growth, (0.02 * dt).exp(), max_relative = 1e-13);
    }

    #[test]
    fn recombination() {
        let lattice = atm_lattice(50);
        let tree = lattice.price_tree();
        for i in 0..lattice.steps() {
            for j in 0..=i {
                assert_eq!(tree[i + 1][j], tree[i][j] * lattice.up());
            }
            assert_eq!(tree[i + 1][i + 1], tree[i][i] * lattice.down());
        }
    }

    #[test]
    fn european_forward_is_a_martingale() {
        // Holding the asset to maturity is worth S·exp(−qT).
        let mut lattice = atm_lattice(100);
        let value = lattice.roll_back_european(&|s| s);
        assert_relative_eq!(value, 100.0 * (-0.01 * 0.5_f64).exp(), max_relative = 1e-10);
    }

    #[test]
    fn terminal_layer_holds_payoff() {
        let mut lattice = atm_lattice(20);
        let payoff = call_payoff(100.0);
        lattice.roll_back_american(&payoff);
        let n = lattice.steps();
        for (value, &price) in lattice.payoff_tree()[n].iter().zip(&lattice.price_tree()[n]) {
            assert_eq!(*value, payoff(price));
        }
    }

    #[test]
    fn american_nodes_dominate_exercise_and_continuation() {
        let mut lattice = BinomialLattice::cox_ross_rubinstein(100.0, 0.25, 0.05, 0.0, 1.0, 100);
        let payoff = put_payoff(110.0);
        lattice.roll_back_american(&payoff);
        let prices = lattice.price_tree();
        let values = lattice.payoff_tree();
        for i in 0..lattice.steps() {
            for j in 0..=i {
                let continuation = (values[i + 1][j] * lattice.q_up()
                    + values[i + 1][j + 1] * lattice.q_down())
                    * lattice.step_discount();
                assert!(values[i][j] >= payoff(prices[i][j]), "node ({i}, {j})");
                assert!(values[i][j] >= continuation, "node ({i}, {j})");
            }
        }
    }

    #[test]
    fn early_exercise_premium_is_non_negative() {
        let payoff = put_payoff(110.0);
        let mut american = BinomialLattice::cox_ross_rubinstein(100.0, 0.25, 0.05, 0.0, 1.0, 100);
        let mut european = american.clone();
        let a = american.roll_back_american(&payoff);
        let e = european.roll_back_european(&payoff);
        assert!(a > e, "american {a} vs european {e}");
    }

    #[test]
    fn call_without_dividends_is_never_exercised_early() {
        let payoff = call_payoff(100.0);
        let mut american = BinomialLattice::cox_ross_rubinstein(100.0, 0.2, 0.05, 0.0, 1.0, 100);
        let mut european = american.clone();
        let a = american.roll_back_american(&payoff);
        let e = european.roll_back_european(&payoff);
        assert_relative_eq!(a, e, max_relative = 1e-12);
    }

    #[test]
    fn zero_volatility_propagates_nan() {
        // u = d = 1 and r = q give q_u = 0/0.
        let mut lattice = BinomialLattice::cox_ross_rubinstein(100.0, 0.0, 0.02, 0.02, 1.0, 10);
        assert_eq!(lattice.up(), 1.0);
        assert_eq!(lattice.down(), 1.0);
        assert!(lattice.q_up().is_nan());
        assert!(lattice.roll_back_american(&put_payoff(100.0)).is_nan());
    }

    #[test]
    fn exercise_floor_semantics() {
        assert_eq!(exercise_floor(1.0, 2.0), 2.0);
        assert_eq!(exercise_floor(3.0, 2.0), 3.0);
        assert!(exercise_floor(Real::NAN, 2.0).is_nan());
        assert!(exercise_floor(1.0, Real::NAN).is_nan());
    }

    proptest! {
        #[test]
        fn american_put_value_bounded(
            spot in 50.0f64..150.0,
            vol in 0.15f64..0.6,
            rate in 0.0f64..0.08,
            steps in 10usize..60,
        ) {
            let mut lattice = BinomialLattice::cox_ross_rubinstein(spot, vol, rate, 0.0, 1.0, steps);
            let value = lattice.roll_back_american(&put_payoff(100.0));
            prop_assert!(value >= (100.0 - spot).max(0.0));
            prop_assert!(value <= 100.0 + 1e-9);
        }
    }
}
