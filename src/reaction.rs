//! Gray-Scott reaction kinetics: explicit Euler with unit timestep. A feeds
//! in toward 1.0 and is consumed by reaction with B; B is produced by that
//! reaction and removed by the kill term. Numerical stability is the caller's
//! concern via parameter choice; results are never clamped.

use crate::config::Params;

/// One cell's update, from Old-slot values and the two diffusion convolutions.
/// All four inputs are reads of the previous tick; the caller writes the
/// returned pair into the New slot only.
#[inline]
pub fn gray_scott(a: f64, b: f64, conv_a: f64, conv_b: f64, p: &Params) -> (f64, f64) {
    let reaction = a * b * b;
    let new_a = a + (p.diff_a * conv_a - reaction + p.feed * (1.0 - a));
    let new_b = b + (p.diff_b * conv_b + reaction - (p.kill + p.feed) * b);
    (new_a, new_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equilibrium_is_a_fixed_point() {
        // a=1, b=0 with zero diffusion terms: feed*(1-1) = 0, no reaction.
        let (a, b) = gray_scott(1.0, 0.0, 0.0, 0.0, &Params::default());
        assert_eq!(a, 1.0);
        assert_eq!(b, 0.0);
    }

    #[test]
    fn feed_pulls_depleted_a_upward() {
        let p = Params::default();
        let (a, _) = gray_scott(0.5, 0.0, 0.0, 0.0, &p);
        assert!((a - (0.5 + p.feed * 0.5)).abs() < 1e-15);
    }

    #[test]
    fn kill_decays_isolated_b() {
        let p = Params::default();
        let (_, b) = gray_scott(0.0, 0.4, 0.0, 0.0, &p);
        assert!((b - (0.4 - (p.kill + p.feed) * 0.4)).abs() < 1e-15);
        assert!(b < 0.4);
    }

    #[test]
    fn reaction_converts_a_into_b() {
        let p = Params {
            feed: 0.0,
            kill: 0.0,
            ..Params::default()
        };
        let (a, b) = gray_scott(1.0, 0.5, 0.0, 0.0, &p);
        // a*b^2 = 0.25 moves from A to B
        assert!((a - 0.75).abs() < 1e-15);
        assert!((b - 0.75).abs() < 1e-15);
    }
}
