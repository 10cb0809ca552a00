//! Cubic pigment model
//!
//! Predicts the sRGB color of a mixture from the concentrations of four
//! base pigments (blue, yellow, red, white). The model is a homogeneous
//! cubic in `(c0, c1, c2, c3)` with one RGB coefficient per monomial.

/// RGB coefficient for each cubic monomial, in the order the weights are
/// built in [`eval`].
const COEFFICIENTS: [[f64; 3]; 20] = [
    [0.07717053, 0.02826978, 0.24832992],
    [0.95912302, 0.80256528, 0.03561839],
    [0.74683774, 0.04868586, 0.00000000],
    [0.99518138, 0.99978149, 0.99704802],
    [0.04819146, 0.83363781, 0.32515377],
    [-0.68146950, 1.46107803, 1.06980936],
    [0.27058419, -0.15324870, 1.98735057],
    [0.80478189, 0.67093710, 0.18424500],
    [-0.35031003, 1.37855826, 3.68865000],
    [1.05128046, 1.97815239, 2.82989073],
    [3.21607125, 0.81270228, 1.03384539],
    [2.78893374, 0.41565549, -0.04487295],
    [3.02162577, 2.55374103, 0.32766114],
    [2.95124691, 2.81201112, 1.17578442],
    [2.82677043, 0.79933038, 1.81715262],
    [2.99691099, 1.22593053, 1.80653661],
    [1.87394106, 2.05027182, -0.29835996],
    [2.56609566, 7.03428198, 0.62575374],
    [4.08329484, -1.40408358, 2.14995522],
    [6.00078678, 2.55552042, 1.90739502],
];

/// Evaluate the model at the given concentrations.
///
/// Concentrations are expected to sum to 1. The result is unclamped.
pub(crate) fn eval(c: [f64; 4]) -> [f64; 3] {
    let [c0, c1, c2, c3] = c;
    let (c00, c11, c22, c33) = (c0 * c0, c1 * c1, c2 * c2, c3 * c3);
    let (c01, c02, c12) = (c0 * c1, c0 * c2, c1 * c2);

    let weights = [
        c0 * c00,
        c1 * c11,
        c2 * c22,
        c3 * c33,
        c00 * c1,
        c01 * c1,
        c00 * c2,
        c02 * c2,
        c00 * c3,
        c0 * c33,
        c11 * c2,
        c12 * c2,
        c11 * c3,
        c1 * c33,
        c22 * c3,
        c2 * c33,
        c01 * c2,
        c01 * c3,
        c02 * c3,
        c12 * c3,
    ];

    let mut rgb = [0.0; 3];
    for (w, coeff) in weights.iter().zip(COEFFICIENTS.iter()) {
        for (channel, k) in rgb.iter_mut().zip(coeff) {
            *channel += w * k;
        }
    }
    rgb
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb(actual: [f64; 3], expected: [f64; 3]) {
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-12, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn test_pure_pigments_hit_their_cube_terms() {
        assert_rgb(eval([1.0, 0.0, 0.0, 0.0]), COEFFICIENTS[0]);
        assert_rgb(eval([0.0, 1.0, 0.0, 0.0]), COEFFICIENTS[1]);
        assert_rgb(eval([0.0, 0.0, 1.0, 0.0]), COEFFICIENTS[2]);
        assert_rgb(eval([0.0, 0.0, 0.0, 1.0]), COEFFICIENTS[3]);
    }

    #[test]
    fn test_pure_white_is_near_white() {
        let [r, g, b] = eval([0.0, 0.0, 0.0, 1.0]);
        assert!(r > 0.99 && g > 0.99 && b > 0.99);
    }

    #[test]
    fn test_blue_yellow_blend_is_green() {
        let [r, g, b] = eval([0.5, 0.5, 0.0, 0.0]);
        assert!(g > r && g > b, "expected green-dominant, got ({r}, {g}, {b})");
    }

    #[test]
    fn test_mixed_terms() {
        // Equal blue and yellow: 1/8 of each cube term plus 1/8 of each cross term
        let expected: Vec<f64> = (0..3)
            .map(|i| {
                (COEFFICIENTS[0][i] + COEFFICIENTS[1][i] + COEFFICIENTS[4][i] + COEFFICIENTS[5][i])
                    / 8.0
            })
            .collect();
        assert_rgb(eval([0.5, 0.5, 0.0, 0.0]), [expected[0], expected[1], expected[2]]);
    }
}
