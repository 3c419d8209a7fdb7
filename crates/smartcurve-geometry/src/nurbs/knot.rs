//! Knot vector utilities for B-spline evaluation.

/// Build a clamped knot vector for `count` control points of the given degree.
///
/// With `count == degree + 1` this is the Bernstein (Bezier) knot vector
/// `[0; degree + 1] ++ [1; degree + 1]`; larger counts get uniform interior
/// knots on `[0, 1]`.
pub fn clamped_knots(degree: usize, count: usize) -> Vec<f64> {
    let interior = count.saturating_sub(degree + 1);
    let spans = (interior + 1) as f64;

    let mut knots = Vec::with_capacity(count + degree + 1);
    knots.extend(std::iter::repeat(0.0).take(degree + 1));
    knots.extend((1..=interior).map(|i| i as f64 / spans));
    knots.extend(std::iter::repeat(1.0).take(degree + 1));
    knots
}

/// Find the knot span index for parameter `t`.
///
/// Returns `i` with `knots[i] <= t < knots[i + 1]`; `t` at or past the upper
/// end of the domain maps to the last non-empty span. `n` is the number of
/// control points minus one.
pub fn find_span(degree: usize, knots: &[f64], n: usize, t: f64) -> usize {
    if t >= knots[n + 1] {
        return n;
    }
    if t <= knots[degree] {
        return degree;
    }

    let (mut low, mut high) = (degree, n + 1);
    loop {
        let mid = (low + high) / 2;
        if t < knots[mid] {
            high = mid;
        } else if t >= knots[mid + 1] {
            low = mid;
        } else {
            return mid;
        }
    }
}

/// Non-vanishing basis functions `N[span - degree ..= span]` at `t`
/// (Cox-de Boor triangle, evaluated in place).
pub fn basis_functions(degree: usize, knots: &[f64], span: usize, t: f64) -> Vec<f64> {
    let mut basis = vec![0.0; degree + 1];
    let mut left = vec![0.0; degree + 1];
    let mut right = vec![0.0; degree + 1];
    basis[0] = 1.0;

    for j in 1..=degree {
        left[j] = t - knots[span + 1 - j];
        right[j] = knots[span + j] - t;

        let mut carry = 0.0;
        for r in 0..j {
            let denom = right[r + 1] + left[j - r];
            let share = if denom == 0.0 { 0.0 } else { basis[r] / denom };
            basis[r] = carry + right[r + 1] * share;
            carry = left[j - r] * share;
        }
        basis[j] = carry;
    }

    basis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bezier_knots() {
        assert_eq!(clamped_knots(3, 4), vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_interior_knots() {
        let knots = clamped_knots(2, 5);
        assert_eq!(knots.len(), 8);
        assert!((knots[3] - 1.0 / 3.0).abs() < 1e-12);
        assert!((knots[4] - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_find_span_uniform() {
        let knots = vec![0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 3.0, 3.0];
        let n = 4;
        let degree = 2;

        assert_eq!(find_span(degree, &knots, n, 0.0), 2);
        assert_eq!(find_span(degree, &knots, n, 0.5), 2);
        assert_eq!(find_span(degree, &knots, n, 1.0), 3);
        assert_eq!(find_span(degree, &knots, n, 2.5), 4);
        assert_eq!(find_span(degree, &knots, n, 3.0), 4);
    }

    #[test]
    fn test_partition_of_unity() {
        let degree = 4;
        let knots = clamped_knots(degree, 5);
        for i in 0..=16 {
            let t = i as f64 / 16.0;
            let span = find_span(degree, &knots, 4, t);
            let sum: f64 = basis_functions(degree, &knots, span, t).iter().sum();
            assert!((sum - 1.0).abs() < 1e-12, "sum {sum} at t={t}");
        }
    }
}
