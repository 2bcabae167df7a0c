//! Rank interpolation over a sample set.
use quantile::Quantile;
use value::Number;

/// Calculates the `quantile` percentile of `samples`.
///
/// The samples are copied and sorted, then the rank position
/// `pos = quantile * (n + 1)` is located among them:
///
/// - `pos < 1` yields the minimum sample,
/// - `pos >= n` yields the maximum sample,
/// - otherwise the two samples at the 1-based ranks `floor(pos)` and `floor(pos) + 1`
///   are blended linearly by the fractional part of `pos`.
///
/// The clamped results are returned as they are, while interpolated results are always
/// `Number::Float`. Returns `None` if `samples` is empty.
///
/// # Examples
///
/// ```
/// use percentile::evaluate;
/// use percentile::quantile::Quantile;
/// use percentile::value::Number;
///
/// let samples = (1..11).map(Number::Integer).collect::<Vec<_>>();
/// let median = evaluate(&samples, Quantile::new(0.5).unwrap());
/// assert_eq!(median, Some(Number::Float(5.5)));
///
/// assert_eq!(evaluate(&[], Quantile::new(0.5).unwrap()), None);
/// ```
pub fn evaluate(samples: &[Number], quantile: Quantile) -> Option<Number> {
    evaluate_owned(samples.to_vec(), quantile)
}

pub(crate) fn evaluate_owned(mut samples: Vec<Number>, quantile: Quantile) -> Option<Number> {
    if samples.is_empty() {
        return None;
    }
    samples.sort_by(|a, b| a.total_cmp(b));

    let n = samples.len() as f64;
    let pos = quantile.as_f64() * (n + 1.0);
    if pos < 1.0 {
        return Some(samples[0]);
    }
    if pos >= n {
        return Some(samples[samples.len() - 1]);
    }

    // 1 <= pos < n, hence both ranks are within the bounds.
    let fpos = pos.floor();
    let int_pos = fpos as usize;
    let dif = pos - fpos;
    let lower = samples[int_pos - 1].as_f64();
    let upper = samples[int_pos].as_f64();
    Some(Number::Float(lower + dif * (upper - lower)))
}

#[cfg(test)]
mod test {
    use super::*;

    fn q(quantile: f64) -> Quantile {
        track_try_unwrap!(Quantile::new(quantile))
    }

    fn ints(values: &[i64]) -> Vec<Number> {
        values.iter().cloned().map(Number::Integer).collect()
    }

    fn floats(values: &[f64]) -> Vec<Number> {
        values.iter().cloned().map(Number::Float).collect()
    }

    #[test]
    fn it_works() {
        let samples = ints(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(evaluate(&samples, q(0.5)), Some(Number::Float(5.5)));
        assert_eq!(evaluate(&samples, q(0.25)), Some(Number::Float(2.75)));
        assert_eq!(evaluate(&samples, q(0.9)), Some(Number::Float(9.9)));
    }

    #[test]
    fn exact_rank_is_not_clamped() {
        // pos == 1.0 goes through the interpolation path with a zero fraction.
        let samples = ints(&[30, 10, 20]);
        assert_eq!(evaluate(&samples, q(0.25)), Some(Number::Float(10.0)));
    }

    #[test]
    fn edges_are_clamped_to_original_samples() {
        assert_eq!(evaluate(&ints(&[5]), q(0.9)), Some(Number::Integer(5)));

        let samples = ints(&[7, 3, 9]);
        assert_eq!(evaluate(&samples, q(0.0)), Some(Number::Integer(3)));
        assert_eq!(evaluate(&samples, q(0.2)), Some(Number::Integer(3)));
        assert_eq!(evaluate(&samples, q(0.75)), Some(Number::Integer(9)));
        assert_eq!(evaluate(&samples, q(1.0)), Some(Number::Integer(9)));

        // Out of range quantiles simply hit the clamps.
        assert_eq!(evaluate(&samples, q(-2.0)), Some(Number::Integer(3)));
        assert_eq!(evaluate(&samples, q(3.0)), Some(Number::Integer(9)));
        assert_eq!(evaluate(&samples, q(::std::f64::INFINITY)), Some(Number::Integer(9)));
    }

    #[test]
    fn empty_samples_have_no_value() {
        assert_eq!(evaluate(&[], q(0.0)), None);
        assert_eq!(evaluate(&[], q(0.5)), None);
        assert_eq!(evaluate(&[], q(1.0)), None);
    }

    #[test]
    fn mixed_number_kinds_are_compared_as_floats() {
        let samples = vec![
            Number::Float(2.5),
            Number::Integer(1),
            Number::Integer(4),
            Number::Float(-0.5),
        ];
        // sorted: -0.5, 1, 2.5, 4; pos = 0.5 * 5 = 2.5
        assert_eq!(evaluate(&samples, q(0.5)), Some(Number::Float(1.75)));
    }

    #[test]
    fn result_lies_between_min_and_max() {
        let samples = floats(&[3.2, -1.0, 8.5, 8.5, 0.0, 12.25, 4.0]);
        for i in 0..101 {
            let quantile = i as f64 / 100.0;
            let value = evaluate(&samples, q(quantile)).map(|n| n.as_f64());
            let value = value.expect("non-empty");
            assert!(-1.0 <= value && value <= 12.25, "q={} v={}", quantile, value);
        }
        assert_eq!(evaluate(&samples, q(0.0)), Some(Number::Float(-1.0)));
        assert_eq!(evaluate(&samples, q(1.0)), Some(Number::Float(12.25)));
    }

    #[test]
    fn insertion_order_is_irrelevant() {
        let mut samples = ints(&[13, 2, 8, 21, 1, 5, 3, 1, 34]);
        let expected = (0..11)
            .map(|i| evaluate(&samples, q(i as f64 / 10.0)))
            .collect::<Vec<_>>();
        for _ in 0..samples.len() {
            let first = samples.remove(0);
            samples.push(first);
            samples.reverse();
            let actual = (0..11)
                .map(|i| evaluate(&samples, q(i as f64 / 10.0)))
                .collect::<Vec<_>>();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn input_is_left_untouched() {
        let samples = ints(&[3, 1, 2]);
        assert_eq!(evaluate(&samples, q(0.5)), Some(Number::Float(2.0)));
        assert_eq!(samples, ints(&[3, 1, 2]));
    }
}
