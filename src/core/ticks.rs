//! Round-number tick generation and domain nicing.
//!
//! The step selection mirrors the classic "1, 2, 5 × 10^k" rule: the raw step
//! `span / count` is snapped to the closest of those multiples using the
//! geometric thresholds `√50`, `√10` and `√2`.

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Maximum refinement rounds used by [`nice_domain`].
const NICE_MAX_ITERATIONS: usize = 10;

/// Default tick count used when nicing scale domains.
pub const NICE_TICK_COUNT: usize = 10;

/// Integer tick indices plus the signed increment.
///
/// A positive increment means tick `i` sits at `i * increment`; a negative
/// increment means tick `i` sits at `i / -increment` (used for sub-unit steps
/// so that values like `0.1` stay exact).
#[derive(Debug, Clone, Copy, PartialEq)]
struct TickSpec {
    first: f64,
    last: f64,
    increment: f64,
}

fn tick_spec(start: f64, stop: f64, count: f64) -> TickSpec {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut first, mut last, increment);
    if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        first = (start * inc).round();
        last = (stop * inc).round();
        if first / inc < start {
            first += 1.0;
        }
        if last / inc > stop {
            last -= 1.0;
        }
        increment = -inc;
    } else {
        let inc = 10f64.powf(power) * factor;
        first = (start / inc).round();
        last = (stop / inc).round();
        if first * inc < start {
            first += 1.0;
        }
        if last * inc > stop {
            last -= 1.0;
        }
        increment = inc;
    }

    if last < first && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }

    TickSpec {
        first,
        last,
        increment,
    }
}

/// Returns the signed tick increment for `[start, stop]` split into roughly
/// `count` intervals. See [`TickSpec`] for the sign convention.
#[must_use]
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, count as f64).increment
}

/// Returns the absolute distance between adjacent ticks.
#[must_use]
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let increment = tick_increment(start, stop, count);
    if increment < 0.0 {
        1.0 / -increment
    } else {
        increment
    }
}

/// Generates round tick values inside `[start, stop]`.
///
/// A zero-span interval yields its single value; a zero count yields nothing.
#[must_use]
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (low, high) = if reverse { (stop, start) } else { (start, stop) };
    let spec = tick_spec(low, high, count as f64);
    if !(spec.last >= spec.first) {
        return Vec::new();
    }

    let n = (spec.last - spec.first) as usize + 1;
    let mut values: Vec<f64> = (0..n)
        .map(|i| {
            let index = spec.first + i as f64;
            if spec.increment < 0.0 {
                index / -spec.increment
            } else {
                index * spec.increment
            }
        })
        .collect();
    if reverse {
        values.reverse();
    }
    values
}

/// Extends `(start, stop)` outward so both bounds land on round tick values.
///
/// Zero-span and non-finite domains are returned unchanged.
#[must_use]
pub fn nice_domain(start: f64, stop: f64, count: usize) -> (f64, f64) {
    if !start.is_finite() || !stop.is_finite() || start == stop || count == 0 {
        return (start, stop);
    }

    let reverse = stop < start;
    let (mut low, mut high) = if reverse { (stop, start) } else { (start, stop) };
    let mut previous_step: Option<f64> = None;

    for _ in 0..NICE_MAX_ITERATIONS {
        let step = tick_increment(low, high, count);
        if previous_step == Some(step) {
            break;
        }
        if step > 0.0 {
            low = (low / step).floor() * step;
            high = (high / step).ceil() * step;
        } else if step < 0.0 {
            low = (low * step).ceil() / step;
            high = (high * step).floor() / step;
        } else {
            break;
        }
        previous_step = Some(step);
    }

    if reverse { (high, low) } else { (low, high) }
}

/// Number of fraction digits needed to print ticks spaced by `step`.
#[must_use]
pub fn precision_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    // Nudge so exact powers of ten (0.1, 0.01) are not floored one decade low.
    let exponent = (step.abs().log10() + 1e-9).floor();
    if exponent >= 0.0 {
        0
    } else {
        (-exponent) as usize
    }
}

/// Formats `value` in fixed notation with `,` thousands grouping.
#[must_use]
pub fn format_grouped(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rendered = format!("{:.*}", precision, value.abs());
    let (integer, fraction) = match rendered.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::with_capacity(rendered.len() + integer.len() / 3 + 1);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    let is_zero = rendered.chars().all(|c| c == '0' || c == '.');
    if value.is_sign_negative() && !is_zero {
        grouped.insert(0, '-');
    }
    grouped
}

/// Formats a tick value using the precision implied by the tick step.
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    format_grouped(value, precision_for_step(step))
}

/// Formats a free-standing value (legend bounds) with up to two decimals,
/// trimming trailing zeros.
#[must_use]
pub fn format_compact(value: f64) -> String {
    let mut text = format_grouped(value, 2);
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    if text == "-0" {
        text = "0".to_owned();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::{format_compact, format_grouped, format_tick, nice_domain, tick_step, ticks};

    #[test]
    fn ticks_use_round_steps() {
        assert_eq!(
            ticks(0.0, 1.0, 10),
            vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0]
        );
        assert_eq!(ticks(0.0, 30.0, 6), vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0]);
        assert_eq!(ticks(5.0, 5.0, 6), vec![5.0]);
        assert!(ticks(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn reversed_ticks_descend() {
        assert_eq!(ticks(10.0, 0.0, 2), vec![10.0, 5.0, 0.0]);
    }

    #[test]
    fn nice_domain_extends_to_round_bounds() {
        assert_eq!(nice_domain(1.0, 3.0, 10), (1.0, 3.0));
        assert_eq!(nice_domain(0.12, 9.87, 10), (0.0, 10.0));
        assert_eq!(nice_domain(-5.0, 5.0, 10), (-5.0, 5.0));
        assert_eq!(nice_domain(13.0, 987.0, 10), (0.0, 1000.0));
    }

    #[test]
    fn nice_domain_keeps_zero_span() {
        assert_eq!(nice_domain(4.0, 4.0, 10), (4.0, 4.0));
    }

    #[test]
    fn tick_labels_follow_step_precision() {
        assert_eq!(format_tick(1500.0, 500.0), "1,500");
        assert_eq!(format_tick(0.5, 0.1), "0.5");
        assert_eq!(format_tick(-1_234_567.0, 1.0), "-1,234,567");
        assert_eq!(tick_step(0.0, 1.0, 10), 0.1);
    }

    #[test]
    fn grouping_handles_small_and_negative_values() {
        assert_eq!(format_grouped(999.0, 0), "999");
        assert_eq!(format_grouped(1000.0, 0), "1,000");
        assert_eq!(format_grouped(-0.0, 0), "0");
        assert_eq!(format_compact(2.50), "2.5");
        assert_eq!(format_compact(-12_000.0), "-12,000");
    }
}
