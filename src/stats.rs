//! Running statistics over the prize values still in play.

use alloc::format;
use alloc::string::String;

use crate::game::BOARD_SIZE;

/// Prize value behind each case, in board order.
pub const PRIZE_VALUES: [u32; BOARD_SIZE] = [10, 20, 30, 50, 60, 75, 100, 150, 200, 1000];

/// Discount applied to the average to get the reduced average.
pub const REDUCED_AVERAGE_FACTOR: f64 = 0.75;

#[cfg(feature = "std")]
fn round_cents(amount: f64) -> u64 {
    (amount * 100.0).round() as u64
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_cents(amount: f64) -> u64 {
    libm::round(amount * 100.0) as u64
}

/// Averages over the cases that have not been eliminated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    /// Number of cases still in play.
    pub remaining: usize,
    /// Sum of the remaining prize values.
    pub total: u32,
    /// Mean of the remaining prize values, 0 when none remain.
    pub average: f64,
    /// `average` scaled by [`REDUCED_AVERAGE_FACTOR`].
    pub reduced_average: f64,
}

impl Stats {
    /// Computes statistics from the eliminated case indices.
    ///
    /// Indices outside the board are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use dondrs::Stats;
    ///
    /// let stats = Stats::compute(&[]);
    /// assert_eq!(stats.average, 169.5);
    /// assert_eq!(stats.reduced_average, 127.125);
    /// ```
    #[must_use]
    pub fn compute(eliminated: &[usize]) -> Self {
        let (remaining, total) = PRIZE_VALUES
            .iter()
            .enumerate()
            .filter(|(index, _)| !eliminated.contains(index))
            .fold((0_usize, 0_u32), |(count, sum), (_, &value)| {
                (count + 1, sum + value)
            });

        #[expect(
            clippy::cast_precision_loss,
            reason = "board holds at most ten cases"
        )]
        let average = if remaining == 0 {
            0.0
        } else {
            f64::from(total) / remaining as f64
        };

        Self {
            remaining,
            total,
            average,
            reduced_average: average * REDUCED_AVERAGE_FACTOR,
        }
    }

    /// Returns the average formatted as currency.
    #[must_use]
    pub fn average_display(&self) -> String {
        format_currency(self.average)
    }

    /// Returns the reduced average formatted as currency.
    #[must_use]
    pub fn reduced_average_display(&self) -> String {
        format_currency(self.reduced_average)
    }
}

/// Formats an amount as dollars with two decimals.
///
/// Half-cent ties round away from zero. Negative amounts clamp to `$0.00`.
///
/// # Example
///
/// ```
/// use dondrs::format_currency;
///
/// assert_eq!(format_currency(169.5), "$169.50");
/// assert_eq!(format_currency(127.125), "$127.13");
/// ```
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let cents = if amount > 0.0 { round_cents(amount) } else { 0 };
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_follow_eliminations() {
        let stats = Stats::compute(&[9]);
        assert_eq!(stats.remaining, 9);
        assert_eq!(stats.total, 695);
        assert_eq!(stats.average_display(), "$77.22");
        assert_eq!(stats.reduced_average_display(), "$57.92");
    }

    #[test]
    fn empty_board_averages_zero() {
        let all: Vec<usize> = (0..BOARD_SIZE).collect();
        let stats = Stats::compute(&all);
        assert_eq!(stats.remaining, 0);
        assert!(stats.average.abs() < f64::EPSILON);
        assert!(stats.reduced_average.abs() < f64::EPSILON);
        assert_eq!(stats.average_display(), "$0.00");
    }

    #[test]
    fn currency_pads_cents() {
        assert_eq!(format_currency(10.0), "$10.00");
        assert_eq!(format_currency(0.05), "$0.05");
        assert_eq!(format_currency(-3.0), "$0.00");
    }
}
