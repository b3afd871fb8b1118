//! Neri-Schneider day counting.
//!
//! The equations operate on the "computational" calendar, which starts the
//! year in March so that the leap day is the last day of the year. The
//! equations only hold for a non-negative computational rata die, so both
//! directions shift the input by whole 400 year cycles first.

const EPOCH_COMPUTATIONAL_RATA_DIE: i64 = 719_468;

const DAYS_IN_A_400Y_CYCLE: i64 = 146_097;
const TWO_POWER_THIRTY_NINE: u64 = 549_755_813_888; // 2^39 constant
const TWO_POWER_SIXTEEN: u32 = 65_536; // 2^16 constant

/// Returns the number of days between 1970-01-01 and the provided date.
///
/// `month` must be in `1..=12` and `day` must be a valid day of that month.
pub const fn epoch_days_from_ymd(year: i64, month: u8, day: u8) -> i64 {
    // Move the year into [400, 800) so every intermediate value is positive.
    let cycles = year.div_euclid(400) - 1;
    let shifted_year = year - cycles * 400;
    let rata_die = rata_die_from_shifted_date(shifted_year, month as i64, day as i64);
    rata_die + cycles * DAYS_IN_A_400Y_CYCLE - EPOCH_COMPUTATIONAL_RATA_DIE
}

// Valid for a year that is at least one.
const fn rata_die_from_shifted_date(year: i64, month: i64, day: i64) -> i64 {
    let j = (month <= 2) as i64;
    let computational_year = year - j;
    let computational_month = month + 12 * j;
    let computational_day = day - 1;
    let century = computational_year / 100;

    let y_star = 1461 * computational_year / 4 - century + century / 4;
    let m_star = (979 * computational_month - 2919) / 32;
    y_star + m_star + computational_day
}

/// Returns the `(year, month, day)` for a count of days since 1970-01-01.
pub const fn ymd_from_epoch_days(epoch_days: i64) -> (i64, u8, u8) {
    let rata_die = epoch_days + EPOCH_COMPUTATIONAL_RATA_DIE;
    let cycles = rata_die.div_euclid(DAYS_IN_A_400Y_CYCLE);
    let day_in_cycle = rata_die.rem_euclid(DAYS_IN_A_400Y_CYCLE) as u32;

    let (year, month, day) = ymd_in_cycle(day_in_cycle);
    (year as i64 + cycles * 400, month, day)
}

// Y, N_y for a computational rata die inside the first 400 year cycle.
const fn year_and_day_of_year(rata_die: u32) -> (u32, u32) {
    let n_one = 4 * rata_die + 3;
    let century = n_one / DAYS_IN_A_400Y_CYCLE as u32;
    let n_two = (n_one % DAYS_IN_A_400Y_CYCLE as u32) | 3;
    let year_of_century = ((376_287_347 * n_two as u64) / TWO_POWER_THIRTY_NINE) as u32;
    let day_of_year = (n_two - 1461 * year_of_century) / 4;
    (100 * century + year_of_century, day_of_year)
}

const fn ymd_in_cycle(rata_die: u32) -> (u32, u8, u8) {
    let (year, day_of_year) = year_and_day_of_year(rata_die);
    let n_three = 2141 * day_of_year + 197_913;
    let month = n_three / TWO_POWER_SIXTEEN;
    let day = (n_three % TWO_POWER_SIXTEEN) / 2141;

    // January and February belong to the following gregorian year.
    let j = (day_of_year >= 306) as u32;
    (year + j, (month - 12 * j) as u8, (day + 1) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_epoch() {
        assert_eq!(epoch_days_from_ymd(1970, 1, 1), 0);
        assert_eq!(ymd_from_epoch_days(0), (1970, 1, 1));
    }

    #[test]
    fn known_day_counts() {
        assert_eq!(epoch_days_from_ymd(2000, 3, 1), 11_017);
        assert_eq!(epoch_days_from_ymd(1969, 12, 31), -1);
        assert_eq!(epoch_days_from_ymd(0, 3, 1), -719_468);
        assert_eq!(epoch_days_from_ymd(275_760, 9, 13), 100_000_000);
        assert_eq!(epoch_days_from_ymd(-271_821, 4, 20), -100_000_000);
    }

    #[test]
    fn inverse_around_leap_days() {
        for (year, month, day) in [
            (2000, 2, 29),
            (1900, 2, 28),
            (1900, 3, 1),
            (-1, 12, 31),
            (0, 2, 29),
            (-400, 1, 1),
            (-54, 6, 15),
        ] {
            let days = epoch_days_from_ymd(year, month, day);
            assert_eq!(ymd_from_epoch_days(days), (year, month, day));
        }
    }

    #[test]
    fn consecutive_days() {
        let start = epoch_days_from_ymd(-801, 1, 1);
        let end = epoch_days_from_ymd(801, 1, 1);
        let mut previous = ymd_from_epoch_days(start - 1);
        for days in start..end {
            let current = ymd_from_epoch_days(days);
            assert_eq!(epoch_days_from_ymd(current.0, current.1, current.2), days);
            assert_ne!(current, previous);
            previous = current;
        }
    }
}
