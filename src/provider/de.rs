//! German names and number words.

use alloc::string::String;

use tinystr::tinystr;

use super::{EraNames, LocaleNames, NumberWords};

pub static GERMAN: LocaleNames = LocaleNames::new(
    tinystr!(8, "de"),
    [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ],
    [
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
        "Sonntag",
    ],
    ["vorm.", "nachm."],
    EraNames {
        ad_bc: ["v. Chr.", "n. Chr."],
        ce_bce: ["v. u. Z.", "u. Z."],
        dotted: ["v. Chr.", "n. Chr."],
        dotted_common: ["v. d. Z.", "d. Z."],
    },
    &GermanWords,
);

const UNITS: [&str; 20] = [
    "null", "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun", "zehn",
    "elf", "zwölf", "dreizehn", "vierzehn", "fünfzehn", "sechzehn", "siebzehn", "achtzehn",
    "neunzehn",
];

const TENS: [&str; 10] = [
    "", "", "zwanzig", "dreißig", "vierzig", "fünfzig", "sechzig", "siebzig", "achtzig",
    "neunzig",
];

// (value, singular, plural)
const SCALES: [(u64, &str, &str); 5] = [
    (1_000_000_000_000_000_000, "trillion", "trillionen"),
    (1_000_000_000_000_000, "billiarde", "billiarden"),
    (1_000_000_000_000, "billion", "billionen"),
    (1_000_000_000, "milliarde", "milliarden"),
    (1_000_000, "million", "millionen"),
];

/// German number words, written as single compounds below one million.
#[derive(Debug, Clone, Copy)]
pub struct GermanWords;

impl GermanWords {
    // `compound` selects `ein` over `eins` for a trailing one.
    fn below_million(value: u64, compound: bool, out: &mut String) {
        let thousands = value / 1000;
        let hundreds = (value % 1000) / 100;
        let rest = value % 100;
        if thousands > 0 {
            Self::below_million(thousands, true, out);
            out.push_str("tausend");
        }
        if hundreds > 0 {
            Self::below_hundred(hundreds, true, out);
            out.push_str("hundert");
        }
        if rest > 0 || value == 0 {
            Self::below_hundred(rest, compound, out);
        }
    }

    fn below_hundred(value: u64, compound: bool, out: &mut String) {
        let value = value as usize;
        match value {
            1 if compound => out.push_str("ein"),
            0..=19 => out.push_str(UNITS[value]),
            _ => {
                let unit = value % 10;
                if unit > 0 {
                    out.push_str(if unit == 1 { "ein" } else { UNITS[unit] });
                    out.push_str("und");
                }
                out.push_str(TENS[value / 10]);
            }
        }
    }

    fn write(value: u64, out: &mut String) {
        let Some(&(scale, singular, plural)) =
            SCALES.iter().find(|(scale, _, _)| value >= *scale)
        else {
            Self::below_million(value, false, out);
            return;
        };
        let count = value / scale;
        if count == 1 {
            out.push_str("eine ");
            out.push_str(singular);
        } else {
            Self::write(count, out);
            out.push(' ');
            out.push_str(plural);
        }
        let rest = value % scale;
        if rest > 0 {
            out.push(' ');
            Self::write(rest, out);
        }
    }

    fn small_ordinal(value: u64, out: &mut String) {
        match value {
            1 => out.push_str("erste"),
            3 => out.push_str("dritte"),
            7 => out.push_str("siebte"),
            8 => out.push_str("achte"),
            _ => {
                Self::below_hundred(value, false, out);
                out.push_str("te");
            }
        }
    }
}

impl NumberWords for GermanWords {
    fn cardinal(&self, value: u64) -> String {
        let mut out = String::new();
        Self::write(value, &mut out);
        out
    }

    /// A variation such as `-er` replaces the final `e` of the ordinal.
    fn ordinal(&self, value: u64, variation: Option<&str>) -> String {
        let mut out = String::new();
        let tail = value % 100;
        if value == 0 {
            out.push_str("nullte");
        } else if (1..20).contains(&tail) {
            if value > tail {
                Self::write(value - tail, &mut out);
            }
            Self::small_ordinal(tail, &mut out);
        } else {
            Self::write(value, &mut out);
            out.push_str("ste");
        }
        if let Some(ending) = variation.and_then(|v| v.strip_prefix('-')) {
            out.pop();
            out.push_str(ending);
        }
        out
    }

    fn ordinal_suffix(&self, _value: u64, _variation: Option<&str>) -> &'static str {
        "."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinals() {
        let words = GermanWords;
        assert_eq!(words.cardinal(0), "null");
        assert_eq!(words.cardinal(1), "eins");
        assert_eq!(words.cardinal(17), "siebzehn");
        assert_eq!(words.cardinal(21), "einundzwanzig");
        assert_eq!(words.cardinal(101), "einhunderteins");
        assert_eq!(words.cardinal(1987), "eintausendneunhundertsiebenundachtzig");
        assert_eq!(words.cardinal(2003), "zweitausenddrei");
        assert_eq!(words.cardinal(1_000_000), "eine million");
        assert_eq!(words.cardinal(2_000_001), "zwei millionen eins");
    }

    #[test]
    fn ordinals() {
        let words = GermanWords;
        assert_eq!(words.ordinal(1, None), "erste");
        assert_eq!(words.ordinal(3, None), "dritte");
        assert_eq!(words.ordinal(7, None), "siebte");
        assert_eq!(words.ordinal(12, None), "zwölfte");
        assert_eq!(words.ordinal(20, None), "zwanzigste");
        assert_eq!(words.ordinal(31, None), "einunddreißigste");
        assert_eq!(words.ordinal(100, None), "einhundertste");
        assert_eq!(words.ordinal(2003, None), "zweitausenddritte");
        assert_eq!(words.ordinal(1, Some("-er")), "erster");
        assert_eq!(words.ordinal(2, Some("-en")), "zweiten");
        assert_eq!(words.ordinal(0, None), "nullte");
        assert_eq!(words.ordinal(0, Some("-er")), "nullter");
        assert_eq!(words.ordinal_suffix(2, None), ".");
    }
}
