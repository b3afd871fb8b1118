//! French names and number words.

use alloc::string::String;

use tinystr::tinystr;

use super::{EraNames, LocaleNames, NumberWords};

pub static FRENCH: LocaleNames = LocaleNames::new(
    tinystr!(8, "fr"),
    [
        "janvier",
        "février",
        "mars",
        "avril",
        "mai",
        "juin",
        "juillet",
        "août",
        "septembre",
        "octobre",
        "novembre",
        "décembre",
    ],
    [
        "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
    ],
    ["AM", "PM"],
    EraNames {
        ad_bc: ["av. J.-C.", "ap. J.-C."],
        ce_bce: ["AEC", "EC"],
        dotted: ["av. J.-C.", "apr. J.-C."],
        dotted_common: ["A.E.C.", "E.C."],
    },
    &FrenchWords,
);

const UNITS: [&str; 17] = [
    "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix", "onze",
    "douze", "treize", "quatorze", "quinze", "seize",
];

const TENS: [&str; 7] = [
    "", "", "vingt", "trente", "quarante", "cinquante", "soixante",
];

// (value, singular, plural)
const SCALES: [(u64, &str, &str); 5] = [
    (1_000_000_000_000_000_000, "trillion", "trillions"),
    (1_000_000_000_000_000, "billiard", "billiards"),
    (1_000_000_000_000, "billion", "billions"),
    (1_000_000_000, "milliard", "milliards"),
    (1_000_000, "million", "millions"),
];

/// French number words in the traditional spelling (`vingt et un`).
#[derive(Debug, Clone, Copy)]
pub struct FrenchWords;

impl FrenchWords {
    fn below_twenty(value: usize, out: &mut String) {
        if value < 17 {
            out.push_str(UNITS[value]);
        } else {
            out.push_str("dix-");
            out.push_str(UNITS[value - 10]);
        }
    }

    // `plural` allows the final `s` of `quatre-vingts` and `cents`.
    fn below_hundred(value: usize, plural: bool, out: &mut String) {
        let (tens, unit) = (value / 10, value % 10);
        match tens {
            0 | 1 => Self::below_twenty(value, out),
            2..=6 => {
                out.push_str(TENS[tens]);
                match unit {
                    0 => {}
                    1 => out.push_str(" et un"),
                    _ => {
                        out.push('-');
                        out.push_str(UNITS[unit]);
                    }
                }
            }
            7 => {
                out.push_str("soixante");
                if value == 71 {
                    out.push_str(" et onze");
                } else {
                    out.push('-');
                    Self::below_twenty(value - 60, out);
                }
            }
            _ => {
                out.push_str("quatre-vingt");
                if value == 80 {
                    if plural {
                        out.push('s');
                    }
                } else {
                    out.push('-');
                    Self::below_twenty(value - 80, out);
                }
            }
        }
    }

    fn below_thousand(value: usize, plural: bool, out: &mut String) {
        let (hundreds, rest) = (value / 100, value % 100);
        if hundreds > 0 {
            if hundreds > 1 {
                out.push_str(UNITS[hundreds]);
                out.push(' ');
            }
            out.push_str("cent");
            if hundreds > 1 && rest == 0 && plural {
                out.push('s');
            }
            if rest == 0 {
                return;
            }
            out.push(' ');
        }
        Self::below_hundred(rest, plural, out);
    }

    fn below_million(value: u64, out: &mut String) {
        let (thousands, rest) = ((value / 1000) as usize, (value % 1000) as usize);
        if thousands > 0 {
            if thousands > 1 {
                Self::below_thousand(thousands, false, out);
                out.push(' ');
            }
            out.push_str("mille");
            if rest == 0 {
                return;
            }
            out.push(' ');
        }
        Self::below_thousand(rest, true, out);
    }

    fn write(value: u64, out: &mut String) {
        let Some(&(scale, singular, plural)) =
            SCALES.iter().find(|(scale, _, _)| value >= *scale)
        else {
            Self::below_million(value, out);
            return;
        };
        let count = value / scale;
        Self::write(count, out);
        out.push(' ');
        out.push_str(if count == 1 { singular } else { plural });
        let rest = value % scale;
        if rest > 0 {
            out.push(' ');
            Self::write(rest, out);
        }
    }
}

impl NumberWords for FrenchWords {
    fn cardinal(&self, value: u64) -> String {
        let mut out = String::new();
        Self::write(value, &mut out);
        out
    }

    /// The variation `-e` selects the feminine `première`.
    fn ordinal(&self, value: u64, variation: Option<&str>) -> String {
        if value == 1 {
            return String::from(if variation == Some("-e") {
                "première"
            } else {
                "premier"
            });
        }
        let mut out = String::new();
        Self::write(value, &mut out);
        if out.ends_with("cinq") {
            out.push('u');
        } else if out.ends_with("neuf") {
            out.pop();
            out.push('v');
        } else if out.ends_with('e') || out.ends_with("vingts") || out.ends_with("cents") {
            out.pop();
        }
        out.push_str("ième");
        out
    }

    fn ordinal_suffix(&self, value: u64, variation: Option<&str>) -> &'static str {
        match (value, variation) {
            (1, Some("-e")) => "re",
            (1, _) => "er",
            _ => "e",
        }
    }
}
