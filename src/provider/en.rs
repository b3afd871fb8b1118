//! English names and number words.

use alloc::string::String;

use tinystr::tinystr;

use super::{EraNames, LocaleNames, NumberWords};

pub static ENGLISH: LocaleNames = LocaleNames::new(
    tinystr!(8, "en"),
    [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
    ["am", "pm"],
    EraNames {
        ad_bc: ["BC", "AD"],
        ce_bce: ["BCE", "CE"],
        dotted: ["B.C.", "A.D."],
        dotted_common: ["B.C.E.", "C.E."],
    },
    &EnglishWords,
);

const UNITS: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const UNIT_ORDINALS: [&str; 20] = [
    "zeroth",
    "first",
    "second",
    "third",
    "fourth",
    "fifth",
    "sixth",
    "seventh",
    "eighth",
    "ninth",
    "tenth",
    "eleventh",
    "twelfth",
    "thirteenth",
    "fourteenth",
    "fifteenth",
    "sixteenth",
    "seventeenth",
    "eighteenth",
    "nineteenth",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const TEN_ORDINALS: [&str; 10] = [
    "",
    "",
    "twentieth",
    "thirtieth",
    "fortieth",
    "fiftieth",
    "sixtieth",
    "seventieth",
    "eightieth",
    "ninetieth",
];

const SCALES: [(u64, &str); 6] = [
    (1_000_000_000_000_000_000, "quintillion"),
    (1_000_000_000_000_000, "quadrillion"),
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

/// English number words.
///
/// Cardinals separate tens and units with a space (`twenty one`) while
/// ordinals hyphenate them (`twenty-first`); hundreds are joined with
/// `and` (`two thousand and three`).
#[derive(Debug, Clone, Copy)]
pub struct EnglishWords;

impl EnglishWords {
    fn write(value: u64, ordinal: bool, out: &mut String) {
        let (head, rest, joiner) = if let Some(&(scale, name)) =
            SCALES.iter().find(|(scale, _)| value >= *scale)
        {
            Self::write(value / scale, false, out);
            out.push(' ');
            out.push_str(name);
            let rest = value % scale;
            (true, rest, if rest < 100 { " and " } else { " " })
        } else if value >= 100 {
            out.push_str(UNITS[(value / 100) as usize]);
            out.push_str(" hundred");
            (true, value % 100, " and ")
        } else {
            (false, value, "")
        };

        if head {
            if rest == 0 {
                if ordinal {
                    out.push_str("th");
                }
                return;
            }
            out.push_str(joiner);
        }

        let rest = rest as usize;
        if rest < 20 {
            out.push_str(if ordinal {
                UNIT_ORDINALS[rest]
            } else {
                UNITS[rest]
            });
        } else if rest % 10 == 0 {
            out.push_str(if ordinal {
                TEN_ORDINALS[rest / 10]
            } else {
                TENS[rest / 10]
            });
        } else {
            out.push_str(TENS[rest / 10]);
            out.push(if ordinal { '-' } else { ' ' });
            out.push_str(if ordinal {
                UNIT_ORDINALS[rest % 10]
            } else {
                UNITS[rest % 10]
            });
        }
    }
}

impl NumberWords for EnglishWords {
    fn cardinal(&self, value: u64) -> String {
        let mut out = String::new();
        Self::write(value, false, &mut out);
        out
    }

    fn ordinal(&self, value: u64, _variation: Option<&str>) -> String {
        let mut out = String::new();
        Self::write(value, true, &mut out);
        out
    }

    fn ordinal_suffix(&self, value: u64, _variation: Option<&str>) -> &'static str {
        match (value % 10, value % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        }
    }
}
