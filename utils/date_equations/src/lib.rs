//! # Date Equations
//!
//! Date Equations is a small library of proleptic Gregorian calendar
//! calculations. Day counting is implemented with the Euclidean affine
//! functions described by Cassio Neri and Lorenz Schneider, widened to
//! `i64` years so that any representable year can be counted.
//!
//! All years in this crate are astronomical years, i.e. the year before
//! 1 CE is year 0.
//!
//! ``` rust
//! use date_equations::gregorian;
//!
//! let date = gregorian::ymd_from_epoch_days(0);
//! assert_eq!(date, (1970, 1, 1));
//!
//! let week = gregorian::iso_week_date(2005, 1, 1);
//! assert_eq!((week.year, week.week, week.weekday), (2004, 53, 6));
//! ```
#![no_std]

pub mod gregorian;
