//! Problem codes for expression compilation.
//!
//! The enumeration is generated at build time from
//! `resources/problem-codes.csv`.

use std::fmt;

include!(concat!(env!("OUT_DIR"), "/problems.rs"));

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code(), self.message())
    }
}
