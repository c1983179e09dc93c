// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types

use core::fmt;

/// Error type returned when constructing a distribution or calling one of the
/// sampling helpers with unusable arguments.
///
/// Each variant carries a static, human-readable reason. Samplers never
/// clamp their parameters or return `NaN` in place of an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A parameter lies outside the domain of the distribution or helper,
    /// e.g. a non-positive gamma shape or a probability outside `[0, 1]`.
    InvalidParameter(&'static str),
    /// The parameters would force a division by zero, e.g. a Pareto shape
    /// or Weibull shape of exactly zero.
    ArithmeticDegenerate(&'static str),
}

impl Error {
    /// The reason attached to this error.
    pub fn reason(&self) -> &'static str {
        match *self {
            Error::InvalidParameter(msg) | Error::ArithmeticDegenerate(msg) => msg,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidParameter(msg) => write!(f, "invalid parameter: {}", msg),
            Error::ArithmeticDegenerate(msg) => write!(f, "division by zero: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn display() {
        let e = Error::InvalidParameter("gamma_variate: alpha and beta must be > 0.0");
        assert_eq!(
            e.to_string(),
            "invalid parameter: gamma_variate: alpha and beta must be > 0.0"
        );
        assert_eq!(e.reason(), "gamma_variate: alpha and beta must be > 0.0");

        let e = Error::ArithmeticDegenerate("pareto_variate: alpha must be nonzero");
        assert_eq!(e.to_string(), "division by zero: pareto_variate: alpha must be nonzero");
    }
}
