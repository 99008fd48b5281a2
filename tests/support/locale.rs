use std::convert::Infallible;
use std::str::FromStr;

use protrans::Locale;

/// Locale tag supplied by a behaviour-driven step, quotes removed.
#[derive(Clone, Debug)]
pub struct StepLocale {
    raw: String,
}

impl FromStr for StepLocale {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let raw = input
            .trim()
            .trim_matches(|candidate| matches!(candidate, '"' | '\''))
            .to_owned();

        Ok(Self { raw })
    }
}

impl StepLocale {
    /// Consumes the step value, yielding the raw text.
    pub fn into_inner(self) -> String {
        self.raw
    }

    /// Parses the step value as a [`Locale`], panicking on malformed tags.
    pub fn locale(&self) -> Locale {
        Locale::parse(&self.raw)
            .unwrap_or_else(|error| panic!("the step should name a valid locale: {error}"))
    }
}
