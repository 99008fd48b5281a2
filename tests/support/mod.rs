//! Helpers shared by the behaviour-driven suites.
//!
//! `locale::StepLocale` strips the quoting that Gherkin steps use around
//! locale tags so scenarios can feed blank or malformed values through
//! unchanged.
pub mod locale;
