use crate::scenario::Outcome;
use std::process::ExitCode;

/// How many scenarios passed and failed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    /// Scenarios that passed.
    pub passed: u32,

    /// Scenarios that failed, for whatever reason.
    pub failed: u32,
}

impl Tally {
    /// Count one more outcome.
    pub fn record(self, outcome: &Outcome) -> Self {
        if outcome.passed() {
            Self {
                passed: self.passed + 1,
                ..self
            }
        } else {
            Self {
                failed: self.failed + 1,
                ..self
            }
        }
    }

    /// Did everything pass?
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// `0` if everything passed, `1` otherwise.
    pub fn exit_code(&self) -> ExitCode {
        if self.all_passed() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

impl<'a> FromIterator<&'a Outcome> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a Outcome>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), Self::record)
    }
}
