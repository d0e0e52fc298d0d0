//! Process exit statuses shared across the toolset.

use std::process::ExitCode;

/// How a tool finished.
///
/// Argument parsing errors are reported by `clap`, which exits with status 2.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Everything went fine, including "nothing to do".
    Success,
    /// No workflow run of the requested workflow has succeeded.
    NoSuccessfulRun,
    /// A gate was configured with a fail level it does not recognize.
    UnknownFailLevel,
    /// A gate found issues at or above its threshold.
    Findings,
    /// A network, archive or filesystem failure aborted the run.
    Fatal,
}

impl Exit {
    /// The numeric process status.
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::NoSuccessfulRun | Self::UnknownFailLevel => 1,
            Self::Findings => 2,
            Self::Fatal => 3,
        }
    }
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        Self::from(exit.code())
    }
}
