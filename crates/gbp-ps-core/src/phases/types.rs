use std::fmt;

use serde::{Deserialize, Serialize};

use crate::gradient::Color;

/// The ebuild build phases, in the order a package moves through them.
///
/// Position in [`BuildPhase::ALL`] drives the progress fill and the phase colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildPhase {
    Pretend,
    Setup,
    Unpack,
    Prepare,
    Configure,
    Compile,
    Test,
    Install,
    Package,
    Instprep,
    Preinst,
    Postinst,
}

impl BuildPhase {
    pub const ALL: [BuildPhase; 12] = [
        BuildPhase::Pretend,
        BuildPhase::Setup,
        BuildPhase::Unpack,
        BuildPhase::Prepare,
        BuildPhase::Configure,
        BuildPhase::Compile,
        BuildPhase::Test,
        BuildPhase::Install,
        BuildPhase::Package,
        BuildPhase::Instprep,
        BuildPhase::Preinst,
        BuildPhase::Postinst,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildPhase::Pretend => "pretend",
            BuildPhase::Setup => "setup",
            BuildPhase::Unpack => "unpack",
            BuildPhase::Prepare => "prepare",
            BuildPhase::Configure => "configure",
            BuildPhase::Compile => "compile",
            BuildPhase::Test => "test",
            BuildPhase::Install => "install",
            BuildPhase::Package => "package",
            BuildPhase::Instprep => "instprep",
            BuildPhase::Preinst => "preinst",
            BuildPhase::Postinst => "postinst",
        }
    }

    /// Zero-based position in the phase table.
    pub fn position(&self) -> usize {
        *self as usize
    }

    /// Look up a phase by its exact (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|phase| phase.as_str() == name)
    }
}

impl fmt::Display for BuildPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual state of a row's phase progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseProgress {
    /// Fill percentage, 0-100
    pub percent: u8,
    /// Bar colour; `None` when the gradient has no colour for the phase
    pub color: Option<Color>,
    /// Unknown phase: full-width striped bar instead of a proportional one
    pub indeterminate: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_follow_table_order() {
        for (index, phase) in BuildPhase::ALL.iter().enumerate() {
            assert_eq!(phase.position(), index);
        }
        assert_eq!(BuildPhase::COUNT, 12);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(BuildPhase::from_name("setup"), Some(BuildPhase::Setup));
        assert_eq!(BuildPhase::from_name("postinst"), Some(BuildPhase::Postinst));
        assert_eq!(BuildPhase::from_name("Setup"), None);
        assert_eq!(BuildPhase::from_name("clean"), None);
        assert_eq!(BuildPhase::from_name(""), None);
    }

    #[test]
    fn test_name_round_trip_through_display() {
        for phase in BuildPhase::ALL {
            assert_eq!(BuildPhase::from_name(&phase.to_string()), Some(phase));
        }
    }
}
