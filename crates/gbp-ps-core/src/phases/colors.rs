use std::collections::HashMap;

use crate::gradient::Color;
use crate::phases::types::BuildPhase;

/// Phase → colour map, built once from the gradient sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhaseColors {
    colors: HashMap<BuildPhase, Color>,
    fallback: Option<Color>,
}

impl PhaseColors {
    /// Zip the phase table with `gradient` by position.
    ///
    /// A gradient shorter than the phase table leaves the trailing phases
    /// without a colour. The first gradient colour is the fallback used for
    /// phases outside the table.
    pub fn new(gradient: &[Color]) -> Self {
        let colors = BuildPhase::ALL
            .into_iter()
            .zip(gradient.iter().copied())
            .collect();

        Self {
            colors,
            fallback: gradient.first().copied(),
        }
    }

    pub fn color_for(&self, phase: BuildPhase) -> Option<Color> {
        self.colors.get(&phase).copied()
    }

    pub fn fallback(&self) -> Option<Color> {
        self.fallback
    }
}
