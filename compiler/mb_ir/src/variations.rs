//! Property and content type variation flags.

use bitflags::bitflags;

bitflags! {
    /// Dimensions along which a value may vary.
    ///
    /// Decides which of the generated accessor's `culture` / `segment`
    /// arguments are forwarded to the host.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Deserialize))]
    pub struct Variations: u8 {
        const CULTURE = 0b01;
        const SEGMENT = 0b10;
    }
}

impl Variations {
    pub fn varies_by_culture(self) -> bool {
        self.contains(Variations::CULTURE)
    }

    pub fn varies_by_segment(self) -> bool {
        self.contains(Variations::SEGMENT)
    }
}
