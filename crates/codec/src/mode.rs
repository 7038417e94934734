use bitflags::bitflags;

bitflags! {
    /// Controls which checks run while decoding or encoding.
    ///
    /// Structural checks (discriminators, lengths, varints) always run. The
    /// empty mode is meant for re-encoding data that was already validated.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Mode: u8 {
        /// Array bounds and lexical order, input/output/unlock block rules.
        const VALIDATION = 0b0000_0001;
    }
}

impl Mode {
    pub fn validates(self) -> bool {
        self.contains(Mode::VALIDATION)
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::VALIDATION
    }
}
