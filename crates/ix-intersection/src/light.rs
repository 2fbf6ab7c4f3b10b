//! Signal light state.

/// The aspect flags of one signal head.
///
/// Flags are independent: a head may show green with a right-turn arrow.
/// New lights show red only.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Light {
    pub id:    u32,
    pub red:   bool,
    pub green: bool,
    pub left:  bool,
    pub right: bool,
}

impl Light {
    pub fn new(id: u32) -> Self {
        Self { id, red: true, green: false, left: false, right: false }
    }

    /// `true` if any aspect lets traffic move.
    #[inline]
    pub fn permits_movement(&self) -> bool {
        self.green || self.left || self.right
    }

    /// Show green only.
    pub fn set_green(&mut self) {
        *self = Self { id: self.id, red: false, green: true, left: false, right: false };
    }

    /// Show red only.
    pub fn set_red(&mut self) {
        *self = Self::new(self.id);
    }
}
