use std::fmt;

/// Index of a room within a [`super::Dungeon`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct RoomId(pub usize);

impl RoomId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for RoomId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
