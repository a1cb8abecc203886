use crate::geometry::KeyboardGeometry;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownLayout {
    Qwerty,
    Qwertz,
    Azerty,
    Dvorak,
    Colemak,
    #[strum(serialize = "colemak_dh")]
    ColemakDH,
    Workman,
}

impl KnownLayout {
    // Letter rows of the standard row-stagger, top to bottom. `_` holds a
    // punctuation key's column.
    pub fn rows(&self) -> [&'static str; 3] {
        match self {
            Self::Qwerty => ["qwertyuiop", "asdfghjkl", "zxcvbnm"],
            Self::Qwertz => ["qwertzuiop", "asdfghjkl", "yxcvbnm"],
            Self::Azerty => ["azertyuiop", "qsdfghjklm", "wxcvbn"],
            Self::Dvorak => ["___pyfgcrl", "aoeuidhtns", "_qjkxbmwvz"],
            Self::Colemak => ["qwfpgjluy", "arstdhneio", "zxcvbkm"],
            Self::ColemakDH => ["qwfpbjluy", "arstgmneio", "zxcdvkh"],
            Self::Workman => ["qdrwbjfup", "ashtgyneoi", "zxmcvkl"],
        }
    }

    pub fn geometry(&self) -> KeyboardGeometry {
        KeyboardGeometry::from_rows(self.rows())
    }
}
