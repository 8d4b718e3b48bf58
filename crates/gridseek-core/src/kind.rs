//! The [`TypeKind`] of a cell and its static flags.

use std::fmt;

/// The discrete category a cell currently belongs to.
///
/// Kinds carry three static flags:
///
/// | Kind | unique | immutable | algorithmic |
/// |---|---|---|---|
/// | `Default` | | | |
/// | `Wall` | | ✓ | |
/// | `Start` | ✓ | ✓ | |
/// | `Target` | ✓ | ✓ | |
/// | `Queued` | | | ✓ |
/// | `Visited` | | | ✓ |
/// | `Path` | | | ✓ |
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeKind {
    #[default]
    Default,
    Wall,
    Start,
    Target,
    Queued,
    Visited,
    Path,
}

impl TypeKind {
    /// Every kind, in declaration order.
    pub const ALL: [TypeKind; 7] = [
        Self::Default,
        Self::Wall,
        Self::Start,
        Self::Target,
        Self::Queued,
        Self::Visited,
        Self::Path,
    ];

    /// At most one cell of a grid may hold this kind at a time.
    #[inline]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Start | Self::Target)
    }

    /// Algorithmic progress never overwrites this kind.
    #[inline]
    pub const fn is_immutable(self) -> bool {
        matches!(self, Self::Wall | Self::Start | Self::Target)
    }

    /// Assigned only by a running search; cleared on reset.
    #[inline]
    pub const fn is_algorithmic(self) -> bool {
        matches!(self, Self::Queued | Self::Visited | Self::Path)
    }

    /// Upper-case label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Wall => "WALL",
            Self::Start => "START",
            Self::Target => "TARGET",
            Self::Queued => "QUEUED",
            Self::Visited => "VISITED",
            Self::Path => "PATH",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_table() {
        let unique: Vec<_> = TypeKind::ALL.into_iter().filter(|k| k.is_unique()).collect();
        assert_eq!(unique, [TypeKind::Start, TypeKind::Target]);

        let immutable: Vec<_> = TypeKind::ALL
            .into_iter()
            .filter(|k| k.is_immutable())
            .collect();
        assert_eq!(immutable, [TypeKind::Wall, TypeKind::Start, TypeKind::Target]);

        let algorithmic: Vec<_> = TypeKind::ALL
            .into_iter()
            .filter(|k| k.is_algorithmic())
            .collect();
        assert_eq!(
            algorithmic,
            [TypeKind::Queued, TypeKind::Visited, TypeKind::Path]
        );
    }

    #[test]
    fn no_kind_is_both_immutable_and_algorithmic() {
        for k in TypeKind::ALL {
            assert!(!(k.is_immutable() && k.is_algorithmic()), "{k}");
        }
    }

    #[test]
    fn default_is_default() {
        assert_eq!(TypeKind::default(), TypeKind::Default);
        assert_eq!(TypeKind::Target.to_string(), "TARGET");
    }
}
