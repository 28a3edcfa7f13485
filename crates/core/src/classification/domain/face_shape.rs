use serde::{Deserialize, Serialize};

/// The six face shape categories.
///
/// Declaration order is the canonical order used to break voting ties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceShape {
    Square,
    Round,
    Oval,
    Heart,
    Oblong,
    Diamond,
}

impl FaceShape {
    pub const ALL: [FaceShape; 6] = [
        FaceShape::Square,
        FaceShape::Round,
        FaceShape::Oval,
        FaceShape::Heart,
        FaceShape::Oblong,
        FaceShape::Diamond,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FaceShape::Square => "Square",
            FaceShape::Round => "Round",
            FaceShape::Oval => "Oval",
            FaceShape::Heart => "Heart",
            FaceShape::Oblong => "Oblong",
            FaceShape::Diamond => "Diamond",
        }
    }

    /// Position in [`FaceShape::ALL`].
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<FaceShape> {
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for FaceShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for FaceShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown face shape '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_canonical_order() {
        let names: Vec<_> = FaceShape::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Square", "Round", "Oval", "Heart", "Oblong", "Diamond"]);
    }

    #[test]
    fn test_ordinal_matches_all() {
        for (i, shape) in FaceShape::ALL.iter().enumerate() {
            assert_eq!(shape.ordinal(), i);
        }
    }

    #[rstest]
    #[case("oval", FaceShape::Oval)]
    #[case("OBLONG", FaceShape::Oblong)]
    #[case(" Heart ", FaceShape::Heart)]
    #[case("dIaMoNd", FaceShape::Diamond)]
    fn test_from_name_case_insensitive(#[case] name: &str, #[case] expected: FaceShape) {
        assert_eq!(FaceShape::from_name(name), Some(expected));
        assert_eq!(name.parse::<FaceShape>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(FaceShape::from_name("triangle"), None);
        assert!("triangle".parse::<FaceShape>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(FaceShape::Oblong.to_string(), "Oblong");
    }
}
