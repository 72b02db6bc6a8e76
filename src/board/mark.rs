use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

/// Contents of one grid cell as the move service reports it.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn is_empty(&self) -> bool {
        matches!(self, Mark::Empty)
    }
    /// Marker class for styling, if any.
    pub fn class(&self) -> Option<&'static str> {
        match self {
            Mark::Empty => None,
            Mark::X => Some("x-marker"),
            Mark::O => Some("o-marker"),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Mark {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "" => Ok(Mark::Empty),
            "X" => Ok(Mark::X),
            "O" => Ok(Mark::O),
            _ => Err(anyhow::anyhow!("invalid mark: {:?}", s)),
        }
    }
}
impl From<Mark> for &'static str {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Empty => "",
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

impl Serialize for Mark {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(<&'static str>::from(*self))
    }
}
impl<'de> Deserialize<'de> for Mark {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Mark::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}
