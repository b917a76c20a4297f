use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize};
use tsify::Tsify;

use crate::error::MarkerError;

/// Winding direction of successive pie slices.
///
/// Serializes as `"+"`/`"-"`; deserializes any spelling [`FromStr`] accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Tsify)]
pub enum Direction {
    #[default]
    #[serde(rename = "+")]
    CounterClockwise,
    #[serde(rename = "-")]
    Clockwise,
}

impl Direction {
    /// Advance angle `theta` by `sweep` radians in this direction.
    pub fn advance(self, theta: f64, sweep: f64) -> f64 {
        match self {
            Direction::CounterClockwise => theta + sweep,
            Direction::Clockwise => theta - sweep,
        }
    }
}

impl FromStr for Direction {
    type Err = MarkerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Direction::CounterClockwise),
            "-" => Ok(Direction::Clockwise),
            _ => match s.to_ascii_lowercase().as_str() {
                "ccw" | "counterclockwise" => Ok(Direction::CounterClockwise),
                "cw" | "clockwise" => Ok(Direction::Clockwise),
                _ => Err(MarkerError::InvalidDirection(s.to_string())),
            },
        }
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::CounterClockwise => write!(f, "+"),
            Direction::Clockwise => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("+".parse(), Ok(Direction::CounterClockwise));
        assert_eq!("-".parse(), Ok(Direction::Clockwise));
        assert_eq!("CCW".parse(), Ok(Direction::CounterClockwise));
        assert_eq!("Clockwise".parse(), Ok(Direction::Clockwise));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            "left".parse::<Direction>(),
            Err(MarkerError::InvalidDirection("left".to_string())),
        );
        assert_eq!(
            "".parse::<Direction>(),
            Err(MarkerError::InvalidDirection("".to_string())),
        );
    }

    #[test]
    fn advance() {
        assert_eq!(Direction::CounterClockwise.advance(1., 0.5), 1.5);
        assert_eq!(Direction::Clockwise.advance(1., 0.5), 0.5);
    }

    #[test]
    fn serde() {
        assert_eq!(serde_json::to_string(&Direction::Clockwise).unwrap(), r#""-""#);
        let d: Direction = serde_json::from_str(r#""counterclockwise""#).unwrap();
        assert_eq!(d, Direction::CounterClockwise);
        assert!(serde_json::from_str::<Direction>(r#""sideways""#).is_err());
    }

    #[test]
    fn serde_matches_parse() {
        for s in ["+", "-", "ccw", "CCW", "cw", "Clockwise", "CounterClockwise", "left", ""] {
            let json = serde_json::to_string(s).unwrap();
            assert_eq!(serde_json::from_str::<Direction>(&json).ok(), s.parse().ok(), "{:?}", s);
        }
        let err = serde_json::from_str::<Direction>(r#""sideways""#).unwrap_err();
        assert!(err.to_string().contains("Unrecognized direction"), "{}", err);
    }

    #[test]
    fn display_round_trips() {
        for d in [Direction::CounterClockwise, Direction::Clockwise] {
            assert_eq!(d.to_string().parse(), Ok(d));
        }
    }
}
