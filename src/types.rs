use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gesture classes taught to the demo recognizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Square,
    Triangle,
    X,
}

impl Shape {
    /// Every shape, in the order templates are requested
    pub const ALL: [Shape; 4] = [Self::Circle, Self::Square, Self::Triangle, Self::X];
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle => write!(f, "circle"),
            Self::Square => write!(f, "square"),
            Self::Triangle => write!(f, "triangle"),
            Self::X => write!(f, "x"),
        }
    }
}

impl FromStr for Shape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "circle" | "o" => Ok(Self::Circle),
            "square" | "box" => Ok(Self::Square),
            "triangle" => Ok(Self::Triangle),
            "x" | "cross" => Ok(Self::X),
            _ => Err(format!("Unknown shape: {}", s)),
        }
    }
}
