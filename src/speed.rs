use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumCount, EnumIter, EnumString};

/// Discrete dial positions, in the order the dial cycles through them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    EnumCount,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum FanSpeed {
    #[default]
    #[strum(to_string = "off", serialize = "0")]
    Off,
    #[strum(to_string = "low", serialize = "1")]
    Low,
    #[strum(to_string = "medium", serialize = "2")]
    Medium,
    #[strum(to_string = "high", serialize = "3")]
    High,
}

impl FanSpeed {
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    pub fn next(self) -> Self {
        next(self)
    }

    /// Key under which the host's string resources hold this speed's text.
    pub fn label(&self) -> LabelKey {
        LabelKey::new(match self {
            Self::Off => "fan_off",
            Self::Low => "fan_low",
            Self::Medium => "fan_medium",
            Self::High => "fan_high",
        })
    }
}

/// Cyclic successor; wraps from `High` back to `Off`.
pub fn next(speed: FanSpeed) -> FanSpeed {
    match speed {
        FanSpeed::Off => FanSpeed::Low,
        FanSpeed::Low => FanSpeed::Medium,
        FanSpeed::Medium => FanSpeed::High,
        FanSpeed::High => FanSpeed::Off,
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct LabelKey(String);

impl LabelKey {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_four_steps_is_identity() {
        for speed in FanSpeed::iter() {
            assert_eq!(next(next(next(next(speed)))), speed);
        }
    }

    #[test]
    fn test_cycle_visits_every_speed_in_order() {
        let order: Vec<_> = FanSpeed::iter().collect();
        assert_eq!(
            order,
            [FanSpeed::Off, FanSpeed::Low, FanSpeed::Medium, FanSpeed::High]
        );

        for start in FanSpeed::iter() {
            let mut seen = HashSet::new();
            let mut speed = start;
            for step in 0..FanSpeed::COUNT {
                assert_eq!(speed, order[(start.ordinal() + step) % FanSpeed::COUNT]);
                assert!(seen.insert(speed), "{speed} repeated within one cycle");
                speed = speed.next();
            }
        }
    }

    #[test]
    fn test_ordinals_follow_declaration_order() {
        let ordinals: Vec<_> = FanSpeed::iter().map(|s| s.ordinal()).collect();
        assert_eq!(ordinals, [0, 1, 2, 3]);
    }

    #[test]
    fn test_high_wraps_to_off() {
        assert_eq!(FanSpeed::High.next(), FanSpeed::Off);
        assert_eq!(FanSpeed::default(), FanSpeed::Off);
    }

    #[test]
    fn test_labels_are_distinct_keys() {
        let keys: HashSet<_> = FanSpeed::iter().map(|s| s.label()).collect();
        assert_eq!(keys.len(), FanSpeed::COUNT);
        assert_eq!(FanSpeed::Medium.label().as_str(), "fan_medium");
    }

    #[test]
    fn test_speed_deserialization() {
        let cases = vec![
            ("\"off\"", FanSpeed::Off),
            ("\"LOW\"", FanSpeed::Low),
            ("\"Medium\"", FanSpeed::Medium),
            ("\"3\"", FanSpeed::High),
        ];

        for (json, expected) in cases {
            let deserialized: FanSpeed = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }

        assert!(serde_json::from_str::<FanSpeed>("\"turbo\"").is_err());
    }

    #[test]
    fn test_speed_display_matches_serialized_name() {
        for speed in FanSpeed::iter() {
            let json = serde_json::to_string(&speed).unwrap();
            assert_eq!(json, format!("\"{speed}\""));
        }
    }
}
