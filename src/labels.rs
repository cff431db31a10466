use crate::config::Config;
use crate::speed::{FanSpeed, LabelKey};
use std::borrow::Cow;
use std::collections::HashMap;
use strum::IntoEnumIterator;

/// Resolves a speed's label key to the text shown on the dial.
pub trait LabelResolver {
    fn resolve(&self, key: &LabelKey) -> Cow<'_, str>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    entries: HashMap<LabelKey, String>,
}

impl Labels {
    pub fn builtin() -> HashMap<LabelKey, String> {
        FanSpeed::iter()
            .map(|speed| {
                let text = match speed {
                    FanSpeed::Off => "off",
                    FanSpeed::Low => "1",
                    FanSpeed::Medium => "2",
                    FanSpeed::High => "3",
                };
                (speed.label(), text.to_string())
            })
            .collect()
    }

    /// Configured labels layered over the built-in ones.
    pub fn from_config(config: &Config) -> Self {
        let mut entries = Self::builtin();
        entries.extend(
            config
                .labels
                .iter()
                .map(|(key, text)| (key.clone(), text.clone())),
        );
        Self { entries }
    }

    pub fn text_for(&self, speed: FanSpeed) -> Cow<'_, str> {
        self.resolve(&speed.label())
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            entries: Self::builtin(),
        }
    }
}

impl LabelResolver for Labels {
    fn resolve(&self, key: &LabelKey) -> Cow<'_, str> {
        match self.entries.get(key) {
            Some(text) => Cow::Borrowed(text.as_str()),
            None => {
                log::warn!("No label for '{}'", key);
                Cow::Owned(key.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_labels_cover_every_speed() {
        let labels = Labels::default();
        let texts: Vec<_> = FanSpeed::iter()
            .map(|s| labels.text_for(s).into_owned())
            .collect();
        assert_eq!(texts, ["off", "1", "2", "3"]);
    }

    #[test]
    fn test_configured_label_overrides_builtin() {
        let mut config = Config::default();
        config
            .labels
            .insert(LabelKey::new("fan_high"), "max".to_string());

        let labels = Labels::from_config(&config);
        assert_eq!(labels.text_for(FanSpeed::High), "max");
        assert_eq!(labels.text_for(FanSpeed::Low), "1");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        let labels = Labels::default();
        assert_eq!(labels.resolve(&LabelKey::new("fan_turbo")), "fan_turbo");
    }
}
