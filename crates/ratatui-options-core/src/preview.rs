use crate::option::DisplayMode;
use crate::option::OptionPair;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewChoice {
    pub value: String,
    pub label: String,
}

/// What the live example should show: the control kind and the usable choices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preview {
    pub mode: DisplayMode,
    pub heading: String,
    pub choices: Vec<PreviewChoice>,
}

impl Preview {
    /// Builds the preview, skipping options where either side is empty.
    pub fn build(mode: DisplayMode, heading: &str, options: &[OptionPair]) -> Self {
        let choices = options
            .iter()
            .filter(|o| o.is_complete())
            .map(|o| PreviewChoice {
                value: o.value.clone(),
                label: o.label.clone(),
            })
            .collect();
        Self {
            mode,
            heading: heading.to_string(),
            choices,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_incomplete_options() {
        let options = vec![
            OptionPair::new("a", "Apple"),
            OptionPair::new("b", ""),
            OptionPair::new("", ""),
            OptionPair::new("c", "Cherry"),
        ];
        let p = Preview::build(DisplayMode::Radio, "Fruit", &options);
        assert_eq!(p.mode, DisplayMode::Radio);
        let labels: Vec<_> = p.choices.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Apple", "Cherry"]);
    }
}
