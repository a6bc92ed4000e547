use crate::api::Prediction;

/// What the result area of the analysis panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Nothing,
    Error(String),
    Result(ResultView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub label: String,
    pub confidence_text: String,
    /// Inline style for the filled part of the confidence bar.
    pub bar_style: String,
}

impl From<&Prediction> for ResultView {
    fn from(prediction: &Prediction) -> Self {
        let confidence_text = prediction.confidence.to_string();
        Self {
            label: display_label(&prediction.label),
            bar_style: format!("width: {confidence_text}"),
            confidence_text,
        }
    }
}

/// Title-cases a label for display: `no_tumor` becomes `No Tumor`.
pub fn display_label(label: &str) -> String {
    label
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
