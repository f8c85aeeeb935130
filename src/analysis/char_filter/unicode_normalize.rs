use unicode_normalization::UnicodeNormalization;

use super::CharFilter;

/// Supported Unicode normalization forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationForm {
    NFC,
    NFD,
    NFKC,
    NFKD,
}

impl NormalizationForm {
    /// Normalize `input` into this form.
    pub fn apply(self, input: &str) -> String {
        match self {
            NormalizationForm::NFC => input.nfc().collect(),
            NormalizationForm::NFD => input.nfd().collect(),
            NormalizationForm::NFKC => input.nfkc().collect(),
            NormalizationForm::NFKD => input.nfkd().collect(),
        }
    }
}

/// A char filter that performs Unicode normalization.
pub struct UnicodeNormalizationCharFilter {
    form: NormalizationForm,
}

impl UnicodeNormalizationCharFilter {
    pub fn new(form: NormalizationForm) -> Self {
        Self { form }
    }

    pub fn form(&self) -> NormalizationForm {
        self.form
    }
}

impl CharFilter for UnicodeNormalizationCharFilter {
    fn filter(&self, input: &str) -> String {
        self.form.apply(input)
    }

    fn name(&self) -> &'static str {
        "unicode_normalization"
    }
}
