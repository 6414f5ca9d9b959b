use crate::charset::CharClass;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid length: {length} < digitNum: {digits}")]
    LengthBelowDigits { length: usize, digits: usize },

    #[error("invalid length: {length} < punctNum: {punct}")]
    LengthBelowPunct { length: usize, punct: usize },

    #[error("invalid length: {length} < digitNum: {digits} + punctNum: {punct}")]
    ResidualBelowPunct {
        length: usize,
        digits: usize,
        punct: usize,
    },
}

/// What the caller asked for. Build one, then hand it to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub use_digit: bool,
    pub use_alpha: bool,
    pub use_punct: bool,
    pub strict: bool,
    pub digit_num: usize,
    pub punct_num: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 8,
            use_digit: true,
            use_alpha: true,
            use_punct: false,
            strict: false,
            digit_num: 2,
            punct_num: 1,
        }
    }
}

/// Exact number of characters each class contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quotas {
    pub digits: usize,
    pub letters: usize,
    pub punct: usize,
}

impl Quotas {
    pub fn of(&self, class: CharClass) -> usize {
        match class {
            CharClass::Digit => self.digits,
            CharClass::Letter => self.letters,
            CharClass::Punct => self.punct,
        }
    }

    pub fn total(&self) -> usize {
        self.digits + self.letters + self.punct
    }
}

impl GenerationConfig {
    /// Config with strict mode folded into the per-class flags.
    pub fn effective(&self) -> Self {
        if self.strict {
            Self {
                use_digit: true,
                use_alpha: true,
                use_punct: true,
                ..*self
            }
        } else {
            *self
        }
    }

    /// Validates the requested counts and splits `length` between the
    /// classes. Letters take whatever the digit and punctuation quotas leave.
    ///
    /// A disabled class contributes nothing and its count is not checked.
    pub fn quotas(&self) -> Result<Quotas, ConfigError> {
        let cfg = self.effective();
        let length = cfg.length;

        let digits = if cfg.use_digit { cfg.digit_num } else { 0 };
        if length < digits {
            return Err(ConfigError::LengthBelowDigits { length, digits });
        }

        let punct = if cfg.use_punct { cfg.punct_num } else { 0 };
        if length < punct {
            return Err(ConfigError::LengthBelowPunct { length, punct });
        }
        if length - digits < punct {
            return Err(ConfigError::ResidualBelowPunct {
                length,
                digits,
                punct,
            });
        }

        let letters = length - digits - punct;
        if !cfg.use_alpha && letters > 0 {
            warn!(letters, "alphabet disabled but letters still fill the remaining length");
        }

        Ok(Quotas {
            digits,
            letters,
            punct,
        })
    }
}
