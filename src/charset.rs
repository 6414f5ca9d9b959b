/// The three disjoint alphabets a password is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Digit,
    Letter,
    Punct,
}

const DIGITS: &[u8] = b"0123456789";
const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const PUNCT: &[u8] = b"~!@#$%^&*()_+[]{}|\\;:'\",./<>?";

impl CharClass {
    pub const ALL: [CharClass; 3] = [CharClass::Digit, CharClass::Letter, CharClass::Punct];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Digit => DIGITS,
            CharClass::Letter => LETTERS,
            CharClass::Punct => PUNCT,
        }
    }

    pub fn of(ch: char) -> Option<CharClass> {
        let byte = u8::try_from(ch).ok()?;
        Self::ALL
            .into_iter()
            .find(|class| class.alphabet().contains(&byte))
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Digit => "digit",
            CharClass::Letter => "letter",
            CharClass::Punct => "punct",
        }
    }
}
