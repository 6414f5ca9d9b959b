use crate::charset::CharClass;
use crate::config::{ConfigError, GenerationConfig, Quotas};
use crate::keyboard::AdjacencyTable;
use crate::keystream::Keystream;
use thiserror::Error;
use tracing::{debug, trace};
use zeroize::Zeroizing;

/// Rejection-sampling draws per position before falling back to an exhaustive
/// scan of the eligible alphabets.
pub const MAX_ATTEMPTS: usize = 1024;

/// Upper bound on the up-front reservation for the password buffer.
const MAX_PREALLOC: usize = 4096;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no legal character left for position {position}")]
    Exhausted { position: usize },
}

/// Running per-class counts against their quotas.
struct Tally {
    quotas: Quotas,
    digits: usize,
    letters: usize,
    punct: usize,
}

impl Tally {
    fn new(quotas: Quotas) -> Self {
        Self {
            quotas,
            digits: 0,
            letters: 0,
            punct: 0,
        }
    }

    fn produced(&self, class: CharClass) -> usize {
        match class {
            CharClass::Digit => self.digits,
            CharClass::Letter => self.letters,
            CharClass::Punct => self.punct,
        }
    }

    fn record(&mut self, class: CharClass) {
        match class {
            CharClass::Digit => self.digits += 1,
            CharClass::Letter => self.letters += 1,
            CharClass::Punct => self.punct += 1,
        }
    }

    /// Classes whose quota is not yet met, in a fixed order.
    fn eligible(&self) -> Vec<CharClass> {
        CharClass::ALL
            .into_iter()
            .filter(|&class| self.produced(class) < self.quotas.of(class))
            .collect()
    }
}

/// Generates one password satisfying the class quotas of `config` with no two
/// consecutive characters adjacent according to `table`.
pub fn generate(
    config: &GenerationConfig,
    table: &AdjacencyTable,
    rng: &mut Keystream,
) -> Result<Zeroizing<String>, GenerateError> {
    generate_capped(config, table, rng, MAX_ATTEMPTS)
}

fn generate_capped(
    config: &GenerationConfig,
    table: &AdjacencyTable,
    rng: &mut Keystream,
    max_attempts: usize,
) -> Result<Zeroizing<String>, GenerateError> {
    let quotas = config.quotas()?;
    debug!(
        length = config.length,
        digits = quotas.digits,
        letters = quotas.letters,
        punct = quotas.punct,
        "resolved quotas"
    );

    let mut tally = Tally::new(quotas);
    let mut password = Zeroizing::new(String::with_capacity(initial_capacity(config.length)));
    let mut last: Option<char> = None;

    for position in 0..config.length {
        let eligible = tally.eligible();
        if eligible.is_empty() {
            return Err(GenerateError::Exhausted { position });
        }

        let (class, ch) = draw(&eligible, last, table, rng, max_attempts)
            .or_else(|| {
                debug!(position, "retry cap reached, scanning alphabets");
                scan(&eligible, last, table, rng)
            })
            .ok_or(GenerateError::Exhausted { position })?;

        trace!(position, class = class.name(), "accepted");
        password.push(ch);
        tally.record(class);
        last = Some(ch);
    }

    Ok(password)
}

/// Longer passwords grow the buffer as they go instead of reserving `length`
/// bytes before the first draw.
fn initial_capacity(length: usize) -> usize {
    length.min(MAX_PREALLOC)
}

fn is_legal(last: Option<char>, next: char, table: &AdjacencyTable) -> bool {
    last.is_none_or(|prev| !table.is_illegal_next(prev, next))
}

fn draw(
    eligible: &[CharClass],
    last: Option<char>,
    table: &AdjacencyTable,
    rng: &mut Keystream,
    max_attempts: usize,
) -> Option<(CharClass, char)> {
    for _ in 0..max_attempts {
        let class = *rng.pick(eligible)?;
        let ch = char::from(*rng.pick(class.alphabet())?);
        if is_legal(last, ch, table) {
            return Some((class, ch));
        }
    }
    None
}

fn scan(
    eligible: &[CharClass],
    last: Option<char>,
    table: &AdjacencyTable,
    rng: &mut Keystream,
) -> Option<(CharClass, char)> {
    let candidates: Vec<(CharClass, char)> = eligible
        .iter()
        .flat_map(|&class| class.alphabet().iter().map(move |&b| (class, char::from(b))))
        .filter(|&(_, ch)| is_legal(last, ch, table))
        .collect();

    rng.pick(&candidates).copied()
}
