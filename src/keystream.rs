use blake2::{Blake2b512, Digest};
use chacha20::ChaCha20;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use std::time::{SystemTime, UNIX_EPOCH};
use zeroize::Zeroizing;

const KEY_LEN: usize = 32;
const BUFFER_LEN: usize = 512;

/// Largest range `index` can sample from 16-bit words.
pub const MAX_RANGE: usize = 1 << 16;

/// Pseudo-random source for password generation.
///
/// A ChaCha20 keystream keyed from a BLAKE2b digest of the seed material.
/// Seeding from the clock is good enough to stop people guessing passwords,
/// but it is not a vetted CSPRNG.
pub struct Keystream {
    cipher: ChaCha20,
    buffer: Zeroizing<Vec<u8>>,
    pos: usize,
}

impl Keystream {
    pub fn from_seed(seed: u64) -> Self {
        Self::from_material(&seed.to_le_bytes())
    }

    /// Seeds from wall-clock nanoseconds and the process id.
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();

        let mut material = Zeroizing::new(Vec::with_capacity(20));
        material.extend_from_slice(&nanos.to_le_bytes());
        material.extend_from_slice(&std::process::id().to_le_bytes());
        Self::from_material(&material)
    }

    fn from_material(material: &[u8]) -> Self {
        let mut hasher = Blake2b512::new();
        hasher.update(material);
        let digest = Zeroizing::new(hasher.finalize().to_vec());

        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        key.copy_from_slice(&digest[..KEY_LEN]);

        let mut cipher = ChaCha20::new((&*key).into(), &[0u8; 12].into());
        let mut buffer = Zeroizing::new(vec![0u8; BUFFER_LEN]);
        cipher.apply_keystream(&mut buffer);

        Self {
            cipher,
            buffer,
            pos: 0,
        }
    }

    fn next_u16(&mut self) -> u16 {
        if self.pos + 1 >= self.buffer.len() {
            self.buffer.fill(0);
            self.cipher.apply_keystream(&mut self.buffer);
            self.pos = 0;
        }

        let value = u16::from_le_bytes([self.buffer[self.pos], self.buffer[self.pos + 1]]);
        self.pos += 2;
        value
    }

    /// Uniform index in `0..n`, unbiased by rejection sampling.
    ///
    /// Returns `None` unless `n` is in `1..=MAX_RANGE`.
    pub fn index(&mut self, n: usize) -> Option<usize> {
        if !(1..=MAX_RANGE).contains(&n) {
            return None;
        }

        let n32 = u32::try_from(n).ok()?;
        let rejection_threshold = (65536 / n32) * n32;

        loop {
            let value = u32::from(self.next_u16());
            if value < rejection_threshold {
                return usize::try_from(value % n32).ok();
            }
        }
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let i = self.index(items.len())?;
        items.get(i)
    }
}
