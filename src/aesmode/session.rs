use crate::aesmode::cipher::BlockCipher;
use crate::aesmode::core::BLOCK_SIZE;
use crate::aesmode::error::{Error, Result};
use crate::aesmode::key::Key;
use crate::aesmode::mode::Mode;
use crate::aesmode::modes::{ChainState, cbc, cfb, ctr, ecb, ofb};

/// A long-lived cipher session: one key schedule, one mode, one chaining
/// state. Feed it data in chunks with [`encrypt`](Session::encrypt) and
/// [`decrypt`](Session::decrypt); chaining state carries across calls until
/// [`reset`](Session::reset) restores the construction IV.
///
/// For the keystream modes (CFB/OFB/CTR) the chunking of the input never
/// changes the output: encrypting `A` then `B` equals encrypting `A ‖ B`,
/// for any split point. ECB and CBC require every call's buffer to be a
/// multiple of 16 bytes.
///
/// A session is exclusively owned: `encrypt`, `decrypt`, and `reset` take
/// `&mut self`, so sharing one session across threads is ruled out at
/// compile time. Independent sessions are free to run concurrently.
///
/// ## Examples
/// ```
/// # fn main() -> aesmode::Result<()> {
/// use aesmode::{Key, Mode, Session};
///
/// let key = Key::try_from_slice(&[0x2b; 16])?;
/// let iv = [0x01u8; 16];
/// let mut session = Session::new(Mode::Ctr, &key, Some(&iv))?;
///
/// let ciphertext = session.encrypt(b"streaming, in any chunk size")?;
/// session.reset();
/// let plaintext = session.decrypt(&ciphertext)?;
/// assert_eq!(plaintext, b"streaming, in any chunk size");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Session {
    mode: Mode,
    cipher: BlockCipher,
    iv0: [u8; 16],
    state: ChainState,
    #[cfg(feature = "profile")]
    last_cycles: u64,
}

impl Session {
    /// Builds a session from a mode, a validated [`Key`], and an IV.
    ///
    /// The IV (the initial counter value for CTR) must be present and
    /// exactly 16 bytes for every mode except ECB, which ignores it. The
    /// key schedule is expanded once here and reused for the life of the
    /// session; hardware acceleration is probed once at the same time.
    pub fn new(mode: Mode, key: &Key, iv: Option<&[u8]>) -> Result<Self> {
        let iv0 = if mode.requires_iv() {
            let iv = iv.ok_or(Error::MissingIv { mode })?;
            if iv.len() != BLOCK_SIZE {
                return Err(Error::InvalidIv {
                    mode,
                    len: iv.len(),
                });
            }
            iv.try_into().unwrap() // length checked above
        } else {
            [0u8; 16]
        };

        Ok(Self {
            mode,
            cipher: BlockCipher::new(key),
            iv0,
            state: ChainState::new(iv0),
            #[cfg(feature = "profile")]
            last_cycles: 0,
        })
    }

    /// Encrypts a buffer, advancing the chaining state. The output is
    /// always exactly as long as the input.
    ///
    /// Fails with [`UnalignedBuffer`](Error::UnalignedBuffer) for ECB/CBC
    /// buffers that are not a multiple of 16 bytes; a failed call leaves
    /// the session state untouched.
    pub fn encrypt(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        self.check_alignment(data.len())?;

        #[cfg(feature = "profile")]
        let start = read_tsc();

        let output = match self.mode {
            Mode::Ecb => ecb::encrypt(&self.cipher, data),
            Mode::Cbc => cbc::encrypt(&self.cipher, &mut self.state.chain, data),
            Mode::Cfb => cfb::encrypt(&self.cipher, &mut self.state, data),
            Mode::Ofb => ofb::apply(&self.cipher, &mut self.state, data),
            Mode::Ctr => ctr::apply(&self.cipher, &mut self.state, data),
        };

        #[cfg(feature = "profile")]
        {
            self.last_cycles = read_tsc().wrapping_sub(start);
        }

        Ok(output)
    }

    /// Decrypts a buffer, advancing the chaining state. For CFB, OFB, and
    /// CTR this is the same keystream XOR as encryption; the directions
    /// differ only in what refills the feedback value.
    pub fn decrypt(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        self.check_alignment(data.len())?;

        #[cfg(feature = "profile")]
        let start = read_tsc();

        let output = match self.mode {
            Mode::Ecb => ecb::decrypt(&self.cipher, data),
            Mode::Cbc => cbc::decrypt(&self.cipher, &mut self.state.chain, data),
            Mode::Cfb => cfb::decrypt(&self.cipher, &mut self.state, data),
            Mode::Ofb => ofb::apply(&self.cipher, &mut self.state, data),
            Mode::Ctr => ctr::apply(&self.cipher, &mut self.state, data),
        };

        #[cfg(feature = "profile")]
        {
            self.last_cycles = read_tsc().wrapping_sub(start);
        }

        Ok(output)
    }

    /// Restores the chaining state to the construction IV and discards any
    /// buffered keystream. The key schedule is untouched, so a reset
    /// session replays exactly like a fresh one.
    pub fn reset(&mut self) {
        self.state = ChainState::new(self.iv0);
    }

    /// The mode this session was constructed with.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Cycle count measured around the most recent `encrypt` or `decrypt`
    /// call. Diagnostic only; zero before the first call and on targets
    /// without a cycle counter.
    #[cfg(feature = "profile")]
    pub fn last_cycles(&self) -> u64 {
        self.last_cycles
    }

    fn check_alignment(&self, len: usize) -> Result<()> {
        if self.mode.block_aligned() && len % BLOCK_SIZE != 0 {
            return Err(Error::UnalignedBuffer {
                mode: self.mode,
                len,
            });
        }
        Ok(())
    }
}

#[cfg(feature = "profile")]
fn read_tsc() -> u64 {
    #[cfg(target_arch = "x86_64")]
    return unsafe { core::arch::x86_64::_rdtsc() };
    #[cfg(not(target_arch = "x86_64"))]
    return 0;
}
