use std::fmt;
use std::str::FromStr;

use crate::aesmode::error::Error;

/// The five supported modes of operation.
///
/// ECB and CBC are block-aligned: every buffer passed to a session must be a
/// multiple of 16 bytes. CFB, OFB, and CTR are keystream modes and accept
/// arbitrary lengths, including splits that are not block-aligned.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Mode {
    Ecb,
    Cbc,
    Cfb,
    Ofb,
    Ctr,
}

impl Mode {
    /// Every mode except ECB takes a 16-byte IV (the initial counter value
    /// for CTR).
    pub fn requires_iv(&self) -> bool {
        !matches!(self, Mode::Ecb)
    }

    /// Whether per-call buffers must be a multiple of 16 bytes.
    pub fn block_aligned(&self) -> bool {
        matches!(self, Mode::Ecb | Mode::Cbc)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Ecb => "ecb",
            Mode::Cbc => "cbc",
            Mode::Cfb => "cfb",
            Mode::Ofb => "ofb",
            Mode::Ctr => "ctr",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    /// Case-insensitive mode lookup, resolved once at construction rather
    /// than on every call.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "ecb" => Ok(Mode::Ecb),
            "cbc" => Ok(Mode::Cbc),
            "cfb" => Ok(Mode::Cfb),
            "ofb" => Ok(Mode::Ofb),
            "ctr" => Ok(Mode::Ctr),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}
