//! Twenty-byte account address and thirty-two-byte code hash.

use core::fmt;
use core::str::FromStr;

use crate::error::AmmError;
use crate::math::keccak256;

/// Strips an optional `0x`/`0X` prefix and hex-decodes exactly `N` bytes.
fn decode_fixed<const N: usize>(input: &str) -> Result<[u8; N], AmmError> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    let mut out = [0u8; N];
    hex::decode_to_slice(digits, &mut out)
        .map_err(|_| AmmError::InvalidAddress(input.to_owned()))?;
    Ok(out)
}

/// A 20-byte EVM account address.
///
/// Ordering is lexicographic over the raw bytes, which is the same order
/// as comparing the lowercase hex strings.  Parsing accepts any letter
/// case; [`Display`](fmt::Display) renders the EIP-55 checksummed form.
///
/// # Examples
///
/// ```
/// use cpmm_pair::domain::Address;
///
/// let addr: Address = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse().expect("valid hex");
/// assert_eq!(addr.to_string(), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 20-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns the address as `0x`-prefixed lowercase hex.
    #[must_use]
    pub fn to_lower_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Returns the EIP-55 mixed-case checksum encoding.
    #[must_use]
    pub fn to_checksum(&self) -> String {
        let lower = hex::encode(self.0);
        let digest = keccak256(lower.as_bytes());
        let mut out = String::with_capacity(42);
        out.push_str("0x");
        for (i, ch) in lower.chars().enumerate() {
            let nibble = if i % 2 == 0 {
                digest[i / 2] >> 4
            } else {
                digest[i / 2] & 0x0f
            };
            if ch.is_ascii_alphabetic() && nibble >= 8 {
                out.push(ch.to_ascii_uppercase());
            } else {
                out.push(ch);
            }
        }
        out
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Address {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed(s).map(Self)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_lower_hex())
    }
}

/// A 32-byte hash, used for the pair contract's init-code hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeHash([u8; 32]);

impl CodeHash {
    /// Creates a `CodeHash` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Hashes contract creation bytecode into its init-code hash.
    #[must_use]
    pub fn of_bytecode(bytecode: &[u8]) -> Self {
        Self(keccak256(bytecode))
    }

    /// Returns the underlying 32 bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl FromStr for CodeHash {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed(s).map(Self)
    }
}

impl fmt::Display for CodeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for CodeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CodeHash({self})")
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Address {
        let Ok(addr) = s.parse::<Address>() else {
            panic!("invalid address in test: {s}");
        };
        addr
    }

    #[test]
    fn from_bytes_round_trip() {
        let bytes = [42u8; 20];
        assert_eq!(Address::from_bytes(bytes).as_bytes(), &bytes);
    }

    #[test]
    fn parse_is_case_insensitive() {
        let mixed = parse("0x160361ce13ec33C993b5cCA8f62B6864943eb083");
        let lower = parse("0x160361ce13ec33c993b5cca8f62b6864943eb083");
        let upper = parse("0X160361CE13EC33C993B5CCA8F62B6864943EB083");
        assert_eq!(mixed, lower);
        assert_eq!(mixed, upper);
    }

    #[test]
    fn parse_without_prefix() {
        let a = parse("228ebBeE999c6a7ad74A6130E81b12f9Fe237Ba3");
        let b = parse("0x228ebBeE999c6a7ad74A6130E81b12f9Fe237Ba3");
        assert_eq!(a, b);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!("0x1234".parse::<Address>().is_err());
        assert!(
            "0x160361ce13ec33C993b5cCA8f62B6864943eb08300"
                .parse::<Address>()
                .is_err()
        );
    }

    #[test]
    fn parse_rejects_non_hex() {
        let Err(e) = "0xzz0361ce13ec33C993b5cCA8f62B6864943eb083".parse::<Address>() else {
            panic!("expected Err");
        };
        assert!(matches!(e, AmmError::InvalidAddress(_)));
    }

    #[test]
    fn checksum_matches_eip55_vectors() {
        for expected in [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0x160361ce13ec33C993b5cCA8f62B6864943eb083",
            "0x228ebBeE999c6a7ad74A6130E81b12f9Fe237Ba3",
            "0x7B5F989c5b707318D83E027485AcBE9A0d512665",
        ] {
            assert_eq!(parse(&expected.to_lowercase()).to_checksum(), expected);
        }
    }

    #[test]
    fn ordering_matches_lowercase_hex() {
        let lo = parse("0x160361ce13ec33C993b5cCA8f62B6864943eb083");
        let hi = parse("0x228ebBeE999c6a7ad74A6130E81b12f9Fe237Ba3");
        assert!(lo < hi);
        assert!(lo.to_lower_hex() < hi.to_lower_hex());
    }

    #[test]
    fn debug_format() {
        let dbg = format!("{:?}", Address::ZERO);
        assert_eq!(dbg, "Address(0x0000000000000000000000000000000000000000)");
    }

    #[test]
    fn code_hash_round_trip() {
        let text = "0x9bed236afd9ee213b091a75dba81e2a6cb68da7377c3c64bb0f375facca3df67";
        let Ok(hash) = text.parse::<CodeHash>() else {
            panic!("expected Ok");
        };
        assert_eq!(hash.to_string(), text);
    }

    #[test]
    fn code_hash_of_empty_bytecode() {
        assert_eq!(
            CodeHash::of_bytecode(&[]).to_string(),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }
}
