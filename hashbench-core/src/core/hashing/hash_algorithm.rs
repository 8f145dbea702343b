use std::fmt;
use std::str::FromStr;

use crate::shared::constants::*;
use crate::shared::error::HashError;

/// Algorithm families without their parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    Sha256,
    Sha512,
    Md5,
    Bcrypt,
    Argon2id,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 5] = [
        AlgorithmKind::Sha256,
        AlgorithmKind::Sha512,
        AlgorithmKind::Md5,
        AlgorithmKind::Bcrypt,
        AlgorithmKind::Argon2id,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmKind::Sha256 => "SHA256",
            AlgorithmKind::Sha512 => "SHA512",
            AlgorithmKind::Md5 => "MD5",
            AlgorithmKind::Bcrypt => "BCrypt",
            AlgorithmKind::Argon2id => "Argon2id",
        }
    }

    pub fn is_digest(&self) -> bool {
        matches!(self, AlgorithmKind::Sha256 | AlgorithmKind::Sha512 | AlgorithmKind::Md5)
    }
}

impl FromStr for AlgorithmKind {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "").as_str() {
            "sha256" => Ok(AlgorithmKind::Sha256),
            "sha512" => Ok(AlgorithmKind::Sha512),
            "md5" => Ok(AlgorithmKind::Md5),
            "bcrypt" => Ok(AlgorithmKind::Bcrypt),
            "argon2" | "argon2id" => Ok(AlgorithmKind::Argon2id),
            other => Err(HashError::config(format!("Unknown algorithm: {}", other))),
        }
    }
}

/// Effective Argon2id cost parameters, always above the provider minimums
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Params {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self::parse(
            DEFAULT_ARGON2_MEMORY,
            DEFAULT_ARGON2_ITERATIONS,
            DEFAULT_ARGON2_PARALLELISM,
        )
    }
}

impl Argon2Params {
    /// Clamp raw values to the usable minimums.
    pub fn new(memory_kib: i64, iterations: i64, parallelism: i64) -> Self {
        Self {
            memory_kib: clamp_at_least(memory_kib, MIN_ARGON2_MEMORY_KIB),
            iterations: clamp_at_least(iterations, MIN_ARGON2_ITERATIONS),
            parallelism: clamp_at_least(parallelism, MIN_ARGON2_PARALLELISM),
        }
    }

    /// Parse free-text fields. Unparseable text counts as 0 and is clamped.
    pub fn parse(memory: &str, iterations: &str, parallelism: &str) -> Self {
        Self::new(
            parse_or_zero(memory),
            parse_or_zero(iterations),
            parse_or_zero(parallelism),
        )
    }
}

fn parse_or_zero(text: &str) -> i64 {
    text.trim().parse::<i32>().map(i64::from).unwrap_or(0)
}

fn clamp_at_least(value: i64, min: u32) -> u32 {
    u32::try_from(value.max(i64::from(min))).unwrap_or(u32::MAX)
}

/// Clamp a BCrypt work factor into the range the provider accepts.
pub fn clamp_bcrypt_cost(cost: i64) -> u32 {
    let clamped = cost.clamp(i64::from(MIN_BCRYPT_COST), i64::from(MAX_BCRYPT_COST));
    u32::try_from(clamped).unwrap_or(DEFAULT_BCRYPT_COST)
}

/// The selected hashing scheme with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmVariant {
    Sha256,
    Sha512,
    Md5,
    Bcrypt { cost: u32 },
    Argon2id(Argon2Params),
}

impl AlgorithmVariant {
    pub fn bcrypt(cost: i64) -> Self {
        AlgorithmVariant::Bcrypt {
            cost: clamp_bcrypt_cost(cost),
        }
    }

    pub fn argon2id(params: Argon2Params) -> Self {
        AlgorithmVariant::Argon2id(params)
    }

    pub fn kind(&self) -> AlgorithmKind {
        match self {
            AlgorithmVariant::Sha256 => AlgorithmKind::Sha256,
            AlgorithmVariant::Sha512 => AlgorithmKind::Sha512,
            AlgorithmVariant::Md5 => AlgorithmKind::Md5,
            AlgorithmVariant::Bcrypt { .. } => AlgorithmKind::Bcrypt,
            AlgorithmVariant::Argon2id(_) => AlgorithmKind::Argon2id,
        }
    }
}

/// Labels show the effective configuration, e.g. `BCrypt (Cost: 10)`.
impl fmt::Display for AlgorithmVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmVariant::Bcrypt { cost } => write!(f, "BCrypt (Cost: {})", cost),
            AlgorithmVariant::Argon2id(params) => write!(
                f,
                "Argon2id (Mem: {} KiB, Iter: {}, Par: {})",
                params.memory_kib, params.iterations, params.parallelism
            ),
            other => f.write_str(other.kind().name()),
        }
    }
}

/// Exclusive-choice picker state: one flag per algorithm plus the raw parameter fields.
#[derive(Debug, Clone)]
pub struct AlgorithmSelection {
    pub sha256: bool,
    pub sha512: bool,
    pub md5: bool,
    pub bcrypt: bool,
    pub argon2id: bool,
    pub bcrypt_cost: i64,
    pub argon2_memory: String,
    pub argon2_iterations: String,
    pub argon2_parallelism: String,
}

impl Default for AlgorithmSelection {
    fn default() -> Self {
        Self {
            sha256: true,
            sha512: false,
            md5: false,
            bcrypt: false,
            argon2id: false,
            bcrypt_cost: i64::from(DEFAULT_BCRYPT_COST),
            argon2_memory: DEFAULT_ARGON2_MEMORY.to_string(),
            argon2_iterations: DEFAULT_ARGON2_ITERATIONS.to_string(),
            argon2_parallelism: DEFAULT_ARGON2_PARALLELISM.to_string(),
        }
    }
}

impl AlgorithmSelection {
    /// Select exactly one algorithm, clearing the others.
    pub fn select(&mut self, kind: AlgorithmKind) {
        self.sha256 = kind == AlgorithmKind::Sha256;
        self.sha512 = kind == AlgorithmKind::Sha512;
        self.md5 = kind == AlgorithmKind::Md5;
        self.bcrypt = kind == AlgorithmKind::Bcrypt;
        self.argon2id = kind == AlgorithmKind::Argon2id;
    }

    /// First set flag wins, in SHA256, SHA512, MD5, BCrypt, Argon2id order.
    pub fn selected_kind(&self) -> Option<AlgorithmKind> {
        let flags = [self.sha256, self.sha512, self.md5, self.bcrypt, self.argon2id];
        AlgorithmKind::ALL
            .into_iter()
            .zip(flags)
            .find_map(|(kind, set)| set.then_some(kind))
    }

    pub fn to_variant(&self) -> Option<AlgorithmVariant> {
        let variant = match self.selected_kind()? {
            AlgorithmKind::Sha256 => AlgorithmVariant::Sha256,
            AlgorithmKind::Sha512 => AlgorithmVariant::Sha512,
            AlgorithmKind::Md5 => AlgorithmVariant::Md5,
            AlgorithmKind::Bcrypt => AlgorithmVariant::bcrypt(self.bcrypt_cost),
            AlgorithmKind::Argon2id => AlgorithmVariant::argon2id(Argon2Params::parse(
                &self.argon2_memory,
                &self.argon2_iterations,
                &self.argon2_parallelism,
            )),
        };
        Some(variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argon2_defaults() {
        let params = Argon2Params::default();
        assert_eq!(params.memory_kib, 65536);
        assert_eq!(params.iterations, 3);
        assert_eq!(params.parallelism, 2);
    }

    #[test]
    fn test_unparseable_params_are_clamped() {
        let params = Argon2Params::parse("abc", "", "two");
        assert_eq!(params.memory_kib, 8192);
        assert_eq!(params.iterations, 1);
        assert_eq!(params.parallelism, 1);
    }

    #[test]
    fn test_small_and_negative_params_are_clamped() {
        let params = Argon2Params::parse("1024", "0", "-4");
        assert_eq!(params.memory_kib, 8192);
        assert_eq!(params.iterations, 1);
        assert_eq!(params.parallelism, 1);

        let params = Argon2Params::parse(" 16384 ", "+5", "4");
        assert_eq!(params.memory_kib, 16384);
        assert_eq!(params.iterations, 5);
        assert_eq!(params.parallelism, 4);
    }

    #[test]
    fn test_overflowing_param_counts_as_zero() {
        let params = Argon2Params::parse("99999999999", "3", "2");
        assert_eq!(params.memory_kib, 8192);
    }

    #[test]
    fn test_bcrypt_cost_clamp() {
        assert_eq!(clamp_bcrypt_cost(10), 10);
        assert_eq!(clamp_bcrypt_cost(0), 4);
        assert_eq!(clamp_bcrypt_cost(-1), 4);
        assert_eq!(clamp_bcrypt_cost(99), 31);
    }

    #[test]
    fn test_labels() {
        assert_eq!(AlgorithmVariant::Sha256.to_string(), "SHA256");
        assert_eq!(AlgorithmVariant::Sha512.to_string(), "SHA512");
        assert_eq!(AlgorithmVariant::Md5.to_string(), "MD5");
        assert_eq!(AlgorithmVariant::bcrypt(10).to_string(), "BCrypt (Cost: 10)");
        assert_eq!(
            AlgorithmVariant::argon2id(Argon2Params::parse("abc", "3", "2")).to_string(),
            "Argon2id (Mem: 8192 KiB, Iter: 3, Par: 2)"
        );
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("SHA-256".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Sha256);
        assert_eq!("sha512".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Sha512);
        assert_eq!("MD5".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Md5);
        assert_eq!("bcrypt".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Bcrypt);
        assert_eq!("argon2".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Argon2id);
        assert!("whirlpool".parse::<AlgorithmKind>().is_err());
    }

    #[test]
    fn test_selection_priority() {
        let mut selection = AlgorithmSelection::default();
        assert_eq!(selection.selected_kind(), Some(AlgorithmKind::Sha256));

        selection.sha256 = false;
        selection.md5 = true;
        selection.argon2id = true;
        assert_eq!(selection.selected_kind(), Some(AlgorithmKind::Md5));

        selection.md5 = false;
        assert_eq!(selection.selected_kind(), Some(AlgorithmKind::Argon2id));

        selection.argon2id = false;
        assert_eq!(selection.selected_kind(), None);
        assert!(selection.to_variant().is_none());
    }

    #[test]
    fn test_select_is_exclusive() {
        let mut selection = AlgorithmSelection::default();
        selection.select(AlgorithmKind::Bcrypt);
        assert!(!selection.sha256);
        assert!(selection.bcrypt);
        assert_eq!(selection.to_variant(), Some(AlgorithmVariant::Bcrypt { cost: 10 }));

        selection.select(AlgorithmKind::Argon2id);
        selection.argon2_memory = "abc".to_string();
        assert_eq!(
            selection.to_variant(),
            Some(AlgorithmVariant::Argon2id(Argon2Params {
                memory_kib: 8192,
                iterations: 3,
                parallelism: 2,
            }))
        );
    }
}
