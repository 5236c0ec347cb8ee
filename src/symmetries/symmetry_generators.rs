// Generator parser: turns command-line tokens into matrix generators and translation repeats
// The matrix catalog is fixed; every entry is an integer orthogonal matrix acting on
// positions relative to the center of symmetry (x = east, y = up, z = south).

use std::collections::BTreeSet;
use std::fmt;

use log::debug;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::SymmetryError;
use crate::Result;

/// One entry of the fixed generator catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Generator {
    /// `n`: north-south flip (mirror across the plane z = center)
    NorthSouth,
    /// `e`: east-west flip (mirror across the plane x = center)
    EastWest,
    /// `u`: up-down flip (half turn about the east-west axis)
    UpDown,
    /// `nw`: flip across the northwest-southeast diagonal
    NorthWest,
    /// `ne`: flip across the northeast-southwest diagonal
    NorthEast,
    /// `90`: quarter turn in the horizontal plane
    Rotate90,
    /// `180`: half turn in the horizontal plane
    Rotate180,
}

impl Generator {
    pub const ALL: [Generator; 7] = [
        Generator::NorthSouth,
        Generator::EastWest,
        Generator::UpDown,
        Generator::NorthWest,
        Generator::NorthEast,
        Generator::Rotate90,
        Generator::Rotate180,
    ];

    /// Look up a generator by its command-line token
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "n" => Some(Generator::NorthSouth),
            "e" => Some(Generator::EastWest),
            "u" => Some(Generator::UpDown),
            "nw" => Some(Generator::NorthWest),
            "ne" => Some(Generator::NorthEast),
            "90" => Some(Generator::Rotate90),
            "180" => Some(Generator::Rotate180),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Generator::NorthSouth => "n",
            Generator::EastWest => "e",
            Generator::UpDown => "u",
            Generator::NorthWest => "nw",
            Generator::NorthEast => "ne",
            Generator::Rotate90 => "90",
            Generator::Rotate180 => "180",
        }
    }

    /// The integer matrix of this generator (row-major literals)
    pub fn matrix(&self) -> Matrix3<i8> {
        match self {
            Generator::NorthSouth => Matrix3::new(1, 0, 0, 0, 1, 0, 0, 0, -1),
            Generator::EastWest => Matrix3::new(-1, 0, 0, 0, 1, 0, 0, 0, 1),
            Generator::UpDown => Matrix3::new(1, 0, 0, 0, -1, 0, 0, 0, -1),
            Generator::NorthWest => Matrix3::new(0, 0, -1, 0, 1, 0, -1, 0, 0),
            Generator::NorthEast => Matrix3::new(0, 0, 1, 0, 1, 0, 1, 0, 0),
            Generator::Rotate90 => Matrix3::new(0, 0, 1, 0, 1, 0, -1, 0, 0),
            Generator::Rotate180 => {
                let quarter = Generator::Rotate90.matrix();
                quarter * quarter
            }
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// `t <count> <dx> <dy> <dz>`: repeat the pattern `count - 1` more times,
/// the k-th copy shifted by `k * delta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationSpec {
    pub count: u32,
    pub delta: Vector3<f64>,
}

impl TranslationSpec {
    pub fn new(count: u32, delta: Vector3<f64>) -> Self {
        Self { count, delta }
    }

    /// Offset of the k-th repeat
    pub fn offset(&self, k: u32) -> Vector3<f64> {
        self.delta * f64::from(k)
    }
}

/// Parsed generator tokens: a deduplicated matrix generator set and the ordered translation repeats.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SymmetrySpec {
    pub generators: BTreeSet<Generator>,
    pub translations: Vec<TranslationSpec>,
}

impl SymmetrySpec {
    /// North-south plus east-west mirroring, used when no tokens are given
    pub fn default_mirrors() -> Self {
        Self {
            generators: [Generator::NorthSouth, Generator::EastWest].into_iter().collect(),
            translations: Vec::new(),
        }
    }

    pub fn generator_matrices(&self) -> Vec<Matrix3<i8>> {
        self.generators.iter().map(Generator::matrix).collect()
    }
}

/// Parse generator tokens (`n e u nw ne 90 180` and `t <count> <dx> <dy> <dz>`).
///
/// An empty token list yields [`SymmetrySpec::default_mirrors`]. Any unknown token,
/// truncated `t` group or unparseable number rejects the whole list.
pub fn parse_symmetry_spec<S: AsRef<str>>(tokens: &[S]) -> Result<SymmetrySpec> {
    if tokens.is_empty() {
        debug!("No generator tokens given, using default mirrors");
        return Ok(SymmetrySpec::default_mirrors());
    }

    let mut spec = SymmetrySpec::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_ref();
        i += 1;

        if token == "t" {
            let args = tokens.get(i..i + 4).ok_or_else(|| {
                SymmetryError::InvalidSpecification(format!(
                    "translation needs <count> <dx> <dy> <dz>, got {} argument(s)",
                    tokens.len() - i
                ))
            })?;
            spec.translations.push(parse_translation(args)?);
            i += 4;
            continue;
        }

        match Generator::from_token(token) {
            Some(generator) => {
                spec.generators.insert(generator);
            }
            None => {
                return Err(SymmetryError::InvalidSpecification(format!(
                    "unknown token '{}'",
                    token
                )))
            }
        }
    }

    debug!(
        "Parsed generators [{}] and {} translation(s)",
        spec.generators
            .iter()
            .map(Generator::token)
            .collect::<Vec<_>>()
            .join(" "),
        spec.translations.len()
    );
    Ok(spec)
}

fn parse_translation<S: AsRef<str>>(args: &[S]) -> Result<TranslationSpec> {
    let count_token = args[0].as_ref();
    let count: i64 = count_token.parse().map_err(|_| {
        SymmetryError::InvalidSpecification(format!(
            "translation count '{}' is not an integer",
            count_token
        ))
    })?;
    let count = u32::try_from(count)
        .ok()
        .filter(|&c| c >= 1)
        .ok_or_else(|| {
            SymmetryError::InvalidSpecification(format!(
                "translation count must be a positive integer, got {}",
                count
            ))
        })?;

    let mut delta = Vector3::zeros();
    for (axis, arg) in args[1..4].iter().enumerate() {
        let text = arg.as_ref();
        let value: f64 = text
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| {
                SymmetryError::InvalidSpecification(format!(
                    "translation component '{}' is not a number",
                    text
                ))
            })?;
        delta[axis] = value;
    }

    Ok(TranslationSpec::new(count, delta))
}
