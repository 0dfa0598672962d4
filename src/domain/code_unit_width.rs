use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// PCRE2 code unit width the vendored library is compiled for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum CodeUnitWidth {
    Eight,
    #[default]
    Sixteen,
    ThirtyTwo,
}

impl CodeUnitWidth {
    pub const ALL: [CodeUnitWidth; 3] =
        [CodeUnitWidth::Eight, CodeUnitWidth::Sixteen, CodeUnitWidth::ThirtyTwo];

    pub fn bits(self) -> u32 {
        match self {
            CodeUnitWidth::Eight => 8,
            CodeUnitWidth::Sixteen => 16,
            CodeUnitWidth::ThirtyTwo => 32,
        }
    }

    /// Name of the `SUPPORT_PCRE2_<N>` capability macro for this width.
    pub fn support_macro(self) -> String {
        format!("SUPPORT_PCRE2_{}", self.bits())
    }
}

impl TryFrom<u32> for CodeUnitWidth {
    type Error = AppError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            8 => Ok(CodeUnitWidth::Eight),
            16 => Ok(CodeUnitWidth::Sixteen),
            32 => Ok(CodeUnitWidth::ThirtyTwo),
            other => Err(AppError::InvalidCodeUnitWidth(other)),
        }
    }
}

impl From<CodeUnitWidth> for u32 {
    fn from(value: CodeUnitWidth) -> Self {
        value.bits()
    }
}

impl fmt::Display for CodeUnitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}
