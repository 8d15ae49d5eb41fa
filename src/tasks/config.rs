/* ************************************************************************ **
** This file is part of gauss-trace, and is licensed under EITHER the MIT   **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Input files.
//!
//! ```yaml
//! method: gauss-jordan   # optional: gauss | gauss-jordan | both
//! matrix: [[2, 1, -1], [-3, -1, 2], [-2, 1, 2]]
//! vector: [8, -11, -3]
//! ```
//!
//! JSON works as well.

// NOTE: Please make sure to use the YamlRead trait!
//       Reading through serde_yaml directly skips the unused key warnings.

use crate::FailResult;

use gauss_trace_engine::{Method, UnknownMethod};
use path_abs::{FileRead, PathFile, PathInfo};
use std::fmt;
use std::io::Read;
use std::str::FromStr;

/// Deserialization that warns about keys nobody asked for.
pub trait YamlRead: for<'de> serde::Deserialize<'de> {
    fn from_reader(mut r: impl Read) -> Result<Self, serde_yaml::Error>
    { Self::from_dyn_reader(&mut r) }

    fn from_dyn_reader(r: &mut dyn Read) -> Result<Self, serde_yaml::Error> {
        // serde_ignored needs a Deserializer, and serde_yaml only exposes
        // one through Value.
        Self::from_value(value_from_dyn_reader(r)?)
    }

    fn from_value(value: serde_yaml::Value) -> Result<Self, serde_yaml::Error>;
}

macro_rules! derive_yaml_read {
    ($Type:ty) => {
        impl YamlRead for $Type {
            fn from_value(value: serde_yaml::Value) -> Result<$Type, serde_yaml::Error> {
                serde_ignored::deserialize(
                    value,
                    |path| warn!("Unused input item (possible typo?): {}", path),
                )
            }
        }
    };
}

fn value_from_dyn_reader(r: &mut dyn Read) -> Result<serde_yaml::Value, serde_yaml::Error>
{ serde_yaml::from_reader(r) }

/// One linear system, and optionally how to solve it.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct SystemFile {
    #[serde(default)]
    pub method: Option<MethodChoice>,
    pub matrix: Vec<Vec<f64>>,
    pub vector: Vec<f64>,
}
derive_yaml_read!{SystemFile}

impl SystemFile {
    pub fn load(path: &PathFile) -> FailResult<SystemFile> {
        let file = FileRead::open(path)?;
        SystemFile::from_reader(file)
            .map_err(|e| format_err!("could not read {}: {}", path.display(), e))
    }
}

/// A single method, or both of them for comparison.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MethodChoice {
    Gauss,
    GaussJordan,
    Both,
}

impl MethodChoice {
    pub fn methods(self) -> Vec<Method> {
        match self {
            MethodChoice::Gauss => vec![Method::Gauss],
            MethodChoice::GaussJordan => vec![Method::GaussJordan],
            MethodChoice::Both => Method::ALL.to_vec(),
        }
    }
}

impl Default for MethodChoice {
    fn default() -> Self { MethodChoice::Gauss }
}

impl FromStr for MethodChoice {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "both" => Ok(MethodChoice::Both),
            _ => match s.parse()? {
                Method::Gauss => Ok(MethodChoice::Gauss),
                Method::GaussJordan => Ok(MethodChoice::GaussJordan),
            },
        }
    }
}

impl fmt::Display for MethodChoice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            MethodChoice::Gauss => "gauss",
            MethodChoice::GaussJordan => "gauss-jordan",
            MethodChoice::Both => "both",
        })
    }
}
