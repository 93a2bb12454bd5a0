//! Configurable symbol names for the generated header

use std::{
    fmt::{Debug, Display},
    fs::read_to_string,
    path::Path,
};

use serde::Deserialize;

use crate::Error;


#[derive(Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
struct RawLayout {
    /// The include guard wrapping the whole header. Defaults to
    /// VSEPR_DATA_H.
    guard: Option<String>,

    /// The name of the typedef'd row struct. Defaults to vsepr_row_t.
    row_type: Option<String>,

    /// The macro holding the number of rows, which is also used as the size
    /// of the data array. Defaults to VSEPR_NUM_ROWS.
    count_macro: Option<String>,

    /// The name of the array of rows. Defaults to vsepr_data.
    data_array: Option<String>,

    /// The name of the array of column labels taken from the first line of
    /// the input. Defaults to vsepr_headers.
    headers_array: Option<String>,
}

/// Construct a [Layout] with [Layout::load] on a TOML file or start from
/// [Layout::default] and override names with the builder methods
#[derive(Clone, Deserialize, PartialEq, Eq, Debug)]
#[serde(from = "RawLayout")]
pub struct Layout {
    /// include guard macro
    pub guard: String,

    /// typedef name of the row struct
    pub row_type: String,

    /// macro for the row count
    pub count_macro: String,

    /// name of the row array
    pub data_array: String,

    /// name of the header label array
    pub headers_array: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            guard: String::from("VSEPR_DATA_H"),
            row_type: String::from("vsepr_row_t"),
            count_macro: String::from("VSEPR_NUM_ROWS"),
            data_array: String::from("vsepr_data"),
            headers_array: String::from("vsepr_headers"),
        }
    }
}

impl From<RawLayout> for Layout {
    fn from(rl: RawLayout) -> Self {
        let def = Self::default();
        Self {
            guard: rl.guard.unwrap_or(def.guard),
            row_type: rl.row_type.unwrap_or(def.row_type),
            count_macro: rl.count_macro.unwrap_or(def.count_macro),
            data_array: rl.data_array.unwrap_or(def.data_array),
            headers_array: rl.headers_array.unwrap_or(def.headers_array),
        }
    }
}

macro_rules! name_builders {
    ($($name: ident$(,)*)*) => {
        $(pub fn $name(mut self, s: impl Into<String>) -> Self {
            self.$name = s.into();
            self
        })*
    }
}

impl Layout {
    name_builders!(guard, row_type, count_macro, data_array, headers_array);

    /// load a [Layout] from the TOML file specified by `filename`. names
    /// missing from the file keep their default values
    pub fn load<P>(filename: P) -> Result<Self, Error>
    where
        P: AsRef<Path> + Debug,
    {
        let contents = read_to_string(&filename).map_err(|e| {
            Error::Config(format!("failed to read '{filename:?}' with {e}"))
        })?;
        let ret: Self = toml::from_str(&contents).map_err(|e| {
            Error::Config(format!(
                "failed to deserialize '{filename:?}' with {e}"
            ))
        })?;

        ret.validate()?;

        Ok(ret)
    }

    /// check that every name in `self` can be used as a C identifier
    pub fn validate(&self) -> Result<(), Error> {
        for (field, value) in self.names() {
            if !is_identifier(value) {
                return Err(Error::InvalidIdentifier {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    fn names(&self) -> [(&'static str, &String); 5] {
        [
            ("guard", &self.guard),
            ("row_type", &self.row_type),
            ("count_macro", &self.count_macro),
            ("data_array", &self.data_array),
            ("headers_array", &self.headers_array),
        ]
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Layout {
            guard,
            row_type,
            count_macro,
            data_array,
            headers_array,
        } = self;
        write!(
            f,
            "
Configuration Options:
guard = {guard}
row_type = {row_type}
count_macro = {count_macro}
data_array = {data_array}
headers_array = {headers_array}
"
        )
    }
}
