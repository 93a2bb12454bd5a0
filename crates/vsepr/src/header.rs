//! Writing a [Table] out as a C header

use std::{fmt::Display, io::Write};

use crate::{
    Error, Layout,
    table::{FIELD_NAMES, NUM_FIELDS, Row, Table},
};

/// formats `self` as a brace-enclosed initializer for one element of the row
/// array. fields are quoted but not escaped
impl Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, field) in self.fields().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "\"{field}\"")?;
        }
        write!(f, "}}")
    }
}

impl Table {
    /// write the C header for `self` to `w`, using the symbol names in
    /// `layout`, and return the number of rows written. rows are converted
    /// as they are written, so a [Error::MalformedRow] leaves everything
    /// before the bad row in `w`
    pub fn write_header<W: Write>(
        &self,
        w: &mut W,
        layout: &Layout,
    ) -> Result<usize, Error> {
        let Layout {
            guard,
            row_type,
            count_macro,
            data_array,
            headers_array,
        } = layout;

        writeln!(w, "#ifndef {guard}")?;
        writeln!(w, "#define {guard}\n")?;

        writeln!(w, "typedef struct {{")?;
        for name in FIELD_NAMES {
            writeln!(w, "    const char *{name};")?;
        }
        writeln!(w, "}} {row_type};\n")?;

        writeln!(w, "#define {count_macro} {}\n", self.len())?;

        writeln!(w, "const {row_type} {data_array}[{count_macro}] = {{")?;
        for row in self.rows() {
            writeln!(w, "    {},", row?)?;
        }
        writeln!(w, "}};\n")?;

        writeln!(w, "const char *{headers_array}[{NUM_FIELDS}] = {{")?;
        for label in &self.headers {
            writeln!(w, "    \"{label}\",")?;
        }
        writeln!(w, "}};\n")?;

        writeln!(w, "#endif")?;

        Ok(self.len())
    }

    /// render the header from [Table::write_header] into a String
    pub fn to_header(&self, layout: &Layout) -> Result<String, Error> {
        let mut buf = Vec::new();
        self.write_header(&mut buf, layout)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
