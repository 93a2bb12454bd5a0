use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::info;

pub mod config;
pub mod error;
pub mod header;
pub mod table;


pub use config::Layout;
pub use error::Error;
pub use table::{FIELD_NAMES, NUM_FIELDS, Record, Row, Table};

/// Read the CSV file at `input` and write the equivalent C header to
/// `output`, returning the number of rows written.
///
/// `layout` is validated and the input is read completely before `output` is
/// created, so a bad layout or a failure to read the input leaves `output`
/// untouched. A malformed row is only detected when it is reached, and the
/// rows before it are left in `output`. Blank lines count as rows with no
/// fields.
pub fn convert<P, Q>(
    input: P,
    output: Q,
    layout: &Layout,
) -> Result<usize, Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    layout.validate()?;
    let input = input.as_ref();
    let output = output.as_ref();
    let table = Table::load(input)?;

    let name = output.display().to_string();
    let write_err = |e: Error| match e {
        Error::Io(kind) => Error::WriteOutput(name.clone(), kind),
        e => e,
    };
    let f = File::create(output)
        .map_err(|e| Error::WriteOutput(name.clone(), e.kind()))?;
    let mut w = BufWriter::new(f);
    let res = table.write_header(&mut w, layout);
    w.flush()
        .map_err(|e| Error::WriteOutput(name.clone(), e.kind()))?;
    let n = res.map_err(write_err)?;

    info!("wrote {n} rows from {} to {name}", input.display());

    Ok(n)
}
