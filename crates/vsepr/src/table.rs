use std::{fmt::Debug, fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord};
use log::{debug, warn};

use crate::Error;

/// number of columns in every row of the table
pub const NUM_FIELDS: usize = 6;

/// the struct member names of the generated row type, in column order
pub const FIELD_NAMES: [&str; NUM_FIELDS] = [
    "valence_pairs",
    "ep_geometry",
    "bond_pairs",
    "lone_pairs",
    "shape",
    "hybridization",
];

/// A single line of the input as read, before checking that it has enough
/// fields to make a [Row]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number in the input
    pub line: u64,
    pub fields: Vec<String>,
}

impl Record {
    pub fn new(line: u64, fields: &[&str]) -> Self {
        Self {
            line,
            fields: fields.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// One row of VSEPR data. Every field is an opaque string copied verbatim
/// from the input
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub valence_pairs: String,
    pub ep_geometry: String,
    pub bond_pairs: String,
    pub lone_pairs: String,
    pub shape: String,
    pub hybridization: String,
}

impl Row {
    /// the fields of `self` in column order
    pub fn fields(&self) -> [&str; NUM_FIELDS] {
        [
            &self.valence_pairs,
            &self.ep_geometry,
            &self.bond_pairs,
            &self.lone_pairs,
            &self.shape,
            &self.hybridization,
        ]
    }
}

impl TryFrom<&Record> for Row {
    type Error = Error;

    /// only the first six fields are used. anything past them is dropped
    fn try_from(record: &Record) -> Result<Self, Self::Error> {
        let Some(
            [
                valence_pairs,
                ep_geometry,
                bond_pairs,
                lone_pairs,
                shape,
                hybridization,
            ],
        ) = record.fields.get(..NUM_FIELDS)
        else {
            return Err(Error::MalformedRow {
                line: record.line,
                found: record.fields.len(),
            });
        };
        Ok(Self {
            valence_pairs: valence_pairs.clone(),
            ep_geometry: ep_geometry.clone(),
            bond_pairs: bond_pairs.clone(),
            lone_pairs: lone_pairs.clone(),
            shape: shape.clone(),
            hybridization: hybridization.clone(),
        })
    }
}

/// The whole input: the labels from the first line and every record after
/// it, in input order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

impl Table {
    /// load a [Table] from the CSV file at `filename`. the file is read to
    /// the end before this returns
    pub fn load<P>(filename: P) -> Result<Self, Error>
    where
        P: AsRef<Path> + Debug,
    {
        let path = filename.as_ref();
        let name = path.display().to_string();
        let f = File::open(path)
            .map_err(|e| Error::ReadInput(name.clone(), e.kind()))?;
        let ret = Self::from_reader(f).map_err(|e| match e {
            Error::Io(kind) => Error::ReadInput(name.clone(), kind),
            e => e,
        })?;
        debug!(
            "loaded {} records and {} labels from {filename:?}",
            ret.len(),
            ret.headers.len()
        );
        Ok(ret)
    }

    /// read a [Table] from any source of CSV text. records are not required
    /// to have [NUM_FIELDS] fields here; that is only checked when they are
    /// turned into [Row]s. a blank line becomes a record with no fields
    pub fn from_reader<R: Read>(mut rdr: R) -> Result<Self, Error> {
        let mut buf = Vec::new();
        rdr.read_to_end(&mut buf)?;
        let text =
            String::from_utf8(buf).map_err(|e| Error::Csv(e.to_string()))?;

        let mut lines = split_lines(&text).into_iter();
        let headers = match lines.next() {
            Some((_, header)) => parse_line(header)?,
            None => return Err(Error::MissingHeader),
        };
        if headers.len() != NUM_FIELDS {
            warn!(
                "found {} header labels, expected {NUM_FIELDS}",
                headers.len()
            );
        }

        let mut ret = Vec::new();
        for (line, s) in lines {
            let fields = parse_line(s)?;
            if fields.len() > NUM_FIELDS {
                warn!(
                    "ignoring {} extra fields on line {line}",
                    fields.len() - NUM_FIELDS
                );
            }
            ret.push(Record { line, fields });
        }

        Ok(Self {
            headers,
            records: ret,
        })
    }

    /// the number of data records, not counting the header line
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// convert each record to a [Row], in order. conversion is lazy, so rows
    /// before a malformed record are still yielded
    pub fn rows(&self) -> impl Iterator<Item = Result<Row, Error>> + '_ {
        self.records.iter().map(Row::try_from)
    }
}

/// split `text` into records, each paired with the 1-based line it starts on.
/// newlines inside quoted fields stay in their record, and a trailing `\r`
/// is dropped from each record
fn split_lines(text: &str) -> Vec<(u64, &str)> {
    let mut ret = Vec::new();
    let mut line = 1;
    let mut start_line = 1;
    let mut start = 0;
    let mut quoted = false;
    for (i, b) in text.bytes().enumerate() {
        match b {
            b'"' => quoted = !quoted,
            b'\n' => {
                line += 1;
                if !quoted {
                    let s = text[start..i].trim_end_matches('\r');
                    ret.push((start_line, s));
                    start = i + 1;
                    start_line = line;
                }
            }
            _ => {}
        }
    }
    if start < text.len() {
        ret.push((start_line, text[start..].trim_end_matches('\r')));
    }
    ret
}

/// split one record into its fields. an empty line has no fields at all
fn parse_line(s: &str) -> Result<Vec<String>, Error> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(s.as_bytes());
    let mut record = StringRecord::new();
    rdr.read_record(&mut record)?;
    Ok(record.iter().map(String::from).collect())
}
