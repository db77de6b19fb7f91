use std::{
    fs::File,
    io::{self, Write},
    path::Path,
    str::FromStr,
};

use crate::domain::OutputRecord;

const BASE_HEADERS: [&str; 5] = ["site_url", "business_name", "industry", "company_name", "city"];
const EXTENDED_HEADERS: [&str; 6] = [
    "site_url",
    "business_name",
    "industry",
    "company_name",
    "city",
    "phone_number",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSchema {
    Base,
    Extended,
}

impl OutputSchema {
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            OutputSchema::Base => &BASE_HEADERS,
            OutputSchema::Extended => &EXTENDED_HEADERS,
        }
    }

    fn row<'a>(&self, record: &'a OutputRecord) -> Vec<&'a str> {
        let mut row = vec![
            record.site_url.as_str(),
            record.business_name.as_str(),
            record.industry.as_str(),
            record.company_name.as_str(),
            record.city.as_str(),
        ];
        if *self == OutputSchema::Extended {
            row.push(record.phone_number.as_str());
        }
        row
    }
}

impl FromStr for OutputSchema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "base" => Ok(OutputSchema::Base),
            "extended" => Ok(OutputSchema::Extended),
            other => Err(format!("Unknown output schema: {}", other)),
        }
    }
}

/// Append-only tabular output. The header row is written on construction.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    schema: OutputSchema,
    rows_written: usize,
}

impl CsvSink<File> {
    pub fn create(path: &Path, schema: OutputSchema) -> csv::Result<Self> {
        let file = File::create(path)?;
        CsvSink::new(file, schema)
    }
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W, schema: OutputSchema) -> csv::Result<Self> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(schema.headers())?;
        writer.flush()?;

        Ok(CsvSink {
            writer,
            schema,
            rows_written: 0,
        })
    }

    pub fn append(&mut self, record: &OutputRecord) -> csv::Result<()> {
        self.writer.write_record(self.schema.row(record))?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    #[cfg(test)]
    pub fn into_inner(self) -> io::Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| io::Error::new(e.error().kind(), e.to_string()))
    }
}
