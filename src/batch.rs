//! Batch BR Code generation from CSV.
//!
//! Reads payment requests row by row, generates one BR Code per valid row and
//! writes the results back out as CSV in input order.

use crate::amount::Amount;
use crate::error::{BrCodeError, Result};
use crate::request::PaymentRecord;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::io::{Read, Write};

/// One generated code, as written to the output CSV.
#[derive(Debug, Clone)]
pub struct GeneratedCode {
    /// 1-based input row (the header is row 1).
    pub row: usize,

    /// PIX key exactly as encoded in template 26.
    pub key: String,

    /// Encoded amount, empty for open-amount requests.
    pub amount: Option<Amount>,

    /// Transaction id as supplied, empty when absent.
    pub txid: Option<String>,

    /// The sealed BR Code string.
    pub brcode: String,
}

/// Collects BR Codes generated from a stream of payment request records.
///
/// Rows that cannot be read or encoded are logged at warn level and skipped;
/// they never abort the batch.
#[derive(Debug)]
pub struct BrCodeBatch {
    codes: Vec<GeneratedCode>,
}

impl BrCodeBatch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        BrCodeBatch { codes: Vec::new() }
    }

    /// Generated codes in input order.
    pub fn codes(&self) -> &[GeneratedCode] {
        &self.codes
    }

    /// Processes payment requests from a CSV reader in streaming fashion.
    ///
    /// Expected header: `key,merchant_name,merchant_city,amount,txid`. The
    /// `amount` and `txid` columns may be empty or missing.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<PaymentRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => {
                    if let Err(e) = self.process_record(&record, row_num) {
                        warn!("Row {}: {}", row_num, e);
                    }
                }
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                }
            }
        }

        debug!("Generated {} BR Codes", self.codes.len());
        Ok(())
    }

    /// Generates the code for a single record.
    fn process_record(&mut self, record: &PaymentRecord, row: usize) -> Result<()> {
        let request = record
            .parse()
            .map_err(|e| BrCodeError::InvalidRecord {
                row,
                message: e.to_string(),
            })?;

        if record.amount.as_deref().is_some_and(|a| !a.trim().is_empty())
            && request.amount().is_none()
        {
            debug!("Row {}: Unusable amount {:?}, encoding open amount", row, record.amount);
        }

        let brcode = request.generate()?;
        self.codes.push(GeneratedCode {
            row,
            key: request.key().to_string(),
            amount: request.amount(),
            txid: request.txid().map(str::to_string),
            brcode,
        });

        Ok(())
    }

    /// Writes generated codes as CSV with a header row.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["row", "key", "amount", "txid", "brcode"])?;

        for code in &self.codes {
            csv_writer.write_record([
                code.row.to_string(),
                code.key.clone(),
                code.amount.map(|a| a.to_string()).unwrap_or_default(),
                code.txid.clone().unwrap_or_default(),
                code.brcode.clone(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl Default for BrCodeBatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crc;
    use std::io::Cursor;

    fn run_csv(csv: &str) -> String {
        let mut batch = BrCodeBatch::new();
        batch.process_csv(Cursor::new(csv)).unwrap();

        let mut output = Vec::new();
        batch.write_output(&mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_single_request() {
        let csv = "key,merchant_name,merchant_city,amount,txid\n\
                   +5571997170057,Central Cidadania,Salvador,20,Doação Central da Cidadania\n";

        let output = run_csv(csv);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "row,key,amount,txid,brcode");
        assert_eq!(
            lines[1],
            "2,+5571997170057,20.00,Doação Central da Cidadania,\
             00020126360014br.gov.bcb.pix0114+5571997170057520400005303986540520.005802BR\
             5917CENTRAL CIDADANIA6008SALVADOR62260522DOACAOCENTRALDACIDADAN6304390C"
        );
    }

    #[test]
    fn test_optional_columns() {
        let csv = "key,merchant_name,merchant_city,amount,txid\n\
                   +5571997170057,Central Cidadania,Salvador,,\n";

        let mut batch = BrCodeBatch::new();
        batch.process_csv(Cursor::new(csv)).unwrap();

        let code = &batch.codes()[0];
        assert!(code.amount.is_none());
        assert!(code.txid.is_none());
        assert!(code.brcode.contains("62070503***6304"));
        assert!(crc::verify(&code.brcode));
    }

    #[test]
    fn test_invalid_rows_are_skipped() {
        let csv = "key,merchant_name,merchant_city,amount,txid\n\
                   ,Missing Key,Salvador,10,\n\
                   +5571997170057,Central Cidadania,Salvador,10,\n\
                   joão@example.com,Non Ascii Key,Salvador,,\n\
                   +5521987620120,Central Cidadania,Rio De Janeiro,abc,\n";

        let mut batch = BrCodeBatch::new();
        batch.process_csv(Cursor::new(csv)).unwrap();

        let rows: Vec<usize> = batch.codes().iter().map(|c| c.row).collect();
        assert_eq!(rows, vec![3, 5]);
        assert!(batch.codes()[1].amount.is_none());
    }

    #[test]
    fn test_empty_input_writes_header_only() {
        let output = run_csv("key,merchant_name,merchant_city,amount,txid\n");
        assert_eq!(output.trim(), "row,key,amount,txid,brcode");
    }

    #[test]
    fn test_output_preserves_input_order() {
        let csv = "key,merchant_name,merchant_city\n\
                   b-key,Zeta,Rio\n\
                   a-key,Alpha,Recife\n";

        let mut batch = BrCodeBatch::new();
        batch.process_csv(Cursor::new(csv)).unwrap();

        let keys: Vec<&str> = batch.codes().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["b-key", "a-key"]);
    }
}
