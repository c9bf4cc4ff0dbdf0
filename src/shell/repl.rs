use std::io::{BufRead, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::clock::DstStatus;
use crate::store::{self, LogReader, StoreError};

use super::command::{parse_line, Command};

const PROMPT: &str = "fixlog> ";

pub fn run<R, W>(input: &mut R, out: &mut W) -> std::io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);

        match parse_line(trimmed) {
            Ok(Some(command)) => dispatch(command, out)?,
            Ok(None) => {}
            Err(err) => writeln!(out, "{err}")?,
        }
    }
}

fn dispatch<W: Write>(command: Command, out: &mut W) -> std::io::Result<()> {
    match command {
        Command::Append {
            aux,
            filename,
            message,
        } => run_append(aux, &filename, &message, out),
        Command::Dump { filename } => run_dump(&filename, out),
    }
}

fn run_append<W: Write>(
    aux: bool,
    filename: &str,
    message: &str,
    out: &mut W,
) -> std::io::Result<()> {
    debug!(filename, aux, message, "append requested");
    match store::append(Path::new(filename), aux, message) {
        Ok(receipt) => {
            if receipt.created {
                writeln!(out, "Creating file...")?;
            }
            writeln!(out, "Adding new record...")?;
            writeln!(out)?;
            match receipt.dst {
                DstStatus::InEffect => {
                    writeln!(out, "Setting DST flag bit to true according to current timezone.")?;
                    writeln!(out)?;
                }
                DstStatus::Unknown => {
                    warn!("local daylight-saving status unavailable, storing the flag as off");
                    writeln!(out, "Error getting daylight savings flag, but setting it to 0.")?;
                    writeln!(out)?;
                }
                DstStatus::NotInEffect => {}
            }
            writeln!(out, "File is {} bytes.", receipt.file_size)?;
            writeln!(out, "Log file {} now has {} records.", filename, receipt.records)?;
        }
        Err(StoreError::Io { source }) => {
            debug!(%source, "append failed");
            writeln!(out, "Unable to open or create file!")?;
        }
        Err(err) => writeln!(out, "{err}")?,
    }
    Ok(())
}

fn run_dump<W: Write>(filename: &str, out: &mut W) -> std::io::Result<()> {
    debug!(filename, "dump requested");
    let reader = match LogReader::open(Path::new(filename)) {
        Ok(reader) => reader,
        Err(StoreError::Io { source }) => {
            debug!(%source, "dump failed");
            writeln!(out, "Unable to open file!")?;
            return Ok(());
        }
        Err(err) => {
            writeln!(out, "{err}")?;
            return Ok(());
        }
    };

    writeln!(out)?;
    writeln!(out)?;
    writeln!(
        out,
        "******Number of records on {}: {} ******",
        filename,
        reader.record_count()
    )?;
    writeln!(out)?;
    writeln!(out, "-Log checksum: {}", reader.trailer_checksum())?;
    writeln!(out)?;
    writeln!(out)?;

    for entry in reader.iter() {
        match entry {
            Ok(record) => {
                writeln!(out, "   ---Log #{}: ---", record.sequence())?;
                writeln!(out)?;
                writeln!(
                    out,
                    "AUX = {} | DST = {}",
                    if record.aux() { "ON" } else { "OFF" },
                    if record.dst() { "ON" } else { "OFF" }
                )?;
                writeln!(out)?;
                writeln!(out, "Timestamp: {}", record.timestamp())?;
                writeln!(out)?;
                write!(out, "Message: ")?;
                out.write_all(record.message())?;
                writeln!(out)?;
                writeln!(out, "Checksum: {}", record.stored_checksum())?;
                writeln!(out)?;
                writeln!(out)?;
            }
            Err(err) => writeln!(out, "{err}")?,
        }
    }
    Ok(())
}
