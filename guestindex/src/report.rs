use std::io::Write;
use crate::bench::Measurement;
use crate::Result;

pub const CSV_HEADER: &str = "algorithm,size,time,collision";

/// Writes `algorithm,size,time,collision` rows, one per measurement.
pub fn write_csv<W: Write>(writer: &mut W, measurements: &[Measurement]) -> Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for m in measurements {
        writeln!(writer, "{},{},{},{}", m.algorithm, m.size, m.seconds, m.collisions)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(writer: &mut W, measurements: &[Measurement]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, measurements)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
