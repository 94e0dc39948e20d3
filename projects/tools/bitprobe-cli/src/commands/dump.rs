use crate::error::CliError;
use argh::FromArgs;
use bitprobe_api::ops::{hex_dump_file, strip_null_runs, HexDumpParams, NullStripParams};
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Dump a file as fixed-width hex text rows
#[argh(subcommand, name = "hex-dump")]
pub struct HexDumpCmd {
    /// input file path
    #[argh(option)]
    pub input: PathBuf,

    /// output text file path
    #[argh(option)]
    pub output: PathBuf,

    /// bytes to skip from the start of the file [default: 0]
    #[argh(option, default = "0")]
    pub skip_bytes: usize,

    /// bytes per output row [default: 16]
    #[argh(option, default = "16")]
    pub row_width: usize,
}

pub fn handle_hex_dump_command(cmd: HexDumpCmd) -> Result<(), CliError> {
    hex_dump_file(&HexDumpParams {
        input: cmd.input,
        output: cmd.output.clone(),
        skip_bytes: cmd.skip_bytes,
        row_width: cmd.row_width,
    })?;
    println!("Wrote hex dump to {}", cmd.output.display());
    Ok(())
}

#[derive(FromArgs, Debug)]
/// Remove long runs of NUL bytes from a file
#[argh(subcommand, name = "strip-nulls")]
pub struct NullStripCmd {
    /// input file path
    #[argh(option)]
    pub input: PathBuf,

    /// output file path
    #[argh(option)]
    pub output: PathBuf,

    /// minimum NUL run length to remove [default: 4]
    #[argh(option, default = "4")]
    pub min_run: usize,
}

pub fn handle_null_strip_command(cmd: NullStripCmd) -> Result<(), CliError> {
    let report = strip_null_runs(&NullStripParams {
        input: cmd.input,
        output: cmd.output.clone(),
        min_run: cmd.min_run,
    })?;
    println!(
        "Removed {} runs, {} -> {} bytes, wrote {}",
        report.runs_removed,
        report.bytes_in,
        report.bytes_out,
        cmd.output.display()
    );
    Ok(())
}
