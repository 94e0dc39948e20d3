use crate::error::CliError;
use argh::FromArgs;
use bitprobe_api::ops::{extract_spp, ExtractSppParams};
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Extract space packets matching an APID from a packet stream
#[argh(subcommand, name = "spp")]
pub struct SppCmd {
    /// input file path
    #[argh(option)]
    pub input: PathBuf,

    /// output file for the concatenated matched data fields
    #[argh(option)]
    pub output: PathBuf,

    /// bytes to skip before the first header [default: 0]
    #[argh(option, default = "0")]
    pub skip_bytes: usize,

    /// secondary header size in bytes [default: 0]
    #[argh(option, default = "0")]
    pub secondary_header_size: usize,

    /// apid to match, 0..=2047
    #[argh(option)]
    pub apid: u16,

    /// abort on a malformed header instead of resynchronizing
    #[argh(switch)]
    pub strict: bool,

    /// also write a per-packet CSV summary next to the output
    #[argh(switch)]
    pub save_summary: bool,
}

pub fn handle_spp_command(cmd: SppCmd) -> Result<(), CliError> {
    let report = extract_spp(&ExtractSppParams {
        input: cmd.input,
        output: cmd.output.clone(),
        skip_bytes: cmd.skip_bytes,
        secondary_header_size: cmd.secondary_header_size,
        apid: cmd.apid,
        strict: cmd.strict,
        save_summary: cmd.save_summary,
    })?;
    println!(
        "Matched {} of {} packets ({} bytes, {} resyncs), wrote {}",
        report.packets_matched,
        report.packets_seen,
        report.bytes_matched,
        report.resyncs,
        cmd.output.display()
    );
    Ok(())
}
