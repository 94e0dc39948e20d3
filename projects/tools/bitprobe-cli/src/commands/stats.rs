use crate::error::CliError;
use argh::FromArgs;
use bitprobe_api::ops::{bit_distance, bit_sequences, bit_stream_stats, StreamStatsParams};
use bitprobe_core::{BitOrder, StreamLayout};
use std::path::PathBuf;

/// The three statistics commands differ only in what they fold the body bits
/// into, so they share one argument shape.
macro_rules! stats_command {
    ($name:literal, $doc:literal, $cmd:ident, $handler:ident, $operation:path, $summary:literal) => {
        #[derive(FromArgs, Debug)]
        #[doc = $doc]
        #[argh(subcommand, name = $name)]
        pub struct $cmd {
            /// input file path
            #[argh(option)]
            pub input: PathBuf,

            /// output file path
            #[argh(option)]
            pub output: PathBuf,

            /// bits of prologue before the first block [default: 0]
            #[argh(option, default = "0")]
            pub prologue_bits: u64,

            /// bits of header before each block body [default: 0]
            #[argh(option, default = "0")]
            pub header_bits: u64,

            /// bits per block body
            #[argh(option)]
            pub body_bits: u64,

            /// number of blocks [default: 1]
            #[argh(option, default = "1")]
            pub block_count: u64,

            /// bit order: msb or lsb [default: msb]
            #[argh(option, default = "BitOrder::MsbFirst")]
            pub order: BitOrder,

            /// complement every bit
            #[argh(switch)]
            pub invert: bool,
        }

        pub fn $handler(cmd: $cmd) -> Result<(), CliError> {
            $operation(&StreamStatsParams {
                input: cmd.input,
                output: cmd.output.clone(),
                layout: StreamLayout {
                    prologue_bits: cmd.prologue_bits,
                    header_bits: cmd.header_bits,
                    body_bits: cmd.body_bits,
                    block_count: cmd.block_count,
                },
                order: cmd.order,
                invert: cmd.invert,
            })?;
            println!(concat!("Wrote ", $summary, " to {}"), cmd.output.display());
            Ok(())
        }
    };
}

stats_command!(
    "stats",
    "Report per-block 0/1 counts and longest runs",
    StatsCmd,
    handle_stats_command,
    bit_stream_stats,
    "block statistics report"
);
stats_command!(
    "distance",
    "Report distances between successive set bits as CSV",
    DistanceCmd,
    handle_distance_command,
    bit_distance,
    "set-bit distance CSV"
);
stats_command!(
    "sequences",
    "Report lengths of identical-bit runs as CSV",
    SequencesCmd,
    handle_sequences_command,
    bit_sequences,
    "run-length CSV"
);
