mod commands;
mod error;

use argh::FromArgs;
use bitprobe_api::Status;
use error::CliError;

#[derive(FromArgs, Debug)]
/// Bit stream extraction and reinterpretation tool
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    HexDump(commands::dump::HexDumpCmd),
    StripNulls(commands::dump::NullStripCmd),
    BitText(commands::text::BitTextCmd),
    PackText(commands::text::PackTextCmd),
    ExtractBits(commands::bits::ExtractBitsCmd),
    Stats(commands::stats::StatsCmd),
    Distance(commands::stats::DistanceCmd),
    Sequences(commands::stats::SequencesCmd),
    Image(commands::image::ImageCmd),
    Reorder(commands::image::ReorderCmd),
    Spp(commands::spp::SppCmd),
    FindPrime(commands::misc::FindPrimeCmd),
}

fn main() {
    let cli: TopLevel = argh::from_env();

    let result = match cli.command {
        Commands::HexDump(cmd) => commands::dump::handle_hex_dump_command(cmd),
        Commands::StripNulls(cmd) => commands::dump::handle_null_strip_command(cmd),
        Commands::BitText(cmd) => commands::text::handle_bit_text_command(cmd),
        Commands::PackText(cmd) => commands::text::handle_pack_text_command(cmd),
        Commands::ExtractBits(cmd) => commands::bits::handle_extract_bits_command(cmd),
        Commands::Stats(cmd) => commands::stats::handle_stats_command(cmd),
        Commands::Distance(cmd) => commands::stats::handle_distance_command(cmd),
        Commands::Sequences(cmd) => commands::stats::handle_sequences_command(cmd),
        Commands::Image(cmd) => commands::image::handle_image_command(cmd),
        Commands::Reorder(cmd) => commands::image::handle_reorder_command(cmd),
        Commands::Spp(cmd) => commands::spp::handle_spp_command(cmd),
        Commands::FindPrime(cmd) => commands::misc::handle_find_prime_command(cmd),
    };

    if let Err(error) = result {
        match &error {
            CliError::Operation(operation) => {
                eprintln!("error ({}): {operation}", Status::from(operation).code());
            }
            CliError::Io(io) => eprintln!("error: {io}"),
        }
        std::process::exit(1);
    }
}
