//! End-to-end tests driving whole operation pipelines through real files.

use bitprobe_api::ops::{
    bit_stream_to_image, bit_text, extract_bits, extract_spp, pack_bit_text, pixel_reorder,
    BitTextParams, ExtractBitsParams, ExtractSppParams, ImageParams, PackBitTextParams,
    PixelReorderParams,
};
use bitprobe_api::{status_of, Status};
use bitprobe_core::{BitOrder, StreamLayout};
use bitprobe_raw::parse_raw;
use bitprobe_spp::PrimaryHeader;
use std::fs;
use std::path::Path;

fn whole_stream(bytes: u64) -> StreamLayout {
    StreamLayout {
        prologue_bits: 0,
        header_bits: 0,
        body_bits: bytes * 8,
        block_count: 1,
    }
}

/// A hypothesized framing can be exported as text, edited, and packed back
/// into the identical byte stream.
#[test]
fn text_export_then_pack_restores_the_stream() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("stream.bin");
    let grid = dir.path().join("grid.txt");
    let repacked = dir.path().join("repacked.bin");
    fs::write(&source, [0xDE, 0xAD, 0xBE, 0xEF]).unwrap();

    bit_text(&BitTextParams {
        input: source.clone(),
        output: grid.clone(),
        layout: whole_stream(4),
        row_bits: 8,
        order: BitOrder::MsbFirst,
        invert: false,
    })
    .unwrap();

    pack_bit_text(&PackBitTextParams {
        input: grid,
        output: repacked.clone(),
        order: BitOrder::MsbFirst,
    })
    .unwrap();

    assert_eq!(fs::read(&repacked).unwrap(), fs::read(&source).unwrap());
}

/// Header stripping and re-imaging compose: bodies extracted from a framed
/// stream render to the same image as the equivalent headerless stream.
#[test]
fn extracted_bodies_image_like_the_unframed_stream() {
    let dir = tempfile::tempdir().unwrap();
    let framed = dir.path().join("framed.bin");
    let bodies = dir.path().join("bodies.bin");
    // Two blocks: 8-bit header 0xEE, 8-bit body.
    fs::write(&framed, [0xEE, 0xAA, 0xEE, 0xF0]).unwrap();

    extract_bits(&ExtractBitsParams {
        input: framed.clone(),
        output: bodies.clone(),
        layout: StreamLayout {
            prologue_bits: 0,
            header_bits: 8,
            body_bits: 8,
            block_count: 2,
        },
        input_order: BitOrder::MsbFirst,
        output_order: BitOrder::MsbFirst,
        invert: false,
    })
    .unwrap();
    assert_eq!(fs::read(&bodies).unwrap(), [0xAA, 0xF0]);

    let image = dir.path().join("out.raw");
    bit_stream_to_image(&ImageParams {
        input: bodies,
        output: image.clone(),
        layout: whole_stream(2),
        row_width: 8,
        bit_depth: 1,
        order: BitOrder::MsbFirst,
        invert: false,
        scale: false,
    })
    .unwrap();

    let raw = fs::read(&image).unwrap();
    let (header, pixels) = parse_raw(&raw).unwrap();
    assert_eq!((header.width, header.height), (8, 2));
    assert_eq!(pixels, [1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0]);
}

/// An imaged stream can be de-scrambled in place by a reorder map.
#[test]
fn image_then_reorder_descrambles_a_linear_frame() {
    let dir = tempfile::tempdir().unwrap();
    let stream = dir.path().join("stream.bin");
    let image = dir.path().join("linear.raw");
    let map = dir.path().join("map.txt");
    let fixed = dir.path().join("fixed.raw");
    // 8 pixels at depth 1, single row.
    fs::write(&stream, [0b1100_0010]).unwrap();
    fs::write(&map, "7 6 5 4 3 2 1 0").unwrap();

    bit_stream_to_image(&ImageParams {
        input: stream,
        output: image.clone(),
        layout: whole_stream(1),
        row_width: 8,
        bit_depth: 1,
        order: BitOrder::MsbFirst,
        invert: false,
        scale: false,
    })
    .unwrap();

    pixel_reorder(&PixelReorderParams {
        input: image,
        output: fixed.clone(),
        map,
        invert: false,
        scale: false,
    })
    .unwrap();

    let fixed_bytes = fs::read(&fixed).unwrap();
    let (header, pixels) = parse_raw(&fixed_bytes).unwrap();
    assert_eq!(header.height, 1);
    assert_eq!(pixels, [0, 1, 0, 0, 0, 0, 1, 1]);
}

fn spp_packet(apid: u16, payload: &[u8]) -> Vec<u8> {
    let mut header = PrimaryHeader::default();
    header.set_apid(apid);
    header.set_sequence_flags(3);
    header.set_data_length_minus_one((payload.len() - 1) as u16);
    let mut bytes = header.to_bytes().to_vec();
    bytes.extend_from_slice(payload);
    bytes
}

fn spp_params(input: &Path, output: &Path, apid: u16) -> ExtractSppParams {
    ExtractSppParams {
        input: input.into(),
        output: output.into(),
        skip_bytes: 0,
        secondary_header_size: 0,
        apid,
        strict: true,
        save_summary: true,
    }
}

#[test]
fn spp_extraction_writes_matched_payloads_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("packets.bin");
    let output = dir.path().join("apid17.bin");
    let mut data = spp_packet(17, &[1, 2, 3, 4, 5, 6]);
    data.extend_from_slice(&spp_packet(9, &[0xFF]));
    fs::write(&input, &data).unwrap();

    let report = extract_spp(&spp_params(&input, &output, 17)).unwrap();
    assert_eq!(report.packets_seen, 2);
    assert_eq!(report.packets_matched, 1);
    assert_eq!(fs::read(&output).unwrap(), [1, 2, 3, 4, 5, 6]);

    let csv = fs::read_to_string(output.with_extension("csv")).unwrap();
    assert!(csv.starts_with("offset,apid,"));
    assert_eq!(csv.lines().count(), 2);
}

#[test]
fn failed_operations_leave_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("short.bin");
    let output = dir.path().join("never.txt");
    fs::write(&input, [0u8; 2]).unwrap();

    let result = bit_text(&BitTextParams {
        input,
        output: output.clone(),
        layout: whole_stream(1000),
        row_bits: 8,
        order: BitOrder::MsbFirst,
        invert: false,
    });
    assert_eq!(status_of(&result), Status::SizeMismatch);
    assert!(!output.exists());
}
