//! Integration tests for the hex dumper
//!
//! These exercise the dump format end to end against regions built from
//! raw buffers and from record layouts.

use memdump_core::{
    dump, dump_memory, format_lines, lines, DumpOptions, ImageBuilder, MemoryImage, Person,
    RecordLayout, Region, TailPolicy,
};

fn render(region: &Region<'_>, options: &DumpOptions) -> Vec<String> {
    let mut out = Vec::new();
    dump(region, &mut out, options).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Split a rendered line into (address, hex, ascii)
fn columns(line: &str) -> (&str, &str, &str) {
    let (address, rest) = line.split_once("  ").unwrap();
    let (hex, ascii) = rest.split_at(16 * 3 - 1);
    (address, hex, ascii.strip_prefix("  ").unwrap())
}

fn decode_hex(hex: &str) -> Vec<Option<u8>> {
    hex.split(' ')
        .map(|group| u8::from_str_radix(group, 16).ok())
        .collect()
}

mod format_tests {
    use super::*;

    #[test]
    fn test_line_shape() {
        let data: Vec<u8> = (0u8..=255).collect();
        let region = Region::new(0x7ff0_0000, &data);

        for line in render(&region, &DumpOptions::default()) {
            let (_, hex, ascii) = columns(&line);
            let groups: Vec<&str> = hex.split(' ').collect();

            assert_eq!(groups.len(), 16);
            for group in groups {
                assert_eq!(group.len(), 2);
                assert!(group.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
            }
            assert_eq!(ascii.chars().count(), 16);
        }
    }

    #[test]
    fn test_line_counts() {
        for len in [0usize, 1, 15, 16, 17, 31, 32, 33, 128, 1000] {
            let data = vec![0xAAu8; len];
            let region = Region::new(0, &data);
            assert_eq!(render(&region, &DumpOptions::default()).len(), len.div_ceil(16));
        }
    }

    #[test]
    fn test_hex_decodes_to_source_bytes() {
        let data: Vec<u8> = (0..100u32).map(|i| (i * 37 % 251) as u8).collect();
        let region = Region::new(0x1000, &data);

        let mut decoded = Vec::new();
        for line in render(&region, &DumpOptions::default()) {
            let (_, hex, _) = columns(&line);
            decoded.extend(decode_hex(hex).into_iter().flatten());
        }
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_addresses_match_offsets() {
        let data = vec![0u8; 64];
        let region = Region::new(0xc9f41ff5b0, &data);
        let options = DumpOptions::default().with_address_width(16);

        let addresses: Vec<String> = render(&region, &options)
            .iter()
            .map(|l| columns(l).0.to_string())
            .collect();
        assert_eq!(
            addresses,
            vec![
                "000000c9f41ff5b0",
                "000000c9f41ff5c0",
                "000000c9f41ff5d0",
                "000000c9f41ff5e0"
            ]
        );
    }

    #[test]
    fn test_same_region_dumps_identically() {
        let data = b"The quick brown fox jumps over the lazy dog".to_vec();
        let region = Region::of_slice(&data);
        let options = DumpOptions::default();
        assert_eq!(render(&region, &options), render(&region, &options));
    }
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_two_short_records() {
        // Two 8-byte records, each "AB" followed by zero padding
        let memory = ImageBuilder::new(0, 16)
            .bytes(0, b"AB")
            .bytes(8, b"AB")
            .build();
        let region = Region::new(0, memory.as_bytes());

        let output = render(&region, &DumpOptions::default());
        assert_eq!(output.len(), 1);

        let (_, hex, ascii) = columns(&output[0]);
        assert!(hex.starts_with("41 42 00 00"));
        assert!(ascii.starts_with("AB.."));
        assert_eq!(ascii, "AB......AB......");
    }

    #[test]
    fn test_seventeen_bytes_clamped() {
        let data = [0x5Au8; 17];
        let region = Region::new(0x100, &data);
        let output = render(&region, &DumpOptions::default().with_address_width(4));

        assert_eq!(output.len(), 2);
        let (address, hex, ascii) = columns(&output[1]);
        assert_eq!(address, "0110");
        assert_eq!(decode_hex(hex)[0], Some(0x5A));
        assert!(decode_hex(hex)[1..].iter().all(Option::is_none));
        assert_eq!(ascii, "Z...............");
    }

    #[test]
    fn test_seventeen_bytes_padded_reads_slack() {
        let backing: Vec<u8> = (0x40u8..0x60).collect();
        let region = Region::with_slack(0x100, &backing, 17).unwrap();
        let options = DumpOptions::default()
            .with_tail(TailPolicy::Padded)
            .with_address_width(4);
        let output = render(&region, &options);

        assert_eq!(output.len(), 2);
        let (_, hex, ascii) = columns(&output[1]);
        let expected: Vec<Option<u8>> = (0x50u8..0x60).map(Some).collect();
        assert_eq!(decode_hex(hex), expected);
        assert_eq!(ascii, "PQRSTUVWXYZ[\\]^_");
    }

    #[test]
    fn test_person_records() {
        let layout = RecordLayout::new(0xc9f41ff590);
        let memory = layout.build(&Person::pioneers()).unwrap();
        let region = Region::new(layout.base(), memory.as_bytes());
        let output = format_lines(&region, &DumpOptions::default().with_address_width(16));

        assert_eq!(region.len(), 128);
        assert_eq!(output.len(), 8);

        let ascii: Vec<&str> = output.iter().map(|l| columns(l).2).collect();
        assert_eq!(
            ascii,
            vec![
                "................",
                "Bjarne..........",
                "................",
                "Stroustrup......",
                "................",
                "James...........",
                "................",
                "Gosling.........",
            ]
        );
    }

    #[test]
    fn test_person_records_pointer_columns() {
        let layout = RecordLayout::new(0xc9f41ff5b0);
        let memory = layout.build(&Person::pioneers()).unwrap();
        let region = Region::new(layout.base(), memory.as_bytes());
        let output = format_lines(&region, &DumpOptions::default().with_address_width(16));

        assert_eq!(
            output[0],
            "000000c9f41ff5b0  c0 f5 1f f4 c9 00 00 00 06 00 00 00 00 00 00 00  ................"
        );
        assert_eq!(
            output[1],
            "000000c9f41ff5c0  42 6a 61 72 6e 65 00 00 00 00 00 00 00 00 00 00  Bjarne.........."
        );
        assert_eq!(
            output[2],
            "000000c9f41ff5d0  e0 f5 1f f4 c9 00 00 00 0a 00 00 00 00 00 00 00  ................"
        );
        // 0x20 is a printable space
        assert_eq!(
            output[6],
            "000000c9f41ff610  20 f6 1f f4 c9 00 00 00 07 00 00 00 00 00 00 00   ..............."
        );
    }

    #[test]
    fn test_padded_dump_at_top_of_address_space() {
        let base = u64::MAX - 16;
        let memory = MemoryImage::new(base, vec![0x41; 17]);
        let options = DumpOptions::default()
            .with_tail(TailPolicy::Padded)
            .with_address_width(16);
        let dump = dump_memory(&memory, base, 17, &options).unwrap();

        assert_eq!(dump.hex_dump.len(), 2);
        let (address, hex, ascii) = columns(&dump.hex_dump[1]);
        assert_eq!(address, "ffffffffffffffff");
        assert!(hex.starts_with("41 .. .."));
        assert_eq!(ascii, "A...............");
    }

    #[test]
    fn test_lines_report_meaningful_bytes() {
        let data = [0u8; 40];
        let region = Region::new(0, &data);
        let meaningful: Vec<usize> = lines(&region, TailPolicy::Clamp)
            .map(|l| l.meaningful)
            .collect();
        assert_eq!(meaningful, vec![16, 16, 8]);
    }
}
