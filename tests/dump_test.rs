mod common;
use common::*;
use vardump::mach::{Dump, Event, Options};
use vardump::ErrorCode;

const HEADER_LINES: usize = 6;

fn minimal() -> Memory {
    let mut m = Memory::new(0x210);
    m.header([0x0801, 0x100, 0x107, 0x107, 0x200, 0x200, 0x210])
        .poke(0x100, &[0xC9, 0x80, 0x00, 0x2A, 0, 0, 0]);
    m
}

#[test]
fn test_minimal_image() {
    let events = Dump::new(minimal().bytes(), Options::default())
        .events()
        .unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(events[1].to_string(), "I% = 42");
    match &events[2] {
        Event::Garbage(g) => {
            assert_eq!(g.range, 0x200..0x210);
            assert_eq!(g.text, "\0".repeat(16));
        }
        e => panic!("{:?}", e),
    }
}

#[test]
fn test_header_lines() {
    let (lines, error) = report(minimal().bytes(), Options::default());
    assert!(error.is_none());
    assert_eq!(
        lines[..HEADER_LINES],
        [
            "Beginning of BASIC program is at $0801.",
            "Variables begin at $0100.",
            "Array variables begin at $0107.",
            "Array variables end at $0107.",
            "Top of string stack is $0200.",
            "End of BASIC memory is $0210.",
        ]
    );
    assert_eq!(lines[HEADER_LINES], "I% = 42");
    assert!(lines[HEADER_LINES + 1].starts_with("String Heap Garbage [$0200:$0210]: \""));
    assert_eq!(lines.len(), HEADER_LINES + 2);
}

#[test]
fn test_load_address_prefix() {
    let mut bytes = vec![0x01, 0x08];
    bytes.extend(minimal().bytes());
    let options = Options {
        load_address: true,
        ..Options::default()
    };
    let (prefixed, error) = report(bytes, options);
    assert!(error.is_none());
    let (plain, _) = report(minimal().bytes(), Options::default());
    assert_eq!(prefixed, plain);
}

fn program() -> Memory {
    let mut m = Memory::new(0x400);
    m.header([0x0801, 0x100, 0x123, 0x150, 0x380, 0x380, 0x400])
        .fill(0x380, 0x80, b' ')
        .poke(0x050, b"ABC")
        .poke(0x3E0, b"YOU")
        .poke(0x3E3, b"OLD")
        .poke(0x3F0, b"HELLO");
    let mut x = vec![0x58, 0x00];
    x.extend_from_slice(&encode_float(3.0));
    m.poke(0x100, &[0xC9, 0x80, 0x00, 0x2A, 0, 0, 0])
        .poke(0x107, &x)
        .poke(0x10E, &[0x41, 0x80, 5, 0xF0, 0x03, 0, 0])
        .poke(0x115, &[0x42, 0x80, 3, 0x50, 0x00, 0, 0])
        .poke(0x11C, &[0xC6, 0x00, 0x50, 0x08, 0x20, 0x08, 0x00]);
    m.poke(0x123, &[0x53, 0x80, 13, 0, 1, 0x00, 0x02, 3, 0xE0, 0x03, 0, 0, 0])
        .poke(
            0x130,
            &[0xCE, 0x80, 13, 0, 1, 0x00, 0x03, 0x00, 0x01, 0x00, 0x02, 0xFF, 0xFE],
        );
    // DIM F(1) plus two stray bytes past the last element
    let mut f = vec![0x46, 0x00, 19, 0, 1, 0x00, 0x02];
    f.extend_from_slice(&encode_float(1.5));
    f.extend_from_slice(&encode_float(-0.25));
    f.extend_from_slice(&[0xAA, 0xBB]);
    m.poke(0x13D, &f);
    m
}

#[test]
fn test_program() {
    let (lines, error) = report(program().bytes(), Options::default());
    assert!(error.is_none(), "{:?}", error);
    let expected = vec![
        "I% = 42".to_string(),
        "X = 3.000000E+00".to_string(),
        "A$ [$03F0, 5] = \"HELLO\"*".to_string(),
        "B$ [$0050, 3] = \"ABC\"".to_string(),
        "DEF FN F @ $011C = DEF@$0850 VAR@$0820 $00".to_string(),
        "S$ (1) : 13 bytes at $0123 = [\"YOU\"*, \"\"]".to_string(),
        "N% (2) : 13 bytes at $0130".to_string(),
        "F (1) : 19 bytes at $013D".to_string(),
        format!("String Heap Garbage [$0380:$03E0]: \"{}\"", " ".repeat(0x60)),
        format!("String Heap Garbage [$03E3:$03F0]: \"OLD{}\"", " ".repeat(10)),
        format!("String Heap Garbage [$03F5:$0400]: \"{}\"", " ".repeat(11)),
    ];
    assert_eq!(lines[HEADER_LINES..], expected[..]);
}

#[test]
fn test_program_elements() {
    let options = Options {
        elements: true,
        ..Options::default()
    };
    let (lines, error) = report(program().bytes(), options);
    assert!(error.is_none(), "{:?}", error);
    assert!(lines.contains(&"N% (2) : 13 bytes at $0130 = [1, 2, -2]".to_string()));
    assert!(lines.contains(
        &"F (1) : 19 bytes at $013D = [1.500000E+00, -2.500000E-01]".to_string()
    ));
}

#[test]
fn test_garbage_follows_claims() {
    let events = Dump::new(program().bytes(), Options::default())
        .events()
        .unwrap();
    let garbage: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            Event::Garbage(g) => Some(g.range.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(garbage, [0x380..0x3E0, 0x3E3..0x3F0, 0x3F5..0x400]);
}

#[test]
fn test_non_ascii_garbage() {
    let mut m = minimal();
    m.poke(0x200, &[0x48, 0xC9, 0x21]);
    let (lines, _) = report(m.bytes(), Options::default());
    assert!(lines[HEADER_LINES + 1].starts_with("String Heap Garbage [$0200:$0210]: \"H\u{FFFD}!"));
}

#[test]
fn test_truncated_string_stops_session() {
    let mut m = minimal();
    m.header([0x0801, 0x100, 0x10E, 0x10E, 0x200, 0x200, 0x210])
        .poke(0x107, &[0x41, 0x80, 0x20, 0xF8, 0x01, 0, 0]);
    let (lines, error) = report(m.bytes(), Options::default());
    let error = error.unwrap();
    assert_eq!(error.code(), ErrorCode::TruncatedImage);
    assert_eq!(error.address(), Some(0x1F8));
    assert_eq!(lines.len(), HEADER_LINES + 1);
    assert_eq!(lines[HEADER_LINES], "I% = 42");
}

#[test]
fn test_strict_layout() {
    let mut m = minimal();
    m.header([0x0801, 0x100, 0x107, 0x107, 0x220, 0x220, 0x210]);
    let strict = Options {
        strict: true,
        ..Options::default()
    };
    let (lines, error) = report(m.bytes(), strict);
    assert_eq!(error.unwrap().code(), ErrorCode::InconsistentLayout);
    assert!(lines.is_empty());
    let (lines, error) = report(m.bytes(), Options::default());
    assert!(error.is_none());
    assert_eq!(lines.len(), HEADER_LINES + 1);
}

#[test]
fn test_memory_size_past_image() {
    let mut m = minimal();
    m.header([0x0801, 0x100, 0x107, 0x107, 0x200, 0x200, 0x400]);
    let mut seen = vec![];
    let error = Dump::new(m.bytes(), Options::default())
        .analyse(|event| seen.push(event))
        .unwrap_err();
    assert_eq!(error.code(), ErrorCode::TruncatedImage);
    assert_eq!(error.address(), Some(0x210));
    assert_eq!(seen.len(), 2);
    assert!(seen.iter().all(|e| !matches!(e, Event::Garbage(_))));
}
