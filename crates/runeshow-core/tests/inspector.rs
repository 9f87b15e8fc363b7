use runeshow_core::text::utf8::{is_valid_utf8, utf8_positions};
use runeshow_core::text::{REPLACEMENT_RUNE, Rune, format_unicode, rune_len, valid_rune};

#[test]
fn well_formed_input_yields_one_pair_per_unit() {
    let text = "Hello, 世界 💩";
    let bytes = text.as_bytes();
    assert!(is_valid_utf8(bytes));

    let pairs: Vec<(usize, Rune)> = utf8_positions(bytes).collect();
    assert_eq!(pairs.len(), text.chars().count());

    let mut expected_offset = 0;
    for ((offset, rune), ch) in pairs.iter().zip(text.chars()) {
        assert_eq!(*offset, expected_offset);
        assert_eq!(*rune, ch as Rune);
        expected_offset += rune_len(*rune).expect("valid rune");
    }
    assert_eq!(expected_offset, bytes.len());
}

#[test]
fn any_malformed_byte_makes_input_invalid() {
    for bad in [0x80u8, 0xC0, 0xC1, 0xF5, 0xFE, 0xFF] {
        let bytes = [b'o', b'k', bad, b'!'];
        assert!(!is_valid_utf8(&bytes), "byte 0x{bad:02x}");
        assert!(utf8_positions(&bytes).any(|(_, rune)| rune == REPLACEMENT_RUNE));
    }
}

#[test]
fn invalid_lead_then_terminator() {
    let pairs: Vec<_> = utf8_positions(&[0xFF, 0x00]).collect();
    assert_eq!(pairs, vec![(0, REPLACEMENT_RUNE), (1, 0)]);
}

#[test]
fn nihongo_scenario() {
    let bytes = "日本語".as_bytes();
    assert!(is_valid_utf8(bytes));
    let pairs: Vec<_> = utf8_positions(bytes).collect();
    assert_eq!(pairs, vec![(0, 0x65E5), (3, 0x672C), (6, 0x8A9E)]);
}

#[test]
fn encoded_surrogate_scenario() {
    let bytes = [0xED, 0xA0, 0xBD, 0x00];
    assert!(!is_valid_utf8(&bytes));
    let pairs: Vec<_> = utf8_positions(&bytes).collect();
    assert_eq!(
        pairs,
        vec![
            (0, REPLACEMENT_RUNE),
            (1, REPLACEMENT_RUNE),
            (2, REPLACEMENT_RUNE),
            (3, 0)
        ]
    );
}

#[test]
fn out_of_domain_runes_are_representable() {
    let surrogate: Rune = 0xD83D;
    let out_of_range: Rune = 0xFFFFFFF;
    assert_eq!(surrogate.to_string(), "55357");
    assert_eq!(out_of_range.to_string(), "268435455");
    assert!(!valid_rune(surrogate));
    assert!(!valid_rune(out_of_range));
    assert_eq!(format_unicode(surrogate), "U+D83D");
    assert_eq!(format_unicode(out_of_range), "U+FFFFFFF");
}

#[test]
fn every_byte_is_accounted_for() {
    let bytes = b"\xe6\x97\xa5\xff\xe6\x97a\xf0\x9f\x92\xa9\xc0";
    let mut covered = vec![false; bytes.len()];
    let mut positions = utf8_positions(bytes);
    while let Some(step) = positions.next_step() {
        for slot in &mut covered[step.offset..step.offset + step.width] {
            assert!(!*slot, "byte covered twice");
            *slot = true;
        }
    }
    assert!(covered.into_iter().all(|seen| seen));
}
