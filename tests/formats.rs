//! Per-format decoding: P1-P7, headers, comments and error cases.

use enough::Unstoppable;
use zenpnm_stream::*;

fn decode_ok(data: &[u8]) -> DecodedImage {
    decode(data, Unstoppable).unwrap()
}

fn decode_err(data: &[u8]) -> PnmError {
    decode(data, Unstoppable).unwrap_err()
}

/// P1 text and P4 bytes for the same bitmap (`true` = ink = `'1'`).
fn bitmap_twins(rows: &[Vec<bool>]) -> (Vec<u8>, Vec<u8>) {
    let width = rows[0].len();
    let header = format!("{width} {}\n", rows.len());

    let mut p1 = format!("P1\n{header}").into_bytes();
    for row in rows {
        for &ink in row {
            p1.extend_from_slice(if ink { b"1 " } else { b"0 " });
        }
        p1.push(b'\n');
    }

    let mut p4 = format!("P4\n{header}").into_bytes();
    for row in rows {
        for chunk in row.chunks(8) {
            let mut byte = 0u8;
            for (i, &ink) in chunk.iter().enumerate() {
                byte |= u8::from(ink) << (7 - i);
            }
            p4.push(byte);
        }
    }
    (p1, p4)
}

// ── Bitmaps ──────────────────────────────────────────────────────────

#[test]
fn p1_two_pixels() {
    let img = decode_ok(b"P1\n2 1\n0 1\n");
    assert_eq!(img.format, PnmFormat::PbmAscii);
    assert_eq!((img.width, img.height, img.depth, img.maxval), (2, 1, 1, 1));
    assert_eq!(img.tupltype, TupleType::BlackAndWhite);
    assert_eq!(img.data, Samples::U8(vec![1, 0]));
}

#[test]
fn p1_digits_need_no_separators() {
    let img = decode_ok(b"P1\n3 2\n010\n1 1\n1");
    assert_eq!(img.data.as_u8().unwrap(), &[1, 0, 1, 0, 0, 0]);
    assert!(img.data.iter().all(|v| v <= 1));
}

#[test]
fn p1_rejects_other_digits() {
    assert!(matches!(
        decode_err(b"P1\n2 1\n0 2\n"),
        PnmError::InvalidBitmapDigit('2')
    ));
}

#[test]
fn p4_matches_p1_twin() {
    let rows: Vec<Vec<bool>> = (0..5)
        .map(|y| (0..11).map(|x| (x * 7 + y * 3) % 5 < 2).collect())
        .collect();
    let (p1, p4) = bitmap_twins(&rows);
    let ascii = decode_ok(&p1);
    let binary = decode_ok(&p4);
    assert_eq!(binary.format, PnmFormat::PbmBinary);
    assert_eq!(binary.data.len(), 11 * 5);
    assert_eq!(ascii.data, binary.data);
    assert_eq!((ascii.width, ascii.height), (binary.width, binary.height));
}

#[test]
fn p4_set_bit_is_zero() {
    let img = decode_ok(b"P4\n8 1\n\xf0");
    assert_eq!(img.data.as_u8().unwrap(), &[0, 0, 0, 0, 1, 1, 1, 1]);
}

// ── Graymaps and pixmaps ─────────────────────────────────────────────

#[test]
fn p2_two_by_two() {
    let img = decode_ok(b"P2\n2 2\n255\n0 64\n128 255\n");
    assert_eq!((img.width, img.height, img.depth, img.maxval), (2, 2, 1, 255));
    assert_eq!(img.tupltype, TupleType::Grayscale);
    assert_eq!(img.data, Samples::U8(vec![0, 64, 128, 255]));
}

#[test]
fn p2_wide_ascii_samples() {
    let img = decode_ok(b"P2\n3 1\n1000\n0 999 1000\n");
    assert_eq!(img.data, Samples::U16(vec![0, 999, 1000]));
}

#[test]
fn p2_sample_too_big_for_element() {
    assert!(matches!(
        decode_err(b"P2\n1 1\n255\n300\n"),
        PnmError::SampleOverflow { value: 300, bits: 8 }
    ));
}

#[test]
fn p3_interleaves_channels() {
    let img = decode_ok(b"P3\n2 1\n15\n1 2 3 4 5 6\n");
    assert_eq!(img.depth, 3);
    assert_eq!(img.tupltype, TupleType::Rgb);
    assert_eq!(img.sample(1, 0, 0), Some(4));
    assert_eq!(img.sample(1, 0, 2), Some(6));
    assert_eq!(img.sample(2, 0, 0), None);
}

#[test]
fn p5_maxval_255_is_eight_bit() {
    let img = decode_ok(b"P5\n2 1\n255\n\x01\xff");
    assert_eq!(img.data.bits_per_sample(), 8);
    assert_eq!(img.data, Samples::U8(vec![1, 255]));
}

#[test]
fn p5_maxval_256_is_sixteen_bit() {
    let img = decode_ok(b"P5\n2 1\n256\n\x01\x00\x00\xff");
    assert_eq!(img.data.bits_per_sample(), 16);
    assert_eq!(img.data, Samples::U16(vec![256, 255]));
}

#[test]
fn p6_row_major_layout() {
    let mut data = b"P6\n2 2\n255\n".to_vec();
    data.extend(0u8..12);
    let img = decode_ok(&data);
    assert_eq!(img.tupltype, TupleType::Rgb);
    assert_eq!(img.data.as_u8().unwrap(), &(0u8..12).collect::<Vec<_>>()[..]);
    assert_eq!(img.sample(0, 1, 1), Some(7));
}

#[test]
fn binary_samples_can_look_like_whitespace_or_comments() {
    let img = decode_ok(b"P5\n3 1\n255\n# \n");
    assert_eq!(img.data.as_u8().unwrap(), b"# \n");
}

// ── Comments ─────────────────────────────────────────────────────────

#[test]
fn comments_are_elided_everywhere_in_header() {
    let img = decode_ok(b"P2 #c\n# full line\n2#w\n 1 # h\n255#m\n10 # s\n20\n");
    assert_eq!((img.width, img.height, img.maxval), (2, 1, 255));
    assert_eq!(img.data, Samples::U8(vec![10, 20]));
}

#[test]
fn comment_may_hold_non_ascii() {
    let img = decode_ok(b"P5\n# caf\xc3\xa9\n1 1 255\n\x07");
    assert_eq!(img.data, Samples::U8(vec![7]));
}

// ── PAM ──────────────────────────────────────────────────────────────

#[test]
fn p7_tag_order_is_free() {
    let img = decode_ok(
        b"P7\nHEIGHT 1\nTUPLTYPE RGB_ALPHA\nMAXVAL 255\nDEPTH 4\nWIDTH 2\nENDHDR\n\
          \x01\x02\x03\x04\x05\x06\x07\x08",
    );
    assert_eq!((img.width, img.height, img.depth), (2, 1, 4));
    assert_eq!(img.tupltype, TupleType::RgbAlpha);
    assert_eq!(img.sample(1, 0, 3), Some(8));
}

#[test]
fn p7_infers_tuple_type_from_depth() {
    let expected = [
        (0, TupleType::Grayscale),
        (1, TupleType::Grayscale),
        (2, TupleType::GrayscaleAlpha),
        (3, TupleType::Rgb),
        (4, TupleType::RgbAlpha),
        (9, TupleType::RgbAlpha),
    ];
    for (depth, tupltype) in expected {
        let mut data =
            format!("P7\nWIDTH 1\nHEIGHT 1\nDEPTH {depth}\nMAXVAL 255\nENDHDR\n").into_bytes();
        data.extend(core::iter::repeat_n(0u8, depth as usize));
        let img = decode_ok(&data);
        assert_eq!(img.tupltype, tupltype, "depth {depth}");
        assert_eq!(img.data.len(), depth as usize);
    }
}

#[test]
fn p7_keeps_unknown_tuple_type_verbatim() {
    let img = decode_ok(b"P7\nWIDTH 1\nHEIGHT 1\nDEPTH 1\nMAXVAL 1\nTUPLTYPE cmyk_ish\nENDHDR\n\x01");
    assert_eq!(img.tupltype, TupleType::Other("cmyk_ish".into()));
    assert_eq!(img.tupltype.to_string(), "cmyk_ish");
    assert!(!img.tupltype.is_known());
}

#[test]
fn p7_unknown_tags_warn_and_continue() {
    let mut decoder = PnmDecoder::from_slice(
        b"P7\nWIDTH 1\nCOLORSPACE srgb\nHEIGHT 1\nDEPTH 1\nMAXVAL 65535\nENDHDR\n\xab\xcd",
    );
    decoder.decode().unwrap();
    assert_eq!(decoder.data(), &Samples::U16(vec![0xabcd]));
    assert_eq!(
        decoder.ignored_tags(),
        &[IgnoredTag {
            tag: "COLORSPACE".into(),
            value: "srgb".into(),
        }]
    );
}

#[test]
fn p7_without_maxval_is_eight_bit() {
    let img = decode_ok(b"P7\nWIDTH 2\nHEIGHT 1\nDEPTH 1\nENDHDR\n\x05\x06");
    assert_eq!(img.maxval, 0);
    assert_eq!(img.data, Samples::U8(vec![5, 6]));
}

// ── Errors ───────────────────────────────────────────────────────────

#[test]
fn truncated_rasters_fail_with_eof() {
    let cases: [&[u8]; 6] = [
        b"P1\n2 2\n0 1 0",
        b"P2\n2 1\n255\n7",
        b"P4\n9 2\n\x00\x00\x00",
        b"P5\n2 2\n255\n\x00\x01\x02",
        b"P6\n1 1\n65535\n\x00\x01\x02\x03\x04",
        b"P7\nWIDTH 1\nHEIGHT 1\nDEPTH 3\nMAXVAL 255\nENDHDR\n\x01",
    ];
    for data in cases {
        assert!(
            matches!(decode_err(data), PnmError::UnexpectedEof),
            "{:?}",
            String::from_utf8_lossy(data)
        );
    }
}

#[test]
fn huge_dimensions_without_limits_fail_with_eof() {
    let cases: [&[u8]; 3] = [
        b"P5\n4294967295 4294967295\n255\n\x00",
        b"P6\n100000 100000\n65535\n\x00\x01",
        b"P2\n4294967295 2\n255\n1 2 3\n",
    ];
    for data in cases {
        assert!(matches!(decode_err(data), PnmError::UnexpectedEof));
    }
}

#[test]
fn truncated_headers_fail_with_eof() {
    let cases: [&[u8]; 6] = [b"", b"P", b"P5", b"P5\n3", b"P7\nWIDTH 1\n", b"P7\nENDHDR"];
    for data in cases {
        assert!(matches!(decode_err(data), PnmError::UnexpectedEof));
    }
}

#[test]
fn magic_must_be_p_then_digit_one_to_seven() {
    assert!(matches!(decode_err(b"Q5\n"), PnmError::UnknownMagic(_)));
    assert!(matches!(decode_err(b"P8\n1 1\n"), PnmError::UnknownMagic(_)));
    assert!(matches!(decode_err(b"P0 1 1\n"), PnmError::UnknownMagic(_)));
}

#[test]
fn magic_needs_whitespace_separator() {
    assert!(matches!(decode_err(b"P5x1 1 255\n"), PnmError::MalformedHeader(_)));
}

#[test]
fn non_ascii_header_byte() {
    assert!(matches!(decode_err(b"P2\n2 \xfe\n"), PnmError::NonAsciiByte(0xfe)));
}

#[test]
fn malformed_dimensions() {
    match decode_err(b"P2\nwide 2\n255\n") {
        PnmError::MalformedNumber(token) => assert_eq!(token, "wide"),
        other => panic!("expected MalformedNumber, got {other:?}"),
    }
    assert!(matches!(decode_err(b"P6\n-1 2\n255\n"), PnmError::MalformedNumber(_)));
}

#[test]
fn limits_reject_large() {
    let limits = Limits {
        max_pixels: Some(1),
        ..Default::default()
    };
    let result = DecodeRequest::new(b"P5\n1 2\n255\n\x00\x00")
        .with_limits(&limits)
        .decode(Unstoppable);
    match result.unwrap_err() {
        PnmError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[test]
fn memory_limit_counts_sample_width() {
    let limits = Limits {
        max_memory_bytes: Some(2),
        ..Default::default()
    };
    let narrow = DecodeRequest::new(b"P5\n2 1\n255\n\x00\x00")
        .with_limits(&limits)
        .decode(Unstoppable);
    assert!(narrow.is_ok());
    let wide = DecodeRequest::new(b"P5\n2 1\n256\n\x00\x00\x00\x00")
        .with_limits(&limits)
        .decode(Unstoppable);
    assert!(matches!(wide, Err(PnmError::LimitExceeded(_))));
}
