#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // ASCII bitmap / graymap / pixmap
    fs::write(format!("{dir}/p1_2x1.pbm"), b"P1\n2 1\n0 1\n").unwrap();
    fs::write(format!("{dir}/p2_2x2.pgm"), b"P2\n2 2\n255\n0 64\n128 255\n").unwrap();
    fs::write(format!("{dir}/p3_1x1_comment.ppm"), b"P3\n# c\n1 1\n65535\n1 2 3\n").unwrap();

    // Binary bitmap, 9 pixels wide so rows straddle a byte
    fs::write(format!("{dir}/p4_9x2.pbm"), b"P4\n9 2\n\xaa\x80\x55\x00").unwrap();

    // PGM 3x2, 8-bit and 16-bit
    fs::write(format!("{dir}/p5_3x2.pgm"), b"P5\n3 2\n255\n\x00\x40\x80\xc0\xff\x64").unwrap();
    fs::write(format!("{dir}/p5_1x1_wide.pgm"), b"P5\n1 1\n256\n\x01\x00").unwrap();

    // PPM 2x2
    let ppm = b"P6\n2 2\n255\n\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80";
    fs::write(format!("{dir}/p6_2x2.ppm"), ppm).unwrap();

    // PAM with tags out of order, an unknown tag, and no TUPLTYPE
    let pam = b"P7\nHEIGHT 1\nWIDTH 1\nFOO bar\nDEPTH 2\nMAXVAL 255\nENDHDR\n\xff\x00";
    fs::write(format!("{dir}/p7_ga_1x1.pam"), pam).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p6.bin"), b"P6").unwrap();
    fs::write(format!("{dir}/p8.bin"), b"P8\n").unwrap();
    fs::write(format!("{dir}/open_comment.bin"), b"P2\n# never ends").unwrap();
    fs::write(format!("{dir}/p7_no_endhdr.bin"), b"P7\nWIDTH 1\nHEIGHT 1\n").unwrap();

    println!("Generated seed corpus in {dir}/");
}
