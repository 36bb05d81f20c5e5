use std::io::{self, Read};

use crate::test_utils::FullDisk;
use crate::{ArraySpec, ByteStream, Dialect, Error};

const ALL: [Dialect; 3] = [Dialect::C, Dialect::Go, Dialect::Rust];

fn emit(dialect: Dialect, spec: &ArraySpec, data: &[u8]) -> String {
    let mut stream = ByteStream::new(data, data.len() as u64);
    let mut out = Vec::new();
    let written = dialect.emit(spec, &mut stream, &mut out).unwrap();
    assert_eq!(written, data.len() as u64);
    String::from_utf8(out).unwrap()
}

fn data_spec() -> ArraySpec {
    ArraySpec::new("data", "unsigned char")
}

/// Lines between the opening line of the array and its closing line.
fn body(output: &str) -> Vec<&str> {
    let lines: Vec<&str> = output.lines().collect();
    let open = lines
        .iter()
        .position(|l| l.ends_with('{') || l.ends_with('['))
        .expect("no opening line");
    lines[open + 1..lines.len() - 1].to_vec()
}

fn elements(output: &str) -> Vec<String> {
    body(output)
        .iter()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect()
}

fn comma_count(output: &str) -> usize {
    body(output).iter().map(|l| l.matches(',').count()).sum()
}

#[test]
fn c_two_bytes() {
    let out = emit(Dialect::C, &data_spec(), &[0x41, 0x42]);
    assert_eq!(
        out,
        "const size_t data_sz = 2;\n\
         unsigned char data[data_sz] = {\n\
         \t0x41,0x42\n\
         };\n"
    );
}

#[test]
fn c_null_terminated() {
    let spec = data_spec().null_terminate(true);
    let out = emit(Dialect::C, &spec, &[0x41, 0x42]);
    assert_eq!(
        out,
        "const size_t data_sz = 3;\n\
         unsigned char data[data_sz] = {\n\
         \t0x41,0x42,\n\
         \t0\n\
         };\n"
    );
}

#[test]
fn c_empty_input() {
    let out = emit(Dialect::C, &data_spec(), &[]);
    assert_eq!(
        out,
        "const size_t data_sz = 0;\n\
         unsigned char data[data_sz] = {\n\
         };\n"
    );
}

#[test]
fn c_empty_input_null_terminated() {
    let spec = data_spec().null_terminate(true);
    let out = emit(Dialect::C, &spec, &[]);
    assert_eq!(
        out,
        "const size_t data_sz = 1;\n\
         unsigned char data[data_sz] = {\n\
         \t0\n\
         };\n"
    );
}

#[test]
fn c_custom_name_and_type() {
    let spec = ArraySpec::new("font_bin", "const uint8_t");
    assert_eq!(spec.name(), "font_bin");
    assert_eq!(spec.elem_type(), "const uint8_t");
    let out = emit(Dialect::C, &spec, &[0xff]);
    assert_eq!(
        out,
        "const size_t font_bin_sz = 1;\n\
         const uint8_t font_bin[font_bin_sz] = {\n\
         \t0xff\n\
         };\n"
    );
}

#[test]
fn go_two_bytes() {
    let spec = ArraySpec::new("data", "byte");
    let out = emit(Dialect::Go, &spec, &[0x41, 0x42]);
    assert_eq!(
        out,
        "var data = [2]byte{\n\
         \t0x41,0x42,\n\
         }\n"
    );
}

#[test]
fn go_null_terminated() {
    let spec = ArraySpec::new("data", "byte").null_terminate(true);
    let out = emit(Dialect::Go, &spec, &[0x41, 0x42]);
    assert_eq!(
        out,
        "var data = [3]byte{\n\
         \t0x41,0x42,\n\
         \t0x00,\n\
         }\n"
    );
}

#[test]
fn go_empty_input() {
    let spec = ArraySpec::new("data", "byte");
    let out = emit(Dialect::Go, &spec, &[]);
    assert_eq!(out, "var data = [0]byte{\n}\n");
}

#[test]
fn rust_two_bytes() {
    let spec = ArraySpec::new("DATA", "u8");
    let out = emit(Dialect::Rust, &spec, &[0x41, 0x42]);
    assert_eq!(
        out,
        "pub const DATA: [u8; 2] = [\n\
         \t0x41,0x42,\n\
         ];\n"
    );
}

#[test]
fn rust_null_terminated() {
    let spec = ArraySpec::new("DATA", "u8").null_terminate(true);
    let out = emit(Dialect::Rust, &spec, &[0x41]);
    assert_eq!(
        out,
        "pub const DATA: [u8; 2] = [\n\
         \t0x41,\n\
         \t0x00,\n\
         ];\n"
    );
}

#[test]
fn rows_hold_sixteen_elements_by_default() {
    let data: Vec<u8> = (0..17).collect();
    let out = emit(Dialect::C, &data_spec(), &data);
    let rows = body(&out);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].matches("0x").count(), 16);
    assert!(rows[0].ends_with(','));
    assert_eq!(rows[1], "\t0x10");
}

#[test]
fn columns_change_layout_only() {
    let data: Vec<u8> = (0..10).collect();
    for dialect in ALL {
        let wide = emit(dialect, &data_spec(), &data);
        let narrow = emit(dialect, &data_spec().columns(3), &data);

        assert_eq!(body(&narrow).len(), 4);
        assert_eq!(elements(&wide), elements(&narrow));
        assert_eq!(comma_count(&wide), comma_count(&narrow));
    }
}

#[test]
fn zero_columns_clamped_to_one() {
    let spec = data_spec().columns(0);
    let out = emit(Dialect::C, &spec, &[1, 2, 3]);
    assert_eq!(body(&out), vec!["\t0x01,", "\t0x02,", "\t0x03"]);
}

#[test]
fn every_byte_is_two_lowercase_hex_digits() {
    let data: Vec<u8> = (0..=255).collect();
    for dialect in ALL {
        let out = emit(dialect, &data_spec(), &data);
        let elems = elements(&out);

        assert_eq!(elems.len(), 256);
        for (byte, elem) in data.iter().zip(&elems) {
            assert_eq!(elem, &format!("0x{byte:02x}"));
        }
    }
    assert!(elements(&emit(Dialect::C, &data_spec(), &[10]))[0] == "0x0a");
}

#[test]
fn comma_and_count_properties() {
    for len in 0..40u8 {
        let data: Vec<u8> = (0..len).map(|b| b.wrapping_mul(37)).collect();
        for columns in [1, 5, 16] {
            for null_terminate in [false, true] {
                let spec = data_spec().columns(columns).null_terminate(null_terminate);
                let count = len as usize + usize::from(null_terminate);

                let c = emit(Dialect::C, &spec, &data);
                assert!(c.starts_with(&format!("const size_t data_sz = {count};\n")));
                assert_eq!(elements(&c).len(), count);
                assert_eq!(comma_count(&c), count.saturating_sub(1));
                if count > 0 {
                    assert!(!body(&c).last().unwrap().ends_with(','));
                }

                let go = emit(Dialect::Go, &spec, &data);
                assert!(go.starts_with(&format!("var data = [{count}]unsigned char{{\n")));
                assert_eq!(elements(&go).len(), count);
                assert_eq!(comma_count(&go), count);

                let rs = emit(Dialect::Rust, &spec, &data);
                assert!(rs.starts_with(&format!("pub const data: [unsigned char; {count}] = [\n")));
                assert_eq!(elements(&rs).len(), count);
                assert_eq!(comma_count(&rs), count);
            }
        }
    }
}

#[test]
fn element_count_includes_terminator() {
    assert_eq!(data_spec().element_count(5), 5);
    assert_eq!(data_spec().null_terminate(true).element_count(5), 6);
    assert_eq!(data_spec().null_terminate(true).element_count(0), 1);
}

struct FailAfter {
    data: &'static [u8],
}

impl Read for FailAfter {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::other("device unplugged"));
        }
        self.data.read(buf)
    }
}

#[test]
fn read_fault_aborts_before_footer() {
    let mut stream = ByteStream::new(FailAfter { data: b"AB" }, 4);
    let mut out = Vec::new();
    let err = Dialect::C
        .emit(&data_spec(), &mut stream, &mut out)
        .unwrap_err();

    assert!(matches!(err, Error::StreamRead(_)));
    insta::assert_snapshot!(err.to_string(), @"error reading input: device unplugged");

    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("const size_t data_sz = 4;\n"));
    assert!(!out.contains("};"));
}

#[test]
fn short_stream_is_length_mismatch() {
    let data = [1u8, 2];
    let mut stream = ByteStream::new(&data[..], 3);
    let mut out = Vec::new();
    let err = Dialect::Go
        .emit(&data_spec(), &mut stream, &mut out)
        .unwrap_err();

    assert!(matches!(
        err,
        Error::LengthMismatch {
            declared: 3,
            actual: 2
        }
    ));
    assert!(!String::from_utf8(out).unwrap().ends_with("}\n"));
}

#[test]
fn write_fault_is_output_error() {
    let data = [1u8];
    let mut stream = ByteStream::new(&data[..], 1);
    let err = Dialect::Rust
        .emit(&data_spec(), &mut stream, &mut FullDisk)
        .unwrap_err();

    assert!(matches!(err, Error::OutputWrite(_)));
    insta::assert_snapshot!(err.to_string(), @"failed writing output: no space left");
}
