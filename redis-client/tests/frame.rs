use redis_client::frame::{Error, Frame};

use std::io::Cursor;

fn parse(input: &[u8]) -> Result<Frame, Error> {
    let mut cursor = Cursor::new(input);
    Frame::check(&mut cursor)?;

    let len = cursor.position() as usize;
    assert_eq!(input.len(), len, "check must consume the whole frame");

    cursor.set_position(0);
    Frame::parse(&mut cursor)
}

#[test]
fn parses_simple_string() {
    match parse(b"+OK\r\n").unwrap() {
        Frame::Simple(s) => assert_eq!("OK", s),
        other => panic!("unexpected frame: {:?}", other),
    }
}

#[test]
fn parses_error_reply() {
    match parse(b"-ERR invalid password\r\n").unwrap() {
        Frame::Error(msg) => assert_eq!("ERR invalid password", msg),
        other => panic!("unexpected frame: {:?}", other),
    }
}

#[test]
fn parses_integer() {
    match parse(b":1000\r\n").unwrap() {
        Frame::Integer(n) => assert_eq!(1000, n),
        other => panic!("unexpected frame: {:?}", other),
    }
}

#[test]
fn parses_bulk_string() {
    match parse(b"$5\r\nhello\r\n").unwrap() {
        Frame::Bulk(data) => assert_eq!(b"hello", &data[..]),
        other => panic!("unexpected frame: {:?}", other),
    }
}

#[test]
fn nil_bulk_is_null() {
    assert!(matches!(parse(b"$-1\r\n").unwrap(), Frame::Null));
}

#[test]
fn parses_array_of_bulks() {
    match parse(b"*2\r\n$3\r\nget\r\n$8\r\nkey_demo\r\n").unwrap() {
        Frame::Array(entries) => {
            assert_eq!(2, entries.len());
            assert!(entries[0] == "get");
            assert!(entries[1] == "key_demo");
        }
        other => panic!("unexpected frame: {:?}", other),
    }
}

#[test]
fn truncated_input_is_incomplete() {
    for input in [
        &b"+OK"[..],
        &b"$5\r\nhel"[..],
        &b"*2\r\n$3\r\nget\r\n"[..],
    ] {
        let mut cursor = Cursor::new(input);
        assert!(matches!(Frame::check(&mut cursor), Err(Error::Incomplete)));
    }
}

#[test]
fn unknown_type_byte_is_a_protocol_error() {
    let mut cursor = Cursor::new(&b"?what\r\n"[..]);
    assert!(matches!(Frame::check(&mut cursor), Err(Error::Other(_))));
}
