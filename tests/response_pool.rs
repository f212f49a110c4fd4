use std::io::Cursor;

use dualview_bridge::host::read_frame;
use dualview_bridge::ResponsePool;

#[test]
fn zero_appends_writes_nothing() {
    let mut pool = ResponsePool::new();
    let mut out = Vec::new();
    pool.flush_to(&mut out).expect("flush");
    assert!(out.is_empty());
}

#[test]
fn appends_become_one_frame_with_newline_joined_content() {
    let mut pool = ResponsePool::new();
    pool.append("x");
    pool.append("y");

    let mut out = Vec::new();
    pool.flush_to(&mut out).expect("flush");

    // Exactly one frame, holding a JSON envelope.
    let mut cur = Cursor::new(out);
    let payload = read_frame(&mut cur).expect("frame");
    assert_eq!(cur.position() as usize, cur.get_ref().len());

    let envelope: serde_json::Value = serde_json::from_str(&payload).expect("json");
    assert_eq!(envelope["content"], "x\ny\n");
    assert_eq!(envelope["length"], 4);
}

#[test]
fn length_counts_bytes_not_chars() {
    let mut pool = ResponsePool::new();
    pool.append("héllo");

    let mut out = Vec::new();
    pool.flush_to(&mut out).expect("flush");

    let mut cur = Cursor::new(out);
    let payload = read_frame(&mut cur).expect("frame");
    let envelope: serde_json::Value = serde_json::from_str(&payload).expect("json");
    let content = envelope["content"].as_str().unwrap();
    assert_eq!(envelope["length"].as_u64().unwrap() as usize, content.len());
}

#[test]
fn flush_resets_the_pool() {
    let mut pool = ResponsePool::new();
    pool.append("once");

    let mut out = Vec::new();
    pool.flush_to(&mut out).expect("flush");
    assert!(pool.is_empty());

    let mut again = Vec::new();
    pool.flush_to(&mut again).expect("flush");
    assert!(again.is_empty());
}
