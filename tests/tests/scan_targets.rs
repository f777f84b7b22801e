use pretty_assertions::assert_eq;
use readrows::{Element, ElementKind, Record, Value};
use tests::{CursorOp, MockCursor};

#[derive(Debug, Default, PartialEq, Record)]
struct Item {
    id: i64,
    name: String,
}

fn cursor() -> MockCursor {
    MockCursor::new(&["id", "name"])
        .row([Value::from(1_i64), Value::from("one")])
        .row([Value::from(2_i64), Value::from("two")])
}

#[test]
fn element_kind_follows_container() {
    assert_eq!(<Item as Element>::KIND, ElementKind::Value);
    assert_eq!(<Box<Item> as Element>::KIND, ElementKind::Boxed);
}

#[test]
fn scan_into_boxes() {
    let mut items: Vec<Box<Item>> = vec![];
    readrows::scan(&mut items, cursor()).unwrap();

    assert_eq!(
        items,
        vec![
            Box::new(Item {
                id: 1,
                name: "one".into()
            }),
            Box::new(Item {
                id: 2,
                name: "two".into()
            }),
        ]
    );
}

#[test]
fn unknown_columns_are_skipped() {
    let cursor = MockCursor::new(&["extra", "id", "blob", "name"]).row([
        Value::Bytes(vec![0xde, 0xad]),
        Value::from(5_i64),
        Value::Null,
        Value::from("five"),
    ]);
    let log = cursor.log();

    let items: Vec<Item> = readrows::collect(cursor).unwrap();

    assert_eq!(
        items,
        vec![Item {
            id: 5,
            name: "five".into()
        }]
    );
    assert_eq!(
        log.ops(),
        vec![
            CursorOp::Columns,
            CursorOp::Next,
            CursorOp::Scan { bound: 2 },
            CursorOp::Next,
            CursorOp::Close,
        ]
    );
}

#[test]
fn repeated_column_binds_last_occurrence() {
    let cursor = MockCursor::new(&["id", "name", "id"]).row([
        Value::from(1_i64),
        Value::from("x"),
        Value::from(2_i64),
    ]);
    let log = cursor.log();

    let items: Vec<Item> = readrows::collect(cursor).unwrap();

    assert_eq!(items[0].id, 2);
    assert_eq!(log.ops()[2], CursorOp::Scan { bound: 2 });
}

#[test]
fn cursor_is_closed_once_on_success() {
    let cursor = cursor();
    let log = cursor.log();

    let items: Vec<Item> = readrows::collect(cursor).unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(log.scan_count(), 2);
    assert_eq!(log.close_count(), 1);
}

#[derive(Debug, Default, PartialEq, Record)]
struct Marker {}

#[test]
fn record_without_fields_yields_one_record_per_row() {
    let cursor = MockCursor::new(&["id"])
        .row([Value::from(1_i64)])
        .row([Value::from(2_i64)]);
    let log = cursor.log();

    let mut markers: Vec<Marker> = vec![];
    readrows::scan(&mut markers, cursor).unwrap();

    assert_eq!(markers, vec![Marker {}, Marker {}]);
    assert_eq!(
        log.ops(),
        vec![
            CursorOp::Columns,
            CursorOp::Next,
            CursorOp::Scan { bound: 0 },
            CursorOp::Next,
            CursorOp::Scan { bound: 0 },
            CursorOp::Next,
            CursorOp::Close,
        ]
    );
    assert_eq!(log.close_count(), 1);
}
