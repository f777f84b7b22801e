use readrows::{Dest, FieldDescriptor, Primitive, Record, Value};
use tests::{CursorOp, MockCursor};

#[derive(Debug, Default, PartialEq, Record)]
struct Item {
    id: i64,
    name: String,
}

fn three_rows() -> MockCursor {
    MockCursor::new(&["id", "name"])
        .row([Value::from(1_i64), Value::from("one")])
        .row([Value::from(2_i64), Value::from("two")])
        .row([Value::from(3_i64), Value::from("three")])
}

#[test]
fn row_failure_keeps_earlier_rows() {
    let cursor = three_rows().fail_scan_at(2);
    let log = cursor.log();

    let mut items: Vec<Item> = vec![];
    let err = readrows::scan(&mut items, cursor).unwrap_err();

    assert_eq!(err.to_string(), "scan failed at row 2");
    assert_eq!(
        items,
        vec![Item {
            id: 1,
            name: "one".into()
        }]
    );
    assert_eq!(log.scan_count(), 2);
    assert_eq!(log.close_count(), 1);
}

#[test]
fn column_failure_is_propagated_and_closes() {
    let cursor = three_rows().fail_columns();
    let log = cursor.log();

    let mut items: Vec<Item> = vec![];
    let err = readrows::scan(&mut items, cursor).unwrap_err();

    assert_eq!(err.to_string(), "columns unavailable");
    assert!(items.is_empty());
    assert_eq!(log.ops(), vec![CursorOp::Columns, CursorOp::Close]);
}

#[test]
fn conversion_failure_stops_the_scan() {
    let cursor = MockCursor::new(&["id", "name"])
        .row([Value::from(1_i64), Value::from("one")])
        .row([Value::from("two"), Value::from("two")]);
    let log = cursor.log();

    let mut items: Vec<Item> = vec![];
    let err = readrows::scan(&mut items, cursor).unwrap_err();

    assert!(err.is_type_conversion());
    assert_eq!(items.len(), 1);
    assert_eq!(log.close_count(), 1);
}

/// A hand written record whose `bind` forgot a field.
#[derive(Debug, Default)]
#[allow(dead_code)]
struct Lopsided {
    id: i64,
    name: String,
}

impl Record for Lopsided {
    fn describe(fields: &mut Vec<FieldDescriptor>) {
        fields.push(FieldDescriptor::new("id"));
        fields.push(FieldDescriptor::new("name"));
    }

    fn bind<'a>(&'a mut self, slots: &mut Vec<&'a mut dyn Dest>) {
        slots.push(&mut self.id);
    }
}

readrows::impl_element!(Lopsided);

#[test]
fn record_binding_mismatch_is_rejected_before_reading() {
    let cursor = three_rows();
    let log = cursor.log();

    let mut rows: Vec<Box<Lopsided>> = vec![];
    let err = readrows::scan(&mut rows, cursor).unwrap_err();

    assert!(err.is_invalid_record());
    assert!(
        err.to_string()
            .ends_with("Lopsided`: record describes 2 fields but binds 1"),
        "{err}"
    );
    assert!(!log.read_any_row());
    assert_eq!(log.close_count(), 1);
    assert!(rows.is_empty());
}

#[derive(Debug, Default)]
struct Bomb;

impl Primitive for Bomb {
    fn load(_value: Value) -> readrows::Result<Self> {
        panic!("boom");
    }
}

#[derive(Debug, Default, Record)]
struct Exploding {
    #[allow(dead_code)]
    id: Bomb,
}

#[test]
fn cursor_is_closed_when_scan_panics() {
    let cursor = three_rows();
    let log = cursor.log();

    let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
        let mut rows: Vec<Exploding> = vec![];
        let _ = readrows::scan(&mut rows, cursor);
    }));

    assert!(res.is_err());
    assert_eq!(log.close_count(), 1);
}
