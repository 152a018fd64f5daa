//! Switching the process-wide default driver.
//!
//! This is the only test in the crate that mutates the global registry, so it
//! lives in its own test binary.

use sqlf::{MarkDriver, NumberedDriver, Registry, args, format, set_default_driver};

#[test]
fn default_driver_switch_affects_only_unpinned_builders() {
    let inner = format("name = %p", args!["Tom"]);
    let q = format(
        "SELECT id FROM table WHERE status = %p AND %s LIMIT %p, OFFSET %p",
        args!["active", inner, 10, 0],
    );
    let pinned = format("id = %p", args![1]).with_driver(NumberedDriver::new());
    let pinned_mark = format("id = %p", args![1]).with_driver(MarkDriver::mysql());

    assert_eq!(
        q.to_sql().unwrap(),
        "SELECT id FROM table WHERE status = $1 AND name = $2 LIMIT $3, OFFSET $4"
    );

    set_default_driver("mysql").unwrap();
    assert_eq!(Registry::global().default_name(), "mysql");
    assert_eq!(
        q.to_sql().unwrap(),
        "SELECT id FROM table WHERE status = ? AND name = ? LIMIT ?, OFFSET ?"
    );
    assert_eq!(q.params().unwrap(), args!["active", "Tom", 10, 0]);
    assert_eq!(pinned.to_sql().unwrap(), "id = $1");

    let err = set_default_driver("oracle").unwrap_err();
    assert!(err.is_unknown_driver());
    assert_eq!(Registry::global().default_name(), "mysql");

    set_default_driver("postgres").unwrap();
    assert_eq!(
        q.to_sql().unwrap(),
        "SELECT id FROM table WHERE status = $1 AND name = $2 LIMIT $3, OFFSET $4"
    );
    assert_eq!(pinned_mark.to_sql().unwrap(), "id = ?");
}
