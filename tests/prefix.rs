// End-to-end: lines written through the decorator carry whatever prefix
// the most recent set_level installed.

use sysdlog::{Level, LevelLogger, LineLogger};

#[test]
fn lines_carry_the_active_prefix() {
    let mut log = LevelLogger::new(LineLogger::new(Vec::new()));

    log.set_level(Level::Info);
    log.print("listening on 127.0.0.1:9501").unwrap();

    log.show_name(true);
    log.set_level(Level::Err);
    log.print("bind failed").unwrap();
    log.print("retrying").unwrap();

    log.show_name(false);
    log.set_level(Level::Debug);
    log.print("poll tick").unwrap();

    let out = String::from_utf8(log.into_inner().into_inner()).unwrap();
    assert_eq!(
        out,
        "<6>listening on 127.0.0.1:9501\n\
         <3>ERR bind failed\n\
         <3>ERR retrying\n\
         <7>poll tick\n"
    );
}

#[test]
fn decorator_does_not_write_on_level_change() {
    let mut log = LevelLogger::new(LineLogger::new(Vec::new()));
    log.set_level(Level::Crit);
    log.set_level(Level::Notice);
    assert!(log.into_inner().into_inner().is_empty());
}

#[test]
fn wrapped_logger_stays_reachable() {
    let mut log = LevelLogger::new(LineLogger::new(Vec::new()));
    log.set_level(Level::Warning);
    // external code holding the wrapped logger can still reconfigure it
    log.inner_mut().set_prefix("raw: ");
    log.print("bypassed").unwrap();
    assert_eq!(log.into_inner().into_inner(), b"raw: bypassed\n");
}
