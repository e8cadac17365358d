mod common;
use basic::mach::Runtime;
use common::*;

fn fires(relation: &str, a: i32, b: i32) -> bool {
    let mut r = Runtime::default();
    r.enter("10 LET F = 0");
    r.enter(&format!("20 IF {} {} {} THEN 40", a, relation, b));
    r.enter("30 END");
    r.enter("40 LET F = 1");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "");
    r.enter("PRINT F");
    match exec(&mut r).as_str() {
        "1\n" => true,
        "0\n" => false,
        other => panic!("{}", other),
    }
}

#[test]
fn test_if_relations_signed() {
    let values = [-3, -1, 0, 2, 7];
    for &a in &values {
        for &b in &values {
            assert_eq!(fires("=", a, b), a == b);
            assert_eq!(fires("<", a, b), a < b);
            assert_eq!(fires(">", a, b), a > b);
            assert_eq!(fires("<=", a, b), a <= b);
            assert_eq!(fires(">=", a, b), a >= b);
            assert_eq!(fires("<>", a, b), a != b);
        }
    }
}

#[test]
fn test_if_expressions_on_both_sides() {
    let mut r = Runtime::default();
    r.enter("10 LET A = 4");
    r.enter("20 IF A * 2 = A + 4 THEN 50");
    r.enter("30 PRINT 0");
    r.enter("40 END");
    r.enter("50 PRINT 1");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "1\n");
}

#[test]
fn test_if_false_ignores_missing_target() {
    let mut r = Runtime::default();
    r.enter("10 IF 1 = 2 THEN 500");
    r.enter("20 PRINT 20");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "20\n");
    r.enter("10 IF 1 = 1 THEN 500");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "LINE NUMBER ERROR\n");
}

#[test]
fn test_direct_if_runs_from_target() {
    let mut r = Runtime::default();
    r.enter("10 PRINT 10");
    r.enter("20 PRINT 20");
    r.enter("if 1 < 2 then 20");
    assert_eq!(exec(&mut r), "20\n");
    r.enter("IF 2 < 1 THEN 20");
    assert_eq!(exec(&mut r), "");
    r.enter("IF 1 < 2 THEN 30");
    assert_eq!(exec(&mut r), "LINE NUMBER ERROR\n");
}

#[test]
fn test_if_syntax() {
    let mut r = Runtime::default();
    assert_eq!(
        enter_all(
            &mut r,
            &["IF 1 THEN 10", "IF 1 = 1", "IF 1 = 1 THEN", "IF 1 = 1 THEN 10 20", "IF 1 = 1 THEN X"]
        ),
        "SYNTAX ERROR\nSYNTAX ERROR\nSYNTAX ERROR\nSYNTAX ERROR\nSYNTAX ERROR\n"
    );
}
