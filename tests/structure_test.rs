use smpl::compiler::err::CompileError;
use smpl::{check_structure, scan};

#[test]
fn test_balanced() {
    assert!(check_structure(&scan("")).is_ok());
    assert!(check_structure(&scan("+[-]")).is_ok());
    assert!(check_structure(&scan("++[>[+<-]>[-]<]")).is_ok());
}

#[test]
fn test_stray_loop_end() {
    match check_structure(&scan("]")) {
        Err(CompileError::UnmatchedLoopEnd { index }) => assert_eq!(index, 0),
        other => panic!("unexpected result: {other:?}"),
    }
    match check_structure(&scan("+[-]]+[")) {
        Err(CompileError::UnmatchedLoopEnd { index }) => assert_eq!(index, 4),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_unclosed_loop_begin() {
    match check_structure(&scan("+[[-]>[")) {
        Err(CompileError::UnclosedLoopBegin { index, count }) => {
            assert_eq!(index, 1);
            assert_eq!(count, 2);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_comments_do_not_shift_indexes() {
    match check_structure(&scan("a loop [ that ] ends ] twice")) {
        Err(CompileError::UnmatchedLoopEnd { index }) => assert_eq!(index, 2),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_error_messages() {
    let error = check_structure(&scan("]")).unwrap_err();
    assert_eq!(error.to_string(), "unmatched `]` at instruction 0");
    let error = check_structure(&scan("[[")).unwrap_err();
    assert_eq!(error.to_string(), "2 unclosed `[`, the first at instruction 0");
}
