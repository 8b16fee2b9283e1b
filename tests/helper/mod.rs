use std::fs;
use std::process::Command;
use std::rc::Rc;

use smpl::assemble;
use smpl::compile_source;
use smpl::compiler::backend::Backend;
use smpl::compiler::err::CompileError;
use smpl::constants::common::SMPL_EXT;
use smpl::util::file::gen_tmp_exe_path;

const PATH_TO_TEST_FILES: &str = "static/test_files";

pub fn test_with(test_name: &str) {
    let path_to_test = format!("{PATH_TO_TEST_FILES}/{test_name}");

    let files = fs::read_dir(path_to_test)
        .unwrap()
        .map(Result::unwrap)
        .map(|entry| {
            let os_filename = entry.file_name();
            let filename = os_filename.to_string_lossy();
            (filename.into_owned(), entry.path())
        })
        .map(Rc::new)
        .collect::<Rc<_>>();
    let (_, output) = files
        .iter()
        .map(Rc::as_ref)
        .find(|(filename, _)| filename == "output")
        .unwrap();
    let output = fs::read(output).unwrap();

    let program = files
        .iter()
        .map(Rc::as_ref)
        .find(|(filename, _)| filename.ends_with(SMPL_EXT))
        .map(|(_, file)| file)
        .map(|file| fs::read_to_string(file).unwrap())
        .unwrap();

    for backend in Backend::all() {
        test_output(&program, *backend, &output);
    }
}

fn test_output(source_code: &str, backend: Backend, expected: &[u8]) {
    let code = compile_source(source_code, backend);
    let path = gen_tmp_exe_path().unwrap();
    match assemble(&code, backend, &path) {
        Ok(()) => (),
        Err(CompileError::ToolchainLaunch { program, .. }) => {
            eprintln!("skipping {backend} backend: `{program}` is not installed");
            return;
        }
        Err(e) => panic!("{e}"),
    }

    let output = Command::new(&path)
        .output()
        .expect("Test program failed to start.");
    assert!(output.status.success(), "{backend} program exited with {}", output.status);
    assert_eq!(
        output.stdout,
        expected,
        "{backend} backend printed {:?}",
        String::from_utf8_lossy(&output.stdout)
    );
}
