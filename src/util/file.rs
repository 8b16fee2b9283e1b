use std::fs;
use std::io;
use std::path::Path;

use rand::{distributions::Alphanumeric, Rng};

use crate::constants::common::TMP;

/// # Errors
pub fn gen_tmp_source_path(extension: &str) -> io::Result<String> {
    let dir = make_tmp_dir("src")?;
    let filename = gen_filename();
    Ok(format!("{dir}/{filename}.{extension}"))
}

/// # Errors
pub fn gen_tmp_exe_path() -> io::Result<String> {
    let dir = make_tmp_dir("exe")?;
    let filename = gen_filename();
    Ok(format!("{dir}/{filename}"))
}

fn make_tmp_dir(tag: &str) -> io::Result<String> {
    let dir = format!("{TMP}/{tag}");
    if !Path::new(&dir).exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

fn gen_filename() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(40)
        .map(char::from)
        .collect::<String>()
}
