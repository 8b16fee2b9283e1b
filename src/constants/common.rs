use const_format::formatcp;

pub const SMPL: &str = "smpl";
pub const SMPL_EXT: &str = ".smpl";
pub const SYSTEM_TMP: &str = "/tmp";
pub const TMP: &str = formatcp!("{SYSTEM_TMP}/{SMPL}");

pub const TAPE_SIZE: usize = 32;
pub const REF_TAPE_SIZE: usize = 256;

pub const TAPE: &str = "tape";
pub const PTR: &str = "ptr";
pub const REF_TAPE: &str = "ref_tape";
pub const REF_PTR: &str = "ref_ptr";
