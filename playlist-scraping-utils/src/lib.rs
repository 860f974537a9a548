pub mod fs_text_util;
pub mod macros;
