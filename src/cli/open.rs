use crate::cipher::open_with;
use crate::error::Result;
use crate::files::{read_input, write_atomic};
use crate::key::SealKey;
use std::path::{Path, PathBuf};
use tracing::info;

/// Options for the open command
#[derive(Debug, Clone)]
pub struct OpenOptions {
    pub key: SealKey,
}

/// Default destination for an opened blob: `<INPUT>` without a trailing
/// `.aes`, or `<INPUT>.zip` when there is none.
pub fn default_opened_output(input: &Path) -> PathBuf {
    match input.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("aes") => input.with_extension(""),
        _ => {
            let mut os = input.as_os_str().to_os_string();
            os.push(".zip");
            PathBuf::from(os)
        }
    }
}

/// Open a sealed blob and write the recovered archive to `output_path`
/// Returns the number of plaintext bytes written
pub fn open_file(input_path: &Path, output_path: &Path, options: &OpenOptions) -> Result<usize> {
    let sealed = read_input(input_path)?;
    let plaintext = open_with(&options.key, &sealed)?;

    write_atomic(output_path, &plaintext)?;
    info!(
        input = %input_path.display(),
        output = %output_path.display(),
        plaintext_len = plaintext.len(),
        "opened sealed blob"
    );
    Ok(plaintext.len())
}
