//! IO helpers for reading header files and writing generated snippets
//!
//! The input is always a regular file read in full. The output may be a
//! regular file (created or truncated) or standard output, denoted by "-".

use std::{
    fs,
    io::{self, BufWriter, Write},
    path::Path,
};

/// Reads the whole header file at `path` into memory
///
/// # Errors
///
/// If the file does not exist, cannot be read, or is not valid UTF-8.
pub fn read_source(path: &Path) -> Result<String, io::Error> {
    fs::read_to_string(path)
}

/// Returns true if `path` denotes standard output
#[must_use]
pub fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Opens the output file and returns a buffered writer
///
/// If the path is "-", it writes to standard output. Otherwise it opens (or
/// creates) the file for writing, truncating it if it already exists.
///
/// The writer is buffered; callers must flush it to observe write errors.
///
/// # Errors
///
/// If the file cannot be opened or created.
pub fn open_output(path: &Path) -> Result<Box<dyn Write>, io::Error> {
    Ok(if is_stdout(path) {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        Box::new(BufWriter::new(
            fs::OpenOptions::new()
                .write(true)
                .truncate(true)
                .create(true)
                .open(path)?,
        ))
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    /// A path in the temp directory unique to this process and test
    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("errgen_utils_{}_{name}", std::process::id()))
    }

    #[test]
    fn read_source_reads_whole_file() {
        let path = temp_path("read.txt");
        fs::write(&path, "#define EPERM 1\n#define ENOENT 2\n").expect("should write test file");

        let content = read_source(&path).expect("should read");
        assert_eq!(content, "#define EPERM 1\n#define ENOENT 2\n");

        fs::remove_file(&path).expect("should cleanup test file");
    }

    #[test]
    fn read_source_fails_for_missing_file() {
        let err = read_source(&temp_path("does_not_exist.txt")).expect_err("should fail");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn dash_is_stdout() {
        assert!(is_stdout(Path::new("-")));
        assert!(!is_stdout(Path::new("errno.csv")));
    }

    #[test]
    fn open_output_writes_to_stdout_for_dash() {
        assert!(open_output(Path::new("-")).is_ok());
    }

    #[test]
    fn open_output_truncates_existing_file() {
        let path = temp_path("truncate.csv");
        fs::write(&path, "previous content that is quite long").expect("should write test file");

        {
            let mut writer = open_output(&path).expect("should open");
            writer.write_all(b"new").expect("should write");
            writer.flush().expect("should flush");
        }

        assert_eq!(fs::read_to_string(&path).expect("should read"), "new");

        fs::remove_file(&path).expect("should cleanup test file");
    }

    #[test]
    fn open_output_fails_in_missing_directory() {
        let path = temp_path("no_such_dir").join("errno.csv");
        assert!(open_output(&path).is_err());
    }
}
