use std::fs::create_dir_all;
use std::io;
use std::path::Path;

pub fn path_to_str(path: &Path) -> Option<String> {
    path.to_str().map(String::from)
}

pub fn mkdirp<P: AsRef<Path>>(path: P) -> io::Result<()> {
    if let Err(e) = create_dir_all(path) {
        if e.kind() != io::ErrorKind::AlreadyExists {
            return Err(e);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mkdirp_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        mkdirp(&nested).unwrap();
        mkdirp(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
