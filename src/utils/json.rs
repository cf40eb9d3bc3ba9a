use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use serde::Serialize;
use serde::de::DeserializeOwned;
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) const COLLECTION_EXT: &str = "json";

pub(crate) fn collection_path(data_dir: &str, collection: &str) -> PathBuf {
    Path::new(data_dir).join(format!("{}.{}", collection, COLLECTION_EXT))
}

pub(crate) fn read_collection<T: DeserializeOwned>(path: &Path) -> LibraryResult<Vec<T>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(vec![]),
        Err(err) => return Err(LibraryError::database(
            format!("failed to read {} due to {}", path.display(), err).as_str(),
            Some(format!("{:?}", err.kind())))),
    };
    if data.trim().is_empty() {
        return Ok(vec![]);
    }
    serde_json::from_str(data.as_str()).map_err(|err| LibraryError::serialization(
        format!("failed to parse {} due to {}", path.display(), err).as_str()))
}

// writes through a sibling temp file so a failed write never truncates the previous copy
pub(crate) fn write_collection<T: Serialize>(path: &Path, records: &[T]) -> LibraryResult<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(records)?;
    let tmp = path.with_extension(format!("{}.tmp", COLLECTION_EXT));
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use crate::core::library::LibraryError;
    use crate::utils::json::{collection_path, read_collection, write_collection};

    #[test]
    fn test_should_build_collection_path() {
        let path = collection_path("data", "books");
        assert!(path.ends_with("books.json"));
        assert!(path.starts_with("data"));
    }

    #[test]
    fn test_should_write_and_read() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = collection_path(dir.path().join("nested").to_str().unwrap(), "numbers");
        write_collection(&path, &[1, 2, 3]).expect("should write");
        let loaded: Vec<i32> = read_collection(&path).expect("should read");
        assert_eq!(vec![1, 2, 3], loaded);
    }

    #[test]
    fn test_should_treat_blank_file_as_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = collection_path(dir.path().to_str().unwrap(), "blank");
        fs::write(&path, "  \n").expect("should write");
        let loaded: Vec<i32> = read_collection(&path).expect("should read");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_should_reject_corrupt_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = collection_path(dir.path().to_str().unwrap(), "corrupt");
        fs::write(&path, "{not json").expect("should write");
        let res: Result<Vec<i32>, LibraryError> = read_collection(&path);
        assert!(matches!(res, Err(LibraryError::Serialization { message: _ })));
    }
}
