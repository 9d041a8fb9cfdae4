use crate::{error::Result, pricing::SavingsPlanDocument};
use std::{
    fs::File,
    io::{BufReader, BufWriter, ErrorKind, Write},
    path::PathBuf,
};

/// Storage for the downloaded savings plan document.
///
/// `load` returning `None` makes the catalog download the document and hand it
/// to `store`.
pub trait DocumentCache {
    fn load(&self) -> Result<Option<SavingsPlanDocument>>;

    fn store(&self, document: &SavingsPlanDocument) -> Result<()>;
}

/// Single JSON file that never expires. Concurrent runs are not coordinated,
/// the last writer wins.
#[derive(Debug, Clone)]
pub struct FileCache {
    path: PathBuf,
}

impl FileCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentCache for FileCache {
    fn load(&self) -> Result<Option<SavingsPlanDocument>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                log::debug!("No cached document at {}", self.path.display());
                return Ok(None);
            }
            Err(error) => return Err(error.into()),
        };

        log::info!("Reading savings plan document from {}", self.path.display());
        Ok(Some(serde_json::from_reader(BufReader::new(file))?))
    }

    fn store(&self, document: &SavingsPlanDocument) -> Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer(&mut writer, document)?;
        writer.flush()?;

        log::info!("Saved savings plan document to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn absent_file_is_a_miss() {
        let directory = tempfile::tempdir().unwrap();
        let cache = FileCache::new(directory.path().join("savings_plan_version.json"));

        assert!(cache.load().unwrap().is_none());
    }

    #[test]
    fn stored_document_is_loaded_back() {
        let directory = tempfile::tempdir().unwrap();
        let cache = FileCache::new(directory.path().join("savings_plan_version.json"));
        let document = SavingsPlanDocument::from(json!({
            "regionCode": "ap-northeast-1",
            "products": [],
            "terms": { "savingsPlan": [] },
        }));

        cache.store(&document).unwrap();

        assert_eq!(cache.load().unwrap(), Some(document));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("savings_plan_version.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(FileCache::new(path).load(), Err(Error::Json(_))));
    }
}
