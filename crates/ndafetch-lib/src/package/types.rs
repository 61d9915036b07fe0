use crate::api::{PackageFileEntry, PresignedUrl};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Identifier of a file within a package. The repository hands these out as
/// JSON numbers; strings are accepted too and sent back untouched.
#[derive(Clone, Debug, Hash, Ord, PartialOrd, Eq, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FileId {
    Numeric(u64),
    Text(String),
}

impl Display for FileId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FileId::Numeric(id) => write!(f, "{}", id),
            FileId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRecord {
    pub file_id: FileId,
    /// Download alias: output path relative to the package directory.
    pub relative_path: String,
    pub download_url: Option<String>,
}

/// Files of one package keyed by id. Iteration order carries no meaning.
#[derive(Clone, Debug, Default)]
pub struct PackageFiles {
    files: BTreeMap<FileId, FileRecord>,
}

impl PackageFiles {
    pub fn from_entries(entries: impl IntoIterator<Item = PackageFileEntry>) -> Self {
        let mut files = BTreeMap::new();
        for entry in entries {
            let record = FileRecord {
                file_id: entry.package_file_id.clone(),
                relative_path: entry.download_alias,
                download_url: None,
            };
            if let Some(previous) = files.insert(entry.package_file_id, record) {
                tracing::warn!(
                    file_id = %previous.file_id,
                    path = %previous.relative_path,
                    "Duplicate file id in package listing, keeping the last entry"
                );
            }
        }
        Self { files }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn file_ids(&self) -> Vec<FileId> {
        self.files.keys().cloned().collect()
    }

    pub fn get(&self, file_id: &FileId) -> Option<&FileRecord> {
        self.files.get(file_id)
    }

    pub fn records(&self) -> impl Iterator<Item = &FileRecord> {
        self.files.values()
    }

    /// Attaches resolved URLs by file id. Fails on an id that is not part of
    /// this package; ids without a URL are left unresolved.
    pub fn attach_download_urls(
        &mut self,
        urls: impl IntoIterator<Item = PresignedUrl>,
    ) -> Result<(), FileId> {
        for url in urls {
            match self.files.get_mut(&url.package_file_id) {
                Some(record) => record.download_url = url.download_url,
                None => return Err(url.package_file_id),
            }
        }
        Ok(())
    }
}

impl IntoIterator for PackageFiles {
    type Item = FileRecord;
    type IntoIter = std::collections::btree_map::IntoValues<FileId, FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, alias: &str) -> PackageFileEntry {
        PackageFileEntry {
            package_file_id: FileId::Numeric(id),
            download_alias: alias.to_string(),
        }
    }

    fn presigned(id: u64, url: Option<&str>) -> PresignedUrl {
        PresignedUrl {
            package_file_id: FileId::Numeric(id),
            download_url: url.map(str::to_string),
        }
    }

    #[test]
    fn test_file_id_accepts_numbers_and_strings() {
        let ids: Vec<FileId> = serde_json::from_str(r#"[12, "abc-7"]"#).unwrap();

        assert_eq!(ids, vec![FileId::Numeric(12), FileId::Text("abc-7".to_string())]);
        assert_eq!(serde_json::to_string(&ids).unwrap(), r#"[12,"abc-7"]"#);
        assert_eq!(ids[0].to_string(), "12");
        assert_eq!(ids[1].to_string(), "abc-7");
    }

    #[test]
    fn test_every_listed_id_gets_its_url() {
        let mut files = PackageFiles::from_entries(vec![entry(1, "sub/x.txt"), entry(2, "y.txt")]);
        assert_eq!(files.file_ids(), vec![FileId::Numeric(1), FileId::Numeric(2)]);

        files
            .attach_download_urls(vec![
                presigned(2, Some("https://bucket/y")),
                presigned(1, Some("https://bucket/x")),
            ])
            .unwrap();

        let x = files.get(&FileId::Numeric(1)).unwrap();
        assert_eq!(x.relative_path, "sub/x.txt");
        assert_eq!(x.download_url.as_deref(), Some("https://bucket/x"));
        let y = files.get(&FileId::Numeric(2)).unwrap();
        assert_eq!(y.download_url.as_deref(), Some("https://bucket/y"));
        assert_eq!(files.into_iter().count(), 2);
    }

    #[test]
    fn test_omitted_url_leaves_record_unresolved() {
        let mut files = PackageFiles::from_entries(vec![entry(1, "a.txt"), entry(2, "b.txt")]);

        files
            .attach_download_urls(vec![presigned(1, Some("https://bucket/a")), presigned(2, None)])
            .unwrap();

        assert!(files.get(&FileId::Numeric(1)).unwrap().download_url.is_some());
        assert!(files.get(&FileId::Numeric(2)).unwrap().download_url.is_none());
    }

    #[test]
    fn test_unrequested_id_is_rejected() {
        let mut files = PackageFiles::from_entries(vec![entry(1, "a.txt")]);

        let result = files.attach_download_urls(vec![presigned(9, Some("https://bucket/z"))]);

        assert_eq!(result, Err(FileId::Numeric(9)));
    }

    #[test]
    fn test_empty_listing() {
        let files = PackageFiles::from_entries(vec![]);

        assert!(files.is_empty());
        assert!(files.file_ids().is_empty());
        assert!(!PackageFiles::from_entries(vec![entry(1, "a.txt")]).is_empty());
    }

    #[test]
    fn test_duplicate_listing_ids_collapse() {
        let files = PackageFiles::from_entries(vec![entry(1, "old.txt"), entry(1, "new.txt")]);

        assert_eq!(files.len(), 1);
        assert_eq!(
            files.get(&FileId::Numeric(1)).unwrap().relative_path,
            "new.txt"
        );
    }
}
