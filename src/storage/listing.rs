//! Directory enumeration
//!
//! Lists the immediate children of a resolved directory, partitioned into
//! folders and recognized documents, with paths reported relative to the
//! library root.

use log::info;
use std::fs;
use std::path::Path;

use crate::error::ListingError;
use crate::storage::documents::DocumentKind;

/// A sub-directory entry.
#[derive(Debug, Clone, PartialEq)]
pub struct FolderEntry {
    pub name: String,
    pub relative_path: String,
}

/// A recognized document entry.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentEntry {
    pub name: String,
    pub relative_path: String,
    pub kind: DocumentKind,
    pub size_mb: f64,
}

/// The partitioned children of one directory. Folders precede documents in
/// presentation order; both are sorted case-insensitively by name.
#[derive(Debug, Default)]
pub struct DirectoryListing {
    pub folders: Vec<FolderEntry>,
    pub documents: Vec<DocumentEntry>,
}

/// Enumerates the immediate children of `dir`.
///
/// Files that are neither PDF nor Markdown are ignored. Sizes reflect the
/// byte length on disk at enumeration time.
pub fn list_children(dir: &Path, root: &Path) -> Result<DirectoryListing, ListingError> {
    if !dir.is_dir() {
        return Err(ListingError::NotADirectory(
            dir.to_string_lossy().to_string(),
        ));
    }

    let mut listing = DirectoryListing::default();

    for entry in fs::read_dir(dir)?.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        let relative_path = relative_to_root(&entry.path(), root);
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(_) => continue,
        };

        if file_type.is_dir() {
            listing.folders.push(FolderEntry {
                name,
                relative_path,
            });
            continue;
        }

        match DocumentKind::from_path(&entry.path()) {
            DocumentKind::Unsupported => {}
            kind => {
                let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
                listing.documents.push(DocumentEntry {
                    name,
                    relative_path,
                    kind,
                    size_mb: size_in_mb(size),
                });
            }
        }
    }

    listing
        .folders
        .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    listing
        .documents
        .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    info!(
        "Listed {} - {} folders, {} documents",
        dir.display(),
        listing.folders.len(),
        listing.documents.len()
    );

    Ok(listing)
}

/// File size in megabytes, rounded to 2 decimal places.
pub fn size_in_mb(bytes: u64) -> f64 {
    (bytes as f64 / (1024.0 * 1024.0) * 100.0).round() / 100.0
}

/// Path relative to the library root, `/`-separated on every platform.
fn relative_to_root(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn library() -> (TempDir, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("docs");
        fs::create_dir_all(root.join("zeta")).unwrap();
        fs::create_dir_all(root.join("Alpha")).unwrap();
        fs::write(root.join("Banana.pdf"), b"%PDF-1.4").unwrap();
        fs::write(root.join("apple.md"), b"# apple").unwrap();
        fs::write(root.join("Cherry.PDF"), b"%PDF-1.4").unwrap();
        fs::write(root.join("ignore.txt"), b"plain").unwrap();
        let root = root.canonicalize().unwrap();
        (tmp, root)
    }

    #[test]
    fn test_partitions_and_sorts_children() {
        let (_tmp, root) = library();
        let listing = list_children(&root, &root).unwrap();

        let folder_names: Vec<_> = listing.folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(folder_names, ["Alpha", "zeta"]);

        // Case-insensitive document order; unrecognized extensions ignored
        let document_names: Vec<_> = listing.documents.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(document_names, ["apple.md", "Banana.pdf", "Cherry.PDF"]);
    }

    #[test]
    fn test_document_kinds_assigned() {
        let (_tmp, root) = library();
        let listing = list_children(&root, &root).unwrap();
        let kinds: Vec<_> = listing.documents.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            [DocumentKind::Markdown, DocumentKind::Pdf, DocumentKind::Pdf]
        );
    }

    #[test]
    fn test_relative_paths_use_forward_slashes() {
        let (_tmp, root) = library();
        fs::write(root.join("zeta/deep.md"), b"# deep").unwrap();

        let listing = list_children(&root.join("zeta"), &root).unwrap();
        assert_eq!(listing.documents[0].relative_path, "zeta/deep.md");
    }

    #[test]
    fn test_enumeration_is_one_level_only() {
        let (_tmp, root) = library();
        fs::write(root.join("zeta/nested.md"), b"# nested").unwrap();

        let listing = list_children(&root, &root).unwrap();
        assert!(
            listing
                .documents
                .iter()
                .all(|d| d.name != "nested.md")
        );
    }

    #[test]
    fn test_exact_megabyte_reports_one_point_zero_zero() {
        let (_tmp, root) = library();
        fs::write(root.join("big.pdf"), vec![0u8; 1_048_576]).unwrap();

        let listing = list_children(&root, &root).unwrap();
        let big = listing
            .documents
            .iter()
            .find(|d| d.name == "big.pdf")
            .unwrap();
        assert_eq!(big.size_mb, 1.00);
    }

    #[test]
    fn test_size_rounding() {
        assert_eq!(size_in_mb(0), 0.0);
        assert_eq!(size_in_mb(1_048_576), 1.00);
        assert_eq!(size_in_mb(1_572_864), 1.5);
        // 3.14159... MB rounds to 3.14
        assert_eq!(size_in_mb(3_294_198), 3.14);
    }

    #[test]
    fn test_listing_a_file_is_rejected() {
        let (_tmp, root) = library();
        let result = list_children(&root.join("apple.md"), &root);
        assert!(matches!(result, Err(ListingError::NotADirectory(_))));
    }
}
