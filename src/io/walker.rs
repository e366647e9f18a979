use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Collects source files under a root, honouring `.gitignore`
pub struct FileWalker {
    root: PathBuf,
    extensions: Vec<String>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extensions: vec!["java".to_string()],
        }
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }

    /// Matching files, sorted by path
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .is_some_and(|ext| self.extensions.iter().any(|wanted| *wanted == ext))
    }
}

/// Expand the given paths: files are kept as-is, directories are walked
pub fn find_source_files(paths: &[PathBuf], extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(
                FileWalker::new(path.clone())
                    .with_extensions(extensions.to_vec())
                    .walk()?,
            );
        } else {
            files.push(path.clone());
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/app")).unwrap();
        fs::write(dir.path().join("src/app/B.java"), "class B {}").unwrap();
        fs::write(dir.path().join("src/A.java"), "class A {}").unwrap();
        fs::write(dir.path().join("src/notes.txt"), "notes").unwrap();
        fs::write(dir.path().join("src/C.JAVA"), "class C {}").unwrap();
        dir
    }

    #[test]
    fn test_walk_filters_by_extension() {
        let dir = project();
        let files = FileWalker::new(dir.path().to_path_buf()).walk().unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["A.java", "C.JAVA", "B.java"]);
    }

    #[test]
    fn test_custom_extensions() {
        let dir = project();
        let files = FileWalker::new(dir.path().to_path_buf())
            .with_extensions(vec![".txt".to_string()])
            .walk()
            .unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_explicit_files_kept_and_deduplicated() {
        let dir = project();
        let a = dir.path().join("src/A.java");
        let files =
            find_source_files(&[a.clone(), dir.path().join("src")], &["java".to_string()]).unwrap();

        assert_eq!(files.iter().filter(|p| **p == a).count(), 1);
        assert_eq!(files.len(), 3);
    }
}
