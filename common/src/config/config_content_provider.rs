use std::cell::RefCell;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Raw storage behind a [`super::ConfigManager`]. `Ok(None)` means nothing has been stored yet.
pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentConfigProvider {
    path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read config file {}: {}",
                self.path.display(),
                err
            )),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(&self.path, content).map_err(|e| {
            format!("Failed to write config file {}: {}", self.path.display(), e)
        })
    }
}

#[derive(Default)]
pub struct InMemoryConfigProvider {
    content: RefCell<Option<String>>,
}

impl InMemoryConfigProvider {
    pub fn with_content(content: &str) -> Self {
        Self {
            content: RefCell::new(Some(content.to_string())),
        }
    }
}

impl ConfigContentProvider for InMemoryConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        Ok(self.content.borrow().clone())
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        *self.content.borrow_mut() = Some(content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("{}_{}.yaml", name, std::process::id()));
        path
    }

    #[test]
    fn test_missing_file_is_none() {
        let provider = FileContentConfigProvider::new(temp_path("dungeon_missing_config"));
        assert_eq!(provider.get_config_content(), Ok(None));
    }

    #[test]
    fn test_file_write_then_read() {
        let path = temp_path("dungeon_provider_config");
        let provider = FileContentConfigProvider::new(&path);

        provider.set_config_content("reveal_map: true\n").unwrap();
        let content = provider.get_config_content();
        let _ = std::fs::remove_file(&path);

        assert_eq!(content, Ok(Some("reveal_map: true\n".to_string())));
    }

    #[test]
    fn test_in_memory_starts_empty() {
        let provider = InMemoryConfigProvider::default();
        assert_eq!(provider.get_config_content(), Ok(None));
        provider.set_config_content("a: 1").unwrap();
        assert_eq!(provider.get_config_content(), Ok(Some("a: 1".to_string())));
    }
}
