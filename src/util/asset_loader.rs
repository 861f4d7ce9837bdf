use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use minijinja::{Environment, Error, State};
use sha2::{Digest, Sha256};

/// Appends a content hash to static asset URLs so browsers pick up changed
/// files without a hard refresh. Hashes are computed once per process.
#[derive(Debug)]
pub struct AssetLoader {
    root: PathBuf,
    cache: Mutex<HashMap<String, String>>,
}

impl AssetLoader {
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("static"),
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn versioned_path(&self, path: &str) -> String {
        let mut cache = self.cache.lock().unwrap();
        if let Some(hit) = cache.get(path) {
            return hit.clone();
        }

        let url = match fs::read(self.root.join(path)) {
            Ok(contents) => {
                let digest = Sha256::digest(&contents);
                format!("/static/{path}?v={digest:x}")
            }
            Err(_) => format!("/static/{path}"),
        };
        cache.insert(path.to_string(), url.clone());
        url
    }

    pub fn register(self, env: &mut Environment<'_>) {
        env.add_function(
            "asset",
            move |_state: &State, path: String| -> Result<String, Error> {
                Ok(self.versioned_path(&path))
            },
        );
    }
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_assets_fall_back_to_plain_urls() {
        let loader = AssetLoader {
            root: PathBuf::from("does-not-exist"),
            cache: Mutex::new(HashMap::new()),
        };
        assert_eq!(loader.versioned_path("styles.css"), "/static/styles.css");
    }

    #[test]
    fn hashed_urls_are_cached() {
        let dir = std::env::temp_dir().join("stitchworks-asset-test");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("app.css"), b"body {}").unwrap();

        let loader = AssetLoader {
            root: dir,
            cache: Mutex::new(HashMap::new()),
        };
        let first = loader.versioned_path("app.css");
        assert!(first.starts_with("/static/app.css?v="));
        assert_eq!(loader.versioned_path("app.css"), first);
    }
}
