use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// Files on disk behind the page routes.
#[derive(Debug, Clone)]
pub struct Site {
    root: PathBuf,
}

impl Site {
    pub const INDEX: &'static str = "index.html";

    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a request path onto the root. Anything but plain names is refused,
    /// so `..`, absolute paths and drive prefixes never leave the root.
    pub fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
            .then(|| self.root.join(relative))
            .filter(|_| relative.components().next().is_some())
    }

    /// Read a file under the root.
    pub async fn read(&self, path: &str) -> anyhow::Result<(Vec<u8>, &'static str)> {
        let file = self
            .resolve(path)
            .ok_or_else(|| anyhow::anyhow!("refused path {:?}", path))?;
        let bytes = tokio::fs::read(&file)
            .await
            .map_err(|e| anyhow::anyhow!("read {}: {}", file.display(), e))?;
        Ok((bytes, Self::mime(&file)))
    }

    /// Content type by extension.
    pub fn mime(file: &Path) -> &'static str {
        match file.extension().and_then(|e| e.to_str()) {
            Some("html") => "text/html; charset=utf-8",
            Some("js") => "text/javascript; charset=utf-8",
            Some("wasm") => "application/wasm",
            Some("css") => "text/css; charset=utf-8",
            Some("json") => "application/json",
            Some("svg") => "image/svg+xml",
            Some("png") => "image/png",
            Some("mp3") => "audio/mpeg",
            Some("wav") => "audio/wav",
            Some("ogg") => "audio/ogg",
            _ => "application/octet-stream",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_inside_root() {
        let site = Site::new(PathBuf::from("/srv/ttt"));
        assert!(site.resolve("/static/js/game.js") == Some(PathBuf::from("/srv/ttt/static/js/game.js")));
        assert!(site.resolve("pkg/tictactoe_bg.wasm") == Some(PathBuf::from("/srv/ttt/pkg/tictactoe_bg.wasm")));
    }

    #[test]
    fn refuses_traversal() {
        let site = Site::new(PathBuf::from("/srv/ttt"));
        assert!(site.resolve("/static/../../etc/passwd").is_none());
        assert!(site.resolve("./index.html").is_none());
        assert!(site.resolve("/").is_none());
        assert!(site.resolve("").is_none());
    }

    #[test]
    fn mime_by_extension() {
        assert!(Site::mime(Path::new("a/b.wasm")) == "application/wasm");
        assert!(Site::mime(Path::new("index.html")).starts_with("text/html"));
        assert!(Site::mime(Path::new("click.mp3")) == "audio/mpeg");
        assert!(Site::mime(Path::new("README")) == "application/octet-stream");
    }
}
