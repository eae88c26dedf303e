//! Temporary source trees for end-to-end runs

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// A throwaway directory of source files
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Add a file, creating parent directories
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        self.write(relative, content);
        self
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(path, content).expect("write fixture");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative: &str) -> PathBuf {
        self.path().join(relative)
    }

    /// Run the binary with the repo as working directory
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_extract-text"))
            .args(args)
            .current_dir(self.path())
            .env_remove("RUST_LOG")
            .env_remove("EXTRACT_TEXT_RANGE")
            .env_remove("EXTRACT_TEXT_OUTPUT")
            .output()
            .expect("run extract-text")
    }

    /// A small Vue project with one broken script
    pub fn sample_project() -> Self {
        Self::new()
            .with_file(
                "src/App.vue",
                "<template>\n  <div id=\"app\" title=\"应用\">\n    <h1>欢迎使用</h1>\n    <p>{{ msg }}</p>\n  </div>\n</template>\n\n<script>\nexport default {\n  data() {\n    return { msg: '你好，世界' }\n  }\n}\n</script>\n",
            )
            .with_file(
                "src/api.js",
                "export const errors = {\n  network: '网络错误',\n  timeout: \"timeout\",\n};\nexport const load = () => import('./lazy.js');\n",
            )
            .with_file("src/broken.js", "function broken() {\n  return '坏了';\n")
            .with_file("src/locales/zh.json", "{\n  \"ok\": \"确定\",\n  \"cancel\": \"取消\"\n}\n")
            .with_file("src/vendor.min.js", "var a='压缩';")
            .with_file("src/style.css", ".a::after { content: '样式'; }")
    }
}
