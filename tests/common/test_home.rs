// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway GIT_EMBED_HOME under target/home, removed when dropped.
pub struct TestHomeGuard {
    dir: TempDir,
}

impl TestHomeGuard {
    pub fn new() -> Self {
        let root = PathBuf::from("target/home");
        fs::create_dir_all(&root).expect("Failed to create target/home");
        let dir = tempfile::Builder::new()
            .prefix("home-")
            .tempdir_in(&root)
            .expect("Failed to create test home directory");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    #[allow(dead_code)]
    pub fn cache_dir(&self) -> PathBuf {
        self.path().join("cache")
    }

    #[allow(dead_code)]
    pub fn write_config(&self, contents: &str) -> &Self {
        fs::write(self.path().join("config.toml"), contents).expect("Failed to write config.toml");
        self
    }
}
