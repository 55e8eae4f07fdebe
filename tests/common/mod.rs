#![allow(dead_code)]

use camino::{Utf8Path, Utf8PathBuf};
use dzjoin_lib::core::library::LibraryLocator;
use dzjoin_lib::models::paths::{LibPathRules, SteamLibraryCandidates};
use dzjoin_lib::utils::process::{CommandRunner, ExitReport};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use tempfile::TempDir;
use walkdir::WalkDir;

pub const APP_ID: u32 = 221100;

/// A fake home with a native steam library and an empty game folder.
pub struct TestEnv {
    pub tmp: TempDir,
    pub home: Utf8PathBuf,
    pub library: Utf8PathBuf,
    pub game_root: Utf8PathBuf,
    pub locator: LibraryLocator,
}

impl TestEnv {
    pub fn lib_paths(&self) -> LibPathRules {
        LibPathRules::new(&self.library)
    }

    pub fn workshop_item(&self, mod_id: u64) -> Utf8PathBuf {
        self.lib_paths().workshop_item(APP_ID, mod_id)
    }
}

pub fn temp_root() -> (TempDir, Utf8PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
    (tmp, root)
}

pub fn setup_test_env() -> TestEnv {
    let (tmp, root) = temp_root();
    let home = root.join("home");

    let library = SteamLibraryCandidates::new(&home).native;
    let game_root = LibPathRules::new(&library).game;
    fs::create_dir_all(&game_root).unwrap();

    TestEnv {
        locator: LibraryLocator::for_home(&home),
        tmp,
        home,
        library,
        game_root,
    }
}

/// Writes `files` (relative path, content) under `dir`.
pub fn write_tree(dir: &Utf8Path, files: &[(&str, &str)]) {
    fs::create_dir_all(dir).unwrap();
    for (rel, content) in files {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

/// Mock a downloaded workshop item.
pub fn create_workshop_item(env: &TestEnv, mod_id: u64, files: &[(&str, &str)]) -> Utf8PathBuf {
    let dir = env.workshop_item(mod_id);
    write_tree(&dir, files);
    dir
}

/// Every file under `dir` as relative path -> content.
pub fn read_tree(dir: &Utf8Path) -> BTreeMap<String, String> {
    WalkDir::new(dir)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(dir).unwrap();
            (
                rel.to_string_lossy().replace('\\', "/"),
                fs::read_to_string(e.path()).unwrap(),
            )
        })
        .collect()
}

/// Names of the directories directly under `dir`, sorted.
pub fn dir_names(dir: &Utf8Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().unwrap().is_dir())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

/// Records every invocation instead of spawning anything.
pub struct FakeRunner {
    pub calls: RefCell<Vec<(String, Vec<String>)>>,
    exit_code: Option<i32>,
    spawn_fails: bool,
}

impl FakeRunner {
    pub fn exiting(code: i32) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            exit_code: Some(code),
            spawn_fails: false,
        }
    }

    pub fn succeeding() -> Self {
        Self::exiting(0)
    }

    pub fn unable_to_spawn() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            exit_code: None,
            spawn_fails: true,
        }
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<ExitReport> {
        self.calls
            .borrow_mut()
            .push((program.to_string(), args.to_vec()));

        if self.spawn_fails {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        }
        Ok(ExitReport {
            code: self.exit_code,
        })
    }
}
