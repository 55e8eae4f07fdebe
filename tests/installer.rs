mod common;

use common::{
    create_workshop_item, dir_names, read_tree, setup_test_env, temp_root, write_tree, APP_ID,
};
use dzjoin_lib::core::installer::{install_mod, install_mods};
use dzjoin_lib::core::library::LibraryLocator;
use dzjoin_lib::models::error::SError;
use dzjoin_lib::models::mod_map::ModMap;
use std::fs;

fn mod_map(entries: &[(u64, &str)]) -> ModMap {
    entries.iter().map(|(id, n)| (*id, n.to_string())).collect()
}

#[test]
fn test_install_copies_every_mod_tree() {
    let env = setup_test_env();
    let cf = create_workshop_item(
        &env,
        1559212036,
        &[("meta.cpp", "name = \"CF\""), ("addons/cf.pbo", "cf"), ("keys/cf.bikey", "key")],
    );
    let cot = create_workshop_item(
        &env,
        1564026768,
        &[("addons/cot.pbo", "cot"), ("addons/deep/nested/x.txt", "x")],
    );

    let mods = mod_map(&[(1559212036, "CF"), (1564026768, "Community-Online-Tools")]);
    let installed = install_mods(&env.locator, &mods, &env.game_root, APP_ID).unwrap();

    assert_eq!(installed.len(), 2);
    assert_eq!(dir_names(&env.game_root), vec!["@CF", "@Community-Online-Tools"]);
    assert_eq!(read_tree(&env.game_root.join("@CF")), read_tree(&cf));
    assert_eq!(
        read_tree(&env.game_root.join("@Community-Online-Tools")),
        read_tree(&cot)
    );
}

#[test]
fn test_reinstall_drops_files_removed_upstream() {
    let env = setup_test_env();
    let src = create_workshop_item(&env, 1, &[("old.pbo", "v1"), ("keep.pbo", "v1")]);
    let mods = mod_map(&[(1, "Mod")]);

    install_mods(&env.locator, &mods, &env.game_root, APP_ID).unwrap();
    assert!(env.game_root.join("@Mod/old.pbo").exists());

    // New version upstream: one file gone, one changed
    fs::remove_file(src.join("old.pbo")).unwrap();
    fs::write(src.join("keep.pbo"), "v2").unwrap();

    install_mods(&env.locator, &mods, &env.game_root, APP_ID).unwrap();

    let tree = read_tree(&env.game_root.join("@Mod"));
    assert_eq!(tree.len(), 1);
    assert_eq!(tree["keep.pbo"], "v2");
}

#[test]
fn test_install_stops_at_first_failing_mod() {
    let env = setup_test_env();
    create_workshop_item(&env, 1, &[("a.pbo", "a")]);
    // Mod 2 was never downloaded
    create_workshop_item(&env, 3, &[("c.pbo", "c")]);

    let mods = mod_map(&[(1, "First"), (2, "Second"), (3, "Third")]);
    let result = install_mods(&env.locator, &mods, &env.game_root, APP_ID);

    match result {
        Err(SError::InstallFailed { mod_name, source }) => {
            assert_eq!(mod_name, "Second");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected InstallFailed, got {:?}", other),
    }

    assert!(env.game_root.join("@First").exists());
    assert!(!env.game_root.join("@Second").exists());
    assert!(
        !env.game_root.join("@Third").exists(),
        "Mods after the failing one must not be installed"
    );
}

#[cfg(unix)]
#[test]
fn test_install_stops_when_a_copy_fails_midway() {
    let env = setup_test_env();
    create_workshop_item(&env, 1, &[("a.pbo", "a")]);
    let second = create_workshop_item(&env, 2, &[("addons/b.pbo", "b")]);
    // The item is there but part of its content is not readable
    std::os::unix::fs::symlink(second.join("gone.pbo"), second.join("addons/broken.pbo"))
        .unwrap();
    create_workshop_item(&env, 3, &[("c.pbo", "c")]);

    let mods = mod_map(&[(1, "First"), (2, "Second"), (3, "Third")]);
    let result = install_mods(&env.locator, &mods, &env.game_root, APP_ID);

    match result {
        Err(SError::InstallFailed { mod_name, .. }) => assert_eq!(mod_name, "Second"),
        other => panic!("Expected InstallFailed, got {:?}", other),
    }

    assert!(env.game_root.join("@First").exists());
    assert!(
        !env.game_root.join("@Third").exists(),
        "Mods after the failing one must not be installed"
    );
}

#[test]
fn test_install_replaces_a_file_in_the_way() {
    let env = setup_test_env();
    create_workshop_item(&env, 1, &[("addons/cf.pbo", "cf")]);
    fs::write(env.game_root.join("@CF"), "stray file").unwrap();

    install_mods(&env.locator, &mod_map(&[(1, "CF")]), &env.game_root, APP_ID).unwrap();

    let dest = env.game_root.join("@CF");
    assert!(dest.is_dir());
    assert_eq!(read_tree(&dest)["addons/cf.pbo"], "cf");
}

#[cfg(unix)]
#[test]
fn test_install_replaces_a_symlink_without_touching_its_target() {
    let env = setup_test_env();
    create_workshop_item(&env, 1, &[("addons/cf.pbo", "new")]);

    let (_other_tmp, other) = temp_root();
    write_tree(&other, &[("addons/cf.pbo", "elsewhere")]);
    std::os::unix::fs::symlink(&other, env.game_root.join("@CF")).unwrap();

    install_mods(&env.locator, &mod_map(&[(1, "CF")]), &env.game_root, APP_ID).unwrap();

    let dest = env.game_root.join("@CF");
    assert!(!fs::symlink_metadata(&dest).unwrap().file_type().is_symlink());
    assert_eq!(read_tree(&dest)["addons/cf.pbo"], "new");
    assert_eq!(read_tree(&other)["addons/cf.pbo"], "elsewhere");
}

#[test]
fn test_install_without_library_is_library_not_found() {
    let (_tmp, root) = temp_root();
    let locator = LibraryLocator::for_home(&root.join("home"));
    let game_root = root.join("game");
    fs::create_dir_all(&game_root).unwrap();

    let result = install_mods(&locator, &mod_map(&[(1, "Mod")]), &game_root, APP_ID);

    assert!(matches!(result, Err(SError::LibraryNotFound { .. })));
    assert!(dir_names(&game_root).is_empty());
}

#[test]
fn test_install_mod_rejects_path_like_names() {
    let env = setup_test_env();
    let src = create_workshop_item(&env, 7, &[("a.txt", "a")]);

    let result = install_mod(&src, &env.game_root, "../escape");

    assert!(matches!(result, Err(SError::InstallFailed { .. })));
    assert!(dir_names(&env.game_root).is_empty());
}

#[cfg(unix)]
#[test]
fn test_install_preserves_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let env = setup_test_env();
    let src = create_workshop_item(&env, 9, &[("bin/tool.sh", "#!/bin/sh")]);
    fs::set_permissions(src.join("bin/tool.sh"), fs::Permissions::from_mode(0o755)).unwrap();
    fs::set_permissions(src.join("bin"), fs::Permissions::from_mode(0o750)).unwrap();

    let dest = install_mod(&src, &env.game_root, "Tools").unwrap();

    let file_mode = fs::metadata(dest.join("bin/tool.sh")).unwrap().permissions().mode();
    let dir_mode = fs::metadata(dest.join("bin")).unwrap().permissions().mode();
    assert_eq!(file_mode & 0o777, 0o755);
    assert_eq!(dir_mode & 0o777, 0o750);
}
