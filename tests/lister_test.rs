use kmenu::error::Error;
use kmenu::lister::{list_subdirectories, scan_hierarchy};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_lists_only_directories_sorted() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    for dir in ["zeta", "alpha", "mid", ".hidden"] {
        fs::create_dir(root.join(dir)).unwrap();
    }
    for file in ["Kconfig", "readme.txt", "beta"] {
        fs::write(root.join(file), "x").unwrap();
    }

    let names = list_subdirectories(root).unwrap();
    assert_eq!(names, vec![".hidden", "alpha", "mid", "zeta"]);
}

#[test]
fn test_does_not_recurse() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("acme/board1/nested")).unwrap();

    assert_eq!(list_subdirectories(temp_dir.path()).unwrap(), vec!["acme"]);
}

#[test]
fn test_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    assert!(list_subdirectories(temp_dir.path()).unwrap().is_empty());
}

#[test]
fn test_missing_directory_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = list_subdirectories(temp_dir.path().join("missing"));

    match result {
        Err(Error::ListError { path, .. }) => assert!(path.ends_with("missing")),
        other => panic!("Expected ListError, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn test_symlinks_follow_their_target() {
    use std::os::unix::fs::symlink;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("tree");
    fs::create_dir(&root).unwrap();
    fs::create_dir(temp_dir.path().join("real_dir")).unwrap();
    fs::write(temp_dir.path().join("real_file"), "x").unwrap();

    symlink(temp_dir.path().join("real_dir"), root.join("dir_link")).unwrap();
    symlink(temp_dir.path().join("real_file"), root.join("file_link")).unwrap();
    symlink(temp_dir.path().join("nowhere"), root.join("dangling")).unwrap();

    assert_eq!(list_subdirectories(&root).unwrap(), vec!["dir_link"]);
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_name_is_an_error() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join(OsStr::from_bytes(b"bad\xff"))).unwrap();

    let result = list_subdirectories(temp_dir.path());
    assert!(matches!(result, Err(Error::InvalidName(_))), "{:?}", result);
}

#[test]
fn test_file_root_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("Kconfig");
    fs::write(&file, "config FOO\n").unwrap();

    let result = list_subdirectories(&file);
    match result {
        Err(Error::NotADirectory(path)) => assert!(path.ends_with("Kconfig")),
        other => panic!("Expected NotADirectory, got {:?}", other),
    }
}

#[test]
fn test_scan_hierarchy() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("st/armfly_stm32f407ig")).unwrap();
    fs::create_dir_all(root.join("acme/board2")).unwrap();
    fs::create_dir_all(root.join("acme/board1")).unwrap();
    fs::create_dir_all(root.join("empty")).unwrap();
    fs::write(root.join("Kconfig"), "generated").unwrap();

    let hierarchy = scan_hierarchy(root).unwrap();
    let vendors: Vec<_> = hierarchy.keys().map(String::as_str).collect();
    assert_eq!(vendors, vec!["acme", "empty", "st"]);
    assert_eq!(hierarchy["acme"], vec!["board1", "board2"]);
    assert!(hierarchy["empty"].is_empty());
    assert_eq!(hierarchy["st"], vec!["armfly_stm32f407ig"]);
}
