use std::fs;
use std::io::Write as _;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::tempdir;

fn compose(cwd: &Path, args: &[&str], input: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_compose"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    {
        let mut stdin = child.stdin.take().unwrap();
        if let Some(input) = input {
            stdin.write_all(input.as_bytes()).unwrap();
        }
    }
    child.wait_with_output().unwrap()
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect::<Vec<_>>();
    names.sort();
    names
}

#[test]
fn full_component_in_current_dir() {
    let dir = tempdir().unwrap();
    let output = compose(dir.path(), &["Button", "--yes"], None);

    assert_eq!(output.status.code(), Some(0));
    let root = dir.path().join("Button");
    assert_eq!(
        file_names(&root),
        ["Actions.js", "View.js", "index.js", "styles.module.css"]
    );
    let index = fs::read_to_string(root.join("index.js")).unwrap();
    assert!(index.contains("const Button = (props) => ("));
    assert!(index.contains("Button.displayName = 'Button'"));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Esta operación resultará en el siguiente arbol de archivos:\n Button"));
    assert!(stdout.contains("    |---- index.js\n    |---- Actions.js\n    |---- View.js\n    \\---- styles.module.css\n"));
    assert!(stdout.contains("Si alguno de estos archivos ya existe, serán sobreescritos."));
    assert!(stdout.ends_with("Operación realizada exitosamente.\n"));
}

#[test]
fn simple_component_in_given_dir() {
    let dir = tempdir().unwrap();
    let output = compose(dir.path(), &["src/components", "Button", "-y", "-s"], None);

    assert_eq!(output.status.code(), Some(0));
    let root = dir.path().join("src").join("components").join("Button");
    assert_eq!(file_names(&root), ["index.js", "styles.module.css"]);
    assert_eq!(fs::metadata(root.join("styles.module.css")).unwrap().len(), 0);
}

#[test]
fn lowercase_name_exits_with_error() {
    let dir = tempdir().unwrap();
    let output = compose(dir.path(), &["button", "--yes"], None);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains(
        "Error: El nombre del componente debe comenzar en una letra mayúscula y no debe contener espacios."
    ));
    assert!(file_names(dir.path()).is_empty());
}

#[test]
fn declining_confirmation_cancels() {
    let dir = tempdir().unwrap();
    let output = compose(dir.path(), &["Button"], Some("n\n"));

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Operación cancelada."));
    assert!(file_names(dir.path()).is_empty());
}

#[test]
fn closed_input_cancels() {
    let dir = tempdir().unwrap();
    let output = compose(dir.path(), &["Button"], None);

    assert_eq!(output.status.code(), Some(0));
    assert!(file_names(dir.path()).is_empty());
}

#[test]
fn affirmative_confirmation_in_any_case_proceeds() {
    for answer in ["s\n", "S\n"] {
        let dir = tempdir().unwrap();
        let output = compose(dir.path(), &["Button"], Some(answer));

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(file_names(&dir.path().join("Button")).len(), 4);
    }
}

#[test]
fn repeated_runs_leave_identical_output() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("Button");

    assert!(compose(dir.path(), &["Button", "-y"], None).status.success());
    let first = file_names(&root)
        .iter()
        .map(|name| fs::read(root.join(name)).unwrap())
        .collect::<Vec<_>>();

    assert!(compose(dir.path(), &["Button", "-y"], None).status.success());
    let second = file_names(&root)
        .iter()
        .map(|name| fs::read(root.join(name)).unwrap())
        .collect::<Vec<_>>();

    assert_eq!(first, second);
}

#[test]
fn unwritable_target_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("taken"), "file, not a directory").unwrap();
    let output = compose(dir.path(), &["taken", "Button", "-y"], None);

    assert!(!output.status.success());
    assert!(!String::from_utf8(output.stderr).unwrap().is_empty());
}
