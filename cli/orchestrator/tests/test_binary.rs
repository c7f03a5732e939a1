// run the quill binary against temp models and configs
use std::process::Command;

use assert_cmd::prelude::*;
use model::{MethodDeclaration, Modifier, SourceFile, TypeDeclaration};
use predicates::prelude::*;
use tempfile::tempdir;

fn write_inputs(dir: &std::path::Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let model = dir.join("model.json");
    SourceFile::in_package("org.acme")
        .with_type(
            TypeDeclaration::new("Tool")
                .modifiers([Modifier::Public])
                .method(MethodDeclaration::new("run", "void").modifiers([Modifier::Public])),
        )
        .to_file(&model)
        .expect("model should be written");

    let config = dir.join("config.toml");
    std::fs::write(&config, format!("[codegen]\noutput_dir = {:?}\n", dir.join("gen")))
        .expect("config should be written");
    (model, config)
}

#[test]
fn render_to_stdout() {
    let tmp = tempdir().expect("tempdir");
    let (model, config) = write_inputs(tmp.path());

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("quill"));
    cmd.arg("--config").arg(&config).arg("render").arg(&model).arg("--stdout");
    cmd.assert().success().stdout(predicate::eq(
        "package org.acme;\n\npublic class Tool {\n\n    public void run() {\n    }\n\n}\n",
    ));
}

#[test]
fn render_writes_into_output_dir() {
    let tmp = tempdir().expect("tempdir");
    let (model, config) = write_inputs(tmp.path());

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("quill"));
    cmd.arg("--config").arg(&config).arg("render").arg(&model);
    cmd.assert().success().stdout(predicate::str::contains("Tool.java"));
    assert!(tmp.path().join("gen/org/acme/Tool.java").exists());
}

#[test]
fn missing_model_fails() {
    let tmp = tempdir().expect("tempdir");
    let (_, config) = write_inputs(tmp.path());

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("quill"));
    cmd.arg("--config").arg(&config).arg("render").arg(tmp.path().join("absent.json"));
    cmd.assert().failure().code(1).stderr(predicate::str::contains("Error: Failed to load model"));
}

#[test]
fn init_config_then_refuse_overwrite() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("quill.toml");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("quill"));
    cmd.arg("init-config").arg(&path);
    cmd.assert().success();
    assert!(path.exists());

    let mut again = Command::new(assert_cmd::cargo::cargo_bin!("quill"));
    again.arg("init-config").arg(&path);
    again.assert().failure().stderr(predicate::str::contains("--force"));
}
