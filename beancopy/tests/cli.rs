//! Runs the built binary against the order demo schemas.

use std::{
    path::PathBuf,
    process::{Command, Output},
};

use tempfile::TempDir;

const DEMO: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../demos/orders");

fn demo(file: &str) -> PathBuf {
    PathBuf::from(DEMO).join(file)
}

fn beancopy(dir: &TempDir, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_beancopy"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG").args(args);
    if args.first() != Some(&"completions") {
        for schema in ["common.toml", "v1.toml", "v2.toml"] {
            cmd.arg("-s").arg(demo(schema));
        }
    }
    cmd.output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn generate_writes_class() {
    let dir = TempDir::new().unwrap();
    let config = demo("beancopy.toml");
    let output = beancopy(
        &dir,
        &[
            "generate",
            "com.acme.orders.v1.Order",
            "com.acme.orders.v2.Order",
            "-c",
            config.to_str().unwrap(),
        ],
    );

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout(&output).contains("Generated com.acme.orders.convert.OrderTransformer (3 routines"));

    let java = std::fs::read_to_string(dir.path().join("OrderTransformer.java")).unwrap();
    assert!(java.starts_with("package com.acme.orders.convert;\n"));
    assert!(java.contains("public class OrderTransformer {"));
    assert!(java.contains("r.setQuantity(a.getQty());"));
}

#[test]
fn generate_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output = beancopy(
        &dir,
        &[
            "generate",
            "com.acme.orders.v1.Order",
            "com.acme.orders.v2.Order",
            "--dry-run",
            "--no-timestamp",
        ],
    );

    assert!(output.status.success());
    let printed = stdout(&output);
    assert!(printed.starts_with("── JaxbTransformer.java ──\npackage com.example;"));
    assert!(!dir.path().join("JaxbTransformer.java").exists());
}

#[test]
fn generate_keep_existing() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("Out.java");
    std::fs::write(&target, "// mine").unwrap();

    let output = beancopy(
        &dir,
        &[
            "generate",
            "com.acme.orders.v1.Order",
            "com.acme.orders.v2.Order",
            "-o",
            "Out.java",
            "--keep-existing",
        ],
    );

    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "// mine");
}

#[test]
fn generate_unknown_root_fails() {
    let dir = TempDir::new().unwrap();
    let output = beancopy(
        &dir,
        &["generate", "com.acme.orders.v1.Missing", "com.acme.orders.v2.Order"],
    );

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("com.acme.orders.v1.Missing"));
    assert!(!dir.path().join("JaxbTransformer.java").exists());
}

#[test]
fn check_lists_types() {
    let dir = TempDir::new().unwrap();
    let output = beancopy(&dir, &["check"]);

    assert!(output.status.success());
    let printed = stdout(&output);
    assert!(printed.contains("v1.toml is valid"));
    assert!(printed.contains("- com.acme.orders.v2.Status (enum, 4 constants)"));
}

#[test]
fn explain_json() {
    let dir = TempDir::new().unwrap();
    let output = beancopy(
        &dir,
        &[
            "explain",
            "com.acme.orders.v1.Order",
            "com.acme.orders.v2.Order",
            "--json",
            "--order",
            "fifo",
        ],
    );

    assert!(output.status.success());
    let plan: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(plan["order"], "fifo");
    let routines = plan["unit"]["routines"].as_array().unwrap();
    assert_eq!(routines.len(), 3);
    assert_eq!(routines[0]["pair"]["destination"], "com.acme.orders.v2.Order");
    assert!(!dir.path().join("JaxbTransformer.java").exists());
}

#[test]
fn completions() {
    let dir = TempDir::new().unwrap();
    let output = beancopy(&dir, &["completions", "bash"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("beancopy"));
}
