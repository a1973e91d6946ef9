use std::fs;

use tempfile::TempDir;

use module_compat::config::ShellConfig;
use module_compat::manifest::{InterfaceStatus, ModuleManifest, evaluate_modules};

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn evaluates_modules_from_config_and_manifest_files() {
    let dir = TempDir::new().unwrap();

    write_fixture(
        &dir,
        "chart.json",
        r#"{
            "name": "@acme/patient-chart",
            "version": "3.1.0",
            "requiredInterfaces": { "shell-api": "2.3", "styleguide": "1.0 2.0" }
        }"#,
    );
    write_fixture(
        &dir,
        "legacy.json",
        r#"{
            "name": "@acme/legacy-forms",
            "version": "0.9.0",
            "requiredInterfaces": { "shell-api": "1.0" }
        }"#,
    );
    let config_path = write_fixture(
        &dir,
        "shell.json",
        &format!(
            r#"{{
                "interfaces": {{ "shell-api": "2.4.1", "styleguide": "2.2.0" }},
                "modules": ["{}", "{}"]
            }}"#,
            dir.path().join("chart.json").display(),
            dir.path().join("legacy.json").display()
        ),
    );

    let config = ShellConfig::load(&config_path).unwrap();
    let manifests: Vec<ModuleManifest> = config
        .modules
        .iter()
        .map(|path| ModuleManifest::load(path).unwrap())
        .collect();

    let reports = evaluate_modules(&config, &manifests);

    assert_eq!(reports.len(), 2);

    let chart = &reports[0];
    assert_eq!(chart.module, "@acme/patient-chart");
    assert!(chart.eligible);

    // legacy module was built against shell-api 1.x, host provides 2.4.1
    let legacy = &reports[1];
    assert!(!legacy.eligible);
    assert_eq!(legacy.checks[0].status, InterfaceStatus::Incompatible);
    assert_eq!(legacy.checks[0].provided.as_deref(), Some("2.4.1"));
}

#[test]
fn missing_interface_shows_up_in_the_report() {
    let dir = TempDir::new().unwrap();

    let manifest_path = write_fixture(
        &dir,
        "chart.json",
        r#"{
            "name": "@acme/patient-chart",
            "version": "3.1.0",
            "requiredInterfaces": { "offline-sync": "1.0" }
        }"#,
    );
    let config_path = write_fixture(
        &dir,
        "shell.json",
        &format!(
            r#"{{ "interfaces": {{ "shell-api": "2.4.1" }}, "modules": ["{}"] }}"#,
            manifest_path.display()
        ),
    );

    let config = ShellConfig::load(&config_path).unwrap();
    let manifests = vec![ModuleManifest::load(&config.modules[0]).unwrap()];

    let reports = evaluate_modules(&config, &manifests);

    assert!(!reports[0].eligible);
    assert_eq!(reports[0].checks[0].interface, "offline-sync");
    assert_eq!(reports[0].checks[0].status, InterfaceStatus::Missing);
    assert_eq!(reports[0].checks[0].provided, None);
}

#[test]
fn reports_serialize_to_camel_case_json() {
    let dir = TempDir::new().unwrap();

    let manifest_path = write_fixture(
        &dir,
        "home.json",
        r#"{ "name": "@acme/home", "version": "1.0.0" }"#,
    );
    let config_path = write_fixture(
        &dir,
        "shell.json",
        &format!(r#"{{ "modules": ["{}"] }}"#, manifest_path.display()),
    );

    let config = ShellConfig::load(&config_path).unwrap();
    let manifests = vec![ModuleManifest::load(&config.modules[0]).unwrap()];
    let reports = evaluate_modules(&config, &manifests);

    let json = serde_json::to_value(&reports).unwrap();
    assert_eq!(json[0]["module"], "@acme/home");
    assert_eq!(json[0]["eligible"], true);
    assert!(json[0]["checks"].as_array().unwrap().is_empty());
}

#[test]
fn config_load_fails_on_missing_file() {
    let dir = TempDir::new().unwrap();
    assert!(ShellConfig::load(&dir.path().join("nope.json")).is_err());
}
