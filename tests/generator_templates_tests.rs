use std::fs;

use pomforge::generator::{
    default_dependencies, write_aggregator_pom, write_file, write_health_check_controller,
    write_main_application, write_module_pom, write_sample_class,
};

#[test]
fn test_write_file_creates_missing_directories() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let dir = tmp.path().join("a").join("b").join("c");

    let path = write_file(&dir, "hello.txt", "hi").expect("write");

    assert_eq!(path, dir.join("hello.txt"));
    assert_eq!(fs::read_to_string(&path).expect("read back"), "hi");
}

#[test]
fn test_write_file_overwrites_existing_content() {
    let tmp = tempfile::tempdir().expect("temp dir");

    write_file(tmp.path(), "pom.xml", "old").expect("first write");
    write_file(tmp.path(), "pom.xml", "new").expect("second write");

    let content = fs::read_to_string(tmp.path().join("pom.xml")).expect("read back");
    assert_eq!(content, "new");
}

#[test]
fn test_template_writers() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let project_dir = tmp.path().join("demo");
    let module_dir = project_dir.join("core");
    let src_dir = module_dir.join("src/main/java/org/acme/core");
    let controllers_dir = src_dir.join("controllers");

    write_module_pom(&module_dir, "org.acme", "demo", "1.0.0", "core").expect("module pom");
    write_main_application(&src_dir, "org.acme", "core").expect("entry point");
    write_health_check_controller(&controllers_dir, "org.acme", "core").expect("health check");
    write_sample_class(&src_dir, "org.acme", "core").expect("placeholder");
    write_aggregator_pom(
        &project_dir,
        "org.acme",
        "demo",
        "1.0.0",
        "17",
        &["core".to_string()],
        &default_dependencies(),
    )
    .expect("aggregator pom");

    let module_pom = fs::read_to_string(module_dir.join("pom.xml")).expect("module pom");
    assert!(module_pom.contains("<parent>"));
    assert!(module_pom.contains("<groupId>org.acme.core</groupId>"));
    assert!(module_pom.contains("<artifactId>core</artifactId>"));
    assert!(module_pom.contains("<packaging>jar</packaging>"));

    let main_app =
        fs::read_to_string(src_dir.join("MainApplication.java")).expect("entry point");
    assert!(main_app.contains("package org.acme.core;"));
    assert!(main_app.contains("public static void main(String[] args)"));

    let health = fs::read_to_string(controllers_dir.join("HealthCheckController.java"))
        .expect("health check");
    assert!(health.contains("package org.acme.core.controllers;"));
    assert!(health.contains("return \"Service is up and running!\";"));

    let placeholder = fs::read_to_string(src_dir.join("SampleClass.java")).expect("placeholder");
    assert!(placeholder.contains("public class SampleClass"));
    assert!(placeholder.contains("Hello, World! This is core module."));

    let aggregator = fs::read_to_string(project_dir.join("pom.xml")).expect("aggregator");
    assert!(aggregator.contains("<packaging>pom</packaging>"));
    assert!(aggregator.contains("<module>core</module>"));
    assert!(aggregator.contains("<groupId>org.springframework.boot</groupId>"));
    assert!(aggregator.contains("<artifactId>spring-boot-starter-logging</artifactId>"));
}

#[test]
fn test_aggregator_pom_is_well_formed_xml_prolog() {
    let tmp = tempfile::tempdir().expect("temp dir");

    write_aggregator_pom(tmp.path(), "org.acme", "demo", "1.0.0", "17", &[], &[])
        .expect("aggregator pom");

    let aggregator = fs::read_to_string(tmp.path().join("pom.xml")).expect("aggregator");
    assert!(aggregator.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(aggregator.contains("<modelVersion>4.0.0</modelVersion>"));
    assert!(aggregator.trim_end().ends_with("</project>"));
}
