use pybox::{PyboxError, ProjectGenerator, ProjectSpec, TemplateConfig, WriteMode};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Scenarios from a fresh base directory through a finished project

fn read(dir: &Path, file: &str) -> String {
    fs::read_to_string(dir.join(file)).unwrap()
}

fn base(temp_dir: &TempDir) -> &str {
    temp_dir.path().to_str().unwrap()
}

#[test]
fn test_plain_project_contents() {
    let temp_dir = TempDir::new().unwrap();
    ProjectGenerator::new("demo", base(&temp_dir), false)
        .unwrap()
        .generate()
        .unwrap();

    let project_dir = temp_dir.path().join("demo");

    let entry = read(&project_dir, "demo.py");
    assert!(entry.contains("if __name__ == \"__main__\":"));
    assert!(entry.contains("print(\"demo\")"));

    let docker = read(&project_dir, "Dockerfile");
    assert!(docker.contains("FROM public.ecr.aws/docker/library/python:latest"));
    assert!(docker.contains("ENTRYPOINT [ \"python3\", \"demo.py\" ]"));

    let requirements = read(&project_dir, "requirements.txt");
    assert_eq!(requirements.lines().count(), 1);
    assert!(requirements.starts_with('#'));
}

#[test]
fn test_handler_project_contents() {
    let temp_dir = TempDir::new().unwrap();
    ProjectGenerator::new("demo", base(&temp_dir), true)
        .unwrap()
        .generate()
        .unwrap();

    let project_dir = temp_dir.path().join("demo");

    let entry = read(&project_dir, "demo.py");
    assert!(entry.contains("def lambda_handler(event, context) -> None:"));
    assert!(entry.contains("print(\"demo\")"));
    assert!(entry.contains("lambda_handler(\"\", \"\")"));

    let docker = read(&project_dir, "Dockerfile");
    assert!(docker.contains("FROM public.ecr.aws/lambda/python:latest"));
    assert!(docker.contains("CMD [ \"demo.lambda_handler\" ]"));

    let requirements = read(&project_dir, "requirements.txt");
    assert_eq!(requirements.lines().count(), 1);
}

#[test]
fn test_makefile_is_identical_across_variants() {
    let plain = TempDir::new().unwrap();
    let handler = TempDir::new().unwrap();

    ProjectGenerator::new("demo", base(&plain), false).unwrap().generate().unwrap();
    ProjectGenerator::new("demo", base(&handler), true).unwrap().generate().unwrap();

    let plain_makefile = read(&plain.path().join("demo"), "Makefile");
    let handler_makefile = read(&handler.path().join("demo"), "Makefile");
    assert_eq!(plain_makefile, handler_makefile);

    assert!(plain_makefile.contains(".DEFAULT_GOAL := help"));
    assert!(plain_makefile.contains("-t demo ./"));
    assert!(plain_makefile.contains("docker run -it demo"));
    assert!(plain_makefile.contains("docker rmi -f demo"));
}

#[test]
fn test_invalid_inputs_touch_nothing() {
    let temp_dir = TempDir::new().unwrap();

    for (name, path) in [
        ("my demo", base(&temp_dir).to_string()),
        ("demo", format!("{} ", base(&temp_dir))),
        ("", base(&temp_dir).to_string()),
    ] {
        let result = ProjectSpec::new(name, path.as_str(), false);
        assert!(matches!(result, Err(PyboxError::ValidationError(_))), "{name:?} / {path:?}");
    }

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_distinct_names_share_a_base_directory() {
    let temp_dir = TempDir::new().unwrap();

    for name in ["alpha", "beta"] {
        ProjectGenerator::new(name, base(&temp_dir), false)
            .unwrap()
            .with_write_mode(WriteMode::Staged)
            .generate()
            .unwrap();
    }

    assert!(temp_dir.path().join("alpha").join("alpha.py").exists());
    assert!(temp_dir.path().join("beta").join("beta.py").exists());
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 2);
}

#[test]
fn test_custom_config_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let config = TemplateConfig {
        interpreter: "python3.12".to_string(),
        docker_platform: "linux/arm64".to_string(),
        ..TemplateConfig::default()
    };

    let generator = ProjectGenerator::new("svc", base(&temp_dir), false)
        .unwrap()
        .with_config(config)
        .unwrap();
    generator.generate().unwrap();

    let project_dir = temp_dir.path().join("svc");
    assert!(read(&project_dir, "Dockerfile").contains("ENTRYPOINT [ \"python3.12\", \"svc.py\" ]"));
    assert!(read(&project_dir, "Makefile").contains("--platform=linux/arm64 -t svc ./"));
}
