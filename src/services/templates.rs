// Template functions for the generated project files

use crate::models::{ProjectFile, ProjectFileKind, ProjectSpec, TemplateConfig};

pub const REQUIREMENTS_FILE: &str = "requirements.txt";
pub const DOCKERFILE: &str = "Dockerfile";
pub const MAKEFILE: &str = "Makefile";

/// Render every project file, in the order they are written
pub fn render_project_files(spec: &ProjectSpec, config: &TemplateConfig) -> Vec<ProjectFile> {
    ProjectFileKind::ALL
        .iter()
        .map(|&kind| render_file(kind, spec, config))
        .collect()
}

/// Render a single project file
pub fn render_file(kind: ProjectFileKind, spec: &ProjectSpec, config: &TemplateConfig) -> ProjectFile {
    let name = spec.name();
    let include_handler = spec.include_handler();

    match kind {
        ProjectFileKind::EntryScript => ProjectFile::new(
            kind,
            config.entry_file_name(name),
            entry_script(name, include_handler, config),
        ),
        ProjectFileKind::Requirements => ProjectFile::new(kind, REQUIREMENTS_FILE, requirements()),
        ProjectFileKind::Dockerfile => ProjectFile::new(
            kind,
            DOCKERFILE,
            dockerfile(name, include_handler, config),
        ),
        ProjectFileKind::Makefile => ProjectFile::new(kind, MAKEFILE, makefile(name, config)),
    }
}

/// Python entry point, with or without a Lambda handler
pub fn entry_script(name: &str, include_handler: bool, config: &TemplateConfig) -> String {
    let mut content = String::new();

    if include_handler {
        let handler = &config.handler_name;
        content.push_str(&format!("def {handler}(event, context) -> None:\n"));
        content.push_str("    \"\"\"Lambda entry method\"\"\"\n");
        content.push_str(&format!("    # Lambda entry handler: '{name}.{handler}'\n"));
        content.push_str(&format!("    print(\"{name}\")\n"));
        content.push_str("\n\n");
        content.push_str("if __name__ == \"__main__\":\n");
        content.push_str(&format!("    {handler}(\"\", \"\")  # blank input for testing\n"));
    } else {
        content.push_str("if __name__ == \"__main__\":\n");
        content.push_str(&format!("    print(\"{name}\")\n"));
    }

    content
}

/// Placeholder dependency manifest
pub fn requirements() -> String {
    "# Generic requirements.txt\n".to_string()
}

pub fn dockerfile(name: &str, include_handler: bool, config: &TemplateConfig) -> String {
    let mut content = String::new();
    content.push_str("# Generic dockerfile\n");

    if include_handler {
        content.push_str(&format!("FROM {} AS buildStage\n", config.lambda_image));
        content.push('\n');
        content.push_str("COPY ./ ./\n");
        content.push('\n');
        content.push_str(&format!("RUN pip3 install --no-cache-dir -r {REQUIREMENTS_FILE}\n"));
        content.push('\n');
        content.push_str(&format!("CMD [ \"{}.{}\" ]\n", name, config.handler_name));
    } else {
        content.push_str(&format!("FROM {} AS buildStage\n", config.runtime_image));
        content.push('\n');
        content.push_str("COPY ./ ./\n");
        content.push('\n');
        content.push_str(&format!(
            "ENTRYPOINT [ \"{}\", \"{}\" ]\n",
            config.interpreter,
            config.entry_file_name(name)
        ));
    }

    content
}

/// Self-documenting Makefile; `make` with no target prints the help table
pub fn makefile(name: &str, config: &TemplateConfig) -> String {
    let mut content = String::new();

    content.push_str("# Generic Makefile\n");
    content.push_str(".PHONY: help build run clean\n");
    content.push_str(".DEFAULT_GOAL := help\n");
    content.push('\n');

    // Make needs literal tabs; `$$` escapes `$` for the shell
    content.push_str("help: ## Display this help text\n");
    content.push_str(
        "\t@grep -E '^[a-zA-Z_-]+:.*?## .*$$' $(MAKEFILE_LIST) | sort | awk 'BEGIN {FS = \":.*?## \"}; {printf \"\\033[36m%-30s\\033[0m %s\\n\", $$1, $$2}'\n",
    );
    content.push('\n');

    content.push_str("build: ## Build image\n");
    content.push_str(&format!(
        "\tdocker build --platform={} -t {} ./\n",
        config.docker_platform, name
    ));
    content.push('\n');

    content.push_str("run: ## Run image in interactive mode\n");
    content.push_str(&format!("\tdocker run -it {name}\n"));
    content.push('\n');

    content.push_str("clean: ## Remove image\n");
    content.push_str(&format!("\tdocker rmi -f {name}\n"));

    content
}
