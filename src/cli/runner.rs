use crate::{
    catalog::framework_display_name,
    cli::{
        args::{Cli, Commands, CreateArgs, ListArgs, PreviewArgs},
        prompt::{DialoguerPrompter, Prompter},
    },
    config::load_registry,
    constants::exit_codes,
    error::{Error, Result},
    generator::{GenerationReport, ProjectGenerator},
    preview::render_tree,
    registry::StructureRegistry,
    structure::{GenerationOptions, ProjectTarget},
};

/// Dispatches a parsed command line and returns the process exit code.
pub fn run(cli: Cli) -> Result<i32> {
    let registry = load_registry(cli.catalog.as_deref())?;
    let runner = Runner::new(&registry, DialoguerPrompter::new());
    match cli.command {
        Commands::Create(args) => runner.create(args),
        Commands::List(args) => {
            print!("{}", runner.list(&args));
            Ok(exit_codes::SUCCESS)
        }
        Commands::Preview(args) => {
            print!("{}", runner.preview(&args)?);
            Ok(exit_codes::SUCCESS)
        }
    }
}

/// Runs the `create`, `list` and `preview` commands against one registry.
pub struct Runner<'a, P: Prompter> {
    registry: &'a StructureRegistry,
    prompter: P,
}

impl<'a, P: Prompter> Runner<'a, P> {
    pub fn new(registry: &'a StructureRegistry, prompter: P) -> Self {
        Self { registry, prompter }
    }

    /// Resolves missing values, confirms and generates.
    pub fn create(&self, args: CreateArgs) -> Result<i32> {
        let Some(options) = self.resolve_options(args)? else {
            println!("Cancelled.");
            return Ok(exit_codes::SUCCESS);
        };

        let report = ProjectGenerator::new(self.registry).generate(&options);
        print_report(&report, &options);
        Ok(if report.success { exit_codes::SUCCESS } else { exit_codes::FAILURE })
    }

    /// Turns command-line values plus prompts into generation options.
    /// Returns `None` when the user declines the final confirmation.
    pub fn resolve_options(&self, args: CreateArgs) -> Result<Option<GenerationOptions>> {
        let interactive = !args.non_interactive;

        let framework = match args.framework {
            Some(framework) => framework,
            None if interactive => self.prompt_framework()?,
            None => return Err(Error::MissingArgument("--framework")),
        };

        let structure = match args.structure {
            Some(structure) => structure,
            None if interactive => self.prompt_structure(&framework)?,
            None => return Err(Error::MissingArgument("--structure")),
        };

        let name = match args.name {
            Some(name) => name,
            None if interactive => {
                self.prompter.project_name("What is the name of your project?")?
            }
            None => return Err(Error::MissingArgument("NAME")),
        };

        let output_path = match args.output {
            Some(output) => output,
            None => std::env::current_dir()?,
        };

        let options = GenerationOptions {
            target: ProjectTarget::from_arg(&name),
            framework,
            structure,
            output_path,
        };

        if interactive && !args.yes {
            println!("{}", format_summary(&options));
            if !self.prompter.confirm("Create project with these settings?", true)? {
                return Ok(None);
            }
        }
        Ok(Some(options))
    }

    /// Frameworks with their structures, optionally filtered to one framework.
    pub fn list(&self, args: &ListArgs) -> String {
        let frameworks: Vec<&str> = match &args.framework {
            Some(framework) => vec![framework.as_str()],
            None => self.registry.list_frameworks(),
        };

        let mut out = String::from("Available structures:\n");
        for framework in frameworks {
            out.push_str(&format!("\n{} ({framework})\n", framework_display_name(framework)));
            let structures = self.registry.get_all_for_framework(framework);
            if structures.is_empty() {
                out.push_str("  (none)\n");
            }
            for s in structures {
                out.push_str(&format!("  {:<18} {} - {}\n", s.structure, s.name, s.description));
            }
        }
        out
    }

    /// Tree view of a structure's directories; nothing is written to disk.
    pub fn preview(&self, args: &PreviewArgs) -> Result<String> {
        let structure = self
            .registry
            .get_by_framework_and_structure(&args.framework, &args.structure)
            .ok_or_else(|| Error::StructureNotFound {
                framework: args.framework.clone(),
                structure: args.structure.clone(),
            })?;

        Ok(format!(
            "{}\n{}\n\n{}",
            structure.name,
            structure.description,
            render_tree("<project>", &structure.directories)
        ))
    }

    fn prompt_framework(&self) -> Result<String> {
        let frameworks = self.registry.list_frameworks();
        let labels: Vec<String> =
            frameworks.iter().map(|f| framework_display_name(f).to_string()).collect();
        let index = self.prompter.select("Which framework would you like to use?", &labels)?;
        Ok(frameworks[index].to_string())
    }

    fn prompt_structure(&self, framework: &str) -> Result<String> {
        let structures = self.registry.get_all_for_framework(framework);
        if structures.is_empty() {
            return Err(Error::StructureNotFound {
                framework: framework.to_string(),
                structure: String::new(),
            });
        }
        let labels: Vec<String> =
            structures.iter().map(|s| format!("{} - {}", s.name, s.description)).collect();
        let index = self.prompter.select("Which project structure?", &labels)?;
        Ok(structures[index].structure.clone())
    }
}

fn format_summary(options: &GenerationOptions) -> String {
    format!(
        "Project:   {}\nFramework: {}\nStructure: {}\nLocation:  {}",
        options.target,
        framework_display_name(&options.framework),
        options.structure,
        options.project_path().display()
    )
}

fn print_report(report: &GenerationReport, options: &GenerationOptions) {
    for warning in &report.warnings {
        eprintln!("warning: {warning}");
    }
    if report.success {
        println!(
            "Created {} directories in {}.",
            report.directories_created.len(),
            options.project_path().display()
        );
    } else {
        for error in &report.errors {
            eprintln!("error: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::path::PathBuf;

    /// Replays canned answers instead of reading from a terminal.
    #[derive(Default)]
    struct ScriptedPrompter {
        selections: RefCell<VecDeque<usize>>,
        names: RefCell<VecDeque<String>>,
        confirmations: RefCell<VecDeque<bool>>,
        seen_items: RefCell<Vec<Vec<String>>>,
    }

    impl Prompter for &ScriptedPrompter {
        fn select(&self, _prompt: &str, items: &[String]) -> Result<usize> {
            self.seen_items.borrow_mut().push(items.to_vec());
            Ok(self.selections.borrow_mut().pop_front().unwrap())
        }

        fn project_name(&self, _prompt: &str) -> Result<String> {
            Ok(self.names.borrow_mut().pop_front().unwrap())
        }

        fn confirm(&self, _prompt: &str, _default: bool) -> Result<bool> {
            Ok(self.confirmations.borrow_mut().pop_front().unwrap())
        }
    }

    fn full_args(output: PathBuf) -> CreateArgs {
        CreateArgs {
            name: Some("demo".into()),
            framework: Some("express".into()),
            structure: Some("mvc".into()),
            output: Some(output),
            yes: true,
            non_interactive: false,
        }
    }

    #[test]
    fn create_with_all_arguments_never_prompts() {
        let tmp = tempfile::tempdir().unwrap();
        let registry = StructureRegistry::with_builtin_catalog();
        let prompter = ScriptedPrompter::default();
        let runner = Runner::new(&registry, &prompter);

        let code = runner.create(full_args(tmp.path().to_path_buf())).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
        assert!(tmp.path().join("demo/src/views/layouts").is_dir());
        assert!(prompter.seen_items.borrow().is_empty());
    }

    #[test]
    fn create_prompts_for_missing_values() {
        let tmp = tempfile::tempdir().unwrap();
        let registry = StructureRegistry::with_builtin_catalog();
        let prompter = ScriptedPrompter::default();
        // nextjs, then pages-router
        prompter.selections.borrow_mut().extend([2, 1]);
        prompter.names.borrow_mut().push_back("web".into());
        prompter.confirmations.borrow_mut().push_back(true);
        let runner = Runner::new(&registry, &prompter);

        let args = CreateArgs { output: Some(tmp.path().to_path_buf()), ..Default::default() };
        let options = runner.resolve_options(args).unwrap().unwrap();

        assert_eq!(options.framework, "nextjs");
        assert_eq!(options.structure, "pages-router");
        assert_eq!(options.target, ProjectTarget::NewProject("web".into()));
        let seen = prompter.seen_items.borrow();
        assert_eq!(seen[0], vec!["React", "Vue", "Next.js", "Angular", "Express"]);
        assert_eq!(seen[1].len(), 4);
    }

    #[test]
    fn declining_confirmation_creates_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let registry = StructureRegistry::with_builtin_catalog();
        let prompter = ScriptedPrompter::default();
        prompter.confirmations.borrow_mut().push_back(false);
        let runner = Runner::new(&registry, &prompter);

        let args = CreateArgs { yes: false, ..full_args(tmp.path().to_path_buf()) };
        assert_eq!(runner.create(args).unwrap(), exit_codes::SUCCESS);
        assert!(!tmp.path().join("demo").exists());
    }

    #[test]
    fn non_interactive_reports_missing_values() {
        let registry = StructureRegistry::with_builtin_catalog();
        let prompter = ScriptedPrompter::default();
        let runner = Runner::new(&registry, &prompter);

        let args = CreateArgs { non_interactive: true, ..Default::default() };
        let err = runner.resolve_options(args).unwrap_err();
        assert!(matches!(err, Error::MissingArgument("--framework")));
    }

    #[test]
    fn failed_generation_returns_failure_code() {
        let tmp = tempfile::tempdir().unwrap();
        let registry = StructureRegistry::with_builtin_catalog();
        let prompter = ScriptedPrompter::default();
        let runner = Runner::new(&registry, &prompter);

        let args = CreateArgs { structure: Some("unknown".into()), ..full_args(tmp.path().to_path_buf()) };
        assert_eq!(runner.create(args).unwrap(), exit_codes::FAILURE);
    }

    #[test]
    fn unknown_framework_cannot_prompt_for_structure() {
        let registry = StructureRegistry::with_builtin_catalog();
        let prompter = ScriptedPrompter::default();
        let runner = Runner::new(&registry, &prompter);

        let args = CreateArgs { framework: Some("svelte".into()), ..Default::default() };
        assert!(matches!(
            runner.resolve_options(args).unwrap_err(),
            Error::StructureNotFound { .. }
        ));
    }

    #[test]
    fn list_shows_every_framework() {
        let registry = StructureRegistry::with_builtin_catalog();
        let runner = Runner::new(&registry, DialoguerPrompter::new());
        let out = runner.list(&ListArgs::default());
        for heading in ["React (react)", "Vue (vue)", "Next.js (nextjs)", "Angular (angular)", "Express (express)"] {
            assert!(out.contains(heading), "missing {heading}");
        }
        assert!(out.contains("Express MVC"));
    }

    #[test]
    fn list_filters_by_framework() {
        let registry = StructureRegistry::with_builtin_catalog();
        let runner = Runner::new(&registry, DialoguerPrompter::new());
        let out = runner.list(&ListArgs { framework: Some("express".into()) });
        assert!(out.contains("Express Layered"));
        assert!(!out.contains("React"));

        let out = runner.list(&ListArgs { framework: Some("svelte".into()) });
        assert!(out.contains("(none)"));
    }

    #[test]
    fn preview_renders_without_touching_disk() {
        let registry = StructureRegistry::with_builtin_catalog();
        let runner = Runner::new(&registry, DialoguerPrompter::new());
        let out = runner
            .preview(&PreviewArgs { framework: "express".into(), structure: "mvc".into() })
            .unwrap();
        assert!(out.starts_with("Express MVC\n"));
        assert!(out.contains("<project>/\n├── src/\n"));
        assert!(out.contains("│   ├── views/\n│   │   ├── layouts/\n"));
    }

    #[test]
    fn preview_of_unknown_structure_fails() {
        let registry = StructureRegistry::with_builtin_catalog();
        let runner = Runner::new(&registry, DialoguerPrompter::new());
        let err = runner
            .preview(&PreviewArgs { framework: "react".into(), structure: "nope".into() })
            .unwrap_err();
        assert!(err.to_string().contains("not found for framework"));
    }
}
