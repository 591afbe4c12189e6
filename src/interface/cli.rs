use crate::commands::{DestroyGenerator, Invoker, RunGenerator};
use crate::error::{Error, Result};
use crate::generators::{Generator, GeneratorContext, GeneratorLoader, GeneratorRegistry};
use crate::interface::config::ProjectConfig;
use crate::interface::output::{Logger, ProgressReporter};
use crate::models::Params;
use clap::{Arg, ArgAction, ArgMatches};
use std::fs;

/// Build the full command tree for the given registry.
///
/// `generate` and `destroy` each get one subcommand per registered
/// generator, synthesized from that generator's declared CLI metadata;
/// the generator's usage file becomes the subcommand's after-help text.
pub fn build_cli(registry: &GeneratorRegistry) -> clap::Command {
    let mut generate = clap::Command::new("generate")
        .visible_alias("g")
        .about("Run chosen generator")
        .subcommand_required(true)
        .arg_required_else_help(true);
    let mut destroy = clap::Command::new("destroy")
        .visible_alias("d")
        .about("Remove files a generator previously created")
        .subcommand_required(true)
        .arg_required_else_help(true);

    for (_, generator) in registry.iter() {
        generate = generate.subcommand(generator_command(generator.as_ref()));
        destroy = destroy.subcommand(generator_command(generator.as_ref()));
    }

    clap::Command::new("scaffgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scaffolds project artifacts from generator templates")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Verbose output"),
        )
        .subcommand(generate)
        .subcommand(destroy)
        .subcommand(clap::Command::new("list").about("List registered generators"))
}

/// One subcommand synthesized from a generator's declarative metadata.
fn generator_command(generator: &dyn Generator) -> clap::Command {
    let mut command = clap::Command::new(generator.name().to_string());

    if let Ok(usage) = fs::read_to_string(generator.usage()) {
        command = command.after_help(usage);
    }

    for argument in generator.cli_arguments() {
        let mut arg = Arg::new(argument.name.clone())
            .value_name(argument.name.clone())
            .required(argument.required);
        if argument.nargs != 1 {
            arg = arg.num_args(argument.nargs);
        }
        command = command.arg(arg);
    }

    for option in generator.cli_options() {
        let mut arg = Arg::new(option.long.clone())
            .long(option.long.clone())
            .help(option.help.clone());
        if let Some(short) = option.short {
            arg = arg.short(short);
        }
        arg = if option.is_flag {
            arg.action(ArgAction::SetTrue)
        } else {
            arg.action(ArgAction::Set)
        };
        command = command.arg(arg);
    }

    command
}

/// Collect parsed argv back into params, guided by the same metadata
/// the subcommand was built from. Positional argument keys are
/// lowercased on the way in (`NAME` becomes the `name` context value).
pub fn collect_params(generator: &dyn Generator, matches: &ArgMatches) -> Params {
    let mut params = Params::new();

    for argument in generator.cli_arguments() {
        let key = argument.name.to_lowercase();
        if argument.nargs > 1 {
            if let Some(values) = matches.get_many::<String>(&argument.name) {
                params.insert(key, values.cloned().collect::<Vec<_>>());
            }
        } else if let Some(value) = matches.get_one::<String>(&argument.name) {
            params.insert(key, value.as_str());
        }
    }

    for option in generator.cli_options() {
        if option.is_flag {
            params.insert(option.long.clone(), matches.get_flag(&option.long));
        } else if let Some(value) = matches.get_one::<String>(&option.long) {
            params.insert(option.long.clone(), value.as_str());
        }
    }

    params
}

enum Operation {
    New,
    Destroy,
}

/// CLI entrypoint: load the registry, parse argv, dispatch.
pub fn run() -> Result<()> {
    let registry = GeneratorLoader::new().load()?;
    let matches = build_cli(&registry).get_matches();
    let logger = Logger::new(matches.get_flag("verbose"));
    if registry.is_empty() {
        logger.warning("No generators registered");
    }
    logger.verbose(&format!(
        "Registered generators: {}",
        registry.names().join(", ")
    ));

    match matches.subcommand() {
        Some(("generate", sub)) => dispatch(Operation::New, &registry, sub, &logger),
        Some(("destroy", sub)) => dispatch(Operation::Destroy, &registry, sub, &logger),
        Some(("list", _)) => {
            for name in registry.names() {
                logger.info(name);
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

fn dispatch(
    operation: Operation,
    registry: &GeneratorRegistry,
    matches: &ArgMatches,
    logger: &Logger,
) -> Result<()> {
    let (name, generator_matches) = match matches.subcommand() {
        Some(pair) => pair,
        None => return Ok(()),
    };
    let generator = registry
        .get(name)
        .cloned()
        .ok_or_else(|| Error::UnknownGenerator(name.to_string()))?;

    let project_root = std::env::current_dir()?;
    let config = ProjectConfig::load(&project_root)?;
    let context = GeneratorContext::new(&config, project_root)?;
    let params = collect_params(generator.as_ref(), generator_matches);

    let mut progress = ProgressReporter::new(logger.clone());
    let mut invoker = Invoker::new();
    let message;
    match operation {
        Operation::New => {
            progress.start(&format!("Running generator '{}'", generator.name()));
            message = format!("Generator '{}' finished", generator.name());
            invoker.set_on_start(Box::new(RunGenerator::new(
                generator.clone(),
                context,
                params,
            )));
        }
        Operation::Destroy => {
            progress.start(&format!(
                "Destroying generator '{}' artifacts",
                generator.name()
            ));
            message = format!("Generator '{}' artifacts removed", generator.name());
            invoker.set_on_start(Box::new(DestroyGenerator::new(
                generator.clone(),
                context,
                params,
            )));
        }
    }
    invoker.set_on_finish(Box::new(ReportCompletion {
        progress: progress.clone(),
        message,
    }));

    let result = invoker.execute();
    if result.is_err() {
        progress.fail();
    }
    result
}

/// Finish-phase command: clears the spinner and reports completion.
/// Suppressed automatically when the start phase fails.
struct ReportCompletion {
    progress: ProgressReporter,
    message: String,
}

impl crate::commands::Command for ReportCompletion {
    fn execute(&mut self) -> Result<()> {
        self.progress.complete(&self.message);
        Ok(())
    }
}
