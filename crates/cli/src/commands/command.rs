use std::{fs, path::PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Arg, ArgMatches, Command};
use param_env::Environment;
use request_params::{GraphQLRequestParams, RequestParamConverter};

pub trait CommandDefinition {
    fn command(&self) -> Command;

    fn execute(&self, matches: &ArgMatches, env: &dyn Environment) -> Result<()>;
}

pub struct SubcommandDefinition {
    pub name: &'static str,
    pub about: &'static str,
    pub command_definitions: Vec<Box<dyn CommandDefinition>>,
}

impl SubcommandDefinition {
    pub fn new(
        name: &'static str,
        about: &'static str,
        command_definitions: Vec<Box<dyn CommandDefinition>>,
    ) -> Self {
        Self {
            name,
            about,
            command_definitions,
        }
    }
}

impl CommandDefinition for SubcommandDefinition {
    fn command(&self) -> Command {
        Command::new(self.name)
            .about(self.about)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .disable_help_subcommand(true)
            .subcommands(
                self.command_definitions
                    .iter()
                    .map(|command_definition| command_definition.command()),
            )
    }

    fn execute(&self, matches: &ArgMatches, env: &dyn Environment) -> Result<()> {
        let (name, sub_matches) = matches
            .subcommand()
            .ok_or_else(|| anyhow!("A subcommand is required"))?;

        for command_definition in &self.command_definitions {
            if command_definition.command().get_name() == name {
                return command_definition.execute(sub_matches, env);
            }
        }

        Err(anyhow!("Unknown subcommand: {}", name))
    }
}

pub fn get_required<T: Clone + Send + Sync + 'static>(
    matches: &ArgMatches,
    arg_id: &str,
) -> Result<T> {
    get(matches, arg_id).ok_or_else(|| anyhow!("Required argument `{}` is not present", arg_id))
}

pub fn get<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, arg_id: &str) -> Option<T> {
    matches.get_one::<T>(arg_id).cloned()
}

pub fn query_arg() -> Arg {
    Arg::new("query")
        .help("The GraphQL query, or @<path> to read it from a file.")
        .long("query")
        .short('q')
        .required(true)
        .num_args(1)
}

pub fn operation_name_arg() -> Arg {
    Arg::new("operation-name")
        .help("The name of the operation to run.")
        .long("operation-name")
        .short('n')
        .required(false)
        .num_args(1)
}

pub fn variables_arg() -> Arg {
    Arg::new("variables")
        .help("The variables as a JSON object, or @<path> to read them from a file.")
        .long("variables")
        .short('v')
        .required(false)
        .num_args(1)
}

pub fn encoding_arg() -> Arg {
    Arg::new("encoding")
        .help("Text encoding of the input")
        .long_help("Text encoding of the input. If not specified, `GQL_URL_ARGUMENT_ENCODING` is used (default: UTF-8).")
        .long("encoding")
        .short('e')
        .required(false)
        .num_args(1)
}

pub fn input_file_arg() -> Arg {
    Arg::new("file")
        .help("Read the input from this file instead of stdin.")
        .required(false)
        .value_parser(clap::value_parser!(PathBuf))
        .index(1)
}

/// Values starting with `@` name a file whose content is the value.
pub fn read_text_arg(value: &str) -> Result<String> {
    match value.strip_prefix('@') {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read file `{path}`"))
        }
        None => Ok(value.to_string()),
    }
}

pub fn params_from_matches(matches: &ArgMatches) -> Result<GraphQLRequestParams> {
    let query: String = get_required(matches, "query")?;
    let operation_name: Option<String> = get(matches, "operation-name");
    let variables = get::<String>(matches, "variables")
        .map(|variables| read_text_arg(&variables))
        .transpose()?;

    Ok(GraphQLRequestParams::new(
        operation_name,
        read_text_arg(&query)?,
        variables,
    ))
}

pub fn converter(env: &dyn Environment) -> Result<RequestParamConverter> {
    Ok(RequestParamConverter::from_env(env)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn request_command() -> Command {
        Command::new("test")
            .arg(query_arg())
            .arg(operation_name_arg())
            .arg(variables_arg())
    }

    #[test]
    fn inline_values() {
        let matches = request_command()
            .try_get_matches_from(["test", "-q", "query { a }", "-n", "A", "-v", "{\"x\":1}"])
            .unwrap();

        assert_eq!(
            params_from_matches(&matches).unwrap(),
            GraphQLRequestParams::new(
                Some("A".to_string()),
                "query { a }",
                Some("{\"x\":1}".to_string())
            )
        );
    }

    #[test]
    fn values_from_files() {
        let mut query_file = tempfile::NamedTempFile::new().unwrap();
        write!(query_file, "query {{\n  a\n}}\n").unwrap();

        let query_arg = format!("@{}", query_file.path().display());
        let matches = request_command()
            .try_get_matches_from(["test", "--query", query_arg.as_str()])
            .unwrap();

        let params = params_from_matches(&matches).unwrap();
        assert_eq!(params.query(), "query {\n  a\n}\n");
        assert_eq!(params.operation_name(), None);
        assert_eq!(params.variables(), None);
    }

    #[test]
    fn missing_file() {
        assert!(read_text_arg("@/definitely/not/here.graphql").is_err());
        assert_eq!(read_text_arg("plain").unwrap(), "plain");
    }

    #[test]
    fn query_is_required() {
        assert!(request_command().try_get_matches_from(["test"]).is_err());
    }
}
